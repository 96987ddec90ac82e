//! Phone Input widget descriptor.
//!
//! Declares the editable properties, style options, and emitted events of
//! the Phone Input component for the host builder. The descriptor carries
//! no phone-number parsing or validation logic; `isValid` in the event
//! payloads is declared shape that the host runtime populates.

use widgetry::{load, load::LoadError, prelude::*};

/// Registry name of the Phone Input widget.
pub const WIDGET_NAME: &str = "phone-input";

/// Countries selectable as the dialing default, as (ISO code, label).
pub const COUNTRIES: &[(&str, &str)] = &[
    ("fi", "Finland"),
    ("se", "Sweden"),
    ("no", "Norway"),
    ("dk", "Denmark"),
    ("is", "Iceland"),
    ("us", "United States"),
    ("gb", "United Kingdom"),
    ("de", "Germany"),
    ("fr", "France"),
    ("es", "Spain"),
    ("it", "Italy"),
];

/// Build the Phone Input descriptor for the given build profile. Editor
/// builds carry binding tooltips and property help; runtime builds strip
/// them.
#[must_use]
pub fn descriptor(profile: Profile) -> Widget {
    let mut widget = Widget {
        name: WIDGET_NAME.to_string(),
        editor: EditorMeta {
            label: LocaleMap::en("Phone Input"),
            icon: "phone".to_string(),
        },
        properties: properties(),
        trigger_events: trigger_events(),
    };

    if !profile.keeps_editor_hints() {
        widget.strip_editor_hints();
    }

    widget
}

/// Register the Phone Input widget with the global registry.
pub fn register(profile: Profile) -> Result<(), LoadError> {
    load::register(descriptor(profile))
}

fn properties() -> PropertyList {
    PropertyList {
        properties: vec![
            setting_property(
                "initialValue",
                "Initial Value",
                PropertyType::Text,
                Value::from(""),
                "Initial phone number value",
                "Set the initial phone number value. Can be bound to a variable.",
            ),
            setting_property(
                "placeholder",
                "Placeholder",
                PropertyType::Text,
                Value::from("Enter phone number"),
                "Placeholder text shown when input is empty",
                "Placeholder text displayed in the input field",
            ),
            default_country(),
            setting_property(
                "disabled",
                "Disabled",
                PropertyType::OnOff,
                Value::from(false),
                "Enable or disable the input field",
                "Disable the input to prevent user interaction",
            ),
            style_property("inputHeight", "Input Height", PropertyType::Length, "40px"),
            style_property("fontSize", "Font Size", PropertyType::Length, "14px"),
            style_property("borderColor", "Border Color", PropertyType::Color, "#d1d5db"),
            style_property(
                "focusBorderColor",
                "Focus Border Color",
                PropertyType::Color,
                "#3b82f6",
            ),
            style_property("borderRadius", "Border Radius", PropertyType::Length, "4px"),
        ],
    }
}

fn default_country() -> Property {
    let mut property = setting_property(
        "defaultCountry",
        "Default Country",
        PropertyType::TextSelect,
        Value::from("fi"),
        "ISO country code (e.g., fi, se, no, dk, us, gb)",
        "Set the default country for phone number formatting",
    );

    property.options = Some(SelectOptions {
        options: COUNTRIES
            .iter()
            .map(|(value, label)| SelectOption::new(*value, *label))
            .collect(),
    });

    property
}

// Settings properties all ship with binding tooltips and property help.
fn setting_property(
    key: &str,
    label: &str,
    ty: PropertyType,
    default_value: Value,
    tooltip: &str,
    help: &str,
) -> Property {
    Property {
        key: key.to_string(),
        label: LocaleMap::en(label),
        ty,
        section: Section::Settings,
        options: None,
        binding_validation: Some(BindingValidation::new(default_value.runtime_type(), tooltip)),
        property_help: Some(PropertyHelp::from(help)),
        default_value,
        bindable: true,
    }
}

fn style_property(key: &str, label: &str, ty: PropertyType, default_value: &str) -> Property {
    Property {
        key: key.to_string(),
        label: LocaleMap::en(label),
        ty,
        section: Section::Style,
        options: None,
        default_value: Value::from(default_value),
        bindable: true,
        binding_validation: None,
        property_help: None,
    }
}

fn trigger_events() -> TriggerEventList {
    TriggerEventList {
        events: vec![
            TriggerEvent {
                name: "change".to_string(),
                label: LocaleMap::en("On Change"),
                payload: PayloadShape::new()
                    .with("value", "")
                    .with("isValid", false)
                    .with("country", ""),
                default: true,
            },
            TriggerEvent {
                name: "focus".to_string(),
                label: LocaleMap::en("On Focus"),
                payload: PayloadShape::new(),
                default: false,
            },
            TriggerEvent {
                name: "blur".to_string(),
                label: LocaleMap::en("On Blur"),
                payload: PayloadShape::new().with("value", "").with("isValid", false),
                default: false,
            },
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::collections::BTreeSet;

    #[test]
    fn descriptor_passes_full_validation() {
        descriptor(Profile::Editor)
            .check()
            .expect("editor descriptor should validate");
        descriptor(Profile::Runtime)
            .check()
            .expect("runtime descriptor should validate");
    }

    #[test]
    fn defaults_match_their_declared_types() {
        for property in descriptor(Profile::Editor).properties.iter() {
            assert_eq!(
                property.default_value.runtime_type(),
                property.ty.expected_runtime_type(),
                "property '{}' default has the wrong runtime type",
                property.key
            );
        }
    }

    #[test]
    fn default_country_is_finland_and_sweden_is_selectable() {
        let widget = descriptor(Profile::Runtime);
        let country = widget.properties.get("defaultCountry").expect("defaultCountry exists");

        assert_eq!(country.default_value, Value::from("fi"));

        let options = country.options.as_ref().expect("options are declared");
        assert!(options.contains_value("fi"));
        assert_eq!(options.len(), 11);

        let sweden = options.get("se").expect("Sweden is selectable");
        assert_eq!(sweden.label, "Sweden");
    }

    #[test]
    fn country_options_stay_within_the_supported_set() {
        use widgetry::{
            base::validator::{Validator, intl::IsoCountry},
            visitor::Issues,
        };

        let widget = descriptor(Profile::Runtime);
        let country = widget.properties.get("defaultCountry").expect("defaultCountry exists");
        let options = country.options.as_ref().expect("options are declared");

        for value in options.values() {
            let mut issues = Issues::new();
            IsoCountry.validate(value, &mut issues);
            assert!(issues.is_empty(), "'{value}' should be a supported country code");
        }
    }

    #[test]
    fn property_keys_and_event_names_are_unique() {
        let widget = descriptor(Profile::Editor);

        let keys: BTreeSet<&str> = widget.properties.iter().map(|p| p.key.as_str()).collect();
        assert_eq!(keys.len(), widget.properties.len());

        let names: BTreeSet<&str> =
            widget.trigger_events.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names.len(), widget.trigger_events.len());
    }

    #[test]
    fn change_event_is_the_single_default() {
        let widget = descriptor(Profile::Runtime);

        let defaults: Vec<&TriggerEvent> =
            widget.trigger_events.iter().filter(|e| e.default).collect();
        assert_eq!(defaults.len(), 1);
        assert_eq!(defaults[0].name, "change");
        assert_eq!(widget.trigger_events.default_event().map(|e| e.name.as_str()), Some("change"));
    }

    #[test]
    fn change_payload_has_exactly_value_validity_and_country() {
        let widget = descriptor(Profile::Runtime);
        let change = widget.trigger_events.get("change").expect("change exists");

        assert_eq!(change.payload.len(), 3);
        assert_eq!(change.payload.runtime_type("value"), Some(RuntimeType::String));
        assert_eq!(change.payload.runtime_type("isValid"), Some(RuntimeType::Boolean));
        assert_eq!(change.payload.runtime_type("country"), Some(RuntimeType::String));
    }

    #[test]
    fn blur_carries_value_and_validity_and_focus_is_payload_free() {
        let widget = descriptor(Profile::Runtime);

        let blur = widget.trigger_events.get("blur").expect("blur exists");
        assert_eq!(blur.payload.len(), 2);
        assert_eq!(blur.payload.runtime_type("value"), Some(RuntimeType::String));
        assert_eq!(blur.payload.runtime_type("isValid"), Some(RuntimeType::Boolean));

        let focus = widget.trigger_events.get("focus").expect("focus exists");
        assert!(focus.payload.is_empty());
    }

    #[test]
    fn disabled_is_an_off_toggle() {
        let widget = descriptor(Profile::Runtime);
        let disabled = widget.properties.get("disabled").expect("disabled exists");

        assert_eq!(disabled.ty, PropertyType::OnOff);
        assert_eq!(disabled.section, Section::Settings);
        assert_eq!(disabled.default_value, Value::from(false));
    }

    #[test]
    fn border_radius_is_a_four_pixel_length() {
        let widget = descriptor(Profile::Runtime);
        let radius = widget.properties.get("borderRadius").expect("borderRadius exists");

        assert_eq!(radius.ty, PropertyType::Length);
        assert_eq!(radius.section, Section::Style);
        assert_eq!(radius.default_value, Value::from("4px"));
    }

    #[test]
    fn settings_and_style_sections_group_as_declared() {
        let widget = descriptor(Profile::Runtime);

        assert_eq!(widget.properties.in_section(Section::Settings).count(), 4);
        assert_eq!(widget.properties.in_section(Section::Style).count(), 5);
        assert!(widget.properties.iter().all(|p| p.bindable));
    }

    #[test]
    fn editor_profile_keeps_hints_and_runtime_strips_them() {
        let editor = descriptor(Profile::Editor);
        assert!(editor.has_editor_hints());

        let initial = editor.properties.get("initialValue").expect("initialValue exists");
        let validation = initial.binding_validation.as_ref().expect("hint survives editor build");
        assert_eq!(validation.ty, RuntimeType::String);
        assert_eq!(validation.tooltip, "Initial phone number value");

        assert!(!descriptor(Profile::Runtime).has_editor_hints());
    }

    #[test]
    fn runtime_wire_shape_matches_the_manifest_format() {
        let widget = descriptor(Profile::Runtime);
        let disabled = widget.properties.get("disabled").expect("disabled exists");

        assert_eq!(
            serde_json::to_value(disabled).expect("serialization should pass"),
            json!({
                "key": "disabled",
                "label": { "en": "Disabled" },
                "type": "OnOff",
                "section": "settings",
                "defaultValue": false,
                "bindable": true
            })
        );
    }

    #[test]
    fn round_trips_identically_through_json() {
        for profile in [Profile::Editor, Profile::Runtime] {
            let widget = descriptor(profile);
            let json = serde_json::to_string(&widget).expect("serialization should pass");
            let reparsed: Widget = serde_json::from_str(&json).expect("round-trip should load");

            assert_eq!(widget, reparsed, "{profile} descriptor should round-trip");
        }
    }

    #[test]
    fn registers_into_the_global_registry() {
        register(Profile::Editor).expect("registration should pass");

        let registry = get_registry().expect("registry should validate");
        let widget = registry.try_get(WIDGET_NAME).expect("phone-input is registered");
        assert_eq!(widget.editor.label.resolve("en"), Some("Phone Input"));
    }
}
