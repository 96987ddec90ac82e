use crate::{build::validate::validate_widget_name, prelude::*, visit::ValidateVisitor};

///
/// Widget
/// Descriptor for a single visual component: palette display metadata,
/// configurable properties, and the events the widget emits. Declared
/// once, registered, and never mutated afterwards — the host reads it at
/// load time to render the property panel and wire event bindings.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Widget {
    pub name: String,
    pub editor: EditorMeta,
    pub properties: PropertyList,
    pub trigger_events: TriggerEventList,
}

impl Widget {
    /// Drop design-time metadata, producing the runtime-bundle shape.
    pub fn strip_editor_hints(&mut self) {
        for property in &mut self.properties.properties {
            property.binding_validation = None;
            property.property_help = None;
        }
    }

    /// True when any property still carries design-time metadata.
    #[must_use]
    pub fn has_editor_hints(&self) -> bool {
        self.properties.iter().any(Property::has_editor_hints)
    }

    /// Validate this descriptor in isolation, outside the registry.
    pub fn check(&self) -> Result<(), ErrorTree> {
        ValidateVisitor::check(self)
    }
}

impl ValidateNode for Widget {
    fn validate(&self) -> Result<(), ErrorTree> {
        let mut errs = ErrorTree::new();

        if let Err(e) = validate_widget_name(&self.name) {
            errs.add(e);
        }

        errs.result()
    }
}

impl VisitableNode for Widget {
    fn route_key(&self) -> String {
        self.name.clone()
    }

    fn drive<V: Visitor>(&self, v: &mut V) {
        self.editor.accept(v);
        self.properties.accept(v);
        self.trigger_events.accept(v);
    }
}

///
/// EditorMeta
/// Palette display metadata for the host editor.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct EditorMeta {
    pub label: LocaleMap,
    pub icon: String,
}

impl ValidateNode for EditorMeta {
    fn validate(&self) -> Result<(), ErrorTree> {
        let mut errs = ErrorTree::new();

        if self.icon.is_empty() {
            err!(errs, "icon is empty");
        }

        errs.result()
    }
}

impl VisitableNode for EditorMeta {
    fn route_key(&self) -> String {
        "editor".to_string()
    }

    fn drive<V: Visitor>(&self, v: &mut V) {
        self.label.accept(v);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn widget(name: &str) -> Widget {
        Widget {
            name: name.to_string(),
            editor: EditorMeta {
                label: LocaleMap::en("Phone Input"),
                icon: "phone".to_string(),
            },
            properties: PropertyList::default(),
            trigger_events: TriggerEventList::default(),
        }
    }

    #[test]
    fn validate_rejects_non_kebab_names() {
        let err = widget("PhoneInput").validate().expect_err("camel name must fail");
        assert!(err.to_string().contains("must be kebab-case"), "got: {err}");
    }

    #[test]
    fn check_routes_nested_failures_to_the_offending_key() {
        let mut widget = widget("phone-input");
        widget.editor.icon = String::new();

        let err = widget.check().expect_err("empty icon must fail");
        assert!(
            err.to_string().contains("phone-input.editor: icon is empty"),
            "got: {err}"
        );
    }

    #[test]
    fn strip_editor_hints_clears_design_time_metadata() {
        let mut widget = widget("phone-input");
        widget.properties.properties.push(Property {
            key: "initialValue".to_string(),
            label: LocaleMap::en("Initial Value"),
            ty: PropertyType::Text,
            section: Section::Settings,
            options: None,
            default_value: Value::from(""),
            bindable: true,
            binding_validation: Some(BindingValidation::new(RuntimeType::String, "Initial value")),
            property_help: Some(PropertyHelp::from("Set the initial value.")),
        });
        assert!(widget.has_editor_hints());

        widget.strip_editor_hints();
        assert!(!widget.has_editor_hints());
    }
}
