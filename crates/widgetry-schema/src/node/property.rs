use crate::{
    build::validate::validate_property_key,
    prelude::*,
    validate::css,
};
use std::{collections::BTreeSet, ops::Not};

///
/// PropertyList
/// Ordered property definitions for one widget. Order is display order
/// within a section; keys must be unique.
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(transparent)]
pub struct PropertyList {
    pub properties: Vec<Property>,
}

impl PropertyList {
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Property> {
        self.properties.iter().find(|p| p.key == key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Property> {
        self.properties.iter()
    }

    /// Properties grouped under the given editor section, in display order.
    pub fn in_section(&self, section: Section) -> impl Iterator<Item = &Property> {
        self.properties.iter().filter(move |p| p.section == section)
    }
}

impl ValidateNode for PropertyList {
    fn validate(&self) -> Result<(), ErrorTree> {
        let mut errs = ErrorTree::new();

        let mut seen = BTreeSet::new();
        for property in &self.properties {
            if !seen.insert(property.key.as_str()) {
                err!(errs, "duplicate property key '{}'", property.key);
            }
        }

        errs.result()
    }
}

impl VisitableNode for PropertyList {
    fn route_key(&self) -> String {
        "properties".to_string()
    }

    fn drive<V: Visitor>(&self, v: &mut V) {
        for node in &self.properties {
            node.accept(v);
        }
    }
}

///
/// Property
/// One configurable, optionally bindable widget attribute and how the
/// editor exposes it.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    pub key: String,
    pub label: LocaleMap,

    #[serde(rename = "type")]
    pub ty: PropertyType,

    pub section: Section,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<SelectOptions>,

    pub default_value: Value,

    #[serde(default, skip_serializing_if = "Not::not")]
    pub bindable: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub binding_validation: Option<BindingValidation>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub property_help: Option<PropertyHelp>,
}

impl Property {
    /// True when this property still carries design-time metadata.
    #[must_use]
    pub const fn has_editor_hints(&self) -> bool {
        self.binding_validation.is_some() || self.property_help.is_some()
    }
}

impl ValidateNode for Property {
    fn validate(&self) -> Result<(), ErrorTree> {
        let mut errs = ErrorTree::new();

        // key
        if let Err(e) = validate_property_key(&self.key) {
            errs.add(e);
        }

        // default value shape
        let expected = self.ty.expected_runtime_type();
        let found = self.default_value.runtime_type();
        if found != expected {
            err!(
                errs,
                "default value for '{}' must be {expected}, found {found}",
                self.key,
            );
        }

        // options
        match (&self.options, self.ty.requires_options()) {
            (Some(options), true) => {
                if let Some(default) = self.default_value.as_text() {
                    if !options.contains_value(default) {
                        err!(
                            errs,
                            "default value '{default}' for '{}' is not one of the declared options",
                            self.key,
                        );
                    }
                }
            }
            (None, true) => {
                err!(errs, "'{}' is a {} property and must declare options", self.key, self.ty);
            }
            (Some(_), false) => {
                err!(errs, "'{}' declares options but is not a TextSelect property", self.key);
            }
            (None, false) => {}
        }

        // css-valued defaults
        if self.ty.is_css_valued() {
            if let Some(text) = self.default_value.as_text() {
                let check = match self.ty {
                    PropertyType::Length => css::validate_length(text),
                    _ => css::validate_color(text),
                };
                if let Err(e) = check {
                    err!(errs, "default value for '{}': {e}", self.key);
                }
            }
        }

        // editor hints must agree with the declared default
        if let Some(validation) = &self.binding_validation {
            if validation.ty != found {
                err!(
                    errs,
                    "binding validation for '{}' expects {}, but the default value is {found}",
                    self.key,
                    validation.ty,
                );
            }
        }

        errs.result()
    }
}

impl VisitableNode for Property {
    fn route_key(&self) -> String {
        self.key.clone()
    }

    fn drive<V: Visitor>(&self, v: &mut V) {
        self.label.accept(v);
        if let Some(node) = &self.options {
            node.accept(v);
        }
        self.default_value.accept(v);
        if let Some(node) = &self.binding_validation {
            node.accept(v);
        }
        if let Some(node) = &self.property_help {
            node.accept(v);
        }
    }
}

///
/// SelectOptions
/// Closed selectable set for a TextSelect property. The nested shape
/// matches the manifest wire format.
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct SelectOptions {
    pub options: Vec<SelectOption>,
}

impl SelectOptions {
    #[must_use]
    pub fn get(&self, value: &str) -> Option<&SelectOption> {
        self.options.iter().find(|o| o.value == value)
    }

    #[must_use]
    pub fn contains_value(&self, value: &str) -> bool {
        self.get(value).is_some()
    }

    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.options.iter().map(|o| o.value.as_str())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.options.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }
}

impl ValidateNode for SelectOptions {
    fn validate(&self) -> Result<(), ErrorTree> {
        let mut errs = ErrorTree::new();

        if self.options.is_empty() {
            err!(errs, "options must not be empty");
        }

        let mut seen = BTreeSet::new();
        for option in &self.options {
            if !seen.insert(option.value.as_str()) {
                err!(errs, "duplicate option value '{}'", option.value);
            }
        }

        errs.result()
    }
}

impl VisitableNode for SelectOptions {
    fn route_key(&self) -> String {
        "options".to_string()
    }

    fn drive<V: Visitor>(&self, v: &mut V) {
        for node in &self.options {
            node.accept(v);
        }
    }
}

///
/// SelectOption
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    #[must_use]
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

impl ValidateNode for SelectOption {
    fn validate(&self) -> Result<(), ErrorTree> {
        let mut errs = ErrorTree::new();

        if self.value.is_empty() {
            err!(errs, "option value is empty");
        }
        if self.label.is_empty() {
            err!(errs, "option '{}' has an empty label", self.value);
        }

        errs.result()
    }
}

impl VisitableNode for SelectOption {
    fn route_key(&self) -> String {
        self.value.clone()
    }
}
