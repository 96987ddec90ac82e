use derive_more::{Display, FromStr};
use serde::{Deserialize, Serialize};

///
/// PropertyType
/// Editor input kind for a property. Selects the control the host renders
/// (text box, dropdown, toggle, length/color picker) and fixes the runtime
/// type of the property's values.
///

#[derive(Clone, Copy, Debug, Deserialize, Display, Eq, FromStr, PartialEq, Serialize)]
#[remain::sorted]
pub enum PropertyType {
    Color,
    Length,
    OnOff,
    Text,
    TextSelect,
}

impl PropertyType {
    #[must_use]
    pub const fn expected_runtime_type(self) -> RuntimeType {
        match self {
            Self::OnOff => RuntimeType::Boolean,
            Self::Color | Self::Length | Self::Text | Self::TextSelect => RuntimeType::String,
        }
    }

    /// Property kinds whose values feed the consuming renderer as CSS.
    #[must_use]
    pub const fn is_css_valued(self) -> bool {
        matches!(self, Self::Color | Self::Length)
    }

    #[must_use]
    pub const fn requires_options(self) -> bool {
        matches!(self, Self::TextSelect)
    }
}

///
/// Section
/// Grouping tag controlling where a property appears in the host's
/// property panel.
///

#[derive(Clone, Copy, Debug, Deserialize, Display, Eq, FromStr, PartialEq, Serialize)]
#[remain::sorted]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Settings,
    Style,
}

///
/// RuntimeType
/// Runtime shape of a property or payload value, as the host sees it.
///

#[derive(Clone, Copy, Debug, Deserialize, Display, Eq, PartialEq, Serialize)]
#[remain::sorted]
#[serde(rename_all = "lowercase")]
pub enum RuntimeType {
    #[display("boolean")]
    Boolean,

    #[display("string")]
    String,
}

///
/// Profile
/// Build profile for descriptor construction. Editor keeps design-time
/// metadata; Runtime strips it from the bundle.
///

#[derive(
    Clone, Copy, Debug, Default, Deserialize, Display, Eq, FromStr, PartialEq, Serialize,
)]
#[remain::sorted]
#[serde(rename_all = "lowercase")]
pub enum Profile {
    #[default]
    Editor,
    Runtime,
}

impl Profile {
    #[must_use]
    pub const fn keeps_editor_hints(self) -> bool {
        matches!(self, Self::Editor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn runtime_type_follows_property_type() {
        assert_eq!(PropertyType::OnOff.expected_runtime_type(), RuntimeType::Boolean);
        assert_eq!(PropertyType::Text.expected_runtime_type(), RuntimeType::String);
        assert_eq!(PropertyType::Length.expected_runtime_type(), RuntimeType::String);
        assert_eq!(PropertyType::Color.expected_runtime_type(), RuntimeType::String);
        assert_eq!(
            PropertyType::TextSelect.expected_runtime_type(),
            RuntimeType::String
        );
    }

    #[test]
    fn wire_names_match_the_manifest_format() {
        assert_eq!(
            serde_json::to_string(&PropertyType::TextSelect).unwrap(),
            "\"TextSelect\""
        );
        assert_eq!(serde_json::to_string(&Section::Settings).unwrap(), "\"settings\"");
        assert_eq!(serde_json::to_string(&RuntimeType::Boolean).unwrap(), "\"boolean\"");
    }

    #[test]
    fn runtime_type_displays_lowercase() {
        assert_eq!(RuntimeType::String.to_string(), "string");
        assert_eq!(RuntimeType::Boolean.to_string(), "boolean");
    }
}
