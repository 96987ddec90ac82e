use crate::prelude::*;

///
/// BindingValidation
/// Design-time hint describing the runtime type a bound value must carry,
/// with a tooltip for the binding UI. Present only in editor-profile
/// descriptors; runtime bundles strip it.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct BindingValidation {
    #[serde(rename = "type")]
    pub ty: RuntimeType,
    pub tooltip: String,
}

impl BindingValidation {
    #[must_use]
    pub fn new(ty: RuntimeType, tooltip: impl Into<String>) -> Self {
        Self {
            ty,
            tooltip: tooltip.into(),
        }
    }
}

impl ValidateNode for BindingValidation {
    fn validate(&self) -> Result<(), ErrorTree> {
        let mut errs = ErrorTree::new();

        if self.tooltip.is_empty() {
            err!(errs, "binding validation tooltip is empty");
        }

        errs.result()
    }
}

impl VisitableNode for BindingValidation {
    fn route_key(&self) -> String {
        "bindingValidation".to_string()
    }
}

///
/// PropertyHelp
/// Help text shown in the property panel, either as a bare string or
/// wrapped in a tooltip object. Present only in editor-profile
/// descriptors.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PropertyHelp {
    Text(String),
    Tooltip { tooltip: String },
}

impl PropertyHelp {
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::Text(text) | Self::Tooltip { tooltip: text } => text,
        }
    }
}

impl From<&str> for PropertyHelp {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl ValidateNode for PropertyHelp {
    fn validate(&self) -> Result<(), ErrorTree> {
        let mut errs = ErrorTree::new();

        if self.text().is_empty() {
            err!(errs, "property help text is empty");
        }

        errs.result()
    }
}

impl VisitableNode for PropertyHelp {
    fn route_key(&self) -> String {
        "propertyHelp".to_string()
    }
}
