use crate::prelude::*;
use std::fmt;

///
/// Value
/// Literal descriptor value: a property default or a payload field
/// example. The literal's own shape establishes the runtime type, so
/// `""` declares a string field and `false` declares a boolean one.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Bool(bool),
    Text(String),
}

impl Value {
    #[must_use]
    pub const fn runtime_type(&self) -> RuntimeType {
        match self {
            Self::Bool(_) => RuntimeType::Boolean,
            Self::Text(_) => RuntimeType::String,
        }
    }

    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s.as_str()),
            Self::Bool(_) => None,
        }
    }

    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            Self::Text(_) => None,
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{b}"),
            Self::Text(s) => write!(f, "{s}"),
        }
    }
}

impl ValidateNode for Value {}

impl VisitableNode for Value {}
