use crate::schema::{build::registry_write, error::ErrorTree, node::NodeError, node::Widget};
use thiserror::Error as ThisError;

///
/// LoadError
/// Failures surfaced while moving descriptors between their transport
/// form and the host registry.
///

#[derive(Debug, ThisError)]
pub enum LoadError {
    #[error("malformed descriptor: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("descriptor '{name}' is invalid: {errors}")]
    Validation { name: String, errors: ErrorTree },

    #[error(transparent)]
    Register(#[from] NodeError),
}

/// Parse a descriptor from its JSON transport form, rejecting malformed
/// or invalid schemas at load time.
pub fn from_json_str(json: &str) -> Result<Widget, LoadError> {
    let widget: Widget = serde_json::from_str(json)?;

    widget.check().map_err(|errors| LoadError::Validation {
        name: widget.name.clone(),
        errors,
    })?;

    Ok(widget)
}

/// Serialize a descriptor to its JSON transport form.
pub fn to_json_string(widget: &Widget) -> Result<String, LoadError> {
    Ok(serde_json::to_string_pretty(widget)?)
}

/// Insert a descriptor into the global registry.
pub fn register(widget: Widget) -> Result<(), LoadError> {
    let name = widget.name.clone();
    registry_write().insert(widget)?;

    log::debug!("registered widget '{name}'");

    Ok(())
}

/// Parse, validate, and register a descriptor in one step.
pub fn register_json(json: &str) -> Result<(), LoadError> {
    register(from_json_str(json)?)
}
