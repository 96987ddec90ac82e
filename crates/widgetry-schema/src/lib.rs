pub mod build;
pub mod error;
pub mod node;
pub mod types;
pub mod validate;
pub mod visit;

/// Maximum length for widget identifiers.
pub const MAX_WIDGET_NAME_LEN: usize = 64;

/// Maximum length for property keys.
pub const MAX_PROPERTY_KEY_LEN: usize = 64;

/// Maximum length for trigger-event names.
pub const MAX_EVENT_NAME_LEN: usize = 64;

/// Locale every display label must provide; hosts fall back to it when the
/// active locale has no translation.
pub const DEFAULT_LOCALE: &str = "en";

use crate::{build::BuildError, node::NodeError};
use thiserror::Error as ThisError;

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        err,
        error::ErrorTree,
        node::*,
        types::{Profile, PropertyType, RuntimeType, Section},
        visit::Visitor,
    };
    pub use serde::{Deserialize, Serialize};
}

///
/// Error
///

#[derive(Debug, ThisError)]
pub enum Error {
    #[error(transparent)]
    BuildError(#[from] BuildError),

    #[error(transparent)]
    NodeError(#[from] NodeError),
}
