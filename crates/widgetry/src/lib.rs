//! ## Crate layout
//! - `base`: builtin value validators for bound property values.
//! - `bind`: binding resolution with fallback to declared defaults.
//! - `load`: descriptor transport (JSON) and registry loading.
//! - `schema`: descriptor AST, registry, and validation (re-export).
//! - `visitor`: issue-reporting context shared by validators.
//!
//! The `prelude` module mirrors the surface a host integration uses.

pub use widgetry_schema as schema;

pub mod base;
pub mod bind;
pub mod load;
pub mod visitor;

//
// Consts
//

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

///
/// Prelude
/// using _ brings traits into scope and avoids name conflicts
///

pub mod prelude {
    pub use crate::{
        base::validator::Validator as _,
        bind::{self, Resolution},
        load,
        schema::{
            DEFAULT_LOCALE,
            build::{get_registry, registry_write},
            error::ErrorTree,
            node::*,
            types::{Profile, PropertyType, RuntimeType, Section},
        },
        visitor::VisitorContext,
    };
    pub use serde::{Deserialize, Serialize};
}
