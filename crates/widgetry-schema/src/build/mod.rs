pub(crate) mod validate;

use crate::{Error, error::ErrorTree, node::Registry, validate::validate_registry};
use std::sync::{LazyLock, OnceLock, RwLock, RwLockReadGuard, RwLockWriteGuard};
use thiserror::Error as ThisError;

///
/// BuildError
///

#[derive(Debug, ThisError)]
pub enum BuildError {
    #[error("validation failed: {0}")]
    Validation(ErrorTree),
}

///
/// REGISTRY
/// the static data structure
///

static REGISTRY: LazyLock<RwLock<Registry>> = LazyLock::new(|| RwLock::new(Registry::new()));

static REGISTRY_VALIDATED: OnceLock<()> = OnceLock::new();

/// Acquire a write guard to the global registry during host startup.
pub fn registry_write() -> RwLockWriteGuard<'static, Registry> {
    REGISTRY
        .write()
        .expect("registry RwLock poisoned while acquiring write lock")
}

// registry_read
// just reads the registry directly without validation
pub(crate) fn registry_read() -> RwLockReadGuard<'static, Registry> {
    REGISTRY
        .read()
        .expect("registry RwLock poisoned while acquiring read lock")
}

/// Read the global registry, validating it exactly once per process.
pub fn get_registry() -> Result<RwLockReadGuard<'static, Registry>, Error> {
    let registry = registry_read();
    validate(&registry).map_err(BuildError::Validation)?;

    Ok(registry)
}

// validate
fn validate(registry: &Registry) -> Result<(), ErrorTree> {
    if REGISTRY_VALIDATED.get().is_some() {
        return Ok(());
    }

    validate_registry(registry)?;

    REGISTRY_VALIDATED.set(()).ok();

    Ok(())
}
