//! Registry validation orchestration and shared helpers.

pub mod css;
pub mod naming;

use crate::{
    error::ErrorTree,
    node::{Registry, VisitableNode},
    visit::ValidateVisitor,
};

/// Run full registry validation in a staged, deterministic order.
pub(crate) fn validate_registry(registry: &Registry) -> Result<(), ErrorTree> {
    // Phase 1: validate each node (structural + local invariants).
    let mut errors = validate_nodes(registry);

    // Phase 2: enforce registry-wide invariants.
    validate_global(registry, &mut errors);

    errors.result()
}

// Validate all nodes via a visitor to retain route-aware error aggregation.
fn validate_nodes(registry: &Registry) -> ErrorTree {
    let mut visitor = ValidateVisitor::new();
    registry.accept(&mut visitor);

    visitor.errors
}

// Run global validation passes that require a full registry view.
fn validate_global(registry: &Registry, errors: &mut ErrorTree) {
    naming::validate_widget_naming(registry, errors);
}
