use crate::{node::Registry, prelude::*};
use std::collections::BTreeMap;

/// Widget names must stay distinct even under case-insensitive hosts.
pub fn validate_widget_naming(registry: &Registry, errs: &mut ErrorTree) {
    let mut seen = BTreeMap::<String, String>::new();

    for widget in registry.widgets() {
        let folded = widget.name.to_ascii_lowercase();

        if let Some(prev) = seen.insert(folded, widget.name.clone()) {
            err!(
                errs,
                "widget names '{prev}' and '{}' collide case-insensitively",
                widget.name
            );
        }
    }
}
