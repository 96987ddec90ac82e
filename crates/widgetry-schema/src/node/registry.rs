use crate::prelude::*;
use std::collections::BTreeMap;

///
/// Registry
/// Every widget the host knows about, keyed by widget name. Populated
/// during host startup, validated once, and read-only afterwards.
///

#[derive(Clone, Debug, Default, Serialize)]
pub struct Registry {
    widgets: BTreeMap<String, Widget>,
}

impl Registry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a widget, rejecting duplicate names.
    pub fn insert(&mut self, widget: Widget) -> Result<(), NodeError> {
        if self.widgets.contains_key(&widget.name) {
            return Err(NodeError::DuplicateWidget(widget.name.clone()));
        }
        self.widgets.insert(widget.name.clone(), widget);

        Ok(())
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Widget> {
        self.widgets.get(name)
    }

    /// Lookup that reports the missing name.
    pub fn try_get(&self, name: &str) -> Result<&Widget, NodeError> {
        self.get(name)
            .ok_or_else(|| NodeError::WidgetNotFound(name.to_string()))
    }

    pub fn widgets(&self) -> impl Iterator<Item = &Widget> {
        self.widgets.values()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.widgets.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.widgets.is_empty()
    }
}

impl ValidateNode for Registry {}

impl VisitableNode for Registry {
    fn drive<V: Visitor>(&self, v: &mut V) {
        for node in self.widgets.values() {
            node.accept(v);
        }
    }
}
