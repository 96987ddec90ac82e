use crate::{
    build::validate::{validate_event_name, validate_payload_field},
    prelude::*,
};
use std::{
    collections::{BTreeMap, BTreeSet},
    ops::Not,
};

///
/// TriggerEventList
/// Ordered events a widget can emit. Order is display order in the host's
/// event-binding UI; names must be unique and at most one event may be
/// the preselected default.
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(transparent)]
pub struct TriggerEventList {
    pub events: Vec<TriggerEvent>,
}

impl TriggerEventList {
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&TriggerEvent> {
        self.events.iter().find(|e| e.name == name)
    }

    /// The event preselected in the host's event-binding UI.
    #[must_use]
    pub fn default_event(&self) -> Option<&TriggerEvent> {
        self.events.iter().find(|e| e.default)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TriggerEvent> {
        self.events.iter()
    }
}

impl ValidateNode for TriggerEventList {
    fn validate(&self) -> Result<(), ErrorTree> {
        let mut errs = ErrorTree::new();

        let mut seen = BTreeSet::new();
        for event in &self.events {
            if !seen.insert(event.name.as_str()) {
                err!(errs, "duplicate event name '{}'", event.name);
            }
        }

        let defaults: Vec<&str> = self
            .events
            .iter()
            .filter(|e| e.default)
            .map(|e| e.name.as_str())
            .collect();

        if defaults.len() > 1 {
            err!(
                errs,
                "at most one event may be the default, found {}: {}",
                defaults.len(),
                defaults.join(", "),
            );
        }

        errs.result()
    }
}

impl VisitableNode for TriggerEventList {
    fn route_key(&self) -> String {
        "triggerEvents".to_string()
    }

    fn drive<V: Visitor>(&self, v: &mut V) {
        for node in &self.events {
            node.accept(v);
        }
    }
}

///
/// TriggerEvent
/// One named occurrence the widget can emit, with its payload shape.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct TriggerEvent {
    pub name: String,
    pub label: LocaleMap,

    #[serde(rename = "event")]
    pub payload: PayloadShape,

    #[serde(default, skip_serializing_if = "Not::not")]
    pub default: bool,
}

impl ValidateNode for TriggerEvent {
    fn validate(&self) -> Result<(), ErrorTree> {
        let mut errs = ErrorTree::new();

        if let Err(e) = validate_event_name(&self.name) {
            errs.add(e);
        }

        errs.result()
    }
}

impl VisitableNode for TriggerEvent {
    fn route_key(&self) -> String {
        self.name.clone()
    }

    fn drive<V: Visitor>(&self, v: &mut V) {
        self.label.accept(v);
        self.payload.accept(v);
    }
}

///
/// PayloadShape
/// Payload field name mapped to an example value establishing the field's
/// runtime type. An empty shape declares a payload-free event; consumers
/// must not assume additional fields.
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(transparent)]
pub struct PayloadShape {
    fields: BTreeMap<String, Value>,
}

impl PayloadShape {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with(mut self, field: impl Into<String>, example: impl Into<Value>) -> Self {
        self.fields.insert(field.into(), example.into());

        self
    }

    #[must_use]
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    /// Runtime type declared for a payload field.
    #[must_use]
    pub fn runtime_type(&self, field: &str) -> Option<RuntimeType> {
        self.get(field).map(Value::runtime_type)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn fields(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(name, value)| (name.as_str(), value))
    }
}

impl ValidateNode for PayloadShape {
    fn validate(&self) -> Result<(), ErrorTree> {
        let mut errs = ErrorTree::new();

        for (field, _) in self.fields() {
            if let Err(e) = validate_payload_field(field) {
                errs.add(e);
            }
        }

        errs.result()
    }
}

impl VisitableNode for PayloadShape {
    fn route_key(&self) -> String {
        "event".to_string()
    }
}
