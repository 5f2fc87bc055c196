use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::models::entity_reference::EntityReference;

/// Ambient data handed to hooks and computed values at record time,
/// e.g. the current actor or request-scoped values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ActivityContext {
    pub actor: Option<EntityReference>,
    pub values: Map<String, Value>,
}

impl ActivityContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_actor(mut self, actor: EntityReference) -> Self {
        self.actor = Some(actor);
        self
    }

    pub fn with_value(mut self, name: &str, value: impl Into<Value>) -> Self {
        self.values.insert(name.to_string(), value.into());
        self
    }

    pub fn value(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }
}
