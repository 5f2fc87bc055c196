use serde_json::Value;

use super::ActivityRecorder;
use crate::models::{activity::ActivityParameters, entity_reference::EntityReference, trackable::Trackable};
use crate::repository::ActivityStore;

/// Per-instance overrides consumed by the next recorded activity of that instance
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InstanceOptions {
    pub key: Option<String>,
    pub owner: Option<EntityReference>,
    pub recipient: Option<EntityReference>,
    pub params: Option<ActivityParameters>,
    /// Existing activities of the trackable with this key are deleted first
    pub opposite_key: Option<String>,
}

impl InstanceOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn key(mut self, key: &str) -> Self {
        self.key = Some(key.to_string());
        self
    }

    pub fn owner(mut self, owner: EntityReference) -> Self {
        self.owner = Some(owner);
        self
    }

    pub fn recipient(mut self, recipient: EntityReference) -> Self {
        self.recipient = Some(recipient);
        self
    }

    pub fn params(mut self, params: ActivityParameters) -> Self {
        self.params = Some(params);
        self
    }

    pub fn param(mut self, name: &str, value: impl Into<Value>) -> Self {
        self.params
            .get_or_insert_with(ActivityParameters::new)
            .insert(name.to_string(), value.into());
        self
    }

    pub fn opposite_key(mut self, key: &str) -> Self {
        self.opposite_key = Some(key.to_string());
        self
    }
}

impl<S: ActivityStore + ?Sized> ActivityRecorder<S> {
    /// Stages overrides for the next activity recorded on `model`,
    /// replacing anything staged before.
    pub fn set_instance_options<M: Trackable>(&self, model: &M, options: InstanceOptions) {
        tracing::debug!(
            trackable_type = M::trackable_type(),
            trackable_id = %model.get_id(),
            "Staged activity options"
        );
        self.pending.lock().insert(Self::instance_key(model), options);
    }

    pub fn instance_options<M: Trackable>(&self, model: &M) -> Option<InstanceOptions> {
        self.pending.lock().get(&Self::instance_key(model)).cloned()
    }

    pub fn clear_instance_options<M: Trackable>(&self, model: &M) {
        self.pending.lock().remove(&Self::instance_key(model));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recorder::test_utils::{create_test_article, setup_test_context};
    use serde_json::json;

    #[test]
    fn test_defining_instance_options() {
        let ctx = setup_test_context();
        let article = create_test_article("Some Name");

        let options = InstanceOptions::new().key("key").param("a", 1);
        ctx.recorder.set_instance_options(&article, options.clone());

        let staged = ctx.recorder.instance_options(&article).unwrap();
        assert_eq!(staged.key.as_deref(), Some("key"));
        assert_eq!(staged.params.unwrap().get("a"), Some(&json!(1)));
    }

    #[test]
    fn test_options_are_per_instance() {
        let ctx = setup_test_context();
        let first = create_test_article("First");
        let second = create_test_article("Second");

        ctx.recorder.set_instance_options(&first, InstanceOptions::new().key("first"));
        assert!(ctx.recorder.instance_options(&second).is_none());

        ctx.recorder.clear_instance_options(&first);
        assert!(ctx.recorder.instance_options(&first).is_none());
    }
}
