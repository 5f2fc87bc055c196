use activity_core_api::{CallbackPhase, TrackedAction};
use parking_lot::RwLock;
use std::collections::BTreeSet;

use super::context::ActivityContext;
use super::hook::{Hook, HookSet};
use super::options::TrackingOptions;
use super::value::DynamicValue;
use crate::models::{activity::ActivityParameters, entity_reference::EntityReference, trackable::Trackable};
use crate::settings::render_key_template;

/// Resolved tracking configuration of one type.
///
/// Built once by [`TrackingRegistry::track`](super::registry::TrackingRegistry::track).
/// Hooks stay replaceable afterwards.
pub struct TrackingConfig<M> {
    actions: BTreeSet<TrackedAction>,
    key: Option<DynamicValue<M, String>>,
    key_template: Option<String>,
    owner: Option<DynamicValue<M, Option<EntityReference>>>,
    recipient: Option<DynamicValue<M, Option<EntityReference>>>,
    params: Option<DynamicValue<M, ActivityParameters>>,
    hooks: RwLock<HookSet<M>>,
}

impl<M: Trackable> TrackingConfig<M> {
    pub(crate) fn from_options(options: TrackingOptions<M>, default_template: &str) -> Self {
        let actions = options.instrumented_actions();
        let key_template = if options.skip_defaults {
            None
        } else {
            Some(
                options
                    .key_template
                    .unwrap_or_else(|| default_template.to_string()),
            )
        };
        Self {
            actions,
            key: options.key,
            key_template,
            owner: options.owner,
            recipient: options.recipient,
            params: options.params,
            hooks: RwLock::new(HookSet::from_options(options.on)),
        }
    }

    pub fn type_name(&self) -> &'static str {
        M::trackable_type()
    }

    pub fn actions(&self) -> &BTreeSet<TrackedAction> {
        &self.actions
    }

    pub fn is_instrumented(&self, action: TrackedAction) -> bool {
        self.actions.contains(&action)
    }

    /// Lifecycle callbacks installed for this type, in action order.
    pub fn callbacks(&self) -> Vec<(CallbackPhase, TrackedAction)> {
        self.actions
            .iter()
            .map(|action| (action.phase(), *action))
            .collect()
    }

    pub fn get_hook(&self, name: &str) -> Option<Hook<M>> {
        self.hooks.read().get(name)
    }

    pub fn hooks(&self) -> HookSet<M> {
        self.hooks.read().clone()
    }

    pub fn set_hooks(&self, hooks: HookSet<M>) {
        *self.hooks.write() = hooks;
    }

    pub fn key_template(&self) -> Option<&str> {
        self.key_template.as_deref()
    }

    /// Type-level key: the explicit `key` option, else the rendered template
    /// when an action name is known.
    pub fn default_key(&self, model: &M, action: Option<&str>, context: &ActivityContext) -> Option<String> {
        if let Some(key) = &self.key {
            return Some(key.resolve(model, context));
        }
        match (self.key_template.as_deref(), action) {
            (Some(template), Some(action)) => Some(render_key_template(template, self.type_name(), action)),
            _ => None,
        }
    }

    pub fn default_owner(&self, model: &M, context: &ActivityContext) -> Option<EntityReference> {
        self.owner.as_ref().and_then(|owner| owner.resolve(model, context))
    }

    pub fn default_recipient(&self, model: &M, context: &ActivityContext) -> Option<EntityReference> {
        self.recipient
            .as_ref()
            .and_then(|recipient| recipient.resolve(model, context))
    }

    pub fn default_params(&self, model: &M, context: &ActivityContext) -> ActivityParameters {
        self.params
            .as_ref()
            .map(|params| params.resolve(model, context))
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::identifiable::Identifiable;
    use crate::settings::DEFAULT_KEY_TEMPLATE;
    use serde_json::json;
    use uuid::Uuid;

    struct Post {
        id: Uuid,
    }

    impl Identifiable for Post {
        fn get_id(&self) -> Uuid {
            self.id
        }
    }

    impl Trackable for Post {
        fn trackable_type() -> &'static str {
            "post"
        }
    }

    fn post() -> Post {
        Post { id: Uuid::new_v4() }
    }

    #[test]
    fn test_callbacks_follow_phases() {
        let config = TrackingConfig::from_options(TrackingOptions::<Post>::new(), DEFAULT_KEY_TEMPLATE);
        assert_eq!(
            config.callbacks(),
            vec![
                (CallbackPhase::After, TrackedAction::Create),
                (CallbackPhase::After, TrackedAction::Update),
                (CallbackPhase::Before, TrackedAction::Destroy),
            ]
        );
    }

    #[test]
    fn test_default_key_from_template() {
        let config = TrackingConfig::from_options(TrackingOptions::<Post>::new(), DEFAULT_KEY_TEMPLATE);
        let ctx = ActivityContext::new();
        assert_eq!(config.default_key(&post(), Some("create"), &ctx), Some("post.create".to_string()));
        assert_eq!(config.default_key(&post(), None, &ctx), None);
    }

    #[test]
    fn test_skip_defaults_has_no_template() {
        let config = TrackingConfig::from_options(TrackingOptions::<Post>::new().skip_defaults(), DEFAULT_KEY_TEMPLATE);
        assert!(config.key_template().is_none());
        assert!(config.callbacks().is_empty());
        assert_eq!(config.default_key(&post(), Some("create"), &ActivityContext::new()), None);
    }

    #[test]
    fn test_explicit_key_wins_over_template() {
        let options = TrackingOptions::<Post>::new().key(DynamicValue::Static("post.custom".to_string()));
        let config = TrackingConfig::from_options(options, DEFAULT_KEY_TEMPLATE);
        assert_eq!(
            config.default_key(&post(), Some("update"), &ActivityContext::new()),
            Some("post.custom".to_string())
        );
    }

    #[test]
    fn test_type_level_owner_recipient_params() {
        let owner = EntityReference::new("user", Uuid::new_v4()).unwrap();
        let mut params = ActivityParameters::new();
        params.insert("a".to_string(), json!(1));

        let options = TrackingOptions::<Post>::new()
            .owner(DynamicValue::Static(Some(owner.clone())))
            .recipient(DynamicValue::computed(|_: &Post, ctx| ctx.actor.clone()))
            .params(DynamicValue::Static(params.clone()));
        let config = TrackingConfig::from_options(options, DEFAULT_KEY_TEMPLATE);

        let actor = EntityReference::new("user", Uuid::new_v4()).unwrap();
        let ctx = ActivityContext::new().with_actor(actor.clone());
        assert_eq!(config.default_owner(&post(), &ctx), Some(owner));
        assert_eq!(config.default_recipient(&post(), &ctx), Some(actor));
        assert_eq!(config.default_params(&post(), &ctx), params);
    }

    #[test]
    fn test_replace_hooks() {
        let config = TrackingConfig::from_options(
            TrackingOptions::<Post>::new().on_hook("create", |_, _| Ok(true)),
            DEFAULT_KEY_TEMPLATE,
        );
        assert!(config.get_hook("create").is_some());

        let mut hooks = HookSet::new();
        hooks.insert("test", |_: &Post, _| Ok(false));
        config.set_hooks(hooks);

        assert!(config.get_hook("create").is_none());
        assert!(config.get_hook(":test").is_some());
    }
}
