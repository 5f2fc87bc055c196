use activity_core_api::{BoxError, TrackedAction};
use std::collections::BTreeSet;

use super::context::ActivityContext;
use super::hook::HookOption;
use super::value::DynamicValue;
use crate::models::{activity::ActivityParameters, entity_reference::EntityReference};

/// Declarative options applied once when a type is tracked
pub struct TrackingOptions<M> {
    pub only: Option<Vec<TrackedAction>>,
    pub except: Option<Vec<TrackedAction>>,
    pub skip_defaults: bool,
    pub key: Option<DynamicValue<M, String>>,
    pub key_template: Option<String>,
    pub owner: Option<DynamicValue<M, Option<EntityReference>>>,
    pub recipient: Option<DynamicValue<M, Option<EntityReference>>>,
    pub params: Option<DynamicValue<M, ActivityParameters>>,
    pub on: Vec<(String, HookOption<M>)>,
}

impl<M> Default for TrackingOptions<M> {
    fn default() -> Self {
        Self {
            only: None,
            except: None,
            skip_defaults: false,
            key: None,
            key_template: None,
            owner: None,
            recipient: None,
            params: None,
            on: Vec::new(),
        }
    }
}

impl<M> TrackingOptions<M> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn only(mut self, actions: impl IntoIterator<Item = TrackedAction>) -> Self {
        self.only = Some(actions.into_iter().collect());
        self
    }

    pub fn except(mut self, actions: impl IntoIterator<Item = TrackedAction>) -> Self {
        self.except = Some(actions.into_iter().collect());
        self
    }

    pub fn skip_defaults(mut self) -> Self {
        self.skip_defaults = true;
        self
    }

    /// Type-level key used instead of the rendered template.
    pub fn key(mut self, key: DynamicValue<M, String>) -> Self {
        self.key = Some(key);
        self
    }

    pub fn key_template(mut self, template: &str) -> Self {
        self.key_template = Some(template.to_string());
        self
    }

    pub fn owner(mut self, owner: DynamicValue<M, Option<EntityReference>>) -> Self {
        self.owner = Some(owner);
        self
    }

    pub fn recipient(mut self, recipient: DynamicValue<M, Option<EntityReference>>) -> Self {
        self.recipient = Some(recipient);
        self
    }

    pub fn params(mut self, params: DynamicValue<M, ActivityParameters>) -> Self {
        self.params = Some(params);
        self
    }

    pub fn on(mut self, name: &str, option: HookOption<M>) -> Self {
        self.on.push((name.to_string(), option));
        self
    }

    pub fn on_hook<F>(self, name: &str, f: F) -> Self
    where
        F: Fn(&M, &ActivityContext) -> Result<bool, BoxError> + Send + Sync + 'static,
    {
        self.on(name, HookOption::callable(f))
    }

    /// Actions that get a lifecycle callback.
    ///
    /// `only` wins over `except`; `skip_defaults` installs no callbacks at all.
    pub fn instrumented_actions(&self) -> BTreeSet<TrackedAction> {
        if self.skip_defaults {
            return BTreeSet::new();
        }
        if let Some(only) = &self.only {
            return only.iter().copied().collect();
        }
        let mut actions: BTreeSet<TrackedAction> = TrackedAction::ALL.into_iter().collect();
        if let Some(except) = &self.except {
            for action in except {
                actions.remove(action);
            }
        }
        actions
    }
}
