use activity_core_api::BoxError;
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use super::context::ActivityContext;

/// Veto predicate evaluated before an action is recorded.
///
/// `Ok(false)` suppresses the activity, `Ok(true)` lets it through and an
/// error aborts the lifecycle event.
pub type Hook<M> = Arc<dyn Fn(&M, &ActivityContext) -> Result<bool, BoxError> + Send + Sync>;

/// Entry of the `on` option. Only callable entries become hooks.
pub enum HookOption<M> {
    Callable(Hook<M>),
    Value(Value),
}

impl<M> HookOption<M> {
    pub fn callable<F>(f: F) -> Self
    where
        F: Fn(&M, &ActivityContext) -> Result<bool, BoxError> + Send + Sync + 'static,
    {
        HookOption::Callable(Arc::new(f))
    }
}

/// Canonical form of a hook name: surrounding whitespace and a leading ':' removed.
pub fn normalize_hook_key(name: &str) -> String {
    name.trim().trim_start_matches(':').to_string()
}

/// Hooks of a tracked type, keyed by normalized action name
pub struct HookSet<M> {
    hooks: BTreeMap<String, Hook<M>>,
}

impl<M> HookSet<M> {
    pub fn new() -> Self {
        Self {
            hooks: BTreeMap::new(),
        }
    }

    /// Builds a hook set from raw `on` entries, dropping non-callable values.
    pub fn from_options<I, K>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, HookOption<M>)>,
        K: AsRef<str>,
    {
        let mut set = Self::new();
        for (name, option) in entries {
            match option {
                HookOption::Callable(hook) => {
                    set.hooks.insert(normalize_hook_key(name.as_ref()), hook);
                }
                HookOption::Value(value) => {
                    tracing::warn!(hook = name.as_ref(), %value, "Ignoring non-callable activity hook");
                }
            }
        }
        set
    }

    pub fn insert<F>(&mut self, name: &str, f: F)
    where
        F: Fn(&M, &ActivityContext) -> Result<bool, BoxError> + Send + Sync + 'static,
    {
        self.hooks.insert(normalize_hook_key(name), Arc::new(f));
    }

    pub fn get(&self, name: &str) -> Option<Hook<M>> {
        self.hooks.get(&normalize_hook_key(name)).cloned()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.hooks.contains_key(&normalize_hook_key(name))
    }

    pub fn names(&self) -> Vec<String> {
        self.hooks.keys().cloned().collect()
    }

    pub fn is_empty(&self) -> bool {
        self.hooks.is_empty()
    }
}

impl<M> Default for HookSet<M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M> Clone for HookSet<M> {
    fn clone(&self) -> Self {
        Self {
            hooks: self.hooks.clone(),
        }
    }
}

impl<M> fmt::Debug for HookSet<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HookSet").field("hooks", &self.names()).finish()
    }
}
