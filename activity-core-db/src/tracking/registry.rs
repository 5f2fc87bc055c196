use activity_core_api::{ActivityError, ActivityResult};
use parking_lot::RwLock;
use std::any::{Any, TypeId};
use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use super::config::TrackingConfig;
use super::options::TrackingOptions;
use crate::models::trackable::Trackable;
use crate::settings::ActivitySettings;

/// Holds the tracking configuration of every tracked type and the set of
/// activist (actor) types.
pub struct TrackingRegistry {
    settings: ActivitySettings,
    tracked: RwLock<HashMap<TypeId, Arc<dyn Any + Send + Sync>>>,
    activists: RwLock<HashSet<TypeId>>,
}

impl Default for TrackingRegistry {
    fn default() -> Self {
        Self::new(ActivitySettings::default())
    }
}

impl TrackingRegistry {
    pub fn new(settings: ActivitySettings) -> Self {
        Self {
            settings,
            tracked: RwLock::new(HashMap::new()),
            activists: RwLock::new(HashSet::new()),
        }
    }

    pub fn settings(&self) -> &ActivitySettings {
        &self.settings
    }

    /// Applies tracking options to `M`. A type can only be tracked once.
    ///
    /// Both role maps are locked in the same order (`tracked`, then
    /// `activists`) here and in [`Self::activist`].
    pub fn track<M: Trackable>(&self, options: TrackingOptions<M>) -> ActivityResult<Arc<TrackingConfig<M>>> {
        let type_id = TypeId::of::<M>();
        let mut tracked = self.tracked.write();
        let activists = self.activists.read();
        if activists.contains(&type_id) {
            return Err(ActivityError::ConflictingRoles(M::trackable_type().to_string()));
        }
        if tracked.contains_key(&type_id) {
            return Err(ActivityError::AlreadyTracked(M::trackable_type().to_string()));
        }

        let config = Arc::new(TrackingConfig::from_options(options, &self.settings.key_template));
        tracing::debug!(
            trackable_type = M::trackable_type(),
            actions = ?config.actions(),
            "Tracking activities"
        );
        let entry: Arc<dyn Any + Send + Sync> = config.clone();
        tracked.insert(type_id, entry);
        Ok(config)
    }

    /// Marks `A` as an actor whose activities can be listed as owner or recipient.
    pub fn activist<A: Trackable>(&self) -> ActivityResult<()> {
        let type_id = TypeId::of::<A>();
        let tracked = self.tracked.read();
        let mut activists = self.activists.write();
        if tracked.contains_key(&type_id) {
            return Err(ActivityError::ConflictingRoles(A::trackable_type().to_string()));
        }
        activists.insert(type_id);
        Ok(())
    }

    pub fn config<M: Trackable>(&self) -> Option<Arc<TrackingConfig<M>>> {
        let entry = self.tracked.read().get(&TypeId::of::<M>()).cloned()?;
        entry.downcast::<TrackingConfig<M>>().ok()
    }

    pub fn is_tracked<M: Trackable>(&self) -> bool {
        self.tracked.read().contains_key(&TypeId::of::<M>())
    }

    pub fn is_activist<A: Trackable>(&self) -> bool {
        self.activists.read().contains(&TypeId::of::<A>())
    }
}
