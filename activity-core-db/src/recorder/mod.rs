//! Activity recording for tracked entities.
//!
//! The host calls the lifecycle entry points (`after_create`, `after_update`,
//! `before_destroy`) from its own persistence code, inside the unit of work of
//! the triggering save or destroy. Each call records at most one activity.

pub mod create_activity;
pub mod instance_options;
pub mod queries;
pub mod record;
#[cfg(test)]
pub mod test_utils;

pub use instance_options::InstanceOptions;

use activity_core_api::{ActivityError, ActivityResult};
use parking_lot::Mutex;
use std::any::TypeId;
use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;

use crate::models::trackable::Trackable;
use crate::repository::ActivityStore;
use crate::settings::ActivitySettings;
use crate::tracking::{config::TrackingConfig, registry::TrackingRegistry, switches::ActivitySwitches};

/// Identity of a staged instance: (entity type, entity id)
type InstanceKey = (TypeId, Uuid);

pub struct ActivityRecorder<S: ActivityStore + ?Sized> {
    store: Arc<S>,
    registry: Arc<TrackingRegistry>,
    switches: Arc<ActivitySwitches>,
    pending: Mutex<HashMap<InstanceKey, InstanceOptions>>,
}

impl<S: ActivityStore + ?Sized> ActivityRecorder<S> {
    pub fn new(store: Arc<S>, registry: Arc<TrackingRegistry>, switches: Arc<ActivitySwitches>) -> Self {
        Self {
            store,
            registry,
            switches,
            pending: Mutex::new(HashMap::new()),
        }
    }

    /// Recorder with a fresh registry and switches built from `settings`.
    pub fn from_settings(store: Arc<S>, settings: ActivitySettings) -> Self {
        let switches = Arc::new(ActivitySwitches::from_settings(&settings));
        let registry = Arc::new(TrackingRegistry::new(settings));
        Self::new(store, registry, switches)
    }

    pub fn store(&self) -> &Arc<S> {
        &self.store
    }

    pub fn registry(&self) -> &Arc<TrackingRegistry> {
        &self.registry
    }

    pub fn switches(&self) -> &Arc<ActivitySwitches> {
        &self.switches
    }

    fn tracking_config<M: Trackable>(&self) -> ActivityResult<Arc<TrackingConfig<M>>> {
        self.registry
            .config::<M>()
            .ok_or_else(|| ActivityError::NotTracked(M::trackable_type().to_string()))
    }

    fn instance_key<M: Trackable>(model: &M) -> InstanceKey {
        (TypeId::of::<M>(), model.get_id())
    }
}
