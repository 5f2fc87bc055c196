use activity_core_api::{ActivityError, ActivityResult};

use super::ActivityRecorder;
use crate::models::{activity::ActivityModel, entity_reference::EntityReference, trackable::Trackable};
use crate::repository::ActivityStore;

impl<S: ActivityStore + ?Sized> ActivityRecorder<S> {
    /// Activities recorded on `model`, oldest first.
    pub async fn activities_for<M: Trackable>(&self, model: &M) -> ActivityResult<Vec<ActivityModel>> {
        let trackable = EntityReference::of(model)?;
        self.store
            .find_by_trackable(&trackable)
            .await
            .map_err(ActivityError::PersistenceError)
    }

    /// Activities performed by `actor`. The actor type must be an activist.
    pub async fn activities_as_owner<A: Trackable>(&self, actor: &A) -> ActivityResult<Vec<ActivityModel>> {
        let owner = self.activist_reference(actor)?;
        self.store
            .find_by_owner(&owner)
            .await
            .map_err(ActivityError::PersistenceError)
    }

    /// Activities addressed to `actor`. The actor type must be an activist.
    pub async fn activities_as_recipient<A: Trackable>(&self, actor: &A) -> ActivityResult<Vec<ActivityModel>> {
        let recipient = self.activist_reference(actor)?;
        self.store
            .find_by_recipient(&recipient)
            .await
            .map_err(ActivityError::PersistenceError)
    }

    pub async fn count(&self) -> ActivityResult<usize> {
        self.store.count().await.map_err(ActivityError::PersistenceError)
    }

    fn activist_reference<A: Trackable>(&self, actor: &A) -> ActivityResult<EntityReference> {
        if !self.registry.is_activist::<A>() {
            return Err(ActivityError::NotActivist(A::trackable_type().to_string()));
        }
        EntityReference::of(actor)
    }
}
