use async_trait::async_trait;
use parking_lot::RwLock;
use std::error::Error;

use crate::models::{activity::ActivityModel, entity_reference::EntityReference};
use crate::repository::{
    count::CountActivities, create::CreateActivity,
    delete_by_trackable_key::DeleteByTrackableKey, find_by_owner::FindByOwner,
    find_by_recipient::FindByRecipient, find_by_trackable::FindByTrackable,
};

/// Activity store kept in process memory.
///
/// Rows are kept in insertion order, which is also creation order.
#[derive(Default)]
pub struct InMemoryActivityRepository {
    activities: RwLock<Vec<ActivityModel>>,
}

impl InMemoryActivityRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every stored activity
    pub fn all(&self) -> Vec<ActivityModel> {
        self.activities.read().clone()
    }

    fn select<F>(&self, predicate: F) -> Vec<ActivityModel>
    where
        F: Fn(&ActivityModel) -> bool,
    {
        self.activities
            .read()
            .iter()
            .filter(|activity| predicate(activity))
            .cloned()
            .collect()
    }
}

#[async_trait]
impl CreateActivity for InMemoryActivityRepository {
    async fn create(
        &self,
        activity: ActivityModel,
    ) -> Result<ActivityModel, Box<dyn Error + Send + Sync>> {
        let mut activities = self.activities.write();
        if activities.iter().any(|existing| existing.id == activity.id) {
            return Err(format!("Activity {} already exists", activity.id).into());
        }
        activities.push(activity.clone());
        Ok(activity)
    }
}

#[async_trait]
impl DeleteByTrackableKey for InMemoryActivityRepository {
    async fn delete_by_trackable_key(
        &self,
        trackable: &EntityReference,
        key: &str,
    ) -> Result<usize, Box<dyn Error + Send + Sync>> {
        let mut activities = self.activities.write();
        let before = activities.len();
        activities.retain(|activity| !(&activity.trackable == trackable && activity.key() == key));
        Ok(before - activities.len())
    }
}

#[async_trait]
impl FindByTrackable for InMemoryActivityRepository {
    async fn find_by_trackable(
        &self,
        trackable: &EntityReference,
    ) -> Result<Vec<ActivityModel>, Box<dyn Error + Send + Sync>> {
        Ok(self.select(|activity| &activity.trackable == trackable))
    }
}

#[async_trait]
impl FindByOwner for InMemoryActivityRepository {
    async fn find_by_owner(
        &self,
        owner: &EntityReference,
    ) -> Result<Vec<ActivityModel>, Box<dyn Error + Send + Sync>> {
        Ok(self.select(|activity| activity.owner.as_ref() == Some(owner)))
    }
}

#[async_trait]
impl FindByRecipient for InMemoryActivityRepository {
    async fn find_by_recipient(
        &self,
        recipient: &EntityReference,
    ) -> Result<Vec<ActivityModel>, Box<dyn Error + Send + Sync>> {
        Ok(self.select(|activity| activity.recipient.as_ref() == Some(recipient)))
    }
}

#[async_trait]
impl CountActivities for InMemoryActivityRepository {
    async fn count(&self) -> Result<usize, Box<dyn Error + Send + Sync>> {
        Ok(self.activities.read().len())
    }
}
