use async_trait::async_trait;

use crate::models::{activity::ActivityModel, entity_reference::EntityReference};

/// Repository trait for listing the activities recorded on a trackable
#[async_trait]
pub trait FindByTrackable: Send + Sync {
    /// Activities of `trackable`, oldest first
    async fn find_by_trackable(
        &self,
        trackable: &EntityReference,
    ) -> Result<Vec<ActivityModel>, Box<dyn std::error::Error + Send + Sync>>;
}
