use async_trait::async_trait;

use crate::models::{activity::ActivityModel, entity_reference::EntityReference};

#[async_trait]
pub trait FindByOwner: Send + Sync {
    /// Activities performed by `owner`, oldest first
    async fn find_by_owner(
        &self,
        owner: &EntityReference,
    ) -> Result<Vec<ActivityModel>, Box<dyn std::error::Error + Send + Sync>>;
}
