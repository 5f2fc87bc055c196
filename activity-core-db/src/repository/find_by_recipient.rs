use async_trait::async_trait;

use crate::models::{activity::ActivityModel, entity_reference::EntityReference};

#[async_trait]
pub trait FindByRecipient: Send + Sync {
    /// Activities addressed to `recipient`, oldest first
    async fn find_by_recipient(
        &self,
        recipient: &EntityReference,
    ) -> Result<Vec<ActivityModel>, Box<dyn std::error::Error + Send + Sync>>;
}
