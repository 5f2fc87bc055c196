use async_trait::async_trait;

use crate::models::entity_reference::EntityReference;

/// Repository trait for deleting the activities of a trackable that share a key
///
/// Used to collapse toggle-like events (publish/unpublish) into a single
/// current record.
#[async_trait]
pub trait DeleteByTrackableKey: Send + Sync {
    /// Delete every activity of `trackable` whose key equals `key`
    ///
    /// # Returns
    /// * `Ok(usize)` - The number of activities deleted
    /// * `Err` - An error if the delete could not be executed
    async fn delete_by_trackable_key(
        &self,
        trackable: &EntityReference,
        key: &str,
    ) -> Result<usize, Box<dyn std::error::Error + Send + Sync>>;
}
