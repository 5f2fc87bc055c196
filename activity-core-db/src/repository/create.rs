use async_trait::async_trait;

use crate::models::activity::ActivityModel;

/// Repository trait for persisting a single activity
///
/// Activities are immutable once written, so there is no update counterpart.
///
/// # Example
/// ```ignore
/// impl CreateActivity for ActivityRepositoryImpl {
///     async fn create(&self, activity: ActivityModel) -> Result<ActivityModel, Box<dyn Error + Send + Sync>> {
///         // Implementation
///     }
/// }
/// ```
#[async_trait]
pub trait CreateActivity: Send + Sync {
    /// Persist one activity
    ///
    /// # Arguments
    /// * `activity` - The activity to store
    ///
    /// # Returns
    /// * `Ok(ActivityModel)` - The stored activity
    /// * `Err` - An error if the activity could not be written
    async fn create(
        &self,
        activity: ActivityModel,
    ) -> Result<ActivityModel, Box<dyn std::error::Error + Send + Sync>>;
}
