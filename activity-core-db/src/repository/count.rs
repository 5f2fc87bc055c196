use async_trait::async_trait;

/// Repository trait for counting all stored activities
#[async_trait]
pub trait CountActivities: Send + Sync {
    async fn count(&self) -> Result<usize, Box<dyn std::error::Error + Send + Sync>>;
}
