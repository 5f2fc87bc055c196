use activity_core_db::repository::count::CountActivities;
use async_trait::async_trait;
use std::error::Error;

use super::repo_impl::ActivityRepositoryImpl;

#[async_trait]
impl CountActivities for ActivityRepositoryImpl {
    async fn count(&self) -> Result<usize, Box<dyn Error + Send + Sync>> {
        let query = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM activities");

        let mut tx = self.executor.tx.lock().await;
        let transaction = tx.as_mut().ok_or("Transaction has been consumed")?;
        let count = query.fetch_one(&mut **transaction).await?;

        Ok(count as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_utils::{create_test_activity, create_test_reference};
    use crate::test_helper::setup_test_context;
    use activity_core_db::repository::{count::CountActivities, create::CreateActivity};

    #[tokio::test]
    #[ignore]
    async fn test_count() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        let activity_repo = &ctx.activity_repos().activity_repository;

        let before = activity_repo.count().await?;
        activity_repo
            .create(create_test_activity("article.create", &create_test_reference("article")))
            .await?;
        assert_eq!(activity_repo.count().await?, before + 1);

        Ok(())
    }
}
