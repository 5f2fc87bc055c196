use activity_core_db::models::entity_reference::EntityReference;
use activity_core_db::repository::delete_by_trackable_key::DeleteByTrackableKey;
use async_trait::async_trait;
use std::error::Error;

use super::repo_impl::ActivityRepositoryImpl;

impl ActivityRepositoryImpl {
    pub(super) async fn delete_by_trackable_key_impl(
        repo: &ActivityRepositoryImpl,
        trackable: &EntityReference,
        key: &str,
    ) -> Result<usize, Box<dyn Error + Send + Sync>> {
        let query = sqlx::query(
            r#"
            DELETE FROM activities
            WHERE trackable_type = $1 AND trackable_id = $2 AND key = $3
            "#,
        )
        .bind(trackable.entity_type.as_str())
        .bind(trackable.entity_id)
        .bind(key);

        let mut tx = repo.executor.tx.lock().await;
        let transaction = tx.as_mut().ok_or("Transaction has been consumed")?;
        let result = query.execute(&mut **transaction).await?;

        Ok(result.rows_affected() as usize)
    }
}

#[async_trait]
impl DeleteByTrackableKey for ActivityRepositoryImpl {
    async fn delete_by_trackable_key(
        &self,
        trackable: &EntityReference,
        key: &str,
    ) -> Result<usize, Box<dyn Error + Send + Sync>> {
        Self::delete_by_trackable_key_impl(self, trackable, key).await
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_utils::{create_test_activity, create_test_reference};
    use crate::test_helper::setup_test_context;
    use activity_core_db::repository::{
        create::CreateActivity, delete_by_trackable_key::DeleteByTrackableKey,
        find_by_trackable::FindByTrackable,
    };

    #[tokio::test]
    #[ignore]
    async fn test_delete_by_trackable_key() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        let activity_repo = &ctx.activity_repos().activity_repository;

        let trackable = create_test_reference("article");
        let other = create_test_reference("article");
        activity_repo.create(create_test_activity("article.publish", &trackable)).await?;
        activity_repo.create(create_test_activity("article.publish", &trackable)).await?;
        activity_repo.create(create_test_activity("article.update", &trackable)).await?;
        activity_repo.create(create_test_activity("article.publish", &other)).await?;

        let deleted = activity_repo.delete_by_trackable_key(&trackable, "article.publish").await?;
        assert_eq!(deleted, 2);

        let remaining = activity_repo.find_by_trackable(&trackable).await?;
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].key(), "article.update");
        assert_eq!(activity_repo.find_by_trackable(&other).await?.len(), 1);

        Ok(())
    }
}
