use activity_core_db::models::{activity::ActivityModel, entity_reference::EntityReference};
use activity_core_db::repository::find_by_trackable::FindByTrackable;
use async_trait::async_trait;
use std::error::Error;

use super::repo_impl::{ActivityRepositoryImpl, ACTIVITY_COLUMNS};

#[async_trait]
impl FindByTrackable for ActivityRepositoryImpl {
    async fn find_by_trackable(
        &self,
        trackable: &EntityReference,
    ) -> Result<Vec<ActivityModel>, Box<dyn Error + Send + Sync>> {
        let sql = format!(
            "SELECT {ACTIVITY_COLUMNS} FROM activities \
             WHERE trackable_type = $1 AND trackable_id = $2 \
             ORDER BY seq ASC"
        );
        let query = sqlx::query(&sql)
            .bind(trackable.entity_type.as_str())
            .bind(trackable.entity_id);
        self.fetch_activities(query).await
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_utils::{create_test_activity, create_test_reference};
    use crate::test_helper::setup_test_context;
    use activity_core_db::repository::{create::CreateActivity, find_by_trackable::FindByTrackable};

    #[tokio::test]
    #[ignore]
    async fn test_find_by_trackable_in_creation_order() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        let activity_repo = &ctx.activity_repos().activity_repository;

        let trackable = create_test_reference("article");
        for key in ["article.create", "article.update", "article.destroy"] {
            activity_repo.create(create_test_activity(key, &trackable)).await?;
        }

        let found = activity_repo.find_by_trackable(&trackable).await?;
        let keys: Vec<&str> = found.iter().map(|activity| activity.key()).collect();
        assert_eq!(keys, vec!["article.create", "article.update", "article.destroy"]);

        Ok(())
    }

    #[tokio::test]
    #[ignore]
    async fn test_find_by_trackable_with_equal_timestamps() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        let activity_repo = &ctx.activity_repos().activity_repository;

        let trackable = create_test_reference("article");
        let first = create_test_activity("article.publish", &trackable);
        let created_at = first.created_at;
        activity_repo.create(first).await?;
        for key in ["article.unpublish", "article.publish"] {
            let mut activity = create_test_activity(key, &trackable);
            activity.created_at = created_at;
            activity_repo.create(activity).await?;
        }

        let found = activity_repo.find_by_trackable(&trackable).await?;
        let keys: Vec<&str> = found.iter().map(|activity| activity.key()).collect();
        assert_eq!(keys, vec!["article.publish", "article.unpublish", "article.publish"]);

        Ok(())
    }

    #[tokio::test]
    #[ignore]
    async fn test_find_by_trackable_non_existing() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        let activity_repo = &ctx.activity_repos().activity_repository;

        let found = activity_repo.find_by_trackable(&create_test_reference("article")).await?;
        assert!(found.is_empty());

        Ok(())
    }
}
