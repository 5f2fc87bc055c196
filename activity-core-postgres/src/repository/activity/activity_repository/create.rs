use activity_core_db::models::activity::ActivityModel;
use activity_core_db::repository::create::CreateActivity;
use async_trait::async_trait;
use std::error::Error;

use super::repo_impl::ActivityRepositoryImpl;

impl ActivityRepositoryImpl {
    pub(super) async fn create_impl(
        repo: &ActivityRepositoryImpl,
        activity: ActivityModel,
    ) -> Result<ActivityModel, Box<dyn Error + Send + Sync>> {
        let query = sqlx::query(
            r#"
            INSERT INTO activities
            (id, key, trackable_type, trackable_id, owner_type, owner_id, recipient_type, recipient_id, parameters, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            "#,
        )
        .bind(activity.id)
        .bind(activity.key.as_str())
        .bind(activity.trackable.entity_type.as_str())
        .bind(activity.trackable.entity_id)
        .bind(activity.owner.as_ref().map(|owner| owner.entity_type.as_str()))
        .bind(activity.owner.as_ref().map(|owner| owner.entity_id))
        .bind(activity.recipient.as_ref().map(|recipient| recipient.entity_type.as_str()))
        .bind(activity.recipient.as_ref().map(|recipient| recipient.entity_id))
        .bind(serde_json::Value::Object(activity.parameters.clone()))
        .bind(activity.created_at);

        let mut tx = repo.executor.tx.lock().await;
        let transaction = tx.as_mut().ok_or("Transaction has been consumed")?;
        query.execute(&mut **transaction).await?;

        Ok(activity)
    }
}

#[async_trait]
impl CreateActivity for ActivityRepositoryImpl {
    async fn create(
        &self,
        activity: ActivityModel,
    ) -> Result<ActivityModel, Box<dyn Error + Send + Sync>> {
        Self::create_impl(self, activity).await
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_utils::{create_test_activity, create_test_reference};
    use crate::test_helper::setup_test_context;
    use activity_core_db::repository::{create::CreateActivity, find_by_trackable::FindByTrackable};
    use serde_json::json;

    #[tokio::test]
    #[ignore]
    async fn test_create_activity() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        let activity_repo = &ctx.activity_repos().activity_repository;

        let trackable = create_test_reference("article");
        let owner = create_test_reference("user");
        let mut activity = create_test_activity("article.create", &trackable).with_owner(Some(owner.clone()));
        activity.parameters.insert("a".to_string(), json!(1));

        let created = activity_repo.create(activity.clone()).await?;
        assert_eq!(created.id, activity.id);

        let loaded = activity_repo.find_by_trackable(&trackable).await?;
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].key(), "article.create");
        assert_eq!(loaded[0].owner, Some(owner));
        assert_eq!(loaded[0].recipient, None);
        assert_eq!(loaded[0].parameters.get("a"), Some(&json!(1)));

        Ok(())
    }
}
