use activity_core_db::models::{activity::ActivityModel, entity_reference::EntityReference};
use activity_core_db::repository::find_by_recipient::FindByRecipient;
use async_trait::async_trait;
use std::error::Error;

use super::repo_impl::{ActivityRepositoryImpl, ACTIVITY_COLUMNS};

#[async_trait]
impl FindByRecipient for ActivityRepositoryImpl {
    async fn find_by_recipient(
        &self,
        recipient: &EntityReference,
    ) -> Result<Vec<ActivityModel>, Box<dyn Error + Send + Sync>> {
        let sql = format!(
            "SELECT {ACTIVITY_COLUMNS} FROM activities \
             WHERE recipient_type = $1 AND recipient_id = $2 \
             ORDER BY seq ASC"
        );
        let query = sqlx::query(&sql)
            .bind(recipient.entity_type.as_str())
            .bind(recipient.entity_id);
        self.fetch_activities(query).await
    }
}
