use activity_core_db::models::{activity::ActivityModel, entity_reference::EntityReference};
use activity_core_db::repository::find_by_owner::FindByOwner;
use async_trait::async_trait;
use std::error::Error;

use super::repo_impl::{ActivityRepositoryImpl, ACTIVITY_COLUMNS};

#[async_trait]
impl FindByOwner for ActivityRepositoryImpl {
    async fn find_by_owner(
        &self,
        owner: &EntityReference,
    ) -> Result<Vec<ActivityModel>, Box<dyn Error + Send + Sync>> {
        let sql = format!(
            "SELECT {ACTIVITY_COLUMNS} FROM activities \
             WHERE owner_type = $1 AND owner_id = $2 \
             ORDER BY seq ASC"
        );
        let query = sqlx::query(&sql)
            .bind(owner.entity_type.as_str())
            .bind(owner.entity_id);
        self.fetch_activities(query).await
    }
}
