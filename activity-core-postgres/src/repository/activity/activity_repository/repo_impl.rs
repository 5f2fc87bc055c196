use activity_core_db::models::activity::ActivityModel;
use async_trait::async_trait;
use postgres_unit_of_work::{Executor, TransactionAware, TransactionResult};
use sqlx::{postgres::PgRow, Row};
use std::error::Error;

use crate::utils::{get_heapless_string, get_optional_reference, TryFromRow};
use activity_core_db::models::entity_reference::EntityReference;

/// Columns selected for every activity query
pub(crate) const ACTIVITY_COLUMNS: &str = "id, key, trackable_type, trackable_id, owner_type, owner_id, \
     recipient_type, recipient_id, parameters, created_at";

pub struct ActivityRepositoryImpl {
    pub executor: Executor,
}

impl ActivityRepositoryImpl {
    pub fn new(executor: Executor) -> Self {
        Self { executor }
    }

    /// Runs `query` on the shared transaction and converts every row
    pub(crate) async fn fetch_activities(
        &self,
        query: sqlx::query::Query<'_, sqlx::Postgres, sqlx::postgres::PgArguments>,
    ) -> Result<Vec<ActivityModel>, Box<dyn Error + Send + Sync>> {
        let mut tx = self.executor.tx.lock().await;
        let transaction = tx.as_mut().ok_or("Transaction has been consumed")?;
        let rows = query.fetch_all(&mut **transaction).await?;
        rows.iter().map(ActivityModel::try_from_row).collect()
    }
}

impl TryFromRow<PgRow> for ActivityModel {
    fn try_from_row(row: &PgRow) -> Result<Self, Box<dyn Error + Send + Sync>> {
        let parameters: serde_json::Value = row.try_get("parameters")?;
        let parameters = match parameters {
            serde_json::Value::Object(map) => map,
            other => return Err(format!("Activity parameters must be an object, got {other}").into()),
        };
        Ok(ActivityModel {
            id: row.try_get("id")?,
            key: get_heapless_string(row, "key")?,
            trackable: EntityReference {
                entity_type: get_heapless_string(row, "trackable_type")?,
                entity_id: row.try_get("trackable_id")?,
            },
            owner: get_optional_reference(row, "owner")?,
            recipient: get_optional_reference(row, "recipient")?,
            parameters,
            created_at: row.try_get("created_at")?,
        })
    }
}

#[async_trait]
impl TransactionAware for ActivityRepositoryImpl {
    async fn on_commit(&self) -> TransactionResult<()> {
        Ok(())
    }

    async fn on_rollback(&self) -> TransactionResult<()> {
        Ok(())
    }
}
