use postgres_unit_of_work::Executor;
use sqlx::PgPool;
use std::sync::Arc;

use crate::config::PostgresConfig;
use crate::repository::activity::{ActivityRepoFactory, ActivityRepositories};

pub struct PostgresRepositories {
    pool: Arc<PgPool>,
}

impl PostgresRepositories {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }

    pub async fn connect(config: &PostgresConfig) -> Result<Self, sqlx::Error> {
        Ok(Self::new(Arc::new(config.connect().await?)))
    }

    pub fn pool(&self) -> &Arc<PgPool> {
        &self.pool
    }

    /// Create the activity repositories sharing a single transaction
    pub async fn create_activity_repositories(&self) -> Result<ActivityRepositories, sqlx::Error> {
        let tx = self.pool.begin().await?;
        let executor = Executor::new(tx);
        Ok(ActivityRepoFactory::new().build_all_repos_with_executor(&executor))
    }
}
