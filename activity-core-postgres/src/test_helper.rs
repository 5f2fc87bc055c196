//! Test helper module for transaction-based test isolation
//!
//! Tests run inside a database transaction that is rolled back when the
//! context is dropped, so no explicit cleanup is needed. They need a running
//! PostgreSQL reachable through `DATABASE_URL`.

use crate::config::PostgresConfig;
use crate::postgres_repositories::PostgresRepositories;
use crate::repository::activity::ActivityRepositories;
use crate::repository::db_init::init_database;

/// Test context that provides a transactional database session
pub struct TestContext {
    pub activity_repos: ActivityRepositories,
}

impl TestContext {
    pub fn activity_repos(&self) -> &ActivityRepositories {
        &self.activity_repos
    }
}

/// Setup a test context with a transactional database session
pub async fn setup_test_context() -> Result<TestContext, Box<dyn std::error::Error + Send + Sync>> {
    let config = PostgresConfig::from_env().with_max_connections(1);
    let repos = PostgresRepositories::connect(&config).await?;
    init_database(repos.pool()).await?;

    let activity_repos = repos.create_activity_repositories().await?;
    Ok(TestContext { activity_repos })
}
