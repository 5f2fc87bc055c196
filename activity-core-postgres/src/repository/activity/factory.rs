use postgres_unit_of_work::Executor;
use std::sync::Arc;

use super::activity_repository::ActivityRepositoryImpl;

/// Factory for creating activity module repositories
///
/// Provides methods to build repositories with the appropriate executor.
/// This should be used as a singleton throughout the application.
#[derive(Default)]
pub struct ActivityRepoFactory {}

impl ActivityRepoFactory {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {})
    }

    /// Build all activity repositories on the executor of an open transaction
    pub fn build_all_repos_with_executor(&self, executor: &Executor) -> ActivityRepositories {
        ActivityRepositories {
            activity_repository: Arc::new(ActivityRepositoryImpl::new(executor.clone())),
        }
    }
}

/// Container for all activity module repositories
pub struct ActivityRepositories {
    pub activity_repository: Arc<ActivityRepositoryImpl>,
}
