pub mod activity_repository;
pub mod factory;

pub use activity_repository::ActivityRepositoryImpl;
pub use factory::{ActivityRepoFactory, ActivityRepositories};
