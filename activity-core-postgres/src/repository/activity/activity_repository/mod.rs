pub mod repo_impl;
pub mod create;
pub mod delete_by_trackable_key;
pub mod find_by_trackable;
pub mod find_by_owner;
pub mod find_by_recipient;
pub mod count;
#[cfg(test)]
pub mod test_utils;

pub use repo_impl::ActivityRepositoryImpl;
