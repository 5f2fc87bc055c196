pub mod count;
pub mod create;
pub mod delete_by_trackable_key;
pub mod find_by_owner;
pub mod find_by_recipient;
pub mod find_by_trackable;
pub mod in_memory;

// Re-exports
pub use count::*;
pub use create::*;
pub use delete_by_trackable_key::*;
pub use find_by_owner::*;
pub use find_by_recipient::*;
pub use find_by_trackable::*;
pub use in_memory::InMemoryActivityRepository;

/// Everything the recorder needs from an activity store
pub trait ActivityStore:
    CreateActivity + DeleteByTrackableKey + FindByTrackable + FindByOwner + FindByRecipient + CountActivities
{
}

impl<T> ActivityStore for T where
    T: CreateActivity
        + DeleteByTrackableKey
        + FindByTrackable
        + FindByOwner
        + FindByRecipient
        + CountActivities
{
}
