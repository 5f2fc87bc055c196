pub mod activity;
pub mod entity_reference;
pub mod identifiable;
pub mod trackable;

// Re-exports
pub use activity::*;
pub use entity_reference::*;
pub use identifiable::*;
pub use trackable::*;
