pub mod config;
pub mod context;
pub mod hook;
pub mod options;
pub mod registry;
pub mod switches;
pub mod value;

// Re-exports
pub use config::*;
pub use context::*;
pub use hook::*;
pub use options::*;
pub use registry::*;
pub use switches::*;
pub use value::*;
