pub mod models;
pub mod recorder;
pub mod repository;
pub mod settings;
pub mod tracking;

pub use models::*;
pub use recorder::ActivityRecorder;
pub use repository::*;
pub use settings::ActivitySettings;
pub use tracking::*;
