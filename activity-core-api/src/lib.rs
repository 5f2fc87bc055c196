pub mod action;
pub mod error;

pub use action::*;
pub use error::*;
