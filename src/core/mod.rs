//! Core logger types

pub mod error;
pub mod format;
pub mod logger;
pub mod outcome;
pub mod severity;

pub use error::{Error, Result};
pub use format::{FileLocation, FormatFlags};
pub use logger::{Logger, LoggerBuilder};
pub use outcome::Outcome;
pub use severity::Severity;
