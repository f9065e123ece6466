//! # llog
//!
//! Leveled logging on top of any line-oriented writer.
//!
//! ## Features
//!
//! - **Severity Filtering**: six ordered severities with a mutable threshold
//! - **Line Formatting**: date, time, microseconds, and call-site header
//!   fields plus an optional severity prefix
//! - **Sink Fan-Out**: log to several destinations at once, including
//!   append-mode files
//! - **Syslog Bridge**: forward every message to the OS system log,
//!   severity-for-severity (Unix)
//! - **Terminal Actions**: `fatal` exits and `panic` unwinds, always after
//!   the message has reached every sink
//!
//! ## Example
//!
//! ```
//! use llog::prelude::*;
//!
//! let logger = Logger::builder()
//!     .threshold(Severity::Debug)
//!     .show_severity(true)
//!     .build();
//!
//! logger.info("server started");
//! llog::infof!(logger, "listening on port {}", 8080);
//! ```

pub mod core;
pub mod global;
pub mod macros;
pub mod sinks;
pub mod syslog;

pub mod prelude {
    pub use crate::core::{
        Error, FileLocation, FormatFlags, Logger, LoggerBuilder, Outcome, Result, Severity,
    };
    pub use crate::sinks::FanOut;
    pub use crate::syslog::SyslogSink;
}

pub use crate::core::{
    Error, FileLocation, FormatFlags, Logger, LoggerBuilder, Outcome, Result, Severity,
};
pub use crate::global::{
    add_logfile, debug, debugf, debugln, default_logger, error, errorf, errorln, fatal, fatalf,
    fatalln, info, infof, infoln, log, panic, panicf, panicln, set_threshold, set_writer, warning,
    warningf, warningln,
};
pub use crate::sinks::{open_append, FanOut};
pub use crate::syslog::SyslogSink;

#[cfg(unix)]
pub use crate::global::set_syslog;
#[cfg(unix)]
pub use crate::syslog::Facility;
