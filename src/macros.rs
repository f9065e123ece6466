//! Logging macros for template-style message formatting.
//!
//! Each macro forwards its format string and arguments to the matching
//! `*f` method on a logger, the same way `println!` forwards to the
//! standard formatter.
//!
//! # Examples
//!
//! ```
//! use llog::prelude::*;
//! use llog::infof;
//!
//! let logger = Logger::builder().build();
//!
//! let port = 8080;
//! infof!(logger, "listening on port {}", port);
//! ```

/// Emit at an explicit severity with automatic formatting, returning the
/// [`Outcome`](crate::Outcome) for interception.
///
/// # Examples
///
/// ```
/// # use llog::prelude::*;
/// # let logger = Logger::builder().build();
/// use llog::logf;
/// let outcome = logf!(logger, Severity::Info, "retrying in {}s", 5);
/// outcome.enact();
/// ```
#[macro_export]
macro_rules! logf {
    ($logger:expr, $severity:expr, $($arg:tt)+) => {
        $logger.log($severity, format_args!($($arg)+))
    };
}

/// Emit a debug-level message with automatic formatting.
///
/// # Examples
///
/// ```
/// # use llog::prelude::*;
/// # let logger = Logger::builder().threshold(Severity::Debug).build();
/// use llog::debugf;
/// debugf!(logger, "cache miss for {}", "key");
/// ```
#[macro_export]
macro_rules! debugf {
    ($logger:expr, $($arg:tt)+) => {
        $logger.debugf(format_args!($($arg)+))
    };
}

/// Emit an info-level message with automatic formatting.
///
/// # Examples
///
/// ```
/// # use llog::prelude::*;
/// # let logger = Logger::builder().build();
/// use llog::infof;
/// infof!(logger, "processed {} items", 100);
/// ```
#[macro_export]
macro_rules! infof {
    ($logger:expr, $($arg:tt)+) => {
        $logger.infof(format_args!($($arg)+))
    };
}

/// Emit a warning-level message with automatic formatting.
///
/// # Examples
///
/// ```
/// # use llog::prelude::*;
/// # let logger = Logger::builder().build();
/// use llog::warningf;
/// warningf!(logger, "retry {} of {}", 2, 5);
/// ```
#[macro_export]
macro_rules! warningf {
    ($logger:expr, $($arg:tt)+) => {
        $logger.warningf(format_args!($($arg)+))
    };
}

/// Emit an error-level message with automatic formatting.
///
/// # Examples
///
/// ```
/// # use llog::prelude::*;
/// # let logger = Logger::builder().build();
/// use llog::errorf;
/// errorf!(logger, "request failed with status {}", 502);
/// ```
#[macro_export]
macro_rules! errorf {
    ($logger:expr, $($arg:tt)+) => {
        $logger.errorf(format_args!($($arg)+))
    };
}

/// Emit a fatal-level message with automatic formatting, then exit the
/// process.
#[macro_export]
macro_rules! fatalf {
    ($logger:expr, $($arg:tt)+) => {
        $logger.fatalf(format_args!($($arg)+))
    };
}

/// Emit a panic-level message with automatic formatting, then unwind
/// carrying the formatted payload.
#[macro_export]
macro_rules! panicf {
    ($logger:expr, $($arg:tt)+) => {
        $logger.panicf(format_args!($($arg)+))
    };
}

#[cfg(test)]
mod tests {
    use crate::core::{FormatFlags, Logger, Severity};
    use std::io::{self, Write};
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct SharedBuf(Arc<Mutex<Vec<u8>>>);

    impl Write for SharedBuf {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_level_macros() {
        let buf = SharedBuf::default();
        let logger = Logger::new(Severity::Debug, buf.clone());
        logger.set_flags(FormatFlags::none());

        debugf!(logger, "value: {}", 42);
        infof!(logger, "items: {}", 100);
        warningf!(logger, "retry {} of {}", 1, 3);
        errorf!(logger, "code: {}", 500);

        let output = String::from_utf8(buf.0.lock().unwrap().clone()).unwrap();
        assert_eq!(
            output,
            "value: 42\nitems: 100\nretry 1 of 3\ncode: 500\n"
        );
    }

    #[test]
    fn test_logf_returns_outcome() {
        let buf = SharedBuf::default();
        let logger = Logger::new(Severity::Info, buf.clone());
        logger.set_flags(FormatFlags::none());

        let outcome = logf!(logger, Severity::Debug, "filtered {}", 1);
        assert!(!outcome.written());

        let outcome = logf!(logger, Severity::Error, "written {}", 2);
        assert!(outcome.written());
        outcome.enact();
    }
}
