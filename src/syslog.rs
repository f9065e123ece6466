//! System-log bridge
//!
//! When a logger has a syslog sink configured, every message that passes
//! the threshold filter is also forwarded to it, severity-for-severity.
//! The bridged text is the bare payload without header or severity prefix;
//! the system-log service applies its own timestamping and tagging.
//!
//! The bridge is a trait seam so the mapping is testable everywhere; the
//! connector to the local syslog daemon exists on Unix-like platforms only.
//!
//! POSIX supports a single connection to syslogd per process. Applications
//! should configure the syslog sink on one logger and leave `openlog`-style
//! setup to that logger alone; a second connection overwrites the tag and
//! facility of the first.

use crate::core::Severity;

/// Destination for bridged messages, one method per syslog level used.
pub trait SyslogSink: Send {
    /// PANIC messages
    fn emergency(&mut self, message: &str);
    /// FATAL messages
    fn alert(&mut self, message: &str);
    /// ERROR messages
    fn error(&mut self, message: &str);
    /// WARNING messages
    fn warning(&mut self, message: &str);
    /// INFO messages
    fn info(&mut self, message: &str);
    /// DEBUG messages
    fn debug(&mut self, message: &str);
}

/// Deliver one payload at the syslog level matching `severity`.
pub(crate) fn forward(sink: &mut dyn SyslogSink, severity: Severity, message: &str) {
    match severity {
        Severity::Debug => sink.debug(message),
        Severity::Info => sink.info(message),
        Severity::Warning => sink.warning(message),
        Severity::Error => sink.error(message),
        Severity::Fatal => sink.alert(message),
        Severity::Panic => sink.emergency(message),
    }
}

#[cfg(unix)]
pub use self::unix::{connect, Facility, UnixSyslog};

#[cfg(unix)]
mod unix {
    use super::SyslogSink;
    use crate::core::Result;
    use syslog::{Formatter3164, LoggerBackend};

    pub use syslog::Facility;

    /// Connection to the local syslog daemon.
    pub struct UnixSyslog {
        inner: syslog::Logger<LoggerBackend, Formatter3164>,
    }

    /// Connect to the local syslog daemon.
    ///
    /// `facility` defaults to `LOG_USER` when unset. `tag` identifies the
    /// emitting program in the syslog records. Fails when no syslog socket
    /// is reachable on the host.
    pub fn connect(facility: Option<Facility>, tag: &str) -> Result<UnixSyslog> {
        let formatter = Formatter3164 {
            facility: facility.unwrap_or(Facility::LOG_USER),
            hostname: None,
            process: tag.to_owned(),
            pid: std::process::id(),
        };
        let inner = syslog::unix(formatter)?;
        Ok(UnixSyslog { inner })
    }

    // Delivery is best-effort; emission never surfaces write errors.
    impl SyslogSink for UnixSyslog {
        fn emergency(&mut self, message: &str) {
            let _ = self.inner.emerg(message.to_owned());
        }

        fn alert(&mut self, message: &str) {
            let _ = self.inner.alert(message.to_owned());
        }

        fn error(&mut self, message: &str) {
            let _ = self.inner.err(message.to_owned());
        }

        fn warning(&mut self, message: &str) {
            let _ = self.inner.warning(message.to_owned());
        }

        fn info(&mut self, message: &str) {
            let _ = self.inner.info(message.to_owned());
        }

        fn debug(&mut self, message: &str) {
            let _ = self.inner.debug(message.to_owned());
        }
    }
}
