//! Main logger implementation

use super::{
    error::Result,
    format::{format_header, FileLocation, FormatConfig, FormatFlags},
    outcome::Outcome,
    severity::Severity,
};
use crate::sinks::{open_append, FanOut};
use crate::syslog::{self, SyslogSink};
use chrono::Local;
use parking_lot::{Mutex, RwLock};
use std::fmt::{self, Display};
use std::io::Write;
use std::panic::Location;

type BoxedWriter = Box<dyn Write + Send>;

/// Leveled logger over a line-oriented sink.
///
/// Emission is a single synchronous call path: threshold check, syslog
/// bridge, format, write to the primary sink, optional terminal action.
/// All state is guarded per instance, so a `Logger` can be shared across
/// threads by reference; interleaving of concurrent lines is serialized
/// by the writer lock.
pub struct Logger {
    threshold: RwLock<Severity>,
    config: RwLock<FormatConfig>,
    writer: Mutex<BoxedWriter>,
    syslog: Mutex<Option<Box<dyn SyslogSink>>>,
}

impl Logger {
    /// Create a logger emitting messages at `threshold` and above to `writer`.
    ///
    /// Initial formatting: date and time enabled, everything else disabled,
    /// severity prefix off.
    pub fn new(threshold: Severity, writer: impl Write + Send + 'static) -> Self {
        Self {
            threshold: RwLock::new(threshold),
            config: RwLock::new(FormatConfig::default()),
            writer: Mutex::new(Box::new(writer)),
            syslog: Mutex::new(None),
        }
    }

    /// Create a builder for `Logger`
    ///
    /// # Example
    /// ```
    /// use llog::prelude::*;
    ///
    /// let logger = Logger::builder()
    ///     .threshold(Severity::Debug)
    ///     .show_severity(true)
    ///     .build();
    /// ```
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    // ------------------------------------------------------------------
    // Configuration
    // ------------------------------------------------------------------

    /// Current minimum emitted severity.
    pub fn threshold(&self) -> Severity {
        *self.threshold.read()
    }

    /// Set the minimum emitted severity; takes effect immediately.
    pub fn set_threshold(&self, threshold: Severity) {
        *self.threshold.write() = threshold;
    }

    /// Current literal line prefix.
    pub fn prefix(&self) -> String {
        self.config.read().prefix.clone()
    }

    /// Set a literal prefix written before the header of every line.
    pub fn set_prefix(&self, prefix: impl Into<String>) {
        self.config.write().prefix = prefix.into();
    }

    /// Toggle the `"<SEVERITY> - "` payload prefix. Default: disabled.
    pub fn show_severity(&self, enabled: bool) {
        self.config.write().severity_prefix = enabled;
    }

    /// Toggle the date header field. Default: enabled.
    pub fn show_date(&self, enabled: bool) {
        self.config.write().flags.date = enabled;
    }

    /// Toggle the time header field. Default: enabled.
    pub fn show_time(&self, enabled: bool) {
        self.config.write().flags.time = enabled;
    }

    /// Toggle microsecond resolution on the time field. Default: disabled.
    pub fn show_microseconds(&self, enabled: bool) {
        self.config.write().flags.microseconds = enabled;
    }

    /// Toggle the short (file name only) call-site field.
    /// Enabling it replaces the long form. Default: disabled.
    pub fn show_short_file(&self, enabled: bool) {
        let mut config = self.config.write();
        config.flags.file = match (enabled, config.flags.file) {
            (true, _) => FileLocation::Short,
            (false, FileLocation::Short) => FileLocation::None,
            (false, other) => other,
        };
    }

    /// Toggle the long (full path) call-site field.
    /// Enabling it replaces the short form. Default: disabled.
    pub fn show_long_file(&self, enabled: bool) {
        let mut config = self.config.write();
        config.flags.file = match (enabled, config.flags.file) {
            (true, _) => FileLocation::Long,
            (false, FileLocation::Long) => FileLocation::None,
            (false, other) => other,
        };
    }

    /// Current header field selection.
    pub fn flags(&self) -> FormatFlags {
        self.config.read().flags
    }

    /// Replace the header field selection wholesale.
    pub fn set_flags(&self, flags: FormatFlags) {
        self.config.write().flags = flags;
    }

    /// Replace the primary sink.
    pub fn set_output(&self, writer: impl Write + Send + 'static) {
        *self.writer.lock() = Box::new(writer);
    }

    /// Fan the primary sink out to `path`, opened for append (created when
    /// absent). On failure the current sink stays installed untouched.
    pub fn add_logfile(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let file = open_append(path)?;
        let mut writer = self.writer.lock();
        let current = std::mem::replace(&mut *writer, Box::new(std::io::sink()));
        *writer = Box::new(FanOut::from_writer(current).with(file));
        Ok(())
    }

    /// Install a system-log sink; every emitted message is additionally
    /// forwarded to it, severity-for-severity.
    pub fn set_syslog_sink(&self, sink: Box<dyn SyslogSink>) {
        *self.syslog.lock() = Some(sink);
    }

    /// Connect the local syslog daemon as an additional destination.
    ///
    /// `facility` defaults to `LOG_USER` when `None`; `tag` identifies the
    /// program. A connection failure is returned to the caller and leaves
    /// the primary sink untouched.
    #[cfg(unix)]
    pub fn set_syslog(&self, facility: Option<syslog::Facility>, tag: &str) -> Result<()> {
        let sink = syslog::connect(facility, tag)?;
        self.set_syslog_sink(Box::new(sink));
        Ok(())
    }

    // ------------------------------------------------------------------
    // Interceptable emission
    // ------------------------------------------------------------------

    /// Emit a template-style message, reporting the owed terminal action
    /// as an [`Outcome`] instead of performing it.
    #[track_caller]
    pub fn log(&self, severity: Severity, args: fmt::Arguments<'_>) -> Outcome {
        if severity < self.threshold() {
            return Outcome::Suppressed;
        }
        self.emit(severity, args.to_string(), false, Location::caller())
    }

    /// Emit a plain message; see [`log`](Self::log).
    #[track_caller]
    pub fn log_plain(&self, severity: Severity, message: impl Display) -> Outcome {
        if severity < self.threshold() {
            return Outcome::Suppressed;
        }
        self.emit(severity, message.to_string(), false, Location::caller())
    }

    /// Emit a line-terminated message (exactly one newline is appended
    /// unconditionally); see [`log`](Self::log).
    #[track_caller]
    pub fn log_line(&self, severity: Severity, message: impl Display) -> Outcome {
        if severity < self.threshold() {
            return Outcome::Suppressed;
        }
        self.emit(severity, message.to_string(), true, Location::caller())
    }

    /// Full pipeline past the threshold filter. The payload reaches every
    /// sink before the outcome is returned, so terminal actions never lose
    /// the record of their own cause.
    fn emit(
        &self,
        severity: Severity,
        payload: String,
        force_newline: bool,
        location: &Location<'_>,
    ) -> Outcome {
        // Bridge the bare payload first; syslog supplies its own
        // timestamping and severity tagging. Best-effort.
        {
            let mut guard = self.syslog.lock();
            if let Some(sink) = guard.as_mut() {
                syslog::forward(sink.as_mut(), severity, payload.trim_end_matches('\n'));
            }
        }

        let config = self.config.read().clone();

        let mut body = String::new();
        if config.severity_prefix {
            body.push_str(severity.as_str());
            body.push_str(" - ");
        }
        body.push_str(&payload);

        let mut line = String::with_capacity(config.prefix.len() + body.len() + 32);
        line.push_str(&config.prefix);
        line.push_str(&format_header(config.flags, Local::now(), location));
        line.push_str(&body);
        if force_newline {
            line.push('\n');
        } else if !line.ends_with('\n') {
            line.push('\n');
        }

        // Write failures are swallowed; emission has no failure return.
        {
            let mut writer = self.writer.lock();
            let _ = writer.write_all(line.as_bytes());
            let _ = writer.flush();
        }

        match severity {
            Severity::Fatal => Outcome::Terminate,
            Severity::Panic => Outcome::Abort(body),
            _ => Outcome::Written,
        }
    }

    // ------------------------------------------------------------------
    // Per-severity emission
    // ------------------------------------------------------------------

    /// Write a debug message.
    #[track_caller]
    pub fn debug(&self, message: impl Display) {
        let _ = self.log_plain(Severity::Debug, message);
    }

    /// Write a debug message from pre-built format arguments.
    #[track_caller]
    pub fn debugf(&self, args: fmt::Arguments<'_>) {
        let _ = self.log(Severity::Debug, args);
    }

    /// Write a line-terminated debug message.
    #[track_caller]
    pub fn debugln(&self, message: impl Display) {
        let _ = self.log_line(Severity::Debug, message);
    }

    /// Write an info message.
    #[track_caller]
    pub fn info(&self, message: impl Display) {
        let _ = self.log_plain(Severity::Info, message);
    }

    /// Write an info message from pre-built format arguments.
    #[track_caller]
    pub fn infof(&self, args: fmt::Arguments<'_>) {
        let _ = self.log(Severity::Info, args);
    }

    /// Write a line-terminated info message.
    #[track_caller]
    pub fn infoln(&self, message: impl Display) {
        let _ = self.log_line(Severity::Info, message);
    }

    /// Write a warning message.
    #[track_caller]
    pub fn warning(&self, message: impl Display) {
        let _ = self.log_plain(Severity::Warning, message);
    }

    /// Write a warning message from pre-built format arguments.
    #[track_caller]
    pub fn warningf(&self, args: fmt::Arguments<'_>) {
        let _ = self.log(Severity::Warning, args);
    }

    /// Write a line-terminated warning message.
    #[track_caller]
    pub fn warningln(&self, message: impl Display) {
        let _ = self.log_line(Severity::Warning, message);
    }

    /// Write an error message.
    #[track_caller]
    pub fn error(&self, message: impl Display) {
        let _ = self.log_plain(Severity::Error, message);
    }

    /// Write an error message from pre-built format arguments.
    #[track_caller]
    pub fn errorf(&self, args: fmt::Arguments<'_>) {
        let _ = self.log(Severity::Error, args);
    }

    /// Write a line-terminated error message.
    #[track_caller]
    pub fn errorln(&self, message: impl Display) {
        let _ = self.log_line(Severity::Error, message);
    }

    /// Write a fatal message, then exit the process with status 1.
    /// Suppressed messages (threshold above Fatal) skip the exit as well.
    #[track_caller]
    pub fn fatal(&self, message: impl Display) {
        self.log_plain(Severity::Fatal, message).enact();
    }

    /// [`fatal`](Self::fatal) from pre-built format arguments.
    #[track_caller]
    pub fn fatalf(&self, args: fmt::Arguments<'_>) {
        self.log(Severity::Fatal, args).enact();
    }

    /// Line-terminated [`fatal`](Self::fatal).
    #[track_caller]
    pub fn fatalln(&self, message: impl Display) {
        self.log_line(Severity::Fatal, message).enact();
    }

    /// Write a panic message, then unwind carrying the formatted payload.
    /// Suppressed messages skip the unwind as well.
    #[track_caller]
    pub fn panic(&self, message: impl Display) {
        self.log_plain(Severity::Panic, message).enact();
    }

    /// [`panic`](Self::panic) from pre-built format arguments.
    #[track_caller]
    pub fn panicf(&self, args: fmt::Arguments<'_>) {
        self.log(Severity::Panic, args).enact();
    }

    /// Line-terminated [`panic`](Self::panic).
    #[track_caller]
    pub fn panicln(&self, message: impl Display) {
        self.log_line(Severity::Panic, message).enact();
    }
}

impl Default for Logger {
    /// Threshold `Info`, primary sink standard error.
    fn default() -> Self {
        Self::new(Severity::Info, std::io::stderr())
    }
}

/// Builder for constructing `Logger` with a fluent API
///
/// # Example
/// ```
/// use llog::prelude::*;
///
/// let logger = Logger::builder()
///     .threshold(Severity::Warning)
///     .prefix("app: ")
///     .show_severity(true)
///     .show_microseconds(true)
///     .build();
/// ```
pub struct LoggerBuilder {
    threshold: Severity,
    writer: Option<BoxedWriter>,
    prefix: String,
    severity_prefix: bool,
    flags: FormatFlags,
}

impl LoggerBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self {
            threshold: Severity::Info,
            writer: None,
            prefix: String::new(),
            severity_prefix: false,
            flags: FormatFlags::default(),
        }
    }

    /// Set the minimum emitted severity
    #[must_use = "builder methods return a new value"]
    pub fn threshold(mut self, threshold: Severity) -> Self {
        self.threshold = threshold;
        self
    }

    /// Set the primary sink; defaults to standard error
    #[must_use = "builder methods return a new value"]
    pub fn writer(mut self, writer: impl Write + Send + 'static) -> Self {
        self.writer = Some(Box::new(writer));
        self
    }

    /// Set the literal line prefix
    #[must_use = "builder methods return a new value"]
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Enable or disable the severity payload prefix
    #[must_use = "builder methods return a new value"]
    pub fn show_severity(mut self, enabled: bool) -> Self {
        self.severity_prefix = enabled;
        self
    }

    /// Enable or disable microsecond resolution on the time field
    #[must_use = "builder methods return a new value"]
    pub fn show_microseconds(mut self, enabled: bool) -> Self {
        self.flags.microseconds = enabled;
        self
    }

    /// Replace the header field selection wholesale
    #[must_use = "builder methods return a new value"]
    pub fn flags(mut self, flags: FormatFlags) -> Self {
        self.flags = flags;
        self
    }

    /// Build the `Logger`
    pub fn build(self) -> Logger {
        let writer = self
            .writer
            .unwrap_or_else(|| Box::new(std::io::stderr()) as BoxedWriter);
        let logger = Logger::new(self.threshold, writer);
        {
            let mut config = logger.config.write();
            config.prefix = self.prefix;
            config.severity_prefix = self.severity_prefix;
            config.flags = self.flags;
        }
        logger
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::sync::{Arc, Mutex as StdMutex};

    #[derive(Clone, Default)]
    struct SharedBuf(Arc<StdMutex<Vec<u8>>>);

    impl SharedBuf {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    impl Write for SharedBuf {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn quiet_logger(threshold: Severity) -> (Logger, SharedBuf) {
        let buf = SharedBuf::default();
        let logger = Logger::new(threshold, buf.clone());
        logger.set_flags(FormatFlags::none());
        (logger, buf)
    }

    #[test]
    fn test_threshold_short_circuits() {
        let (logger, buf) = quiet_logger(Severity::Warning);
        logger.info("dropped");
        assert!(buf.contents().is_empty());

        logger.warning("kept");
        assert_eq!(buf.contents(), "kept\n");
    }

    #[test]
    fn test_threshold_mutation_takes_effect() {
        let (logger, buf) = quiet_logger(Severity::Error);
        logger.info("before");
        logger.set_threshold(Severity::Debug);
        logger.info("after");
        assert_eq!(buf.contents(), "after\n");
    }

    #[test]
    fn test_severity_prefix() {
        let (logger, buf) = quiet_logger(Severity::Debug);
        logger.show_severity(true);
        logger.debug("message");
        assert_eq!(buf.contents(), "DEBUG - message\n");

        logger.show_severity(false);
        logger.debug("bare");
        assert_eq!(buf.contents(), "DEBUG - message\nbare\n");
    }

    #[test]
    fn test_line_prefix_precedes_header() {
        let (logger, buf) = quiet_logger(Severity::Info);
        logger.set_prefix("myapp: ");
        logger.info("up");
        assert_eq!(buf.contents(), "myapp: up\n");
    }

    #[test]
    fn test_plain_vs_line_newline_rules() {
        let (logger, buf) = quiet_logger(Severity::Info);
        logger.info("already terminated\n");
        logger.infoln("forced\n");
        assert_eq!(buf.contents(), "already terminated\nforced\n\n");
    }

    #[test]
    fn test_template_style() {
        let (logger, buf) = quiet_logger(Severity::Info);
        logger.infof(format_args!("{} {} {}", "Test", "Message", 1));
        assert_eq!(buf.contents(), "Test Message 1\n");
    }

    #[test]
    fn test_file_flags_mutually_exclusive() {
        let (logger, _buf) = quiet_logger(Severity::Info);

        logger.show_short_file(true);
        assert_eq!(logger.flags().file, FileLocation::Short);

        logger.show_long_file(true);
        assert_eq!(logger.flags().file, FileLocation::Long);

        logger.show_short_file(true);
        assert_eq!(logger.flags().file, FileLocation::Short);

        // Disabling the inactive form leaves the active one in place.
        logger.show_long_file(false);
        assert_eq!(logger.flags().file, FileLocation::Short);

        logger.show_short_file(false);
        assert_eq!(logger.flags().file, FileLocation::None);
    }

    #[test]
    fn test_fatal_outcome_after_write() {
        let (logger, buf) = quiet_logger(Severity::Debug);
        let outcome = logger.log(Severity::Fatal, format_args!("going down"));
        // The sink already holds the record when the outcome is reported.
        assert_eq!(buf.contents(), "going down\n");
        assert_eq!(outcome, Outcome::Terminate);
    }

    #[test]
    fn test_suppressed_fatal_skips_terminal_action() {
        let (logger, buf) = quiet_logger(Severity::Panic);
        let outcome = logger.log(Severity::Fatal, format_args!("quiet"));
        assert_eq!(outcome, Outcome::Suppressed);
        assert!(buf.contents().is_empty());
        // enact() on a suppressed outcome must not exit the process.
        outcome.enact();
    }

    #[test]
    fn test_panic_outcome_carries_payload() {
        let (logger, buf) = quiet_logger(Severity::Debug);
        logger.show_severity(true);
        let outcome = logger.log(Severity::Panic, format_args!("unrecoverable"));
        assert_eq!(buf.contents(), "PANIC - unrecoverable\n");
        assert_eq!(outcome, Outcome::Abort("PANIC - unrecoverable".to_string()));
    }

    #[test]
    fn test_panic_method_unwinds_after_write() {
        let (logger, buf) = quiet_logger(Severity::Debug);
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            logger.panic("boom");
        }));
        let payload = result.unwrap_err();
        let message = payload.downcast_ref::<String>().expect("string payload");
        assert_eq!(message, "boom");
        assert_eq!(buf.contents(), "boom\n");
    }

    #[test]
    fn test_set_output_replaces_sink() {
        let (logger, old) = quiet_logger(Severity::Info);
        let new = SharedBuf::default();
        logger.set_output(new.clone());
        logger.info("rerouted");
        assert!(old.contents().is_empty());
        assert_eq!(new.contents(), "rerouted\n");
    }

    #[test]
    fn test_add_logfile_failure_keeps_current_sink() {
        let (logger, buf) = quiet_logger(Severity::Info);
        assert!(logger.add_logfile("/nonexistent-dir/app.log").is_err());
        logger.info("still here");
        assert_eq!(buf.contents(), "still here\n");
    }

    #[test]
    fn test_builder() {
        let buf = SharedBuf::default();
        let logger = Logger::builder()
            .threshold(Severity::Debug)
            .writer(buf.clone())
            .flags(FormatFlags::none())
            .show_severity(true)
            .build();

        assert_eq!(logger.threshold(), Severity::Debug);
        logger.debug("built");
        assert_eq!(buf.contents(), "DEBUG - built\n");
    }
}
