//! Process-wide default logger
//!
//! Lazily created on first use with threshold `Info` and standard error as
//! the primary sink. The free functions below mirror the per-instance
//! emission and configuration surface; [`default_logger`] exposes the
//! instance itself for anything not wrapped here.

use crate::core::{Logger, Outcome, Result, Severity};
use once_cell::sync::Lazy;
use std::fmt::{self, Display};
use std::io::Write;
use std::path::Path;

static DEFAULT: Lazy<Logger> = Lazy::new(Logger::default);

/// The process-wide logger instance.
pub fn default_logger() -> &'static Logger {
    &DEFAULT
}

/// Replace the default logger's primary sink.
pub fn set_writer(writer: impl Write + Send + 'static) {
    DEFAULT.set_output(writer);
}

/// Set the default logger's threshold.
pub fn set_threshold(threshold: Severity) {
    DEFAULT.set_threshold(threshold);
}

/// Fan the default logger's sink out to an append-mode file.
pub fn add_logfile(path: impl AsRef<Path>) -> Result<()> {
    DEFAULT.add_logfile(path)
}

/// Connect the local syslog daemon to the default logger.
#[cfg(unix)]
pub fn set_syslog(facility: Option<crate::syslog::Facility>, tag: &str) -> Result<()> {
    DEFAULT.set_syslog(facility, tag)
}

/// Emit on the default logger, reporting the terminal action as an
/// [`Outcome`] instead of performing it.
#[track_caller]
pub fn log(severity: Severity, args: fmt::Arguments<'_>) -> Outcome {
    DEFAULT.log(severity, args)
}

/// Write a debug message to the default logger.
#[track_caller]
pub fn debug(message: impl Display) {
    DEFAULT.debug(message);
}

/// Write a debug message from pre-built format arguments.
#[track_caller]
pub fn debugf(args: fmt::Arguments<'_>) {
    DEFAULT.debugf(args);
}

/// Write a line-terminated debug message.
#[track_caller]
pub fn debugln(message: impl Display) {
    DEFAULT.debugln(message);
}

/// Write an info message to the default logger.
#[track_caller]
pub fn info(message: impl Display) {
    DEFAULT.info(message);
}

/// Write an info message from pre-built format arguments.
#[track_caller]
pub fn infof(args: fmt::Arguments<'_>) {
    DEFAULT.infof(args);
}

/// Write a line-terminated info message.
#[track_caller]
pub fn infoln(message: impl Display) {
    DEFAULT.infoln(message);
}

/// Write a warning message to the default logger.
#[track_caller]
pub fn warning(message: impl Display) {
    DEFAULT.warning(message);
}

/// Write a warning message from pre-built format arguments.
#[track_caller]
pub fn warningf(args: fmt::Arguments<'_>) {
    DEFAULT.warningf(args);
}

/// Write a line-terminated warning message.
#[track_caller]
pub fn warningln(message: impl Display) {
    DEFAULT.warningln(message);
}

/// Write an error message to the default logger.
#[track_caller]
pub fn error(message: impl Display) {
    DEFAULT.error(message);
}

/// Write an error message from pre-built format arguments.
#[track_caller]
pub fn errorf(args: fmt::Arguments<'_>) {
    DEFAULT.errorf(args);
}

/// Write a line-terminated error message.
#[track_caller]
pub fn errorln(message: impl Display) {
    DEFAULT.errorln(message);
}

/// Write a fatal message to the default logger, then exit the process.
#[track_caller]
pub fn fatal(message: impl Display) {
    DEFAULT.fatal(message);
}

/// [`fatal`] from pre-built format arguments.
#[track_caller]
pub fn fatalf(args: fmt::Arguments<'_>) {
    DEFAULT.fatalf(args);
}

/// Line-terminated [`fatal`].
#[track_caller]
pub fn fatalln(message: impl Display) {
    DEFAULT.fatalln(message);
}

/// Write a panic message to the default logger, then unwind.
#[track_caller]
pub fn panic(message: impl Display) {
    DEFAULT.panic(message);
}

/// [`panic`] from pre-built format arguments.
#[track_caller]
pub fn panicf(args: fmt::Arguments<'_>) {
    DEFAULT.panicf(args);
}

/// Line-terminated [`panic`].
#[track_caller]
pub fn panicln(message: impl Display) {
    DEFAULT.panicln(message);
}
