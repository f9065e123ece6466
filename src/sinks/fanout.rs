//! Fan-out sink
//!
//! Forwards every write to a set of underlying sinks. Delivery is
//! best-effort: each write is attempted on every sink, and the first
//! error is reported only after all sinks have been attempted, so one
//! failing destination never starves the others.

use crate::core::Result;
use crate::sinks::file::open_append;
use std::io::{self, Write};
use std::path::Path;

/// A sink that writes to multiple underlying sinks.
pub struct FanOut {
    sinks: Vec<Box<dyn Write + Send>>,
}

impl FanOut {
    /// Empty fan-out; writes go nowhere until sinks are added.
    pub fn new() -> Self {
        Self { sinks: Vec::new() }
    }

    /// Fan-out starting with one sink.
    pub fn from_writer(writer: impl Write + Send + 'static) -> Self {
        Self {
            sinks: vec![Box::new(writer)],
        }
    }

    /// Add a sink. Sinks are only ever added, never removed.
    pub fn push(&mut self, writer: impl Write + Send + 'static) {
        self.sinks.push(Box::new(writer));
    }

    /// Builder-style [`push`](Self::push).
    #[must_use]
    pub fn with(mut self, writer: impl Write + Send + 'static) -> Self {
        self.push(writer);
        self
    }

    /// Open `path` for append (creating it when absent) and add it as a
    /// destination. On failure the fan-out is left untouched, so callers
    /// keep logging to the pre-existing destinations.
    pub fn add_logfile(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let file = open_append(path)?;
        self.push(file);
        Ok(())
    }

    /// Number of underlying sinks.
    pub fn len(&self) -> usize {
        self.sinks.len()
    }

    /// Whether there are no underlying sinks.
    pub fn is_empty(&self) -> bool {
        self.sinks.is_empty()
    }
}

impl Default for FanOut {
    fn default() -> Self {
        Self::new()
    }
}

impl Write for FanOut {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut first_error = None;
        for sink in &mut self.sinks {
            if let Err(e) = sink.write_all(buf) {
                first_error.get_or_insert(e);
            }
        }
        match first_error {
            Some(e) => Err(e),
            None => Ok(buf.len()),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        let mut first_error = None;
        for sink in &mut self.sinks {
            if let Err(e) = sink.flush() {
                first_error.get_or_insert(e);
            }
        }
        match first_error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}
