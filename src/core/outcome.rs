//! Emission outcomes
//!
//! The per-severity convenience methods enact terminal actions themselves:
//! `fatal` exits the process and `panic` unwinds. Hosts that want to decide
//! for themselves go through [`Logger::log`](crate::core::Logger::log) and
//! its siblings, which report the owed action as an [`Outcome`] instead of
//! performing it. In both paths the message is written to every sink before
//! the terminal action takes effect.

use std::process;

/// Result of one emission call through the interceptable entry points.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use = "Fatal and Panic outcomes carry a terminal action; call enact() or handle them explicitly"]
pub enum Outcome {
    /// The message was below the threshold; nothing was written.
    Suppressed,
    /// The message was written to all sinks; no terminal action.
    Written,
    /// A Fatal message was written; the default action is process exit.
    Terminate,
    /// A Panic message was written; the default action is an unwind
    /// carrying the formatted payload.
    Abort(String),
}

impl Outcome {
    /// Perform the default terminal action, if any.
    ///
    /// `Terminate` exits the process with status 1, `Abort` panics with
    /// the payload; the other variants return normally.
    pub fn enact(self) {
        match self {
            Outcome::Suppressed | Outcome::Written => {}
            Outcome::Terminate => process::exit(1),
            Outcome::Abort(message) => panic!("{}", message),
        }
    }

    /// Whether the message reached the sinks.
    pub fn written(&self) -> bool {
        !matches!(self, Outcome::Suppressed)
    }
}
