//! Sink implementations
//!
//! A sink is anything implementing `std::io::Write`; this module adds the
//! fan-out wrapper and the append-mode file helper used by `add_logfile`.

pub mod fanout;
pub mod file;

pub use fanout::FanOut;
pub use file::open_append;
