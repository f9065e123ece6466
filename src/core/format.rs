//! Line header composition
//!
//! Each emitted line starts with an optional literal prefix followed by the
//! header fields selected by [`FormatFlags`], in fixed order: date, time
//! (with optional microsecond resolution), call-site location. Every field
//! carries a single trailing space separating it from what follows.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::panic::Location;

/// Call-site location field of the line header.
///
/// Short and long form are mutually exclusive by construction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FileLocation {
    /// No call-site field
    #[default]
    None,
    /// File name without leading directories, plus line number
    Short,
    /// Full path as compiled, plus line number
    Long,
}

/// Header field selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormatFlags {
    /// Date as `YYYY/MM/DD`
    pub date: bool,
    /// Time as `HH:MM:SS`
    pub time: bool,
    /// Microsecond suffix on the time field; implies the time field
    pub microseconds: bool,
    /// Call-site location, `file:line`
    pub file: FileLocation,
}

impl Default for FormatFlags {
    fn default() -> Self {
        Self {
            date: true,
            time: true,
            microseconds: false,
            file: FileLocation::None,
        }
    }
}

impl FormatFlags {
    /// Flag set with every field disabled.
    pub fn none() -> Self {
        Self {
            date: false,
            time: false,
            microseconds: false,
            file: FileLocation::None,
        }
    }
}

/// Per-logger formatting state guarded together under one lock.
#[derive(Debug, Clone, Default)]
pub(crate) struct FormatConfig {
    pub prefix: String,
    pub severity_prefix: bool,
    pub flags: FormatFlags,
}

/// Render the header fields for one line.
pub(crate) fn format_header(
    flags: FormatFlags,
    now: DateTime<Local>,
    location: &Location<'_>,
) -> String {
    let mut header = String::new();

    if flags.date {
        header.push_str(&now.format("%Y/%m/%d ").to_string());
    }

    // Microsecond resolution implies the time field itself.
    if flags.time || flags.microseconds {
        if flags.microseconds {
            header.push_str(&now.format("%H:%M:%S%.6f ").to_string());
        } else {
            header.push_str(&now.format("%H:%M:%S ").to_string());
        }
    }

    match flags.file {
        FileLocation::None => {}
        FileLocation::Short => {
            let file = location.file();
            let short = file.rsplit(['/', '\\']).next().unwrap_or(file);
            header.push_str(&format!("{}:{}: ", short, location.line()));
        }
        FileLocation::Long => {
            header.push_str(&format!("{}:{}: ", location.file(), location.line()));
        }
    }

    header
}
