//! Error types for the logger

pub type Result<T> = std::result::Result<T, Error>;

/// Configuration-time errors.
///
/// Emission never returns an error; only configuration operations
/// (attaching a log file, connecting syslog) can fail.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Generic IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A log file could not be opened for append
    #[error("cannot open log file '{path}': {source}")]
    FileOpen {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The system-log service could not be reached
    #[cfg(unix)]
    #[error("syslog connection failed: {0}")]
    Syslog(#[from] syslog::Error),
}

impl Error {
    /// Create a file open error with the offending path
    pub fn file_open(path: impl Into<String>, source: std::io::Error) -> Self {
        Error::FileOpen {
            path: path.into(),
            source,
        }
    }
}
