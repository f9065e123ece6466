//! Append-mode log file handling

use crate::core::{Error, Result};
use std::fs::{File, OpenOptions};
use std::path::Path;

/// Open `path` for appending, creating it when absent.
pub fn open_append(path: impl AsRef<Path>) -> Result<File> {
    let path = path.as_ref();
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|source| Error::file_open(path.display().to_string(), source))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_open_append_creates_and_appends() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("app.log");

        let mut file = open_append(&path).expect("create");
        file.write_all(b"first\n").expect("write");
        drop(file);

        let mut file = open_append(&path).expect("reopen");
        file.write_all(b"second\n").expect("write");
        drop(file);

        let content = std::fs::read_to_string(&path).expect("read");
        assert_eq!(content, "first\nsecond\n");
    }

    #[test]
    fn test_open_append_reports_path() {
        let err = open_append("/nonexistent-dir/app.log").unwrap_err();
        assert!(err.to_string().contains("/nonexistent-dir/app.log"));
    }
}
