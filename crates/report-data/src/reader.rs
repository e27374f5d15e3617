//! Input file ingestion.
//!
//! Reads the line-oriented log from disk and runs every line through the
//! parser, returning the two record sequences for the aggregator. This is
//! the only place in the data layer that touches the filesystem.

use std::io::BufRead;
use std::path::Path;

use report_core::error::{ReportError, Result};
use report_core::models::{Record, SessionRecord, UserRecord};
use tracing::debug;

use crate::parser::{parse_line, BrowserCache};

/// Everything produced by one pass over the input file.
#[derive(Debug, Default)]
pub struct LoadedRecords {
    pub users: Vec<UserRecord>,
    pub sessions: Vec<SessionRecord>,
    /// Total lines read from the file.
    pub lines_read: u64,
    /// Lines whose first field was neither `user` nor `session`.
    pub lines_ignored: u64,
}

/// Read `path` and parse every line into records.
///
/// Unrecognized lines are counted and skipped silently per the input
/// contract. The browser-normalization cache lives for exactly this one
/// pass.
pub fn load_records(path: &Path) -> Result<LoadedRecords> {
    let file = std::fs::File::open(path).map_err(|source| ReportError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;

    let mut loaded = LoadedRecords::default();
    let mut browsers = BrowserCache::new();

    let reader = std::io::BufReader::new(file);
    for line_result in reader.lines() {
        let line = line_result.map_err(|source| ReportError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        loaded.lines_read += 1;

        match parse_line(&line, &mut browsers) {
            Record::User(user) => loaded.users.push(user),
            Record::Session(session) => loaded.sessions.push(session),
            Record::Unrecognized => loaded.lines_ignored += 1,
        }
    }

    debug!(
        "File {}: {} lines read, {} users, {} sessions, {} ignored, {} distinct raw browsers",
        path.display(),
        loaded.lines_read,
        loaded.users.len(),
        loaded.sessions.len(),
        loaded.lines_ignored,
        browsers.len(),
    );

    Ok(loaded)
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn write_log(dir: &Path, name: &str, lines: &[&str]) -> PathBuf {
        let path = dir.join(name);
        let mut file = std::fs::File::create(&path).unwrap();
        for line in lines {
            writeln!(file, "{}", line).unwrap();
        }
        path
    }

    #[test]
    fn test_load_records_basic() {
        let dir = TempDir::new().unwrap();
        let path = write_log(
            dir.path(),
            "data.txt",
            &[
                "user,1,Anna,Smith,28",
                "session,1,s1,chrome,10,2020-01-02",
                "session,1,s2,Firefox,20,2020-01-05",
            ],
        );

        let loaded = load_records(&path).unwrap();
        assert_eq!(loaded.users.len(), 1);
        assert_eq!(loaded.sessions.len(), 2);
        assert_eq!(loaded.lines_read, 3);
        assert_eq!(loaded.lines_ignored, 0);
        assert_eq!(loaded.sessions[1].browser, "FIREFOX");
    }

    #[test]
    fn test_load_records_counts_ignored_lines() {
        let dir = TempDir::new().unwrap();
        let path = write_log(
            dir.path(),
            "data.txt",
            &["user,1,Anna,Smith,28", "comment,whatever", ""],
        );

        let loaded = load_records(&path).unwrap();
        assert_eq!(loaded.users.len(), 1);
        assert_eq!(loaded.sessions.len(), 0);
        assert_eq!(loaded.lines_ignored, 2);
    }

    #[test]
    fn test_load_records_missing_file() {
        let err = load_records(Path::new("/tmp/does-not-exist-session-report-xyz")).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("Failed to read file"));
        assert!(msg.contains("does-not-exist-session-report-xyz"));
    }

    #[test]
    fn test_load_records_empty_file() {
        let dir = TempDir::new().unwrap();
        let path = write_log(dir.path(), "data.txt", &[]);

        let loaded = load_records(&path).unwrap();
        assert!(loaded.users.is_empty());
        assert!(loaded.sessions.is_empty());
        assert_eq!(loaded.lines_read, 0);
    }
}
