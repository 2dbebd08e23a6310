//! File access for the headline history.
//!
//! The history is read in full on open and written in full on save. Writes go
//! through a sibling temporary file that is synced and then renamed over the
//! target, so a failed save leaves the previous file as it was.

use super::{Entries, Record};
use crate::constants::{DATE_FORMAT_ISO, JOURNAL_TEMP_PREFIX};
use crate::errors::{AppResult, JournalError};
use chrono::NaiveDate;
use std::collections::BTreeMap;
use std::fs;
use std::io::{self, Write};
use std::path::Path;
use tracing::debug;


/// Storage backend for the journal file.
pub trait JournalIO {
    /// Reads the whole file. `Ok(None)` means nothing is stored at `path`.
    fn read(&self, path: &Path) -> AppResult<Option<String>>;
    /// Replaces the whole file with `contents`.
    fn write(&self, path: &Path, contents: &str) -> AppResult<()>;
}

/// The real filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileSystemIO;

impl JournalIO for FileSystemIO {
    fn read(&self, path: &Path) -> AppResult<Option<String>> {
        match fs::read_to_string(path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn write(&self, path: &Path, contents: &str) -> AppResult<()> {
        write_atomically(path, contents)?;
        Ok(())
    }
}

/// Writes `contents` to `path` via a temporary file in the same directory.
///
/// The parent directory must already exist. The temporary file is removed
/// on every error path (it is owned by a `NamedTempFile` until persisted).
/// If `path` already exists its permissions are carried over.
pub fn write_atomically(path: &Path, contents: &str) -> io::Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = tempfile::Builder::new()
        .prefix(JOURNAL_TEMP_PREFIX)
        .suffix(".tmp")
        .tempfile_in(dir)?;
    tmp.write_all(contents.as_bytes())?;
    tmp.as_file().sync_all()?;

    if let Ok(metadata) = fs::metadata(path) {
        fs::set_permissions(tmp.path(), metadata.permissions())?;
    }

    debug!("Renaming {:?} over {:?}", tmp.path(), path);
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

/// Decodes the persisted form. Empty or whitespace-only content is an empty history.
///
/// Keys must be canonical `YYYY-MM-DD` dates. A `null` field value, written
/// by older runs for a section that did not load, reads as `""`.
pub fn decode(path: &Path, content: &str) -> Result<Entries, JournalError> {
    if content.trim().is_empty() {
        return Ok(Entries::new());
    }
    let raw: BTreeMap<String, BTreeMap<String, Option<String>>> = serde_json::from_str(content)
        .map_err(|source| JournalError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

    let mut entries = Entries::new();
    for (key, fields) in raw {
        let date = parse_date_key(&key).ok_or_else(|| JournalError::InvalidDate {
            path: path.to_path_buf(),
            key: key.clone(),
        })?;
        let record: Record = fields
            .into_iter()
            .map(|(field, value)| (field, value.unwrap_or_default()))
            .collect();
        entries.insert(date, record);
    }
    Ok(entries)
}

/// Parses `key` only if it is exactly the `YYYY-MM-DD` rendering of a date.
fn parse_date_key(key: &str) -> Option<NaiveDate> {
    let date = NaiveDate::parse_from_str(key, DATE_FORMAT_ISO).ok()?;
    (date.format(DATE_FORMAT_ISO).to_string() == key).then_some(date)
}

/// Encodes the history as pretty-printed JSON with a trailing newline.
pub fn encode(entries: &Entries) -> io::Result<String> {
    let mut out = serde_json::to_string_pretty(entries).map_err(io::Error::from)?;
    out.push('\n');
    Ok(out)
}
