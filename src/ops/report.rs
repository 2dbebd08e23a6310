//! End-of-run report: the working tree and the saved history.

use crate::errors::AppResult;
use std::fs;
use std::io;
use std::path::Path;
use tracing::{info, warn};
use walkdir::WalkDir;

/// Logs the directory tree under `root`, skipping directories named in `ignore`.
///
/// Directories render as `+--name/` and files as `+--name`, indented four
/// spaces per level. Within a directory, files come first and then
/// subdirectories, each group sorted by name. Returns the rendered lines.
///
/// # Errors
///
/// Returns `AppError::Io` if `root` itself cannot be read. Unreadable entries
/// below it are skipped.
pub fn log_directory_tree(root: &Path, ignore: &[&str]) -> AppResult<Vec<String>> {
    info!("Printing tree of files/dirs at {}", root.display());
    fs::metadata(root)?;

    let walker = WalkDir::new(root)
        .sort_by(|a, b| {
            a.file_type()
                .is_dir()
                .cmp(&b.file_type().is_dir())
                .then_with(|| a.file_name().cmp(b.file_name()))
        })
        .into_iter()
        .filter_entry(|entry| {
            entry.depth() == 0
                || !entry.file_type().is_dir()
                || !ignore.iter().any(|name| entry.file_name() == *name)
        });

    let mut lines = Vec::new();
    for entry in walker.filter_map(|e| e.ok()) {
        let name = entry.file_name().to_string_lossy();
        let suffix = if entry.file_type().is_dir() { "/" } else { "" };
        let line = format!("{}+--{}{}", " ".repeat(4 * entry.depth()), name, suffix);
        info!("{}", line);
        lines.push(line);
    }
    Ok(lines)
}

/// Logs the contents of the history file. A missing file is only a warning.
pub fn log_data_file(path: &Path) -> AppResult<()> {
    info!("Printing contents of data file {}", path.display());
    match fs::read_to_string(path) {
        Ok(content) => {
            info!("{}", content);
            Ok(())
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            warn!("Data file {} does not exist yet", path.display());
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}
