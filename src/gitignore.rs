// Ignore-file maintenance
//
// Ensures generated artifacts are listed in .gitignore without
// disturbing existing content. Entries are matched as exact lines, so
// running the update any number of times leaves one copy of each.

use crate::error::{Error, Result};
use std::path::Path;

/// Conventional ignore-file name next to the scan root
pub const GITIGNORE_NAME: &str = ".gitignore";

/// Ensure `entry` is present as an exact line in the ignore file,
/// creating the file when missing. Returns whether the file changed;
/// a file that already lists the entry is not rewritten.
pub fn ensure_entry(path: &Path, entry: &str) -> Result<bool> {
    let existing = match std::fs::read_to_string(path) {
        Ok(contents) => Some(contents),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => None,
        Err(e) => return Err(Error::Io(e)),
    };

    if let Some(contents) = &existing {
        if contents.lines().any(|line| line == entry) {
            return Ok(false);
        }
    }

    let mut updated = existing.unwrap_or_default();
    if !updated.is_empty() && !updated.ends_with('\n') {
        updated.push('\n');
    }
    updated.push_str(entry);
    updated.push('\n');

    std::fs::write(path, updated).map_err(|e| Error::write(path, e))?;
    Ok(true)
}

/// Ensure each entry in turn; returns the entries actually added
pub fn ensure_entries<'a>(path: &Path, entries: &[&'a str]) -> Result<Vec<&'a str>> {
    let mut added = Vec::new();
    for entry in entries {
        if ensure_entry(path, entry)? {
            added.push(*entry);
        }
    }
    Ok(added)
}
