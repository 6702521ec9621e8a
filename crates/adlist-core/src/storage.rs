//! Whole-file load and truncating save for the list file.

use crate::error::{Error, Result};
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

/// Read the entire file as UTF-8.
pub fn load(path: &Path) -> Result<String> {
    let mut file = File::open(path).map_err(|source| Error::OpenRead {
        path: path.to_path_buf(),
        source,
    })?;
    let mut contents = String::new();
    file.read_to_string(&mut contents)
        .map_err(|source| Error::Read {
            path: path.to_path_buf(),
            source,
        })?;
    tracing::debug!(path = %path.display(), bytes = contents.len(), "loaded list");
    Ok(contents)
}

/// Truncate `path` and write `contents`. The data is synced before the file
/// is closed so a deferred write failure is reported instead of lost.
pub fn save(path: &Path, contents: &str) -> Result<()> {
    let mut file = File::create(path).map_err(|source| Error::OpenWrite {
        path: path.to_path_buf(),
        source,
    })?;
    file.write_all(contents.as_bytes())
        .map_err(|source| Error::Write {
            path: path.to_path_buf(),
            source,
        })?;
    file.sync_all().map_err(|source| Error::Close {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), bytes = contents.len(), "saved list");
    Ok(())
}
