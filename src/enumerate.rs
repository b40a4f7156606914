use std::fs;
use std::path::Path;

use crate::error::SweepError;

/// List candidate header base names in `dir`, one level deep.
///
/// Entries are files whose extension equals `extension`. Order is whatever
/// the directory listing yields unless `sorted` is set, in which case the
/// result is sorted lexicographically.
pub fn list_headers(dir: &Path, extension: &str, sorted: bool) -> Result<Vec<String>, SweepError> {
    let entries = fs::read_dir(dir).map_err(|source| SweepError::DirectoryAccess {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut headers = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| SweepError::DirectoryAccess {
            path: dir.to_path_buf(),
            source,
        })?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        if path.extension().and_then(|e| e.to_str()) != Some(extension) {
            continue;
        }
        if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
            headers.push(name.to_string());
        }
    }

    if sorted {
        headers.sort();
    }
    Ok(headers)
}
