//! Expansion of the comma-separated path argument into a flat file list.
//!
//! Directories are listed one level deep. Their children are passed through
//! without filtering, so a nested directory shows up as a path and fails later
//! when it is read as a file.

use std::{
    fs,
    path::{Path, PathBuf}
};

use tracing::debug;

use crate::error::{AppResult, dir_read_error, empty_paths_error, path_stat_error};

/// Split the raw argument on commas, keeping order and duplicates
pub fn split_path_list(arg: &str) -> Vec<&str> {
    arg.split(',').collect()
}

/// Resolve every entry of the path argument into file paths.
///
/// Fails before touching the filesystem when `arg` is empty, and on the first
/// entry that cannot be queried.
pub fn resolve_paths(arg: &str) -> AppResult<Vec<PathBuf>> {
    if arg.is_empty() {
        return Err(empty_paths_error());
    }

    let mut files = Vec::new();
    for entry in split_path_list(arg) {
        let metadata = fs::metadata(entry).map_err(|e| path_stat_error(entry, e))?;
        if metadata.is_dir() {
            let children = list_directory(Path::new(entry))?;
            debug!(dir = entry, count = children.len(), "listed directory");
            files.extend(children);
        } else {
            files.push(PathBuf::from(entry));
        }
    }

    Ok(files)
}

/// Immediate children of `dir`, sorted by file name
fn list_directory(dir: &Path) -> AppResult<Vec<PathBuf>> {
    let display = dir.display().to_string();
    let mut names = Vec::new();
    for entry in fs::read_dir(dir).map_err(|e| dir_read_error(&display, e))? {
        let entry = entry.map_err(|e| dir_read_error(&display, e))?;
        names.push(entry.file_name());
    }
    names.sort();

    Ok(names.into_iter().map(|name| dir.join(name)).collect())
}

/// Render the resolved list the way it is announced before checking
pub fn format_file_list(paths: &[PathBuf]) -> String {
    let joined: Vec<String> = paths.iter().map(|p| p.display().to_string()).collect();
    format!("file to check: {}", joined.join(", "))
}
