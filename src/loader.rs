use std::{fs, path::PathBuf};

use tracing::debug;

use crate::error::{AppResult, file_read_error};

/// Read every file in order, aborting on the first failure.
///
/// Invalid UTF-8 is replaced rather than rejected; the extractor treats the
/// content as opaque text anyway.
pub fn load_contents(paths: &[PathBuf]) -> AppResult<Vec<String>> {
    let mut contents = Vec::with_capacity(paths.len());
    for path in paths {
        let bytes = fs::read(path).map_err(|e| file_read_error(&path.display().to_string(), e))?;
        debug!(path = %path.display(), bytes = bytes.len(), "loaded file");
        contents.push(String::from_utf8_lossy(&bytes).into_owned());
    }

    Ok(contents)
}
