pub use masterror::{AppError, AppResult};

/// Create error for an empty path argument
pub fn empty_paths_error() -> AppError {
    AppError::bad_request("empty path")
}

/// Create error for a path entry that cannot be queried
pub fn path_stat_error(path: &str, source: std::io::Error) -> AppError {
    AppError::internal(format!("Failed to access path '{}': {}", path, source))
}

/// Create directory listing error
pub fn dir_read_error(path: &str, source: std::io::Error) -> AppError {
    AppError::internal(format!(
        "Failed to list directory '{}': {}",
        path, source
    ))
}

/// Create file read error
pub fn file_read_error(path: &str, source: std::io::Error) -> AppError {
    AppError::internal(format!("Failed to read file '{}': {}", path, source))
}

/// Create error for a linter process that could not be driven
pub fn linter_spawn_error(program: &str, source: std::io::Error) -> AppError {
    AppError::service(format!(
        "Failed to run linter '{}'{}: {}",
        program,
        spawn_hint(source.kind()),
        source
    ))
}

fn spawn_hint(kind: std::io::ErrorKind) -> &'static str {
    match kind {
        std::io::ErrorKind::NotFound => " (is it installed and on PATH?)",
        std::io::ErrorKind::PermissionDenied => " (is it executable?)",
        _ => ""
    }
}

#[cfg(test)]
mod tests {
    use std::io::{Error, ErrorKind};

    use super::*;

    #[test]
    fn test_spawn_hint_not_found() {
        assert!(spawn_hint(ErrorKind::NotFound).contains("PATH"));
    }

    #[test]
    fn test_spawn_hint_permission_denied() {
        assert!(spawn_hint(ErrorKind::PermissionDenied).contains("executable"));
    }

    #[test]
    fn test_spawn_hint_other() {
        assert_eq!(spawn_hint(ErrorKind::BrokenPipe), "");
    }

    #[test]
    fn test_linter_spawn_error_renders() {
        let err = linter_spawn_error("squawk", Error::new(ErrorKind::NotFound, "missing"));
        assert!(!err.to_string().is_empty());
    }
}
