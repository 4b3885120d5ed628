//! SQL extraction from migration sources.
//!
//! Sources are scanned as plain text. The only recognized call site is a
//! `.query(` call whose first argument is a backtick literal:
//!
//! ```
//! use migration_linter::extract::{BacktickQueryExtractor, QueryExtractor};
//!
//! let source = "await queryRunner.query(`ALTER TABLE users ADD email text`);";
//! let found = BacktickQueryExtractor.extract(source);
//!
//! assert_eq!(found, vec!["ALTER TABLE users ADD email text"]);
//! ```
//!
//! Escaped backticks, `${}` interpolation and quoted strings are not
//! understood. A syntax-tree based extractor can replace the scanner by
//! implementing [`QueryExtractor`].

use std::sync::LazyLock;

use regex::Regex;

static BACKTICK_QUERY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\.query\(\s*`([^`]+)`").expect("valid regex")
});

/// Finds embedded SQL statements in a source file.
pub trait QueryExtractor {
    /// Statements in `content`, in left-to-right order.
    fn extract<'a>(&self, content: &'a str) -> Vec<&'a str>;
}

/// Pattern scanner for `.query(`...`)` calls.
#[derive(Debug, Clone, Copy, Default)]
pub struct BacktickQueryExtractor;

impl QueryExtractor for BacktickQueryExtractor {
    fn extract<'a>(&self, content: &'a str) -> Vec<&'a str> {
        BACKTICK_QUERY
            .captures_iter(content)
            .filter_map(|caps| caps.get(1))
            .map(|m| m.as_str())
            .collect()
    }
}

/// Extract statements from every file, concatenated in file order.
pub fn extract_all<E: QueryExtractor>(extractor: &E, contents: &[String]) -> Vec<String> {
    contents
        .iter()
        .flat_map(|content| extractor.extract(content))
        .map(String::from)
        .collect()
}
