//! Shared fixtures for integration tests.
#![allow(dead_code)]

use std::{fs, path::Path};

/// Linter stand-in: rejects any statement containing `DROP`, echoing the
/// statement and its arguments on stdout.
pub const FAKE_LINTER: &str = r#"sql=$(cat)
case "$sql" in
  *DROP*)
    echo "warning: drop detected in: $sql"
    echo "args: $*"
    exit 1
    ;;
esac
exit 0
"#;

/// Linter stand-in that fails silently on stdout and complains on stderr.
pub const STDERR_LINTER: &str = r#"cat > /dev/null
echo "parse error" >&2
exit 3
"#;

/// Write a linter script into `dir` and return its path as a string
pub fn write_script(dir: &Path, name: &str, body: &str) -> String {
    let path = dir.join(name);
    fs::write(&path, body).unwrap();
    path.display().to_string()
}

/// Write a migration file calling `.query` once per statement
pub fn write_migration(dir: &Path, name: &str, statements: &[&str]) -> String {
    let mut body = String::from("export class Migration {\n  async up(queryRunner) {\n");
    for sql in statements {
        body.push_str(&format!("    await queryRunner.query(`{}`);\n", sql));
    }
    body.push_str("  }\n}\n");
    let path = dir.join(name);
    fs::write(&path, body).unwrap();
    path.display().to_string()
}
