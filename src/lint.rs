//! Statement linting through an external process.
//!
//! Each statement is handed to the linter on standard input. The statement is
//! never placed on a command line or in a shell string, so its content cannot
//! be interpreted by a shell.
//!
//! ```text
//! statement ──stdin──▶ squawk --exclude=ban-drop-column ──exit status──▶ LintResult
//!                                                      └──stdout──────▶ diagnostic
//! ```
//!
//! Exit status zero is a pass. Any other status is a failure whose diagnostic
//! is the captured stdout, falling back to stderr when stdout is empty. A
//! linter that cannot be started is an error, not a failing statement.
//!
//! Statements are linted one at a time with no timeout.

mod types;

use std::{io, process::Stdio};

use indicatif::ProgressBar;
use tokio::{io::AsyncWriteExt, process::Command};
use tracing::{debug, warn};
pub use types::{LintReport, LintResult};

use crate::{
    config::LinterConfig,
    error::{AppResult, linter_spawn_error}
};

/// Produces a verdict for a single statement.
#[allow(async_fn_in_trait)]
pub trait Linter {
    async fn lint(&self, sql: &str) -> AppResult<LintResult>;
}

/// Linter backed by an external program.
#[derive(Debug, Clone, Default)]
pub struct ExternalLinter {
    config: LinterConfig
}

impl ExternalLinter {
    pub fn new(config: LinterConfig) -> Self {
        Self {
            config
        }
    }

    pub fn config(&self) -> &LinterConfig {
        &self.config
    }
}

impl Linter for ExternalLinter {
    async fn lint(&self, sql: &str) -> AppResult<LintResult> {
        let program = &self.config.program;
        let mut child = Command::new(program)
            .args(self.config.argv())
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| linter_spawn_error(program, e))?;

        let stdin = child.stdin.take();
        let payload = format!("{}\n", sql);
        let feed = async move {
            match stdin {
                Some(mut pipe) => pipe.write_all(payload.as_bytes()).await,
                None => Ok(())
            }
        };

        let (fed, output) = tokio::join!(feed, child.wait_with_output());
        let output = output.map_err(|e| linter_spawn_error(program, e))?;
        match fed {
            // The linter may exit without draining its input
            Err(e) if e.kind() == io::ErrorKind::BrokenPipe => {
                debug!("linter closed stdin early");
            }
            Err(e) => return Err(linter_spawn_error(program, e)),
            Ok(()) => {}
        }

        if output.status.success() {
            return Ok(LintResult::pass(sql));
        }

        debug!(status = %output.status, "linter reported failure");
        Ok(LintResult::fail(
            sql,
            select_diagnostic(&output.stdout, &output.stderr)
        ))
    }
}

/// Stdout of a failed run, or stderr when stdout carries nothing
fn select_diagnostic(stdout: &[u8], stderr: &[u8]) -> String {
    let out = String::from_utf8_lossy(stdout);
    if out.trim().is_empty() {
        String::from_utf8_lossy(stderr).into_owned()
    } else {
        out.into_owned()
    }
}

/// Lint every statement in order and partition the verdicts.
///
/// All statements are linted even after failures; only errors from the
/// linter itself stop the run.
pub async fn run_all<L: Linter>(
    linter: &L,
    statements: &[String],
    progress: &ProgressBar
) -> AppResult<LintReport> {
    let mut report = LintReport::new();
    for (index, sql) in statements.iter().enumerate() {
        let result = linter.lint(sql).await?;
        if !result.ok {
            warn!(index, "statement failed lint");
        }
        report.push(result);
        progress.inc(1);
    }

    Ok(report)
}
