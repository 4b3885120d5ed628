//! # Migration Linter
//!
//! CI gate for SQL embedded in migration sources.
//!
//! `migration-linter` scans source files for `.query(` calls whose argument is
//! a backtick literal, feeds every statement it finds to an external SQL
//! linter, and fails the build when any statement is rejected.
//!
//! # Quick Start
//!
//! ```bash
//! # Check a migrations directory (one level deep) and a single file
//! migration-linter src/migrations,src/seed.ts
//!
//! # Use another linter binary and keep ban-drop-column enabled
//! migration-linter src/migrations --linter /opt/squawk --exclude prefer-robust-stmts
//!
//! # Machine-readable report
//! migration-linter src/migrations -f json > lint.json
//! ```
//!
//! # Linter Contract
//!
//! Each statement is written to the linter's standard input. The default
//! invocation is `squawk --exclude=ban-drop-column`; the program can be
//! overridden with `--linter` or `MIGRATION_LINTER_BIN`. Exit status `0`
//! means pass; anything else is a failure and the captured output becomes the
//! diagnostic.
//!
//! # Exit Codes
//!
//! - `0` - Every statement passed (or none were found)
//! - `1` - At least one statement failed lint
//! - `2` - Empty path argument, unreadable path, or the linter could not be
//!   started
//!
//! # Logging
//!
//! Diagnostics go to stderr through `tracing`. The level defaults to `warn`,
//! `--verbose` raises it to `debug`, and `RUST_LOG` overrides both.
//!
//! # Modules
//!
//! - [`paths`](migration_linter::paths) - Path argument expansion
//! - [`loader`](migration_linter::loader) - File reading
//! - [`extract`](migration_linter::extract) - SQL extraction from source text
//! - [`lint`](migration_linter::lint) - External linter invocation and verdicts
//! - [`output`](migration_linter::output) - Report formatting and exit codes
//! - [`app`](migration_linter::app) - Pipeline orchestration

use std::process;

use clap::Parser;
use migration_linter::{
    app::{CheckParams, run_check},
    cli::Cli,
    config::Config,
    error::AppResult,
    extract::BacktickQueryExtractor,
    lint::ExternalLinter,
    output::{EXIT_FATAL, LINT_FAILED_MESSAGE}
};
use tokio::main;
use tracing_subscriber::EnvFilter;

#[main]
async fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose, !cli.no_color);

    match run(cli).await {
        Ok(0) => {}
        Ok(code) => {
            eprintln!("{}", LINT_FAILED_MESSAGE);
            process::exit(code);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(EXIT_FATAL);
        }
    }
}

fn init_tracing(verbose: bool, ansi: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level))
        )
        .with_writer(std::io::stderr)
        .with_ansi(ansi)
        .with_target(false)
        .init();
}

async fn run(cli: Cli) -> AppResult<i32> {
    let config = Config::from_cli(&cli);
    tracing::debug!(linter = %config.linter.command_line(), "starting check");

    let linter = ExternalLinter::new(config.linter.clone());
    let params = CheckParams {
        paths: cli.paths,
        config
    };
    let outcome = run_check(&params, &BacktickQueryExtractor, &linter).await?;
    print!("{}", outcome.output);
    if !outcome.output.ends_with('\n') {
        println!();
    }

    Ok(outcome.exit_code)
}
