//! Application logic for the migration linter CLI.
//!
//! A run moves through fixed stages and never goes back:
//!
//! ```text
//! resolve paths ─▶ load contents ─▶ extract statements ─▶ lint (×N) ─▶ report
//! ```
//!
//! An error while resolving or loading ends the run before anything is
//! linted. Lint failures are collected and only decide the exit code.

use indicatif::{ProgressBar, ProgressStyle};
use tracing::debug;

use crate::{
    config::Config,
    error::AppResult,
    extract::{QueryExtractor, extract_all},
    lint::{LintReport, Linter, run_all},
    loader::load_contents,
    output::{OutputOptions, calculate_exit_code, format_report},
    paths::{format_file_list, resolve_paths}
};

/// Parameters for a check run
#[derive(Debug, Clone)]
pub struct CheckParams {
    /// Raw comma-separated path argument
    pub paths:  String,
    pub config: Config
}

/// Result of a completed run
#[derive(Debug, Clone)]
pub struct CheckOutcome {
    pub files:     Vec<String>,
    pub report:    LintReport,
    pub exit_code: i32,
    pub output:    String
}

/// Build the per-statement progress bar, hidden for machine-readable output
pub fn create_progress(total: usize, opts: &OutputOptions) -> ProgressBar {
    if !opts.is_interactive() {
        return ProgressBar::hidden();
    }
    let pb = ProgressBar::new(total as u64);
    if let Ok(style) =
        ProgressStyle::default_bar().template("{spinner:.green} [{bar:30}] {pos}/{len} {msg}")
    {
        pb.set_style(style);
    }
    pb.set_message("linting statements");
    pb
}

/// Run the whole pipeline with the given extractor and linter
pub async fn run_check<E, L>(
    params: &CheckParams,
    extractor: &E,
    linter: &L
) -> AppResult<CheckOutcome>
where
    E: QueryExtractor,
    L: Linter
{
    let opts = &params.config.output;

    let paths = resolve_paths(&params.paths)?;
    let listing = format_file_list(&paths);
    debug!("{}", listing);
    if opts.is_interactive() {
        println!("{}", listing);
    }

    let contents = load_contents(&paths)?;
    let statements = extract_all(extractor, &contents);
    debug!(
        files = contents.len(),
        statements = statements.len(),
        "extracted statements"
    );

    let pb = create_progress(statements.len(), opts);
    let report = run_all(linter, &statements, &pb).await;
    pb.finish_and_clear();
    let report = report?;

    let files: Vec<String> = paths.iter().map(|p| p.display().to_string()).collect();
    let output = format_report(&report, &files, opts);
    let exit_code = calculate_exit_code(&report);

    Ok(CheckOutcome {
        files,
        report,
        exit_code,
        output
    })
}
