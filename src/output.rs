use colored::Colorize;
use serde::Serialize;

use crate::lint::{LintReport, LintResult};

/// Exit code when at least one statement failed lint
pub const EXIT_LINT_FAILED: i32 = 1;

/// Exit code for configuration, filesystem and linter launch errors
pub const EXIT_FATAL: i32 = 2;

/// Message printed to stderr when the run fails lint
pub const LINT_FAILED_MESSAGE: &str = "lint not pass";

/// Output format for results
#[derive(Debug, Clone, Copy, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Yaml
}

/// Output options
#[derive(Debug, Clone)]
pub struct OutputOptions {
    pub format:  OutputFormat,
    pub colored: bool
}

impl Default for OutputOptions {
    fn default() -> Self {
        Self {
            format:  OutputFormat::Text,
            colored: true
        }
    }
}

impl OutputOptions {
    /// Whether human-oriented extras (file list, progress bar) are shown
    pub fn is_interactive(&self) -> bool {
        matches!(self.format, OutputFormat::Text)
    }
}

/// Report document for machine-readable formats
#[derive(Debug, Serialize)]
pub struct ReportDocument<'a> {
    pub files:  &'a [String],
    pub pass:   usize,
    pub fail:   usize,
    pub passed: &'a [LintResult],
    pub failed: &'a [LintResult]
}

impl<'a> ReportDocument<'a> {
    pub fn new(report: &'a LintReport, files: &'a [String]) -> Self {
        Self {
            files,
            pass: report.pass_count(),
            fail: report.fail_count(),
            passed: &report.passed,
            failed: &report.failed
        }
    }
}

/// Format the run report based on output options
pub fn format_report(report: &LintReport, files: &[String], opts: &OutputOptions) -> String {
    match opts.format {
        OutputFormat::Json => {
            serde_json::to_string_pretty(&ReportDocument::new(report, files)).unwrap_or_default()
        }
        OutputFormat::Yaml => {
            serde_yaml::to_string(&ReportDocument::new(report, files)).unwrap_or_default()
        }
        OutputFormat::Text => format_text_report(report, opts)
    }
}

/// Calculate exit code from the report
pub fn calculate_exit_code(report: &LintReport) -> i32 {
    if report.is_success() {
        0
    } else {
        EXIT_LINT_FAILED
    }
}

fn format_text_report(report: &LintReport, opts: &OutputOptions) -> String {
    let mut output = String::new();

    let pass = format!("pass: {}", report.pass_count());
    let fail = format!("fail: {}", report.fail_count());
    if opts.colored {
        output.push_str(&format!("{}\n", pass.green()));
        if report.is_success() {
            output.push_str(&format!("{}\n", fail));
        } else {
            output.push_str(&format!("{}\n", fail.red().bold()));
        }
    } else {
        output.push_str(&format!("{}\n{}\n", pass, fail));
    }

    if report.is_success() {
        return output;
    }

    if opts.colored {
        output.push_str(&format!("{}\n", "fail sql:".bold()));
    } else {
        output.push_str("fail sql:\n");
    }
    for result in &report.failed {
        if opts.colored {
            output.push_str(&format!("{}\n", result.sql.cyan()));
        } else {
            output.push_str(&format!("{}\n", result.sql));
        }
        output.push_str(result.diagnostic.as_deref().unwrap_or_default());
        output.push('\n');
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain() -> OutputOptions {
        OutputOptions {
            format:  OutputFormat::Text,
            colored: false
        }
    }

    #[test]
    fn test_text_success_has_no_fail_section() {
        let report: LintReport = vec![LintResult::pass("SELECT 1")].into_iter().collect();
        let out = format_report(&report, &[], &plain());
        assert_eq!(out, "pass: 1\nfail: 0\n");
    }

    #[test]
    fn test_text_failure_lists_statement_then_diagnostic() {
        let report: LintReport = vec![
            LintResult::pass("SELECT 1"),
            LintResult::fail("DROP TABLE a", "warning: dropping"),
        ]
        .into_iter()
        .collect();
        let out = format_report(&report, &[], &plain());
        assert_eq!(
            out,
            "pass: 1\nfail: 1\nfail sql:\nDROP TABLE a\nwarning: dropping\n"
        );
    }

    #[test]
    fn test_exit_code() {
        let ok: LintReport = vec![LintResult::pass("a")].into_iter().collect();
        let bad: LintReport = vec![LintResult::fail("b", "")].into_iter().collect();
        assert_eq!(calculate_exit_code(&ok), 0);
        assert_eq!(calculate_exit_code(&bad), EXIT_LINT_FAILED);
        assert_eq!(calculate_exit_code(&LintReport::new()), 0);
    }

    #[test]
    fn test_interactive_only_for_text() {
        assert!(plain().is_interactive());
        let json = OutputOptions {
            format:  OutputFormat::Json,
            colored: false
        };
        assert!(!json.is_interactive());
    }
}
