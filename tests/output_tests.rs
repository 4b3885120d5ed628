// SPDX-FileCopyrightText: 2025 RAprogramm
// SPDX-License-Identifier: MIT

use migration_linter::{
    lint::{LintReport, LintResult},
    output::{
        EXIT_LINT_FAILED, OutputFormat, OutputOptions, ReportDocument, calculate_exit_code,
        format_report
    }
};

fn sample_report() -> LintReport {
    vec![
        LintResult::pass("CREATE TABLE a (id int)"),
        LintResult::fail("DROP TABLE a", "warning: ban-drop-table\n"),
        LintResult::pass("SELECT 1"),
        LintResult::fail("ALTER TABLE b ADD c int NOT NULL", ""),
    ]
    .into_iter()
    .collect()
}

fn opts(format: OutputFormat) -> OutputOptions {
    OutputOptions {
        format,
        colored: false
    }
}

#[test]
fn test_output_options_default() {
    let opts = OutputOptions::default();
    assert!(matches!(opts.format, OutputFormat::Text));
    assert!(opts.colored);
}

#[test]
fn test_report_partitions_preserve_order() {
    let report = sample_report();
    assert_eq!(report.pass_count(), 2);
    assert_eq!(report.fail_count(), 2);
    assert_eq!(report.total(), 4);
    assert_eq!(report.passed[1].sql, "SELECT 1");
    assert_eq!(report.failed[0].sql, "DROP TABLE a");
    assert_eq!(report.failed[1].sql, "ALTER TABLE b ADD c int NOT NULL");
}

#[test]
fn test_text_report_lists_failures() {
    let out = format_report(&sample_report(), &[], &opts(OutputFormat::Text));
    assert_eq!(
        out,
        "pass: 2\nfail: 2\nfail sql:\nDROP TABLE a\nwarning: ban-drop-table\n\n\
         ALTER TABLE b ADD c int NOT NULL\n\n"
    );
}

#[test]
fn test_text_report_colored_keeps_content() {
    let out = format_report(&sample_report(), &[], &OutputOptions::default());
    assert!(out.contains("pass: 2"));
    assert!(out.contains("fail sql:"));
    assert!(out.contains("DROP TABLE a"));
}

#[test]
fn test_json_report() {
    let files = vec!["m/1.ts".to_string()];
    let out = format_report(&sample_report(), &files, &opts(OutputFormat::Json));
    let doc: serde_json::Value = serde_json::from_str(&out).unwrap();

    assert_eq!(doc["files"][0], "m/1.ts");
    assert_eq!(doc["pass"], 2);
    assert_eq!(doc["fail"], 2);
    assert_eq!(doc["failed"][0]["diagnostic"], "warning: ban-drop-table\n");
    assert!(doc["passed"][0].get("diagnostic").is_none());
}

#[test]
fn test_yaml_report() {
    let out = format_report(&sample_report(), &[], &opts(OutputFormat::Yaml));
    assert!(out.contains("pass: 2"));
    assert!(out.contains("fail: 2"));
    assert!(out.contains("DROP TABLE a"));
}

#[test]
fn test_report_document_counts() {
    let report = sample_report();
    let doc = ReportDocument::new(&report, &[]);
    assert_eq!(doc.pass + doc.fail, report.total());
}

#[test]
fn test_exit_codes() {
    assert_eq!(calculate_exit_code(&sample_report()), EXIT_LINT_FAILED);
    let clean: LintReport = vec![LintResult::pass("SELECT 1")].into_iter().collect();
    assert_eq!(calculate_exit_code(&clean), 0);
}
