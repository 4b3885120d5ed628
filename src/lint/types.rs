//! Lint verdict types.
//!
//! - [`LintResult`] - verdict for one extracted statement
//! - [`LintReport`] - verdicts partitioned into passing and failing, each in
//!   the order the statements were extracted

use serde::Serialize;

/// Verdict of the external linter for one statement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LintResult {
    /// Statement text exactly as extracted
    pub sql:        String,
    /// Whether the linter exited successfully
    pub ok:         bool,
    /// Linter output, present only on failure (may be empty)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diagnostic: Option<String>
}

impl LintResult {
    pub fn pass(sql: impl Into<String>) -> Self {
        Self {
            sql:        sql.into(),
            ok:         true,
            diagnostic: None
        }
    }

    pub fn fail(sql: impl Into<String>, diagnostic: impl Into<String>) -> Self {
        Self {
            sql:        sql.into(),
            ok:         false,
            diagnostic: Some(diagnostic.into())
        }
    }
}

/// All verdicts of a run, partitioned by outcome.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LintReport {
    pub passed: Vec<LintResult>,
    pub failed: Vec<LintResult>
}

impl LintReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a result to the partition matching its outcome
    pub fn push(&mut self, result: LintResult) {
        if result.ok {
            self.passed.push(result);
        } else {
            self.failed.push(result);
        }
    }

    pub fn pass_count(&self) -> usize {
        self.passed.len()
    }

    pub fn fail_count(&self) -> usize {
        self.failed.len()
    }

    pub fn total(&self) -> usize {
        self.passed.len() + self.failed.len()
    }

    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}

impl FromIterator<LintResult> for LintReport {
    fn from_iter<I: IntoIterator<Item = LintResult>>(iter: I) -> Self {
        let mut report = Self::new();
        for result in iter {
            report.push(result);
        }
        report
    }
}
