//! Run configuration.
//!
//! Everything is taken from the command line; there is no configuration file.
//! The linter program may also be set through `MIGRATION_LINTER_BIN`.
//!
//! The default linter invocation is equivalent to:
//!
//! ```text
//! squawk --exclude=ban-drop-column
//! ```
//!
//! with the statement written to the linter's standard input.

use crate::{
    cli::{Cli, Format},
    output::{OutputFormat, OutputOptions}
};

/// Rule excluded from evaluation unless overridden
pub const DEFAULT_EXCLUDED_RULE: &str = "ban-drop-column";

/// Default linter binary
pub const DEFAULT_LINTER: &str = "squawk";

/// Application configuration
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub linter: LinterConfig,
    pub output: OutputOptions
}

/// External linter invocation
#[derive(Debug, Clone)]
pub struct LinterConfig {
    /// Program to spawn, resolved through `PATH`
    pub program:        String,
    /// Arguments placed before the exclusion flags
    pub args:           Vec<String>,
    /// Rules passed as `--exclude=<rule>`
    pub excluded_rules: Vec<String>
}

impl Default for LinterConfig {
    fn default() -> Self {
        Self {
            program:        String::from(DEFAULT_LINTER),
            args:           Vec::new(),
            excluded_rules: vec![String::from(DEFAULT_EXCLUDED_RULE)]
        }
    }
}

impl LinterConfig {
    /// Full argument vector handed to the linter program
    pub fn argv(&self) -> Vec<String> {
        self.args
            .iter()
            .cloned()
            .chain(
                self.excluded_rules
                    .iter()
                    .map(|rule| format!("--exclude={}", rule))
            )
            .collect()
    }

    /// Human-readable command line, for logs
    pub fn command_line(&self) -> String {
        let mut parts = vec![self.program.clone()];
        parts.extend(self.argv());
        parts.join(" ")
    }
}

impl Config {
    /// Build configuration from parsed command-line arguments
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            linter: LinterConfig {
                program:        cli.linter.clone(),
                args:           cli.linter_args.clone(),
                excluded_rules: cli.excluded_rules.clone()
            },
            output: OutputOptions {
                format:  convert_format(cli.output_format),
                colored: !cli.no_color
            }
        }
    }
}

/// Convert CLI format to internal OutputFormat
pub fn convert_format(format: Format) -> OutputFormat {
    match format {
        Format::Text => OutputFormat::Text,
        Format::Json => OutputFormat::Json,
        Format::Yaml => OutputFormat::Yaml
    }
}
