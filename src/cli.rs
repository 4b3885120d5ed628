use clap::{Parser, ValueEnum};

/// Migration Linter - Lint SQL embedded in migration sources with an external
/// linter
#[derive(Parser, Debug)]
#[command(name = "migration-linter")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Files or directories to check, separated by commas
    #[arg(value_name = "PATHS", default_value = "", hide_default_value = true)]
    pub paths: String,

    /// Linter program receiving each statement on stdin
    #[arg(long, env = "MIGRATION_LINTER_BIN", default_value = "squawk")]
    pub linter: String,

    /// Extra argument passed to the linter before the exclusions (repeatable)
    #[arg(long = "linter-arg", value_name = "ARG", allow_hyphen_values = true)]
    pub linter_args: Vec<String>,

    /// Linter rule to exclude (repeatable)
    #[arg(long = "exclude", value_name = "RULE", default_value = "ban-drop-column")]
    pub excluded_rules: Vec<String>,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value = "text")]
    pub output_format: Format,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Format {
    Text,
    Json,
    Yaml
}
