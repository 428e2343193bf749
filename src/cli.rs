use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::logging::LogFormat;
use crate::output::{ColorMode, OutputFormat};

/// Color output control
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal capability
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl From<ColorChoice> for ColorMode {
    fn from(choice: ColorChoice) -> Self {
        match choice {
            ColorChoice::Auto => Self::Auto,
            ColorChoice::Always => Self::Always,
            ColorChoice::Never => Self::Never,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "csv-guard")]
#[command(author, version, about = "Validate CSV files against a column template")]
#[command(long_about = "Checks a CSV file against a template of column rules \
    (required, length, data type, characters, pattern, uniqueness) and reports every finding.\n\n\
    Exit codes:\n  \
    0 - File is valid (warnings allowed)\n  \
    1 - File has validation errors\n  \
    2 - CSV parse, template, or I/O error")]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Control color output
    #[arg(long, value_enum, default_value = "auto", global = true)]
    pub color: ColorChoice,

    /// Log output format [possible values: pretty, json]
    #[arg(long, default_value = "pretty", global = true)]
    pub log_format: LogFormat,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Validate a CSV file against a template
    Validate(ValidateArgs),

    /// Template file utilities
    Template(TemplateArgs),

    /// Generate a starter template file
    Init(InitArgs),
}

#[derive(Parser, Debug)]
pub struct ValidateArgs {
    /// CSV file to validate
    pub file: PathBuf,

    /// Template file (TOML, or JSON with a .json extension)
    pub template: PathBuf,

    /// Output format [possible values: text, json]
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Write the report to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Evaluate rows on all cores
    #[arg(long)]
    pub parallel: bool,
}

#[derive(Parser, Debug)]
pub struct TemplateArgs {
    #[command(subcommand)]
    pub action: TemplateAction,
}

#[derive(Subcommand, Debug)]
pub enum TemplateAction {
    /// Check that a template file loads and compiles
    Check {
        /// Template file
        template: PathBuf,
    },

    /// Display the compiled template
    Show {
        /// Template file
        template: PathBuf,

        /// Output format [possible values: text, json]
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },
}

#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Output path for the template file
    #[arg(short, long, default_value = "template.toml")]
    pub output: PathBuf,

    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
