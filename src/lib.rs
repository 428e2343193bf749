//! Validate CSV files against a template of per-column rules.
//!
//! ```no_run
//! use csv_guard::template::{FileTemplateLoader, TemplateLoader};
//!
//! # fn main() -> csv_guard::Result<()> {
//! let template = FileTemplateLoader::new().load("meters.toml".as_ref())?;
//! let result = csv_guard::validate(std::fs::read("upload.csv")?, &template)?;
//! println!("{}", result.summary());
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod commands;
pub mod engine;
pub mod error;
pub mod evaluator;
pub mod logging;
pub mod matcher;
pub mod output;
pub mod report;
pub mod template;
pub mod tokenizer;

pub use engine::{ValidateOptions, validate, validate_with};
pub use error::{CsvGuardError, ParseError, Result, TemplateError};
pub use report::{Finding, RuleKind, Severity, ValidationResult};
pub use template::Template;

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_VALIDATION_FAILED: i32 = 1;
pub const EXIT_CONFIG_ERROR: i32 = 2;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
