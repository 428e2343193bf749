use std::fs;
use std::path::Path;

use tracing::info;

use crate::cli::{Cli, ValidateArgs};
use crate::engine::{ValidateOptions, validate_with};
use crate::output::{JsonFormatter, OutputFormat, OutputFormatter, TextFormatter};
use crate::report::ValidationResult;
use crate::template::{FileTemplateLoader, TemplateLoader};
use crate::{CsvGuardError, EXIT_CONFIG_ERROR, EXIT_SUCCESS, EXIT_VALIDATION_FAILED, Result};

#[must_use]
pub fn run_validate(args: &ValidateArgs, cli: &Cli) -> i32 {
    match run_validate_impl(args, cli) {
        Ok(result) if result.is_valid() => EXIT_SUCCESS,
        Ok(_) => EXIT_VALIDATION_FAILED,
        Err(e) => {
            crate::output::print_error_full(&e);
            EXIT_CONFIG_ERROR
        }
    }
}

/// Loads the template, validates the file and writes the report.
///
/// # Errors
/// Returns an error if the template is invalid, the file cannot be read or
/// parsed as CSV, or the report cannot be written.
pub fn run_validate_impl(args: &ValidateArgs, cli: &Cli) -> Result<ValidationResult> {
    let template = FileTemplateLoader::new().load(&args.template)?;
    info!(
        template = %args.template.display(),
        columns = template.columns().len(),
        "loaded template"
    );

    let input = fs::read(&args.file).map_err(|source| CsvGuardError::FileRead {
        path: args.file.clone(),
        source,
    })?;
    info!(file = %args.file.display(), bytes = input.len(), "read input");

    let options = ValidateOptions {
        parallel: args.parallel,
    };
    let result = validate_with(&input, &template, options)?;
    info!(
        rows = result.total_rows(),
        errors = result.total_errors(),
        warnings = result.total_warnings(),
        "validation finished"
    );

    let rendered = format_result(&result, args.format, cli)?;
    write_output(&rendered, args.output.as_deref())?;

    Ok(result)
}

/// Render a result in the requested format.
///
/// # Errors
/// Returns an error if serialization fails.
pub fn format_result(result: &ValidationResult, format: OutputFormat, cli: &Cli) -> Result<String> {
    match format {
        OutputFormat::Text => {
            TextFormatter::with_verbose(cli.color.into(), cli.verbose).format(result)
        }
        OutputFormat::Json => JsonFormatter.format(result),
    }
}

/// Write to `path`, or stdout when no path is given.
///
/// # Errors
/// Returns an error if the file cannot be written.
pub fn write_output(content: &str, path: Option<&Path>) -> Result<()> {
    if let Some(path) = path {
        let mut content = content.to_string();
        if !content.ends_with('\n') {
            content.push('\n');
        }
        fs::write(path, content)?;
        info!(output = %path.display(), "report written");
    } else if content.ends_with('\n') {
        print!("{content}");
    } else {
        println!("{content}");
    }
    Ok(())
}

#[cfg(test)]
#[path = "validate_tests.rs"]
mod tests;
