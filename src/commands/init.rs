use std::fs;

use crate::cli::InitArgs;
use crate::{CsvGuardError, EXIT_CONFIG_ERROR, EXIT_SUCCESS, Result};

#[must_use]
pub fn run_init(args: &InitArgs) -> i32 {
    match run_init_impl(args) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            crate::output::print_error_full(&e);
            EXIT_CONFIG_ERROR
        }
    }
}

/// Writes a starter template file.
///
/// # Errors
/// Returns an error if the file already exists (without --force) or cannot be written.
pub fn run_init_impl(args: &InitArgs) -> Result<()> {
    let output_path = &args.output;

    if output_path.exists() && !args.force {
        return Err(CsvGuardError::Config(format!(
            "Template file already exists: {}. Use --force to overwrite.",
            output_path.display()
        )));
    }

    fs::write(output_path, generate_template_scaffold())?;

    println!("Created template file: {}", output_path.display());
    Ok(())
}

#[must_use]
pub fn generate_template_scaffold() -> String {
    r#"# csv-guard template
# Each [[columns]] entry is the rule set for one header name (exact, case-sensitive).
version = "1"
name = "meter-readings"
description = "Monthly meter reading upload"

[settings]
# Field delimiter (default: ",")
delimiter = ","

# Accepted values for boolean columns, case-insensitive
boolean_tokens = ["true", "false", "yes", "no"]

# chrono strftime format for date columns (default: "%Y-%m-%d")
date_format = "%Y-%m-%d"

[[columns]]
name = "MeterID"
required = true
unique = true
max_length = 10
invalid_characters = "<>;"
notes = "Serial number printed on the meter"
example = "M-000123"

[[columns]]
name = "Zone"
required = true
# Whole-cell regular expression
pattern = "North|South|East|West"
pattern_description = "must be one of North, South, East, West"

[[columns]]
name = "Reading"
required = true
data_type = "number"

[[columns]]
name = "Estimated"
data_type = "boolean"

[[columns]]
name = "ReadOn"
data_type = "date"
# Empty cells are accepted even though the column is required
required = true
allow_blank = true
"#
    .to_string()
}

#[cfg(test)]
#[path = "init_tests.rs"]
mod tests;
