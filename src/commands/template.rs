use std::fmt::Write;
use std::path::Path;

use crate::cli::{TemplateAction, TemplateArgs};
use crate::output::OutputFormat;
use crate::template::{DataType, FileTemplateLoader, Template, TemplateDefinition, TemplateLoader};
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS, Result};

#[must_use]
pub fn run_template(args: &TemplateArgs) -> i32 {
    match &args.action {
        TemplateAction::Check { template } => run_template_check(template),
        TemplateAction::Show { template, format } => run_template_show(template, *format),
    }
}

fn run_template_check(path: &Path) -> i32 {
    match run_template_check_impl(path) {
        Ok(template) => {
            println!(
                "Template is valid: {} ({} columns)",
                path.display(),
                template.columns().len()
            );
            EXIT_SUCCESS
        }
        Err(e) => {
            crate::output::print_error_full(&e);
            EXIT_CONFIG_ERROR
        }
    }
}

/// Loads and compiles a template file.
///
/// # Errors
/// Returns an error if the file is missing, malformed, or fails compilation.
pub fn run_template_check_impl(path: &Path) -> Result<Template> {
    FileTemplateLoader::new().load(path)
}

fn run_template_show(path: &Path, format: OutputFormat) -> i32 {
    match run_template_show_impl(path, format) {
        Ok(output) => {
            print!("{output}");
            EXIT_SUCCESS
        }
        Err(e) => {
            crate::output::print_error_full(&e);
            EXIT_CONFIG_ERROR
        }
    }
}

/// Renders a template with all defaults filled in.
///
/// # Errors
/// Returns an error if the template cannot be loaded or compiled.
pub fn run_template_show_impl(path: &Path, format: OutputFormat) -> Result<String> {
    let loader = FileTemplateLoader::new();
    let definition = loader.load_definition(path)?;
    let template = Template::from_definition(&definition)?;

    match format {
        OutputFormat::Text => Ok(format_template_text(&definition, &template)),
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(&definition)?;
            json.push('\n');
            Ok(json)
        }
    }
}

pub(crate) fn format_template_text(definition: &TemplateDefinition, template: &Template) -> String {
    let mut output = String::new();

    let _ = writeln!(
        output,
        "=== Template: {} ===",
        template.name().unwrap_or("<unnamed>")
    );
    if let Some(description) = &definition.description {
        let _ = writeln!(output, "{description}");
    }

    output.push_str("\n[settings]\n");
    let _ = writeln!(output, "  delimiter = {:?}", template.delimiter());
    let _ = writeln!(output, "  boolean_tokens = {:?}", template.boolean_tokens());
    let _ = writeln!(output, "  date_format = {:?}", template.date_format());

    for rule in template.columns() {
        let _ = writeln!(output, "\n[[columns]]  # position {}", rule.index);
        let _ = writeln!(output, "  name = {:?}", rule.name);

        let mut flags = Vec::new();
        if rule.required {
            flags.push("required");
        }
        if rule.allow_blank {
            flags.push("allow_blank");
        }
        if rule.unique {
            flags.push("unique");
        }
        if !flags.is_empty() {
            let _ = writeln!(output, "  flags = {}", flags.join(", "));
        }

        if rule.data_type != DataType::Text {
            let _ = writeln!(output, "  data_type = {}", rule.data_type);
        }
        match (rule.min_length, rule.max_length) {
            (Some(min), Some(max)) => {
                let _ = writeln!(output, "  length = {min}..={max}");
            }
            (Some(min), None) => {
                let _ = writeln!(output, "  length >= {min}");
            }
            (None, Some(max)) => {
                let _ = writeln!(output, "  length <= {max}");
            }
            (None, None) => {}
        }
        if let Some(pattern) = &rule.pattern {
            let _ = writeln!(output, "  pattern = {:?}", pattern.as_str());
            if let Some(description) = pattern.human_description() {
                let _ = writeln!(output, "  pattern_description = {description:?}");
            }
        }
        if let Some(chars) = &rule.invalid_characters {
            let chars: String = chars.iter().collect();
            let _ = writeln!(output, "  invalid_characters = {chars:?}");
        }
        if let Some(notes) = &rule.notes {
            let _ = writeln!(output, "  notes = {notes:?}");
        }
        if let Some(example) = &rule.example {
            let _ = writeln!(output, "  example = {example:?}");
        }
    }

    output
}

#[cfg(test)]
#[path = "template_tests.rs"]
mod tests;
