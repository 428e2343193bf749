use std::io::Write;

use crate::error::Result;
use crate::report::{ColumnFindings, Finding, Severity, ValidationResult};

use super::{ColorMode, OutputFormatter, ansi};

/// Findings shown per column before the rest are collapsed, unless verbose.
pub const MAX_FINDINGS_PER_COLUMN: usize = 10;

/// Values longer than this many characters are shortened on screen.
const MAX_DISPLAY_VALUE: usize = 40;

pub struct TextFormatter {
    use_colors: bool,
    verbose: u8,
}

impl TextFormatter {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self::with_verbose(mode, 0)
    }

    #[must_use]
    pub fn with_verbose(mode: ColorMode, verbose: u8) -> Self {
        Self {
            use_colors: Self::should_use_colors(mode),
            verbose,
        }
    }

    fn should_use_colors(mode: ColorMode) -> bool {
        match mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => {
                if std::env::var("NO_COLOR").is_ok() {
                    return false;
                }
                std::io::IsTerminal::is_terminal(&std::io::stdout())
            }
        }
    }

    fn colorize_with_color(&self, text: &str, color: &str) -> String {
        if self.use_colors {
            format!("{color}{text}{}", ansi::RESET)
        } else {
            text.to_string()
        }
    }

    const fn severity_icon(severity: Severity) -> &'static str {
        match severity {
            Severity::Error => "✗",
            Severity::Warning => "⚠",
        }
    }

    const fn severity_color(severity: Severity) -> &'static str {
        match severity {
            Severity::Error => ansi::RED,
            Severity::Warning => ansi::YELLOW,
        }
    }

    fn format_header(&self, result: &ValidationResult, output: &mut Vec<u8>) {
        let status = if result.is_valid() {
            self.colorize_with_color("✓ VALID", ansi::GREEN)
        } else {
            self.colorize_with_color("✗ INVALID", ansi::RED)
        };
        writeln!(output, "{status}: {}", Self::summary_line(result)).ok();

        if self.verbose > 0 && !result.missing_columns().is_empty() {
            let missing: Vec<&str> = result.missing_columns().iter().map(String::as_str).collect();
            writeln!(output, "   Missing columns: {}", missing.join(", ")).ok();
        }
        if self.verbose > 0 && !result.extra_columns().is_empty() {
            let extra: Vec<&str> = result.extra_columns().iter().map(String::as_str).collect();
            writeln!(output, "   Extra columns: {}", extra.join(", ")).ok();
        }
    }

    fn format_column(&self, column: &str, group: &ColumnFindings<'_>, output: &mut Vec<u8>) {
        writeln!(output).ok();
        let title = format!(
            "{column} ({} errors, {} warnings)",
            group.errors.len(),
            group.warnings.len()
        );
        writeln!(output, "{}", self.colorize_with_color(&title, ansi::BOLD)).ok();

        let limit = if self.verbose > 0 {
            usize::MAX
        } else {
            MAX_FINDINGS_PER_COLUMN
        };

        let ordered = group.errors.iter().chain(group.warnings.iter());
        for finding in ordered.take(limit) {
            self.format_finding(finding, output);
        }

        let hidden = group.len().saturating_sub(limit);
        if hidden > 0 {
            let more = format!("... and {hidden} more (use -v to show all)");
            writeln!(output, "   {}", self.colorize_with_color(&more, ansi::DIM)).ok();
        }
    }

    fn format_finding(&self, finding: &Finding, output: &mut Vec<u8>) {
        let icon = self.colorize_with_color(
            Self::severity_icon(finding.severity),
            Self::severity_color(finding.severity),
        );
        let location = match finding.row {
            Some(row) if !finding.rule.is_layout() => format!("row {row}"),
            _ => "header".to_string(),
        };
        let rule = self.colorize_with_color(finding.rule.as_str(), ansi::CYAN);

        writeln!(output, "   {icon} {location} [{rule}] {}", finding.message).ok();

        if finding.row.is_some() {
            writeln!(output, "     value: \"{}\"", display_value(&finding.value)).ok();
        }
        if self.verbose > 0
            && let Some(notes) = &finding.notes
        {
            writeln!(output, "     notes: {notes}").ok();
        }
    }

    fn summary_line(result: &ValidationResult) -> String {
        format!("{}, {} warnings", result.summary(), result.total_warnings())
    }
}

/// Shorten long values for display. Counts characters, not bytes.
fn display_value(value: &str) -> String {
    if value.chars().count() <= MAX_DISPLAY_VALUE {
        return value.to_string();
    }
    let head: String = value.chars().take(MAX_DISPLAY_VALUE).collect();
    format!("{head}...")
}

impl OutputFormatter for TextFormatter {
    fn format(&self, result: &ValidationResult) -> Result<String> {
        let mut output = Vec::new();

        self.format_header(result, &mut output);

        for (column, group) in &result.group_by_column() {
            self.format_column(column, group, &mut output);
        }

        if !result.findings().is_empty() {
            writeln!(output).ok();
            writeln!(output, "Summary: {}", Self::summary_line(result)).ok();
        }

        Ok(String::from_utf8_lossy(&output).into_owned())
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
