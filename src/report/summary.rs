use std::sync::LazyLock;

use regex::Regex;

// Downstream consumers re-parse this string; keep the format fixed.
static SUMMARY_RE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^(\d+) rows, (\d+) errors$").ok());

/// Row and error counts recovered from a summary string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SummaryCounts {
    pub total_rows: usize,
    pub total_errors: usize,
}

/// Render the short-form summary, e.g. `"3 rows, 2 errors"`.
///
/// Always plural and never mentions warnings.
#[must_use]
pub fn render_summary(total_rows: usize, total_errors: usize) -> String {
    format!("{total_rows} rows, {total_errors} errors")
}

/// Inverse of [`render_summary`]. Returns `None` for any other text.
#[must_use]
pub fn parse_summary(summary: &str) -> Option<SummaryCounts> {
    let caps = SUMMARY_RE.as_ref()?.captures(summary)?;
    Some(SummaryCounts {
        total_rows: caps[1].parse().ok()?,
        total_errors: caps[2].parse().ok()?,
    })
}

#[cfg(test)]
#[path = "summary_tests.rs"]
mod tests;
