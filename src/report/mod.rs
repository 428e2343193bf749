//! Aggregation of findings into the final, serializable validation report.

mod finding;
mod result;
mod summary;

pub use finding::{Finding, RuleKind, Severity};
pub use result::{ColumnFindings, ValidationResult};
pub use summary::{SummaryCounts, parse_summary, render_summary};
