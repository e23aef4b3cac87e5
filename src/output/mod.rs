pub mod formatter;

pub use formatter::{format_report_table, format_score, should_use_colors, ScoredFile};
