use owo_colors::OwoColorize;
use std::io::IsTerminal;
use terminal_size::{terminal_size, Width};

/// One scored result file for the directory report
pub struct ScoredFile {
    pub file: String,
    pub score: f64,
    pub version: String,
}

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Format a score with two decimals (e.g. "1000.00", "1414.21")
pub fn format_score(score: f64) -> String {
    format!("{:.2}", score)
}

/// Get terminal width, defaulting to None for pipes (unlimited)
fn get_terminal_width() -> Option<usize> {
    terminal_size().map(|(Width(w), _)| w as usize)
}

/// Truncate a file name to fit available width, accounting for Unicode
fn truncate_name(name: &str, max_width: usize) -> String {
    let chars: Vec<char> = name.chars().collect();
    if chars.len() <= max_width {
        name.to_string()
    } else if max_width > 3 {
        format!("{}...", chars[..max_width - 3].iter().collect::<String>())
    } else {
        chars[..max_width].iter().collect()
    }
}

/// Format scored result files as a table with columns: File, Score, Version
///
/// Column widths adapt to the rows; the file column is truncated when the
/// report would overflow the terminal. Score column is right-aligned.
pub fn format_report_table(rows: &[ScoredFile], use_colors: bool) -> String {
    if rows.is_empty() {
        return "No benchmark data files found.".to_string();
    }

    const FILE_HEADER: &str = "File";
    const SCORE_HEADER: &str = "Score";
    const VERSION_HEADER: &str = "PyTorch Version";
    let separator = "  ";

    let score_strs: Vec<String> = rows.iter().map(|r| format_score(r.score)).collect();

    let score_width = score_strs
        .iter()
        .map(|s| s.len())
        .chain([SCORE_HEADER.len()])
        .max()
        .unwrap_or(0);
    let version_width = rows
        .iter()
        .map(|r| r.version.chars().count())
        .chain([VERSION_HEADER.len()])
        .max()
        .unwrap_or(0);
    let mut file_width = rows
        .iter()
        .map(|r| r.file.chars().count())
        .chain([FILE_HEADER.len()])
        .max()
        .unwrap_or(0);

    // Shrink the file column on narrow terminals
    if let Some(term_width) = get_terminal_width() {
        let fixed = score_width + version_width + separator.len() * 2;
        if term_width > fixed + FILE_HEADER.len() {
            file_width = file_width.min(term_width - fixed);
        }
    }

    let mut lines = Vec::with_capacity(rows.len() + 1);

    let header = format!(
        "{:<file_width$}{separator}{:>score_width$}{separator}{}",
        FILE_HEADER, SCORE_HEADER, VERSION_HEADER
    );
    if use_colors {
        lines.push(header.bold().to_string());
    } else {
        lines.push(header);
    }

    for (row, score_str) in rows.iter().zip(&score_strs) {
        let file = truncate_name(&row.file, file_width);
        lines.push(format!(
            "{:<file_width$}{separator}{:>score_width$}{separator}{}",
            file, score_str, row.version
        ));
    }

    lines.join("\n")
}
