//! Formatting helpers shared by the day and month views

use crate::services::ProgressLevel;

/// Format a percentage with appropriate precision
pub fn format_percentage(pct: f64) -> String {
    if pct > 0.0 && pct < 0.1 {
        format!("{:.2}%", pct)
    } else if pct < 10.0 {
        format!("{:.1}%", pct)
    } else {
        format!("{:.0}%", pct)
    }
}

/// Create a simple bar chart representation
pub fn format_bar(value: f64, max_value: f64, width: usize) -> String {
    if max_value <= 0.0 || value <= 0.0 {
        return "░".repeat(width);
    }

    let filled = ((value / max_value) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Progress bar line with percentage and a marker for the warning levels
pub fn format_progress(percent: f64, width: usize) -> String {
    let bar = format!("[{}] {}", format_bar(percent, 100.0, width), format_percentage(percent));
    match ProgressLevel::from_percent(percent) {
        ProgressLevel::Normal => bar,
        ProgressLevel::Warning => format!("{}  (nearly spent)", bar),
        ProgressLevel::Danger => format!("{}  (limit reached)", bar),
    }
}

/// Format a separator line
pub fn separator(width: usize) -> String {
    "─".repeat(width)
}

/// Truncate a string to a maximum number of characters with ellipsis
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        ".".repeat(max_len)
    } else {
        let head: String = s.chars().take(max_len - 3).collect();
        format!("{}...", head)
    }
}
