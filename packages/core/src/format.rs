//! Plain-text rendering of report results.
//!
//! Tables have two columns: a label padded (or truncated) to the widest
//! label in the result set, and a value. Widths are computed per table.

use crate::models::{ErrorDay, FormattedDay, TableRow};

/// Length of the `=` rule printed above each headline.
pub const HEADLINE_WIDTH: usize = 50;

/// Second-column header used by the view-count reports.
pub const DEFAULT_SECOND_COLUMN: &str = "Views";

/// Rule line, question, blank line.
pub fn format_headline(question: &str) -> String {
    format!("{}\n{}\n\n", "=".repeat(HEADLINE_WIDTH), question)
}

/// One table line: `column1` fitted to exactly `width` characters, then
/// ` | ` and `column2`.
pub fn format_row(column1: &str, column2: &str, width: usize) -> String {
    let cell: String = column1.chars().take(width).collect();
    format!("{:<width$} | {}\n", cell, column2, width = width)
}

/// Render `rows` as a header line, a dash rule of the same length, and one
/// line per row.
///
/// The first column is as wide as the longest row label (at least one
/// character). Header labels are fitted to that width too.
pub fn format_data_table<R: TableRow>(rows: &[R], first_col: &str, second_col: &str) -> String {
    let width = first_column_width(rows);

    let header = format_row(first_col, second_col, width);
    let rule = "-".repeat(header.trim_end_matches('\n').chars().count());

    let mut output = header;
    output.push_str(&rule);
    output.push('\n');
    for row in rows {
        output.push_str(&format_row(row.label(), &row.value(), width));
    }
    output
}

fn first_column_width<R: TableRow>(rows: &[R]) -> usize {
    rows.iter()
        .map(|row| row.label().chars().count())
        .max()
        .unwrap_or(0)
        .max(1)
}

/// Replace each day's date with its `YYYY-MM-DD` rendering. Order and
/// percentages are preserved.
pub fn format_days(days: Vec<ErrorDay>) -> Vec<FormattedDay> {
    days.into_iter()
        .map(|day| FormattedDay {
            error_percent: day.error_percent,
            day: day.date.format("%Y-%m-%d").to_string(),
        })
        .collect()
}
