//! Fixed-width table layout.
//!
//! Widths are measured in grapheme clusters, so multibyte characters such as
//! `é` count as one column.
//!
//! # Example Output
//!
//! ```text
//! | a   | bb |
//! +-----+----+
//! | x   | yy |
//! | zzz | w  |
//! ```

use unicode_segmentation::UnicodeSegmentation;

/// Visible width of a string in grapheme clusters.
///
/// # Examples
///
/// ```
/// use conio_core::table::display_width;
///
/// assert_eq!(display_width("abc"), 3);
/// assert_eq!(display_width("café"), 4);
/// ```
pub fn display_width(s: &str) -> usize {
    s.graphemes(true).count()
}

/// Compute the width of every column.
///
/// The result has one entry per column, covering the header and the longest
/// row. Each entry is the widest of the header and every stringified cell in
/// that column.
pub fn column_widths<H, R, C>(headers: &[H], rows: &[R]) -> Vec<usize>
where
    H: AsRef<str>,
    R: AsRef<[C]>,
    C: ToString,
{
    let mut widths: Vec<usize> = headers.iter().map(|h| display_width(h.as_ref())).collect();

    for row in rows {
        for (index, value) in row.as_ref().iter().enumerate() {
            if index >= widths.len() {
                widths.resize(index + 1, 0);
            }
            widths[index] = widths[index].max(display_width(&value.to_string()));
        }
    }

    widths
}

/// Render one table line, newline included.
///
/// Missing trailing cells render as blanks; cells past the last width are
/// dropped.
///
/// # Examples
///
/// ```
/// use conio_core::table::render_row;
///
/// assert_eq!(render_row(&["a", "bb"], &[3, 2]), "| a   | bb |\n");
/// assert_eq!(render_row(&["a"], &[3, 2]), "| a   |    |\n");
/// ```
pub fn render_row<C: ToString>(row: &[C], widths: &[usize]) -> String {
    let cells: Vec<String> = widths
        .iter()
        .enumerate()
        .map(|(index, width)| {
            let value = row.get(index).map(ToString::to_string).unwrap_or_default();
            let padding = width.saturating_sub(display_width(&value));
            format!("{}{}", value, " ".repeat(padding))
        })
        .collect();

    format!("| {} |\n", cells.join(" | "))
}

/// Render the header separator line, newline included.
///
/// # Examples
///
/// ```
/// use conio_core::table::render_separator;
///
/// assert_eq!(render_separator(&[3, 2]), "+-----+----+\n");
/// ```
pub fn render_separator(widths: &[usize]) -> String {
    let dashes: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    format!("+-{}-+\n", dashes.join("-+-"))
}
