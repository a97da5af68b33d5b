//! Table component renderer.
//!
//! This module renders the event list as a five-column table (TITLE, START,
//! END, PRICE, STATUS) with selection highlighting, fuzzy match
//! highlighting on the title, and status cells colored by emphasis.

use crate::ui::helpers::{self, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::DisplayRow;

/// Fixed width of the TITLE column.
const TITLE_COLUMN_WIDTH: usize = 32;

/// Fixed width of the START and END columns.
const DATE_COLUMN_WIDTH: usize = 19;

/// Fixed width of the right-aligned PRICE column.
const PRICE_COLUMN_WIDTH: usize = 10;

/// Renders the table column headers at the specified row.
///
/// # Parameters
///
/// * `row` - Row position to render the headers (1-indexed)
/// * `theme` - Active color theme
///
/// # Returns
///
/// The next available row position (row + 1)
pub fn render_table_headers(row: usize, theme: &Theme) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.header_fg));
    print!(
        "{:<title$} {:<date$} {:<date$} {:>price$}  {}",
        "TITLE",
        "START",
        "END",
        "PRICE",
        "STATUS",
        title = TITLE_COLUMN_WIDTH,
        date = DATE_COLUMN_WIDTH,
        price = PRICE_COLUMN_WIDTH,
    );
    print!("{}", Theme::reset());
    row + 1
}

/// Renders all table rows starting at the specified row.
///
/// # Returns
///
/// The next available row position (row + number of rows)
pub fn render_table_rows(row: usize, rows_data: &[DisplayRow], theme: &Theme, cols: usize) -> usize {
    let mut current_row = row;
    for item in rows_data {
        current_row = render_table_row(current_row, item, theme, cols);
    }
    current_row
}

/// Renders a single table row at the specified row position.
///
/// # Styling Precedence
///
/// 1. Selection background (if `is_selected`), covering the whole line
/// 2. Fuzzy match highlights on the title (unless selected)
/// 3. Status cell colored by emphasis (unless selected)
///
/// The row is padded to fill the entire terminal width to ensure consistent
/// selection background rendering.
fn render_table_row(row: usize, item: &DisplayRow, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);

    if item.is_selected {
        print!("{}", Theme::fg(&theme.colors.selection_fg));
        print!("{}", Theme::bg(&theme.colors.selection_bg));
    } else {
        print!("{}", Theme::fg(&theme.colors.text_normal));
    }

    // TITLE, with match highlighting when a search is active.
    if item.highlight_ranges.is_empty() {
        print!("{}", item.title);
    } else {
        helpers::render_highlighted_text(&item.title, &item.highlight_ranges, theme, item.is_selected);
        restore_row_colors(item, theme);
    }
    let title_len = item.title.chars().count().min(TITLE_COLUMN_WIDTH);
    print!("{}", " ".repeat(TITLE_COLUMN_WIDTH - title_len + 1));

    print!("{:<width$} ", item.start, width = DATE_COLUMN_WIDTH);
    print!("{:<width$} ", item.end, width = DATE_COLUMN_WIDTH);
    print!("{:>width$}  ", item.price, width = PRICE_COLUMN_WIDTH);

    // STATUS, colored by emphasis unless selection styling owns the line.
    if item.is_selected {
        print!("{}", item.status);
    } else {
        print!("{}", Theme::fg(theme.emphasis_fg(item.emphasis)));
        print!("{}", item.status);
        print!("{}", Theme::fg(&theme.colors.text_normal));
    }

    let used = TITLE_COLUMN_WIDTH
        + 1
        + DATE_COLUMN_WIDTH
        + 1
        + DATE_COLUMN_WIDTH
        + 1
        + PRICE_COLUMN_WIDTH
        + 2
        + item.status.chars().count();
    print!("{}", " ".repeat(cols.saturating_sub(used)));

    print!("{}", Theme::reset());
    row + 1
}

/// Re-applies row base colors after a highlight reset them.
fn restore_row_colors(item: &DisplayRow, theme: &Theme) {
    if item.is_selected {
        print!("{}", Theme::fg(&theme.colors.selection_fg));
        print!("{}", Theme::bg(&theme.colors.selection_bg));
    } else {
        print!("{}", Theme::fg(&theme.colors.text_normal));
    }
}
