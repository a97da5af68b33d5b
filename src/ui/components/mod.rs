//! Composable UI component renderers.
//!
//! This module provides specialized rendering components for the different
//! screen elements, following a component-based architecture, plus the
//! per-screen layout functions the renderer dispatches to.
//!
//! # Components
//!
//! - [`header`]: Title bar
//! - [`footer`]: Keybinding hints
//! - [`search`]: Search input box (border, query text)
//! - [`table`]: Event list with TITLE/START/END/PRICE/STATUS columns
//! - [`detail`]: Single-event card and its not-found/unavailable states
//! - [`form`]: Create/edit field rows
//! - [`notice`]: Error / confirmation line above the footer
//! - [`empty`]: Empty state message for a table with no rows
//!
//! # Layouts
//!
//! - [`render_table_screen`]: Header + (search) + table + bottom chrome
//! - [`render_detail_screen`]: Header + detail card + bottom chrome
//! - [`render_form_screen`]: Header + form fields + bottom chrome

mod detail;
mod empty;
mod footer;
mod form;
mod header;
mod notice;
mod search;
mod table;

pub use empty::render_empty_state;

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{DetailView, FormView, TableView, UIViewModel};

use detail::render_detail;
use footer::render_footer;
use form::render_form;
use header::render_header;
use notice::render_notice;
use search::render_search_bar;
use table::{render_table_headers, render_table_rows};

/// Renders a horizontal border line at the specified row.
///
/// Used to separate UI sections (header/content, content/footer).
///
/// # Returns
///
/// The next available row position (row + 1)
fn render_border(row: usize, color: &str, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::fg(color));
    print!("{}", "─".repeat(cols));
    print!("{}", Theme::reset());
    row + 1
}

/// Renders the table screen layout.
///
/// Layout structure:
/// ```text
/// [blank line]
/// [Header]
/// [Border]
/// [Search Bar - 3 lines, search mode only]
/// [Table Headers]
/// [Table Rows | Empty State]
/// [Blank padding]
/// [Border]
/// [Notice line]
/// [Footer]
/// ```
pub fn render_table_screen(
    vm: &UIViewModel,
    tbl: &TableView,
    theme: &Theme,
    cols: usize,
    rows: usize,
) {
    let mut current_row = 2; // Start at row 2 (skip blank line at row 1)

    current_row = render_header(current_row, &vm.header, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);

    if let Some(search_bar) = &vm.search_bar {
        current_row = render_search_bar(current_row, search_bar, theme, cols);
    }

    if let Some(empty_state) = &tbl.empty_state {
        render_empty_state(current_row, empty_state, theme, cols);
    } else {
        current_row = render_table_headers(current_row, theme);
        let _current_row = render_table_rows(current_row, &tbl.rows, theme, cols);
    }

    render_bottom_chrome(vm, theme, cols, rows);
}

/// Renders the detail screen layout.
pub fn render_detail_screen(
    vm: &UIViewModel,
    detail_view: &DetailView,
    theme: &Theme,
    cols: usize,
    rows: usize,
) {
    let mut current_row = 2;

    current_row = render_header(current_row, &vm.header, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);
    let _current_row = render_detail(current_row, detail_view, theme, cols);

    render_bottom_chrome(vm, theme, cols, rows);
}

/// Renders the form screen layout.
pub fn render_form_screen(
    vm: &UIViewModel,
    form_view: &FormView,
    theme: &Theme,
    cols: usize,
    rows: usize,
) {
    let mut current_row = 2;

    current_row = render_header(current_row, &vm.header, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);
    let _current_row = render_form(current_row, form_view, theme, cols);

    render_bottom_chrome(vm, theme, cols, rows);
}

/// Renders the bottom three rows shared by every screen: border, notice
/// line (blank when there is nothing to say), and footer.
fn render_bottom_chrome(vm: &UIViewModel, theme: &Theme, cols: usize, rows: usize) {
    let footer_row = rows.saturating_sub(1);
    let notice_row = footer_row.saturating_sub(1);
    let border_row = notice_row.saturating_sub(1);

    render_border(border_row, &theme.colors.border, cols);
    if let Some(notice_info) = &vm.notice {
        render_notice(notice_row, notice_info, theme, cols);
    }
    render_footer(footer_row, &vm.footer, theme, cols);
}
