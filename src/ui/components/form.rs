//! Form component renderer.
//!
//! This module renders the create/edit form: one row per field with a
//! dimmed label, the editable value, and a highlighted focus cell. The
//! status value is colored by its emphasis; the focused value uses the
//! selection colors with a trailing block cursor.

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{FormCard, FormFieldView, FormView};

/// Left indent of the form.
const FORM_INDENT: usize = 2;

/// Width of the field label column.
const LABEL_WIDTH: usize = 8;

/// Renders the form screen content starting at the specified row.
///
/// # Returns
///
/// The next available row position
pub fn render_form(row: usize, view: &FormView, theme: &Theme, cols: usize) -> usize {
    match view {
        FormView::Loading => {
            render_centered_line(row + 3, "Loading event…", &theme.colors.text_dim, cols);
            row + 4
        }
        FormView::Missing => {
            render_centered_line(row + 3, "Event not found", &theme.colors.empty_state_fg, cols);
            render_centered_line(
                row + 4,
                "Press ESC to go back to the list",
                &theme.colors.text_dim,
                cols,
            );
            row + 5
        }
        FormView::Unavailable => {
            render_centered_line(
                row + 3,
                "Could not load event",
                &theme.colors.notice_error_fg,
                cols,
            );
            render_centered_line(
                row + 4,
                "Press ESC to go back to the list",
                &theme.colors.text_dim,
                cols,
            );
            row + 5
        }
        FormView::Ready(card) => render_fields(row, card, theme),
    }
}

/// Renders the editable field rows.
fn render_fields(row: usize, card: &FormCard, theme: &Theme) -> usize {
    let mut current_row = row + 1;
    for field in &card.fields {
        render_field(current_row, field, theme);
        current_row += 2;
    }
    current_row
}

/// Renders one field row: label, then the value cell.
fn render_field(row: usize, field: &FormFieldView, theme: &Theme) {
    position_cursor(row, 1);
    print!("{}", " ".repeat(FORM_INDENT));
    print!("{}", Theme::dim());
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!("{:<LABEL_WIDTH$}", field.label);
    print!("{}", Theme::reset());

    if field.is_focused {
        print!("{}", Theme::fg(&theme.colors.selection_fg));
        print!("{}", Theme::bg(&theme.colors.selection_bg));
        print!(" {}█", field.value);
        print!("{}", Theme::reset());
    } else if let Some(emphasis) = field.emphasis {
        print!("{}", Theme::fg(theme.emphasis_fg(emphasis)));
        print!(" {}", field.value);
        print!("{}", Theme::reset());
    } else {
        print!("{}", Theme::fg(&theme.colors.text_normal));
        print!(" {}", field.value);
        print!("{}", Theme::reset());
    }
}

/// Renders one horizontally centered line in the given color.
fn render_centered_line(row: usize, text: &str, color: &str, cols: usize) {
    let text_len = text.chars().count();
    let padding = (cols.saturating_sub(text_len)) / 2;

    position_cursor(row, 1);
    print!("{}", Theme::fg(color));
    print!("{}", " ".repeat(padding));
    print!("{text}");
    print!("{}", " ".repeat(cols.saturating_sub(padding + text_len)));
    print!("{}", Theme::reset());
}
