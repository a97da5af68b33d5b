//! Detail card component renderer.
//!
//! This module renders a single event's fields, or one of the distinct
//! loading / not-found / unavailable states the detail screen can be in.

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{DetailCard, DetailView};

/// Left indent of the detail card.
const CARD_INDENT: usize = 2;

/// Width of the field label column.
const LABEL_WIDTH: usize = 10;

/// Renders the detail screen content starting at the specified row.
///
/// # Parameters
///
/// * `row` - First content row (1-indexed)
/// * `view` - Detail screen state to render
/// * `theme` - Active color theme
/// * `cols` - Terminal width in columns
///
/// # Returns
///
/// The next available row position
pub fn render_detail(row: usize, view: &DetailView, theme: &Theme, cols: usize) -> usize {
    match view {
        DetailView::Loading => {
            render_centered_line(row + 3, "Loading event…", &theme.colors.text_dim, cols);
            row + 4
        }
        DetailView::Missing => {
            render_centered_line(row + 3, "Event not found", &theme.colors.empty_state_fg, cols);
            render_centered_line(
                row + 4,
                "Press ESC to go back to the list",
                &theme.colors.text_dim,
                cols,
            );
            row + 5
        }
        DetailView::Unavailable => {
            render_centered_line(
                row + 3,
                "Could not load event",
                &theme.colors.notice_error_fg,
                cols,
            );
            render_centered_line(
                row + 4,
                "Press 'r' to retry or ESC to go back",
                &theme.colors.text_dim,
                cols,
            );
            row + 5
        }
        DetailView::Loaded(card) => render_card(row, card, theme),
    }
}

/// Renders the loaded event card.
fn render_card(row: usize, card: &DetailCard, theme: &Theme) -> usize {
    let mut current_row = row + 1;

    // Title line with the status chip on the same row.
    position_cursor(current_row, 1);
    print!("{}", " ".repeat(CARD_INDENT));
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.text_normal));
    print!("{}", card.title);
    print!("{}", Theme::reset());
    print!("  ");
    print!("{}", Theme::fg(theme.emphasis_fg(card.emphasis)));
    print!("[{}]", card.status);
    print!("{}", Theme::reset());
    current_row += 2;

    let fields = [
        ("Start", &card.start),
        ("End", &card.end),
        ("Duration", &card.duration),
        ("Price", &card.price),
        ("Event ID", &card.id_tag),
    ];

    for (label, value) in fields {
        position_cursor(current_row, 1);
        print!("{}", " ".repeat(CARD_INDENT));
        print!("{}", Theme::dim());
        print!("{}", Theme::fg(&theme.colors.text_dim));
        print!("{label:<LABEL_WIDTH$}");
        print!("{}", Theme::reset());
        print!("{}", Theme::fg(&theme.colors.text_normal));
        print!(" {value}");
        print!("{}", Theme::reset());
        current_row += 1;
    }

    current_row
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
