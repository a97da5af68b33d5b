//! Notice line component renderer.
//!
//! The notice line sits between the content area and the footer. It carries
//! either the current error message or the delete confirmation prompt, and
//! never blocks the rest of the screen.

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{NoticeInfo, NoticeKind};

/// Renders the notice line at the specified row.
///
/// # Parameters
///
/// * `row` - Row position to render the notice (1-indexed)
/// * `notice` - Notice text and kind
/// * `theme` - Active color theme
/// * `cols` - Terminal width in columns
pub fn render_notice(row: usize, notice: &NoticeInfo, theme: &Theme, cols: usize) {
    let color = match notice.kind {
        NoticeKind::Error => &theme.colors.notice_error_fg,
        NoticeKind::Confirm => &theme.colors.notice_confirm_fg,
    };

    position_cursor(row, 1);
    print!("{}", Theme::fg(color));
    let text_len = notice.text.chars().count().min(cols.saturating_sub(1));
    print!(" {}", notice.text);
    print!("{}", " ".repeat(cols.saturating_sub(text_len + 1)));
    print!("{}", Theme::reset());
}
