//! Shared rendering utilities and helpers.
//!
//! This module provides low-level rendering utilities used across multiple
//! UI components: cursor positioning, screen clearing, character-safe
//! truncation, and fuzzy match highlighting with proper ANSI escape
//! sequence management.

use crate::ui::theme::Theme;

/// Positions the cursor at a specific row and column.
///
/// Uses the ANSI escape sequence `\u{1b}[{row};{col}H`. Coordinates are
/// 1-indexed (row 1 = first row, col 1 = first column).
pub fn position_cursor(row: usize, col: usize) {
    print!("\u{1b}[{row};{col}H");
}

/// Clears the screen and homes the cursor.
///
/// Called once at the start of every frame; components then position
/// themselves absolutely.
pub fn clear_screen() {
    print!("\u{1b}[2J\u{1b}[H");
}

/// Truncates a label to at most `max` characters, appending `...` when cut.
///
/// Operates on characters, not bytes, so multi-byte titles cannot be split
/// mid-codepoint.
///
/// # Examples
///
/// ```
/// use eventdeck::ui::helpers::truncate_label;
///
/// assert_eq!(truncate_label("short", 10), "short");
/// assert_eq!(truncate_label("a very long event title", 10), "a very ...");
/// ```
#[must_use]
pub fn truncate_label(text: &str, max: usize) -> String {
    let count = text.chars().count();
    if count <= max {
        return text.to_string();
    }
    let keep = max.saturating_sub(3);
    let mut truncated: String = text.chars().take(keep).collect();
    truncated.push_str("...");
    truncated
}

/// Renders text with highlighted character ranges for fuzzy matches.
///
/// Splits the text into highlighted and normal sections based on the
/// provided character ranges. Highlighted sections use match highlight
/// colors unless the row is selected, in which case selection colors take
/// precedence and highlighting is suppressed.
///
/// # Parameters
///
/// * `text` - The text to render
/// * `ranges` - Character index ranges to highlight `(start, end)` (inclusive start, exclusive end)
/// * `theme` - Active color theme for highlight colors
/// * `is_selected` - Whether the row is currently selected
pub fn render_highlighted_text(
    text: &str,
    ranges: &[(usize, usize)],
    theme: &Theme,
    is_selected: bool,
) {
    if ranges.is_empty() || is_selected {
        print!("{text}");
        return;
    }

    let chars: Vec<char> = text.chars().collect();
    let mut current_pos = 0;

    for &(start, end) in ranges {
        if start > current_pos {
            let normal_section: String = chars[current_pos..start].iter().collect();
            print!("{normal_section}");
        }

        print!("{}", Theme::fg(&theme.colors.match_highlight_fg));
        print!("{}", Theme::bg(&theme.colors.match_highlight_bg));
        let highlighted_section: String = chars[start..end.min(chars.len())].iter().collect();
        print!("{highlighted_section}");
        print!("{}", Theme::reset());

        current_pos = end;
    }

    if current_pos < chars.len() {
        let remaining: String = chars[current_pos..].iter().collect();
        print!("{remaining}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncation_is_character_safe() {
        assert_eq!(truncate_label("événement très long", 10), "événeme...");
        assert_eq!(truncate_label("exact fit!", 10), "exact fit!");
    }
}
