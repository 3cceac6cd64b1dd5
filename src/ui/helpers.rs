//! Shared rendering utilities.
//!
//! Cursor positioning, width-aware text truncation and padding, and search
//! match highlighting. String-building helpers return `String`s so they can be
//! tested without capturing stdout; only [`position_cursor`] prints.

use crate::ui::theme::Theme;

/// Moves the cursor to a 1-indexed `row`/`col` (`ESC[{row};{col}H`).
pub fn position_cursor(row: usize, col: usize) {
    print!("\u{1b}[{row};{col}H");
}

/// Shortens `text` to at most `max` characters, ending in `...` when cut.
///
/// # Example
///
/// ```rust
/// use zevents::ui::helpers::truncate;
///
/// assert_eq!(truncate("Quarterly planning", 10), "Quarter...");
/// assert_eq!(truncate("Lunch", 10), "Lunch");
/// ```
#[must_use]
pub fn truncate(text: &str, max: usize) -> String {
    let len = text.chars().count();
    if len <= max {
        return text.to_string();
    }
    if max <= 3 {
        return text.chars().take(max).collect();
    }
    let mut out: String = text.chars().take(max - 3).collect();
    out.push_str("...");
    out
}

/// Pads `text` with spaces to `width` characters (no truncation).
#[must_use]
pub fn pad_to(text: &str, width: usize) -> String {
    let len = text.chars().count();
    format!("{text}{}", " ".repeat(width.saturating_sub(len)))
}

/// Renders `text` with the given character ranges highlighted.
///
/// After each highlighted section, `restore` (the caller's base style) is
/// re-emitted so the rest of the line keeps its colors. Ranges must be sorted
/// and non-overlapping; out-of-bounds ends are clamped.
#[must_use]
pub fn highlighted(text: &str, ranges: &[(usize, usize)], theme: &Theme, restore: &str) -> String {
    if ranges.is_empty() {
        return text.to_string();
    }

    let chars: Vec<char> = text.chars().collect();
    let mut out = String::new();
    let mut pos = 0;

    for &(start, end) in ranges {
        let start = start.min(chars.len()).max(pos);
        let end = end.min(chars.len());
        if start >= end {
            continue;
        }

        out.extend(&chars[pos..start]);
        out.push_str(&Theme::fg(&theme.colors.match_highlight_fg));
        out.push_str(&Theme::bg(&theme.colors.match_highlight_bg));
        out.extend(&chars[start..end]);
        out.push_str(Theme::reset());
        out.push_str(restore);
        pos = end;
    }

    out.extend(&chars[pos..]);
    out
}
