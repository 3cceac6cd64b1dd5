//! Search bar component renderer.

use super::base_style;
use crate::ui::helpers::{pad_to, position_cursor, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::SearchBarInfo;

/// Horizontal margin for the search box (spaces on left and right).
const SEARCH_BOX_MARGIN: usize = 2;

/// Renders the 3-line search box; returns the next row.
///
/// ```text
/// [margin] ┌──────────────────────────┐
/// [margin] │ Search Events: team█     │
/// [margin] └──────────────────────────┘
/// ```
///
/// The block cursor is shown only while the query has focus.
pub fn render_search_bar(row: usize, search: &SearchBarInfo, theme: &Theme, cols: usize) -> usize {
    let box_width = cols.saturating_sub(SEARCH_BOX_MARGIN * 2);
    let inner_width = box_width.saturating_sub(2);
    let base = base_style(theme);
    let border = Theme::fg(&theme.colors.search_bar_border);
    let margin = " ".repeat(SEARCH_BOX_MARGIN);

    position_cursor(row, 1);
    print!("{base}{margin}{border}┌{}┐{}", "─".repeat(inner_width), Theme::reset());

    let cursor = if search.is_focused { "█" } else { "" };
    let text = truncate(&format!(" Search Events: {}{cursor}", search.query), inner_width);

    position_cursor(row + 1, 1);
    print!("{base}{margin}{border}│");
    print!("{}", Theme::fg(&theme.colors.text_normal));
    print!("{}", pad_to(&text, inner_width));
    print!("{border}│{}", Theme::reset());

    position_cursor(row + 2, 1);
    print!("{base}{margin}{border}└{}┘{}", "─".repeat(inner_width), Theme::reset());

    row + 3
}
