//! Empty state component renderer.

use super::base_style;
use crate::ui::helpers::{position_cursor, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::EmptyState;

/// Renders a centered two-line message two rows below `row`.
pub fn render_empty_state(row: usize, empty: &EmptyState, theme: &Theme, cols: usize) {
    let lines = [
        (empty.message.as_str(), Theme::fg(&theme.colors.empty_state_fg)),
        (empty.subtitle.as_str(), format!("{}{}", Theme::dim(), Theme::fg(&theme.colors.text_dim))),
    ];

    for (offset, (text, style)) in lines.iter().enumerate() {
        let text = truncate(text, cols);
        let len = text.chars().count();
        let padding = cols.saturating_sub(len) / 2;

        position_cursor(row + 2 + offset, 1);
        print!("{}{style}", base_style(theme));
        print!("{}", " ".repeat(padding));
        print!("{text}");
        print!("{}", " ".repeat(cols.saturating_sub(padding + len)));
        print!("{}", Theme::reset());
    }
}
