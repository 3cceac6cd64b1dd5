//! Event list component renderer.
//!
//! Each event takes [`EVENT_ROW_HEIGHT`] lines:
//!
//! ```text
//!  Team Sync                               [d] Delete  [r] Set Reminder
//!  5/1/2024, 9:00:00 AM
//!  Work
//!  Guests: a@b.com
//! ──────────────────────────────────────────────────────────────────────
//! ```
//!
//! The action hints are drawn on the selected event only, since `d` and `r`
//! act on the cursor.

use super::base_style;
use crate::app::state::EVENT_ROW_HEIGHT;
use crate::ui::helpers::{self, position_cursor, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::DisplayItem;

const ACTION_HINTS: &str = "[d] Delete  [r] Set Reminder ";

/// Renders all items starting at `row`; returns the row after the last one.
pub fn render_event_rows(row: usize, items: &[DisplayItem], theme: &Theme, cols: usize) -> usize {
    items
        .iter()
        .fold(row, |current, item| render_event_row(current, item, theme, cols))
}

fn render_event_row(row: usize, item: &DisplayItem, theme: &Theme, cols: usize) -> usize {
    let row_style = if item.is_selected {
        format!(
            "{}{}",
            Theme::fg(&theme.colors.selection_fg),
            Theme::bg(&theme.colors.selection_bg)
        )
    } else {
        base_style(theme)
    };

    // Name line with highlights and, when selected, the action hints.
    let hints = if item.is_selected { ACTION_HINTS } else { "" };
    let hints_len = hints.chars().count();
    let name_len = item.name.chars().count() + 1;

    position_cursor(row, 1);
    print!("{row_style}{} ", Theme::bold());
    print!(
        "{}",
        helpers::highlighted(&item.name, &item.highlight_ranges, theme, &format!("{row_style}{}", Theme::bold()))
    );
    print!("{}", " ".repeat(cols.saturating_sub(name_len + hints_len)));
    print!("{}{row_style}{hints}", Theme::reset());
    print!("{}", Theme::reset());

    let detail_lines = [
        (&item.datetime, &theme.colors.text_dim),
        (&item.category, &theme.colors.category_fg),
        (&item.guests, &theme.colors.text_normal),
    ];
    for (offset, (text, color)) in detail_lines.into_iter().enumerate() {
        let text = truncate(text, cols.saturating_sub(1));
        position_cursor(row + 1 + offset, 1);
        print!("{row_style}");
        if !item.is_selected {
            print!("{}", Theme::fg(color));
        }
        print!(" {text}");
        print!("{}", " ".repeat(cols.saturating_sub(text.chars().count() + 1)));
        print!("{}", Theme::reset());
    }

    position_cursor(row + EVENT_ROW_HEIGHT - 1, 1);
    print!("{}", base_style(theme));
    print!("{}", Theme::fg(&theme.colors.border));
    print!("{}", "─".repeat(cols));
    print!("{}", Theme::reset());

    row + EVENT_ROW_HEIGHT
}
