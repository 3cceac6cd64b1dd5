//! Add-event overlay renderer.
//!
//! ```text
//! ┌ Add Event ─────────────────────────────────┐
//! │                                            │
//! │ > Event Name      Team Sync█               │
//! │   Date            2024-05-01               │
//! │   Time            HH:MM                    │
//! │   Event Category  Event Category           │
//! │   Guest Email     Guest Email              │
//! │                                            │
//! │ Time is required                           │
//! │              [Enter] Add  [Esc] Cancel     │
//! └────────────────────────────────────────────┘
//! ```
//!
//! Empty fields show their placeholder dimmed.

use super::centered_origin;
use crate::ui::helpers::{pad_to, position_cursor, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{FormFieldView, FormOverlay};

const MAX_WIDTH: usize = 56;
const LABEL_WIDTH: usize = 16;
const BUTTONS: &str = "[Enter] Add  [Esc] Cancel ";

/// Draws the overlay centered in a `rows`×`cols` pane.
pub fn render_form_overlay(form: &FormOverlay, theme: &Theme, rows: usize, cols: usize) {
    let width = MAX_WIDTH.min(cols.saturating_sub(2)).max(LABEL_WIDTH + 8);
    let inner = width.saturating_sub(2);
    // borders + blank + fields + blank + error + buttons
    let height = form.fields.len() + 6;
    let (top, left) = centered_origin(width, height, rows, cols);

    let fill = format!(
        "{}{}",
        Theme::fg(&theme.colors.text_normal),
        Theme::bg_opt(theme.overlay_bg())
    );
    let border = Theme::fg(&theme.colors.overlay_border);

    let title = truncate(&format!(" {} ", form.title), inner);
    position_cursor(top, left);
    print!("{fill}{border}┌{}{title}", Theme::bold());
    print!("{}{fill}{border}", Theme::reset());
    print!("{}┐{}", "─".repeat(inner.saturating_sub(title.chars().count())), Theme::reset());

    let mut row = top + 1;
    let mut line = |content: &str, style: &str| {
        position_cursor(row, left);
        print!("{fill}{border}│{fill}{style}{}", pad_to(content, inner));
        print!("{}{fill}{border}│{}", Theme::reset(), Theme::reset());
        row += 1;
    };

    line("", "");
    for field in &form.fields {
        let (content, style) = field_line(field, theme, inner);
        line(&content, &style);
    }
    line("", "");

    let error = form.error.as_deref().map_or_else(String::new, |e| truncate(&format!(" {e}"), inner));
    line(&error, &Theme::fg(&theme.colors.error_fg));

    let buttons = truncate(BUTTONS, inner);
    let buttons = format!("{}{buttons}", " ".repeat(inner.saturating_sub(buttons.chars().count())));
    line(&buttons, &format!("{}{}", Theme::bold(), Theme::fg(&theme.colors.input_focus_fg)));

    position_cursor(row, left);
    print!("{fill}{border}└{}┘{}", "─".repeat(inner), Theme::reset());
}

/// Text and style of one field line.
///
/// Placeholders are dimmed; the focused field gets a `>` marker, the focus
/// color and a block cursor.
fn field_line(field: &FormFieldView, theme: &Theme, inner: usize) -> (String, String) {
    let marker = if field.is_focused { '>' } else { ' ' };
    let label = pad_to(&field.label, LABEL_WIDTH);
    let cursor = if field.is_focused { "█" } else { "" };
    let value = if field.value.is_empty() && !field.is_focused {
        field.placeholder.as_str()
    } else {
        field.value.as_str()
    };

    let content = truncate(&format!(" {marker} {label}{value}{cursor}"), inner);
    let style = if field.is_focused {
        Theme::fg(&theme.colors.input_focus_fg)
    } else if field.value.is_empty() {
        Theme::fg(&theme.colors.text_dim)
    } else {
        String::new()
    };
    (content, style)
}
