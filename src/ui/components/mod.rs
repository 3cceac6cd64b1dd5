//! Composable UI component renderers.
//!
//! # Components
//!
//! - [`header`]: Title bar with the dark/light toggle label
//! - [`footer`]: Keybinding hints
//! - [`search`]: Search input box
//! - [`list`]: Event rows (name, datetime, category, guests)
//! - [`empty`]: Message shown when no event is visible
//! - [`form`]: Add-event overlay
//! - [`banner`]: Reminder acknowledgment box
//!
//! # Layout
//!
//! ```text
//! [blank line]
//! [Header]
//! [Border]
//! [Search Bar - 3 lines, search mode only]
//! [Event rows or empty state]
//! [Border]
//! [Footer]
//! ```
//!
//! The form overlay and the banner are drawn last, centered on top of the
//! list.

mod banner;
mod empty;
mod footer;
mod form;
mod header;
mod list;
mod search;

pub use banner::render_banner;
pub use form::render_form_overlay;

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{SearchBarInfo, UIViewModel};

use empty::render_empty_state;
use footer::render_footer;
use header::render_header;
use list::render_event_rows;
use search::render_search_bar;

/// Base style of the pane: normal text on the theme background.
pub(crate) fn base_style(theme: &Theme) -> String {
    format!(
        "{}{}",
        Theme::fg(&theme.colors.text_normal),
        Theme::bg_opt(theme.colors.background.as_deref())
    )
}

/// Paints every row with the theme background.
pub fn fill_background(theme: &Theme, rows: usize, cols: usize) {
    let style = base_style(theme);
    for row in 1..=rows {
        position_cursor(row, 1);
        print!("{style}{}{}", " ".repeat(cols), Theme::reset());
    }
}

/// Horizontal separator; returns the next row.
fn render_border(row: usize, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", base_style(theme));
    print!("{}", Theme::fg(&theme.colors.border));
    print!("{}", "─".repeat(cols));
    print!("{}", Theme::reset());
    row + 1
}

/// Draws the list area: event rows, or the empty state message.
fn render_body(row: usize, vm: &UIViewModel, theme: &Theme, cols: usize) {
    match &vm.empty_state {
        Some(empty) => render_empty_state(row, empty, theme, cols),
        None => {
            render_event_rows(row, &vm.display_items, theme, cols);
        }
    }
}

fn render_bottom(vm: &UIViewModel, theme: &Theme, cols: usize, rows: usize) {
    let footer_row = rows.saturating_sub(1);
    render_border(footer_row.saturating_sub(1), theme, cols);
    render_footer(footer_row, &vm.footer, theme, cols);
}

/// Header, list and footer.
pub fn render_normal_mode(vm: &UIViewModel, theme: &Theme, cols: usize, rows: usize) {
    let mut current_row = 2;
    current_row = render_header(current_row, &vm.header, theme, cols);
    current_row = render_border(current_row, theme, cols);
    render_body(current_row, vm, theme, cols);
    render_bottom(vm, theme, cols, rows);
}

/// Header, search box, list and footer.
pub fn render_search_mode(
    vm: &UIViewModel,
    search: &SearchBarInfo,
    theme: &Theme,
    cols: usize,
    rows: usize,
) {
    let mut current_row = 2;
    current_row = render_header(current_row, &vm.header, theme, cols);
    current_row = render_border(current_row, theme, cols);
    current_row = render_search_bar(current_row, search, theme, cols);
    render_body(current_row, vm, theme, cols);
    render_bottom(vm, theme, cols, rows);
}

/// Top-left corner of a `width`×`height` box centered in the pane.
pub(crate) const fn centered_origin(width: usize, height: usize, rows: usize, cols: usize) -> (usize, usize) {
    let row = rows.saturating_sub(height) / 2 + 1;
    let col = cols.saturating_sub(width) / 2 + 1;
    (row, col)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centers_boxes() {
        assert_eq!(centered_origin(40, 10, 30, 80), (11, 21));
        assert_eq!(centered_origin(100, 50, 10, 20), (1, 1));
    }
}
