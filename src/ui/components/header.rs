//! Header component renderer.
//!
//! Title on the left, theme toggle label on the right:
//!
//! ```text
//!  Calendar App (3)                                   [t] Dark Mode
//! ```

use super::base_style;
use crate::ui::helpers::{position_cursor, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::HeaderInfo;

/// Renders the header line; returns the next row.
pub fn render_header(row: usize, header: &HeaderInfo, theme: &Theme, cols: usize) -> usize {
    let toggle = format!("[t] {} ", header.theme_toggle);
    let toggle_len = toggle.chars().count();
    let title = truncate(&header.title, cols.saturating_sub(toggle_len));
    let title_len = title.chars().count();

    position_cursor(row, 1);
    print!("{}", base_style(theme));
    if let Some(bg) = &theme.colors.header_bg {
        print!("{}", Theme::bg(bg));
    }
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.header_fg));
    print!("{title}");
    print!("{}", " ".repeat(cols.saturating_sub(title_len + toggle_len)));
    print!("{}", Theme::fg(&theme.colors.search_bar_border));
    print!("{toggle}");
    print!("{}", Theme::reset());
    row + 1
}
