//! Reminder banner renderer.

use super::centered_origin;
use crate::ui::helpers::{position_cursor, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::BannerInfo;

const DISMISS_HINT: &str = "Press any key to dismiss";

/// Draws the banner centered in the pane.
///
/// ```text
///
///   Reminder set for Team Sync at 10:00 AM
///
///               Press any key to dismiss
///
/// ```
///
/// # Parameters
///
/// * `banner` - Message to show
/// * `theme` - Active color theme (`banner_fg`/`banner_bg`)
/// * `rows` - Pane height in rows
/// * `cols` - Pane width in columns; long messages are truncated to fit
pub fn render_banner(banner: &BannerInfo, theme: &Theme, rows: usize, cols: usize) {
    let message_len = banner.message.chars().count();
    let width = (message_len.max(DISMISS_HINT.len()) + 6).min(cols);
    let inner = width.saturating_sub(2);
    let (top, left) = centered_origin(width, 5, rows, cols);

    let style = format!(
        "{}{}{}",
        Theme::fg(&theme.colors.banner_fg),
        Theme::bg(&theme.colors.banner_bg),
        Theme::bold()
    );
    let lines = ["", banner.message.as_str(), "", DISMISS_HINT, ""];

    for (offset, text) in lines.iter().enumerate() {
        let text = truncate(text, inner);
        let len = text.chars().count();
        let padding = width.saturating_sub(len) / 2;

        position_cursor(top + offset, left);
        print!("{style}{}{text}", " ".repeat(padding));
        print!("{}", " ".repeat(width.saturating_sub(padding + len)));
        print!("{}", Theme::reset());
    }
}
