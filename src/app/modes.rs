//! Input mode state machine.
//!
//! The mode decides which keybindings are active and which parts of the UI
//! are drawn. The add-event overlay is the [`InputMode::Form`] state: the
//! overlay is open exactly when the app is in that mode.
//!
//! ```text
//!            '/'                 'a'
//!   Search ◄──────── Normal ────────► Form
//!          ────────►        ◄────────
//!            Esc          Esc / Enter (valid)
//! ```

/// Focus state within search mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchFocus {
    /// Keystrokes edit the search query.
    Typing,

    /// Keystrokes navigate and act on the filtered results.
    ///
    /// j/k move, `d` deletes, `r` sets a reminder, `/` returns to Typing.
    Navigating,
}

/// Current input handling mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Navigation and command mode.
    Normal,

    /// Search box visible, with a [`SearchFocus`].
    Search(SearchFocus),

    /// Add-event overlay open.
    Form,
}

impl InputMode {
    /// Whether the add-event overlay is open.
    #[must_use]
    pub const fn is_form(self) -> bool {
        matches!(self, Self::Form)
    }

    #[must_use]
    pub const fn is_search(self) -> bool {
        matches!(self, Self::Search(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_form_mode_has_overlay_open() {
        assert!(InputMode::Form.is_form());
        assert!(!InputMode::Normal.is_form());
        assert!(!InputMode::Search(SearchFocus::Typing).is_form());
    }

    #[test]
    fn search_modes() {
        assert!(InputMode::Search(SearchFocus::Navigating).is_search());
        assert!(!InputMode::Form.is_search());
    }
}
