//! View model types representing renderable UI state.
//!
//! View models are computed by
//! [`AppState::compute_viewmodel`](crate::app::AppState::compute_viewmodel)
//! and consumed by the renderer. They hold display-ready strings only; all
//! formatting decisions (datetime format, guest joining, truncation,
//! highlight ranges) are made before rendering.
//!
//! # Example
//!
//! ```rust
//! use zevents::ui::viewmodel::{DisplayItem, FooterInfo, HeaderInfo, UIViewModel};
//!
//! let vm = UIViewModel {
//!     display_items: vec![DisplayItem {
//!         name: "Team Sync".to_string(),
//!         datetime: "5/1/2024, 9:00:00 AM".to_string(),
//!         category: "Work".to_string(),
//!         guests: "Guests: a@b.com".to_string(),
//!         is_selected: true,
//!         highlight_ranges: vec![(0, 4)],
//!     }],
//!     header: HeaderInfo {
//!         title: " Calendar App (1) ".to_string(),
//!         theme_toggle: "Dark Mode".to_string(),
//!     },
//!     footer: FooterInfo { keybindings: "q: quit".to_string() },
//!     empty_state: None,
//!     search_bar: None,
//!     form: None,
//!     banner: None,
//! };
//! assert_eq!(vm.display_items.len(), 1);
//! ```

/// Complete UI view model for one frame.
///
/// Layers are optional: the renderer draws the list screen, then the form
/// overlay and the banner on top when present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UIViewModel {
    /// Events inside the visible window, in store order.
    pub display_items: Vec<DisplayItem>,

    /// Title with event count, and the theme toggle label.
    pub header: HeaderInfo,

    /// Keybinding hints for the current mode.
    pub footer: FooterInfo,

    /// Message drawn in place of the list when nothing is visible.
    pub empty_state: Option<EmptyState>,

    /// Present in search mode.
    pub search_bar: Option<SearchBarInfo>,

    /// Present while the add-event overlay is open.
    pub form: Option<FormOverlay>,

    /// Present while a reminder acknowledgment is pending.
    pub banner: Option<BannerInfo>,
}

/// One event in the list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayItem {
    /// Event name, truncated to the list width.
    pub name: String,

    /// Formatted date-time, e.g. `5/1/2024, 9:00:00 AM`.
    pub datetime: String,

    /// Free-text category label.
    pub category: String,

    /// `Guests: ` followed by the comma-joined guest list.
    pub guests: String,

    /// Whether the cursor is on this event.
    pub is_selected: bool,

    /// Character ranges of `name` matching the search query.
    pub highlight_ranges: Vec<(usize, usize)>,
}

/// Header line contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    /// `Calendar App (n)`, or `(visible/total)` while a query is active.
    pub title: String,

    /// Label of the theme the toggle switches to ("Dark Mode"/"Light Mode").
    pub theme_toggle: String,
}

/// Footer line contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterInfo {
    /// Help text for the active mode.
    pub keybindings: String,
}

/// Centered message shown when the list is empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    /// Main line, e.g. `No events yet`.
    pub message: String,

    /// Dimmed hint below the message.
    pub subtitle: String,
}

/// Search box contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchBarInfo {
    /// Query text as typed.
    pub query: String,

    /// Whether keystrokes currently go to the query.
    pub is_focused: bool,
}

/// Add-event overlay contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormOverlay {
    /// Box title (`Add Event`).
    pub title: String,

    /// Input fields in focus order.
    pub fields: Vec<FormFieldView>,

    /// Message of the last rejected submission.
    pub error: Option<String>,
}

/// One input line of the add-event overlay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormFieldView {
    pub label: String,
    pub value: String,

    /// Hint drawn while `value` is empty.
    pub placeholder: String,
    pub is_focused: bool,
}

/// Reminder acknowledgment box contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BannerInfo {
    /// `Reminder set for {name} at {time}`.
    pub message: String,
}
