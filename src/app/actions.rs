//! Actions representing side effects to be executed by the plugin runtime.
//!
//! The event handler mutates [`AppState`](crate::app::AppState) directly and
//! returns a `Vec<Action>` for everything that has to go through Zellij or a
//! [`Notifier`](crate::app::notify::Notifier). The plugin shim executes them
//! in order.

use crate::app::notify::Notification;

/// Commands to be executed by the plugin runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Hides the plugin pane.
    CloseFocus,

    /// Delivers a reminder acknowledgment to the notifier.
    Notify(Notification),
}
