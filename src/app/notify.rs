//! Reminder notifications.
//!
//! Setting a reminder does not schedule anything. It produces a
//! [`Notification`] that the event handler returns inside
//! [`Action::Notify`](crate::app::Action::Notify); the plugin shim hands it to
//! a [`Notifier`]. The built-in [`Banner`] notifier keeps the latest
//! notification on screen until the user dismisses it.
//!
//! A notifier that really schedules reminders can implement [`Notifier`]
//! without touching the event model.

use crate::domain::{Event, EventId};

/// A one-time, user-visible acknowledgment that a reminder was requested.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub event_id: EventId,
    pub event_name: String,
    /// Reminder time exactly as supplied, e.g. `10:00 AM`.
    pub remind_at: String,
}

impl Notification {
    /// Builds the acknowledgment for a reminder on `event` at `remind_at`.
    #[must_use]
    pub fn reminder(event: &Event, remind_at: &str) -> Self {
        Self {
            event_id: event.id,
            event_name: event.name.clone(),
            remind_at: remind_at.to_string(),
        }
    }

    /// Text shown to the user.
    #[must_use]
    pub fn message(&self) -> String {
        format!("Reminder set for {} at {}", self.event_name, self.remind_at)
    }
}

/// Delivery channel for notifications.
pub trait Notifier {
    fn notify(&mut self, notification: Notification);
}

/// Notifier that displays the most recent notification as a modal banner.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Banner {
    current: Option<Notification>,
}

impl Banner {
    #[must_use]
    pub const fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }

    #[must_use]
    pub const fn is_visible(&self) -> bool {
        self.current.is_some()
    }

    /// Hides the banner, returning what it was showing.
    pub fn dismiss(&mut self) -> Option<Notification> {
        self.current.take()
    }
}

impl Notifier for Banner {
    fn notify(&mut self, notification: Notification) {
        tracing::info!(
            event_id = %notification.event_id,
            remind_at = %notification.remind_at,
            "reminder acknowledged"
        );
        self.current = Some(notification);
    }
}
