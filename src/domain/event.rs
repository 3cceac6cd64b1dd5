//! Calendar event domain model.
//!
//! An [`Event`] is a user-created calendar entry: a name, a single point in
//! time built from separate date and time inputs, a free-text category and a
//! guest list. Events are never edited after creation; they are only appended
//! to and removed from the [`EventStore`](super::EventStore).

use chrono::NaiveDateTime;
use std::fmt;

/// Display format for event date-times (`5/1/2024, 9:00:00 AM`).
pub const DATETIME_DISPLAY_FORMAT: &str = "%-m/%-d/%Y, %-I:%M:%S %p";

/// Stable identity assigned to an event when it enters the store.
///
/// Ids are handed out in increasing order and never reused within a session,
/// so they keep pointing at the same event after other events are deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EventId(pub u64);

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Validated event contents, ready to be appended to the store.
///
/// Produced by [`EventForm::submit`](crate::app::form::EventForm::submit). The
/// store turns a draft into an [`Event`] by assigning it an [`EventId`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventDraft {
    pub name: String,
    pub datetime: NaiveDateTime,
    pub category: String,
    pub guests: Vec<String>,
}

/// A calendar event held in memory for the plugin session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub id: EventId,
    pub name: String,
    pub datetime: NaiveDateTime,
    pub category: String,
    /// Guest email addresses. The add form always produces exactly one entry,
    /// which may be empty.
    pub guests: Vec<String>,
}

impl Event {
    /// Builds an event from a draft and the id the store assigned to it.
    #[must_use]
    pub fn from_draft(id: EventId, draft: EventDraft) -> Self {
        Self {
            id,
            name: draft.name,
            datetime: draft.datetime,
            category: draft.category,
            guests: draft.guests,
        }
    }

    /// Returns the date-time formatted for display.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use zevents::domain::{Event, EventId};
    ///
    /// let event = Event {
    ///     id: EventId(0),
    ///     name: "Team Sync".to_string(),
    ///     datetime: NaiveDate::from_ymd_opt(2024, 5, 1)
    ///         .and_then(|d| d.and_hms_opt(9, 0, 0))
    ///         .unwrap(),
    ///     category: "Work".to_string(),
    ///     guests: vec!["a@b.com".to_string()],
    /// };
    /// assert_eq!(event.formatted_datetime(), "5/1/2024, 9:00:00 AM");
    /// ```
    #[must_use]
    pub fn formatted_datetime(&self) -> String {
        self.datetime.format(DATETIME_DISPLAY_FORMAT).to_string()
    }

    /// Returns the guest list joined with `", "`.
    #[must_use]
    pub fn guest_list(&self) -> String {
        self.guests.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .and_then(|date| date.and_hms_opt(h, min, 0))
            .unwrap()
    }

    fn event(guests: &[&str], datetime: NaiveDateTime) -> Event {
        Event {
            id: EventId(7),
            name: "Standup".to_string(),
            datetime,
            category: "Work".to_string(),
            guests: guests.iter().map(ToString::to_string).collect(),
        }
    }

    #[test]
    fn formats_afternoon_times_in_twelve_hour_clock() {
        let e = event(&[], at(2024, 12, 31, 17, 5));
        assert_eq!(e.formatted_datetime(), "12/31/2024, 5:05:00 PM");
    }

    #[test]
    fn formats_midnight_as_twelve_am() {
        let e = event(&[], at(2024, 1, 2, 0, 30));
        assert_eq!(e.formatted_datetime(), "1/2/2024, 12:30:00 AM");
    }

    #[test]
    fn joins_guests_with_comma() {
        let e = event(&["a@b.com", "c@d.com"], at(2024, 1, 1, 9, 0));
        assert_eq!(e.guest_list(), "a@b.com, c@d.com");
    }

    #[test]
    fn single_empty_guest_renders_as_empty_list() {
        let e = event(&[""], at(2024, 1, 1, 9, 0));
        assert_eq!(e.guest_list(), "");
    }

    #[test]
    fn event_id_display() {
        assert_eq!(EventId(3).to_string(), "#3");
    }
}
