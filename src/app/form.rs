//! Add-event form controller.
//!
//! [`EventForm`] holds the five text buffers of the add-event overlay and the
//! currently focused field. Buffers are replaced verbatim by the setters; no
//! trimming or format checks happen while typing. Validation runs only on
//! [`EventForm::submit`].
//!
//! # Validation
//!
//! A submission is accepted when:
//! - the name is non-empty after trimming,
//! - date, time and category are non-empty,
//! - the date parses as `YYYY-MM-DD` and the time as `HH:MM` (or `HH:MM:SS`).
//!
//! The guest email is optional and copied verbatim into a one-element guest
//! list, even when empty.

use crate::domain::EventDraft;
use chrono::{NaiveDate, NaiveTime};
use std::fmt;
use thiserror::Error;

const DATE_FORMAT: &str = "%Y-%m-%d";
const TIME_FORMATS: [&str; 2] = ["%H:%M", "%H:%M:%S"];

/// One of the five input fields of the add-event overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Date,
    Time,
    Category,
    GuestEmail,
}

impl FormField {
    /// Fields in display and tab order.
    pub const ALL: [Self; 5] = [
        Self::Name,
        Self::Date,
        Self::Time,
        Self::Category,
        Self::GuestEmail,
    ];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Name => "Event Name",
            Self::Date => "Date",
            Self::Time => "Time",
            Self::Category => "Event Category",
            Self::GuestEmail => "Guest Email",
        }
    }

    /// Hint shown in an empty field.
    #[must_use]
    pub const fn placeholder(self) -> &'static str {
        match self {
            Self::Name => "Event Name",
            Self::Date => "YYYY-MM-DD",
            Self::Time => "HH:MM",
            Self::Category => "Event Category",
            Self::GuestEmail => "Guest Email",
        }
    }

    /// Next field in tab order, wrapping to the first.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Name => Self::Date,
            Self::Date => Self::Time,
            Self::Time => Self::Category,
            Self::Category => Self::GuestEmail,
            Self::GuestEmail => Self::Name,
        }
    }

    /// Previous field in tab order, wrapping to the last.
    #[must_use]
    pub const fn prev(self) -> Self {
        match self {
            Self::Name => Self::GuestEmail,
            Self::Date => Self::Name,
            Self::Time => Self::Date,
            Self::Category => Self::Time,
            Self::GuestEmail => Self::Category,
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Reason a submission was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("{0} is required")]
    MissingField(FormField),

    #[error("Invalid date \"{0}\" (expected YYYY-MM-DD)")]
    InvalidDate(String),

    #[error("Invalid time \"{0}\" (expected HH:MM)")]
    InvalidTime(String),
}

/// Buffers and focus of the add-event overlay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventForm {
    pub name: String,
    pub date: String,
    pub time: String,
    pub category: String,
    pub guest_email: String,

    /// Field receiving typed characters.
    pub focus: FormField,

    /// Problem found by the last rejected submission, shown in the overlay.
    pub error: Option<FormError>,
}

impl Default for EventForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            date: String::new(),
            time: String::new(),
            category: String::new(),
            guest_email: String::new(),
            focus: FormField::Name,
            error: None,
        }
    }
}

impl EventForm {
    /// Returns the buffer for a field.
    #[must_use]
    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Date => &self.date,
            FormField::Time => &self.time,
            FormField::Category => &self.category,
            FormField::GuestEmail => &self.guest_email,
        }
    }

    fn buffer_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::Name => &mut self.name,
            FormField::Date => &mut self.date,
            FormField::Time => &mut self.time,
            FormField::Category => &mut self.category,
            FormField::GuestEmail => &mut self.guest_email,
        }
    }

    /// Replaces a field's buffer verbatim.
    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        *self.buffer_mut(field) = value.into();
    }

    /// Appends a character to the focused field.
    pub fn push_char(&mut self, c: char) {
        let focus = self.focus;
        self.buffer_mut(focus).push(c);
    }

    /// Removes the last character of the focused field.
    pub fn backspace(&mut self) {
        let focus = self.focus;
        self.buffer_mut(focus).pop();
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    /// Empties every buffer and resets focus and error state.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Checks the buffers and builds a draft event without touching state.
    ///
    /// # Errors
    ///
    /// Returns the first problem found, checking fields in display order.
    pub fn validate(&self) -> Result<EventDraft, FormError> {
        if self.name.trim().is_empty() {
            return Err(FormError::MissingField(FormField::Name));
        }
        if self.date.is_empty() {
            return Err(FormError::MissingField(FormField::Date));
        }
        if self.time.is_empty() {
            return Err(FormError::MissingField(FormField::Time));
        }
        if self.category.is_empty() {
            return Err(FormError::MissingField(FormField::Category));
        }

        let date = NaiveDate::parse_from_str(&self.date, DATE_FORMAT)
            .map_err(|_| FormError::InvalidDate(self.date.clone()))?;
        let time = TIME_FORMATS
            .iter()
            .find_map(|format| NaiveTime::parse_from_str(&self.time, format).ok())
            .ok_or_else(|| FormError::InvalidTime(self.time.clone()))?;

        Ok(EventDraft {
            name: self.name.clone(),
            datetime: date.and_time(time),
            category: self.category.clone(),
            guests: vec![self.guest_email.clone()],
        })
    }

    /// Validates the buffers, recording the error on failure.
    ///
    /// Buffers are left untouched either way; clearing them is the caller's
    /// job once the draft has been stored.
    pub fn submit(&mut self) -> Option<EventDraft> {
        match self.validate() {
            Ok(draft) => {
                self.error = None;
                Some(draft)
            }
            Err(e) => {
                tracing::debug!(error = %e, "event form rejected");
                self.error = Some(e);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> EventForm {
        let mut form = EventForm::default();
        form.set(FormField::Name, "Team Sync");
        form.set(FormField::Date, "2024-05-01");
        form.set(FormField::Time, "09:00");
        form.set(FormField::Category, "Work");
        form.set(FormField::GuestEmail, "a@b.com");
        form
    }

    #[test]
    fn valid_form_builds_draft() {
        let draft = filled().validate().unwrap();
        assert_eq!(draft.name, "Team Sync");
        assert_eq!(draft.category, "Work");
        assert_eq!(draft.guests, vec!["a@b.com".to_string()]);
        assert_eq!(
            draft.datetime,
            NaiveDate::from_ymd_opt(2024, 5, 1)
                .and_then(|d| d.and_hms_opt(9, 0, 0))
                .unwrap()
        );
    }

    #[test]
    fn whitespace_name_is_missing() {
        let mut form = filled();
        form.set(FormField::Name, "   ");
        assert_eq!(form.validate(), Err(FormError::MissingField(FormField::Name)));
    }

    #[test]
    fn each_required_field_is_checked() {
        for field in [FormField::Date, FormField::Time, FormField::Category] {
            let mut form = filled();
            form.set(field, "");
            assert_eq!(form.validate(), Err(FormError::MissingField(field)));
        }
    }

    #[test]
    fn guest_email_is_optional_and_kept_verbatim() {
        let mut form = filled();
        form.set(FormField::GuestEmail, "");
        let draft = form.validate().unwrap();
        assert_eq!(draft.guests, vec![String::new()]);
    }

    #[test]
    fn name_is_stored_untrimmed() {
        let mut form = filled();
        form.set(FormField::Name, "  Lunch ");
        assert_eq!(form.validate().unwrap().name, "  Lunch ");
    }

    #[test]
    fn rejects_unparseable_date_and_time() {
        let mut form = filled();
        form.set(FormField::Date, "2024-13-01");
        assert_eq!(
            form.validate(),
            Err(FormError::InvalidDate("2024-13-01".to_string()))
        );

        let mut form = filled();
        form.set(FormField::Time, "9am");
        assert_eq!(form.validate(), Err(FormError::InvalidTime("9am".to_string())));
    }

    #[test]
    fn accepts_seconds_in_time() {
        let mut form = filled();
        form.set(FormField::Time, "09:00:30");
        assert!(form.validate().is_ok());
    }

    #[test]
    fn submit_records_error_and_keeps_buffers() {
        let mut form = filled();
        form.set(FormField::Category, "");
        assert!(form.submit().is_none());
        assert_eq!(form.error, Some(FormError::MissingField(FormField::Category)));
        assert_eq!(form.name, "Team Sync");

        form.set(FormField::Category, "Work");
        assert!(form.submit().is_some());
        assert!(form.error.is_none());
    }

    #[test]
    fn typing_edits_focused_field() {
        let mut form = EventForm::default();
        form.push_char('h');
        form.push_char('i');
        form.focus_next();
        form.push_char('2');
        form.backspace();
        form.backspace();
        assert_eq!(form.name, "hi");
        assert_eq!(form.date, "");
        assert_eq!(form.focus, FormField::Date);
    }

    #[test]
    fn focus_wraps_both_ways() {
        let mut form = EventForm::default();
        form.focus_prev();
        assert_eq!(form.focus, FormField::GuestEmail);
        form.focus_next();
        assert_eq!(form.focus, FormField::Name);
        for _ in 0..FormField::ALL.len() {
            form.focus_next();
        }
        assert_eq!(form.focus, FormField::Name);
    }

    #[test]
    fn clear_resets_everything() {
        let mut form = filled();
        form.focus = FormField::Time;
        form.error = Some(FormError::MissingField(FormField::Name));
        form.clear();
        assert_eq!(form, EventForm::default());
    }

    #[test]
    fn error_messages_name_the_field() {
        assert_eq!(
            FormError::MissingField(FormField::Category).to_string(),
            "Event Category is required"
        );
    }
}
