//! Event handling and state transition logic.
//!
//! [`handle_event`] is the single controller of the plugin. The shim in
//! `main.rs` translates Zellij key presses into [`UiEvent`]s according to the
//! current [`InputMode`]; the handler applies them to [`AppState`] and
//! returns whether a re-render is needed plus the [`Action`]s to execute.
//!
//! ```text
//! Key → UiEvent → handle_event → AppState mutation → (should_render, actions)
//! ```

use super::form::FormField;
use super::modes::{InputMode, SearchFocus};
use crate::app::{Action, AppState};
use crate::domain::error::Result;

/// User intents, already resolved against the current input mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    /// Moves the cursor down (wraps to top).
    KeyDown,
    /// Moves the cursor up (wraps to bottom).
    KeyUp,
    /// Hides the plugin pane.
    CloseFocus,

    /// Opens the add-event overlay.
    OpenForm,
    /// Closes the overlay and clears its buffers.
    CancelForm,
    /// Submits the overlay ("Add").
    SubmitForm,
    /// Moves form focus to the next field.
    NextField,
    /// Moves form focus to the previous field.
    PrevField,
    /// Replaces a form field's buffer verbatim.
    SetField {
        field: FormField,
        value: String,
    },

    /// Enters search mode with typing focus.
    SearchMode,
    /// Focuses the search input (from navigating).
    FocusSearchBar,
    /// Focuses the filtered results (from typing).
    FocusResults,
    /// Leaves search mode and clears the query.
    ExitSearch,

    /// Appends a character to the active text input.
    Char(char),
    /// Removes the last character of the active text input.
    Backspace,

    /// Deletes the event under the cursor.
    DeleteSelected,
    /// Requests a reminder for the event under the cursor.
    SetReminder,
    /// Flips dark/light mode.
    ToggleDarkMode,
    /// Hides the notification banner.
    DismissNotice,
}

/// Processes an event, mutates application state, and returns actions to execute.
///
/// # Returns
///
/// `(should_render, actions)`: whether the UI changed, and the side effects
/// for the plugin runtime to execute in order.
///
/// # Errors
///
/// None of the current events fail; the `Result` mirrors the plugin-shim
/// contract so fallible events can be added without changing call sites.
///
/// # Example
///
/// ```rust
/// use zevents::{handle_event, AppState, Theme, UiEvent};
///
/// let mut state = AppState::new(Theme::builtin_light(), Theme::builtin_dark());
/// let (render, actions) = handle_event(&mut state, &UiEvent::OpenForm)?;
/// assert!(render);
/// assert!(actions.is_empty());
/// assert!(state.is_form_open());
/// # Ok::<(), zevents::ZeventsError>(())
/// ```
#[allow(clippy::too_many_lines)]
pub fn handle_event(state: &mut AppState, event: &UiEvent) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        UiEvent::KeyDown => {
            state.move_selection_down();
            Ok((true, vec![]))
        }
        UiEvent::KeyUp => {
            state.move_selection_up();
            Ok((true, vec![]))
        }
        UiEvent::CloseFocus => Ok((false, vec![Action::CloseFocus])),

        UiEvent::OpenForm => {
            if state.input_mode != InputMode::Normal {
                return Ok((false, vec![]));
            }
            state.open_form();
            Ok((true, vec![]))
        }
        UiEvent::CancelForm => {
            if !state.is_form_open() {
                return Ok((false, vec![]));
            }
            state.close_form();
            Ok((true, vec![]))
        }
        UiEvent::SubmitForm => {
            if !state.is_form_open() {
                return Ok((false, vec![]));
            }
            match state.submit_form() {
                Some(id) => tracing::debug!(event_id = %id, "event created"),
                None => tracing::debug!("submission rejected, overlay stays open"),
            }
            Ok((true, vec![]))
        }
        UiEvent::NextField => {
            if !state.is_form_open() {
                return Ok((false, vec![]));
            }
            state.form.focus_next();
            Ok((true, vec![]))
        }
        UiEvent::PrevField => {
            if !state.is_form_open() {
                return Ok((false, vec![]));
            }
            state.form.focus_prev();
            Ok((true, vec![]))
        }
        UiEvent::SetField { field, value } => {
            state.form.set(*field, value.clone());
            Ok((state.is_form_open(), vec![]))
        }

        UiEvent::SearchMode => {
            if state.is_form_open() {
                return Ok((false, vec![]));
            }
            tracing::debug!("entering search mode");
            state.input_mode = InputMode::Search(SearchFocus::Typing);
            state.search_query.clear();
            state.clamp_selection();
            Ok((true, vec![]))
        }
        UiEvent::FocusSearchBar => {
            if !state.input_mode.is_search() {
                return Ok((false, vec![]));
            }
            state.input_mode = InputMode::Search(SearchFocus::Typing);
            Ok((true, vec![]))
        }
        UiEvent::FocusResults => {
            if !state.input_mode.is_search() {
                return Ok((false, vec![]));
            }
            if state.search_query.is_empty() {
                state.input_mode = InputMode::Normal;
            } else {
                state.input_mode = InputMode::Search(SearchFocus::Navigating);
            }
            Ok((true, vec![]))
        }
        UiEvent::ExitSearch => {
            if !state.input_mode.is_search() {
                return Ok((false, vec![]));
            }
            tracing::debug!(query = %state.search_query, "exiting search mode");
            state.input_mode = InputMode::Normal;
            state.search_query.clear();
            state.clamp_selection();
            Ok((true, vec![]))
        }

        UiEvent::Char(c) => match state.input_mode {
            InputMode::Form => {
                state.form.push_char(*c);
                Ok((true, vec![]))
            }
            InputMode::Search(SearchFocus::Typing) => {
                state.search_query.push(*c);
                tracing::trace!(query = %state.search_query, "search query updated");
                state.clamp_selection();
                Ok((true, vec![]))
            }
            _ => Ok((false, vec![])),
        },
        UiEvent::Backspace => match state.input_mode {
            InputMode::Form => {
                state.form.backspace();
                Ok((true, vec![]))
            }
            InputMode::Search(SearchFocus::Typing) => {
                state.search_query.pop();
                state.clamp_selection();
                Ok((true, vec![]))
            }
            _ => Ok((false, vec![])),
        },

        UiEvent::DeleteSelected => {
            if state.is_form_open() {
                return Ok((false, vec![]));
            }
            match state.delete_selected() {
                Some(event) => {
                    tracing::debug!(event_id = %event.id, name = %event.name, "event deleted");
                    Ok((true, vec![]))
                }
                None => {
                    tracing::debug!("no event selected to delete");
                    Ok((false, vec![]))
                }
            }
        }
        UiEvent::SetReminder => {
            if state.is_form_open() {
                return Ok((false, vec![]));
            }
            state.reminder_for_selected().map_or_else(
                || {
                    tracing::debug!("no event selected for reminder");
                    Ok((false, vec![]))
                },
                |notification| Ok((true, vec![Action::Notify(notification)])),
            )
        }
        UiEvent::ToggleDarkMode => {
            state.toggle_dark_mode();
            Ok((true, vec![]))
        }
        UiEvent::DismissNotice => Ok((state.banner.dismiss().is_some(), vec![])),
    }
}
