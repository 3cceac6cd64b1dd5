//! Application state and view model computation.
//!
//! [`AppState`] is the one explicit state container of the plugin. It owns
//! the [`EventStore`] together with every piece of transient UI state: the
//! add-event form buffers, the search query, the input mode (which doubles as
//! the overlay flag), the dark-mode flag, the selection cursor and the
//! notification banner.
//!
//! Derived data is never stored. The filtered event list comes from
//! [`search::filter`] each time it is needed, and the selection cursor is
//! clamped against it before use.

use super::form::EventForm;
use super::modes::{InputMode, SearchFocus};
use super::notify::{Banner, Notification};
use super::search;
use crate::domain::{Event, EventId, EventStore};
use crate::ui::helpers::truncate;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    BannerInfo, DisplayItem, EmptyState, FooterInfo, FormFieldView, FormOverlay, HeaderInfo,
    SearchBarInfo, UIViewModel,
};

/// Reminder time used when none is configured.
pub const DEFAULT_REMINDER_TIME: &str = "10:00 AM";

/// Terminal lines used by one event in the list (four text lines + spacer).
pub const EVENT_ROW_HEIGHT: usize = 5;

/// Maximum characters of an event name shown in the list.
const NAME_DISPLAY_WIDTH: usize = 48;

/// Central application state container.
#[derive(Debug, Clone)]
pub struct AppState {
    /// All events, in insertion order.
    pub store: EventStore,

    /// Add-event overlay buffers.
    pub form: EventForm,

    /// Current input mode. `InputMode::Form` means the overlay is open.
    pub input_mode: InputMode,

    /// Current search text. Kept verbatim; matching lowercases both sides.
    pub search_query: String,

    /// Cursor position within the filtered view.
    pub selected_index: usize,

    /// Whether the dark theme is active.
    pub dark_mode: bool,

    /// Theme used when `dark_mode` is off.
    pub light_theme: Theme,

    /// Theme used when `dark_mode` is on.
    pub dark_theme: Theme,

    /// Time string attached to reminders.
    pub reminder_time: String,

    /// Pending reminder acknowledgment, if any.
    pub banner: Banner,
}

impl AppState {
    /// Creates an empty state in light mode with the overlay closed.
    ///
    /// # Example
    ///
    /// ```rust
    /// use zevents::{AppState, Theme};
    ///
    /// let state = AppState::new(Theme::builtin_light(), Theme::builtin_dark());
    /// assert!(state.store.is_empty());
    /// assert!(!state.dark_mode);
    /// ```
    #[must_use]
    pub fn new(light_theme: Theme, dark_theme: Theme) -> Self {
        Self {
            store: EventStore::new(),
            form: EventForm::default(),
            input_mode: InputMode::Normal,
            search_query: String::new(),
            selected_index: 0,
            dark_mode: false,
            light_theme,
            dark_theme,
            reminder_time: DEFAULT_REMINDER_TIME.to_string(),
            banner: Banner::default(),
        }
    }

    /// Theme matching the dark-mode flag.
    #[must_use]
    pub const fn theme(&self) -> &Theme {
        if self.dark_mode {
            &self.dark_theme
        } else {
            &self.light_theme
        }
    }

    /// Whether the add-event overlay is open.
    #[must_use]
    pub const fn is_form_open(&self) -> bool {
        self.input_mode.is_form()
    }

    /// Events matching the current search query, in store order.
    #[must_use]
    pub fn visible_events(&self) -> Vec<&Event> {
        search::filter(self.store.events(), &self.search_query)
    }

    /// Event under the cursor in the filtered view.
    #[must_use]
    pub fn selected_event(&self) -> Option<&Event> {
        let visible = self.visible_events();
        let index = self.selected_index.min(visible.len().saturating_sub(1));
        visible.get(index).copied()
    }

    /// Keeps the cursor inside the filtered view.
    pub fn clamp_selection(&mut self) {
        let count = self.visible_events().len();
        self.selected_index = self.selected_index.min(count.saturating_sub(1));
    }

    /// Moves the cursor down, wrapping to the top.
    pub fn move_selection_down(&mut self) {
        let count = self.visible_events().len();
        if count == 0 {
            return;
        }
        self.selected_index = (self.selected_index.min(count - 1) + 1) % count;
    }

    /// Moves the cursor up, wrapping to the bottom.
    pub fn move_selection_up(&mut self) {
        let count = self.visible_events().len();
        if count == 0 {
            return;
        }
        let current = self.selected_index.min(count - 1);
        self.selected_index = if current == 0 { count - 1 } else { current - 1 };
    }

    /// Opens the add-event overlay. Buffers are left as they are.
    pub fn open_form(&mut self) {
        tracing::debug!("opening add event form");
        self.input_mode = InputMode::Form;
    }

    /// Closes the overlay and clears every form buffer.
    pub fn close_form(&mut self) {
        tracing::debug!("closing add event form");
        self.input_mode = InputMode::Normal;
        self.form.clear();
    }

    /// Validates the form and, on success, appends the event and closes the
    /// overlay.
    ///
    /// On failure the store and buffers are untouched, the overlay stays open
    /// and the validation error is kept on the form for display.
    pub fn submit_form(&mut self) -> Option<EventId> {
        let _span = tracing::debug_span!("submit_form").entered();

        let draft = self.form.submit()?;
        let id = self.store.add(draft);
        self.close_form();
        self.clamp_selection();
        Some(id)
    }

    /// Deletes the event under the cursor.
    ///
    /// The selection is resolved to an [`EventId`] against the filtered view
    /// first, so an active search never causes a different event to be
    /// removed.
    pub fn delete_selected(&mut self) -> Option<Event> {
        let id = self.selected_event()?.id;
        let removed = self.store.remove(id);
        self.clamp_selection();
        removed
    }

    /// Flips between the light and dark theme.
    pub fn toggle_dark_mode(&mut self) {
        self.dark_mode = !self.dark_mode;
        tracing::debug!(dark_mode = self.dark_mode, "theme toggled");
    }

    /// Reminder acknowledgment for the event under the cursor.
    ///
    /// Pure: nothing in the state changes.
    #[must_use]
    pub fn reminder_for_selected(&self) -> Option<Notification> {
        self.selected_event()
            .map(|event| Notification::reminder(event, &self.reminder_time))
    }

    /// Computes a renderable view model for a terminal of the given size.
    ///
    /// # Windowing
    ///
    /// Each event occupies [`EVENT_ROW_HEIGHT`] lines. The visible window is
    /// centered on the cursor and shifted back when it would run past the end
    /// of the list.
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> UIViewModel {
        let visible = self.visible_events();
        let selected = self.selected_index.min(visible.len().saturating_sub(1));

        let capacity = (self.calculate_available_rows(rows) / EVENT_ROW_HEIGHT).max(1);
        let mut window_start = selected.saturating_sub(capacity / 2);
        let window_end = (window_start + capacity).min(visible.len());
        if window_end - window_start < capacity && visible.len() >= capacity {
            window_start = window_end.saturating_sub(capacity);
        }

        let highlight = self.input_mode.is_search() && !self.search_query.is_empty();
        let display_items = visible[window_start..window_end]
            .iter()
            .enumerate()
            .map(|(offset, event)| {
                self.compute_display_item(event, window_start + offset == selected, highlight, cols)
            })
            .collect();

        UIViewModel {
            display_items,
            header: self.compute_header(visible.len()),
            footer: self.compute_footer(),
            empty_state: self.compute_empty_state(visible.len()),
            search_bar: self.compute_search_bar(),
            form: self.compute_form_overlay(),
            banner: self.banner.current().map(|n| BannerInfo {
                message: n.message(),
            }),
        }
    }

    fn compute_display_item(
        &self,
        event: &Event,
        is_selected: bool,
        highlight: bool,
        cols: usize,
    ) -> DisplayItem {
        let name = truncate(&event.name, NAME_DISPLAY_WIDTH.min(cols.saturating_sub(4)));
        let highlight_ranges = if highlight {
            search::highlight_range(&name, &self.search_query)
                .into_iter()
                .collect()
        } else {
            vec![]
        };

        DisplayItem {
            name,
            datetime: event.formatted_datetime(),
            category: event.category.clone(),
            guests: format!("Guests: {}", event.guest_list()),
            is_selected,
            highlight_ranges,
        }
    }

    fn compute_header(&self, visible_count: usize) -> HeaderInfo {
        let title = if self.search_query.is_empty() {
            format!(" Calendar App ({visible_count}) ")
        } else {
            format!(" Calendar App ({visible_count}/{}) ", self.store.len())
        };
        HeaderInfo {
            title,
            theme_toggle: if self.dark_mode { "Light Mode" } else { "Dark Mode" }.to_string(),
        }
    }

    fn compute_footer(&self) -> FooterInfo {
        let keybindings = match self.input_mode {
            _ if self.banner.is_visible() => "Any key: dismiss",
            InputMode::Form => "Tab/Shift+Tab: field  Enter: add  Esc: cancel",
            InputMode::Search(SearchFocus::Typing) => {
                "ESC: exit search  Enter: results  Ctrl+n/p: navigate  Type to filter"
            }
            InputMode::Search(SearchFocus::Navigating) => {
                "ESC: exit search  /: edit query  j/k: navigate  d: delete  r: remind"
            }
            InputMode::Normal => {
                "a: add  /: search  j/k: navigate  d: delete  r: remind  t: theme  q: quit"
            }
        };
        FooterInfo {
            keybindings: keybindings.to_string(),
        }
    }

    fn compute_empty_state(&self, visible_count: usize) -> Option<EmptyState> {
        if visible_count > 0 {
            return None;
        }
        Some(if self.store.is_empty() {
            EmptyState {
                message: "No events yet".to_string(),
                subtitle: "Press 'a' to add an event".to_string(),
            }
        } else {
            EmptyState {
                message: format!("No events match \"{}\"", self.search_query),
                subtitle: "Press Esc to clear the search".to_string(),
            }
        })
    }

    fn compute_search_bar(&self) -> Option<SearchBarInfo> {
        match self.input_mode {
            InputMode::Search(focus) => Some(SearchBarInfo {
                query: self.search_query.clone(),
                is_focused: focus == SearchFocus::Typing,
            }),
            _ => None,
        }
    }

    fn compute_form_overlay(&self) -> Option<FormOverlay> {
        if !self.is_form_open() {
            return None;
        }
        let fields = super::form::FormField::ALL
            .iter()
            .map(|&field| FormFieldView {
                label: field.label().to_string(),
                value: self.form.value(field).to_string(),
                placeholder: field.placeholder().to_string(),
                is_focused: self.form.focus == field,
            })
            .collect();

        Some(FormOverlay {
            title: "Add Event".to_string(),
            fields,
            error: self.form.error.as_ref().map(ToString::to_string),
        })
    }

    /// Lines left for the event list after header, borders, footer and the
    /// optional search box.
    const fn calculate_available_rows(&self, total_rows: usize) -> usize {
        match self.input_mode {
            InputMode::Search(_) => total_rows.saturating_sub(9),
            InputMode::Normal | InputMode::Form => total_rows.saturating_sub(6),
        }
    }
}
