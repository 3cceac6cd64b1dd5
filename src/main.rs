//! Zellij plugin wrapper and entry point.
//!
//! Thin integration layer between the zevents library and the Zellij plugin
//! system: key presses are translated into [`UiEvent`]s for the current input
//! mode, handed to [`handle_event`], and the returned actions are executed
//! against the Zellij API.
//!
//! # Plugin Lifecycle
//!
//! 1. **Load**: Parse config, initialize tracing, create `AppState`
//! 2. **Subscribe**: Register for Key and `PermissionRequestResult` events
//! 3. **Update**: Map keys, delegate to library layer, execute actions
//! 4. **Render**: Call library render function
//!
//! # Keybindings
//!
//! While the reminder banner is shown, any key dismisses it.
//!
//! In normal mode:
//! - `a`: Add event
//! - `t`: Toggle dark/light mode
//! - `/`: Enter search mode
//! - `j`/`Down`/`Ctrl+n`: Move down
//! - `k`/`Up`/`Ctrl+p`: Move up
//! - `d`: Delete selected event
//! - `r`: Set reminder on selected event
//! - `q`: Hide plugin
//!
//! In search mode:
//! - Typing edits the query, `Enter` focuses the results
//! - On the results, `/` returns to the query; `j`/`k`/`d`/`r`/`t` act as in normal mode
//! - `Esc`: Exit search
//!
//! In the add-event overlay:
//! - Typing edits the focused field, `Backspace` deletes
//! - `Tab`/`Down`: Next field, `Shift+Tab`/`Up`: Previous field
//! - `Enter`: Add, `Esc`: Cancel

#![allow(clippy::multiple_crate_versions)]

// Zellij host imports only exist on wasm; native builds get an empty binary.
#[cfg(target_family = "wasm")]
use zellij_tile::prelude::*;

#[cfg(target_family = "wasm")]
register_plugin!(plugin::State);

#[cfg(not(target_family = "wasm"))]
fn main() {}

#[cfg(target_family = "wasm")]
mod plugin {
    use std::collections::BTreeMap;
    use zellij_tile::prelude::*;

    use zevents::{handle_event, Action, Config, InputMode, Notifier, SearchFocus, UiEvent};

    /// Plugin state wrapper around the library's `AppState`.
    pub struct State {
        app: zevents::AppState,
    }

    impl Default for State {
        fn default() -> Self {
            Self {
                app: zevents::initialize(&Config::default()),
            }
        }
    }

    impl ZellijPlugin for State {
        /// Parses configuration, builds the application state, requests
        /// permissions and subscribes to key events.
        fn load(&mut self, configuration: BTreeMap<String, String>) {
            let config = Config::from_zellij(&configuration);
            zevents::observability::init_tracing(&config);

            let span = tracing::debug_span!("plugin_load");
            let _guard = span.entered();

            tracing::debug!(config = ?config, "parsed configuration");
            self.app = zevents::initialize(&config);

            request_permission(&[PermissionType::ChangeApplicationState]);
            subscribe(&[EventType::Key, EventType::PermissionRequestResult]);

            tracing::debug!("plugin load complete");
        }

        /// Handles incoming Zellij events; returns `true` if the UI should
        /// re-render.
        fn update(&mut self, event: Event) -> bool {
            let event_name = Self::get_event_name(&event);
            let span = tracing::debug_span!("plugin_update_event", event_type = %event_name);
            let _guard = span.entered();

            let ui_event = match event {
                Event::Key(ref key) => match self.map_key_event(key) {
                    Some(ui_event) => ui_event,
                    None => return false,
                },
                Event::PermissionRequestResult(status) => {
                    Self::handle_permission_result(status);
                    return false;
                }
                _ => return false,
            };

            match handle_event(&mut self.app, &ui_event) {
                Ok((should_render, actions)) => {
                    tracing::debug!(
                        action_count = actions.len(),
                        should_render = should_render,
                        "event handled successfully"
                    );
                    let notified = !actions.is_empty();
                    for action in actions {
                        self.execute_action(action);
                    }
                    should_render || notified
                }
                Err(e) => {
                    tracing::debug!(error = %e, "error handling event");
                    false
                }
            }
        }

        fn render(&mut self, rows: usize, cols: usize) {
            zevents::ui::render(&self.app, rows, cols);
        }
    }

    impl State {
        fn get_event_name(event: &Event) -> String {
            match event {
                Event::Key(key) => format!("Key({:?})", key.bare_key),
                Event::PermissionRequestResult(..) => "PermissionRequestResult".to_string(),
                _ => "Other".to_string(),
            }
        }

        /// Maps keyboard events to application events for the current mode.
        fn map_key_event(&self, key: &KeyWithModifier) -> Option<UiEvent> {
            tracing::debug!(bare_key = ?key.bare_key, "key event");

            if self.app.banner.is_visible() {
                return Some(UiEvent::DismissNotice);
            }

            match self.app.input_mode {
                InputMode::Form => Self::map_form_key(key),
                InputMode::Search(SearchFocus::Typing) => Self::map_search_typing_key(key),
                InputMode::Search(SearchFocus::Navigating) | InputMode::Normal => {
                    self.map_list_key(key)
                }
            }
        }

        fn map_form_key(key: &KeyWithModifier) -> Option<UiEvent> {
            Some(match key.bare_key {
                BareKey::Tab if key.has_modifiers(&[KeyModifier::Shift]) => UiEvent::PrevField,
                BareKey::Tab | BareKey::Down => UiEvent::NextField,
                BareKey::Up => UiEvent::PrevField,
                BareKey::Enter => UiEvent::SubmitForm,
                BareKey::Esc => UiEvent::CancelForm,
                BareKey::Backspace => UiEvent::Backspace,
                BareKey::Char(c) if !key.has_modifiers(&[KeyModifier::Ctrl]) => UiEvent::Char(c),
                _ => return None,
            })
        }

        fn map_search_typing_key(key: &KeyWithModifier) -> Option<UiEvent> {
            if let Some(movement) = Self::map_ctrl_movement(key) {
                return Some(movement);
            }

            Some(match key.bare_key {
                BareKey::Down => UiEvent::KeyDown,
                BareKey::Up => UiEvent::KeyUp,
                BareKey::Enter => UiEvent::FocusResults,
                BareKey::Esc => UiEvent::ExitSearch,
                BareKey::Backspace => UiEvent::Backspace,
                BareKey::Char(c) => UiEvent::Char(c),
                _ => return None,
            })
        }

        /// Normal mode and search results share the list commands.
        fn map_list_key(&self, key: &KeyWithModifier) -> Option<UiEvent> {
            if let Some(movement) = Self::map_ctrl_movement(key) {
                return Some(movement);
            }

            let in_search = self.app.input_mode.is_search();
            Some(match key.bare_key {
                BareKey::Down | BareKey::Char('j') => UiEvent::KeyDown,
                BareKey::Up | BareKey::Char('k') => UiEvent::KeyUp,
                BareKey::Char('d') => UiEvent::DeleteSelected,
                BareKey::Char('r') => UiEvent::SetReminder,
                BareKey::Char('t') => UiEvent::ToggleDarkMode,
                BareKey::Char('/') if in_search => UiEvent::FocusSearchBar,
                BareKey::Char('/') => UiEvent::SearchMode,
                BareKey::Esc if in_search => UiEvent::ExitSearch,
                BareKey::Char('a') if !in_search => UiEvent::OpenForm,
                BareKey::Char('q') if !in_search => UiEvent::CloseFocus,
                _ => return None,
            })
        }

        fn map_ctrl_movement(key: &KeyWithModifier) -> Option<UiEvent> {
            if !key.has_modifiers(&[KeyModifier::Ctrl]) {
                return None;
            }
            match key.bare_key {
                BareKey::Char('n') => Some(UiEvent::KeyDown),
                BareKey::Char('p') => Some(UiEvent::KeyUp),
                _ => None,
            }
        }

        fn handle_permission_result(status: PermissionStatus) {
            match status {
                PermissionStatus::Granted => tracing::debug!("permissions granted"),
                PermissionStatus::Denied => {
                    tracing::warn!("permissions denied - the plugin cannot hide itself");
                }
            }
        }

        /// Executes an action returned from event handling.
        #[tracing::instrument(level = "debug", skip(self))]
        fn execute_action(&mut self, action: Action) {
            match action {
                Action::CloseFocus => {
                    tracing::debug!("closing plugin focus");
                    hide_self();
                }
                Action::Notify(notification) => {
                    self.app.banner.notify(notification);
                }
            }
        }
    }
}
