//! Zevents: a Zellij plugin for managing calendar events.
//!
//! Zevents keeps a list of events in memory and provides:
//! - An add-event overlay with validated name, date, time, category and guest
//! - Case-insensitive search over event names with match highlighting
//! - Deletion of the selected event, stable under an active search
//! - A reminder acknowledgment banner for the selected event
//! - A dark/light theme toggle
//!
//! Nothing is persisted. Closing the plugin pane discards every event.

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event handling, form validation, search          │
//! │  - Action dispatching, notifications                │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                                   │
//! ┌───────────────┐                 ┌───────────────────┐
//! │ UI Layer      │                 │ Domain Layer      │
//! │ (ui/)         │                 │ (domain/)         │
//! │ - Rendering   │                 │ - Event model     │
//! │ - Theming     │                 │ - Event store     │
//! │ - Components  │                 │ - Error types     │
//! └───────────────┘                 └───────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │  ← Optional
//! │  - OpenTelemetry tracing to a local span file       │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Configuration
//!
//! ```kdl
//! pane {
//!     plugin location="file:/path/to/zevents.wasm" {
//!         dark_mode "false"
//!         light_theme "catppuccin-latte"
//!         dark_theme "catppuccin-mocha"
//!         reminder_time "10:00 AM"
//!         trace_level "info"
//!     }
//! }
//! ```
//!
//! # Examples
//!
//! ```rust
//! use zevents::{handle_event, initialize, Config, UiEvent};
//!
//! let mut state = initialize(&Config::default());
//!
//! for event in [UiEvent::OpenForm, UiEvent::Char('x'), UiEvent::SubmitForm] {
//!     let (_should_render, _actions) = handle_event(&mut state, &event)?;
//! }
//!
//! // Date and time are still missing: the overlay stays open.
//! assert!(state.is_form_open());
//! assert!(state.store.is_empty());
//! # Ok::<(), zevents::ZeventsError>(())
//! ```

pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod observability;
pub mod ui;

pub use app::{
    handle_event, Action, AppState, Banner, InputMode, Notification, Notifier, SearchFocus, UiEvent,
};
pub use domain::{Event, EventDraft, EventId, EventStore, Result, ZeventsError};
pub use ui::Theme;

use app::state::DEFAULT_REMINDER_TIME;
use std::collections::BTreeMap;
use ui::theme::{DEFAULT_DARK_THEME, DEFAULT_LIGHT_THEME};

/// Plugin configuration parsed from Zellij's configuration system.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Start in dark mode. Default: `false`
    pub dark_mode: bool,

    /// Built-in theme for light mode. Default: `catppuccin-latte`
    pub light_theme: Option<String>,

    /// Built-in theme for dark mode. Default: `catppuccin-mocha`
    pub dark_theme: Option<String>,

    /// Path to a custom TOML theme used in dark mode.
    ///
    /// Takes precedence over `dark_theme`. `~` maps to the `/host` mount.
    pub theme_file: Option<String>,

    /// Time string attached to reminders. Default: `10:00 AM`
    pub reminder_time: String,

    /// Tracing filter directive (`trace`, `debug`, `info`, ...). Default: `info`
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dark_mode: false,
            light_theme: None,
            dark_theme: None,
            theme_file: None,
            reminder_time: DEFAULT_REMINDER_TIME.to_string(),
            trace_level: None,
        }
    }
}

impl Config {
    /// Parses configuration from Zellij's configuration map.
    ///
    /// Unknown keys are ignored. Invalid values fall back to their defaults
    /// and are logged at debug level.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use zevents::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("dark_mode".to_string(), "true".to_string());
    /// map.insert("reminder_time".to_string(), "8:30 AM".to_string());
    ///
    /// let config = Config::from_zellij(&map);
    /// assert!(config.dark_mode);
    /// assert_eq!(config.reminder_time, "8:30 AM");
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let dark_mode = config.get("dark_mode").map_or(false, |value| {
            parse_bool("dark_mode", value).unwrap_or_else(|e| {
                tracing::debug!(error = %e, "invalid dark_mode, using light mode");
                false
            })
        });

        let reminder_time = config
            .get("reminder_time")
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .map_or_else(|| DEFAULT_REMINDER_TIME.to_string(), String::from);

        Self {
            dark_mode,
            light_theme: config.get("light_theme").cloned(),
            dark_theme: config.get("dark_theme").cloned(),
            theme_file: config.get("theme_file").cloned(),
            reminder_time,
            trace_level: config.get("trace_level").cloned(),
        }
    }
}

fn parse_bool(key: &str, value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Ok(true),
        "false" | "no" | "off" | "0" => Ok(false),
        other => Err(ZeventsError::Config(format!(
            "{key} expects true or false, got {other:?}"
        ))),
    }
}

fn named_theme(name: &str) -> Result<Theme> {
    Theme::from_name(name).ok_or_else(|| ZeventsError::Theme(format!("unknown theme {name:?}")))
}

fn light_theme(config: &Config) -> Theme {
    let name = config.light_theme.as_deref().unwrap_or(DEFAULT_LIGHT_THEME);
    named_theme(name).unwrap_or_else(|e| {
        tracing::debug!(error = %e, "failed to load light theme, using default");
        Theme::builtin_light()
    })
}

fn dark_theme(config: &Config) -> Theme {
    if let Some(theme_file) = &config.theme_file {
        let path = infrastructure::expand_tilde(theme_file);
        match Theme::from_file(&path) {
            Ok(theme) => return theme,
            Err(e) => {
                tracing::debug!(theme_file = %path, error = %e, "failed to load theme from file");
            }
        }
    }

    let name = config.dark_theme.as_deref().unwrap_or(DEFAULT_DARK_THEME);
    named_theme(name).unwrap_or_else(|e| {
        tracing::debug!(error = %e, "failed to load dark theme, using default");
        Theme::builtin_dark()
    })
}

/// Builds the initial application state from configuration.
///
/// The store starts empty and the overlay closed. Theme load failures fall
/// back to the built-in themes.
///
/// # Example
///
/// ```rust
/// use zevents::{initialize, Config};
///
/// let config = Config {
///     dark_mode: true,
///     ..Default::default()
/// };
///
/// let state = initialize(&config);
/// assert!(state.dark_mode);
/// assert!(state.theme().dark);
/// ```
#[must_use]
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!("initializing zevents plugin");

    let mut state = AppState::new(light_theme(config), dark_theme(config));
    state.dark_mode = config.dark_mode;
    state.reminder_time.clone_from(&config.reminder_time);
    state
}
