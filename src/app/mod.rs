//! Application layer coordinating state, events, and actions.
//!
//! Sits between the plugin shim (`main.rs`) and the domain/UI layers.
//!
//! ```text
//! Key → UiEvent → handle_event → AppState mutation → Actions → Side Effects
//!                                      │
//!                                      └─► compute_viewmodel → render
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`form`]: Add-event form buffers and validation
//! - [`handler`]: Event processing and state transitions
//! - [`modes`]: Input mode state machine
//! - [`notify`]: Reminder notifications and the notifier seam
//! - [`search`]: Pure search filter over the event store
//! - [`state`]: Central state container and view model computation

pub mod actions;
pub mod form;
pub mod handler;
pub mod modes;
pub mod notify;
pub mod search;
pub mod state;

pub use actions::Action;
pub use form::{EventForm, FormError, FormField};
pub use handler::{handle_event, UiEvent};
pub use modes::{InputMode, SearchFocus};
pub use notify::{Banner, Notification, Notifier};
pub use state::AppState;
