//! Domain layer for the zevents plugin.
//!
//! Core domain types independent of Zellij APIs and rendering concerns.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`event`]: Calendar event model
//! - [`store`]: In-memory ordered event store

pub mod error;
pub mod event;
pub mod store;

pub use error::{Result, ZeventsError};
pub use event::{Event, EventDraft, EventId};
pub use store::EventStore;
