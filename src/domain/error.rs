//! Error types for the zevents plugin.
//!
//! This module defines the centralized error type [`ZeventsError`] and a type alias
//! [`Result`] used throughout the plugin. Errors derive their `Error` impls from
//! the `thiserror` crate.
//!
//! Form validation failures are not represented here: they are expected user
//! input conditions and live next to the form in [`crate::app::form::FormError`].

use thiserror::Error;

/// The main error type for zevents plugin operations.
///
/// # Examples
///
/// ```
/// use zevents::ZeventsError;
///
/// fn check_reminder_time(value: &str) -> Result<(), ZeventsError> {
///     if value.trim().is_empty() {
///         return Err(ZeventsError::Config("reminder_time must not be empty".to_string()));
///     }
///     Ok(())
/// }
///
/// assert!(check_reminder_time("").is_err());
/// ```
#[derive(Debug, Error)]
pub enum ZeventsError {
    /// Filesystem or I/O operation failed.
    ///
    /// Wraps errors from standard library I/O operations (theme files, trace
    /// files). Converts from `std::io::Error` via `#[from]`.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Theme lookup or parsing failed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Configuration value is invalid.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// A specialized `Result` type for zevents operations.
pub type Result<T> = std::result::Result<T, ZeventsError>;
