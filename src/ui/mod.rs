//! Terminal user interface layer.
//!
//! Turns application state into ANSI-styled output through small component
//! renderers.
//!
//! ```text
//! AppState → compute_viewmodel → UIViewModel → render → ANSI Output
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: View model types representing renderable UI state
//! - [`renderer`]: Top-level rendering coordinator
//! - [`components`]: Composable UI component renderers
//! - [`helpers`]: Shared rendering utilities (truncation, highlighting)
//! - [`theme`]: Light/dark color schemes and ANSI escape sequence generation

pub mod components;
pub mod helpers;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use renderer::render;
pub use theme::Theme;
pub use viewmodel::{
    BannerInfo, DisplayItem, EmptyState, FooterInfo, FormFieldView, FormOverlay, HeaderInfo,
    SearchBarInfo, UIViewModel,
};
