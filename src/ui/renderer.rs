//! Top-level rendering coordinator.
//!
//! Rendering is a two-step process:
//!
//! 1. **View Model Computation**: Transform `AppState` into `UIViewModel`
//! 2. **Component Rendering**: Delegate to specialized component renderers
//!
//! Layers are drawn bottom-up: background, list screen, then the add-event
//! overlay and the reminder banner on top.

use crate::app::AppState;
use crate::ui::components;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;

/// Renders the plugin UI to stdout.
///
/// # Parameters
///
/// * `state` - Current application state
/// * `rows` - Terminal height in rows
/// * `cols` - Terminal width in columns
///
/// # Example
///
/// ```rust
/// use zevents::ui::{render, Theme};
/// use zevents::AppState;
///
/// let state = AppState::new(Theme::builtin_light(), Theme::builtin_dark());
/// render(&state, 24, 80);
/// ```
pub fn render(state: &AppState, rows: usize, cols: usize) {
    let viewmodel = state.compute_viewmodel(rows, cols);

    render_viewmodel(&viewmodel, state.theme(), rows, cols);
}

/// Renders a pre-computed view model.
///
/// Search mode adds the search box between header and list; the overlay and
/// banner are drawn only when present.
///
/// # Parameters
///
/// * `vm` - Pre-computed view model
/// * `theme` - Active color theme
/// * `rows` - Terminal height in rows
/// * `cols` - Terminal width in columns
fn render_viewmodel(vm: &UIViewModel, theme: &Theme, rows: usize, cols: usize) {
    components::fill_background(theme, rows, cols);

    if let Some(search) = &vm.search_bar {
        components::render_search_mode(vm, search, theme, cols, rows);
    } else {
        components::render_normal_mode(vm, theme, cols, rows);
    }

    if let Some(form) = &vm.form {
        components::render_form_overlay(form, theme, rows, cols);
    }

    if let Some(banner) = &vm.banner {
        components::render_banner(banner, theme, rows, cols);
    }
}
