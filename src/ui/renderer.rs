//! Top-level rendering coordinator.
//!
//! This module provides the main rendering entry point, coordinating view
//! model computation and delegation to the per-screen layout functions.
//!
//! # Architecture
//!
//! The renderer follows a two-step process:
//!
//! 1. **View Model Computation**: Transform `AppState` into `UIViewModel`
//! 2. **Component Rendering**: Delegate to the routed screen's layout

use std::io::Write;

use crate::app::AppState;
use crate::ui::components;
use crate::ui::helpers;
use crate::ui::viewmodel::ScreenView;

/// Renders the UI to stdout.
///
/// Clears the screen, computes the view model from application state, and
/// delegates to the layout for the routed screen. Output is flushed so the
/// frame appears even though stdout is in raw mode.
///
/// # Parameters
///
/// * `state` - Current application state
/// * `rows` - Terminal height in rows
/// * `cols` - Terminal width in columns
pub fn render(state: &AppState, rows: usize, cols: usize) {
    let vm = state.compute_viewmodel(rows, cols);

    helpers::clear_screen();
    match &vm.screen {
        ScreenView::Table(tbl) => {
            components::render_table_screen(&vm, tbl, &state.theme, cols, rows);
        }
        ScreenView::Detail(detail_view) => {
            components::render_detail_screen(&vm, detail_view, &state.theme, cols, rows);
        }
        ScreenView::Form(form_view) => {
            components::render_form_screen(&vm, form_view, &state.theme, cols, rows);
        }
    }

    let _ = std::io::stdout().flush();
}
