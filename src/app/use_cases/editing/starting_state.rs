//! Use-Case: Startzustand und Startpfeil verwalten.

use glam::Vec2;

use crate::app::use_cases::selection::pick;
use crate::app::AppState;

/// Entfernt Startzustand und Startpfeil.
pub fn clear_starting_state(state: &mut AppState) {
    state.automaton.set_starting_state(None);
    state.selection.starting_arrow = None;
    state.selection.selecting_starting_arrow = false;
    log::info!("Startzustand entfernt");
}

/// Klick während der Startpfeil selektiert ist: landet er im eigenen
/// Zielzustand, wird er gelöscht — der Nutzer hat ihn "hineingeschoben".
pub fn resolve_starting_arrow_click(state: &mut AppState, pointer: Vec2) {
    if !state.selection.selecting_starting_arrow {
        return;
    }
    let Some(arrow) = &state.selection.starting_arrow else {
        return;
    };
    let hit = pick::state_at(&state.automaton, pointer, state.options.state_radius);
    if hit == Some(arrow.to_state) {
        clear_starting_state(state);
    }
}
