//! Use-Case: Neuen Zustand an einer Position anlegen.

use glam::Vec2;

use crate::app::AppState;

/// Klick auf leere Zeichenfläche: legt einen neuen Zustand mit leerem
/// Namen an und selektiert ihn (der Name wird anschließend getippt).
pub fn add_state_at_position(state: &mut AppState, position: Vec2) -> u64 {
    let id = state.automaton.create_state("", false, position);

    state.selection.selected_transition = None;
    state.selection.selecting_starting_arrow = false;
    state.selection.selected_state = Some(id);

    log::info!(
        "Zustand {} an Position ({:.1}, {:.1}) angelegt",
        id,
        position.x,
        position.y
    );
    log::debug!("{}", state.automaton);
    id
}
