//! Use-Case: Verbinden-Geste über den schwebenden Pfeil.
//!
//! Shift-Klick startet einen Pfeil, der am Zeiger hängt. Beim
//! Loslassen entscheidet die Position: endet er über einem Zustand,
//! entsteht ein Übergang (bzw. der Startpfeil, wenn die Geste auf
//! leerer Fläche begann); sonst verfällt die Geste.

use glam::Vec2;

use crate::app::state::{FloatingArrow, StartingArrow};
use crate::app::use_cases::selection::pick;
use crate::app::AppState;

/// Startet die Verbinden-Geste am Zeiger. Beginnt sie über einem
/// Zustand, rastet die Pfeilbasis auf dessen Zentrum ein.
pub fn begin_floating_arrow(state: &mut AppState, pointer: Vec2) {
    let from = pick::state_at(&state.automaton, pointer, state.options.state_radius)
        .and_then(|id| state.automaton.states.get(&id))
        .map(|s| s.position)
        .unwrap_or(pointer);

    state.selection.floating_arrow = Some(FloatingArrow { from, to: pointer });
    state.selection.selected_state = None;
    state.selection.selected_transition = None;
    state.selection.selecting_starting_arrow = false;
}

/// Zieht das freie Ende des schwebenden Pfeils zum Zeiger.
pub fn drag_floating_arrow(state: &mut AppState, pointer: Vec2) {
    if let Some(arrow) = &mut state.selection.floating_arrow {
        arrow.to = pointer;
    }
}

/// Löst die Verbinden-Geste beim Loslassen auf.
///
/// Zustand → Zustand: Übergang anlegen (Kontrollpunkt mittig zwischen
/// den Zentren, idempotent) und selektieren. Leere Fläche → Zustand:
/// Startzustand setzen und den Startpfeil an der Gestenbasis
/// verankern. Alles andere: Geste verfällt.
pub fn release_floating_arrow(state: &mut AppState) {
    let Some(arrow) = state.selection.floating_arrow.take() else {
        return;
    };

    let radius = state.options.state_radius;
    let from_state = pick::state_at(&state.automaton, arrow.from, radius);
    let to_state = pick::state_at(&state.automaton, arrow.to, radius);

    let Some(to_id) = to_state else {
        log::debug!("Verbinden-Geste ohne Ziel verworfen");
        return;
    };

    if let Some(from_id) = from_state {
        let from_pos = state.automaton.states[&from_id].position;
        let to_pos = state.automaton.states[&to_id].position;
        state
            .automaton
            .create_transition(from_id, to_id, (from_pos + to_pos) * 0.5);
        state.selection.selected_transition = Some((from_id, to_id));
        log::info!("Übergang {}→{} angelegt", from_id, to_id);
    } else {
        state.automaton.set_starting_state(Some(to_id));
        state.selection.starting_arrow = Some(StartingArrow {
            tail: arrow.from,
            to_state: to_id,
        });
        state.selection.selecting_starting_arrow = true;
        log::info!("Startzustand auf {} gesetzt", to_id);
    }
    log::debug!("{}", state.automaton);
}
