//! Use-Case: Hit-Testing und Selektion per Klick.

use glam::Vec2;

use crate::app::state::SelectionState;
use crate::app::AppState;
use crate::core::Automaton;
use crate::shared::arc_geometry::{point_to_arc_distance, point_to_segment_distance, self_loop_geometry};

/// Liefert den Zustand unter dem Punkt, oder `None`.
///
/// Linearer Scan in Einfügereihenfolge; bei überlappenden Kreisen
/// gewinnt der zuerst angelegte Zustand. Das ist dokumentierte Policy,
/// kein Zufall — die `IndexMap` macht die Reihenfolge deterministisch.
pub fn state_at(automaton: &Automaton, point: Vec2, state_radius: f32) -> Option<u64> {
    automaton
        .states
        .values()
        .find(|state| state.position.distance(point) < state_radius)
        .map(|state| state.id)
}

/// Liefert den Übergang unter dem Punkt, oder `None`.
///
/// Pro Übergang wird erst die Self-Loop-Ersetzung angewandt, dann die
/// Bogen-Distanz gegen die Hit-Schwelle getestet. Erster Treffer in
/// Einfügereihenfolge gewinnt.
pub fn transition_at(
    automaton: &Automaton,
    point: Vec2,
    state_radius: f32,
    hit_threshold: f32,
) -> Option<(u64, u64)> {
    for transition in automaton.transitions_iter() {
        let Some(from) = automaton.states.get(&transition.from_id) else {
            continue;
        };
        let Some(to) = automaton.states.get(&transition.to_id) else {
            continue;
        };

        let (control, to_pos) = if transition.is_self_loop() {
            self_loop_geometry(from.position, state_radius)
        } else {
            (transition.control, to.position)
        };

        if point_to_arc_distance(point, from.position, control, to_pos) <= hit_threshold {
            return Some((transition.from_id, transition.to_id));
        }
    }
    None
}

/// Liegt der Punkt auf dem Startpfeil?
///
/// Segmentdistanz vom freien Pfeilende zum Zentrum des Startzustands.
/// Das Zentrum statt des Kreisrands ist unschädlich: Zustands-Hits
/// werden vorher abgefragt und gewinnen.
pub fn starting_marker_at(
    automaton: &Automaton,
    selection: &SelectionState,
    point: Vec2,
    hit_threshold: f32,
) -> bool {
    let Some(arrow) = &selection.starting_arrow else {
        return false;
    };
    let Some(target) = automaton.states.get(&arrow.to_state) else {
        return false;
    };
    point_to_segment_distance(point, arrow.tail, target.position) <= hit_threshold
}

/// Mousedown ohne Shift: Element unter dem Zeiger selektieren und den
/// Drag starten. Priorität: Zustand vor Übergang vor Startpfeil.
/// Trifft der Klick nichts, bleibt die Selektion unverändert — das
/// Klick-Handling entscheidet dann über das Anlegen eines Zustands.
pub fn select_at(state: &mut AppState, pointer: Vec2) {
    let radius = state.options.state_radius;
    let threshold = state.options.arrow_hit_threshold;

    if let Some(id) = state_at(&state.automaton, pointer, radius) {
        state.selection.selected_state = Some(id);
        state.selection.selected_transition = None;
        state.selection.selecting_starting_arrow = false;
        state.selection.dragging = true;
    } else if let Some(key) = transition_at(&state.automaton, pointer, radius, threshold) {
        state.selection.selected_transition = Some(key);
        state.selection.selected_state = None;
        state.selection.selecting_starting_arrow = false;
        state.selection.dragging = true;
    } else if starting_marker_at(&state.automaton, &state.selection, pointer, threshold) {
        state.selection.selecting_starting_arrow = true;
        state.selection.selected_state = None;
        state.selection.selected_transition = None;
        state.selection.dragging = true;
    }
}
