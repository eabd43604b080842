//! Use-Case: Drag-Gesten — Zustände, Kontrollpunkte und Startpfeil.

use glam::Vec2;

use crate::app::AppState;

/// Wendet eine Zeigerbewegung auf das gerade gezogene Element an.
///
/// `pointer` ist die absolute Zeigerposition (Kontrollpunkt und
/// Pfeilschwanz folgen ihr direkt), `delta` die Bewegung seit dem
/// letzten Event (Zustände bewegen sich relativ).
pub fn drag_pointer(state: &mut AppState, pointer: Vec2, delta: Vec2) {
    if !state.selection.dragging {
        return;
    }

    if let Some(id) = state.selection.selected_state {
        move_state(state, id, delta);
    }
    if let Some((from_id, to_id)) = state.selection.selected_transition {
        if let Some(transition) = state.automaton.transition_mut(from_id, to_id) {
            transition.control = pointer;
        }
    }
    if state.selection.selecting_starting_arrow {
        if let Some(arrow) = &mut state.selection.starting_arrow {
            arrow.tail = pointer;
        }
    }
}

/// Beendet die laufende Drag-Geste (Maustaste losgelassen).
pub fn end_drag(state: &mut AppState) {
    state.selection.dragging = false;
}

/// Zeiger hat die Zeichenfläche verlassen: Selektion und Drag beenden.
pub fn pointer_left(state: &mut AppState) {
    state.selection.clear();
}

/// Verschiebt einen Zustand um `delta`.
///
/// Kontrollpunkte aller ein- und ausgehenden Übergänge orbitieren um
/// den jeweils festen Endpunkt: radiale Skalierung und Winkeländerung
/// der Zustandsbewegung werden auf den Kontrollpunkt übertragen, damit
/// die Bogenform relativ zu beiden Zuständen erhalten bleibt. Der
/// Startpfeil-Schwanz wandert mit seinem Zustand. No-op bei
/// unbekannter ID.
pub fn move_state(state: &mut AppState, id: u64, delta: Vec2) {
    if delta == Vec2::ZERO {
        return;
    }
    let Some(node) = state.automaton.states.get_mut(&id) else {
        log::warn!("Drag auf unbekannten Zustand {}", id);
        return;
    };
    let old_pos = node.position;
    let new_pos = old_pos + delta;
    node.position = new_pos;

    if state.automaton.starting_state() == Some(id) {
        if let Some(arrow) = &mut state.selection.starting_arrow {
            arrow.tail += delta;
        }
    }

    // Pivots zuerst einsammeln, um Borrow-Konflikt zu vermeiden.
    // Self-Loops bleiben unberührt: ihre Geometrie wird ohnehin ersetzt.
    let updates: Vec<((u64, u64), Vec2, Vec2)> = state
        .automaton
        .transitions_iter()
        .filter(|t| (t.from_id == id) != (t.to_id == id))
        .filter_map(|t| {
            let pivot_id = if t.from_id == id { t.to_id } else { t.from_id };
            let pivot = state.automaton.states.get(&pivot_id)?.position;
            Some(((t.from_id, t.to_id), pivot, t.control))
        })
        .collect();

    for (key, pivot, control) in updates {
        let next = orbit_control(pivot, old_pos, new_pos, control);
        if let Some(transition) = state.automaton.transition_mut(key.0, key.1) {
            transition.control = next;
        }
    }
}

/// Überträgt die Polarbewegung `old_pos → new_pos` (um `pivot`) auf
/// den Kontrollpunkt: gleiche Winkeländerung, gleiche radiale
/// Skalierung. Stand der Zustand vorher auf dem Pivot, ist keine
/// Skalierung definiert — der Kontrollpunkt wird dann nur verschoben.
fn orbit_control(pivot: Vec2, old_pos: Vec2, new_pos: Vec2, control: Vec2) -> Vec2 {
    let old_dist = pivot.distance(old_pos);
    if old_dist <= f32::EPSILON {
        return control + (new_pos - old_pos);
    }
    let scale = pivot.distance(new_pos) / old_dist;
    let d_angle = (new_pos.y - pivot.y).atan2(new_pos.x - pivot.x)
        - (old_pos.y - pivot.y).atan2(old_pos.x - pivot.x);

    let radius = scale * pivot.distance(control);
    let angle = d_angle + (control.y - pivot.y).atan2(control.x - pivot.x);
    pivot + Vec2::new(angle.cos(), angle.sin()) * radius
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::StartingArrow;
    use approx::assert_relative_eq;

    #[test]
    fn orbit_control_follows_a_pure_rotation() {
        let pivot = Vec2::ZERO;
        // Zustand rotiert um 90° gegen den Uhrzeigersinn (Radius 10)
        let old_pos = Vec2::new(10.0, 0.0);
        let new_pos = Vec2::new(0.0, 10.0);
        // Kontrollpunkt auf halber Strecke
        let control = Vec2::new(5.0, 0.0);

        let next = orbit_control(pivot, old_pos, new_pos, control);
        assert_relative_eq!(next.x, 0.0, epsilon = 1e-4);
        assert_relative_eq!(next.y, 5.0, epsilon = 1e-4);
    }

    #[test]
    fn orbit_control_follows_a_radial_scaling() {
        let pivot = Vec2::ZERO;
        let old_pos = Vec2::new(10.0, 0.0);
        let new_pos = Vec2::new(20.0, 0.0);
        let control = Vec2::new(5.0, 0.0);

        let next = orbit_control(pivot, old_pos, new_pos, control);
        assert_relative_eq!(next.x, 10.0, epsilon = 1e-4);
        assert_relative_eq!(next.y, 0.0, epsilon = 1e-4);
    }

    #[test]
    fn orbit_control_degenerate_pivot_translates() {
        let pivot = Vec2::new(3.0, 3.0);
        let next = orbit_control(pivot, pivot, Vec2::new(5.0, 3.0), Vec2::new(4.0, 4.0));
        assert_relative_eq!(next.x, 6.0, epsilon = 1e-4);
        assert_relative_eq!(next.y, 4.0, epsilon = 1e-4);
    }

    #[test]
    fn moving_a_state_updates_incident_control_points() {
        let mut state = AppState::new();
        let a = state.automaton.create_state("a", false, Vec2::new(0.0, 0.0));
        let b = state.automaton.create_state("b", false, Vec2::new(10.0, 0.0));
        state.automaton.create_transition(a, b, Vec2::new(5.0, 0.0));

        // b um 90° um a nach oben ziehen
        state.selection.selected_state = Some(b);
        state.selection.dragging = true;
        drag_pointer(&mut state, Vec2::new(0.0, 10.0), Vec2::new(-10.0, 10.0));

        let control = state
            .automaton
            .transition(a, b)
            .expect("Übergang erwartet")
            .control;
        assert_relative_eq!(control.x, 0.0, epsilon = 1e-3);
        assert_relative_eq!(control.y, 5.0, epsilon = 1e-3);
    }

    #[test]
    fn moving_a_state_leaves_self_loop_controls_untouched() {
        let mut state = AppState::new();
        let a = state.automaton.create_state("a", false, Vec2::new(0.0, 0.0));
        state.automaton.create_transition(a, a, Vec2::new(0.0, 0.0));

        move_state(&mut state, a, Vec2::new(7.0, 3.0));

        let transition = state.automaton.transition(a, a).expect("Loop erwartet");
        assert_eq!(transition.control, Vec2::new(0.0, 0.0));
        assert_eq!(
            state.automaton.states[&a].position,
            Vec2::new(7.0, 3.0)
        );
    }

    #[test]
    fn starting_arrow_tail_follows_its_state() {
        let mut state = AppState::new();
        let a = state.automaton.create_state("a", false, Vec2::new(100.0, 100.0));
        state.automaton.set_starting_state(Some(a));
        state.selection.starting_arrow = Some(StartingArrow {
            tail: Vec2::new(20.0, 100.0),
            to_state: a,
        });

        move_state(&mut state, a, Vec2::new(0.0, 50.0));

        let arrow = state.selection.starting_arrow.expect("Startpfeil erwartet");
        assert_eq!(arrow.tail, Vec2::new(20.0, 150.0));
    }

    #[test]
    fn dragging_a_transition_moves_its_control_to_the_pointer() {
        let mut state = AppState::new();
        let a = state.automaton.create_state("a", false, Vec2::new(0.0, 0.0));
        let b = state.automaton.create_state("b", false, Vec2::new(100.0, 0.0));
        state.automaton.create_transition(a, b, Vec2::new(50.0, 0.0));

        state.selection.selected_transition = Some((a, b));
        state.selection.dragging = true;
        drag_pointer(&mut state, Vec2::new(42.0, -30.0), Vec2::new(1.0, 1.0));

        let control = state
            .automaton
            .transition(a, b)
            .expect("Übergang erwartet")
            .control;
        assert_eq!(control, Vec2::new(42.0, -30.0));
    }

    #[test]
    fn drag_without_active_flag_is_a_noop() {
        let mut state = AppState::new();
        let a = state.automaton.create_state("a", false, Vec2::new(0.0, 0.0));
        state.selection.selected_state = Some(a);
        drag_pointer(&mut state, Vec2::new(10.0, 10.0), Vec2::new(10.0, 10.0));
        assert_eq!(state.automaton.states[&a].position, Vec2::new(0.0, 0.0));
    }
}
