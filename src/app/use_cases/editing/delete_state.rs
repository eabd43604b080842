//! Use-Case: Zustand löschen inklusive Aufräumen der Session.

use crate::app::AppState;

/// Löscht einen Zustand. Der Automat kaskadiert auf alle ein- und
/// ausgehenden Übergänge; die Session räumt Startpfeil und Selektion
/// nach. No-op bei unbekannter ID.
pub fn delete_state(state: &mut AppState, id: u64) {
    if !state.automaton.states.contains_key(&id) {
        log::warn!("Löschen nicht möglich: Zustand {} existiert nicht", id);
        return;
    }

    // Zeigt der Startpfeil hierher, verschwindet er mit dem Zustand
    if state.automaton.starting_state() == Some(id) {
        state.selection.starting_arrow = None;
        state.selection.selecting_starting_arrow = false;
    }
    if state.selection.selected_state == Some(id) {
        state.selection.selected_state = None;
    }
    if let Some((from_id, to_id)) = state.selection.selected_transition {
        if from_id == id || to_id == id {
            state.selection.selected_transition = None;
        }
    }

    state.automaton.delete_state(id);
    log::info!("Zustand {} gelöscht", id);
    log::debug!("{}", state.automaton);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::StartingArrow;
    use glam::Vec2;

    #[test]
    fn deleting_the_starting_state_removes_the_arrow() {
        let mut state = AppState::new();
        let a = state.automaton.create_state("a", false, Vec2::ZERO);
        state.automaton.set_starting_state(Some(a));
        state.selection.starting_arrow = Some(StartingArrow {
            tail: Vec2::new(-50.0, 0.0),
            to_state: a,
        });
        state.selection.selecting_starting_arrow = true;

        delete_state(&mut state, a);

        assert_eq!(state.automaton.starting_state(), None);
        assert!(state.selection.starting_arrow.is_none());
        assert!(!state.selection.selecting_starting_arrow);
    }

    #[test]
    fn deleting_clears_a_selection_referencing_the_state() {
        let mut state = AppState::new();
        let a = state.automaton.create_state("a", false, Vec2::ZERO);
        let b = state.automaton.create_state("b", false, Vec2::new(10.0, 0.0));
        state.automaton.create_transition(a, b, Vec2::ZERO);
        state.selection.selected_transition = Some((a, b));

        delete_state(&mut state, b);

        assert_eq!(state.selection.selected_transition, None);
        assert_eq!(state.automaton.transition_count(), 0);
    }

    #[test]
    fn deleting_an_unknown_state_changes_nothing() {
        let mut state = AppState::new();
        let a = state.automaton.create_state("a", false, Vec2::ZERO);
        state.selection.selected_state = Some(a);

        delete_state(&mut state, 99);

        assert_eq!(state.automaton.state_count(), 1);
        assert_eq!(state.selection.selected_state, Some(a));
    }
}
