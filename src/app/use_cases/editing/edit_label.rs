//! Use-Case: Tastatureingabe für das selektierte Element.
//!
//! Druckbare Zeichen landen im Namen des selektierten Zustands bzw.
//! in der Zeichenmenge des selektierten Übergangs. Backspace löscht
//! rückwärts — und entfernt das Element selbst, wenn nichts mehr zu
//! löschen ist. Zeichenmengen-Änderungen invalidieren die laufende
//! Auswertung.

use crate::app::use_cases::editing::{delete_state, starting_state};
use crate::app::use_cases::run;
use crate::app::AppState;
use crate::core::is_input_char;

/// Ein druckbares Zeichen wurde getippt.
pub fn input_char(state: &mut AppState, c: char) {
    if !is_input_char(c) {
        return;
    }

    if let Some(id) = state.selection.selected_state {
        if let Some(selected) = state.automaton.states.get_mut(&id) {
            selected.name.push(c);
        }
    } else if let Some((from_id, to_id)) = state.selection.selected_transition {
        if state.automaton.push_transition_char(from_id, to_id, c) {
            // Zeichenmenge geändert → Auswertung neu berechnen
            run::reset_evaluation(state);
        }
    }
}

/// Backspace/Entf wurde getippt.
///
/// Zustand mit leerem Namen bzw. Übergang ohne Zeichen wird gelöscht;
/// ein selektierter Startpfeil verschwindet samt Startzustand.
pub fn input_backspace(state: &mut AppState) {
    if let Some(id) = state.selection.selected_state {
        let name_empty = state
            .automaton
            .states
            .get(&id)
            .is_some_and(|s| s.name.is_empty());
        if name_empty {
            state.selection.selected_state = None;
            delete_state::delete_state(state, id);
        } else if let Some(selected) = state.automaton.states.get_mut(&id) {
            selected.name.pop();
        }
    } else if let Some((from_id, to_id)) = state.selection.selected_transition {
        let chars_empty = state
            .automaton
            .transition(from_id, to_id)
            .is_some_and(|t| t.is_incomplete());
        if chars_empty {
            state.selection.selected_transition = None;
            state.automaton.delete_transition(from_id, to_id);
            log::info!("Übergang {}→{} gelöscht", from_id, to_id);
        } else {
            if let Some(c) = state.automaton.pop_transition_char(from_id, to_id) {
                log::debug!("Zeichen '{}' von Übergang {}→{} entfernt", c, from_id, to_id);
            }
            run::reset_evaluation(state);
        }
    } else if state.selection.selecting_starting_arrow {
        starting_state::clear_starting_state(state);
    }
}

/// Escape: Selektion aufheben (Drag läuft ggf. weiter bis zum Loslassen).
pub fn input_escape(state: &mut AppState) {
    state.selection.selected_state = None;
    state.selection.selected_transition = None;
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    fn editor_with_transition() -> (AppState, u64, u64) {
        let mut state = AppState::new();
        let a = state.automaton.create_state("a", false, Vec2::ZERO);
        let b = state.automaton.create_state("b", false, Vec2::new(100.0, 0.0));
        state.automaton.create_transition(a, b, Vec2::new(50.0, 0.0));
        (state, a, b)
    }

    #[test]
    fn typing_appends_to_the_selected_state_name() {
        let (mut state, a, _) = editor_with_transition();
        state.selection.selected_state = Some(a);
        input_char(&mut state, 'q');
        input_char(&mut state, '0');
        assert_eq!(state.automaton.states[&a].name, "aq0");
    }

    #[test]
    fn typing_appends_to_the_selected_transition_once() {
        let (mut state, a, b) = editor_with_transition();
        state.selection.selected_transition = Some((a, b));
        input_char(&mut state, 'x');
        input_char(&mut state, 'x');
        let transition = state.automaton.transition(a, b).expect("Übergang erwartet");
        assert_eq!(transition.chars(), &['x']);
    }

    #[test]
    fn non_printable_input_is_ignored() {
        let (mut state, a, _) = editor_with_transition();
        state.selection.selected_state = Some(a);
        input_char(&mut state, '\u{8}');
        input_char(&mut state, 'ß');
        assert_eq!(state.automaton.states[&a].name, "a");
    }

    #[test]
    fn transition_edits_reset_the_evaluation() {
        let (mut state, a, b) = editor_with_transition();
        state.automaton.set_starting_state(Some(a));
        state.selection.selected_transition = Some((a, b));
        state.run.input = "x".to_string();

        input_char(&mut state, 'x');

        let results = state.run.results.as_ref().expect("Auswertung erwartet");
        assert_eq!(results.states, vec![Some(a), Some(b)]);
    }

    #[test]
    fn backspace_shortens_the_name_then_deletes_the_state() {
        let (mut state, a, _) = editor_with_transition();
        state.selection.selected_state = Some(a);

        input_backspace(&mut state); // "a" → ""
        assert_eq!(state.automaton.states[&a].name, "");
        assert_eq!(state.automaton.state_count(), 2);

        input_backspace(&mut state); // leerer Name → Zustand löschen
        assert!(!state.automaton.states.contains_key(&a));
        assert_eq!(state.selection.selected_state, None);
        // Kaskade: der Übergang a→b hängt am gelöschten Zustand
        assert_eq!(state.automaton.transition_count(), 0);
    }

    #[test]
    fn backspace_pops_chars_then_deletes_the_transition() {
        let (mut state, a, b) = editor_with_transition();
        state.automaton.update_transition(a, b, ['x', 'y']);
        state.selection.selected_transition = Some((a, b));

        input_backspace(&mut state);
        let transition = state.automaton.transition(a, b).expect("Übergang erwartet");
        assert_eq!(transition.chars(), &['x']);

        input_backspace(&mut state);
        input_backspace(&mut state); // Zeichenmenge leer → Übergang löschen
        assert!(!state.automaton.has_transition(a, b));
        assert_eq!(state.selection.selected_transition, None);
    }

    #[test]
    fn backspace_on_the_selected_starting_arrow_clears_it() {
        let (mut state, a, _) = editor_with_transition();
        state.automaton.set_starting_state(Some(a));
        state.selection.starting_arrow = Some(crate::app::state::StartingArrow {
            tail: Vec2::new(-50.0, 0.0),
            to_state: a,
        });
        state.selection.selecting_starting_arrow = true;

        input_backspace(&mut state);

        assert_eq!(state.automaton.starting_state(), None);
        assert!(state.selection.starting_arrow.is_none());
    }

    #[test]
    fn escape_unselects_everything_editable() {
        let (mut state, a, b) = editor_with_transition();
        state.selection.selected_state = Some(a);
        state.selection.selected_transition = Some((a, b));
        input_escape(&mut state);
        assert_eq!(state.selection.selected_state, None);
        assert_eq!(state.selection.selected_transition, None);
    }
}
