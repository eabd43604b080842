//! Builder für Render-Szenen aus dem AppState.
//!
//! Hier fällt die komplette Darstellungsentscheidung: Pfade der
//! Pfeile (inklusive Self-Loop-Ersetzung), Label-Anker und die
//! Hervorhebung aus Selektion und laufender Auswertung. Das Frontend
//! zeichnet die Szene nur noch.

use crate::app::use_cases::selection::pick;
use crate::app::AppState;
use crate::shared::arc_geometry::{forward, self_loop_geometry};
use crate::shared::render_scene::{
    label_anchor, ArrowPath, FloatingArrowVisual, Highlight, RenderScene, StartingArrowVisual,
    StateVisual, TransitionVisual,
};

/// Baut eine RenderScene aus dem aktuellen AppState.
pub fn build(state: &AppState) -> RenderScene {
    let radius = state.options.state_radius;

    let states = state
        .automaton
        .states
        .values()
        .map(|s| {
            // Aktiver Lauf-Zustand gewinnt über die Selektion
            let highlight = if state.run.active_state() == Some(s.id) {
                Highlight::Active {
                    accepting: s.accepting,
                }
            } else if state.selection.selected_state == Some(s.id) {
                Highlight::Selected
            } else {
                Highlight::Default
            };
            StateVisual {
                id: s.id,
                position: s.position,
                name: s.name.clone(),
                accepting: s.accepting,
                highlight,
                editing: state.selection.selected_state == Some(s.id),
            }
        })
        .collect();

    let transitions = state
        .automaton
        .transitions_iter()
        .filter_map(|t| {
            let from = state.automaton.states.get(&t.from_id)?;
            let to = state.automaton.states.get(&t.to_id)?;

            let (control, to_pos) = if t.is_self_loop() {
                self_loop_geometry(from.position, radius)
            } else {
                (t.control, to.position)
            };

            let (path, head) = ArrowPath::between(from.position, control, to_pos, radius);
            let selected = state.selection.selected_transition == Some((t.from_id, t.to_id));

            let highlight = if transition_is_active(state, t.from_id, t.to_id) {
                Highlight::Active {
                    accepting: to.accepting,
                }
            } else if selected {
                Highlight::Selected
            } else {
                Highlight::Default
            };

            // Leere Zeichenmenge: "?" als Fehlermarker, außer während
            // sie gerade getippt wird
            let missing = t.is_incomplete() && !selected;
            let label = if missing { "?".to_string() } else { t.label() };

            Some(TransitionVisual {
                from_id: t.from_id,
                to_id: t.to_id,
                path,
                head,
                label,
                label_missing: missing,
                label_anchor: label_anchor(from.position, control, to_pos),
                highlight,
                editing: selected,
            })
        })
        .collect();

    RenderScene {
        states,
        transitions,
        starting_arrow: build_starting_arrow(state, radius),
        floating_arrow: build_floating_arrow(state, radius),
        options: state.options.clone(),
    }
}

/// Liegt der Übergang unter dem Lauf-Cursor (Schritt `index → index+1`)?
fn transition_is_active(state: &AppState, from_id: u64, to_id: u64) -> bool {
    if state.run.index < 0 {
        return false;
    }
    let Some(results) = &state.run.results else {
        return false;
    };
    let step_from = results.states.get(state.run.index as usize).copied();
    let step_to = results.states.get((state.run.index + 1) as usize).copied();
    step_from == Some(Some(from_id)) && step_to == Some(Some(to_id))
}

fn build_starting_arrow(state: &AppState, radius: f32) -> Option<StartingArrowVisual> {
    let arrow = state.selection.starting_arrow.as_ref()?;
    let target = state.automaton.states.get(&arrow.to_state)?;

    let angle = (target.position.y - arrow.tail.y).atan2(target.position.x - arrow.tail.x);
    // Pfad-Berechnung kürzt beide Enden um den Radius — den Schwanz
    // vorher zurückversetzen, damit er optisch am freien Ende bleibt
    let from = forward(arrow.tail, angle, -radius);
    let (path, head) = ArrowPath::between(from, target.position, target.position, radius);

    let highlight = if state.run.index == crate::app::RunState::AT_START && state.run.results.is_some()
    {
        Highlight::Active {
            accepting: target.accepting,
        }
    } else if state.selection.selecting_starting_arrow {
        Highlight::Selected
    } else {
        Highlight::Default
    };

    Some(StartingArrowVisual {
        path,
        head,
        highlight,
    })
}

fn build_floating_arrow(state: &AppState, radius: f32) -> Option<FloatingArrowVisual> {
    let arrow = state.selection.floating_arrow.as_ref()?;

    let from_state = pick::state_at(&state.automaton, arrow.from, radius);
    let to_state = pick::state_at(&state.automaton, arrow.to, radius);

    let mut from = arrow.from;
    let mut to = arrow.to;

    // Pfeilende auf den Zielzustand einrasten
    if let Some(id) = to_state {
        if let Some(target) = state.automaton.states.get(&id) {
            to = target.position;
        }
    }

    let angle = (to.y - from.y).atan2(to.x - from.x);
    // Freie Enden gegen die Radiuskürzung der Pfad-Berechnung versetzen
    if from_state.is_none() {
        from = forward(from, angle, -radius);
    }
    if to_state.is_none() {
        to = forward(to, angle, radius);
    }

    let (path, head) = ArrowPath::between(from, to, to, radius);
    Some(FloatingArrowVisual { path, head })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::{FloatingArrow, StartingArrow};
    use crate::app::use_cases::run;
    use approx::assert_relative_eq;
    use glam::Vec2;

    fn editor_with_run() -> (AppState, u64, u64) {
        let mut state = AppState::new();
        let a = state.automaton.create_state("q0", false, Vec2::new(100.0, 100.0));
        let b = state.automaton.create_state("q1", true, Vec2::new(300.0, 100.0));
        state.automaton.set_starting_state(Some(a));
        state.automaton.create_transition(a, b, Vec2::new(200.0, 100.0));
        state.automaton.update_transition(a, b, ['a']);
        state.selection.starting_arrow = Some(StartingArrow {
            tail: Vec2::new(0.0, 100.0),
            to_state: a,
        });
        (state, a, b)
    }

    #[test]
    fn scene_contains_all_entities() {
        let (state, _, _) = editor_with_run();
        let scene = build(&state);
        assert_eq!(scene.states.len(), 2);
        assert_eq!(scene.transitions.len(), 1);
        assert!(scene.starting_arrow.is_some());
        assert!(scene.floating_arrow.is_none());
    }

    #[test]
    fn active_run_state_outranks_selection() {
        let (mut state, a, _) = editor_with_run();
        state.selection.selected_state = Some(a);
        run::set_input(&mut state, "a");
        state.run.step_forward(); // Cursor am Startzustand

        let scene = build(&state);
        let visual = scene.states.iter().find(|s| s.id == a).expect("q0 erwartet");
        assert_eq!(visual.highlight, Highlight::Active { accepting: false });
        assert!(visual.editing, "Editier-Cursor bleibt an der Selektion");
    }

    #[test]
    fn stepped_transition_is_highlighted() {
        let (mut state, a, b) = editor_with_run();
        run::set_input(&mut state, "a");
        state.run.step_forward();
        state.run.step_forward(); // Schritt über den Übergang a→b

        let scene = build(&state);
        let visual = &scene.transitions[0];
        assert_eq!(visual.from_id, a);
        assert_eq!(visual.to_id, b);
        assert_eq!(visual.highlight, Highlight::Active { accepting: true });
    }

    #[test]
    fn incomplete_transition_shows_a_question_mark() {
        let (mut state, a, b) = editor_with_run();
        state.automaton.update_transition(a, b, []);

        let scene = build(&state);
        assert_eq!(scene.transitions[0].label, "?");
        assert!(scene.transitions[0].label_missing);

        // Während des Tippens kein Fehlermarker
        state.selection.selected_transition = Some((a, b));
        let scene = build(&state);
        assert_eq!(scene.transitions[0].label, "");
        assert!(!scene.transitions[0].label_missing);
    }

    #[test]
    fn self_loop_renders_as_an_arc_above_the_state() {
        let (mut state, a, _) = editor_with_run();
        state.automaton.create_transition(a, a, Vec2::new(100.0, 100.0));
        state.automaton.update_transition(a, a, ['z']);

        let scene = build(&state);
        let visual = scene
            .transitions
            .iter()
            .find(|t| t.from_id == a && t.to_id == a)
            .expect("Loop erwartet");
        assert!(matches!(visual.path, ArrowPath::Arc { .. }));
        // Label-Anker über dem Zustand
        assert!(visual.label_anchor.y < 100.0);
    }

    #[test]
    fn starting_arrow_line_runs_from_tail_to_state_edge() {
        let (mut state, _, _) = editor_with_run();
        state.selection.selecting_starting_arrow = true;
        let scene = build(&state);
        let visual = scene.starting_arrow.expect("Startpfeil erwartet");

        assert_eq!(visual.highlight, Highlight::Selected);
        let ArrowPath::Line { from, to } = visual.path else {
            panic!("Startpfeil muss eine Linie sein");
        };
        assert_relative_eq!(from.x, 0.0, epsilon = 1e-3);
        assert_relative_eq!(to.x, 60.0, epsilon = 1e-3, max_relative = 1e-3);
        assert_relative_eq!(to.y, 100.0, epsilon = 1e-3);
    }

    #[test]
    fn floating_arrow_snaps_to_the_target_state() {
        let (mut state, _, _) = editor_with_run();
        state.selection.floating_arrow = Some(FloatingArrow {
            from: Vec2::new(500.0, 100.0),
            to: Vec2::new(310.0, 100.0),
        });

        let scene = build(&state);
        let visual = scene.floating_arrow.expect("schwebender Pfeil erwartet");
        let ArrowPath::Line { from, to } = visual.path else {
            panic!("schwebender Pfeil muss eine Linie sein");
        };
        // Freies Ende bleibt am Zeigerstart, Ziel rastet auf den Kreisrand
        assert_relative_eq!(from.x, 500.0, epsilon = 1e-3);
        assert_relative_eq!(to.x, 340.0, epsilon = 1e-3);
    }
}
