//! Use-Case: Eingabewort auswerten und den Schritt-Cursor zurücksetzen.

use crate::app::AppState;

/// Übernimmt ein neues Eingabewort (Menü-Eingabefeld) und wertet aus.
pub fn set_input(state: &mut AppState, input: &str) {
    state.run.input = input.to_string();
    reset_evaluation(state);
}

/// Wertet das aktuelle Eingabewort neu aus und setzt den Cursor zurück.
///
/// Ist der Automat nicht auswertbar (kein Startzustand oder ein
/// Übergang ohne Zeichen), gibt es bewusst kein Teil-Ergebnis — die
/// Schritt-Steuerung bleibt gesperrt.
pub fn reset_evaluation(state: &mut AppState) {
    let results = state.automaton.evaluate(&state.run.input);
    if results.is_none() {
        log::debug!("Automat nicht auswertbar — Schritt-Steuerung gesperrt");
    }
    state.run.set_results(results);
}
