use crate::core::Automaton;
use crate::shared::EditorOptions;

use super::{RunState, SelectionState};

/// Hauptzustand der Anwendung.
///
/// Expliziter Kontext für alle Use-Cases — es gibt keinen globalen
/// Singleton. Der Automat lebt genau einmal pro Session und wird
/// ausschließlich über die Use-Cases mutiert.
pub struct AppState {
    /// Der Automat auf der Zeichenfläche
    pub automaton: Automaton,
    /// Selection- und Drag-State
    pub selection: SelectionState,
    /// Zustand der schrittweisen Auswertung
    pub run: RunState,
    /// Laufzeit-Optionen (Farben, Größen, Schwellen)
    pub options: EditorOptions,
}

impl AppState {
    /// Erstellt einen neuen, leeren App-State
    pub fn new() -> Self {
        Self {
            automaton: Automaton::new(),
            selection: SelectionState::new(),
            run: RunState::new(),
            options: EditorOptions::default(),
        }
    }

    /// Gibt die Anzahl der Zustände zurück (für UI-Anzeige)
    pub fn state_count(&self) -> usize {
        self.automaton.state_count()
    }

    /// Gibt die Anzahl der Übergänge zurück (für UI-Anzeige)
    pub fn transition_count(&self) -> usize {
        self.automaton.transition_count()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
