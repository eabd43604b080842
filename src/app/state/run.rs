//! Zustand der schrittweisen Auswertung (Restart/Zurück/Vor/Lauf).
//!
//! Der Cursor ist ein Index in die Auswertungsspur:
//! `NOT_RUNNING` (−2) = keine Schritt-Anzeige aktiv, `AT_START` (−1) =
//! Anzeige steht am Startzustand, `n ≥ 0` = nach dem (n+1)-ten Zeichen.

use crate::core::EvaluationResult;

/// Schritt-Cursor über der Auswertungsspur.
#[derive(Debug, Clone)]
pub struct RunState {
    /// Aktuelles Eingabewort
    pub input: String,
    /// Letztes Auswertungsergebnis (None = Automat nicht auswertbar)
    pub results: Option<EvaluationResult>,
    /// Spur-Cursor (siehe Modul-Doku)
    pub index: i32,
}

impl RunState {
    /// Keine Schritt-Anzeige aktiv.
    pub const NOT_RUNNING: i32 = -2;
    /// Anzeige steht am Startzustand, noch kein Zeichen konsumiert.
    pub const AT_START: i32 = -1;

    /// Erstellt einen leeren Lauf-Zustand.
    pub fn new() -> Self {
        Self {
            input: String::new(),
            results: None,
            index: Self::NOT_RUNNING,
        }
    }

    /// Übernimmt ein neues Auswertungsergebnis und setzt den Cursor zurück.
    pub fn set_results(&mut self, results: Option<EvaluationResult>) {
        self.results = results;
        self.index = Self::NOT_RUNNING;
    }

    /// Läuft gerade eine Schritt-Anzeige?
    pub fn is_running(&self) -> bool {
        self.results.is_some() && self.index >= Self::AT_START
    }

    /// Kann zurück (oder neu) gestartet werden?
    pub fn can_step_back(&self) -> bool {
        self.results.is_some() && self.index > Self::AT_START
    }

    /// Kann vorwärts geschritten (oder durchgelaufen) werden?
    ///
    /// Am Spur-Ende (`index == states.len() − 2`) ist Schluss — jedes
    /// weitere Zeichen hätte keinen Spureintrag mehr.
    pub fn can_step_forward(&self) -> bool {
        match &self.results {
            Some(results) => self.index < results.states.len() as i32 - 2,
            None => false,
        }
    }

    /// Cursor zurück an den Startzustand.
    pub fn restart(&mut self) {
        if self.can_step_back() {
            self.index = Self::AT_START;
        }
    }

    /// Einen Schritt zurück.
    pub fn step_back(&mut self) {
        if self.can_step_back() {
            self.index -= 1;
        }
    }

    /// Einen Schritt vor.
    pub fn step_forward(&mut self) {
        if self.can_step_forward() {
            self.index += 1;
        }
    }

    /// Bis zum Spur-Ende durchlaufen.
    pub fn run_to_end(&mut self) {
        if let Some(results) = &self.results {
            if self.can_step_forward() {
                self.index = results.states.len() as i32 - 2;
            }
        }
    }

    /// Spureintrag unter dem Cursor: `None` wenn keine Anzeige läuft,
    /// `Some(None)` wenn der Cursor auf einer Sackgasse steht.
    pub fn active_trace_entry(&self) -> Option<Option<u64>> {
        if self.index < Self::AT_START {
            return None;
        }
        let results = self.results.as_ref()?;
        results.states.get((self.index + 1) as usize).copied()
    }

    /// Zustand unter dem Cursor, falls die Anzeige läuft und der
    /// Eintrag keine Sackgasse ist.
    pub fn active_state(&self) -> Option<u64> {
        self.active_trace_entry().flatten()
    }
}

impl Default for RunState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn running_over(states: Vec<Option<u64>>) -> RunState {
        let mut run = RunState::new();
        run.set_results(Some(EvaluationResult {
            states,
            accepts: false,
        }));
        run
    }

    #[test]
    fn fresh_results_are_not_stepping_yet() {
        let run = running_over(vec![Some(0), Some(1)]);
        assert_eq!(run.index, RunState::NOT_RUNNING);
        assert!(!run.is_running());
        assert_eq!(run.active_trace_entry(), None);
    }

    #[test]
    fn forward_walks_the_trace_and_stops_at_the_end() {
        let mut run = running_over(vec![Some(0), Some(1), Some(2)]);
        assert!(run.can_step_forward());
        run.step_forward(); // -1: am Startzustand
        assert_eq!(run.active_state(), Some(0));
        run.step_forward(); // 0: nach erstem Zeichen
        assert_eq!(run.active_state(), Some(1));
        run.step_forward(); // 1 = len-2: Spur-Ende
        assert_eq!(run.active_state(), Some(2));
        assert!(!run.can_step_forward());
        run.step_forward();
        assert_eq!(run.index, 1, "am Spur-Ende darf nicht weitergeschaltet werden");
    }

    #[test]
    fn back_does_not_pass_the_starting_state() {
        let mut run = running_over(vec![Some(0), Some(1)]);
        run.step_forward();
        assert!(!run.can_step_back(), "am Startzustand ist Zurück gesperrt");
        run.step_back();
        assert_eq!(run.index, RunState::AT_START);
        run.run_to_end();
        assert!(run.can_step_back());
        run.step_back();
        assert_eq!(run.index, RunState::AT_START);
    }

    #[test]
    fn restart_jumps_to_the_starting_state() {
        let mut run = running_over(vec![Some(0), Some(1), None]);
        run.run_to_end();
        assert_eq!(run.index, 1);
        // Sackgasse in der Spur sichtbar
        assert_eq!(run.active_trace_entry(), Some(None));
        assert_eq!(run.active_state(), None);
        run.restart();
        assert_eq!(run.active_state(), Some(0));
    }

    #[test]
    fn without_results_every_control_is_disabled() {
        let mut run = RunState::new();
        assert!(!run.can_step_forward());
        assert!(!run.can_step_back());
        run.step_forward();
        run.run_to_end();
        assert_eq!(run.index, RunState::NOT_RUNNING);
    }
}
