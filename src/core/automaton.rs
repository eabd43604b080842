//! Die zentrale Automaten-Datenstruktur mit Zuständen und Übergängen.

use super::{State, Transition};
use glam::Vec2;
use indexmap::IndexMap;
use std::fmt;

/// Ergebnis einer Auswertung: besuchte Zustände und Akzeptanz.
///
/// Die Spur beginnt immer mit dem Startzustand. Pro konsumiertem
/// Eingabezeichen folgt ein Eintrag; `None` markiert eine Sackgasse
/// (kein passender Übergang), danach wird keine weitere Eingabe
/// konsumiert — die Spur ist abgeschnitten, nicht aufgefüllt.
#[derive(Debug, Clone, PartialEq)]
pub struct EvaluationResult {
    /// Besuchte Zustände (IDs), `None` = Sackgasse
    pub states: Vec<Option<u64>>,
    /// Akzeptiert der Automat die Eingabe?
    pub accepts: bool,
}

/// Deterministischer endlicher Automat auf der Zeichenfläche.
///
/// Zustände und Übergänge liegen in `IndexMap`s: Iterationsreihenfolge
/// ist Einfügereihenfolge. Darauf stützen sich die dokumentierten
/// First-Match-Policies von `step` und dem Hit-Testing.
#[derive(Debug, Clone, Default)]
pub struct Automaton {
    /// Alle Zustände, indexiert nach ihrer ID
    pub states: IndexMap<u64, State>,
    /// Alle Übergänge, indexiert nach (from_id, to_id) für O(1)-Zugriff
    transitions: IndexMap<(u64, u64), Transition>,
    /// Designierter Startzustand (None = keiner gesetzt)
    starting_state: Option<u64>,
    /// Nächste zu vergebende Zustands-ID (monoton, nie wiederverwendet)
    next_state_id: u64,
}

impl Automaton {
    /// Erstellt einen leeren Automaten
    pub fn new() -> Self {
        Self::default()
    }

    // ── Zustände ────────────────────────────────────────────────────

    /// Legt einen neuen Zustand an und vergibt die nächste freie ID.
    /// Schlägt nie fehl.
    pub fn create_state(&mut self, name: impl Into<String>, accepting: bool, position: Vec2) -> u64 {
        let id = self.next_state_id;
        self.next_state_id += 1;
        self.states.insert(id, State::new(id, name, accepting, position));
        id
    }

    /// Entfernt einen Zustand inklusive aller ein- und ausgehenden
    /// Übergänge. War er Startzustand, wird die Referenz gelöscht.
    /// No-op wenn die ID unbekannt ist.
    pub fn delete_state(&mut self, id: u64) {
        if self.states.shift_remove(&id).is_none() {
            return;
        }
        self.transitions
            .retain(|(from, to), _| *from != id && *to != id);
        if self.starting_state == Some(id) {
            self.starting_state = None;
        }
    }

    /// Der aktuelle Startzustand (None = keiner gesetzt)
    pub fn starting_state(&self) -> Option<u64> {
        self.starting_state
    }

    /// Setzt den Startzustand. Zeigt das Argument auf keinen
    /// existierenden Zustand (oder ist `None`), wird die Referenz
    /// gelöscht.
    pub fn set_starting_state(&mut self, id: Option<u64>) {
        self.starting_state = id.filter(|id| self.states.contains_key(id));
    }

    /// Kippt das Accepting-Flag und gibt den neuen Wert zurück.
    /// `None` wenn die ID unbekannt ist.
    pub fn toggle_state_accepting(&mut self, id: u64) -> Option<bool> {
        let state = self.states.get_mut(&id)?;
        state.accepting = !state.accepting;
        Some(state.accepting)
    }

    // ── Übergänge ───────────────────────────────────────────────────

    /// Legt einen Übergang mit leerer Zeichenmenge und dem gegebenen
    /// Kontrollpunkt an. Idempotent: existiert das geordnete Paar
    /// bereits, passiert nichts — insbesondere bleibt der Kontrollpunkt
    /// des ersten Aufrufs erhalten. No-op wenn ein Endpunkt fehlt.
    pub fn create_transition(&mut self, from_id: u64, to_id: u64, control: Vec2) {
        if !self.states.contains_key(&from_id) || !self.states.contains_key(&to_id) {
            return;
        }
        self.transitions
            .entry((from_id, to_id))
            .or_insert_with(|| Transition::new(from_id, to_id, control));
    }

    /// Prüft ob ein Übergang existiert (exaktes Match) — O(1)
    pub fn has_transition(&self, from_id: u64, to_id: u64) -> bool {
        self.transitions.contains_key(&(from_id, to_id))
    }

    /// Findet einen Übergang (exaktes Match) — O(1)
    pub fn transition(&self, from_id: u64, to_id: u64) -> Option<&Transition> {
        self.transitions.get(&(from_id, to_id))
    }

    /// Mutabler Zugriff auf einen Übergang — O(1)
    pub fn transition_mut(&mut self, from_id: u64, to_id: u64) -> Option<&mut Transition> {
        self.transitions.get_mut(&(from_id, to_id))
    }

    /// Ersetzt die Zeichenmenge eines Übergangs komplett (Duplikate
    /// werden verworfen, erstes Vorkommen gewinnt). No-op wenn der
    /// Übergang fehlt.
    pub fn update_transition(&mut self, from_id: u64, to_id: u64, chars: impl IntoIterator<Item = char>) {
        if let Some(transition) = self.transitions.get_mut(&(from_id, to_id)) {
            transition.set_chars(chars);
        }
    }

    /// Hängt ein Zeichen an die Zeichenmenge an (Duplikate ignoriert).
    /// Gibt zurück ob sich etwas geändert hat.
    pub fn push_transition_char(&mut self, from_id: u64, to_id: u64, c: char) -> bool {
        match self.transitions.get_mut(&(from_id, to_id)) {
            Some(transition) => transition.push_char(c),
            None => false,
        }
    }

    /// Entfernt das zuletzt eingegebene Zeichen eines Übergangs
    pub fn pop_transition_char(&mut self, from_id: u64, to_id: u64) -> Option<char> {
        self.transitions.get_mut(&(from_id, to_id))?.pop_char()
    }

    /// Entfernt einen Übergang. Gibt `false` zurück wenn er fehlte.
    pub fn delete_transition(&mut self, from_id: u64, to_id: u64) -> bool {
        self.transitions.shift_remove(&(from_id, to_id)).is_some()
    }

    /// Iterator über alle Übergänge (Einfügereihenfolge, read-only)
    pub fn transitions_iter(&self) -> impl Iterator<Item = &Transition> {
        self.transitions.values()
    }

    /// Iterator über alle vom Zustand ausgehenden Übergänge
    pub fn transitions_from(&self, from_id: u64) -> impl Iterator<Item = &Transition> + '_ {
        self.transitions
            .values()
            .filter(move |t| t.from_id == from_id)
    }

    // ── Auswertung ──────────────────────────────────────────────────

    /// Ein Auswertungsschritt: liefert das Ziel des ersten ausgehenden
    /// Übergangs, dessen Zeichenmenge `c` enthält, sonst `None`.
    ///
    /// Bei verletztem Determinismus (zwei Übergänge mit demselben
    /// Zeichen) gewinnt der zuerst angelegte — die Reihenfolge ist
    /// über die `IndexMap` deterministisch.
    pub fn step(&self, from_id: u64, c: char) -> Option<u64> {
        self.transitions_from(from_id)
            .find(|t| t.has_char(c))
            .map(|t| t.to_id)
    }

    /// Auswertbar ist der Automat wenn ein Startzustand gesetzt ist
    /// und kein Übergang eine leere Zeichenmenge hat.
    ///
    /// Determinismus wird hier bewusst NICHT geprüft — `step` bleibt
    /// permissiv. Eine strengere Variante würde an dieser Stelle
    /// ansetzen, ohne `step` zu verändern.
    pub fn is_valid(&self) -> bool {
        self.starting_state
            .is_some_and(|id| self.states.contains_key(&id))
            && !self.transitions.values().any(Transition::is_incomplete)
    }

    /// Wertet die Eingabe ab dem Startzustand aus.
    ///
    /// `None` wenn der Automat nicht auswertbar ist (`is_valid`) —
    /// bewusst kein Teil-Ergebnis. Sonst die Spur der besuchten
    /// Zustände: nach einer Sackgasse (`None`-Eintrag) wird keine
    /// weitere Eingabe konsumiert. `accepts` ist das Accepting-Flag
    /// des letzten Spureintrags, bei Sackgasse `false`.
    pub fn evaluate(&self, input: &str) -> Option<EvaluationResult> {
        if !self.is_valid() {
            return None;
        }
        let mut current = self.starting_state;
        let mut trace = vec![current];
        for c in input.chars() {
            let Some(from) = current else {
                break;
            };
            current = self.step(from, c);
            trace.push(current);
        }

        let accepts = match current {
            Some(id) => self.states.get(&id).map(|s| s.accepting).unwrap_or(false),
            None => false,
        };
        Some(EvaluationResult {
            states: trace,
            accepts,
        })
    }

    // ── Statistik ───────────────────────────────────────────────────

    /// Gibt die Anzahl der Zustände zurück
    pub fn state_count(&self) -> usize {
        self.states.len()
    }

    /// Gibt die Anzahl der Übergänge zurück
    pub fn transition_count(&self) -> usize {
        self.transitions.len()
    }
}

impl fmt::Display for Automaton {
    /// Textuelle Zusammenfassung für Debug-Logs
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state_list = self
            .states
            .keys()
            .map(|id| id.to_string())
            .collect::<Vec<_>>()
            .join(",");
        writeln!(f, "Zustände: {}", state_list)?;
        match self.starting_state {
            Some(id) => writeln!(f, "Startzustand: {}", id)?,
            None => writeln!(f, "Startzustand: -")?,
        }
        writeln!(f, "Übergänge:")?;
        for transition in self.transitions.values() {
            writeln!(
                f,
                "\t{} --[{}]-> {}",
                transition.from_id,
                transition.label(),
                transition.to_id
            )?;
        }
        Ok(())
    }
}
