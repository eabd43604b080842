//! Repräsentiert einen Übergang zwischen zwei Zuständen.

use glam::Vec2;

use super::state::is_input_char;

/// Ein gerichteter Übergang zwischen zwei Zuständen.
///
/// Die Zeichenmenge ist intern ein `Vec`, damit die Eingabereihenfolge
/// für die Anzeige erhalten bleibt; Duplikate werden beim Einfügen
/// verworfen.
#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    /// ID des Quellzustands
    pub from_id: u64,
    /// ID des Zielzustands
    pub to_id: u64,
    /// Auslösende Zeichen (distinkt, Einfügereihenfolge)
    chars: Vec<char>,
    /// Kontrollpunkt des Bogens (unabhängig von den Zustandspositionen)
    pub control: Vec2,
}

impl Transition {
    /// Erstellt einen neuen Übergang mit leerer Zeichenmenge
    pub fn new(from_id: u64, to_id: u64, control: Vec2) -> Self {
        Self {
            from_id,
            to_id,
            chars: Vec::new(),
            control,
        }
    }

    /// Ist der Übergang ein Self-Loop?
    pub fn is_self_loop(&self) -> bool {
        self.from_id == self.to_id
    }

    /// Auslösende Zeichen in Eingabereihenfolge
    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// Prüft ob das Zeichen diesen Übergang auslöst
    pub fn has_char(&self, c: char) -> bool {
        self.chars.contains(&c)
    }

    /// Hängt ein Zeichen an. Duplikate und nicht-druckbare Zeichen
    /// werden still ignoriert. Gibt zurück ob sich etwas geändert hat.
    pub fn push_char(&mut self, c: char) -> bool {
        if !is_input_char(c) || self.chars.contains(&c) {
            return false;
        }
        self.chars.push(c);
        true
    }

    /// Entfernt das zuletzt eingegebene Zeichen
    pub fn pop_char(&mut self) -> Option<char> {
        self.chars.pop()
    }

    /// Ersetzt die Zeichenmenge komplett. Duplikate werden verworfen,
    /// das erste Vorkommen gewinnt.
    pub fn set_chars(&mut self, chars: impl IntoIterator<Item = char>) {
        self.chars.clear();
        for c in chars {
            self.push_char(c);
        }
    }

    /// Übergang ohne Zeichen gilt als unfertig — der Automat ist dann
    /// nicht auswertbar (`Automaton::is_valid`).
    pub fn is_incomplete(&self) -> bool {
        self.chars.is_empty()
    }

    /// Anzeigetext der Zeichenmenge, kommagetrennt ("a,b,c")
    pub fn label(&self) -> String {
        let mut label = String::with_capacity(self.chars.len() * 2);
        for (i, c) in self.chars.iter().enumerate() {
            if i > 0 {
                label.push(',');
            }
            label.push(*c);
        }
        label
    }
}
