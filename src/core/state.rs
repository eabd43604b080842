//! Ein einzelner Zustand des Automaten mit Position auf der Zeichenfläche.

use glam::Vec2;

/// Ein Zustand des Automaten
#[derive(Debug, Clone, PartialEq)]
pub struct State {
    /// Stabile ID, monoton vergeben und nie wiederverwendet
    pub id: u64,
    /// Anzeigename (druckbares ASCII, über Tastatur editierbar)
    pub name: String,
    /// Akzeptierender Zustand?
    pub accepting: bool,
    /// Position des Zustandszentrums auf der Zeichenfläche
    pub position: Vec2,
}

impl State {
    /// Erstellt einen neuen Zustand
    pub fn new(id: u64, name: impl Into<String>, accepting: bool, position: Vec2) -> Self {
        Self {
            id,
            name: name.into(),
            accepting,
            position,
        }
    }
}

/// Prüft ob das Zeichen für Zustandsnamen und Übergänge zulässig ist
/// (druckbares ASCII inklusive Leerzeichen).
pub fn is_input_char(c: char) -> bool {
    matches!(c, ' '..='~')
}
