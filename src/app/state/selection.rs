//! Auswahlbezogener Anwendungszustand: Selektion, Drag, schwebende Pfeile.

use glam::Vec2;

/// Ein gerade gezogener Pfeil, dessen Ziel noch am Zeiger hängt.
///
/// Wird beim Loslassen aufgelöst: über einem Zustand endend entsteht
/// ein Übergang bzw. der Startpfeil, sonst verfällt er.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FloatingArrow {
    /// Startpunkt (auf ein Zustandszentrum eingerastet, falls dort begonnen)
    pub from: Vec2,
    /// Aktuelle Zeigerposition
    pub to: Vec2,
}

/// Der Pfeil, der den Startzustand markiert.
///
/// Gehört zur Session, nicht zum Automaten: der Automat kennt nur die
/// Startzustand-Referenz, der freie Pfeilschwanz ist reine Darstellung.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StartingArrow {
    /// Freies Ende des Pfeils (per Drag verschiebbar)
    pub tail: Vec2,
    /// Zustand auf den der Pfeil zeigt
    pub to_state: u64,
}

/// Auswahlbezogener Anwendungszustand
#[derive(Debug, Clone, Default)]
pub struct SelectionState {
    /// Aktuell selektierter Zustand (Name wird editiert)
    pub selected_state: Option<u64>,
    /// Aktuell selektierter Übergang als (from_id, to_id)
    pub selected_transition: Option<(u64, u64)>,
    /// Läuft gerade eine Drag-Geste?
    pub dragging: bool,
    /// Schwebender Pfeil während einer Verbinden-Geste
    pub floating_arrow: Option<FloatingArrow>,
    /// Startpfeil, falls ein Startzustand markiert ist
    pub starting_arrow: Option<StartingArrow>,
    /// Ist der Startpfeil selektiert?
    pub selecting_starting_arrow: bool,
}

impl SelectionState {
    /// Erstellt einen leeren Selektionszustand.
    pub fn new() -> Self {
        Self::default()
    }

    /// Hebt jede Selektion auf und beendet den Drag
    /// (Zeiger verlässt die Zeichenfläche).
    pub fn clear(&mut self) {
        self.selected_state = None;
        self.selected_transition = None;
        self.selecting_starting_arrow = false;
        self.dragging = false;
    }
}
