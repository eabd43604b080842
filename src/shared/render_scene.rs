//! Render-Szene als expliziter Übergabevertrag zwischen App und Renderer.
//!
//! Lebt im shared-Modul, da `app` sie baut und ein Frontend sie
//! konsumiert. Enthält neben den Daten auch die Pfad-Berechnung der
//! Pfeile, damit alle Frontends dieselbe Geometrie zeichnen.

use glam::Vec2;
use std::f32::consts::PI;

use super::arc_geometry::{arc_center, arc_midpoint, forward, is_collinear};
use super::options::EditorOptions;

/// Öffnungswinkel der Pfeilspitze (Radiant).
const HEAD_ANGLE: f32 = PI / 4.0;
/// Höhe der Pfeilspitze relativ zum Zustandsradius.
const HEAD_HEIGHT_FACTOR: f32 = 0.5;

/// Hervorhebung eines Elements für den aktuellen Frame.
///
/// `Active` gewinnt über `Selected`: läuft eine Auswertung, färbt der
/// aktive Zustand nach seinem Accepting-Flag, egal was selektiert ist.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Highlight {
    /// Keine Hervorhebung
    #[default]
    Default,
    /// Element ist selektiert
    Selected,
    /// Element ist Teil des aktuellen Auswertungsschritts
    Active {
        /// Akzeptiert der Automat an dieser Stelle?
        accepting: bool,
    },
}

/// Sichtbarer Pfad eines Pfeils zwischen zwei Zuständen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ArrowPath {
    /// Kollinearer Fall: gerade Linie, Endpunkte auf die Kreisränder gekürzt
    Line {
        /// Startpunkt am Rand des Quellzustands
        from: Vec2,
        /// Endpunkt am Rand des Zielzustands
        to: Vec2,
    },
    /// Kreisbogen durch den Kontrollpunkt
    Arc {
        /// Umkreismittelpunkt
        center: Vec2,
        /// Umkreisradius
        radius: f32,
        /// Startwinkel (auf den Kreisrand des Quellzustands gekürzt)
        start_angle: f32,
        /// Endwinkel (auf den Kreisrand des Zielzustands gekürzt)
        end_angle: f32,
        /// Läuft der Bogen gegen den Uhrzeigersinn?
        counterclockwise: bool,
    },
}

/// Pfeilspitzen-Dreieck mit Spitze am Pfadende.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArrowHead {
    /// Spitze des Dreiecks
    pub tip: Vec2,
    /// Linke hintere Ecke
    pub left: Vec2,
    /// Rechte hintere Ecke
    pub right: Vec2,
}

impl ArrowHead {
    /// Baut die Pfeilspitze mit `tip` als Spitze in Richtung `angle`.
    pub fn at(tip: Vec2, angle: f32, state_radius: f32) -> Self {
        let height = state_radius * HEAD_HEIGHT_FACTOR;
        let width = height * (HEAD_ANGLE / 2.0).tan();
        let back = forward(tip, angle, -height);
        Self {
            tip,
            left: forward(back, angle + PI / 2.0, width),
            right: forward(back, angle - PI / 2.0, width),
        }
    }
}

impl ArrowPath {
    /// Berechnet Pfad und Pfeilspitze zwischen zwei Zustandszentren.
    ///
    /// `from` und `to` sind Zentren; der sichtbare Pfad startet und
    /// endet auf den Kreisrändern. Self-Loops müssen vom Aufrufer
    /// vorher über `arc_geometry::self_loop_geometry` ersetzt werden.
    pub fn between(from: Vec2, control: Vec2, to: Vec2, state_radius: f32) -> (ArrowPath, ArrowHead) {
        if is_collinear(from, control, to) {
            let angle = (to.y - from.y).atan2(to.x - from.x);
            let from = forward(from, angle, state_radius);
            let to = forward(to, angle, -state_radius);
            return (ArrowPath::Line { from, to }, ArrowHead::at(to, angle, state_radius));
        }

        let center = arc_center(from, control, to);
        let radius = center.distance(from);

        let start_angle = (from.y - center.y).atan2(from.x - center.x);
        let mid_angle = (control.y - center.y).atan2(control.x - center.x);
        let end_angle = (to.y - center.y).atan2(to.x - center.x);

        let counterclockwise = (start_angle <= end_angle && end_angle <= mid_angle)
            || (mid_angle <= start_angle && start_angle <= end_angle)
            || (end_angle <= mid_angle && mid_angle <= start_angle);

        // Endwinkel auf die Kreisränder der Zustände kürzen
        let trim = 2.0 * (0.5 * state_radius / radius).asin();
        let start_angle = start_angle + if counterclockwise { -trim } else { trim };
        let end_angle = end_angle + if counterclockwise { trim } else { -trim };

        let tip = center + Vec2::new(end_angle.cos(), end_angle.sin()) * radius;
        let head_angle = end_angle + if counterclockwise { -PI / 2.0 } else { PI / 2.0 };

        (
            ArrowPath::Arc {
                center,
                radius,
                start_angle,
                end_angle,
                counterclockwise,
            },
            ArrowHead::at(tip, head_angle, state_radius),
        )
    }
}

/// Ankerpunkt für den Zeichen-Text eines Pfeils.
///
/// Nicht-kollinear: Bogen-Mittelpunkt; kollinear: Segment-Mittelpunkt.
pub fn label_anchor(from: Vec2, control: Vec2, to: Vec2) -> Vec2 {
    if is_collinear(from, control, to) {
        (from + to) * 0.5
    } else {
        let center = arc_center(from, control, to);
        arc_midpoint(center, from, control, to)
    }
}

/// Darstellungsdaten eines Zustands.
#[derive(Debug, Clone, PartialEq)]
pub struct StateVisual {
    /// ID des Zustands
    pub id: u64,
    /// Zentrum auf der Zeichenfläche
    pub position: Vec2,
    /// Anzeigename
    pub name: String,
    /// Akzeptierend? (zweiter Innenkreis)
    pub accepting: bool,
    /// Hervorhebung für diesen Frame
    pub highlight: Highlight,
    /// Wird der Name gerade editiert? (blinkender Cursor)
    pub editing: bool,
}

/// Darstellungsdaten eines Übergangs.
#[derive(Debug, Clone, PartialEq)]
pub struct TransitionVisual {
    /// Quellzustand
    pub from_id: u64,
    /// Zielzustand
    pub to_id: u64,
    /// Sichtbarer Pfad (Self-Loops bereits ersetzt)
    pub path: ArrowPath,
    /// Pfeilspitze am Pfadende
    pub head: ArrowHead,
    /// Anzeigetext der Zeichenmenge ("a,b" oder "?" wenn leer)
    pub label: String,
    /// Leere Zeichenmenge → als unfertig markieren
    pub label_missing: bool,
    /// Ankerpunkt des Texts
    pub label_anchor: Vec2,
    /// Hervorhebung für diesen Frame
    pub highlight: Highlight,
    /// Wird die Zeichenmenge gerade editiert? (blinkender Cursor)
    pub editing: bool,
}

/// Darstellungsdaten des Startpfeils.
#[derive(Debug, Clone, PartialEq)]
pub struct StartingArrowVisual {
    /// Sichtbarer Pfad (immer eine Linie)
    pub path: ArrowPath,
    /// Pfeilspitze am Zustandsrand
    pub head: ArrowHead,
    /// Hervorhebung für diesen Frame
    pub highlight: Highlight,
}

/// Darstellungsdaten eines gerade gezogenen (schwebenden) Pfeils.
#[derive(Debug, Clone, PartialEq)]
pub struct FloatingArrowVisual {
    /// Sichtbarer Pfad
    pub path: ArrowPath,
    /// Pfeilspitze am Zeiger bzw. eingerasteten Zustand
    pub head: ArrowHead,
}

/// Read-only Daten für einen Render-Frame.
#[derive(Debug, Clone)]
pub struct RenderScene {
    /// Alle Zustände
    pub states: Vec<StateVisual>,
    /// Alle Übergänge
    pub transitions: Vec<TransitionVisual>,
    /// Startpfeil, falls gesetzt
    pub starting_arrow: Option<StartingArrowVisual>,
    /// Schwebender Pfeil während einer Verbinden-Geste
    pub floating_arrow: Option<FloatingArrowVisual>,
    /// Laufzeit-Optionen für Farben und Größen
    pub options: EditorOptions,
}
