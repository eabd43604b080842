//! Reine Geometrie-Funktionen für Kreisbogen-Pfeile.
//!
//! Layer-neutral: wird von `use_cases` (Hit-Testing) und `render_scene`
//! (Pfad-Berechnung) importiert ohne Zirkel-Abhängigkeiten zu erzeugen.
//! Alle Funktionen sind zustandslos und mutieren ihre Eingaben nicht.

use glam::Vec2;
use std::f32::consts::PI;

/// Winkel-Toleranz (Radiant) für den Kollinearitätstest.
pub const COLLINEARITY_TOLERANCE_RAD: f32 = 0.01;

/// Epsilon-Versatz des Zielpunkts bei Self-Loops, damit der
/// Bogen-Solver keine exakt zusammenfallenden Punkte sieht.
pub const SELF_LOOP_EPSILON: f32 = 0.01;

/// Richtungswinkel von `center` nach `p` (Radiant, atan2-Konvention).
fn angle_from(center: Vec2, p: Vec2) -> f32 {
    let delta = p - center;
    delta.y.atan2(delta.x)
}

/// Prüft ob die drei Punkte auf einer Linie liegen.
///
/// Zusammenfallende Punkte (`p1 == p2` oder `p2 == p3`) gelten per
/// Konvention als kollinear — durch einen doppelten Punkt ist kein
/// Bogen definiert. Zwei senkrechte Segmente sind kollinear, genau
/// eines senkrecht nicht. Sonst entscheidet der Richtungsvergleich
/// der Segmente (p1→p2) und (p2→p3) innerhalb der Winkel-Toleranz.
pub fn is_collinear(p1: Vec2, p2: Vec2, p3: Vec2) -> bool {
    if p1 == p2 || p2 == p3 {
        return true;
    }
    let d1 = p2 - p1;
    let d2 = p3 - p2;
    if d2.x == 0.0 && d1.x == 0.0 {
        return true;
    }
    if d2.x == 0.0 || d1.x == 0.0 {
        return false;
    }
    (d1.y.atan2(d1.x) - d2.y.atan2(d2.x)).abs() < COLLINEARITY_TOLERANCE_RAD
}

/// Distanz von `p` zum nächsten Punkt auf dem Segment `a`–`b`.
///
/// Skalarprojektion auf [0, 1] geklemmt; degeneriertes Segment
/// (`a == b`) fällt auf die Punktdistanz zurück.
pub fn point_to_segment_distance(p: Vec2, a: Vec2, b: Vec2) -> f32 {
    let length = a.distance(b);
    if length == 0.0 {
        return p.distance(a);
    }
    let t = ((p - a).dot(b - a) / (length * length)).clamp(0.0, 1.0);
    p.distance(a + t * (b - a))
}

/// Löst das 2×2-System `A1·x + B1·y + C1 = 0`, `A2·x + B2·y + C2 = 0`.
///
/// Setzt genau eine Lösung voraus (Aufrufer garantiert nicht-parallele
/// Geraden über den Kollinearitätstest).
fn solve_line_system(a1: f32, b1: f32, c1: f32, a2: f32, b2: f32, c2: f32) -> Vec2 {
    if b1 == 0.0 {
        return Vec2::new(-c1 / a1, (a2 * (c1 / a1) - c2) / b2);
    }
    if b2 == 0.0 {
        return Vec2::new(-c2 / a2, (a1 * (c2 / a2) - c1) / b1);
    }
    let x = (b2 * c1 / b1 - c2) / (a2 - b2 * a1 / b1);
    let y = (-a1 * x - c1) / b1;
    Vec2::new(x, y)
}

/// Mittelsenkrechte des Segments `a`–`b` als Geradengleichung `(A, B, C)`.
///
/// Waagerechte Segmente liefern eine senkrechte Gerade `x = konst`.
fn perpendicular_bisector(a: Vec2, b: Vec2) -> (f32, f32, f32) {
    let mid = (a + b) * 0.5;
    if a.y == b.y {
        (1.0, 0.0, -mid.x)
    } else {
        let slope = -(b.x - a.x) / (b.y - a.y);
        (slope, -1.0, mid.y - slope * mid.x)
    }
}

/// Umkreismittelpunkt der drei Punkte.
///
/// Schnitt der Mittelsenkrechten von (p1, p2) und (p2, p3) als
/// 2×2-System. Verhalten bei kollinearen Punkten ist undefiniert —
/// Aufrufer müssen vorher `is_collinear` prüfen.
pub fn arc_center(p1: Vec2, p2: Vec2, p3: Vec2) -> Vec2 {
    let (a1, b1, c1) = perpendicular_bisector(p1, p2);
    let (a2, b2, c2) = perpendicular_bisector(p2, p3);
    solve_line_system(a1, b1, c1, a2, b2, c2)
}

/// Punkt auf dem Umkreis, winkelhalbierend zwischen `p1` und `p3` auf
/// der Seite des Bogens, der tatsächlich durch `p2` läuft.
///
/// Die relative Winkelreihenfolge von p1, p2, p3 um den Mittelpunkt
/// entscheidet über die +π-Korrektur. Kollineare Eingabe degradiert
/// zum Segment-Mittelpunkt von p1 und p3.
pub fn arc_midpoint(center: Vec2, p1: Vec2, p2: Vec2, p3: Vec2) -> Vec2 {
    if is_collinear(p1, p2, p3) {
        return (p1 + p3) * 0.5;
    }
    let angle1 = angle_from(center, p1);
    let angle2 = angle_from(center, p2);
    let angle3 = angle_from(center, p3);

    let counterclockwise = (angle1 <= angle3 && angle3 <= angle2)
        || (angle2 <= angle1 && angle1 <= angle3)
        || (angle3 <= angle2 && angle2 <= angle1);

    let mut mid_angle = (angle1 + angle3) * 0.5;
    if (counterclockwise && angle1 < angle3) || (!counterclockwise && angle1 > angle3) {
        mid_angle += PI;
    }

    let radius = center.distance(p1);
    center + Vec2::new(mid_angle.cos(), mid_angle.sin()) * radius
}

/// Liegt `b` im Intervall zwischen `a` und `c` (beliebige Richtung)?
fn is_between(a: f32, b: f32, c: f32) -> bool {
    (a <= b && b <= c) || (c <= b && b <= a)
}

/// Distanz von `p` zum Bogen von `p1` über `p2` nach `p3`.
///
/// Kollinear degradiert zur Segmentdistanz `p1`–`p3`. Sonst: liegt
/// `p` im selben Winkelbereich wie `p2`, ist die Distanz der radiale
/// Abstand zum Kreis; liegt `p` über dem Komplementärbogen, ist die
/// Distanz unendlich — die Hit-Zone deckt nur den gezeichneten Bogen.
pub fn point_to_arc_distance(p: Vec2, p1: Vec2, p2: Vec2, p3: Vec2) -> f32 {
    if is_collinear(p1, p2, p3) {
        return point_to_segment_distance(p, p1, p3);
    }
    let center = arc_center(p1, p2, p3);
    let angle1 = angle_from(center, p1);
    let angle2 = angle_from(center, p2);
    let angle3 = angle_from(center, p3);
    let angle_p = angle_from(center, p);

    if is_between(angle1, angle2, angle3) == is_between(angle1, angle_p, angle3) {
        (p.distance(center) - p1.distance(center)).abs()
    } else {
        f32::INFINITY
    }
}

/// Verschiebt `p` um `dist` entlang des Richtungswinkels `angle`.
pub fn forward(p: Vec2, angle: f32, dist: f32) -> Vec2 {
    p + Vec2::new(angle.cos(), angle.sin()) * dist
}

/// Synthetische Bogen-Geometrie für Self-Loops.
///
/// Kontrollpunkt `2 × state_radius` über dem Zustandszentrum, Zielpunkt
/// minimal nach links versetzt. Hit-Testing und Pfad-Berechnung nutzen
/// beide diesen Helper und bleiben dadurch zwangsläufig konsistent.
pub fn self_loop_geometry(center: Vec2, state_radius: f32) -> (Vec2, Vec2) {
    let control = Vec2::new(center.x, center.y - 2.0 * state_radius);
    let to = Vec2::new(center.x - SELF_LOOP_EPSILON, center.y);
    (control, to)
}
