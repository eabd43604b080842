//! Zentrale Konfiguration für den DFA-Sandbox-Editor.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

// ── Zeichenfläche ───────────────────────────────────────────────────

/// Radius eines Zustandskreises in Pixeln.
pub const STATE_RADIUS: f32 = 40.0;
/// Hit-Schwelle für Pfeile (Bogen und Startpfeil) in Pixeln.
pub const ARROW_HIT_THRESHOLD: f32 = 20.0;
/// Blinkintervall des Text-Cursors in Millisekunden.
pub const CURSOR_BLINK_RATE_MS: u64 = 500;

// ── Farben ──────────────────────────────────────────────────────────

/// Standard-Farbe für Zustände und Pfeile (RGBA: Schwarz).
pub const COLOR_DEFAULT: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
/// Farbe für selektierte Elemente (RGBA: Blau).
pub const COLOR_SELECTED: [f32; 4] = [0.0, 0.0, 1.0, 1.0];
/// Farbe für unfertige Übergänge ohne Zeichen (RGBA: Rot).
pub const COLOR_ERROR: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
/// Farbe für den aktiven Lauf-Zustand wenn er akzeptiert (RGBA: Grün).
pub const COLOR_ACCEPT: [f32; 4] = [0.0, 0.5, 0.0, 1.0];
/// Farbe für den aktiven Lauf-Zustand wenn er verwirft (RGBA: Rot).
pub const COLOR_REJECT: [f32; 4] = [1.0, 0.0, 0.0, 1.0];

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Wird als `dfa_sandbox_editor.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EditorOptions {
    /// Radius eines Zustandskreises in Pixeln
    pub state_radius: f32,
    /// Hit-Schwelle für Pfeile in Pixeln
    pub arrow_hit_threshold: f32,
    /// Blinkintervall des Text-Cursors in Millisekunden
    pub cursor_blink_rate_ms: u64,

    // ── Farben ──────────────────────────────────────────────────
    /// Standard-Farbe für Zustände und Pfeile
    pub color_default: [f32; 4],
    /// Farbe für selektierte Elemente
    pub color_selected: [f32; 4],
    /// Farbe für unfertige Übergänge
    pub color_error: [f32; 4],
    /// Farbe für akzeptierende aktive Zustände
    pub color_accept: [f32; 4],
    /// Farbe für verwerfende aktive Zustände
    pub color_reject: [f32; 4],
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            state_radius: STATE_RADIUS,
            arrow_hit_threshold: ARROW_HIT_THRESHOLD,
            cursor_blink_rate_ms: CURSOR_BLINK_RATE_MS,

            color_default: COLOR_DEFAULT,
            color_selected: COLOR_SELECTED,
            color_error: COLOR_ERROR,
            color_accept: COLOR_ACCEPT,
            color_reject: COLOR_REJECT,
        }
    }
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("dfa_sandbox_editor"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("dfa_sandbox_editor.toml")
    }
}
