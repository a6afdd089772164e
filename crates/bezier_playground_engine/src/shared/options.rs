//! Zentrale Konfiguration für den Bezier-Playground.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use glam::Vec2;
use serde::{Deserialize, Serialize};

// ── Kurven ──────────────────────────────────────────────────────────

/// Startpunkte der quadratischen Kurve beim Mounten des Editors.
pub const QUADRATIC_DEFAULT_POINTS: [Vec2; 3] = [
    Vec2::new(50.0, 150.0),
    Vec2::new(200.0, 50.0),
    Vec2::new(350.0, 150.0),
];
/// Startpunkte der kubischen Kurve beim Mounten des Editors.
pub const CUBIC_DEFAULT_POINTS: [Vec2; 4] = [
    Vec2::new(50.0, 150.0),
    Vec2::new(150.0, 50.0),
    Vec2::new(250.0, 250.0),
    Vec2::new(350.0, 150.0),
];

// ── Canvas ──────────────────────────────────────────────────────────

/// Canvas-Breite in Pixeln.
pub const CANVAS_WIDTH: f32 = 400.0;
/// Canvas-Höhe in Pixeln.
pub const CANVAS_HEIGHT: f32 = 300.0;

// ── Interaktion ─────────────────────────────────────────────────────

/// Pick-Radius in Pixeln: Klick innerhalb dieses Radius greift einen Punkt.
pub const HIT_RADIUS_PX: f32 = 5.0;

// ── Rendering ───────────────────────────────────────────────────────

/// Radius der gefüllten Punkt-Markierung.
pub const POINT_RADIUS_PX: f32 = 5.0;
/// Versatz des Labels relativ zum Punkt (x nach rechts, y nach oben).
pub const LABEL_OFFSET_PX: [f32; 2] = [7.0, -7.0];
/// Schriftgröße der Punkt-Labels.
pub const LABEL_FONT_SIZE: f32 = 12.0;
/// Linienstärke des Kontrollpolygons.
pub const POLYGON_WIDTH_PX: f32 = 1.0;
/// Linienstärke der Kurve.
pub const CURVE_WIDTH_PX: f32 = 2.0;
/// Farbe der Anker P0/Pn (RGBA: Rot).
pub const ANCHOR_COLOR: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
/// Farbe innerer Punkte im Absolut-Modus (RGBA: Blau).
pub const INTERIOR_COLOR_ABSOLUTE: [f32; 4] = [0.0, 0.0, 1.0, 1.0];
/// Farbe innerer Punkte im Relativ-Modus (RGBA: Grün, #008000).
pub const INTERIOR_COLOR_RELATIVE: [f32; 4] = [0.0, 0.5, 0.0, 1.0];
/// Farbe des quadratischen Kontrollpolygons (RGBA: #aaa).
pub const POLYGON_COLOR: [f32; 4] = [0.667, 0.667, 0.667, 1.0];
/// Farbe der Kurve (RGBA: Schwarz).
pub const CURVE_COLOR: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
/// Farbe der Labels (RGBA: Schwarz).
pub const LABEL_COLOR: [f32; 4] = [0.0, 0.0, 0.0, 1.0];

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Wird als `bezier_playground.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct EditorOptions {
    // ── Canvas ──────────────────────────────────────────────────
    /// Canvas-Breite in Pixeln
    pub canvas_width: f32,
    /// Canvas-Höhe in Pixeln
    pub canvas_height: f32,

    // ── Interaktion ─────────────────────────────────────────────
    /// Pick-Radius in Pixeln
    pub hit_radius_px: f32,

    // ── Punkte & Labels ─────────────────────────────────────────
    pub point_radius_px: f32,
    pub label_offset_px: [f32; 2],
    pub label_font_size: f32,
    pub anchor_color: [f32; 4],
    pub interior_color_absolute: [f32; 4],
    pub interior_color_relative: [f32; 4],
    pub label_color: [f32; 4],

    // ── Linien ──────────────────────────────────────────────────
    pub polygon_width_px: f32,
    pub polygon_color: [f32; 4],
    pub curve_width_px: f32,
    pub curve_color: [f32; 4],
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            canvas_width: CANVAS_WIDTH,
            canvas_height: CANVAS_HEIGHT,

            hit_radius_px: HIT_RADIUS_PX,

            point_radius_px: POINT_RADIUS_PX,
            label_offset_px: LABEL_OFFSET_PX,
            label_font_size: LABEL_FONT_SIZE,
            anchor_color: ANCHOR_COLOR,
            interior_color_absolute: INTERIOR_COLOR_ABSOLUTE,
            interior_color_relative: INTERIOR_COLOR_RELATIVE,
            label_color: LABEL_COLOR,

            polygon_width_px: POLYGON_WIDTH_PX,
            polygon_color: POLYGON_COLOR,
            curve_width_px: CURVE_WIDTH_PX,
            curve_color: CURVE_COLOR,
        }
    }
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str::<Self>(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts.sanitized()
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
        Self::sibling_of_exe("bezier_playground.toml")
    }

    /// Pfad einer Datei neben der Binary (Fallback: aktuelles Verzeichnis).
    pub fn sibling_of_exe(file_name: &str) -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("bezier_playground"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join(file_name)
    }

    /// Canvas-Größe als `[Breite, Höhe]`.
    pub fn canvas_size(&self) -> [f32; 2] {
        [self.canvas_width, self.canvas_height]
    }

    /// Ersetzt unbrauchbare Werte (nicht-endlich oder < 1) durch Defaults.
    ///
    /// `f32::clamp` in der Bounds-Policy verlangt `0 <= max`.
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();
        let fix = |value: f32, fallback: f32| {
            if value.is_finite() && value >= 1.0 {
                value
            } else {
                log::warn!("Ungültiger Optionswert {value}, verwende {fallback}");
                fallback
            }
        };
        self.canvas_width = fix(self.canvas_width, defaults.canvas_width);
        self.canvas_height = fix(self.canvas_height, defaults.canvas_height);
        self.hit_radius_px = fix(self.hit_radius_px, defaults.hit_radius_px);
        self
    }
}
