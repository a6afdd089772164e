//! Zeichenflächen-Schnittstelle (Canvas-Fähigkeiten).

use glam::Vec2;

/// Linienstil: Breite in Pixeln + RGBA-Farbe.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    pub width: f32,
    pub color: [f32; 4],
}

impl Stroke {
    pub const fn new(width: f32, color: [f32; 4]) -> Self {
        Self { width, color }
    }
}

/// Minimale Zeichen-API, gegen die der Renderer arbeitet.
///
/// Alle Koordinaten sind Canvas-lokal (Pixel, Ursprung oben links).
pub trait DrawSurface {
    /// Beginnt ein neues Bild: setzt die ganze Fläche zurück und füllt
    /// `[min, max]` mit dem Hintergrund. Aufzeichnende Flächen verwerfen
    /// dabei alle bisherigen Befehle, unabhängig vom Bereich.
    fn clear(&mut self, min: Vec2, max: Vec2);
    /// Offener Linienzug durch `points`.
    fn stroke_polyline(&mut self, points: &[Vec2], stroke: Stroke);
    /// Quadratische Bézier-Kurve (natives Primitiv der Fläche).
    fn stroke_quadratic(&mut self, points: [Vec2; 3], stroke: Stroke);
    /// Kubische Bézier-Kurve (natives Primitiv der Fläche).
    fn stroke_cubic(&mut self, points: [Vec2; 4], stroke: Stroke);
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: [f32; 4]);
    /// Text mit linker Grundlinie bei `pos`.
    fn fill_text(&mut self, pos: Vec2, text: &str, size: f32, color: [f32; 4]);
}
