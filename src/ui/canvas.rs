//! egui-Zeichenfläche für die Engine-Befehle.

use bezier_playground_engine::{DrawSurface, Stroke};
use glam::Vec2;

/// Wandelt eine RGBA-Farbe (0..1) in `Color32` um.
pub fn to_color32(color: [f32; 4]) -> egui::Color32 {
    let channel = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
    egui::Color32::from_rgba_unmultiplied(
        channel(color[0]),
        channel(color[1]),
        channel(color[2]),
        channel(color[3]),
    )
}

fn to_egui_stroke(stroke: Stroke) -> egui::Stroke {
    egui::Stroke::new(stroke.width, to_color32(stroke.color))
}

/// Zeichnet Canvas-lokale Befehle mit einem auf das Canvas begrenzten Painter.
pub struct EguiSurface<'a> {
    painter: &'a egui::Painter,
    origin: egui::Pos2,
}

impl<'a> EguiSurface<'a> {
    /// `origin` ist die linke obere Ecke des Canvas in Bildschirmkoordinaten.
    pub fn new(painter: &'a egui::Painter, origin: egui::Pos2) -> Self {
        Self { painter, origin }
    }

    fn to_screen(&self, p: Vec2) -> egui::Pos2 {
        self.origin + egui::vec2(p.x, p.y)
    }
}

impl DrawSurface for EguiSurface<'_> {
    fn clear(&mut self, min: Vec2, max: Vec2) {
        let rect = egui::Rect::from_min_max(self.to_screen(min), self.to_screen(max));
        self.painter.rect_filled(rect, 0.0, egui::Color32::WHITE);
    }

    fn stroke_polyline(&mut self, points: &[Vec2], stroke: Stroke) {
        let screen: Vec<egui::Pos2> = points.iter().map(|&p| self.to_screen(p)).collect();
        self.painter
            .add(egui::Shape::line(screen, to_egui_stroke(stroke)));
    }

    fn stroke_quadratic(&mut self, points: [Vec2; 3], stroke: Stroke) {
        let shape = egui::epaint::QuadraticBezierShape::from_points_stroke(
            points.map(|p| self.to_screen(p)),
            false,
            egui::Color32::TRANSPARENT,
            to_egui_stroke(stroke),
        );
        self.painter.add(shape);
    }

    fn stroke_cubic(&mut self, points: [Vec2; 4], stroke: Stroke) {
        let shape = egui::epaint::CubicBezierShape::from_points_stroke(
            points.map(|p| self.to_screen(p)),
            false,
            egui::Color32::TRANSPARENT,
            to_egui_stroke(stroke),
        );
        self.painter.add(shape);
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: [f32; 4]) {
        self.painter
            .circle_filled(self.to_screen(center), radius, to_color32(color));
    }

    fn fill_text(&mut self, pos: Vec2, text: &str, size: f32, color: [f32; 4]) {
        // Canvas-Text steht auf der Grundlinie, links ausgerichtet
        self.painter.text(
            self.to_screen(pos),
            egui::Align2::LEFT_BOTTOM,
            text,
            egui::FontId::proportional(size),
            to_color32(color),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::to_color32;

    #[test]
    fn to_color32_scales_and_clamps_channels() {
        assert_eq!(
            to_color32([1.0, 0.0, 0.0, 1.0]),
            egui::Color32::from_rgb(255, 0, 0)
        );
        assert_eq!(
            to_color32([0.0, 0.5, 2.0, 1.0]),
            egui::Color32::from_rgb(0, 128, 255)
        );
    }
}
