//! Zeichnet eine Kurve samt Kontrollpolygon und Punkt-Labels.

use super::surface::{DrawSurface, Stroke};
use crate::core::{Curve, CurveDegree};
use crate::shared::EditorOptions;
use glam::Vec2;

/// Farben und Maße für einen Render-Durchlauf.
#[derive(Debug, Clone, PartialEq)]
pub struct CurveStyle {
    pub canvas_size: [f32; 2],
    pub point_radius: f32,
    pub label_offset: Vec2,
    pub label_size: f32,
    pub label_color: [f32; 4],
    pub anchor_color: [f32; 4],
    pub interior_absolute: [f32; 4],
    pub interior_relative: [f32; 4],
    pub polygon: Stroke,
    pub curve: Stroke,
}

impl CurveStyle {
    pub fn from_options(options: &EditorOptions) -> Self {
        Self {
            canvas_size: options.canvas_size(),
            point_radius: options.point_radius_px,
            label_offset: Vec2::from_array(options.label_offset_px),
            label_size: options.label_font_size,
            label_color: options.label_color,
            anchor_color: options.anchor_color,
            interior_absolute: options.interior_color_absolute,
            interior_relative: options.interior_color_relative,
            polygon: Stroke::new(options.polygon_width_px, options.polygon_color),
            curve: Stroke::new(options.curve_width_px, options.curve_color),
        }
    }

    /// Farbe innerer Punkte je nach Modus.
    pub fn interior_color(&self, relative: bool) -> [f32; 4] {
        if relative {
            self.interior_relative
        } else {
            self.interior_absolute
        }
    }
}

impl Default for CurveStyle {
    fn default() -> Self {
        Self::from_options(&EditorOptions::default())
    }
}

/// Zeichnet `curve` vollständig neu.
///
/// Reihenfolge: Fläche löschen → Kontrollpolygon → Kurve → Punkte + Labels.
/// Quadratisch: Polygon P0–P1–P2 in Grau. Kubisch: Segmente P0–P1 und P2–P3
/// (keine Linie zwischen den inneren Punkten) in der Modus-Farbe.
pub fn render_curve(
    surface: &mut dyn DrawSurface,
    curve: &Curve,
    relative: bool,
    style: &CurveStyle,
) {
    let [width, height] = style.canvas_size;
    surface.clear(Vec2::ZERO, Vec2::new(width, height));

    let p = curve.points();
    let interior = style.interior_color(relative);

    match curve.degree() {
        CurveDegree::Quadratic => {
            surface.stroke_polyline(p, style.polygon);
            surface.stroke_quadratic([p[0], p[1], p[2]], style.curve);
        }
        CurveDegree::Cubic => {
            let polygon = Stroke::new(style.polygon.width, interior);
            surface.stroke_polyline(&[p[0], p[1]], polygon);
            surface.stroke_polyline(&[p[2], p[3]], polygon);
            surface.stroke_cubic([p[0], p[1], p[2], p[3]], style.curve);
        }
    }

    let degree = curve.degree();
    for (index, &point) in p.iter().enumerate() {
        let color = if degree.is_anchor(index) {
            style.anchor_color
        } else {
            interior
        };
        surface.fill_circle(point, style.point_radius, color);
        surface.fill_text(
            point + style.label_offset,
            &format!("P{index}"),
            style.label_size,
            style.label_color,
        );
    }
}
