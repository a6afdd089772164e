//! Aufgezeichnete Zeichenbefehle als Übergabevertrag zwischen Engine und Frontend.

use super::surface::{DrawSurface, Stroke};
use glam::Vec2;

/// Ein einzelner Zeichenbefehl.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear {
        min: Vec2,
        max: Vec2,
    },
    Polyline {
        points: Vec<Vec2>,
        stroke: Stroke,
    },
    Quadratic {
        points: [Vec2; 3],
        stroke: Stroke,
    },
    Cubic {
        points: [Vec2; 4],
        stroke: Stroke,
    },
    Circle {
        center: Vec2,
        radius: f32,
        color: [f32; 4],
    },
    Text {
        pos: Vec2,
        text: String,
        size: f32,
        color: [f32; 4],
    },
}

/// Zeichenfläche, die Befehle nur aufzeichnet.
///
/// `clear` verwirft alle vorher aufgezeichneten Befehle.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DrawList {
    commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Spielt alle Befehle auf einer anderen Fläche ab.
    pub fn replay(&self, target: &mut dyn DrawSurface) {
        for command in &self.commands {
            match command {
                DrawCommand::Clear { min, max } => target.clear(*min, *max),
                DrawCommand::Polyline { points, stroke } => target.stroke_polyline(points, *stroke),
                DrawCommand::Quadratic { points, stroke } => {
                    target.stroke_quadratic(*points, *stroke)
                }
                DrawCommand::Cubic { points, stroke } => target.stroke_cubic(*points, *stroke),
                DrawCommand::Circle {
                    center,
                    radius,
                    color,
                } => target.fill_circle(*center, *radius, *color),
                DrawCommand::Text {
                    pos,
                    text,
                    size,
                    color,
                } => target.fill_text(*pos, text, *size, *color),
            }
        }
    }
}

impl DrawSurface for DrawList {
    // Ein Clear startet immer eine neue Aufzeichnung
    fn clear(&mut self, min: Vec2, max: Vec2) {
        self.commands.clear();
        self.commands.push(DrawCommand::Clear { min, max });
    }

    fn stroke_polyline(&mut self, points: &[Vec2], stroke: Stroke) {
        self.commands.push(DrawCommand::Polyline {
            points: points.to_vec(),
            stroke,
        });
    }

    fn stroke_quadratic(&mut self, points: [Vec2; 3], stroke: Stroke) {
        self.commands.push(DrawCommand::Quadratic { points, stroke });
    }

    fn stroke_cubic(&mut self, points: [Vec2; 4], stroke: Stroke) {
        self.commands.push(DrawCommand::Cubic { points, stroke });
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: [f32; 4]) {
        self.commands.push(DrawCommand::Circle {
            center,
            radius,
            color,
        });
    }

    fn fill_text(&mut self, pos: Vec2, text: &str, size: f32, color: [f32; 4]) {
        self.commands.push(DrawCommand::Text {
            pos,
            text: text.to_string(),
            size,
            color,
        });
    }
}
