//! Begrenzung von Zeiger-Schreibvorgängen auf die Canvas-Fläche.

use glam::Vec2;

/// Schalter + Canvas-Größe: wenn aktiv, werden Positionen auf
/// `[0, width] × [0, height]` begrenzt.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundsPolicy {
    pub enabled: bool,
    /// Canvas-Größe in Pixeln [Breite, Höhe]
    pub canvas_size: [f32; 2],
}

impl BoundsPolicy {
    pub fn new(canvas_size: [f32; 2]) -> Self {
        Self {
            enabled: false,
            canvas_size,
        }
    }

    /// Wendet die Policy an. Deaktiviert: Position unverändert.
    pub fn apply(&self, pos: Vec2) -> Vec2 {
        if !self.enabled {
            return pos;
        }
        let [width, height] = self.canvas_size;
        Vec2::new(pos.x.clamp(0.0, width), pos.y.clamp(0.0, height))
    }
}
