//! Punktspeicher einer Bézier-Kurve fester Länge.

use crate::error::EditorError;
use crate::shared::{CUBIC_DEFAULT_POINTS, QUADRATIC_DEFAULT_POINTS};
use glam::Vec2;

/// Grad der Bézier-Kurve
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CurveDegree {
    /// Quadratisch: P0, P1, P2
    Quadratic,
    /// Kubisch: P0, P1, P2, P3
    Cubic,
}

impl CurveDegree {
    /// Anzahl der Kontrollpunkte für diesen Grad.
    pub const fn point_count(self) -> usize {
        match self {
            CurveDegree::Quadratic => 3,
            CurveDegree::Cubic => 4,
        }
    }

    /// Index des End-Ankers (letzter Punkt).
    pub const fn end_index(self) -> usize {
        self.point_count() - 1
    }

    /// True für P0 und den letzten Punkt.
    pub const fn is_anchor(self, index: usize) -> bool {
        index == 0 || index == self.end_index()
    }

    /// Anzeigename im UI.
    pub const fn display_name(self) -> &'static str {
        match self {
            CurveDegree::Quadratic => "Quadratische Bézier-Kurve",
            CurveDegree::Cubic => "Kubische Bézier-Kurve",
        }
    }
}

/// Koordinatenachse eines Punkts (für Zahlenfelder)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
}

impl Axis {
    /// Liest die Komponente dieser Achse aus `point`.
    pub fn get(self, point: Vec2) -> f32 {
        match self {
            Axis::X => point.x,
            Axis::Y => point.y,
        }
    }

    /// Ersetzt die Komponente dieser Achse in `point`.
    pub fn with(self, point: Vec2, value: f32) -> Vec2 {
        match self {
            Axis::X => Vec2::new(value, point.y),
            Axis::Y => Vec2::new(point.x, value),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Axis::X => "X",
            Axis::Y => "Y",
        }
    }
}

/// Geordnete Kontrollpunkte einer Kurve.
///
/// Die Länge ist nach dem Erstellen fix (3 bzw. 4). P0 ist immer der
/// Start-Anker, der letzte Punkt immer der End-Anker.
#[derive(Debug, Clone, PartialEq)]
pub struct Curve {
    degree: CurveDegree,
    points: Vec<Vec2>,
}

impl Curve {
    /// Erstellt eine Kurve mit den fest eingestellten Startpunkten.
    pub fn with_defaults(degree: CurveDegree) -> Self {
        let points = match degree {
            CurveDegree::Quadratic => QUADRATIC_DEFAULT_POINTS.to_vec(),
            CurveDegree::Cubic => CUBIC_DEFAULT_POINTS.to_vec(),
        };
        Self { degree, points }
    }

    /// Erstellt eine Kurve aus expliziten Punkten.
    ///
    /// Schlägt fehl, wenn die Punktanzahl nicht zum Grad passt.
    pub fn from_points(degree: CurveDegree, points: &[Vec2]) -> Result<Self, EditorError> {
        if points.len() != degree.point_count() {
            return Err(EditorError::PointCountMismatch {
                degree,
                expected: degree.point_count(),
                actual: points.len(),
            });
        }
        Ok(Self {
            degree,
            points: points.to_vec(),
        })
    }

    pub fn degree(&self) -> CurveDegree {
        self.degree
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Eine Kurve hat immer mindestens drei Punkte.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Punkt an `index`. Panikt bei Index außerhalb der Kurvenlänge.
    pub fn get(&self, index: usize) -> Vec2 {
        self.points[index]
    }

    /// Ersetzt den Punkt an `index`. Panikt bei Index außerhalb der Kurvenlänge.
    pub fn set(&mut self, index: usize, point: Vec2) {
        self.points[index] = point;
    }

    /// Schreibt eine einzelne Koordinate.
    pub fn set_axis(&mut self, index: usize, axis: Axis, value: f32) {
        let point = self.points[index];
        self.points[index] = axis.with(point, value);
    }

    /// Read-only Sicht auf alle Punkte in Reihenfolge.
    pub fn points(&self) -> &[Vec2] {
        &self.points
    }

    /// Punkte als `[x, y]`-Paare (für Anzeige und Tests).
    pub fn to_pairs(&self) -> Vec<[f32; 2]> {
        self.points.iter().map(|p| p.to_array()).collect()
    }
}
