//! Interaktions-Zustand und Hit-Test.

use crate::core::Axis;
use glam::Vec2;

/// Startwerte einer Zahlenfeld-Drag-Geste (vertikal).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldDragOrigin {
    /// Feldwert beim Drücken
    pub initial_value: f32,
    /// Zeiger-Y beim Drücken
    pub initial_y: f32,
}

impl FieldDragOrigin {
    /// Neuer Feldwert: Zeiger nach oben (kleineres y) erhöht den Wert.
    pub fn value_at(&self, pointer_y: f32) -> f32 {
        self.initial_value + (self.initial_y - pointer_y)
    }
}

/// Was der Zeiger gerade bearbeitet.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum InteractionState {
    #[default]
    Idle,
    /// Kontrollpunkt `index` hängt am Zeiger
    DraggingPoint { index: usize },
    /// Koordinatenfeld (`index`, `axis`) wird per Vertikal-Drag verändert
    DraggingField {
        index: usize,
        axis: Axis,
        origin: FieldDragOrigin,
    },
}

impl InteractionState {
    pub fn is_idle(&self) -> bool {
        matches!(self, InteractionState::Idle)
    }

    /// Index des Punkts, der gerade direkt manipuliert wird.
    pub fn active_index(&self) -> Option<usize> {
        match *self {
            InteractionState::Idle => None,
            InteractionState::DraggingPoint { index }
            | InteractionState::DraggingField { index, .. } => Some(index),
        }
    }
}

/// Erster Punkt (niedrigster Index) innerhalb von `radius` um `pos`.
///
/// Die Grenze ist inklusiv (euklidischer Abstand `<= radius`).
pub fn hit_test(points: &[Vec2], pos: Vec2, radius: f32) -> Option<usize> {
    points.iter().position(|p| p.distance(pos) <= radius)
}

/// Rechnet eine Zeigerposition in Canvas-lokale Koordinaten um.
pub fn canvas_local(pointer: Vec2, canvas_origin: Vec2) -> Vec2 {
    pointer - canvas_origin
}
