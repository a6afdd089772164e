//! Relativ-Modus: innere Punkte der kubischen Kurve folgen ihren Ankern.
//!
//! P1 hängt an P0, P2 hängt an P3. Beim Einschalten werden die Offsets
//! `P1 − P0` und `P2 − P3` eingefroren; danach leitet `derive_linked_points`
//! nach jeder Mutation die inneren Punkte aus Anker + Offset ab.

use crate::core::{Curve, CurveDegree};
use glam::Vec2;

/// Eingefrorene Offsets der inneren Punkte.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinkOffsets {
    /// P1 − P0
    pub start: Vec2,
    /// P2 − P3
    pub end: Vec2,
}

impl LinkOffsets {
    /// Offsets aus den aktuellen Positionen.
    pub fn capture(points: &[Vec2; 4]) -> Self {
        Self {
            start: points[1] - points[0],
            end: points[2] - points[3],
        }
    }
}

/// Leitet P1/P2 aus den Ankern ab.
///
/// Der direkt manipulierte Punkt `edited` bleibt unverändert.
pub fn derive_linked_points(
    points: [Vec2; 4],
    offsets: LinkOffsets,
    edited: Option<usize>,
) -> [Vec2; 4] {
    let mut out = points;
    if edited != Some(1) {
        out[1] = points[0] + offsets.start;
    }
    if edited != Some(2) {
        out[2] = points[3] + offsets.end;
    }
    out
}

/// Zustand des Relativ-Modus (`None` = Absolut-Modus).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RelativeLink {
    offsets: Option<LinkOffsets>,
}

impl RelativeLink {
    pub fn is_enabled(&self) -> bool {
        self.offsets.is_some()
    }

    pub fn offsets(&self) -> Option<LinkOffsets> {
        self.offsets
    }

    /// Schaltet ein und erfasst frische Offsets. Nur für kubische Kurven.
    pub fn enable(&mut self, curve: &Curve) -> bool {
        let Some(points) = cubic_points(curve) else {
            return false;
        };
        self.offsets = Some(LinkOffsets::capture(&points));
        true
    }

    /// Schaltet aus; die Punkte behalten ihre absoluten Positionen.
    pub fn disable(&mut self) {
        self.offsets = None;
    }

    /// Synchronisiert die Kurve nach einer Mutation an `edited`.
    ///
    /// Wurde ein innerer Punkt direkt bearbeitet, wird sein Offset neu erfasst;
    /// alle anderen inneren Punkte werden aus Anker + Offset abgeleitet.
    pub fn sync(&mut self, curve: &mut Curve, edited: Option<usize>) {
        let Some(offsets) = self.offsets.as_mut() else {
            return;
        };
        let Some(points) = cubic_points(curve) else {
            return;
        };
        match edited {
            Some(1) => offsets.start = points[1] - points[0],
            Some(2) => offsets.end = points[2] - points[3],
            _ => {}
        }
        let linked = derive_linked_points(points, *offsets, edited);
        for (index, point) in linked.into_iter().enumerate() {
            if point != points[index] {
                curve.set(index, point);
            }
        }
    }
}

fn cubic_points(curve: &Curve) -> Option<[Vec2; 4]> {
    if curve.degree() != CurveDegree::Cubic {
        return None;
    }
    <[Vec2; 4]>::try_from(curve.points()).ok()
}
