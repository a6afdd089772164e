//! Generischer Kurven-Editor (Grad 2 + 3).
//!
//! Ein einziger, über `CurveDegree` parametrisierter Editor ersetzt die
//! getrennten Quadratisch-/Kubisch-Varianten.
//!
//! Aufgeteilt in:
//! - `interaction`  — Zustandsmaschine (`Idle | DraggingPoint | DraggingField`) + Hit-Test
//! - `relative`     — Relativ-Modus: Offsets innerer Punkte zu ihren Ankern
//! - `numeric`      — Parsen der Koordinaten-Textfelder
//! - `curve_editor` — `CurveEditor`, der alles zusammenführt

mod curve_editor;
mod interaction;
mod numeric;
mod relative;

pub use curve_editor::CurveEditor;
pub use interaction::{canvas_local, hit_test, FieldDragOrigin, InteractionState};
pub use numeric::{format_coordinate, NumberFormat};
pub use relative::{derive_linked_points, LinkOffsets, RelativeLink};

#[cfg(test)]
mod tests;
