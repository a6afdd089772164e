//! Bezier-Playground Engine.
//!
//! Framework-unabhängiger Kern des Kurven-Editors: Punktspeicher, Interaktions-
//! Zustandsmaschine, Relativ-Modus, Renderer (gegen das `DrawSurface`-Trait)
//! und Präferenz-Speicher. Kein egui, kein I/O außer Optionen/Präferenzen.

pub mod core;
pub mod editor;
pub mod error;
pub mod preferences;
pub mod render;
pub mod shared;

pub use crate::core::{Axis, BoundsPolicy, Curve, CurveDegree};
pub use crate::editor::{
    canvas_local, derive_linked_points, format_coordinate, hit_test, CurveEditor,
    FieldDragOrigin, InteractionState, LinkOffsets, NumberFormat, RelativeLink,
};
pub use error::EditorError;
pub use preferences::{
    CurveTab, CurveTypeSelector, FilePreferenceStore, MemoryPreferenceStore, PreferenceStore,
    SELECTED_CURVE_KEY,
};
pub use render::{render_curve, CurveStyle, DrawCommand, DrawList, DrawSurface, Stroke};
pub use shared::EditorOptions;
