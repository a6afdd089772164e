//! Bezier-Playground Library.
//! App-Layer und egui-Frontend als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod ui;

pub use app::{
    AppCommand, AppController, AppIntent, AppState, CanvasScene, EditorSlot, Page, PageContent,
    RenderScene,
};
pub use bezier_playground_engine as engine;
pub use bezier_playground_engine::{
    Axis, CurveDegree, CurveEditor, CurveTab, EditorOptions, FilePreferenceStore,
    InteractionState, MemoryPreferenceStore, PreferenceStore, SELECTED_CURVE_KEY,
};
