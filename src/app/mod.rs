//! Application-Layer: Controller, State, Events und Handler.

pub mod command_log;
pub mod controller;
pub mod events;
pub mod handlers;
mod intent_mapping;
pub mod render_scene;
/// Application State
///
/// Dieses Modul verwaltet die aktive Seite und ihre gemounteten Editoren.
pub mod state;

pub use command_log::CommandLog;
pub use controller::AppController;
pub use events::{AppCommand, AppIntent};
pub use render_scene::{CanvasScene, RenderScene, SceneCache};
pub use state::{AppState, EditorSlot, Page, PageContent, SplinesState, UiState};
