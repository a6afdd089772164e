//! Application State — zentrale Datenhaltung.
//!
//! Der aktive Seiteninhalt (`PageContent`) besitzt die gemounteten Editoren.
//! Ein Seitenwechsel verwirft ihn und mountet frische Editoren.

mod app_state;
mod page;
mod page_content;

pub use app_state::{AppState, UiState};
pub use page::Page;
pub use page_content::{EditorSlot, PageContent, SplinesState, DEFAULT_TEMPO_BPM};
