use super::{EditorSlot, Page, PageContent};
use crate::app::CommandLog;
use bezier_playground_engine::{Axis, EditorOptions, MemoryPreferenceStore, PreferenceStore};
use std::collections::HashMap;

/// Reine Anzeige-Zustände der UI (Eingabepuffer, Statuszeile).
#[derive(Debug, Default)]
pub struct UiState {
    /// Text eines Koordinatenfelds, solange es den Fokus hat
    pub field_buffers: HashMap<(EditorSlot, usize, Axis), String>,
    /// Text des Tempo-Felds, solange es den Fokus hat
    pub tempo_buffer: Option<String>,
    /// Letzte Statusmeldung (z.B. ignorierte Eingabe)
    pub status_message: Option<String>,
}

impl UiState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Verwirft alle Puffer (beim Seitenwechsel).
    pub fn reset_buffers(&mut self) {
        self.field_buffers.clear();
        self.tempo_buffer = None;
    }
}

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Aktive Seite
    pub page: Page,
    /// Gemounteter Inhalt der aktiven Seite
    pub content: PageContent,
    /// Zählt jedes Neu-Mounten von Editoren (Seitenwechsel, Kurvenart)
    pub mount_generation: u64,
    /// Präferenz-Speicher, solange keine Curvature-Seite ihn hält
    pub preferences: Option<Box<dyn PreferenceStore>>,
    /// Laufzeit-Optionen (Canvas, Farben, Größen)
    pub options: EditorOptions,
    /// UI-State
    pub ui: UiState,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Signalisiert dem Host (eframe), die Anwendung kontrolliert zu beenden
    pub should_exit: bool,
}

impl AppState {
    /// Erstellt einen State auf der Startseite mit flüchtigem Präferenz-Speicher.
    pub fn new() -> Self {
        Self::with_preferences(Box::new(MemoryPreferenceStore::new()), EditorOptions::default())
    }

    /// Erstellt einen State mit injiziertem Präferenz-Speicher.
    pub fn with_preferences(store: Box<dyn PreferenceStore>, options: EditorOptions) -> Self {
        Self {
            page: Page::Home,
            content: PageContent::Static,
            mount_generation: 0,
            preferences: Some(store),
            options,
            ui: UiState::new(),
            command_log: CommandLog::new(),
            should_exit: false,
        }
    }

    /// Wechselt die Seite: alter Inhalt wird verworfen, neuer gemountet.
    pub fn mount_page(&mut self, page: Page) {
        let previous = std::mem::replace(&mut self.content, PageContent::Static);
        previous.unmount(&mut self.preferences);
        self.content = PageContent::mount(page, &self.options, &mut self.preferences);
        self.page = page;
        self.mount_generation += 1;
        self.ui.reset_buffers();
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("page", &self.page)
            .field("content", &self.content)
            .field("options", &self.options)
            .field("commands", &self.command_log.len())
            .finish_non_exhaustive()
    }
}
