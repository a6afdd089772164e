//! Handler für Laufzeit-Optionen.

use crate::app::state::EditorSlot;
use crate::app::AppState;
use bezier_playground_engine::EditorOptions;

/// Übernimmt neue Optionen und gibt sie an alle gemounteten Editoren weiter.
pub fn apply(state: &mut AppState, options: EditorOptions) {
    state.options = options.sanitized();
    for slot in EditorSlot::ALL {
        if let Some(editor) = state.content.editor_mut(slot) {
            editor.apply_options(&state.options);
        }
    }
}

/// Lädt die Optionen neu aus der Konfigurationsdatei.
pub fn reload(state: &mut AppState) {
    let path = EditorOptions::config_path();
    let options = EditorOptions::load_from_file(&path);
    apply(state, options);
}

/// Persistiert die aktuellen Optionen in der Konfigurationsdatei.
pub fn save(state: &AppState) -> anyhow::Result<()> {
    let path = EditorOptions::config_path();
    state.options.save_to_file(&path)
}
