//! Handler für das Tempo-Feld der Metronom-Seite.

use crate::app::state::{Page, PageContent};
use crate::app::AppState;

/// Übernimmt eine Tempo-Eingabe in BPM.
///
/// Nur positive Ganzzahlen werden übernommen, alles andere wird ignoriert.
pub fn set_tempo(state: &mut AppState, text: &str) -> anyhow::Result<()> {
    let PageContent::Metronome { tempo_bpm } = &mut state.content else {
        anyhow::bail!("Tempo nur auf {}", Page::Metronome.path());
    };
    match text.trim().parse::<u32>() {
        Ok(value) if value > 0 => {
            *tempo_bpm = value;
            state.ui.status_message = None;
        }
        _ => {
            log::debug!("Tempo-Eingabe ignoriert: {text:?}");
            state.ui.status_message = Some(format!("Tempo ignoriert: {text:?}"));
        }
    }
    Ok(())
}
