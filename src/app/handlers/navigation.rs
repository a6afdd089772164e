//! Handler für Seitenwechsel und Anwendungssteuerung.

use crate::app::state::Page;
use crate::app::AppState;

/// Wechselt auf `page`. Auch ein Wechsel auf die aktive Seite mountet neu.
pub fn navigate(state: &mut AppState, page: Page) {
    if page == Page::NotFound {
        log::warn!("Unbekannte Seite, zeige {}", page.title());
    }
    state.mount_page(page);
    state.ui.status_message = None;
    log::info!("Seite gemountet: {} ({})", page.title(), page.path());
}

/// Markiert die Anwendung zum Beenden im nächsten Frame.
pub fn request_exit(state: &mut AppState) {
    state.should_exit = true;
}
