use crate::app::state::{EditorSlot, Page};
use bezier_playground_engine::{Axis, CurveTab};

/// App-Intent Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
/// Zeigerpositionen sind Canvas-lokal.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Pfad öffnen (Startargument oder Link)
    NavigateRequested { path: String },
    /// Seite im Navigations-Dropdown gewählt
    PageSelected { page: Page },
    /// Kurvenart auf der Curvature-Seite gewählt
    CurveTabSelected { tab: CurveTab },
    /// Primärtaste über einem Canvas gedrückt
    CanvasPressed { slot: EditorSlot, pos: glam::Vec2 },
    /// Zeiger bewegt, während ein Editor eine Geste hält
    PointerMoved { slot: EditorSlot, pos: glam::Vec2 },
    /// Primärtaste irgendwo losgelassen
    PointerReleased,
    /// Vertikal-Drag auf einem Koordinatenfeld begonnen
    FieldDragStarted {
        slot: EditorSlot,
        index: usize,
        axis: Axis,
        pointer: glam::Vec2,
    },
    /// Text eines Koordinatenfelds geändert
    CoordinateTextChanged {
        slot: EditorSlot,
        index: usize,
        axis: Axis,
        text: String,
    },
    /// Relativ/Absolut-Knopf gedrückt
    RelativeToggled { slot: EditorSlot },
    /// Canvas-Begrenzung umgeschaltet
    EnforceBoundsToggled { slot: EditorSlot, enabled: bool },
    /// Text des Tempo-Felds geändert
    TempoTextChanged { text: String },
    /// Optionen aus der Konfigurationsdatei neu laden
    ReloadOptionsRequested,
    /// Aktuelle Optionen in die Konfigurationsdatei schreiben
    SaveOptionsRequested,
    /// Optionen auf Standardwerte zurücksetzen
    ResetOptionsRequested,
    /// Anwendung beenden
    ExitRequested,
}
