use crate::app::state::{EditorSlot, Page};
use bezier_playground_engine::{Axis, CurveTab, EditorOptions};

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone)]
pub enum AppCommand {
    /// Seite wechseln (unmountet die alte, mountet die neue)
    Navigate { page: Page },
    /// Kurvenart wählen und im Präferenz-Speicher ablegen
    SelectCurveTab { tab: CurveTab },
    /// Punkt unter dem Zeiger greifen
    PressPointer { slot: EditorSlot, pos: glam::Vec2 },
    /// Laufende Geste eines Editors fortsetzen
    MovePointer { slot: EditorSlot, pos: glam::Vec2 },
    /// Alle laufenden Gesten der Seite beenden
    ReleasePointer,
    /// Feld-Drag starten
    BeginFieldDrag {
        slot: EditorSlot,
        index: usize,
        axis: Axis,
        pointer: glam::Vec2,
    },
    /// Texteingabe in ein Koordinatenfeld übernehmen
    EnterCoordinate {
        slot: EditorSlot,
        index: usize,
        axis: Axis,
        text: String,
    },
    /// Relativ-Modus setzen
    SetRelative { slot: EditorSlot, enabled: bool },
    /// Canvas-Begrenzung eines Editors setzen
    SetEnforceBounds { slot: EditorSlot, enabled: bool },
    /// Tempo-Eingabe übernehmen
    SetTempo { text: String },
    /// Neue Optionen übernehmen und an gemountete Editoren weitergeben
    ApplyOptions { options: EditorOptions },
    /// Optionen aus der Konfigurationsdatei laden
    ReloadOptions,
    /// Optionen in die Konfigurationsdatei schreiben
    SaveOptions,
    /// Anwendung beenden
    RequestExit,
}
