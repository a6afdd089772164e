//! Mapping von UI-Intents auf mutierende App-Commands.

use super::state::{EditorSlot, Page};
use super::{AppCommand, AppIntent, AppState};
use bezier_playground_engine::EditorOptions;

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::NavigateRequested { path } => vec![AppCommand::Navigate {
            page: Page::from_path(&path),
        }],
        AppIntent::PageSelected { page } => vec![AppCommand::Navigate { page }],
        AppIntent::CurveTabSelected { tab } => vec![AppCommand::SelectCurveTab { tab }],

        // Ein Zeiger, eine Geste: solange irgendein Editor der Seite zieht,
        // greift kein anderer.
        AppIntent::CanvasPressed { slot, pos } => match state.content.active_slot() {
            Some(_) => vec![],
            None => vec![AppCommand::PressPointer { slot, pos }],
        },
        AppIntent::PointerMoved { slot, pos } => {
            if state.content.active_slot() == Some(slot) {
                vec![AppCommand::MovePointer { slot, pos }]
            } else {
                vec![]
            }
        }
        AppIntent::PointerReleased => match state.content.active_slot() {
            Some(_) => vec![AppCommand::ReleasePointer],
            None => vec![],
        },
        AppIntent::FieldDragStarted {
            slot,
            index,
            axis,
            pointer,
        } => match state.content.active_slot() {
            Some(_) => vec![],
            None => vec![AppCommand::BeginFieldDrag {
                slot,
                index,
                axis,
                pointer,
            }],
        },
        AppIntent::CoordinateTextChanged {
            slot,
            index,
            axis,
            text,
        } => vec![AppCommand::EnterCoordinate {
            slot,
            index,
            axis,
            text,
        }],

        AppIntent::RelativeToggled { slot } => match state.content.editor(slot) {
            Some(editor) => vec![AppCommand::SetRelative {
                slot,
                enabled: !editor.is_relative(),
            }],
            None => vec![],
        },
        // Splines: ein Schalter für beide Editoren
        AppIntent::EnforceBoundsToggled { slot, enabled } if slot.is_splines() => vec![
            AppCommand::SetEnforceBounds {
                slot: EditorSlot::SplinesQuadratic,
                enabled,
            },
            AppCommand::SetEnforceBounds {
                slot: EditorSlot::SplinesCubic,
                enabled,
            },
        ],
        AppIntent::EnforceBoundsToggled { slot, enabled } => {
            vec![AppCommand::SetEnforceBounds { slot, enabled }]
        }

        AppIntent::TempoTextChanged { text } => vec![AppCommand::SetTempo { text }],

        AppIntent::ReloadOptionsRequested => vec![AppCommand::ReloadOptions],
        AppIntent::SaveOptionsRequested => vec![AppCommand::SaveOptions],
        AppIntent::ResetOptionsRequested => vec![
            AppCommand::ApplyOptions {
                options: EditorOptions::default(),
            },
            AppCommand::SaveOptions,
        ],
        AppIntent::ExitRequested => vec![AppCommand::RequestExit],
    }
}

#[cfg(test)]
mod tests;
