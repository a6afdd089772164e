//! Status-Bar am unteren Bildschirmrand.

use crate::app::{AppState, EditorSlot};
use bezier_playground_engine::InteractionState;

fn describe(state: InteractionState) -> String {
    match state {
        InteractionState::Idle => "bereit".to_string(),
        InteractionState::DraggingPoint { index } => format!("ziehe P{index}"),
        InteractionState::DraggingField { index, axis, .. } => {
            format!("ziehe Feld P{index}.{}", axis.label())
        }
    }
}

fn editor_status(slot: EditorSlot, state: InteractionState) -> String {
    format!("{}: {}", slot.label(), describe(state))
}

/// Rendert die Status-Bar
pub fn render_status_bar(ctx: &egui::Context, state: &AppState) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label(format!("Seite: {}", state.page.path()));

            for (slot, editor) in state.content.editors() {
                ui.separator();
                ui.label(editor_status(slot, editor.state()));
            }

            ui.separator();
            ui.label(format!("Commands: {}", state.command_log.len()));

            if let Some(ref msg) = state.ui.status_message {
                ui.separator();
                ui.label(egui::RichText::new(format!("⚠ {}", msg)).color(egui::Color32::YELLOW));
            }
        });
    });
}
