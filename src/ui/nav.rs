//! Navigationsleiste mit Menü und Seiten-Dropdown.

use crate::app::{AppIntent, AppState, Page};

/// Rendert die Navigationsleiste
pub fn render_nav(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::TopBottomPanel::top("nav_bar").show(ctx, |ui| {
        egui::MenuBar::new().ui(ui, |ui| {
            ui.menu_button("Datei", |ui| {
                if ui.button("Optionen neu laden").clicked() {
                    events.push(AppIntent::ReloadOptionsRequested);
                    ui.close();
                }
                if ui.button("Optionen speichern").clicked() {
                    events.push(AppIntent::SaveOptionsRequested);
                    ui.close();
                }
                if ui.button("Optionen zurücksetzen").clicked() {
                    events.push(AppIntent::ResetOptionsRequested);
                    ui.close();
                }

                ui.separator();

                if ui.button("Beenden").clicked() {
                    events.push(AppIntent::ExitRequested);
                    ui.close();
                }
            });

            ui.separator();

            let mut selected = state.page;
            egui::ComboBox::from_id_salt("page_select")
                .selected_text(state.page.title())
                .show_ui(ui, |ui| {
                    for page in Page::NAVIGABLE {
                        ui.selectable_value(&mut selected, page, page.title());
                    }
                });
            if selected != state.page {
                events.push(AppIntent::PageSelected { page: selected });
            }
        });
    });

    events
}
