//! Inhalt der aktiven Seite im zentralen Panel.

use super::curve_panel::render_curve_panel;
use crate::app::{AppIntent, AppState, EditorSlot, Page, PageContent, RenderScene, UiState};
use bezier_playground_engine::CurveTab;

/// Rendert die aktive Seite und gibt erzeugte Events zurück.
pub fn render_page(ctx: &egui::Context, state: &mut AppState, scene: &RenderScene) -> Vec<AppIntent> {
    let mut events = Vec::new();
    let AppState {
        page, content, ui: ui_state, ..
    } = state;

    egui::CentralPanel::default().show(ctx, |ui| {
        egui::ScrollArea::both().show(ui, |ui| match content {
            PageContent::Curvature { selector, editor } => {
                ui.horizontal(|ui| {
                    let mut selected = selector.selected();
                    for tab in CurveTab::ALL {
                        ui.selectable_value(&mut selected, tab, tab.label());
                    }
                    if selected != selector.selected() {
                        events.push(AppIntent::CurveTabSelected { tab: selected });
                    }
                });
                ui.separator();
                events.extend(render_curve_panel(
                    ui,
                    EditorSlot::Curvature,
                    editor,
                    scene.canvas(EditorSlot::Curvature),
                    ui_state,
                    true,
                ));
            }
            PageContent::Splines(splines) => {
                let mut enforce = splines.enforce_bounds();
                if ui.checkbox(&mut enforce, "Im Canvas halten").changed() {
                    events.push(AppIntent::EnforceBoundsToggled {
                        slot: EditorSlot::SplinesQuadratic,
                        enabled: enforce,
                    });
                }
                ui.separator();
                ui.horizontal_top(|ui| {
                    events.extend(render_curve_panel(
                        ui,
                        EditorSlot::SplinesQuadratic,
                        &splines.quadratic,
                        scene.canvas(EditorSlot::SplinesQuadratic),
                        ui_state,
                        false,
                    ));
                    ui.add_space(24.0);
                    events.extend(render_curve_panel(
                        ui,
                        EditorSlot::SplinesCubic,
                        &splines.cubic,
                        scene.canvas(EditorSlot::SplinesCubic),
                        ui_state,
                        false,
                    ));
                });
            }
            PageContent::Metronome { tempo_bpm } => {
                render_metronome(ui, *tempo_bpm, ui_state, &mut events);
            }
            PageContent::Static => render_static(ui, *page, &mut events),
        });
    });

    events
}

fn render_metronome(
    ui: &mut egui::Ui,
    tempo_bpm: u32,
    ui_state: &mut UiState,
    events: &mut Vec<AppIntent>,
) {
    ui.heading(Page::Metronome.title());
    ui.horizontal(|ui| {
        ui.label("Tempo (BPM):");
        let mut text = ui_state
            .tempo_buffer
            .clone()
            .unwrap_or_else(|| tempo_bpm.to_string());
        let response = ui.add(egui::TextEdit::singleline(&mut text).desired_width(64.0));
        if response.changed() {
            events.push(AppIntent::TempoTextChanged { text: text.clone() });
        }
        ui_state.tempo_buffer = response.has_focus().then_some(text);
    });
}

fn render_static(ui: &mut egui::Ui, page: Page, events: &mut Vec<AppIntent>) {
    match page {
        Page::Home => {
            ui.heading("Playground");
            ui.label("Kleine Experimente hinter einer gemeinsamen Navigation.");
            ui.add_space(8.0);
            for target in Page::NAVIGABLE.into_iter().skip(1) {
                if ui.link(format!("{} ({})", target.title(), target.path())).clicked() {
                    events.push(AppIntent::PageSelected { page: target });
                }
            }
        }
        Page::NotFound => {
            ui.heading("404");
            ui.label("Diese Seite gibt es nicht.");
            if ui.link("Zur Startseite").clicked() {
                events.push(AppIntent::PageSelected { page: Page::Home });
            }
        }
        other => {
            ui.heading(other.title());
            ui.label("Platzhalter.");
        }
    }
}
