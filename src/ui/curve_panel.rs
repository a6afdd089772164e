//! Ein Kurven-Editor: Canvas, Koordinatenfelder, Modus-Schalter.

use super::canvas::EguiSurface;
use crate::app::{AppIntent, CanvasScene, EditorSlot, UiState};
use bezier_playground_engine::{canvas_local, format_coordinate, Axis, CurveEditor};

const FIELD_WIDTH: f32 = 64.0;

fn to_vec2(pos: egui::Pos2) -> glam::Vec2 {
    glam::Vec2::new(pos.x, pos.y)
}

/// Rendert einen Editor und gibt erzeugte Events zurück.
///
/// `bounds_toggle` blendet den eigenen Begrenzungs-Schalter ein; auf der
/// Splines-Seite gibt es stattdessen einen gemeinsamen.
pub fn render_curve_panel(
    ui: &mut egui::Ui,
    slot: EditorSlot,
    editor: &CurveEditor,
    scene: Option<&CanvasScene>,
    ui_state: &mut UiState,
    bounds_toggle: bool,
) -> Vec<AppIntent> {
    let mut events = Vec::new();

    ui.vertical(|ui| {
        ui.heading(editor.degree().display_name());

        let origin = render_canvas(ui, slot, editor, scene, &mut events);

        ui.add_space(6.0);
        ui.horizontal(|ui| {
            if editor.supports_relative() {
                let label = if editor.is_relative() {
                    "Modus: Relativ"
                } else {
                    "Modus: Absolut"
                };
                if ui
                    .button(label)
                    .on_hover_text("Innere Punkte folgen ihren Ankern")
                    .clicked()
                {
                    events.push(AppIntent::RelativeToggled { slot });
                }
            }

            if bounds_toggle {
                let mut enforce = editor.enforce_bounds();
                if ui.checkbox(&mut enforce, "Im Canvas halten").changed() {
                    events.push(AppIntent::EnforceBoundsToggled {
                        slot,
                        enabled: enforce,
                    });
                }
            }
        });

        ui.add_space(6.0);
        render_coordinate_grid(ui, slot, editor, ui_state, origin, &mut events);
    });

    events
}

/// Zeichnet das Canvas und erzeugt Zeiger-Events. Gibt den Canvas-Ursprung zurück.
fn render_canvas(
    ui: &mut egui::Ui,
    slot: EditorSlot,
    editor: &CurveEditor,
    scene: Option<&CanvasScene>,
    events: &mut Vec<AppIntent>,
) -> glam::Vec2 {
    let [width, height] = scene.map_or([0.0, 0.0], |s| s.canvas_size);
    let (rect, response) =
        ui.allocate_exact_size(egui::vec2(width, height), egui::Sense::click_and_drag());

    let painter = ui.painter_at(rect);
    if let Some(scene) = scene {
        scene
            .draw_list
            .replay(&mut EguiSurface::new(&painter, rect.min));
    }
    painter.rect_stroke(
        rect,
        0.0,
        egui::Stroke::new(1.0, egui::Color32::GRAY),
        egui::StrokeKind::Inside,
    );

    let origin = to_vec2(rect.min);
    let (pressed, moving, pointer) = ui.input(|i| {
        (
            i.pointer.primary_pressed(),
            i.pointer.is_moving(),
            i.pointer.latest_pos(),
        )
    });

    if pressed && response.hovered() {
        if let Some(pointer) = pointer {
            events.push(AppIntent::CanvasPressed {
                slot,
                pos: canvas_local(to_vec2(pointer), origin),
            });
        }
    }

    // Auch außerhalb des Canvas weiterziehen; Loslassen sammelt die App-Schleife
    if !editor.state().is_idle() && moving {
        if let Some(pointer) = pointer {
            events.push(AppIntent::PointerMoved {
                slot,
                pos: canvas_local(to_vec2(pointer), origin),
            });
        }
    }

    origin
}

fn render_coordinate_grid(
    ui: &mut egui::Ui,
    slot: EditorSlot,
    editor: &CurveEditor,
    ui_state: &mut UiState,
    origin: glam::Vec2,
    events: &mut Vec<AppIntent>,
) {
    egui::Grid::new(("coordinates", slot))
        .num_columns(3)
        .spacing([8.0, 4.0])
        .show(ui, |ui| {
            for index in 0..editor.curve().len() {
                ui.label(format!("P{index}"));
                for axis in [Axis::X, Axis::Y] {
                    ui.horizontal(|ui| {
                        render_coordinate_field(
                            ui, slot, editor, index, axis, origin, ui_state, events,
                        );
                    });
                }
                ui.end_row();
            }
        });
}

#[allow(clippy::too_many_arguments)]
fn render_coordinate_field(
    ui: &mut egui::Ui,
    slot: EditorSlot,
    editor: &CurveEditor,
    index: usize,
    axis: Axis,
    origin: glam::Vec2,
    ui_state: &mut UiState,
    events: &mut Vec<AppIntent>,
) {
    let key = (slot, index, axis);
    let value = axis.get(editor.curve().get(index));
    let mut text = ui_state
        .field_buffers
        .get(&key)
        .cloned()
        .unwrap_or_else(|| format_coordinate(value));

    ui.label(axis.label());
    let mut response = ui.add(egui::TextEdit::singleline(&mut text).desired_width(FIELD_WIDTH));
    if editor.supports_field_drag() {
        response = response.on_hover_cursor(egui::CursorIcon::ResizeVertical);
    }

    if response.changed() {
        events.push(AppIntent::CoordinateTextChanged {
            slot,
            index,
            axis,
            text: text.clone(),
        });
    }

    // Vertikales Ziehen im Feld verschiebt den Wert statt Text zu markieren
    if editor.supports_field_drag() && response.drag_started() {
        let (press, latest) = ui.input(|i| (i.pointer.press_origin(), i.pointer.latest_pos()));
        if let (Some(press), Some(latest)) = (press, latest) {
            if is_vertical_drag(to_vec2(press), to_vec2(latest)) {
                response.surrender_focus();
                events.push(AppIntent::FieldDragStarted {
                    slot,
                    index,
                    axis,
                    pointer: canvas_local(to_vec2(press), origin),
                });
                ui_state.field_buffers.remove(&key);
                return;
            }
        }
    }

    // Puffer nur mit Fokus; ohne Fokus zeigt das Feld den aktuellen Wert
    if response.has_focus() {
        ui_state.field_buffers.insert(key, text);
    } else {
        ui_state.field_buffers.remove(&key);
    }
}

/// Ein Ziehen im Zahlenfeld gilt als Wert-Geste, wenn es überwiegend vertikal ist.
fn is_vertical_drag(press: glam::Vec2, latest: glam::Vec2) -> bool {
    let delta = latest - press;
    delta.y.abs() > delta.x.abs()
}
