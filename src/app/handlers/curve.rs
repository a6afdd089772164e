//! Handler für die Kurven-Editoren (Zeiger, Zahlenfelder, Modi).

use crate::app::state::{EditorSlot, Page, PageContent};
use crate::app::AppState;
use bezier_playground_engine::{Axis, CurveEditor, CurveTab};

/// Liefert den gemounteten Editor oder einen Fehler mit Seitenkontext.
fn editor_mut(state: &mut AppState, slot: EditorSlot) -> anyhow::Result<&mut CurveEditor> {
    let page = state.page;
    state
        .content
        .editor_mut(slot)
        .ok_or_else(|| anyhow::anyhow!("Kein Editor {:?} auf Seite {}", slot, page.path()))
}

fn ensure_index(editor: &CurveEditor, index: usize) -> anyhow::Result<()> {
    if index >= editor.curve().len() {
        anyhow::bail!(
            "Punktindex {} außerhalb: {}",
            index,
            editor.degree().display_name()
        );
    }
    Ok(())
}

/// Greift den Punkt unter dem Zeiger (falls einer im Pick-Radius liegt).
pub fn press(state: &mut AppState, slot: EditorSlot, pos: glam::Vec2) -> anyhow::Result<()> {
    editor_mut(state, slot)?.pointer_pressed(pos);
    Ok(())
}

/// Setzt die laufende Geste fort.
pub fn move_pointer(state: &mut AppState, slot: EditorSlot, pos: glam::Vec2) -> anyhow::Result<()> {
    editor_mut(state, slot)?.pointer_moved(pos);
    Ok(())
}

/// Beendet jede laufende Geste auf der Seite.
pub fn release(state: &mut AppState) {
    for slot in EditorSlot::ALL {
        if let Some(editor) = state.content.editor_mut(slot) {
            editor.pointer_released();
        }
    }
}

/// Startet den Vertikal-Drag auf einem Koordinatenfeld.
pub fn begin_field_drag(
    state: &mut AppState,
    slot: EditorSlot,
    index: usize,
    axis: Axis,
    pointer: glam::Vec2,
) -> anyhow::Result<()> {
    let editor = editor_mut(state, slot)?;
    ensure_index(editor, index)?;
    editor.begin_field_drag(index, axis, pointer);
    Ok(())
}

/// Übernimmt eine Texteingabe; ungültiger Text lässt den Wert stehen.
pub fn enter_coordinate(
    state: &mut AppState,
    slot: EditorSlot,
    index: usize,
    axis: Axis,
    text: &str,
) -> anyhow::Result<()> {
    let editor = editor_mut(state, slot)?;
    ensure_index(editor, index)?;
    let accepted = editor.enter_text(index, axis, text);
    state.ui.status_message = if accepted {
        None
    } else {
        Some(format!("Eingabe ignoriert: P{index}.{} = {text:?}", axis.label()))
    };
    Ok(())
}

/// Schaltet den Relativ-Modus (nur kubisch).
pub fn set_relative(state: &mut AppState, slot: EditorSlot, enabled: bool) -> anyhow::Result<()> {
    let editor = editor_mut(state, slot)?;
    if !editor.supports_relative() {
        anyhow::bail!(
            "Relativ-Modus nicht verfügbar: {}",
            editor.degree().display_name()
        );
    }
    editor.set_relative(enabled);
    Ok(())
}

/// Setzt die Canvas-Begrenzung eines Editors.
pub fn set_enforce_bounds(
    state: &mut AppState,
    slot: EditorSlot,
    enabled: bool,
) -> anyhow::Result<()> {
    editor_mut(state, slot)?.set_enforce_bounds(enabled);
    Ok(())
}

/// Wählt die Kurvenart der Curvature-Seite.
///
/// Bei einem Wechsel wird der bisherige Editor verworfen und ein frischer
/// mit Standardpunkten gemountet.
pub fn select_curve_tab(state: &mut AppState, tab: CurveTab) -> anyhow::Result<()> {
    let PageContent::Curvature { selector, editor } = &mut state.content else {
        anyhow::bail!("Kurvenauswahl nur auf {}", Page::Curvature.path());
    };
    if selector.select(tab) {
        *editor = CurveEditor::new(tab.degree(), &state.options);
        state.mount_generation += 1;
        log::info!("Kurvenart gewechselt: {}", tab.as_str());
    }
    Ok(())
}
