//! Builder für Render-Szenen aus dem AppState.

use super::state::{EditorSlot, Page};
use crate::app::AppState;
use bezier_playground_engine::{CurveEditor, CurveStyle, DrawList};
use std::collections::HashMap;
use std::rc::Rc;

/// Fertig aufgezeichnete Zeichenbefehle eines Canvas.
#[derive(Debug, Clone)]
pub struct CanvasScene {
    pub slot: EditorSlot,
    pub canvas_size: [f32; 2],
    pub draw_list: Rc<DrawList>,
    /// Revision des Editors zum Zeitpunkt der Aufzeichnung
    pub revision: u64,
}

/// Alles, was das Frontend für einen Frame zeichnen muss.
#[derive(Debug, Clone)]
pub struct RenderScene {
    pub page: Page,
    pub canvases: Vec<CanvasScene>,
}

impl RenderScene {
    pub fn canvas(&self, slot: EditorSlot) -> Option<&CanvasScene> {
        self.canvases.iter().find(|c| c.slot == slot)
    }
}

#[derive(Debug, Clone)]
struct CachedList {
    mount_generation: u64,
    revision: u64,
    draw_list: Rc<DrawList>,
}

/// Hält die zuletzt aufgezeichnete `DrawList` je Editor-Slot.
///
/// Neu aufgezeichnet wird nur, wenn sich Revision oder Mount-Generation
/// des Editors geändert haben.
#[derive(Debug, Default)]
pub struct SceneCache {
    entries: HashMap<EditorSlot, CachedList>,
    rebuilds: u64,
}

impl SceneCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Anzahl bisher neu aufgezeichneter DrawLists.
    pub fn rebuilds(&self) -> u64 {
        self.rebuilds
    }

    fn draw_list(
        &mut self,
        slot: EditorSlot,
        mount_generation: u64,
        editor: &CurveEditor,
        style: &CurveStyle,
    ) -> Rc<DrawList> {
        let revision = editor.revision();
        if let Some(cached) = self.entries.get(&slot) {
            if cached.mount_generation == mount_generation && cached.revision == revision {
                return Rc::clone(&cached.draw_list);
            }
        }

        let draw_list = Rc::new(editor.draw_list(style));
        self.rebuilds += 1;
        self.entries.insert(
            slot,
            CachedList {
                mount_generation,
                revision,
                draw_list: Rc::clone(&draw_list),
            },
        );
        draw_list
    }
}

/// Baut eine RenderScene aus dem aktuellen AppState.
pub fn build(state: &AppState, cache: &mut SceneCache) -> RenderScene {
    let style = CurveStyle::from_options(&state.options);
    let editors = state.content.editors();
    cache
        .entries
        .retain(|slot, _| editors.iter().any(|(mounted, _)| mounted == slot));

    let canvases = editors
        .into_iter()
        .map(|(slot, editor)| CanvasScene {
            slot,
            canvas_size: style.canvas_size,
            draw_list: cache.draw_list(slot, state.mount_generation, editor, &style),
            revision: editor.revision(),
        })
        .collect();

    RenderScene {
        page: state.page,
        canvases,
    }
}

#[cfg(test)]
mod tests {
    use super::{build, SceneCache};
    use crate::app::state::{EditorSlot, Page};
    use crate::app::AppState;
    use bezier_playground_engine::{Axis, CurveTab, DrawCommand};
    use std::rc::Rc;

    #[test]
    fn build_records_one_canvas_per_mounted_editor() {
        let mut state = AppState::new();
        let mut cache = SceneCache::new();
        assert!(build(&state, &mut cache).canvases.is_empty());

        state.mount_page(Page::Splines);
        let scene = build(&state, &mut cache);
        assert_eq!(scene.page, Page::Splines);
        assert_eq!(scene.canvases.len(), 2);
        assert!(scene.canvas(EditorSlot::SplinesQuadratic).is_some());
        assert!(scene.canvas(EditorSlot::Curvature).is_none());
    }

    #[test]
    fn build_uses_canvas_size_from_options() {
        let mut state = AppState::new();
        state.options.canvas_width = 640.0;
        state.mount_page(Page::Curvature);

        let scene = build(&state, &mut SceneCache::new());
        let canvas = scene
            .canvas(EditorSlot::Curvature)
            .expect("Curvature-Canvas erwartet");
        assert_eq!(canvas.canvas_size, [640.0, 300.0]);
        assert!(matches!(
            canvas.draw_list.commands().first(),
            Some(DrawCommand::Clear { max, .. }) if max.x == 640.0
        ));
    }

    #[test]
    fn unchanged_revision_reuses_cached_draw_list() {
        let mut state = AppState::new();
        state.mount_page(Page::Curvature);
        let mut cache = SceneCache::new();

        let first = build(&state, &mut cache);
        let second = build(&state, &mut cache);

        let a = &first.canvas(EditorSlot::Curvature).expect("Canvas").draw_list;
        let b = &second.canvas(EditorSlot::Curvature).expect("Canvas").draw_list;
        assert!(Rc::ptr_eq(a, b));
        assert_eq!(cache.rebuilds(), 1);
    }

    #[test]
    fn editor_mutation_rebuilds_only_its_slot() {
        let mut state = AppState::new();
        state.mount_page(Page::Splines);
        let mut cache = SceneCache::new();
        build(&state, &mut cache);
        assert_eq!(cache.rebuilds(), 2);

        if let Some(editor) = state.content.editor_mut(EditorSlot::SplinesCubic) {
            assert!(editor.enter_text(0, Axis::X, "80"));
        }
        let scene = build(&state, &mut cache);

        assert_eq!(cache.rebuilds(), 3);
        let cubic = scene.canvas(EditorSlot::SplinesCubic).expect("Canvas");
        assert!(cubic
            .draw_list
            .commands()
            .iter()
            .any(|c| matches!(c, DrawCommand::Cubic { points, .. } if points[0].x == 80.0)));
    }

    #[test]
    fn remount_with_same_revision_is_not_served_from_cache() {
        let mut state = AppState::new();
        state.mount_page(Page::Curvature);
        let mut cache = SceneCache::new();
        build(&state, &mut cache);

        crate::app::handlers::curve::select_curve_tab(&mut state, CurveTab::Cubic)
            .expect("Tab-Wechsel auf der Curvature-Seite");
        let scene = build(&state, &mut cache);

        assert_eq!(cache.rebuilds(), 2);
        let canvas = scene.canvas(EditorSlot::Curvature).expect("Canvas");
        assert!(canvas
            .draw_list
            .commands()
            .iter()
            .any(|c| matches!(c, DrawCommand::Cubic { .. })));
    }
}
