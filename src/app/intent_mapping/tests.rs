use crate::app::state::{EditorSlot, Page};
use crate::app::{AppCommand, AppIntent, AppState};
use bezier_playground_engine::Axis;
use glam::Vec2;

use super::map_intent_to_commands;

fn splines_state() -> AppState {
    let mut state = AppState::new();
    state.mount_page(Page::Splines);
    state
}

#[test]
fn navigate_requested_resolves_path() {
    let state = AppState::new();

    let commands = map_intent_to_commands(
        &state,
        AppIntent::NavigateRequested {
            path: "/splines".into(),
        },
    );

    assert_eq!(commands.len(), 1);
    assert!(matches!(
        commands[0],
        AppCommand::Navigate {
            page: Page::Splines
        }
    ));
}

#[test]
fn navigate_requested_unknown_path_maps_to_not_found() {
    let state = AppState::new();

    let commands = map_intent_to_commands(
        &state,
        AppIntent::NavigateRequested {
            path: "/nirgendwo".into(),
        },
    );

    assert!(matches!(
        commands[0],
        AppCommand::Navigate {
            page: Page::NotFound
        }
    ));
}

#[test]
fn splines_bounds_toggle_maps_to_both_editors_in_order() {
    let state = splines_state();

    let commands = map_intent_to_commands(
        &state,
        AppIntent::EnforceBoundsToggled {
            slot: EditorSlot::SplinesCubic,
            enabled: true,
        },
    );

    assert_eq!(commands.len(), 2);
    assert!(matches!(
        commands[0],
        AppCommand::SetEnforceBounds {
            slot: EditorSlot::SplinesQuadratic,
            enabled: true
        }
    ));
    assert!(matches!(
        commands[1],
        AppCommand::SetEnforceBounds {
            slot: EditorSlot::SplinesCubic,
            enabled: true
        }
    ));
}

#[test]
fn relative_toggle_flips_current_mode() {
    let mut state = splines_state();

    let commands = map_intent_to_commands(
        &state,
        AppIntent::RelativeToggled {
            slot: EditorSlot::SplinesCubic,
        },
    );
    assert!(matches!(
        commands[0],
        AppCommand::SetRelative { enabled: true, .. }
    ));

    if let Some(editor) = state.content.editor_mut(EditorSlot::SplinesCubic) {
        editor.set_relative(true);
    }
    let commands = map_intent_to_commands(
        &state,
        AppIntent::RelativeToggled {
            slot: EditorSlot::SplinesCubic,
        },
    );
    assert!(matches!(
        commands[0],
        AppCommand::SetRelative { enabled: false, .. }
    ));
}

#[test]
fn relative_toggle_without_mounted_editor_maps_to_nothing() {
    let state = AppState::new();

    let commands = map_intent_to_commands(
        &state,
        AppIntent::RelativeToggled {
            slot: EditorSlot::Curvature,
        },
    );

    assert!(commands.is_empty());
}

#[test]
fn canvas_press_is_dropped_while_other_editor_drags() {
    let mut state = splines_state();
    if let Some(editor) = state.content.editor_mut(EditorSlot::SplinesQuadratic) {
        editor.pointer_pressed(Vec2::new(50.0, 150.0));
    }

    let commands = map_intent_to_commands(
        &state,
        AppIntent::CanvasPressed {
            slot: EditorSlot::SplinesCubic,
            pos: Vec2::new(350.0, 150.0),
        },
    );
    assert!(commands.is_empty());

    let commands = map_intent_to_commands(
        &state,
        AppIntent::FieldDragStarted {
            slot: EditorSlot::SplinesCubic,
            index: 0,
            axis: Axis::X,
            pointer: Vec2::ZERO,
        },
    );
    assert!(commands.is_empty());
}

#[test]
fn pointer_moves_only_reach_the_dragging_editor() {
    let mut state = splines_state();
    if let Some(editor) = state.content.editor_mut(EditorSlot::SplinesCubic) {
        editor.pointer_pressed(Vec2::new(350.0, 150.0));
    }

    let other = map_intent_to_commands(
        &state,
        AppIntent::PointerMoved {
            slot: EditorSlot::SplinesQuadratic,
            pos: Vec2::new(1.0, 1.0),
        },
    );
    assert!(other.is_empty());

    let own = map_intent_to_commands(
        &state,
        AppIntent::PointerMoved {
            slot: EditorSlot::SplinesCubic,
            pos: Vec2::new(1.0, 1.0),
        },
    );
    assert_eq!(own.len(), 1);
}

#[test]
fn pointer_release_while_idle_maps_to_nothing() {
    let state = splines_state();

    let commands = map_intent_to_commands(&state, AppIntent::PointerReleased);

    assert!(commands.is_empty());
}

#[test]
fn reset_options_applies_defaults_then_saves() {
    let state = AppState::new();

    let commands = map_intent_to_commands(&state, AppIntent::ResetOptionsRequested);

    assert_eq!(commands.len(), 2);
    assert!(matches!(commands[0], AppCommand::ApplyOptions { .. }));
    assert!(matches!(commands[1], AppCommand::SaveOptions));
}
