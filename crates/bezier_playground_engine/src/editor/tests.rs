use super::{
    canvas_local, derive_linked_points, hit_test, CurveEditor, InteractionState, LinkOffsets,
    NumberFormat,
};
use crate::core::{Axis, CurveDegree};
use crate::render::{CurveStyle, DrawCommand};
use crate::shared::EditorOptions;
use approx::assert_relative_eq;
use glam::Vec2;

fn quadratic() -> CurveEditor {
    CurveEditor::new(CurveDegree::Quadratic, &EditorOptions::default())
}

fn cubic() -> CurveEditor {
    CurveEditor::new(CurveDegree::Cubic, &EditorOptions::default())
}

/// Drückt auf `from`, zieht nach `to` und lässt los.
fn drag(editor: &mut CurveEditor, from: Vec2, to: Vec2) {
    editor
        .pointer_pressed(from)
        .expect("Startposition sollte einen Punkt treffen");
    editor.pointer_moved(to);
    editor.pointer_released();
}

// ── Hit-Test ──

#[test]
fn test_hit_test_within_radius_selects_point() {
    let points = [Vec2::new(50.0, 150.0), Vec2::new(200.0, 50.0)];
    assert_eq!(hit_test(&points, Vec2::new(203.0, 54.0), 5.0), Some(1));
    // Grenze inklusiv
    assert_eq!(hit_test(&points, Vec2::new(55.0, 150.0), 5.0), Some(0));
}

#[test]
fn test_hit_test_outside_radius_selects_none() {
    let points = [Vec2::new(50.0, 150.0), Vec2::new(200.0, 50.0)];
    assert_eq!(hit_test(&points, Vec2::new(204.0, 54.0), 5.0), None);
    assert_eq!(hit_test(&points, Vec2::new(120.0, 100.0), 5.0), None);
}

#[test]
fn test_hit_test_overlapping_points_prefers_lowest_index() {
    let points = [
        Vec2::new(10.0, 10.0),
        Vec2::new(12.0, 10.0),
        Vec2::new(10.0, 10.0),
    ];
    assert_eq!(hit_test(&points, Vec2::new(11.0, 10.0), 5.0), Some(0));
}

#[test]
fn test_canvas_local_subtracts_origin() {
    assert_eq!(
        canvas_local(Vec2::new(320.0, 240.0), Vec2::new(100.0, 40.0)),
        Vec2::new(220.0, 200.0)
    );
}

// ── Zustandsmaschine ──

#[test]
fn test_press_on_empty_area_stays_idle() {
    let mut editor = quadratic();
    assert_eq!(editor.pointer_pressed(Vec2::new(5.0, 5.0)), None);
    assert_eq!(editor.state(), InteractionState::Idle);
    assert!(!editor.pointer_moved(Vec2::new(100.0, 100.0)));
}

#[test]
fn test_quadratic_drag_scenario() {
    let mut editor = quadratic();
    let style = CurveStyle::default();

    assert_eq!(editor.pointer_pressed(Vec2::new(200.0, 50.0)), Some(1));
    assert_eq!(editor.state(), InteractionState::DraggingPoint { index: 1 });
    assert!(editor.pointer_moved(Vec2::new(210.0, 60.0)));

    assert_eq!(
        editor.curve().to_pairs(),
        vec![[50.0, 150.0], [210.0, 60.0], [350.0, 150.0]]
    );

    let list = editor.draw_list(&style);
    let redrawn = list.commands().iter().any(|c| {
        matches!(c, DrawCommand::Quadratic { points, .. }
            if *points == [Vec2::new(50.0, 150.0), Vec2::new(210.0, 60.0), Vec2::new(350.0, 150.0)])
    });
    assert!(redrawn, "Redraw sollte die neuen Punkte enthalten");
}

#[test]
fn test_release_ends_drag_anywhere() {
    let mut editor = quadratic();
    editor.pointer_pressed(Vec2::new(50.0, 150.0));
    editor.pointer_moved(Vec2::new(900.0, -40.0));
    assert!(editor.pointer_released());
    assert!(editor.state().is_idle());

    // Nach dem Loslassen bewegt sich nichts mehr
    let before = editor.curve().clone();
    assert!(!editor.pointer_moved(Vec2::new(10.0, 10.0)));
    assert_eq!(editor.curve(), &before);
    assert!(!editor.pointer_released());
}

#[test]
fn test_drag_without_bounds_writes_exact_position() {
    let mut editor = quadratic();
    drag(&mut editor, Vec2::new(350.0, 150.0), Vec2::new(-30.0, 420.0));
    assert_eq!(editor.curve().get(2), Vec2::new(-30.0, 420.0));
}

#[test]
fn test_drag_with_bounds_clamps_to_canvas() {
    let mut editor = cubic();
    editor.set_enforce_bounds(true);
    drag(&mut editor, Vec2::new(350.0, 150.0), Vec2::new(-30.0, 420.0));
    assert_eq!(editor.curve().get(3), Vec2::new(0.0, 300.0));
}

#[test]
fn test_curve_length_is_invariant() {
    let mut quad = quadratic();
    let mut cub = cubic();
    cub.set_relative(true);

    for step in 0..20 {
        let offset = Vec2::splat(step as f32);
        quad.pointer_pressed(quad.curve().get(step % 3));
        quad.pointer_moved(Vec2::new(100.0, 100.0) + offset);
        quad.pointer_released();
        quad.enter_text(step % 3, Axis::X, "abc");

        cub.pointer_pressed(cub.curve().get(step % 4));
        cub.pointer_moved(Vec2::new(150.0, 120.0) - offset);
        cub.pointer_released();
        cub.enter_text(step % 4, Axis::Y, &format!("{}", step * 3));
    }

    assert_eq!(quad.curve().len(), 3);
    assert_eq!(cub.curve().len(), 4);
}

#[test]
fn test_revision_increments_on_mutation_only() {
    let mut editor = quadratic();
    let start = editor.revision();

    editor.pointer_moved(Vec2::new(1.0, 1.0));
    assert_eq!(editor.revision(), start);

    editor.enter_text(0, Axis::X, "60");
    assert!(editor.revision() > start);
}

// ── Zahlenfelder ──

#[test]
fn test_invalid_text_is_ignored_in_both_editors() {
    for mut editor in [quadratic(), cubic()] {
        let before = editor.curve().get(1);
        assert!(!editor.enter_text(1, Axis::X, "abc"));
        assert!(!editor.enter_text(1, Axis::Y, ""));
        assert!(!editor.enter_text(1, Axis::Y, "NaN"));
        assert_eq!(editor.curve().get(1), before);
        assert!(editor.curve().get(1).is_finite());
    }
}

#[test]
fn test_quadratic_parses_integers_cubic_parses_floats() {
    let mut quad = quadratic();
    let mut cub = cubic();
    assert_eq!(quad.number_format(), NumberFormat::Integer);
    assert_eq!(cub.number_format(), NumberFormat::Float);

    assert!(quad.enter_text(1, Axis::Y, "72.9"));
    assert!(cub.enter_text(1, Axis::Y, " 72.5 "));

    assert_eq!(quad.curve().get(1).y, 72.0);
    assert_eq!(cub.curve().get(1).y, 72.5);
}

#[test]
fn test_number_format_rejects_infinite_values() {
    assert!(NumberFormat::Float.parse("inf").is_err());
    assert!(NumberFormat::Integer.parse("-infinity").is_err());
    assert_eq!(NumberFormat::Integer.parse("-12.8"), Ok(-12.0));
}

#[test]
fn test_number_format_reads_leading_number() {
    assert_eq!(NumberFormat::Float.parse("12abc"), Ok(12.0));
    assert_eq!(NumberFormat::Float.parse("7px"), Ok(7.0));
    assert_eq!(NumberFormat::Float.parse(" -.5e1x"), Ok(-5.0));
    assert_eq!(NumberFormat::Float.parse("3e"), Ok(3.0));
    assert_eq!(NumberFormat::Integer.parse("1e3"), Ok(1.0));
    assert_eq!(NumberFormat::Integer.parse("+42 px"), Ok(42.0));

    assert!(NumberFormat::Float.parse("px7").is_err());
    assert!(NumberFormat::Float.parse("-").is_err());
    assert!(NumberFormat::Float.parse(".").is_err());
    assert!(NumberFormat::Integer.parse(".5").is_err());
}

#[test]
fn test_cubic_enter_text_accepts_mixed_input() {
    let mut editor = cubic();
    assert!(editor.enter_text(0, Axis::X, "12abc"));
    assert_eq!(editor.curve().get(0).x, 12.0);
}

#[test]
fn test_numeric_entry_ignores_bounds_policy() {
    let mut editor = cubic();
    editor.set_enforce_bounds(true);
    assert!(editor.enter_text(0, Axis::X, "999"));
    assert_eq!(editor.curve().get(0).x, 999.0);
}

// ── Feld-Drag ──

#[test]
fn test_field_drag_upwards_increases_value() {
    let mut editor = cubic();
    assert!(editor.begin_field_drag(2, Axis::X, Vec2::new(500.0, 400.0)));
    assert!(matches!(
        editor.state(),
        InteractionState::DraggingField { index: 2, axis: Axis::X, .. }
    ));

    editor.pointer_moved(Vec2::new(480.0, 370.0));
    assert_relative_eq!(editor.curve().get(2).x, 280.0);

    editor.pointer_moved(Vec2::new(480.0, 410.0));
    assert_relative_eq!(editor.curve().get(2).x, 240.0);
    assert_relative_eq!(editor.curve().get(2).y, 250.0);

    editor.pointer_released();
    assert!(editor.state().is_idle());
}

#[test]
fn test_field_drag_not_available_for_quadratic() {
    let mut editor = quadratic();
    assert!(!editor.begin_field_drag(1, Axis::Y, Vec2::ZERO));
    assert!(editor.state().is_idle());
}

#[test]
fn test_field_drag_blocks_canvas_press() {
    let mut editor = cubic();
    editor.begin_field_drag(0, Axis::Y, Vec2::new(0.0, 0.0));
    assert_eq!(editor.pointer_pressed(Vec2::new(150.0, 50.0)), None);
}

// ── Relativ-Modus ──

#[test]
fn test_relative_mode_only_for_cubic() {
    let mut quad = quadratic();
    assert!(!quad.set_relative(true));
    assert!(!quad.is_relative());

    let mut cub = cubic();
    assert!(cub.set_relative(true));
    assert!(cub.is_relative());
}

#[test]
fn test_relative_captures_offsets_on_enable() {
    let mut editor = cubic();
    editor.set_relative(true);
    assert_eq!(
        editor.relative_link().offsets(),
        Some(LinkOffsets {
            start: Vec2::new(100.0, -100.0),
            end: Vec2::new(-100.0, 100.0),
        })
    );
}

#[test]
fn test_relative_moving_p0_moves_p1_scenario() {
    let mut editor = cubic();
    editor.set_relative(true);
    let p2_before = editor.curve().get(2);

    drag(&mut editor, Vec2::new(50.0, 150.0), Vec2::new(60.0, 140.0));

    assert_eq!(editor.curve().get(0), Vec2::new(60.0, 140.0));
    assert_eq!(editor.curve().get(1), Vec2::new(160.0, 40.0));
    assert_eq!(editor.curve().get(2), p2_before);
}

#[test]
fn test_relative_moving_p3_moves_p2_by_same_delta() {
    let mut editor = cubic();
    editor.set_relative(true);

    drag(&mut editor, Vec2::new(350.0, 150.0), Vec2::new(330.0, 175.0));

    assert_eq!(editor.curve().get(2), Vec2::new(230.0, 275.0));
    assert_eq!(editor.curve().get(1), Vec2::new(150.0, 50.0));
}

#[test]
fn test_relative_anchor_numeric_entry_moves_interior() {
    let mut editor = cubic();
    editor.set_relative(true);
    assert!(editor.enter_text(0, Axis::X, "70"));
    assert_eq!(editor.curve().get(1), Vec2::new(170.0, 50.0));
}

#[test]
fn test_relative_direct_drag_of_interior_updates_offset() {
    let mut editor = cubic();
    editor.set_relative(true);

    drag(&mut editor, Vec2::new(150.0, 50.0), Vec2::new(120.0, 80.0));
    assert_eq!(editor.curve().get(1), Vec2::new(120.0, 80.0));
    assert_eq!(
        editor.relative_link().offsets().map(|o| o.start),
        Some(Vec2::new(70.0, -70.0))
    );

    // Anker danach bewegen: neuer Offset gilt
    drag(&mut editor, Vec2::new(50.0, 150.0), Vec2::new(0.0, 100.0));
    assert_eq!(editor.curve().get(1), Vec2::new(70.0, 30.0));
}

#[test]
fn test_relative_roundtrip_keeps_interior_points() {
    let mut editor = cubic();
    let p1 = editor.curve().get(1);
    let p2 = editor.curve().get(2);

    editor.set_relative(true);
    editor.set_relative(false);
    editor.set_relative(true);

    assert_eq!(editor.curve().get(1), p1);
    assert_eq!(editor.curve().get(2), p2);
}

#[test]
fn test_absolute_mode_does_not_link() {
    let mut editor = cubic();
    editor.set_relative(true);
    editor.set_relative(false);

    drag(&mut editor, Vec2::new(50.0, 150.0), Vec2::new(60.0, 140.0));
    assert_eq!(editor.curve().get(1), Vec2::new(150.0, 50.0));
}

#[test]
fn test_reenable_captures_fresh_offsets() {
    let mut editor = cubic();
    drag(&mut editor, Vec2::new(150.0, 50.0), Vec2::new(100.0, 100.0));
    editor.set_relative(true);
    assert_eq!(
        editor.relative_link().offsets().map(|o| o.start),
        Some(Vec2::new(50.0, -50.0))
    );
}

#[test]
fn test_derive_linked_points_skips_edited_index() {
    let points = [
        Vec2::new(0.0, 0.0),
        Vec2::new(5.0, 5.0),
        Vec2::new(8.0, 8.0),
        Vec2::new(10.0, 0.0),
    ];
    let offsets = LinkOffsets {
        start: Vec2::new(1.0, 1.0),
        end: Vec2::new(-1.0, 1.0),
    };

    let all = derive_linked_points(points, offsets, None);
    assert_eq!(all[1], Vec2::new(1.0, 1.0));
    assert_eq!(all[2], Vec2::new(9.0, 1.0));

    let skip = derive_linked_points(points, offsets, Some(2));
    assert_eq!(skip[1], Vec2::new(1.0, 1.0));
    assert_eq!(skip[2], Vec2::new(8.0, 8.0));
}
