//! Integration tests for the Editor API
//!
//! These tests drive full editing sessions through the public facade:
//! reconciliation, pointer gestures, variant switching, persistence, and the
//! editor/display rendering contract.

use keepsake::element::ElementId;
use keepsake::geometry::{Point, Size};
use keepsake::interaction::{Handle, PointerGrab};
use keepsake::render::{render, RenderStyle};
use keepsake::scene::SizeVariant;
use keepsake::sync::{SyncInputs, SyncMode};
use keepsake::Editor;

fn three_photo_inputs() -> SyncInputs {
    SyncInputs {
        photo_count: 3,
        ..SyncInputs::default()
    }
}

fn style_with_photos(count: usize) -> RenderStyle {
    RenderStyle {
        photos: (0..count).map(|i| format!("ref-{i}")).collect(),
        message: "be mine?".to_string(),
        ..RenderStyle::default()
    }
}

#[test]
fn test_editor_api_exists() {
    let _editor = Editor::default();
}

#[test]
fn test_photos_scatter_into_both_variants() {
    let editor = Editor::with_inputs(three_photo_inputs());

    for variant in SizeVariant::ALL {
        let scene = editor.pair().scene(variant);
        for index in 0..3 {
            assert!(
                scene.contains(&ElementId::photo(index)),
                "photo-{index} missing in {variant}"
            );
        }
        assert!(scene.contains(&ElementId::text()));
        assert!(scene.contains(&ElementId::actions()));
    }
}

#[test]
fn test_drag_commits_into_exported_record() {
    let mut editor = Editor::with_inputs(three_photo_inputs());
    let id = ElementId::photo(0);

    editor.pointer_down(&id, Point::new(40.0, 60.0), false, PointerGrab::untracked());
    editor.pointer_move(Point::new(80.0, 110.0));
    editor.pointer_up(Point::new(80.0, 110.0));

    let record = editor.to_record();
    let photo = record
        .compact
        .iter()
        .find(|r| r.id == "photo-0")
        .expect("photo-0 missing from record");
    assert_eq!((photo.x, photo.y), (70.0, 100.0));
}

#[test]
fn test_variant_switch_clears_selection_and_cancels_gesture() {
    let mut editor = Editor::with_inputs(three_photo_inputs());
    let id = ElementId::photo(0);

    editor.pointer_down(&id, Point::new(40.0, 60.0), false, PointerGrab::untracked());
    assert_eq!(editor.selection().len(), 1);

    editor.set_variant(SizeVariant::Wide);
    assert!(editor.selection().is_empty());

    // The wide scene was untouched by the compact drag.
    let wide_photo = editor.scene().get(&id).expect("photo-0 missing in wide");
    assert_eq!((wide_photo.frame.x, wide_photo.frame.y), (60.0, 60.0));
}

#[test]
fn test_delete_selection_removes_elements() {
    let mut editor = Editor::with_inputs(three_photo_inputs());

    editor.pointer_down(
        &ElementId::photo(0),
        Point::new(40.0, 60.0),
        false,
        PointerGrab::untracked(),
    );
    editor.pointer_up(Point::new(40.0, 60.0));
    editor.pointer_down(
        &ElementId::photo(1),
        Point::new(120.0, 60.0),
        true,
        PointerGrab::untracked(),
    );
    editor.pointer_up(Point::new(120.0, 60.0));

    editor.delete_selection();
    assert!(!editor.scene().contains(&ElementId::photo(0)));
    assert!(!editor.scene().contains(&ElementId::photo(1)));
    assert!(editor.scene().contains(&ElementId::photo(2)));
    assert!(editor.selection().is_empty());
}

#[test]
fn test_resize_through_facade_enforces_floor() {
    let mut editor = Editor::with_inputs(three_photo_inputs());
    let id = ElementId::text();

    editor.pointer_down(&id, Point::new(50.0, 240.0), false, PointerGrab::untracked());
    editor.pointer_up(Point::new(50.0, 240.0));
    editor.resize_handle_down(
        Handle::SouthEast,
        Point::new(210.0, 280.0),
        PointerGrab::untracked(),
    );
    editor.pointer_move(Point::new(-400.0, -400.0));
    editor.pointer_up(Point::new(-400.0, -400.0));

    let frame = editor.scene().get(&id).expect("text-1 missing").frame;
    assert!(frame.width >= 50.0);
    assert!(frame.height >= 50.0);
}

#[test]
fn test_json_round_trip_through_editor() {
    let mut editor = Editor::with_inputs(three_photo_inputs());

    // Make the layout non-default first.
    editor.pointer_down(
        &ElementId::photo(2),
        Point::new(40.0, 150.0),
        false,
        PointerGrab::untracked(),
    );
    editor.pointer_move(Point::new(90.0, 300.0));
    editor.pointer_up(Point::new(90.0, 300.0));

    let json = editor.to_json().expect("Failed to serialize layout");
    let restored = Editor::from_json(&json, three_photo_inputs());
    assert_eq!(restored.pair(), editor.pair());
}

#[test]
fn test_malformed_json_falls_back_to_default_scatter() {
    let editor = Editor::from_json("{ this is not json", three_photo_inputs());

    let scene = editor.pair().scene(SizeVariant::Compact);
    assert!(scene.contains(&ElementId::photo(0)));
    assert!(scene.contains(&ElementId::text()));
}

#[test]
fn test_media_card_survives_link_removal_through_facade() {
    let mut editor = Editor::with_inputs(SyncInputs {
        has_media_link: true,
        ..SyncInputs::default()
    });

    // Move the card, clear the link, re-add it.
    editor.pointer_down(
        &ElementId::media(),
        Point::new(100.0, 380.0),
        false,
        PointerGrab::untracked(),
    );
    editor.pointer_move(Point::new(105.0, 320.0));
    editor.pointer_up(Point::new(105.0, 320.0));
    let moved = editor.scene().get(&ElementId::media()).unwrap().frame;

    editor.set_inputs(SyncInputs::default());
    editor.set_inputs(SyncInputs {
        has_media_link: true,
        ..SyncInputs::default()
    });

    assert_eq!(editor.scene().get(&ElementId::media()).unwrap().frame, moved);
}

#[test]
fn test_authoring_mode_session() {
    let mut editor = Editor::with_inputs(SyncInputs {
        photo_count: 0,
        has_media_link: false,
        mode: SyncMode::authoring(4),
    });
    assert!(editor.scene().contains(&ElementId::photo(3)));
    assert!(editor.scene().contains(&ElementId::media()));

    // Shrinking the placeholder count drops the extra slots.
    editor.set_inputs(SyncInputs {
        photo_count: 0,
        has_media_link: false,
        mode: SyncMode::authoring(2),
    });
    assert!(!editor.scene().contains(&ElementId::photo(3)));
    assert!(editor.scene().contains(&ElementId::photo(1)));
}

#[test]
fn test_editor_and_display_render_identically() {
    // The display surface renders the exported pair standalone; its output
    // must match the editor's own preview render exactly.
    let mut editor = Editor::with_inputs(three_photo_inputs());
    editor.pointer_down(
        &ElementId::photo(1),
        Point::new(120.0, 60.0),
        false,
        PointerGrab::untracked(),
    );
    editor.pointer_move(Point::new(60.0, 200.0));
    editor.pointer_up(Point::new(60.0, 200.0));

    let style = style_with_photos(3);
    let viewport = Size::new(330.0, 714.0);

    let editor_view = editor.render(viewport, &style);

    let json = editor.to_json().expect("Failed to serialize layout");
    let display = Editor::from_json(&json, three_photo_inputs());
    let display_view = render(display.pair().scene(SizeVariant::Compact), viewport, &style);

    assert_eq!(editor_view, display_view);
    assert_eq!(editor_view.scale, 1.5);
}
