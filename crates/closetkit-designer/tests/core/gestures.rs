use closetkit_core::{LayoutError, PartKind};
use closetkit_designer::model::Rotation;
use closetkit_designer::{DesignerState, DragMode, Edge, GestureKind};

fn session_with_unit(preset: &str) -> (DesignerState, u64) {
    let mut state = DesignerState::new();
    let id = state.add_unit(preset, 0.0, 0.0).unwrap();
    (state, id)
}

#[test]
fn test_preview_never_grows_history() {
    let (mut state, id) = session_with_unit("wardrobe-600");
    let len = state.history_len();

    for raw in [100.0, 240.0, 620.0] {
        state.preview_move(id, raw, 0.0, DragMode::Plan).unwrap();
    }
    assert_eq!(state.history_len(), len);
    assert_eq!(state.unit(id).map(|u| u.x), Some(600.0));
    assert_eq!(
        state.active_gesture().map(|g| g.kind),
        Some(GestureKind::Move(DragMode::Plan))
    );
}

#[test]
fn test_commit_records_exactly_one_entry() {
    let (mut state, id) = session_with_unit("wardrobe-600");
    let len = state.history_len();

    state.preview_move(id, 300.0, 0.0, DragMode::Plan).unwrap();
    state.preview_move(id, 480.0, 0.0, DragMode::Plan).unwrap();
    let placed = state.commit_move(id, 1010.0, 0.0, DragMode::Plan).unwrap();

    assert_eq!((placed.x, placed.y), (1000.0, 0.0));
    assert_eq!(state.history_len(), len + 1);
    assert!(state.active_gesture().is_none());

    assert!(state.undo());
    assert_eq!(state.unit(id).map(|u| u.x), Some(0.0));
}

#[test]
fn test_cancel_restores_committed_position() {
    let (mut state, id) = session_with_unit("wardrobe-600");
    let len = state.history_len();

    state.preview_move(id, 1500.0, 900.0, DragMode::Plan).unwrap();
    assert!(state.cancel_gesture());
    assert_eq!(state.unit(id).map(|u| (u.x, u.z)), Some((0.0, 0.0)));
    assert_eq!(state.history_len(), len);
    assert!(!state.cancel_gesture());
}

#[test]
fn test_finish_gesture_commits_last_preview() {
    let (mut state, id) = session_with_unit("wardrobe-600");
    assert_eq!(
        state.finish_gesture(id),
        Err(LayoutError::NoActiveGesture { id })
    );

    state.preview_move(id, 1210.0, 0.0, DragMode::Plan).unwrap();
    let len = state.history_len();
    state.finish_gesture(id).unwrap();
    assert_eq!(state.history_len(), len + 1);
    assert_eq!(state.unit(id).map(|u| u.x), Some(1200.0));
}

#[test]
fn test_settling_in_place_is_not_recorded() {
    let (mut state, id) = session_with_unit("wardrobe-600");
    let len = state.history_len();
    state.commit_move(id, 10.0, 5.0, DragMode::Plan).unwrap();
    assert_eq!(state.unit(id).map(|u| (u.x, u.z)), Some((0.0, 0.0)));
    assert_eq!(state.history_len(), len);
}

#[test]
fn test_free_drag_pushes_out_of_neighbors() {
    let mut state = DesignerState::new();
    state.add_unit("wardrobe-900", 0.0, 0.0).unwrap();
    let id = state.add_unit("wardrobe-600", 2000.0, 0.0).unwrap();

    let placed = state.preview_move(id, 800.0, 0.0, DragMode::Free).unwrap();
    assert_eq!(placed.x, 900.0);

    // Free dragging does not grid snap.
    let placed = state.preview_move(id, 2013.0, 1207.0, DragMode::Free).unwrap();
    assert_eq!((placed.x, placed.y), (2013.0, 1207.0));
}

#[test]
fn test_gesture_on_another_unit_abandons_the_first() {
    let mut state = DesignerState::new();
    let a = state.add_unit("wardrobe-600", 0.0, 0.0).unwrap();
    let b = state.add_unit("wardrobe-600", 2000.0, 0.0).unwrap();

    state.preview_move(a, 1000.0, 1000.0, DragMode::Plan).unwrap();
    state.preview_move(b, 3000.0, 0.0, DragMode::Plan).unwrap();

    assert_eq!(state.unit(a).map(|u| (u.x, u.z)), Some((0.0, 0.0)));
    assert_eq!(state.active_gesture().map(|g| g.unit_id), Some(b));
}

#[test]
fn test_locked_and_unknown_units_cannot_move() {
    let (mut state, id) = session_with_unit("wardrobe-600");
    state.set_unit_locked(id, true).unwrap();
    assert_eq!(
        state.preview_move(id, 500.0, 0.0, DragMode::Plan),
        Err(LayoutError::UnitLocked { id })
    );
    assert_eq!(
        state.preview_resize(7, Edge::Right, 500.0),
        Err(LayoutError::UnknownUnit { id: 7 })
    );
    assert!(state.active_gesture().is_none());
}

#[test]
fn test_non_finite_input_is_rejected() {
    let (mut state, id) = session_with_unit("wardrobe-600");
    assert!(matches!(
        state.preview_move(id, f64::NAN, 0.0, DragMode::Plan),
        Err(LayoutError::InvalidDimensions { .. })
    ));
    assert_eq!(state.unit(id).map(|u| u.x), Some(0.0));
}

#[test]
fn test_resize_is_measured_from_gesture_start() {
    let (mut state, id) = session_with_unit("wardrobe-600");
    let len = state.history_len();

    let rect = state.preview_resize(id, Edge::Right, 790.0).unwrap();
    assert_eq!(rect.width, 800.0);
    let rect = state.preview_resize(id, Edge::Right, 1010.0).unwrap();
    assert_eq!(rect.width, 1000.0);
    assert_eq!(state.history_len(), len);

    let rect = state.commit_resize(id, Edge::Right, 1010.0).unwrap();
    assert_eq!(rect.x, 0.0);
    assert_eq!(state.unit(id).map(|u| u.width), Some(1000.0));
    assert_eq!(state.history_len(), len + 1);
}

#[test]
fn test_resize_of_rotated_unit_changes_its_width() {
    let (mut state, id) = session_with_unit("wardrobe-900");
    state.rotate_unit(id).unwrap();
    assert_eq!(state.unit(id).map(|u| u.rotation), Some(Rotation::Deg90));

    state.commit_resize(id, Edge::Bottom, 1010.0).unwrap();
    let unit = state.unit(id).unwrap();
    assert_eq!((unit.width, unit.depth), (1000.0, 600.0));
    assert_eq!(unit.plan_size(), (600.0, 1000.0));
}

#[test]
fn test_resizing_a_corner_keeps_it_square() {
    let (mut state, id) = session_with_unit("corner-l-900");
    state.commit_resize(id, Edge::Right, 1090.0).unwrap();
    let unit = state.unit(id).unwrap();
    assert_eq!((unit.width, unit.depth), (1100.0, 1100.0));
}

#[test]
fn test_edit_mid_gesture_discards_preview() {
    let (mut state, id) = session_with_unit("wardrobe-600");
    let len = state.history_len();

    state.preview_move(id, 620.0, 0.0, DragMode::Plan).unwrap();
    let other = state.add_unit("drawer-600", 2400.0, 0.0).unwrap();

    assert!(state.active_gesture().is_none());
    assert_eq!(state.unit(id).map(|u| u.x), Some(0.0));
    assert_eq!(state.history_len(), len + 1);

    let parts = state.unit(other).map(|u| u.parts.len());
    state.preview_move(id, 1210.0, 0.0, DragMode::Plan).unwrap();
    state.add_part(other, PartKind::Shelf, 300.0, None).unwrap();
    assert_eq!(state.unit(id).map(|u| u.x), Some(0.0));

    assert!(state.undo());
    assert_eq!(state.unit(other).map(|u| u.parts.len()), parts);
    assert_eq!(state.unit(id).map(|u| u.x), Some(0.0));
    assert!(state.undo());
    assert!(state.unit(other).is_none());
    assert_eq!(state.unit(id).map(|u| u.x), Some(0.0));
}

#[test]
fn test_room_resize_mid_gesture_clamps_committed_position() {
    let (mut state, id) = session_with_unit("wardrobe-600");
    state.preview_move(id, 2000.0, 0.0, DragMode::Plan).unwrap();
    state.set_room_size(3000.0, 2400.0).unwrap();

    assert!(state.active_gesture().is_none());
    assert_eq!(state.unit(id).map(|u| u.x), Some(0.0));
}
