use closetkit_core::{LayoutError, PartKind, PresetType, UnitKind};
use closetkit_designer::model::{DoorUpdate, PartUpdate, Rotation, UnitUpdate, Wall};
use closetkit_designer::DesignerState;

#[test]
fn test_new_session_has_base_snapshot() {
    let state = DesignerState::new();
    assert!(state.units().is_empty());
    assert_eq!(state.version(), 0);
    assert_eq!(state.history_len(), 1);
    assert!(!state.can_undo());
    assert!(!state.is_modified);
}

#[test]
fn test_add_unit_records_one_snapshot() {
    let mut state = DesignerState::new();
    let id = state.add_unit("wardrobe-600", 100.0, 0.0).unwrap();

    let unit = state.unit(id).unwrap();
    assert_eq!(unit.kind, UnitKind::Standard);
    assert_eq!((unit.x, unit.z), (100.0, 0.0));
    assert_eq!(unit.parts.len(), 2);
    assert_eq!(state.version(), 1);
    assert_eq!(state.history_len(), 2);
    assert!(state.is_modified);
}

#[test]
fn test_unknown_preset_changes_nothing() {
    let mut state = DesignerState::new();
    let err = state.add_unit("wardrobe-750", 0.0, 0.0).unwrap_err();
    assert_eq!(
        err,
        LayoutError::InvalidPreset {
            preset: "wardrobe-750".to_string()
        }
    );
    assert!(state.units().is_empty());
    assert_eq!(state.version(), 0);
    assert_eq!(state.history_len(), 1);

    assert!(matches!(
        state.add_preset_unit(PresetType::Wardrobe, 750.0, 0.0, 0.0),
        Err(LayoutError::InvalidPreset { .. })
    ));
    let id = state
        .add_preset_unit(PresetType::Wardrobe, 800.0, 0.0, 0.0)
        .unwrap();
    assert_eq!(state.unit(id).map(|u| u.width), Some(800.0));
}

#[test]
fn test_add_clamps_into_room() {
    let mut state = DesignerState::new();
    let id = state.add_unit("wardrobe-900", 3900.0, -50.0).unwrap();
    let unit = state.unit(id).unwrap();
    assert_eq!((unit.x, unit.z), (3100.0, 0.0));
}

#[test]
fn test_drop_snaps_before_placing() {
    let mut state = DesignerState::new();
    let first = state.drop_unit("wardrobe-900", 14.0, 6.0).unwrap();
    assert_eq!(state.unit(first).map(|u| (u.x, u.z)), Some((0.0, 0.0)));

    let second = state.drop_unit("wardrobe-600", 928.0, 10.0).unwrap();
    assert_eq!(state.unit(second).map(|u| (u.x, u.z)), Some((900.0, 0.0)));
}

#[test]
fn test_custom_units() {
    let mut state = DesignerState::new();
    let corner = state
        .add_custom_unit(UnitKind::CornerL, 1100.0, 2100.0, 800.0, 0.0, 0.0)
        .unwrap();
    let unit = state.unit(corner).unwrap();
    assert_eq!((unit.width, unit.depth), (1100.0, 1100.0));

    let err = state
        .add_custom_unit(UnitKind::Standard, 0.0, 2100.0, 600.0, 0.0, 0.0)
        .unwrap_err();
    assert!(matches!(err, LayoutError::InvalidDimensions { .. }));
    assert_eq!(state.units().len(), 1);
}

#[test]
fn test_locked_unit_rejects_geometry_changes() {
    let mut state = DesignerState::new();
    let id = state.add_unit("wardrobe-600", 0.0, 0.0).unwrap();
    state.set_unit_locked(id, true).unwrap();
    let version = state.version();

    let err = state
        .update_unit(id, UnitUpdate::position(1000.0, 0.0))
        .unwrap_err();
    assert_eq!(err, LayoutError::UnitLocked { id });
    assert_eq!(state.rotate_unit(id), Err(LayoutError::UnitLocked { id }));
    assert_eq!(state.mirror_unit(id), Err(LayoutError::UnitLocked { id }));
    assert_eq!(state.version(), version);

    let rename = UnitUpdate {
        name: Some("Hall".to_string()),
        ..UnitUpdate::default()
    };
    state.update_unit(id, rename).unwrap();
    assert_eq!(state.unit(id).map(|u| u.name.as_str()), Some("Hall"));
}

#[test]
fn test_update_unknown_unit() {
    let mut state = DesignerState::new();
    assert_eq!(
        state.update_unit(42, UnitUpdate::position(0.0, 0.0)),
        Err(LayoutError::UnknownUnit { id: 42 })
    );
    assert_eq!(state.history_len(), 1);
}

#[test]
fn test_lowering_height_clamps_parts() {
    let mut state = DesignerState::new();
    let id = state.add_unit("wardrobe-600", 0.0, 0.0).unwrap();
    state
        .update_unit(
            id,
            UnitUpdate {
                height: Some(1000.0),
                ..UnitUpdate::default()
            },
        )
        .unwrap();
    let unit = state.unit(id).unwrap();
    assert!(unit.parts.iter().all(|p| p.y >= 0.0 && p.top() <= 1000.0));
}

#[test]
fn test_invalid_dimensions_are_rejected() {
    let mut state = DesignerState::new();
    let id = state.add_unit("wardrobe-600", 0.0, 0.0).unwrap();
    let err = state
        .update_unit(id, UnitUpdate::dimensions(600.0, -1.0, 600.0))
        .unwrap_err();
    assert!(matches!(err, LayoutError::InvalidDimensions { .. }));
    assert_eq!(state.unit(id).map(|u| u.height), Some(2100.0));
}

#[test]
fn test_update_without_change_is_not_recorded() {
    let mut state = DesignerState::new();
    let id = state.add_unit("wardrobe-600", 0.0, 0.0).unwrap();
    let len = state.history_len();
    state.update_unit(id, UnitUpdate::position(0.0, 0.0)).unwrap();
    assert_eq!(state.history_len(), len);
}

#[test]
fn test_corner_units_stay_square() {
    let mut state = DesignerState::new();
    let id = state.add_unit("corner-l-900", 0.0, 0.0).unwrap();
    state
        .update_unit(
            id,
            UnitUpdate {
                width: Some(1000.0),
                ..UnitUpdate::default()
            },
        )
        .unwrap();
    let unit = state.unit(id).unwrap();
    assert_eq!((unit.width, unit.depth), (1000.0, 1000.0));
}

#[test]
fn test_corner_update_with_both_sides_uses_larger() {
    let mut state = DesignerState::new();
    let id = state.add_unit("corner-l-900", 0.0, 0.0).unwrap();

    state
        .update_unit(id, UnitUpdate::dimensions(1000.0, 2100.0, 700.0))
        .unwrap();
    let unit = state.unit(id).unwrap();
    assert_eq!((unit.width, unit.depth), (1000.0, 1000.0));

    state
        .update_unit(id, UnitUpdate::dimensions(800.0, 2100.0, 1100.0))
        .unwrap();
    let unit = state.unit(id).unwrap();
    assert_eq!((unit.width, unit.depth), (1100.0, 1100.0));
    assert_eq!(unit.plan_size(), (1100.0, 1100.0));
}

#[test]
fn test_delete_unit_clears_selection() {
    let mut state = DesignerState::new();
    let id = state.add_unit("wardrobe-600", 0.0, 0.0).unwrap();
    state.selection.select(id, false);

    let removed = state.delete_unit(id).unwrap();
    assert_eq!(removed.id, id);
    assert!(!state.selection.is_selected(id));
    assert!(state.units().is_empty());

    assert!(state.undo());
    assert!(state.unit(id).is_some());
    assert_eq!(
        state.delete_unit(99).unwrap_err(),
        LayoutError::UnknownUnit { id: 99 }
    );
}

#[test]
fn test_delete_selected() {
    let mut state = DesignerState::new();
    let a = state.add_unit("wardrobe-600", 0.0, 0.0).unwrap();
    let b = state.add_unit("wardrobe-600", 600.0, 0.0).unwrap();
    let c = state.add_unit("wardrobe-600", 1200.0, 0.0).unwrap();
    state.selection.select(a, false);
    state.selection.select(c, true);

    assert_eq!(state.delete_selected(), 2);
    assert_eq!(state.units().len(), 1);
    assert!(state.unit(b).is_some());
    assert!(state.selection.is_empty());

    let len = state.history_len();
    assert_eq!(state.delete_selected(), 0);
    assert_eq!(state.history_len(), len);
}

#[test]
fn test_duplicate_lands_beside_original() {
    let mut state = DesignerState::new();
    let id = state.add_unit("wardrobe-600", 0.0, 0.0).unwrap();
    let copy = state.duplicate_unit(id).unwrap();

    assert_ne!(copy, id);
    let original = state.unit(id).unwrap().clone();
    let duplicate = state.unit(copy).unwrap();
    assert_eq!((duplicate.x, duplicate.z), (600.0, 0.0));
    assert!(!duplicate.footprint().overlaps(&original.footprint()));
    assert_eq!(state.selection.primary(), Some(copy));

    let mut part_ids: Vec<u64> = original
        .parts
        .iter()
        .chain(duplicate.parts.iter())
        .map(|p| p.id)
        .collect();
    part_ids.sort_unstable();
    part_ids.dedup();
    assert_eq!(part_ids.len(), 4);
}

#[test]
fn test_rotate_swaps_footprint_and_clamps() {
    let mut state = DesignerState::new();
    let id = state.add_unit("wardrobe-900", 0.0, 1800.0).unwrap();
    state.rotate_unit(id).unwrap();

    let unit = state.unit(id).unwrap();
    assert_eq!(unit.rotation, Rotation::Deg90);
    assert_eq!(unit.plan_size(), (600.0, 900.0));
    assert_eq!(unit.z, 1500.0);
}

#[test]
fn test_mirror_toggles() {
    let mut state = DesignerState::new();
    let id = state.add_unit("corner-r-900", 0.0, 0.0).unwrap();
    state.mirror_unit(id).unwrap();
    assert_eq!(state.unit(id).map(|u| u.mirrored), Some(true));
    state.mirror_unit(id).unwrap();
    assert_eq!(state.unit(id).map(|u| u.mirrored), Some(false));
}

#[test]
fn test_parts_are_clamped_into_unit() {
    let mut state = DesignerState::new();
    let id = state.add_unit("drawer-600", 0.0, 0.0).unwrap();

    let drawer = state.add_part(id, PartKind::Drawer, 700.0, None).unwrap();
    let part = state.unit(id).and_then(|u| u.part(drawer)).unwrap();
    assert_eq!(part.height, Some(200.0));
    assert_eq!(part.y, 600.0);

    let shelf = state.add_part(id, PartKind::Shelf, 5000.0, None).unwrap();
    state.update_part(id, shelf, PartUpdate::y(-20.0)).unwrap();
    assert_eq!(state.unit(id).and_then(|u| u.part(shelf)).map(|p| p.y), Some(0.0));

    assert_eq!(
        state.update_part(id, 999, PartUpdate::y(10.0)),
        Err(LayoutError::UnknownPart {
            unit_id: id,
            part_id: 999
        })
    );
    state.delete_part(id, shelf).unwrap();
    assert!(state.unit(id).and_then(|u| u.part(shelf)).is_none());
}

#[test]
fn test_door_stays_on_its_wall() {
    let mut state = DesignerState::new();
    state
        .update_door(DoorUpdate {
            offset: Some(9999.0),
            ..DoorUpdate::default()
        })
        .unwrap();
    assert_eq!(state.door().offset, 3100.0);

    state
        .update_door(DoorUpdate {
            wall: Some(Wall::Left),
            ..DoorUpdate::default()
        })
        .unwrap();
    assert_eq!(state.door().wall, Wall::Left);
    assert_eq!(state.door().offset, 1500.0);

    assert!(state
        .update_door(DoorUpdate {
            width: Some(f64::INFINITY),
            ..DoorUpdate::default()
        })
        .is_err());
}

#[test]
fn test_room_resize_pulls_everything_inside() {
    let mut state = DesignerState::new();
    let id = state.add_unit("wardrobe-900", 3000.0, 0.0).unwrap();
    state.set_room_size(3000.0, 2400.0).unwrap();
    assert_eq!(state.unit(id).map(|u| u.x), Some(2100.0));
    assert_eq!(state.room().width, 3000.0);

    state.set_room_size(1000.0, 2400.0).unwrap();
    assert_eq!(state.door().offset, 100.0);

    assert!(matches!(
        state.set_room_size(0.0, 2400.0),
        Err(LayoutError::InvalidDimensions { .. })
    ));
}

#[test]
fn test_undo_room_resize_restores_room_with_units() {
    let mut state = DesignerState::new();
    let id = state.add_unit("wardrobe-900", 3000.0, 0.0).unwrap();
    state.set_room_size(3000.0, 2400.0).unwrap();

    assert!(state.undo());
    assert_eq!(state.room().width, 4000.0);
    assert_eq!(state.layout_settings().room_width, 4000.0);
    assert_eq!(state.unit(id).map(|u| u.x), Some(3000.0));

    assert!(state.redo());
    assert_eq!(state.room().width, 3000.0);
    assert_eq!(state.unit(id).map(|u| u.x), Some(2100.0));
    for unit in state.units() {
        assert!(unit.footprint().max_x() <= state.room().width);
    }
}

#[test]
fn test_grid_size_is_clamped_and_not_recorded() {
    let mut state = DesignerState::new();
    assert_eq!(state.set_grid_size(5.0), 10.0);
    assert_eq!(state.set_grid_size(500.0), 200.0);
    assert_eq!(state.set_grid_size(f64::NAN), 200.0);
    assert_eq!(state.grid_size(), 200.0);
    assert_eq!(state.history_len(), 1);
}

#[test]
fn test_clear_all_is_undoable() {
    let mut state = DesignerState::new();
    state.add_unit("wardrobe-600", 0.0, 0.0).unwrap();
    state.add_unit("wardrobe-600", 600.0, 0.0).unwrap();
    state.clear_all();
    assert!(state.units().is_empty());
    assert!(state.undo());
    assert_eq!(state.units().len(), 2);
}

#[test]
fn test_undo_redo_round_trip() {
    let mut state = DesignerState::new();
    assert!(!state.undo());

    let a = state.add_unit("wardrobe-600", 0.0, 0.0).unwrap();
    let b = state.add_unit("wardrobe-600", 600.0, 0.0).unwrap();
    let version = state.version();

    assert!(state.undo());
    assert!(state.unit(b).is_none());
    assert!(state.unit(a).is_some());
    assert!(state.version() > version);

    assert!(state.redo());
    assert!(state.unit(b).is_some());
    assert!(!state.redo());
}

#[test]
fn test_undo_drops_missing_units_from_selection() {
    let mut state = DesignerState::new();
    let id = state.add_unit("wardrobe-600", 0.0, 0.0).unwrap();
    state.selection.select(id, false);
    assert!(state.undo());
    assert!(state.selection.is_empty());
}

#[test]
fn test_select_at_screen_picks_topmost() {
    let mut state = DesignerState::new();
    let below = state.add_unit("wardrobe-900", 0.0, 0.0).unwrap();
    let above = state.add_custom_unit(UnitKind::Standard, 400.0, 800.0, 400.0, 200.0, 100.0).unwrap();

    let (px, py) = state.viewport.room_to_screen(300.0, 200.0);
    assert_eq!(state.select_at_screen(px, py, false), Some(above));

    let (px, py) = state.viewport.room_to_screen(800.0, 50.0);
    assert_eq!(state.select_at_screen(px, py, false), Some(below));

    let (px, py) = state.viewport.room_to_screen(3000.0, 2000.0);
    assert_eq!(state.select_at_screen(px, py, false), None);
    assert!(state.selection.is_empty());
}

#[test]
fn test_plan_outline_follows_rotation() {
    let mut state = DesignerState::new();
    let id = state.add_unit("wardrobe-900", 0.0, 0.0).unwrap();
    state.rotate_unit(id).unwrap();

    let outline = state.plan_outline(id).unwrap();
    assert_eq!(outline.len(), 4);
    let max_x = outline.iter().map(|p| p.x).fold(f64::MIN, f64::max);
    let max_z = outline.iter().map(|p| p.y).fold(f64::MIN, f64::max);
    assert!((max_x - 600.0).abs() < 1e-9);
    assert!((max_z - 900.0).abs() < 1e-9);

    let path = state.plan_path(id).unwrap();
    assert!(path
        .iter()
        .any(|e| matches!(e, lyon::path::Event::End { close: true, .. })));
    assert!(state.plan_path(99).is_none());
}
