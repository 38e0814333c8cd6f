use closetkit_core::{FormatError, PartKind};
use closetkit_designer::model::{DoorUpdate, UnitUpdate, Wall};
use closetkit_designer::serialization::DesignFile;
use closetkit_designer::DesignerState;
use proptest::prelude::*;
use tempfile::TempDir;

fn furnished() -> DesignerState {
    let mut state = DesignerState::new();
    let a = state.add_unit("wardrobe-900", 0.0, 0.0).unwrap();
    let b = state.add_unit("corner-r-1000", 0.0, 1400.0).unwrap();
    state.add_unit("drawer-600", 2350.5, 0.0).unwrap();
    state.rotate_unit(a).unwrap();
    state.mirror_unit(b).unwrap();
    state.add_part(a, PartKind::Drawer, 120.25, None).unwrap();
    state
        .update_unit(
            b,
            UnitUpdate {
                name: Some("Corner by the window".to_string()),
                ..UnitUpdate::default()
            },
        )
        .unwrap();
    state
        .update_door(DoorUpdate {
            wall: Some(Wall::Right),
            offset: Some(733.3),
            ..DoorUpdate::default()
        })
        .unwrap();
    state.set_grid_size(25.0);
    state
}

#[test]
fn test_round_trip_restores_the_layout() {
    let original = furnished();
    let json = original.to_json().unwrap();

    let mut restored = DesignerState::new();
    restored.load_json(&json).unwrap();

    assert_eq!(restored.units(), original.units());
    assert_eq!(restored.door(), original.door());
    assert_eq!(restored.grid_size(), 25.0);
    assert_eq!(restored.history_len(), 1);
    assert!(!restored.is_modified);
}

#[test]
fn test_payload_uses_camel_case_fields() {
    let json = furnished().to_json().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert!(value["components"].is_array());
    assert_eq!(value["gridSize"], 25.0);
    assert_eq!(value["version"], 1);
    assert_eq!(value["door"]["wall"], "right");
    assert_eq!(value["components"][0]["rotation"], 90);
    assert_eq!(value["components"][1]["kind"], "corner-R");
    assert!(value["components"][0]["parts"][0]["type"].is_string());
}

#[test]
fn test_missing_components_leaves_model_untouched() {
    let mut state = furnished();
    let units = state.units().to_vec();
    let version = state.version();
    let history = state.history_len();

    let err = state
        .load_json(r#"{"gridSize": 50, "version": 1}"#)
        .unwrap_err();
    assert!(matches!(err, FormatError::Json(_)));
    assert_eq!(state.units(), units.as_slice());
    assert_eq!(state.version(), version);
    assert_eq!(state.history_len(), history);
    assert_eq!(state.grid_size(), 25.0);
}

#[test]
fn test_rejected_payloads() {
    let mut state = DesignerState::new();

    let newer = r#"{"components": [], "gridSize": 50, "version": 2}"#;
    assert!(matches!(
        state.load_json(newer),
        Err(FormatError::UnsupportedVersion { found: 2, supported: 1 })
    ));

    let bad_rotation = r#"{"components": [{"id": 1, "kind": "standard", "width": 600,
        "height": 2100, "depth": 600, "x": 0, "z": 0, "rotation": 45}],
        "gridSize": 50, "version": 1}"#;
    assert!(matches!(state.load_json(bad_rotation), Err(FormatError::Json(_))));

    let duplicate = r#"{"components": [
        {"id": 1, "kind": "standard", "width": 600, "height": 2100, "depth": 600, "x": 0, "z": 0},
        {"id": 1, "kind": "standard", "width": 600, "height": 2100, "depth": 600, "x": 600, "z": 0}],
        "gridSize": 50, "version": 1}"#;
    assert!(matches!(
        state.load_json(duplicate),
        Err(FormatError::InvalidComponent { id: 1, .. })
    ));

    let flat = r#"{"components": [{"id": 3, "kind": "standard", "width": 600,
        "height": 0, "depth": 600, "x": 0, "z": 0}], "gridSize": 50, "version": 1}"#;
    assert!(matches!(
        state.load_json(flat),
        Err(FormatError::InvalidComponent { id: 3, .. })
    ));

    let shelf_above_top = r#"{"components": [{"id": 4, "kind": "standard", "width": 600,
        "height": 2100, "depth": 600, "x": 0, "z": 0,
        "parts": [{"id": 5, "type": "shelf", "y": 5000}]}], "gridSize": 50, "version": 1}"#;
    assert!(matches!(
        state.load_json(shelf_above_top),
        Err(FormatError::InvalidComponent { id: 4, .. })
    ));

    let drawer_below_floor = r#"{"components": [{"id": 6, "kind": "standard", "width": 600,
        "height": 800, "depth": 600, "x": 0, "z": 0,
        "parts": [{"id": 7, "type": "drawer", "y": -10, "height": 200}]}],
        "gridSize": 50, "version": 1}"#;
    assert!(matches!(
        state.load_json(drawer_below_floor),
        Err(FormatError::InvalidComponent { id: 6, .. })
    ));

    let drawer_through_top = r#"{"components": [{"id": 8, "kind": "standard", "width": 600,
        "height": 800, "depth": 600, "x": 0, "z": 0,
        "parts": [{"id": 9, "type": "drawer", "y": 700, "height": 200}]}],
        "gridSize": 50, "version": 1}"#;
    assert!(matches!(
        state.load_json(drawer_through_top),
        Err(FormatError::InvalidComponent { id: 8, .. })
    ));

    let oblong_corner = r#"{"components": [{"id": 10, "kind": "corner-L", "width": 900,
        "height": 2100, "depth": 700, "x": 0, "z": 0}], "gridSize": 50, "version": 1}"#;
    assert!(matches!(
        state.load_json(oblong_corner),
        Err(FormatError::InvalidComponent { id: 10, .. })
    ));

    assert!(matches!(
        state.load_json(r#"{"components": [], "gridSize": 0, "version": 1}"#),
        Err(FormatError::InvalidPayload { .. })
    ));
    assert!(state.units().is_empty());
}

#[test]
fn test_older_payload_keeps_room_and_door() {
    let mut state = DesignerState::new();
    state.set_room_size(5000.0, 3000.0).unwrap();
    let door = state.door().clone();

    let json = r#"{"components": [{"id": 10, "kind": "standard", "width": 600,
        "height": 2100, "depth": 600, "x": 100, "z": 0,
        "parts": [{"id": 12, "type": "shelf", "y": 800}]}],
        "gridSize": 50, "version": 1}"#;
    state.load_json(json).unwrap();

    assert_eq!(state.room().width, 5000.0);
    assert_eq!(state.door(), &door);
    assert_eq!(state.units().len(), 1);

    // New ids continue after the highest one in the payload.
    let id = state.add_unit("wardrobe-600", 2000.0, 0.0).unwrap();
    assert_eq!(id, 13);
}

#[test]
fn test_load_resets_selection_and_history() {
    let mut state = furnished();
    let json = state.to_json().unwrap();
    let first = state.units()[0].id;
    state.selection.select(first, false);

    state.load_json(&json).unwrap();
    assert!(state.selection.is_empty());
    assert!(!state.can_undo());
    assert!(!state.can_redo());
}

#[test]
fn test_save_and_load_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("hallway.json");

    let mut state = furnished();
    state.save_to_file(&path).unwrap();
    assert!(!state.is_modified);
    assert_eq!(state.current_file_path.as_deref(), Some(path.as_path()));

    let design = DesignFile::load_from_file(&path).unwrap();
    assert!(design.saved_at.is_some());
    assert_eq!(design.room.map(|r| r.width), Some(4000.0));

    let mut loaded = DesignerState::new();
    loaded.load_from_file(&path).unwrap();
    assert_eq!(loaded.units(), state.units());
    assert_eq!(loaded.design_name, "hallway");
    assert_eq!(loaded.display_name(), "hallway.json");
}

#[test]
fn test_loading_missing_file_fails_with_context() {
    let temp_dir = TempDir::new().unwrap();
    let mut state = DesignerState::new();
    let err = state
        .load_from_file(temp_dir.path().join("absent.json"))
        .unwrap_err();
    assert!(err.to_string().contains("Failed to read design file"));
    assert_eq!(state.history_len(), 1);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn saved_layout_loads_back_identically(
        positions in prop::collection::vec((0.0f64..3400.0, 0.0f64..1800.0), 1..6),
        door_offset in 0.0f64..3100.0,
        grid in 10.0f64..200.0,
    ) {
        let mut state = DesignerState::new();
        for (x, z) in positions {
            state.add_unit("wardrobe-600", x, z).unwrap();
        }
        state
            .update_door(DoorUpdate { offset: Some(door_offset), ..DoorUpdate::default() })
            .unwrap();
        state.set_grid_size(grid);

        let mut restored = DesignerState::new();
        restored.load_json(&state.to_json().unwrap()).unwrap();
        prop_assert_eq!(restored.units(), state.units());
        prop_assert_eq!(restored.door(), state.door());
        prop_assert_eq!(restored.grid_size(), state.grid_size());
    }
}
