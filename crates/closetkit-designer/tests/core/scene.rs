use std::f64::consts::FRAC_PI_2;

use closetkit_core::constants::UNIT_SCALE;
use closetkit_core::UnitKind;
use closetkit_designer::model::{Room, Rotation, Unit};
use closetkit_designer::panels::{GeometrySettings, PanelRole, Side};
use closetkit_designer::scene::{project_scene, project_unit, SceneScale};
use closetkit_designer::DesignerState;

const EPS: f64 = 1e-9;

fn wardrobe(x: f64, z: f64) -> Unit {
    let mut unit = Unit::new(1, UnitKind::Standard, 900.0, 2100.0, 600.0);
    unit.x = x;
    unit.z = z;
    unit
}

#[test]
fn test_scene_is_centered_on_the_room() {
    let room = Room::default();
    let placed = project_unit(
        SceneScale::default(),
        &room,
        &wardrobe(0.0, 0.0),
        &GeometrySettings::default(),
    );

    assert!((placed.center.x - (-1.55)).abs() < EPS);
    assert!((placed.center.y - 1.05).abs() < EPS);
    assert!((placed.center.z - (-0.9)).abs() < EPS);
    assert!((placed.size.x - 0.9).abs() < EPS);
    assert_eq!(placed.yaw, 0.0);
}

#[test]
fn test_room_and_units_share_one_ratio() {
    let room = Room::default();
    let units = [wardrobe(1000.0, 500.0)];
    let base = project_scene(SceneScale::default(), &room, &units, &GeometrySettings::default());
    let double = project_scene(SceneScale::new(2.0 * UNIT_SCALE), &room, &units, &GeometrySettings::default());

    assert_eq!(base.unit_scale, UNIT_SCALE);
    assert!((base.floor.x - 4.0).abs() < EPS);
    assert!((double.floor.x - 2.0 * base.floor.x).abs() < EPS);
    assert!((double.units[0].size.z - 2.0 * base.units[0].size.z).abs() < EPS);
    assert!((double.units[0].center.x - 2.0 * base.units[0].center.x).abs() < EPS);
}

#[test]
fn test_invalid_scale_falls_back() {
    assert_eq!(SceneScale::new(0.0).ratio(), UNIT_SCALE);
    assert_eq!(SceneScale::new(f64::NAN).ratio(), UNIT_SCALE);
    assert_eq!(SceneScale::new(0.01).ratio(), 0.01);
}

#[test]
fn test_rotation_becomes_negative_yaw() {
    let mut unit = wardrobe(0.0, 0.0);
    unit.rotation = Rotation::Deg90;
    let placed = project_unit(
        SceneScale::default(),
        &Room::default(),
        &unit,
        &GeometrySettings::default(),
    );
    assert!((placed.yaw + FRAC_PI_2).abs() < EPS);
    // Size stays unrotated; the center follows the rotated footprint.
    assert!((placed.size.x - 0.9).abs() < EPS);
    assert!((placed.center.x - (300.0 - 2000.0) * UNIT_SCALE).abs() < EPS);
}

#[test]
fn test_panels_fill_the_rotated_footprint() {
    let mut unit = wardrobe(1000.0, 500.0);
    unit.rotation = Rotation::Deg90;
    let room = Room::default();
    let placed = project_unit(SceneScale::default(), &room, &unit, &GeometrySettings::default());

    let footprint = unit.footprint();
    let min_x = (footprint.x - room.width / 2.0) * UNIT_SCALE;
    let max_x = (footprint.max_x() - room.width / 2.0) * UNIT_SCALE;
    for panel in &placed.panels {
        assert!(panel.center.x - panel.size.x / 2.0 >= min_x - EPS);
        assert!(panel.center.x + panel.size.x / 2.0 <= max_x + EPS);
    }

    // The left side lies along the top edge of the turned footprint.
    let side = placed
        .panels
        .iter()
        .find(|p| p.role == PanelRole::Side(Side::Left))
        .unwrap();
    assert!((side.size.x - 0.6).abs() < EPS);
    assert!((side.size.z - 0.018).abs() < EPS);
}

#[test]
fn test_session_scene_uses_configured_scale() {
    let mut state = DesignerState::new();
    state.add_unit("corner-l-900", 0.0, 0.0).unwrap();
    let scene = state.scene();
    assert_eq!(scene.unit_scale, UNIT_SCALE);
    assert_eq!(scene.units.len(), 1);
    assert!(scene.units[0]
        .panels
        .iter()
        .any(|p| matches!(p.role, PanelRole::Return(_))));

    // The 2D zoom has no effect on the scene.
    state.set_zoom(3.0);
    assert_eq!(state.scene(), scene);
}
