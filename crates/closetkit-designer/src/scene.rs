//! 3D scene projection.
//!
//! Scene space is y-up and centered on the room floor. Every length is
//! multiplied by one `unit_scale` (scene units per mm, [`UNIT_SCALE`] by
//! default), the same ratio for the room and each unit, and nothing here
//! depends on the 2D zoom.

use nalgebra::{Point3, Vector2, Vector3};

use closetkit_core::constants::UNIT_SCALE;

use crate::model::{Point, Room, Unit, UnitId};
use crate::panels::{unit_panels, GeometrySettings, Panel, PanelRole};

/// Panel box in scene units, already rotated and placed in the room.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScenePanel {
    pub role: PanelRole,
    pub center: Point3<f64>,
    pub size: Vector3<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SceneUnit {
    pub unit_id: UnitId,
    /// Center of the rotated bounding box.
    pub center: Point3<f64>,
    /// Unrotated width, height, depth.
    pub size: Vector3<f64>,
    /// Rotation about +y in radians, counter-clockwise seen from above.
    pub yaw: f64,
    pub panels: Vec<ScenePanel>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub unit_scale: f64,
    /// Floor width and depth.
    pub floor: Vector2<f64>,
    pub units: Vec<SceneUnit>,
}

/// Scene units per millimeter; non-positive input falls back to [`UNIT_SCALE`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneScale(f64);

impl SceneScale {
    pub fn new(unit_scale: f64) -> Self {
        if unit_scale.is_finite() && unit_scale > 0.0 {
            Self(unit_scale)
        } else {
            Self(UNIT_SCALE)
        }
    }

    pub fn ratio(self) -> f64 {
        self.0
    }

    pub fn length(self, mm: f64) -> f64 {
        mm * self.0
    }

    /// Maps a plan position and height (mm) to a room-centered scene point.
    pub fn point(self, room: &Room, x: f64, height: f64, z: f64) -> Point3<f64> {
        Point3::new(
            self.length(x - room.width / 2.0),
            self.length(height),
            self.length(z - room.depth / 2.0),
        )
    }
}

impl Default for SceneScale {
    fn default() -> Self {
        Self(UNIT_SCALE)
    }
}

fn place_panel(scale: SceneScale, room: &Room, unit: &Unit, panel: &Panel) -> ScenePanel {
    let size = (unit.width, unit.depth);
    let a = unit
        .rotation
        .apply(Point::new(panel.origin.x, panel.origin.z), size);
    let max = panel.max();
    let b = unit.rotation.apply(Point::new(max.x, max.z), size);

    let (min_x, max_x) = (a.x.min(b.x), a.x.max(b.x));
    let (min_z, max_z) = (a.y.min(b.y), a.y.max(b.y));

    ScenePanel {
        role: panel.role,
        center: scale.point(
            room,
            unit.x + (min_x + max_x) / 2.0,
            panel.origin.y + panel.size.y / 2.0,
            unit.z + (min_z + max_z) / 2.0,
        ),
        size: Vector3::new(
            scale.length(max_x - min_x),
            scale.length(panel.size.y),
            scale.length(max_z - min_z),
        ),
    }
}

/// Scene placement of one unit.
pub fn project_unit(
    scale: SceneScale,
    room: &Room,
    unit: &Unit,
    settings: &GeometrySettings,
) -> SceneUnit {
    let footprint = unit.footprint();
    let center = footprint.center();
    let panels = unit_panels(unit, settings)
        .iter()
        .map(|panel| place_panel(scale, room, unit, panel))
        .collect();

    SceneUnit {
        unit_id: unit.id,
        center: scale.point(room, center.x, unit.height / 2.0, center.y),
        size: Vector3::new(
            scale.length(unit.width),
            scale.length(unit.height),
            scale.length(unit.depth),
        ),
        // Plan rotation is clockwise with z pointing down the screen.
        yaw: -unit.rotation.radians(),
        panels,
    }
}

pub fn project_scene(
    scale: SceneScale,
    room: &Room,
    units: &[Unit],
    settings: &GeometrySettings,
) -> Scene {
    Scene {
        unit_scale: scale.ratio(),
        floor: Vector2::new(scale.length(room.width), scale.length(room.depth)),
        units: units
            .iter()
            .map(|unit| project_unit(scale, room, unit, settings))
            .collect(),
    }
}
