//! Wall elevation projection.
//!
//! An elevation is a wall seen from inside the room. Offsets along the wall
//! are measured from the viewer's left, so the same plan layout reads the
//! same way as a person standing in the room facing that wall.

use crate::model::{Part, Rect, Room, Unit, UnitId, Wall};
use closetkit_core::UnitKind;

/// Maximum gap between a footprint edge and a wall for the unit to count as standing against it.
pub const WALL_CONTACT_TOLERANCE: f64 = 1.0;

/// One unit as drawn in an elevation.
#[derive(Debug, Clone, PartialEq)]
pub struct ElevationItem {
    pub unit_id: UnitId,
    pub kind: UnitKind,
    pub mirrored: bool,
    /// Offset from the viewer's left end of the wall, in mm.
    pub left: f64,
    /// Extent along the wall, in mm.
    pub width: f64,
    pub height: f64,
    pub parts: Vec<Part>,
}

impl ElevationItem {
    pub fn right(&self) -> f64 {
        self.left + self.width
    }
}

/// Door opening as drawn in an elevation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElevationDoor {
    pub left: f64,
    pub width: f64,
    pub is_open: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Elevation {
    pub wall: Wall,
    pub wall_length: f64,
    /// Units against the wall, sorted by `left`.
    pub items: Vec<ElevationItem>,
    pub door: Option<ElevationDoor>,
}

/// Whether `footprint` stands against `wall` of a `room_width × room_depth` room.
pub fn touches_wall(footprint: &Rect, wall: Wall, room_width: f64, room_depth: f64) -> bool {
    match wall {
        Wall::Top => footprint.z <= WALL_CONTACT_TOLERANCE,
        Wall::Bottom => footprint.max_z() >= room_depth - WALL_CONTACT_TOLERANCE,
        Wall::Left => footprint.x <= WALL_CONTACT_TOLERANCE,
        Wall::Right => footprint.max_x() >= room_width - WALL_CONTACT_TOLERANCE,
    }
}

/// `(left, width)` of a footprint along `wall`, as seen from inside the room.
pub fn span_along_wall(footprint: &Rect, wall: Wall, room_width: f64, room_depth: f64) -> (f64, f64) {
    match wall {
        Wall::Top => (footprint.x, footprint.width),
        Wall::Right => (footprint.z, footprint.depth),
        Wall::Bottom => (room_width - footprint.max_x(), footprint.width),
        Wall::Left => (room_depth - footprint.max_z(), footprint.depth),
    }
}

/// Projects the units and door of `room` onto `wall`.
pub fn project_wall(room: &Room, units: &[Unit], wall: Wall) -> Elevation {
    let (room_width, room_depth) = (room.width, room.depth);

    let mut items: Vec<ElevationItem> = units
        .iter()
        .filter_map(|unit| {
            let footprint = unit.footprint();
            if !touches_wall(&footprint, wall, room_width, room_depth) {
                return None;
            }
            let (left, width) = span_along_wall(&footprint, wall, room_width, room_depth);
            Some(ElevationItem {
                unit_id: unit.id,
                kind: unit.kind,
                mirrored: unit.mirrored,
                left,
                width,
                height: unit.height,
                parts: unit.parts.clone(),
            })
        })
        .collect();
    items.sort_by(|a, b| a.left.total_cmp(&b.left));

    let door = (room.door.wall == wall).then(|| {
        let door = &room.door;
        let length = room.wall_length(wall);
        // Door offsets run from the left end of top/bottom and the top end of left/right.
        let left = match wall {
            Wall::Top | Wall::Right => door.offset,
            Wall::Bottom | Wall::Left => length - door.offset - door.width,
        };
        ElevationDoor {
            left,
            width: door.width,
            is_open: door.is_open,
        }
    });

    Elevation {
        wall,
        wall_length: room.wall_length(wall),
        items,
        door,
    }
}

/// Elevations for all four walls in [`Wall::ALL`] order.
pub fn project_all(room: &Room, units: &[Unit]) -> Vec<Elevation> {
    Wall::ALL
        .iter()
        .map(|wall| project_wall(room, units, *wall))
        .collect()
}
