//! Spatial model: room, units, parts and the plan-space primitives they use.
//!
//! Plan space is the room floor seen from above, in millimeters: `x` grows to
//! the right (toward the right wall) and `z` grows downward (toward the bottom
//! wall). 2D outline vertices use [`Point`], whose `y` is the plan `z`.

use serde::{Deserialize, Serialize};

use closetkit_core::constants::GEOMETRY_EPSILON;

mod part;
mod room;
mod unit;

pub use part::{Part, PartId, PartUpdate};
pub use room::{Door, DoorUpdate, OpenDirection, Room, Wall};
pub use unit::{Rotation, Unit, UnitId, UnitUpdate};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// Axis-aligned rectangle on the floor plane.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub z: f64,
    pub width: f64,
    pub depth: f64,
}

impl Rect {
    pub fn new(x: f64, z: f64, width: f64, depth: f64) -> Self {
        Self { x, z, width, depth }
    }

    pub fn max_x(&self) -> f64 {
        self.x + self.width
    }

    pub fn max_z(&self) -> f64 {
        self.z + self.depth
    }

    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.z + self.depth / 2.0)
    }

    pub fn area(&self) -> f64 {
        self.width * self.depth
    }

    /// Overlap depth along x, negative or zero when the ranges are disjoint.
    pub fn overlap_x(&self, other: &Rect) -> f64 {
        self.max_x().min(other.max_x()) - self.x.max(other.x)
    }

    /// Overlap depth along z, negative or zero when the ranges are disjoint.
    pub fn overlap_z(&self, other: &Rect) -> f64 {
        self.max_z().min(other.max_z()) - self.z.max(other.z)
    }

    /// True when the interiors intersect. Touching edges do not overlap.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.overlap_x(other) > GEOMETRY_EPSILON && self.overlap_z(other) > GEOMETRY_EPSILON
    }

    pub fn translated(&self, dx: f64, dz: f64) -> Self {
        Self::new(self.x + dx, self.z + dz, self.width, self.depth)
    }

    pub fn with_position(&self, x: f64, z: f64) -> Self {
        Self::new(x, z, self.width, self.depth)
    }

    pub fn contains_point(&self, p: Point) -> bool {
        p.x >= self.x && p.x <= self.max_x() && p.y >= self.z && p.y <= self.max_z()
    }

    /// Corner points in plan order: top-left, top-right, bottom-right, bottom-left.
    pub fn corners(&self) -> [Point; 4] {
        [
            Point::new(self.x, self.z),
            Point::new(self.max_x(), self.z),
            Point::new(self.max_x(), self.max_z()),
            Point::new(self.x, self.max_z()),
        ]
    }
}

/// Signed shoelace area; positive for clockwise loops in plan space (z down).
pub fn signed_area(points: &[Point]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..n {
        let a = points[i];
        let b = points[(i + 1) % n];
        sum += a.x * b.y - b.x * a.y;
    }
    sum / 2.0
}
