use serde::{Deserialize, Serialize};
use std::fmt;

use closetkit_core::{PresetEntry, UnitKind};

use super::{Part, PartId, Point, Rect};

pub type UnitId = u64;

/// Quarter-turn rotation about the vertical axis, clockwise in plan view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub enum Rotation {
    #[default]
    Deg0,
    Deg90,
    Deg180,
    Deg270,
}

impl Rotation {
    pub fn degrees(self) -> u16 {
        match self {
            Self::Deg0 => 0,
            Self::Deg90 => 90,
            Self::Deg180 => 180,
            Self::Deg270 => 270,
        }
    }

    pub fn radians(self) -> f64 {
        f64::from(self.degrees()).to_radians()
    }

    /// Next quarter turn clockwise.
    pub fn next(self) -> Self {
        match self {
            Self::Deg0 => Self::Deg90,
            Self::Deg90 => Self::Deg180,
            Self::Deg180 => Self::Deg270,
            Self::Deg270 => Self::Deg0,
        }
    }

    /// True when width and depth trade places in plan view.
    pub fn is_quarter(self) -> bool {
        matches!(self, Self::Deg90 | Self::Deg270)
    }

    /// Rotates a point of a `size.0 × size.1` box (pre-rotation) into the rotated box.
    pub fn apply(self, p: Point, size: (f64, f64)) -> Point {
        let (w, d) = size;
        match self {
            Self::Deg0 => p,
            Self::Deg90 => Point::new(d - p.y, p.x),
            Self::Deg180 => Point::new(w - p.x, d - p.y),
            Self::Deg270 => Point::new(p.y, w - p.x),
        }
    }
}

impl TryFrom<u16> for Rotation {
    type Error = String;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Deg0),
            90 => Ok(Self::Deg90),
            180 => Ok(Self::Deg180),
            270 => Ok(Self::Deg270),
            other => Err(format!("rotation must be 0, 90, 180 or 270, got {}", other)),
        }
    }
}

impl From<Rotation> for u16 {
    fn from(rotation: Rotation) -> Self {
        rotation.degrees()
    }
}

impl fmt::Display for Rotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}°", self.degrees())
    }
}

/// A placed storage module.
///
/// `x`/`z` locate the minimum corner of the plan footprint, whatever the
/// rotation. Corner units always occupy a square footprint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Unit {
    pub id: UnitId,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preset_id: Option<String>,
    pub kind: UnitKind,
    pub width: f64,
    pub height: f64,
    pub depth: f64,
    pub x: f64,
    pub z: f64,
    #[serde(default)]
    pub rotation: Rotation,
    #[serde(default)]
    pub mirrored: bool,
    #[serde(default)]
    pub locked: bool,
    /// Arm thickness, corner units only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub leg_depth: Option<f64>,
    #[serde(default)]
    pub parts: Vec<Part>,
}

impl Unit {
    pub fn new(id: UnitId, kind: UnitKind, width: f64, height: f64, depth: f64) -> Self {
        Self {
            id,
            name: String::new(),
            preset_id: None,
            kind,
            width,
            height,
            depth,
            x: 0.0,
            z: 0.0,
            rotation: Rotation::Deg0,
            mirrored: false,
            locked: false,
            leg_depth: None,
            parts: Vec::new(),
        }
    }

    /// Builds a unit from a catalog entry; the caller supplies part ids.
    pub fn from_preset(
        id: UnitId,
        entry: &PresetEntry,
        mut part_ids: impl FnMut() -> PartId,
    ) -> Self {
        let mut unit = Self::new(id, entry.unit_kind(), entry.width, entry.height, entry.depth);
        unit.name = entry.name.to_string();
        unit.preset_id = Some(entry.id.to_string());
        unit.parts = entry
            .parts
            .iter()
            .map(|p| Part::new(part_ids(), p.kind, p.y, p.height))
            .collect();
        unit
    }

    pub fn is_corner(&self) -> bool {
        self.kind.is_corner()
    }

    /// Width and depth of the plan footprint after rotation.
    pub fn plan_size(&self) -> (f64, f64) {
        if self.is_corner() {
            let side = self.width.max(self.depth);
            return (side, side);
        }
        if self.rotation.is_quarter() {
            (self.depth, self.width)
        } else {
            (self.width, self.depth)
        }
    }

    /// Axis-aligned plan footprint used by snapping and collision.
    pub fn footprint(&self) -> Rect {
        let (w, d) = self.plan_size();
        Rect::new(self.x, self.z, w, d)
    }

    pub fn part(&self, part_id: PartId) -> Option<&Part> {
        self.parts.iter().find(|p| p.id == part_id)
    }

    pub fn part_mut(&mut self, part_id: PartId) -> Option<&mut Part> {
        self.parts.iter_mut().find(|p| p.id == part_id)
    }

    /// Re-applies `0 <= y <= height` to every part.
    pub fn clamp_parts(&mut self) {
        let height = self.height;
        for part in &mut self.parts {
            part.clamp_to_height(height);
        }
    }

    pub fn has_valid_dimensions(&self) -> bool {
        [self.width, self.height, self.depth]
            .iter()
            .all(|v| v.is_finite() && *v > 0.0)
    }
}

/// Sparse update for a unit. Only present fields are applied.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UnitUpdate {
    pub name: Option<String>,
    pub x: Option<f64>,
    pub z: Option<f64>,
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub depth: Option<f64>,
    pub rotation: Option<Rotation>,
    pub mirrored: Option<bool>,
    pub locked: Option<bool>,
}

impl UnitUpdate {
    pub fn position(x: f64, z: f64) -> Self {
        Self {
            x: Some(x),
            z: Some(z),
            ..Self::default()
        }
    }

    pub fn dimensions(width: f64, height: f64, depth: f64) -> Self {
        Self {
            width: Some(width),
            height: Some(height),
            depth: Some(depth),
            ..Self::default()
        }
    }

    /// True when the update moves, resizes, rotates or mirrors the unit.
    pub fn touches_geometry(&self) -> bool {
        self.x.is_some()
            || self.z.is_some()
            || self.width.is_some()
            || self.height.is_some()
            || self.depth.is_some()
            || self.rotation.is_some()
            || self.mirrored.is_some()
    }

    pub fn apply_to(&self, unit: &mut Unit) {
        if let Some(name) = &self.name {
            unit.name = name.clone();
        }
        if let Some(x) = self.x {
            unit.x = x;
        }
        if let Some(z) = self.z {
            unit.z = z;
        }
        if let Some(width) = self.width {
            unit.width = width;
        }
        if let Some(height) = self.height {
            unit.height = height;
        }
        if let Some(depth) = self.depth {
            unit.depth = depth;
        }
        if let Some(rotation) = self.rotation {
            unit.rotation = rotation;
        }
        if let Some(mirrored) = self.mirrored {
            unit.mirrored = mirrored;
        }
        if let Some(locked) = self.locked {
            unit.locked = locked;
        }
    }
}
