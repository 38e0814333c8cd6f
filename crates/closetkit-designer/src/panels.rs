//! Panel decomposition and plan outlines for every unit kind.
//!
//! Panels are boxes in the unit's local frame, in millimeters: `x` runs along
//! the width, `y` is up from the floor and `z` runs along the depth (plan `z`
//! before rotation). Standard units are built here; corner units delegate to
//! [`crate::corner`].

use lyon::math::point;
use lyon::path::Path;
use nalgebra::{Point3, Vector3};
use smallvec::SmallVec;

use closetkit_core::constants::{DEFAULT_LEG_DEPTH, PANEL_THICKNESS};
use closetkit_core::PartKind;
use closetkit_settings::LayoutSettings;

use crate::corner::{self, CornerParams};
use crate::model::{Point, Unit};

/// Plan outline; six vertices covers every unit kind without allocating.
pub type Outline = SmallVec<[Point; 6]>;

/// Which arm of a corner unit a panel belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Arm {
    /// The arm running along the local x axis.
    Width,
    /// The arm running along the local z axis.
    Depth,
}

/// Portion of a horizontal corner panel cut from rectangular stock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Whole,
    Leg,
    Remainder,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PanelRole {
    Side(Side),
    Back,
    /// Wall-facing back panel of a corner arm.
    OuterBack(Arm),
    /// End cap closing a corner arm.
    End(Arm),
    /// Inner panel facing the inside corner.
    Return(Arm),
    Filler,
    Top(Section),
    Bottom(Section),
    Shelf { index: usize, section: Section },
}

/// Axis-aligned panel box in unit-local millimeters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Panel {
    pub role: PanelRole,
    pub origin: Point3<f64>,
    pub size: Vector3<f64>,
}

impl Panel {
    pub fn new(role: PanelRole, origin: Point3<f64>, size: Vector3<f64>) -> Self {
        Self { role, origin, size }
    }

    /// Builds a panel from its ranges on each axis; inverted ranges collapse to zero size.
    pub fn from_ranges(role: PanelRole, x: (f64, f64), y: (f64, f64), z: (f64, f64)) -> Self {
        Self::new(
            role,
            Point3::new(x.0, y.0, z.0),
            Vector3::new((x.1 - x.0).max(0.0), (y.1 - y.0).max(0.0), (z.1 - z.0).max(0.0)),
        )
    }

    pub fn max(&self) -> Point3<f64> {
        self.origin + self.size
    }

    pub fn center(&self) -> Point3<f64> {
        self.origin + self.size / 2.0
    }

    pub fn volume(&self) -> f64 {
        self.size.x * self.size.y * self.size.z
    }

    /// Reflects the panel across `x = width / 2`.
    pub fn flipped_x(mut self, width: f64) -> Self {
        self.origin.x = width - self.origin.x - self.size.x;
        self
    }

    /// Reflects the panel across `z = depth / 2`.
    pub fn flipped_z(mut self, depth: f64) -> Self {
        self.origin.z = depth - self.origin.z - self.size.z;
        self
    }

    /// True when the interiors of the two boxes intersect.
    pub fn intersects(&self, other: &Panel) -> bool {
        let a_max = self.max();
        let b_max = other.max();
        (0..3).all(|i| {
            a_max[i].min(b_max[i]) - self.origin[i].max(other.origin[i])
                > closetkit_core::constants::GEOMETRY_EPSILON
        })
    }
}

/// Leg depth and material thickness used when building geometry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeometrySettings {
    pub leg_depth: f64,
    pub panel_thickness: f64,
}

impl Default for GeometrySettings {
    fn default() -> Self {
        Self {
            leg_depth: DEFAULT_LEG_DEPTH,
            panel_thickness: PANEL_THICKNESS,
        }
    }
}

impl From<&LayoutSettings> for GeometrySettings {
    fn from(layout: &LayoutSettings) -> Self {
        Self {
            leg_depth: layout.leg_depth,
            panel_thickness: layout.panel_thickness,
        }
    }
}

/// Vertical position for a horizontal panel of thickness `t` inside a unit of height `h`.
pub(crate) fn shelf_level(y: f64, height: f64, thickness: f64) -> f64 {
    y.clamp(thickness, (height - 2.0 * thickness).max(thickness))
}

/// Shelf heights in part order, skipping rods and drawers.
pub(crate) fn shelf_heights(unit: &Unit) -> Vec<f64> {
    unit.parts
        .iter()
        .filter(|p| p.kind == PartKind::Shelf)
        .map(|p| p.y)
        .collect()
}

/// Carcass panels for a plain rectangular box.
pub fn standard_panels(
    width: f64,
    height: f64,
    depth: f64,
    thickness: f64,
    shelves: &[f64],
) -> Vec<Panel> {
    let t = thickness;
    let inner_x = (t, width - t);
    let mut panels = vec![
        Panel::from_ranges(PanelRole::Side(Side::Left), (0.0, t), (0.0, height), (0.0, depth)),
        Panel::from_ranges(
            PanelRole::Side(Side::Right),
            (width - t, width),
            (0.0, height),
            (0.0, depth),
        ),
        Panel::from_ranges(
            PanelRole::Top(Section::Whole),
            inner_x,
            (height - t, height),
            (0.0, depth),
        ),
        Panel::from_ranges(PanelRole::Bottom(Section::Whole), inner_x, (0.0, t), (0.0, depth)),
        Panel::from_ranges(PanelRole::Back, inner_x, (t, height - t), (0.0, t)),
    ];

    for (index, y) in shelves.iter().enumerate() {
        let level = shelf_level(*y, height, t);
        panels.push(Panel::from_ranges(
            PanelRole::Shelf {
                index,
                section: Section::Whole,
            },
            inner_x,
            (level, level + t),
            (t, depth),
        ));
    }
    panels
}

/// Panel set for any unit in its local (unrotated) frame.
pub fn unit_panels(unit: &Unit, settings: &GeometrySettings) -> Vec<Panel> {
    let shelves = shelf_heights(unit);
    match CornerParams::from_unit(unit, settings) {
        Some(params) => corner::build_corner_geometry(&params, &shelves).panels,
        None => standard_panels(
            unit.width,
            unit.height,
            unit.depth,
            settings.panel_thickness,
            &shelves,
        ),
    }
}

/// Unit outline in room plan coordinates, rotation and position applied.
pub fn unit_plan_outline(unit: &Unit, settings: &GeometrySettings) -> Outline {
    let local: Outline = match CornerParams::from_unit(unit, settings) {
        Some(params) => corner::corner_outline(&params),
        None => [
            Point::new(0.0, 0.0),
            Point::new(unit.width, 0.0),
            Point::new(unit.width, unit.depth),
            Point::new(0.0, unit.depth),
        ]
        .into_iter()
        .collect(),
    };

    let size = (unit.width, unit.depth);
    local
        .into_iter()
        .map(|p| {
            let r = unit.rotation.apply(p, size);
            Point::new(r.x + unit.x, r.y + unit.z)
        })
        .collect()
}

/// Closed `lyon` path through `points`, for 2D renderers.
pub fn outline_path(points: &[Point]) -> Path {
    let mut builder = Path::builder();
    for (i, p) in points.iter().enumerate() {
        let p = point(p.x as f32, p.y as f32);
        if i == 0 {
            builder.begin(p);
        } else {
            builder.line_to(p);
        }
    }
    if !points.is_empty() {
        builder.close();
    }
    builder.build()
}
