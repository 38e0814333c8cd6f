//! L-profile corner unit geometry.
//!
//! Geometry is built in an *arm frame* first: the outer corner sits at the
//! origin, the width arm runs along +x against the wall `z = 0` and the depth
//! arm runs along +z against the wall `x = 0`. Both arms are `leg_depth`
//! thick, so the inside corner steps in at `(leg_depth, leg_depth)`.
//!
//! The orientation then moves the outer corner onto the walls it spans:
//!
//! ```text
//!   L (top + right)      R (left + bottom)
//!   ┌────────────┐       ┌───┐
//!   └───────┐    │       │   │
//!           │    │       │   └───────┐
//!           └────┘       └───────────┘
//! ```
//!
//! `mirrored` reflects the result across the vertical center line. The plan
//! outline and the 3D panels go through the same transform, so the 2D
//! renderer and the extrusion always agree.

use closetkit_core::constants::{GEOMETRY_EPSILON, PANEL_THICKNESS};
use closetkit_core::CornerOrientation;

use crate::model::{signed_area, Point, Unit};
use crate::panels::{shelf_level, Arm, GeometrySettings, Outline, Panel, PanelRole, Section};

/// Inputs for one corner unit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CornerParams {
    pub width: f64,
    pub depth: f64,
    pub height: f64,
    pub leg_depth: f64,
    pub thickness: f64,
    pub orientation: CornerOrientation,
    pub mirrored: bool,
}

impl CornerParams {
    pub fn new(
        width: f64,
        depth: f64,
        leg_depth: f64,
        orientation: CornerOrientation,
        mirrored: bool,
    ) -> Self {
        Self {
            width,
            depth,
            height: 0.0,
            leg_depth,
            thickness: PANEL_THICKNESS,
            orientation,
            mirrored,
        }
    }

    pub fn with_height(mut self, height: f64) -> Self {
        self.height = height;
        self
    }

    pub fn with_thickness(mut self, thickness: f64) -> Self {
        self.thickness = thickness;
        self
    }

    /// Parameters for a corner unit, `None` for rectangular units.
    ///
    /// The unit's own `leg_depth` wins over the configured default.
    pub fn from_unit(unit: &Unit, settings: &GeometrySettings) -> Option<Self> {
        let orientation = unit.kind.corner_orientation()?;
        Some(
            Self::new(
                unit.width,
                unit.depth,
                unit.leg_depth.unwrap_or(settings.leg_depth),
                orientation,
                unit.mirrored,
            )
            .with_height(unit.height)
            .with_thickness(settings.panel_thickness),
        )
    }

    /// Leg depth after [`clamp_leg_depth`].
    pub fn effective_leg_depth(&self) -> f64 {
        clamp_leg_depth(self.width, self.depth, self.leg_depth, self.thickness)
    }

    fn map_point(&self, p: Point) -> Point {
        let mut q = match self.orientation {
            CornerOrientation::L => Point::new(self.width - p.x, p.y),
            CornerOrientation::R => Point::new(p.x, self.depth - p.y),
        };
        if self.mirrored {
            q.x = self.width - q.x;
        }
        q
    }

    fn map_panel(&self, panel: Panel) -> Panel {
        let panel = match self.orientation {
            CornerOrientation::L => panel.flipped_x(self.width),
            CornerOrientation::R => panel.flipped_z(self.depth),
        };
        if self.mirrored {
            panel.flipped_x(self.width)
        } else {
            panel
        }
    }
}

/// Keeps the inside step strictly inside the box.
///
/// A leg depth that reaches `min(width, depth) - thickness` is pulled back to
/// that limit, but never below half of the shorter side. Non-positive or
/// non-finite input falls back to half of the shorter side.
pub fn clamp_leg_depth(width: f64, depth: f64, leg_depth: f64, thickness: f64) -> f64 {
    let shorter = width.min(depth).max(0.0);
    let half = shorter / 2.0;
    let limit = (shorter - thickness.max(GEOMETRY_EPSILON)).max(half);

    if !leg_depth.is_finite() || leg_depth <= 0.0 {
        tracing::debug!("leg depth {} unusable, using {}", leg_depth, half);
        half
    } else if leg_depth >= limit {
        tracing::debug!("leg depth {} clamped to {}", leg_depth, limit);
        limit
    } else {
        leg_depth
    }
}

/// Six-vertex outline in the arm frame, clockwise in plan view.
pub fn canonical_outline(width: f64, depth: f64, leg_depth: f64) -> Outline {
    [
        Point::new(0.0, 0.0),
        Point::new(width, 0.0),
        Point::new(width, leg_depth),
        Point::new(leg_depth, leg_depth),
        Point::new(leg_depth, depth),
        Point::new(0.0, depth),
    ]
    .into_iter()
    .collect()
}

/// Oriented outline in the unit's box frame, clockwise in plan view.
pub fn corner_outline(params: &CornerParams) -> Outline {
    let leg = params.effective_leg_depth();
    let mut outline: Outline = canonical_outline(params.width, params.depth, leg)
        .into_iter()
        .map(|p| params.map_point(p))
        .collect();
    if signed_area(&outline) < 0.0 {
        outline.reverse();
    }
    outline
}

/// Outline plus panel set of one corner unit.
#[derive(Debug, Clone, PartialEq)]
pub struct CornerGeometry {
    pub leg_depth: f64,
    pub outline: Outline,
    pub panels: Vec<Panel>,
}

impl CornerGeometry {
    pub fn area(&self) -> f64 {
        signed_area(&self.outline)
    }
}

/// Builds the outline and panels for `params`; `shelves` are shelf heights from the floor.
pub fn build_corner_geometry(params: &CornerParams, shelves: &[f64]) -> CornerGeometry {
    let leg = params.effective_leg_depth();
    let panels = arm_frame_panels(params, leg, shelves)
        .into_iter()
        .map(|p| params.map_panel(p))
        .collect();

    CornerGeometry {
        leg_depth: leg,
        outline: corner_outline(params),
        panels,
    }
}

/// Panels in the arm frame (`x` along the width arm, `z` along the depth arm).
fn arm_frame_panels(params: &CornerParams, leg: f64, shelves: &[f64]) -> Vec<Panel> {
    let (w, d, h, t) = (params.width, params.depth, params.height, params.thickness);
    let standing = (t, h - t);

    let mut panels = vec![
        Panel::from_ranges(PanelRole::OuterBack(Arm::Width), (0.0, w), standing, (0.0, t)),
        Panel::from_ranges(PanelRole::OuterBack(Arm::Depth), (0.0, t), standing, (t, d)),
        Panel::from_ranges(PanelRole::End(Arm::Width), (w - t, w), standing, (t, leg - t)),
        Panel::from_ranges(PanelRole::End(Arm::Depth), (t, leg - t), standing, (d - t, d)),
        // Both returns stop one thickness short of the inside corner and butt
        // against the filler block that fills it.
        Panel::from_ranges(PanelRole::Return(Arm::Width), (leg, w), standing, (leg - t, leg)),
        Panel::from_ranges(PanelRole::Return(Arm::Depth), (leg - t, leg), standing, (leg, d)),
        Panel::from_ranges(PanelRole::Filler, (leg - t, leg), standing, (leg - t, leg)),
    ];

    let mut horizontal = |role: fn(Section) -> PanelRole, y: (f64, f64)| {
        panels.push(Panel::from_ranges(role(Section::Leg), (0.0, w), y, (0.0, leg)));
        panels.push(Panel::from_ranges(role(Section::Remainder), (0.0, leg), y, (leg, d)));
    };
    horizontal(PanelRole::Bottom, (0.0, t));
    horizontal(PanelRole::Top, (h - t, h));

    for (index, y) in shelves.iter().enumerate() {
        let level = shelf_level(*y, h, t);
        // The two sections tile the inside of the carcass: the leg spans the
        // width arm, the remainder runs from the leg's edge to the depth end.
        for section in [Section::Leg, Section::Remainder] {
            let z = match section {
                Section::Leg => (t, leg - t),
                _ => (leg - t, d - t),
            };
            let x = match section {
                Section::Leg => (t, w - t),
                _ => (t, leg - t),
            };
            panels.push(Panel::from_ranges(
                PanelRole::Shelf { index, section },
                x,
                (level, level + t),
                z,
            ));
        }
    }

    panels
}
