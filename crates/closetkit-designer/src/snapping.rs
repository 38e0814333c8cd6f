//! Grid and magnetic snapping for units being moved or resized.
//!
//! Precedence per axis: a magnetic match (wall or neighbor edge within the
//! threshold) wins; otherwise the coordinate is rounded to the grid. The room
//! boundary clamp is always applied last. Every function here is pure and
//! total: degenerate input collapses to a valid point instead of failing.

use closetkit_core::constants::{GEOMETRY_EPSILON, MIN_UNIT_SIZE};
use closetkit_settings::{LayoutSettings, SnapTieBreak};

use crate::model::{Rect, UnitId, Wall};

/// Snap behavior knobs, usually taken from [`LayoutSettings`].
#[derive(Debug, Clone, PartialEq)]
pub struct SnapSettings {
    pub grid_size: f64,
    pub threshold: f64,
    pub grid_enabled: bool,
    pub magnetic_enabled: bool,
    pub tie_break: SnapTieBreak,
}

impl Default for SnapSettings {
    fn default() -> Self {
        Self::from(&LayoutSettings::default())
    }
}

impl From<&LayoutSettings> for SnapSettings {
    fn from(layout: &LayoutSettings) -> Self {
        Self {
            grid_size: layout.grid_size,
            threshold: layout.snap_threshold,
            grid_enabled: layout.grid_snap_enabled,
            magnetic_enabled: layout.magnetic_snap_enabled,
            tie_break: layout.tie_break,
        }
    }
}

/// Another unit the moving rectangle may align to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Neighbor {
    pub id: UnitId,
    pub rect: Rect,
}

/// Room bounds plus the other units, excluding the one being moved.
#[derive(Debug, Clone, Copy)]
pub struct SnapContext<'a> {
    pub room_width: f64,
    pub room_depth: f64,
    pub neighbors: &'a [Neighbor],
}

/// Why an axis ended up where it did.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SnapSource {
    Wall(Wall),
    Neighbor(UnitId),
    Grid,
    Free,
}

impl SnapSource {
    pub fn is_magnetic(&self) -> bool {
        matches!(self, Self::Wall(_) | Self::Neighbor(_))
    }
}

/// Adjusted position for a moving rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnapResult {
    pub x: f64,
    pub z: f64,
    pub x_source: SnapSource,
    pub z_source: SnapSource,
}

/// Which edge of a footprint a resize gesture drags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Edge {
    /// Minimum x.
    Left,
    /// Maximum x.
    Right,
    /// Minimum z.
    Top,
    /// Maximum z.
    Bottom,
}

impl Edge {
    fn axis(self) -> Axis {
        match self {
            Self::Left | Self::Right => Axis::X,
            Self::Top | Self::Bottom => Axis::Z,
        }
    }
}

/// Rounds `value` to the nearest multiple of `grid`. A non-positive grid disables rounding.
pub fn grid_snap(value: f64, grid: f64) -> f64 {
    if grid > 0.0 && grid.is_finite() {
        (value / grid).round() * grid
    } else {
        value
    }
}

/// Keeps a `width × depth` footprint inside the room.
///
/// Yields `0 <= x <= room_width - width` and `0 <= z <= room_depth - depth`;
/// a footprint larger than the room is pinned to the origin on that axis.
pub fn clamp_to_room(
    x: f64,
    z: f64,
    width: f64,
    depth: f64,
    room_width: f64,
    room_depth: f64,
) -> (f64, f64) {
    (
        clamp_axis(x, (room_width - width).max(0.0)),
        clamp_axis(z, (room_depth - depth).max(0.0)),
    )
}

fn clamp_axis(value: f64, max: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, max)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Axis {
    X,
    Z,
}

impl Axis {
    fn start(self, r: &Rect) -> f64 {
        match self {
            Self::X => r.x,
            Self::Z => r.z,
        }
    }

    fn size(self, r: &Rect) -> f64 {
        match self {
            Self::X => r.width,
            Self::Z => r.depth,
        }
    }

    fn room_length(self, ctx: &SnapContext<'_>) -> f64 {
        match self {
            Self::X => ctx.room_width,
            Self::Z => ctx.room_depth,
        }
    }

    fn walls(self) -> (Wall, Wall) {
        match self {
            Self::X => (Wall::Left, Wall::Right),
            Self::Z => (Wall::Top, Wall::Bottom),
        }
    }

    /// Whether `a` and `b` share a stretch on the other axis.
    fn cross_overlaps(self, a: &Rect, b: &Rect) -> bool {
        match self {
            Self::X => a.overlap_z(b) > GEOMETRY_EPSILON,
            Self::Z => a.overlap_x(b) > GEOMETRY_EPSILON,
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Candidate {
    value: f64,
    distance: f64,
    source: SnapSource,
}

fn consider(
    best: &mut Option<Candidate>,
    candidate: Candidate,
    threshold: f64,
    tie_break: SnapTieBreak,
) {
    if candidate.distance >= threshold {
        return;
    }
    let replace = match (tie_break, best.as_ref()) {
        (_, None) => true,
        (SnapTieBreak::LastMatch, Some(_)) => true,
        (SnapTieBreak::Closest, Some(current)) => candidate.distance < current.distance,
    };
    if replace {
        *best = Some(candidate);
    }
}

/// Magnetic match for the start coordinate of `rect` along `axis`.
fn magnetic_axis(
    axis: Axis,
    rect: &Rect,
    ctx: &SnapContext<'_>,
    settings: &SnapSettings,
) -> Option<Candidate> {
    let threshold = settings.threshold;
    let tie = settings.tie_break;
    let start = axis.start(rect);
    let size = axis.size(rect);
    let end = start + size;
    let room_length = axis.room_length(ctx);
    let (near_wall, far_wall) = axis.walls();

    let mut best = None;

    consider(
        &mut best,
        Candidate {
            value: 0.0,
            distance: start.abs(),
            source: SnapSource::Wall(near_wall),
        },
        threshold,
        tie,
    );
    consider(
        &mut best,
        Candidate {
            value: room_length - size,
            distance: (end - room_length).abs(),
            source: SnapSource::Wall(far_wall),
        },
        threshold,
        tie,
    );

    for neighbor in ctx.neighbors {
        if !axis.cross_overlaps(rect, &neighbor.rect) {
            continue;
        }
        let n_start = axis.start(&neighbor.rect);
        let n_end = n_start + axis.size(&neighbor.rect);
        let source = SnapSource::Neighbor(neighbor.id);

        // (distance, snapped start): flush near-to-far, flush far-to-near,
        // start-aligned, end-aligned.
        let tests = [
            ((start - n_end).abs(), n_end),
            ((end - n_start).abs(), n_start - size),
            ((start - n_start).abs(), n_start),
            ((end - n_end).abs(), n_end - size),
        ];
        for (distance, value) in tests {
            consider(
                &mut best,
                Candidate {
                    value,
                    distance,
                    source,
                },
                threshold,
                tie,
            );
        }
    }

    best
}

fn snap_axis(
    axis: Axis,
    rect: &Rect,
    ctx: &SnapContext<'_>,
    settings: &SnapSettings,
) -> (f64, SnapSource) {
    if settings.magnetic_enabled {
        if let Some(candidate) = magnetic_axis(axis, rect, ctx, settings) {
            return (candidate.value, candidate.source);
        }
    }
    let raw = axis.start(rect);
    if settings.grid_enabled {
        (grid_snap(raw, settings.grid_size), SnapSource::Grid)
    } else {
        (raw, SnapSource::Free)
    }
}

/// Computes the adjusted position for `rect` (raw candidate position and footprint size).
pub fn snap_position(rect: Rect, ctx: &SnapContext<'_>, settings: &SnapSettings) -> SnapResult {
    let (x, x_source) = snap_axis(Axis::X, &rect, ctx, settings);
    let (z, z_source) = snap_axis(Axis::Z, &rect, ctx, settings);
    let (x, z) = clamp_to_room(x, z, rect.width, rect.depth, ctx.room_width, ctx.room_depth);

    tracing::trace!(
        "snap ({:.1}, {:.1}) -> ({:.1}, {:.1}) via {:?}/{:?}",
        rect.x,
        rect.z,
        x,
        z,
        x_source,
        z_source
    );

    SnapResult {
        x,
        z,
        x_source,
        z_source,
    }
}

/// Snaps a single edge coordinate to a wall, a neighbor edge, or the grid.
fn snap_edge_coordinate(
    axis: Axis,
    value: f64,
    rect: &Rect,
    ctx: &SnapContext<'_>,
    settings: &SnapSettings,
) -> (f64, SnapSource) {
    if settings.magnetic_enabled {
        let room_length = axis.room_length(ctx);
        let (near_wall, far_wall) = axis.walls();
        let mut best = None;
        let mut push = |target: f64, source: SnapSource| {
            consider(
                &mut best,
                Candidate {
                    value: target,
                    distance: (value - target).abs(),
                    source,
                },
                settings.threshold,
                settings.tie_break,
            );
        };

        push(0.0, SnapSource::Wall(near_wall));
        push(room_length, SnapSource::Wall(far_wall));
        for neighbor in ctx.neighbors {
            if !axis.cross_overlaps(rect, &neighbor.rect) {
                continue;
            }
            let n_start = axis.start(&neighbor.rect);
            let n_end = n_start + axis.size(&neighbor.rect);
            push(n_start, SnapSource::Neighbor(neighbor.id));
            push(n_end, SnapSource::Neighbor(neighbor.id));
        }

        if let Some(candidate) = best {
            return (candidate.value, candidate.source);
        }
    }
    if settings.grid_enabled {
        (grid_snap(value, settings.grid_size), SnapSource::Grid)
    } else {
        (value, SnapSource::Free)
    }
}

/// Resizes `rect` by dragging `edge` to the raw coordinate `value`.
///
/// The opposite edge stays fixed, the result is at least `MIN_UNIT_SIZE` wide
/// on the dragged axis (unless the room is smaller), and it stays inside the room.
pub fn snap_edge(
    rect: Rect,
    edge: Edge,
    value: f64,
    ctx: &SnapContext<'_>,
    settings: &SnapSettings,
) -> (Rect, SnapSource) {
    let axis = edge.axis();
    let (snapped, source) = snap_edge_coordinate(axis, value, &rect, ctx, settings);
    let room_length = axis.room_length(ctx).max(0.0);
    let min_size = MIN_UNIT_SIZE.min(room_length);

    let start = axis.start(&rect);
    let end = start + axis.size(&rect);

    let (new_start, new_end) = match edge {
        Edge::Left | Edge::Top => {
            let fixed_end = end.clamp(min_size, room_length);
            let moved = clamp_axis(snapped, (fixed_end - min_size).max(0.0));
            (moved, fixed_end)
        }
        Edge::Right | Edge::Bottom => {
            let fixed_start = clamp_axis(start, (room_length - min_size).max(0.0));
            let moved = snapped.clamp(fixed_start + min_size, room_length.max(fixed_start + min_size));
            (fixed_start, moved)
        }
    };

    let resized = match axis {
        Axis::X => Rect::new(new_start, rect.z, new_end - new_start, rect.depth),
        Axis::Z => Rect::new(rect.x, new_start, rect.width, new_end - new_start),
    };
    (resized, source)
}
