//! Overlap resolution for free (3D) dragging.
//!
//! Every unit is treated as its axis-aligned plan footprint; corner units
//! already report a square footprint. Resolution is greedy: each obstacle is
//! handled once, in list order, so pushing away from one obstacle may create
//! an overlap with another.

use crate::model::Rect;
use crate::snapping::clamp_to_room;

/// Displacement that moves `candidate` out of `obstacle` along the cheaper axis.
///
/// Returns `(0, 0)` when the two do not overlap. The push is signed away from
/// the obstacle's center; a candidate centered exactly on it moves toward +x/+z.
pub fn push_out_vector(candidate: &Rect, obstacle: &Rect) -> (f64, f64) {
    if !candidate.overlaps(obstacle) {
        return (0.0, 0.0);
    }

    let c = candidate.center();
    let o = obstacle.center();

    let dx = if c.x < o.x {
        obstacle.x - candidate.max_x()
    } else {
        obstacle.max_x() - candidate.x
    };
    let dz = if c.y < o.y {
        obstacle.z - candidate.max_z()
    } else {
        obstacle.max_z() - candidate.z
    };

    if dx.abs() <= dz.abs() {
        (dx, 0.0)
    } else {
        (0.0, dz)
    }
}

/// Pushes `candidate` out of each overlapping obstacle in order.
pub fn resolve_collisions(candidate: Rect, obstacles: &[Rect]) -> Rect {
    obstacles.iter().fold(candidate, |current, obstacle| {
        let (dx, dz) = push_out_vector(&current, obstacle);
        if dx == 0.0 && dz == 0.0 {
            current
        } else {
            tracing::trace!("push out by ({:.1}, {:.1})", dx, dz);
            current.translated(dx, dz)
        }
    })
}

/// Collision push-out followed by the room clamp.
pub fn resolve_in_room(
    candidate: Rect,
    obstacles: &[Rect],
    room_width: f64,
    room_depth: f64,
) -> Rect {
    let resolved = resolve_collisions(candidate, obstacles);
    let (x, z) = clamp_to_room(
        resolved.x,
        resolved.z,
        resolved.width,
        resolved.depth,
        room_width,
        room_depth,
    );
    resolved.with_position(x, z)
}

/// Indices of obstacles that `candidate` overlaps.
pub fn overlapping(candidate: &Rect, obstacles: &[Rect]) -> Vec<usize> {
    obstacles
        .iter()
        .enumerate()
        .filter(|(_, o)| candidate.overlaps(o))
        .map(|(i, _)| i)
        .collect()
}
