//! Live drag and resize gestures.
//!
//! `preview_*` calls write straight into the live unit list and never touch
//! history; `commit_*` (or [`DesignerState::finish_gesture`]) records the
//! settled result as one snapshot. Cancelling restores the live units from the
//! history present, which the previews never modified. Any other structural
//! edit made mid-gesture cancels the gesture first.

use closetkit_core::LayoutError;

use super::DesignerState;
use crate::collision::resolve_in_room;
use crate::model::{Point, Rect, Unit, UnitId};
use crate::snapping::{snap_edge, snap_position, Edge};

/// How a dragged unit is positioned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragMode {
    /// Plan view: grid and magnetic snapping.
    #[default]
    Plan,
    /// 3D view: collision push-out against other units.
    Free,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureKind {
    Move(DragMode),
    Resize(Edge),
}

/// The in-progress gesture, at most one per session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gesture {
    pub unit_id: UnitId,
    pub kind: GestureKind,
    /// Footprint when the gesture started.
    pub origin: Rect,
}

fn check_raw(values: &[f64]) -> Result<(), LayoutError> {
    if values.iter().all(|v| v.is_finite()) {
        Ok(())
    } else {
        Err(LayoutError::InvalidDimensions {
            reason: format!("gesture coordinates {:?} are not finite", values),
        })
    }
}

/// Writes a plan footprint back into unit dimensions.
fn apply_footprint(unit: &mut Unit, rect: &Rect, edge: Edge) {
    if unit.is_corner() {
        let side = match edge {
            Edge::Left | Edge::Right => rect.width,
            Edge::Top | Edge::Bottom => rect.depth,
        };
        unit.width = side;
        unit.depth = side;
    } else if unit.rotation.is_quarter() {
        unit.width = rect.depth;
        unit.depth = rect.width;
    } else {
        unit.width = rect.width;
        unit.depth = rect.depth;
    }
    unit.x = rect.x;
    unit.z = rect.z;
}

impl DesignerState {
    pub fn active_gesture(&self) -> Option<&Gesture> {
        self.gesture.as_ref()
    }

    fn committed_unit(&self, id: UnitId) -> Option<&Unit> {
        self.history
            .present()
            .and_then(|s| s.units.iter().find(|u| u.id == id))
    }

    /// Index of a unit that may be moved or resized.
    fn movable_index(&self, id: UnitId) -> Result<usize, LayoutError> {
        let index = self.unit_index(id)?;
        if self.units[index].locked {
            tracing::debug!("Unit {} is locked, gesture ignored", id);
            return Err(LayoutError::UnitLocked { id });
        }
        Ok(index)
    }

    /// Starts (or continues) a gesture on `id`, abandoning one on another unit.
    fn begin_gesture(&mut self, id: UnitId, kind: GestureKind) -> Gesture {
        if let Some(gesture) = self.gesture {
            if gesture.unit_id == id && gesture.kind == kind {
                return gesture;
            }
            self.cancel_gesture();
        }
        let origin = self
            .units
            .iter()
            .find(|u| u.id == id)
            .map(Unit::footprint)
            .unwrap_or(Rect::new(0.0, 0.0, 0.0, 0.0));
        let gesture = Gesture {
            unit_id: id,
            kind,
            origin,
        };
        self.gesture = Some(gesture);
        gesture
    }

    fn move_target(&self, index: usize, raw_x: f64, raw_z: f64, mode: DragMode) -> Point {
        let unit = &self.units[index];
        let (w, d) = unit.plan_size();
        let candidate = Rect::new(raw_x, raw_z, w, d);
        match mode {
            DragMode::Plan => {
                let neighbors = self.neighbors_excluding(Some(unit.id));
                let result = snap_position(
                    candidate,
                    &self.snap_context(&neighbors),
                    &self.snap_settings(),
                );
                Point::new(result.x, result.z)
            }
            DragMode::Free => {
                let obstacles: Vec<Rect> = self
                    .units
                    .iter()
                    .filter(|u| u.id != unit.id)
                    .map(Unit::footprint)
                    .collect();
                let placed =
                    resolve_in_room(candidate, &obstacles, self.room.width, self.room.depth);
                Point::new(placed.x, placed.z)
            }
        }
    }

    /// Moves the unit live without recording history. Returns the adjusted position.
    pub fn preview_move(
        &mut self,
        id: UnitId,
        raw_x: f64,
        raw_z: f64,
        mode: DragMode,
    ) -> Result<Point, LayoutError> {
        check_raw(&[raw_x, raw_z])?;
        self.movable_index(id)?;
        self.begin_gesture(id, GestureKind::Move(mode));
        let index = self.unit_index(id)?;
        let target = self.move_target(index, raw_x, raw_z, mode);
        let unit = &mut self.units[index];
        unit.x = target.x;
        unit.z = target.y;
        tracing::trace!("preview move {} -> ({:.1}, {:.1})", id, target.x, target.y);
        Ok(target)
    }

    /// Settles a move and records it. Returns the committed position.
    pub fn commit_move(
        &mut self,
        id: UnitId,
        raw_x: f64,
        raw_z: f64,
        mode: DragMode,
    ) -> Result<Point, LayoutError> {
        let target = self.preview_move(id, raw_x, raw_z, mode)?;
        self.settle(id, "move unit");
        Ok(target)
    }

    /// Drags one edge of the unit live. Returns the resized footprint.
    pub fn preview_resize(
        &mut self,
        id: UnitId,
        edge: Edge,
        raw: f64,
    ) -> Result<Rect, LayoutError> {
        check_raw(&[raw])?;
        self.movable_index(id)?;
        let gesture = self.begin_gesture(id, GestureKind::Resize(edge));
        let index = self.unit_index(id)?;

        let neighbors = self.neighbors_excluding(Some(id));
        let (resized, source) = snap_edge(
            gesture.origin,
            edge,
            raw,
            &self.snap_context(&neighbors),
            &self.snap_settings(),
        );

        let mut unit = self.units[index].clone();
        apply_footprint(&mut unit, &resized, edge);
        self.clamp_unit(&mut unit);
        let footprint = unit.footprint();
        self.units[index] = unit;
        tracing::trace!("preview resize {} {:?} via {:?}", id, edge, source);
        Ok(footprint)
    }

    /// Settles a resize and records it. Returns the committed footprint.
    pub fn commit_resize(&mut self, id: UnitId, edge: Edge, raw: f64) -> Result<Rect, LayoutError> {
        let footprint = self.preview_resize(id, edge, raw)?;
        self.settle(id, "resize unit");
        Ok(footprint)
    }

    /// Commits whatever the active gesture on `id` last previewed.
    pub fn finish_gesture(&mut self, id: UnitId) -> Result<(), LayoutError> {
        match self.gesture {
            Some(gesture) if gesture.unit_id == id => {
                let action = match gesture.kind {
                    GestureKind::Move(_) => "move unit",
                    GestureKind::Resize(_) => "resize unit",
                };
                self.settle(id, action);
                Ok(())
            }
            _ => Err(LayoutError::NoActiveGesture { id }),
        }
    }

    /// Drops the live preview and returns to the last committed state.
    pub fn cancel_gesture(&mut self) -> bool {
        if self.gesture.take().is_none() {
            return false;
        }
        if let Some(snapshot) = self.history.present().cloned() {
            self.restore(snapshot);
        }
        tracing::debug!("Gesture cancelled");
        true
    }

    /// Ends an active gesture before a structural edit so its preview is
    /// never recorded as part of that edit.
    pub(crate) fn interrupt_gesture(&mut self) {
        if let Some(gesture) = self.gesture {
            tracing::debug!("Edit interrupts gesture on unit {}", gesture.unit_id);
            self.cancel_gesture();
        }
    }

    fn settle(&mut self, id: UnitId, action: &str) {
        let live = self.units.iter().find(|u| u.id == id);
        if live == self.committed_unit(id) {
            tracing::debug!("{} of {} settled where it started", action, id);
            self.gesture = None;
            return;
        }
        self.commit(action);
    }
}
