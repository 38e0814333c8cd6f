//! Door, room size, grid and snap switches.

use closetkit_core::constants::{MAX_GRID_SIZE, MIN_GRID_SIZE};
use closetkit_core::LayoutError;
use closetkit_settings::SnapTieBreak;

use super::DesignerState;
use crate::model::DoorUpdate;

impl DesignerState {
    /// Applies `update` to the door, keeping it on its wall.
    pub fn update_door(&mut self, update: DoorUpdate) -> Result<(), LayoutError> {
        let finite = |v: Option<f64>| v.map_or(true, f64::is_finite);
        if !finite(update.offset) || !finite(update.width) {
            return Err(LayoutError::InvalidDimensions {
                reason: "door offset and width must be finite".to_string(),
            });
        }

        let mut door = self.room.door.clone();
        update.apply_to(&mut door);
        let door = self.room.clamp_door(door);
        if door == self.room.door {
            tracing::debug!("Door update changed nothing");
            return Ok(());
        }
        self.interrupt_gesture();
        self.room.door = door;
        self.commit("update door");
        Ok(())
    }

    /// Resizes the room, pulling the door and every unit back inside.
    pub fn set_room_size(&mut self, width: f64, depth: f64) -> Result<(), LayoutError> {
        if !(width.is_finite() && width > 0.0 && depth.is_finite() && depth > 0.0) {
            return Err(LayoutError::InvalidDimensions {
                reason: format!("room {}x{} must be positive", width, depth),
            });
        }
        if width == self.room.width && depth == self.room.depth {
            return Ok(());
        }

        self.interrupt_gesture();
        self.room.width = width;
        self.room.depth = depth;
        self.room.door = self.room.clamp_door(self.room.door.clone());
        let mut units = std::mem::take(&mut self.units);
        for unit in &mut units {
            self.clamp_unit(unit);
        }
        self.units = units;
        self.config.layout.room_width = width;
        self.config.layout.room_depth = depth;
        self.viewport.fit_room(width, depth);
        self.commit("resize room");
        Ok(())
    }

    /// Sets the grid size, clamped to the supported range. Returns the value applied.
    pub fn set_grid_size(&mut self, size: f64) -> f64 {
        let size = if size.is_finite() {
            size.clamp(MIN_GRID_SIZE, MAX_GRID_SIZE)
        } else {
            self.config.layout.grid_size
        };
        if size != self.config.layout.grid_size {
            self.config.layout.grid_size = size;
            self.is_modified = true;
            tracing::debug!("Grid size set to {}", size);
        }
        size
    }

    pub fn set_grid_snap_enabled(&mut self, enabled: bool) {
        self.config.layout.grid_snap_enabled = enabled;
    }

    pub fn set_magnetic_snap_enabled(&mut self, enabled: bool) {
        self.config.layout.magnetic_snap_enabled = enabled;
    }

    /// Non-positive or non-finite thresholds are ignored.
    pub fn set_snap_threshold(&mut self, threshold: f64) {
        if threshold.is_finite() && threshold > 0.0 {
            self.config.layout.snap_threshold = threshold;
        }
    }

    pub fn set_snap_tie_break(&mut self, tie_break: SnapTieBreak) {
        self.config.layout.tie_break = tie_break;
    }
}
