//! Unit creation, updates and commands.

use closetkit_core::{LayoutError, PresetEntry, PresetType, UnitKind};

use super::DesignerState;
use crate::collision::resolve_in_room;
use crate::model::{Rect, Unit, UnitId, UnitUpdate};
use crate::snapping::snap_position;

fn check_dimensions(width: f64, height: f64, depth: f64) -> Result<(), LayoutError> {
    if [width, height, depth].iter().all(|v| v.is_finite() && *v > 0.0) {
        Ok(())
    } else {
        Err(LayoutError::InvalidDimensions {
            reason: format!("{}x{}x{} must be positive and finite", width, height, depth),
        })
    }
}

fn check_position(x: f64, z: f64) -> Result<(), LayoutError> {
    if x.is_finite() && z.is_finite() {
        Ok(())
    } else {
        Err(LayoutError::InvalidDimensions {
            reason: format!("position ({}, {}) is not finite", x, z),
        })
    }
}

impl DesignerState {
    fn preset(&self, preset_id: &str) -> Result<&'static PresetEntry, LayoutError> {
        self.catalog.find_furniture_preset(preset_id).ok_or_else(|| {
            tracing::debug!("Preset {} not found, nothing added", preset_id);
            LayoutError::InvalidPreset {
                preset: preset_id.to_string(),
            }
        })
    }

    fn place_new_unit(&mut self, entry: &PresetEntry, x: f64, z: f64) -> UnitId {
        self.interrupt_gesture();
        let id = self.alloc_id();
        let mut unit = Unit::from_preset(id, entry, || 0);
        for part in &mut unit.parts {
            part.id = self.alloc_id();
        }
        unit.x = x;
        unit.z = z;
        self.clamp_unit(&mut unit);
        self.units.push(unit);
        self.commit("add unit");
        id
    }

    /// Adds a catalog unit at an already snapped position. The position is only clamped.
    pub fn add_unit(&mut self, preset_id: &str, x: f64, z: f64) -> Result<UnitId, LayoutError> {
        check_position(x, z)?;
        let entry = self.preset(preset_id)?;
        Ok(self.place_new_unit(entry, x, z))
    }

    /// Adds the `preset_type` unit of exactly `width` mm.
    pub fn add_preset_unit(
        &mut self,
        preset_type: PresetType,
        width: f64,
        x: f64,
        z: f64,
    ) -> Result<UnitId, LayoutError> {
        check_position(x, z)?;
        let entry = self.catalog.find_preset(preset_type, width).ok_or_else(|| {
            tracing::debug!("No {} preset of width {}", preset_type, width);
            LayoutError::InvalidPreset {
                preset: format!("{} {}", preset_type, width),
            }
        })?;
        Ok(self.place_new_unit(entry, x, z))
    }

    /// Drops a catalog unit at a raw plan position, snapping it first.
    pub fn drop_unit(
        &mut self,
        preset_id: &str,
        raw_x: f64,
        raw_z: f64,
    ) -> Result<UnitId, LayoutError> {
        check_position(raw_x, raw_z)?;
        let entry = self.preset(preset_id)?;
        let (w, d) = Unit::from_preset(0, entry, || 0).plan_size();
        self.interrupt_gesture();
        let neighbors = self.neighbors_excluding(None);
        let snapped = snap_position(
            Rect::new(raw_x, raw_z, w, d),
            &self.snap_context(&neighbors),
            &self.snap_settings(),
        );
        Ok(self.place_new_unit(entry, snapped.x, snapped.z))
    }

    /// Adds a unit that is not in the catalog.
    pub fn add_custom_unit(
        &mut self,
        kind: UnitKind,
        width: f64,
        height: f64,
        depth: f64,
        x: f64,
        z: f64,
    ) -> Result<UnitId, LayoutError> {
        check_dimensions(width, height, depth)?;
        check_position(x, z)?;
        self.interrupt_gesture();
        let id = self.alloc_id();
        let mut unit = Unit::new(id, kind, width, height, depth);
        if kind.is_corner() {
            let side = width.max(depth);
            unit.width = side;
            unit.depth = side;
        }
        unit.name = format!("{} {}", kind, width);
        unit.x = x;
        unit.z = z;
        self.clamp_unit(&mut unit);
        self.units.push(unit);
        self.commit("add custom unit");
        Ok(id)
    }

    /// Applies the present fields of `update` to one unit.
    ///
    /// Locked units accept only `locked` and `name`. Corner units stay square:
    /// changing one of width/depth changes the other, changing both uses the
    /// larger. Parts are clamped into a
    /// reduced height and the unit is clamped into the room.
    pub fn update_unit(&mut self, id: UnitId, update: UnitUpdate) -> Result<(), LayoutError> {
        let index = self.unit_index(id)?;
        self.interrupt_gesture();
        let current = &self.units[index];
        if current.locked && update.touches_geometry() {
            tracing::debug!("Unit {} is locked, update ignored", id);
            return Err(LayoutError::UnitLocked { id });
        }

        let mut unit = current.clone();
        update.apply_to(&mut unit);
        check_position(unit.x, unit.z)?;
        if unit.is_corner() {
            match (update.width, update.depth) {
                (Some(w), None) => unit.depth = w,
                (None, Some(d)) => unit.width = d,
                (Some(w), Some(d)) => {
                    let side = w.max(d);
                    unit.width = side;
                    unit.depth = side;
                }
                (None, None) => {}
            }
        }
        check_dimensions(unit.width, unit.height, unit.depth)?;

        unit.clamp_parts();
        self.clamp_unit(&mut unit);

        if unit == self.units[index] {
            tracing::debug!("Update of unit {} changed nothing", id);
            return Ok(());
        }
        self.units[index] = unit;
        self.commit("update unit");
        Ok(())
    }

    /// Removes a unit and drops it from the selection.
    pub fn delete_unit(&mut self, id: UnitId) -> Result<Unit, LayoutError> {
        let index = self.unit_index(id)?;
        self.interrupt_gesture();
        let unit = self.units.remove(index);
        self.selection.deselect(id);
        self.commit("delete unit");
        Ok(unit)
    }

    /// Copies a unit next to the original, pushed clear of other units.
    pub fn duplicate_unit(&mut self, id: UnitId) -> Result<UnitId, LayoutError> {
        let index = self.unit_index(id)?;
        self.interrupt_gesture();
        let mut copy = self.units[index].clone();
        let new_id = self.alloc_id();
        copy.id = new_id;
        copy.locked = false;
        for part in &mut copy.parts {
            part.id = self.alloc_id();
        }

        let footprint = copy.footprint();
        let obstacles: Vec<Rect> = self.units.iter().map(|u| u.footprint()).collect();
        let placed = resolve_in_room(
            footprint.translated(footprint.width, 0.0),
            &obstacles,
            self.room.width,
            self.room.depth,
        );
        copy.x = placed.x;
        copy.z = placed.z;

        self.units.push(copy);
        self.selection.select(new_id, false);
        self.commit("duplicate unit");
        Ok(new_id)
    }

    /// Turns a unit 90° clockwise about its footprint's top-left corner.
    pub fn rotate_unit(&mut self, id: UnitId) -> Result<(), LayoutError> {
        let index = self.unit_index(id)?;
        if self.units[index].locked {
            return Err(LayoutError::UnitLocked { id });
        }
        self.interrupt_gesture();
        let mut unit = self.units[index].clone();
        unit.rotation = unit.rotation.next();
        self.clamp_unit(&mut unit);
        self.units[index] = unit;
        self.commit("rotate unit");
        Ok(())
    }

    /// Toggles the mirrored flag.
    pub fn mirror_unit(&mut self, id: UnitId) -> Result<(), LayoutError> {
        let index = self.unit_index(id)?;
        if self.units[index].locked {
            return Err(LayoutError::UnitLocked { id });
        }
        self.interrupt_gesture();
        self.units[index].mirrored = !self.units[index].mirrored;
        self.commit("mirror unit");
        Ok(())
    }

    pub fn set_unit_locked(&mut self, id: UnitId, locked: bool) -> Result<(), LayoutError> {
        let index = self.unit_index(id)?;
        if self.units[index].locked == locked {
            return Ok(());
        }
        self.interrupt_gesture();
        self.units[index].locked = locked;
        self.commit(if locked { "lock unit" } else { "unlock unit" });
        Ok(())
    }

    /// Deletes every selected unit. Returns how many were removed.
    pub fn delete_selected(&mut self) -> usize {
        let selected = self.selection.selected().to_vec();
        if self.units.iter().any(|u| selected.contains(&u.id)) {
            self.interrupt_gesture();
        }
        let before = self.units.len();
        self.units.retain(|u| !selected.contains(&u.id));
        let removed = before - self.units.len();
        self.selection.clear();
        if removed > 0 {
            self.commit("delete selected");
        }
        removed
    }

    /// Removes every unit; the door and room stay.
    pub fn clear_all(&mut self) {
        self.interrupt_gesture();
        self.units.clear();
        self.selection.clear();
        self.commit("clear all");
        tracing::info!("Cleared all units");
    }
}
