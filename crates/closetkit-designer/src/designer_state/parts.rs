//! Shelf, rod and drawer edits.

use closetkit_core::constants::DEFAULT_DRAWER_HEIGHT;
use closetkit_core::{LayoutError, PartKind};

use super::DesignerState;
use crate::model::{Part, PartId, PartUpdate, UnitId};

fn check_offset(y: f64, height: Option<f64>) -> Result<(), LayoutError> {
    let height_ok = height.map_or(true, |h| h.is_finite() && h >= 0.0);
    if y.is_finite() && height_ok {
        Ok(())
    } else {
        Err(LayoutError::InvalidDimensions {
            reason: format!("part offset {} / height {:?} is not valid", y, height),
        })
    }
}

impl DesignerState {
    /// Adds a part to a unit. Drawers without a height get the default front height.
    pub fn add_part(
        &mut self,
        unit_id: UnitId,
        kind: PartKind,
        y: f64,
        height: Option<f64>,
    ) -> Result<PartId, LayoutError> {
        let index = self.unit_index(unit_id)?;
        let height = match (kind, height) {
            (PartKind::Drawer, None) => Some(DEFAULT_DRAWER_HEIGHT),
            (_, h) => h,
        };
        check_offset(y, height)?;
        self.interrupt_gesture();

        let part_id = self.alloc_id();
        let unit = &mut self.units[index];
        let mut part = Part::new(part_id, kind, y, height);
        part.clamp_to_height(unit.height);
        unit.parts.push(part);
        self.commit("add part");
        Ok(part_id)
    }

    pub fn update_part(
        &mut self,
        unit_id: UnitId,
        part_id: PartId,
        update: PartUpdate,
    ) -> Result<(), LayoutError> {
        let index = self.unit_index(unit_id)?;
        if self.units[index].part(part_id).is_none() {
            return Err(LayoutError::UnknownPart { unit_id, part_id });
        }
        self.interrupt_gesture();
        let unit = &self.units[index];
        let current = unit
            .part(part_id)
            .ok_or(LayoutError::UnknownPart { unit_id, part_id })?;

        let mut part = current.clone();
        update.apply_to(&mut part);
        check_offset(part.y, part.height)?;
        part.clamp_to_height(unit.height);

        if &part == current {
            tracing::debug!("Update of part {} changed nothing", part_id);
            return Ok(());
        }
        if let Some(slot) = self.units[index].part_mut(part_id) {
            *slot = part;
        }
        self.commit("update part");
        Ok(())
    }

    pub fn delete_part(&mut self, unit_id: UnitId, part_id: PartId) -> Result<Part, LayoutError> {
        let index = self.unit_index(unit_id)?;
        if self.units[index].part(part_id).is_none() {
            return Err(LayoutError::UnknownPart { unit_id, part_id });
        }
        self.interrupt_gesture();
        let parts = &mut self.units[index].parts;
        let position = parts
            .iter()
            .position(|p| p.id == part_id)
            .ok_or(LayoutError::UnknownPart { unit_id, part_id })?;
        let part = parts.remove(position);
        self.commit("delete part");
        Ok(part)
    }
}
