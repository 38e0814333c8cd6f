//! File I/O operations (save, load, new) for designer state.

use chrono::Utc;

use closetkit_core::constants::{MAX_GRID_SIZE, MIN_GRID_SIZE};
use closetkit_core::FormatError;

use super::DesignerState;
use crate::serialization::{DesignFile, RoomDimensions};

impl DesignerState {
    /// Builds the persisted payload for the current model.
    pub fn to_design_file(&self) -> DesignFile {
        let mut design = DesignFile::new(self.units.clone(), self.grid_size());
        design.room = Some(RoomDimensions {
            width: self.room.width,
            depth: self.room.depth,
        });
        design.door = Some(self.room.door.clone());
        design
    }

    pub fn to_json(&self) -> Result<String, FormatError> {
        self.to_design_file().to_json()
    }

    /// Replaces the model with a validated payload.
    ///
    /// Selection and history are reset, the id counter continues after the
    /// highest id in the payload. Fields absent from older payloads (`room`,
    /// `door`) keep their current values.
    pub fn apply_design_file(&mut self, design: DesignFile) {
        let max_id = design.max_id();
        if let Some(room) = design.room {
            self.room.width = room.width;
            self.room.depth = room.depth;
            self.config.layout.room_width = room.width;
            self.config.layout.room_depth = room.depth;
        }
        if let Some(door) = design.door {
            self.room.door = self.room.clamp_door(door);
        }
        self.config.layout.grid_size = design.grid_size.clamp(MIN_GRID_SIZE, MAX_GRID_SIZE);
        self.next_id = max_id + 1;
        self.units = design.components;
        self.selection.clear();
        self.gesture = None;
        self.clear_history();
        self.version += 1;
        self.is_modified = false;
    }

    /// Parses, validates and applies a JSON payload.
    ///
    /// On error the model is left exactly as it was.
    pub fn load_json(&mut self, json: &str) -> Result<(), FormatError> {
        let design = DesignFile::from_json(json).map_err(|err| {
            tracing::warn!("Discarding design payload: {}", err);
            err
        })?;
        self.apply_design_file(design);
        Ok(())
    }

    /// Save design to file.
    pub fn save_to_file(&mut self, path: impl AsRef<std::path::Path>) -> anyhow::Result<()> {
        let mut design = self.to_design_file();
        design.saved_at = Some(Utc::now());
        design.save_to_file(&path)?;

        self.current_file_path = Some(path.as_ref().to_path_buf());
        self.is_modified = false;
        Ok(())
    }

    /// Load design from file.
    pub fn load_from_file(&mut self, path: impl AsRef<std::path::Path>) -> anyhow::Result<()> {
        let design = DesignFile::load_from_file(&path)?;
        self.apply_design_file(design);

        self.design_name = path
            .as_ref()
            .file_stem()
            .and_then(|n| n.to_str())
            .unwrap_or("Untitled")
            .to_string();
        self.current_file_path = Some(path.as_ref().to_path_buf());
        Ok(())
    }

    /// Create new design (clear all).
    pub fn new_design(&mut self) {
        self.units.clear();
        self.room.door = self.room.clamp_door(Default::default());
        self.selection.clear();
        self.gesture = None;
        self.next_id = 1;
        self.current_file_path = None;
        self.is_modified = false;
        self.design_name = "Untitled".to_string();
        self.clear_history();
        self.version += 1;
        tracing::info!("Started new design");
    }

    /// Mark design as modified.
    pub fn mark_modified(&mut self) {
        self.is_modified = true;
    }

    /// Get display name for the design.
    pub fn display_name(&self) -> String {
        let name = if let Some(path) = &self.current_file_path {
            path.file_name()
                .and_then(|n| n.to_str())
                .unwrap_or(&self.design_name)
        } else {
            &self.design_name
        };

        if self.is_modified {
            format!("{}*", name)
        } else {
            name.to_string()
        }
    }
}
