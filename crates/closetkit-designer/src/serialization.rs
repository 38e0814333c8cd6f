//! Persisted design payload.
//!
//! The payload is camelCase JSON:
//!
//! ```text
//! { "components": [Unit], "gridSize": 50, "version": 1,
//!   "room": { "width": 4000, "depth": 2400 },   // optional
//!   "door": { "wall": "bottom", ... },          // optional
//!   "savedAt": "2026-01-01T00:00:00Z" }         // optional
//! ```
//!
//! Parsing and validation happen before anything is handed to the session,
//! so a rejected payload never reaches the model.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

use closetkit_core::constants::GEOMETRY_EPSILON;
use closetkit_core::FormatError;

use crate::model::{Door, Unit};

/// Highest payload version this build reads and the one it writes.
pub const FORMAT_VERSION: u32 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoomDimensions {
    pub width: f64,
    pub depth: f64,
}

/// Complete design payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DesignFile {
    pub components: Vec<Unit>,
    pub grid_size: f64,
    pub version: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub room: Option<RoomDimensions>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub door: Option<Door>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub saved_at: Option<DateTime<Utc>>,
}

fn positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

impl DesignFile {
    pub fn new(components: Vec<Unit>, grid_size: f64) -> Self {
        Self {
            components,
            grid_size,
            version: FORMAT_VERSION,
            room: None,
            door: None,
            saved_at: None,
        }
    }

    /// Parses and validates a payload.
    pub fn from_json(json: &str) -> std::result::Result<Self, FormatError> {
        let design: DesignFile = serde_json::from_str(json)?;
        design.validate()?;
        Ok(design)
    }

    pub fn to_json(&self) -> std::result::Result<String, FormatError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Checks every field the session relies on.
    pub fn validate(&self) -> std::result::Result<(), FormatError> {
        if self.version > FORMAT_VERSION {
            return Err(FormatError::UnsupportedVersion {
                found: self.version,
                supported: FORMAT_VERSION,
            });
        }
        if !positive(self.grid_size) {
            return Err(FormatError::InvalidPayload {
                reason: format!("gridSize must be positive, got {}", self.grid_size),
            });
        }
        if let Some(room) = &self.room {
            if !positive(room.width) || !positive(room.depth) {
                return Err(FormatError::InvalidPayload {
                    reason: format!("room size {}x{} is not positive", room.width, room.depth),
                });
            }
        }
        if let Some(door) = &self.door {
            if !door.offset.is_finite() || !door.width.is_finite() || door.width < 0.0 {
                return Err(FormatError::InvalidPayload {
                    reason: "door offset and width must be finite".to_string(),
                });
            }
        }

        let mut unit_ids = HashSet::new();
        let mut part_ids = HashSet::new();
        for unit in &self.components {
            let invalid = |reason: String| FormatError::InvalidComponent {
                id: unit.id,
                reason,
            };
            if !unit_ids.insert(unit.id) {
                return Err(invalid("duplicate unit id".to_string()));
            }
            if !unit.has_valid_dimensions() {
                return Err(invalid(format!(
                    "dimensions {}x{}x{} are not positive",
                    unit.width, unit.height, unit.depth
                )));
            }
            if !unit.x.is_finite() || !unit.z.is_finite() {
                return Err(invalid("position is not finite".to_string()));
            }
            if unit.is_corner() && unit.width != unit.depth {
                return Err(invalid(format!(
                    "corner unit {}x{} is not square",
                    unit.width, unit.depth
                )));
            }
            if let Some(leg) = unit.leg_depth {
                if !positive(leg) {
                    return Err(invalid(format!("legDepth {} is not positive", leg)));
                }
            }
            for part in &unit.parts {
                if !part_ids.insert(part.id) {
                    return Err(invalid(format!("duplicate part id {}", part.id)));
                }
                if !part.y.is_finite() || part.height.is_some_and(|h| !h.is_finite() || h < 0.0) {
                    return Err(invalid(format!("part {} has a non-finite offset", part.id)));
                }
                if part.y < 0.0 || part.top() > unit.height + GEOMETRY_EPSILON {
                    return Err(invalid(format!(
                        "part {} spans {}..{} outside height {}",
                        part.id,
                        part.y,
                        part.top(),
                        unit.height
                    )));
                }
            }
        }
        Ok(())
    }

    /// Highest unit or part id in the payload.
    pub fn max_id(&self) -> u64 {
        self.components
            .iter()
            .flat_map(|u| std::iter::once(u.id).chain(u.parts.iter().map(|p| p.id)))
            .max()
            .unwrap_or(0)
    }

    /// Saves the payload as pretty JSON.
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let json = self.to_json().context("Failed to serialize design")?;
        std::fs::write(path, json)
            .with_context(|| format!("Failed to write design file: {}", path.display()))?;
        tracing::info!("Saved design to {}", path.display());
        Ok(())
    }

    /// Loads and validates a payload from disk.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read design file: {}", path.display()))?;
        let design = Self::from_json(&json)
            .with_context(|| format!("Failed to parse design file: {}", path.display()))?;
        tracing::info!(
            "Loaded {} components from {}",
            design.components.len(),
            path.display()
        );
        Ok(design)
    }
}
