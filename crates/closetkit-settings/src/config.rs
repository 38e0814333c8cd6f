//! Configuration for the layout engine
//!
//! Provides configuration file handling, defaults, and validation.
//! Supports JSON and TOML file formats stored in platform-specific directories.
//!
//! Configuration is organized into logical sections:
//! - Layout settings (grid, magnetic snapping, corner construction, room)
//! - View settings (2D pixel scale, 3D scene scale, zoom limits)
//! - History settings (undo depth)

use closetkit_core::constants;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, ConfigResult, SettingsError, SettingsResult};

/// How the snap engine picks among several qualifying neighbor edges on one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SnapTieBreak {
    /// The candidate with the smallest distance wins.
    Closest,
    /// The last candidate in iteration order wins.
    LastMatch,
}

impl Default for SnapTieBreak {
    fn default() -> Self {
        Self::Closest
    }
}

impl std::fmt::Display for SnapTieBreak {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Closest => write!(f, "closest"),
            Self::LastMatch => write!(f, "last-match"),
        }
    }
}

/// Layout and snapping settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutSettings {
    /// Grid spacing in mm (10–200)
    pub grid_size: f64,
    /// Magnetic snap distance in mm
    pub snap_threshold: f64,
    /// Round positions to the grid when no magnetic snap applies
    pub grid_snap_enabled: bool,
    /// Pull edges onto walls and neighbors
    pub magnetic_snap_enabled: bool,
    /// Neighbor tie-break rule
    pub tie_break: SnapTieBreak,
    /// Arm thickness of corner units in mm
    pub leg_depth: f64,
    /// Board thickness of generated panels in mm
    pub panel_thickness: f64,
    /// Room width for new sessions in mm
    pub room_width: f64,
    /// Room depth for new sessions in mm
    pub room_depth: f64,
}

impl Default for LayoutSettings {
    fn default() -> Self {
        Self {
            grid_size: constants::DEFAULT_GRID_SIZE,
            snap_threshold: constants::DEFAULT_SNAP_THRESHOLD,
            grid_snap_enabled: true,
            magnetic_snap_enabled: true,
            tie_break: SnapTieBreak::default(),
            leg_depth: constants::DEFAULT_LEG_DEPTH,
            panel_thickness: constants::PANEL_THICKNESS,
            room_width: constants::DEFAULT_ROOM_WIDTH,
            room_depth: constants::DEFAULT_ROOM_DEPTH,
        }
    }
}

/// View scaling settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewSettings {
    /// Pixels per mm at zoom 1.0
    pub base_scale: f64,
    /// 3D scene units per mm
    pub unit_scale: f64,
    pub min_zoom: f64,
    pub max_zoom: f64,
    pub initial_zoom: f64,
}

impl Default for ViewSettings {
    fn default() -> Self {
        Self {
            base_scale: constants::BASE_SCALE,
            unit_scale: constants::UNIT_SCALE,
            min_zoom: constants::MIN_ZOOM,
            max_zoom: constants::MAX_ZOOM,
            initial_zoom: constants::DEFAULT_ZOOM,
        }
    }
}

/// Undo history settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HistorySettings {
    /// Snapshots retained before the oldest is evicted
    pub max_depth: usize,
}

impl Default for HistorySettings {
    fn default() -> Self {
        Self {
            max_depth: constants::MAX_HISTORY_DEPTH,
        }
    }
}

/// Complete engine configuration
///
/// Aggregates all settings sections and provides file I/O operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub layout: LayoutSettings,
    pub view: ViewSettings,
    pub history: HistorySettings,
}

fn out_of_range(key: &str, value: impl ToString) -> ConfigError {
    ConfigError::ValueOutOfRange {
        key: key.to_string(),
        value: value.to_string(),
    }
}

fn positive(key: &str, value: f64) -> ConfigResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(out_of_range(key, value))
    }
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Platform config location, e.g. `~/.config/closetkit/config.toml`.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("closetkit").join("config.toml"))
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| SettingsError::LoadError(format!("{}: {}", path.display(), e)))?;

        let config: Self = match Format::from_path(path)? {
            Format::Json => serde_json::from_str(&content)?,
            Format::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        tracing::info!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Load config from file, falling back to defaults when the file does not exist
    pub fn load_or_default(path: &Path) -> SettingsResult<Self> {
        if path.exists() {
            Self::load_from_file(path)
        } else {
            tracing::debug!("No configuration at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match Format::from_path(path)? {
            Format::Json => serde_json::to_string_pretty(self)?,
            Format::Toml => toml::to_string_pretty(self)?,
        };

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)
                    .map_err(|e| SettingsError::ConfigDirectory(e.to_string()))?;
            }
        }

        std::fs::write(path, content)
            .map_err(|e| SettingsError::SaveError(format!("{}: {}", path.display(), e)))?;

        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> ConfigResult<()> {
        let layout = &self.layout;
        if !(constants::MIN_GRID_SIZE..=constants::MAX_GRID_SIZE).contains(&layout.grid_size) {
            return Err(out_of_range("layout.grid_size", layout.grid_size));
        }
        positive("layout.snap_threshold", layout.snap_threshold)?;
        positive("layout.leg_depth", layout.leg_depth)?;
        positive("layout.panel_thickness", layout.panel_thickness)?;
        positive("layout.room_width", layout.room_width)?;
        positive("layout.room_depth", layout.room_depth)?;

        if layout.panel_thickness * 2.0 >= layout.leg_depth {
            return Err(ConfigError::Inconsistent(
                "layout.leg_depth must exceed two panel thicknesses".to_string(),
            ));
        }

        let view = &self.view;
        positive("view.base_scale", view.base_scale)?;
        positive("view.unit_scale", view.unit_scale)?;
        positive("view.min_zoom", view.min_zoom)?;
        positive("view.max_zoom", view.max_zoom)?;
        if view.min_zoom > view.max_zoom {
            return Err(ConfigError::Inconsistent(
                "view.min_zoom must not exceed view.max_zoom".to_string(),
            ));
        }
        if !(view.min_zoom..=view.max_zoom).contains(&view.initial_zoom) {
            return Err(out_of_range("view.initial_zoom", view.initial_zoom));
        }

        if self.history.max_depth == 0 {
            return Err(out_of_range("history.max_depth", self.history.max_depth));
        }

        Ok(())
    }
}

enum Format {
    Json,
    Toml,
}

impl Format {
    fn from_path(path: &Path) -> ConfigResult<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(Self::Json),
            Some("toml") => Ok(Self::Toml),
            other => Err(ConfigError::UnsupportedFormat(
                other.unwrap_or("<none>").to_string(),
            )),
        }
    }
}
