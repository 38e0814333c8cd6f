//! ClosetKit Settings Crate
//!
//! Handles engine configuration: snapping and grid behavior, corner-unit
//! construction parameters, view scaling, and history depth.

pub mod config;
pub mod error;

pub use config::{Config, HistorySettings, LayoutSettings, SnapTieBreak, ViewSettings};
pub use error::{ConfigError, ConfigResult, SettingsError, SettingsResult};
