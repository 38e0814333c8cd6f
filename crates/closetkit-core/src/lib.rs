//! # ClosetKit Core
//!
//! Core types, constants, and the unit catalog for ClosetKit.
//! Provides the error taxonomy shared by every layer, the closed variant
//! types used by the spatial model, and the read-only preset table.

pub mod constants;
pub mod data;
pub mod error;
pub mod types;

pub use data::{PresetEntry, PresetPart, PresetType, UnitCatalog};

pub use error::{Error, FormatError, LayoutError, Result};

pub use types::{CornerOrientation, PartKind, UnitKind};
