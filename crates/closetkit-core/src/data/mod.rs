//! Static data shipped with the engine.

pub mod catalog;

pub use catalog::{PresetEntry, PresetPart, PresetType, UnitCatalog};
