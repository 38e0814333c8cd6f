//! Static (hard-coded) table of purchasable unit presets.
//!
//! The catalog is read-only shared data: the editor looks entries up by
//! preset type and width, or by furniture id, and never mutates them.
//! Lookups return `None` when nothing matches; callers treat that as a no-op.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::types::{PartKind, UnitKind};

/// Family a preset belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PresetType {
    Wardrobe,
    Drawer,
    Shelf,
    #[serde(rename = "corner-L")]
    CornerL,
    #[serde(rename = "corner-R")]
    CornerR,
}

impl PresetType {
    /// Unit kind created from presets of this type.
    pub fn unit_kind(self) -> UnitKind {
        match self {
            Self::Wardrobe | Self::Drawer | Self::Shelf => UnitKind::Standard,
            Self::CornerL => UnitKind::CornerL,
            Self::CornerR => UnitKind::CornerR,
        }
    }
}

impl fmt::Display for PresetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Wardrobe => write!(f, "wardrobe"),
            Self::Drawer => write!(f, "drawer"),
            Self::Shelf => write!(f, "shelf"),
            Self::CornerL => write!(f, "corner-L"),
            Self::CornerR => write!(f, "corner-R"),
        }
    }
}

impl FromStr for PresetType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "wardrobe" => Ok(Self::Wardrobe),
            "drawer" => Ok(Self::Drawer),
            "shelf" => Ok(Self::Shelf),
            "corner-L" | "corner-l" => Ok(Self::CornerL),
            "corner-R" | "corner-r" => Ok(Self::CornerR),
            _ => Err(format!("Unknown preset type: {}", s)),
        }
    }
}

/// A part that ships pre-installed in a preset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PresetPart {
    pub kind: PartKind,
    /// Vertical offset from the unit floor.
    pub y: f64,
    pub height: Option<f64>,
}

impl PresetPart {
    const fn shelf(y: f64) -> Self {
        Self {
            kind: PartKind::Shelf,
            y,
            height: None,
        }
    }

    const fn rod(y: f64) -> Self {
        Self {
            kind: PartKind::Rod,
            y,
            height: None,
        }
    }

    const fn drawer(y: f64, height: f64) -> Self {
        Self {
            kind: PartKind::Drawer,
            y,
            height: Some(height),
        }
    }
}

/// One purchasable preset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PresetEntry {
    pub id: &'static str,
    pub name: &'static str,
    pub preset_type: PresetType,
    pub width: f64,
    pub height: f64,
    pub depth: f64,
    pub parts: &'static [PresetPart],
}

impl PresetEntry {
    pub fn unit_kind(&self) -> UnitKind {
        self.preset_type.unit_kind()
    }
}

const WARDROBE_PARTS: &[PresetPart] = &[PresetPart::shelf(1800.0), PresetPart::rod(1700.0)];
const DRAWER_PARTS: &[PresetPart] = &[
    PresetPart::drawer(50.0, 220.0),
    PresetPart::drawer(290.0, 220.0),
    PresetPart::drawer(530.0, 220.0),
];
const SHELF_PARTS: &[PresetPart] = &[
    PresetPart::shelf(400.0),
    PresetPart::shelf(800.0),
    PresetPart::shelf(1200.0),
    PresetPart::shelf(1600.0),
];
const CORNER_PARTS: &[PresetPart] = &[
    PresetPart::shelf(600.0),
    PresetPart::shelf(1200.0),
    PresetPart::shelf(1800.0),
];

macro_rules! preset {
    ($id:literal, $name:literal, $ty:ident, $w:literal, $h:literal, $d:literal, $parts:expr) => {
        PresetEntry {
            id: $id,
            name: $name,
            preset_type: PresetType::$ty,
            width: $w,
            height: $h,
            depth: $d,
            parts: $parts,
        }
    };
}

static STANDARD_PRESETS: &[PresetEntry] = &[
    preset!("wardrobe-400", "Wardrobe 400", Wardrobe, 400.0, 2100.0, 600.0, WARDROBE_PARTS),
    preset!("wardrobe-600", "Wardrobe 600", Wardrobe, 600.0, 2100.0, 600.0, WARDROBE_PARTS),
    preset!("wardrobe-800", "Wardrobe 800", Wardrobe, 800.0, 2100.0, 600.0, WARDROBE_PARTS),
    preset!("wardrobe-900", "Wardrobe 900", Wardrobe, 900.0, 2100.0, 600.0, WARDROBE_PARTS),
    preset!("wardrobe-1000", "Wardrobe 1000", Wardrobe, 1000.0, 2100.0, 600.0, WARDROBE_PARTS),
    preset!("drawer-400", "Drawer unit 400", Drawer, 400.0, 800.0, 600.0, DRAWER_PARTS),
    preset!("drawer-600", "Drawer unit 600", Drawer, 600.0, 800.0, 600.0, DRAWER_PARTS),
    preset!("drawer-800", "Drawer unit 800", Drawer, 800.0, 800.0, 600.0, DRAWER_PARTS),
    preset!("shelf-400", "Shelf unit 400", Shelf, 400.0, 2100.0, 400.0, SHELF_PARTS),
    preset!("shelf-600", "Shelf unit 600", Shelf, 600.0, 2100.0, 400.0, SHELF_PARTS),
    preset!("shelf-800", "Shelf unit 800", Shelf, 800.0, 2100.0, 400.0, SHELF_PARTS),
    preset!("corner-l-900", "Corner unit L 900", CornerL, 900.0, 2100.0, 900.0, CORNER_PARTS),
    preset!("corner-l-1000", "Corner unit L 1000", CornerL, 1000.0, 2100.0, 1000.0, CORNER_PARTS),
    preset!("corner-r-900", "Corner unit R 900", CornerR, 900.0, 2100.0, 900.0, CORNER_PARTS),
    preset!("corner-r-1000", "Corner unit R 1000", CornerR, 1000.0, 2100.0, 1000.0, CORNER_PARTS),
];

/// Read-only view over a preset table.
#[derive(Debug, Clone, Copy)]
pub struct UnitCatalog {
    entries: &'static [PresetEntry],
}

impl UnitCatalog {
    /// Wraps a custom table.
    pub const fn new(entries: &'static [PresetEntry]) -> Self {
        Self { entries }
    }

    /// The built-in retail catalog.
    pub const fn standard() -> Self {
        Self::new(STANDARD_PRESETS)
    }

    /// Finds the preset of `preset_type` whose width matches exactly.
    pub fn find_preset(&self, preset_type: PresetType, width: f64) -> Option<&'static PresetEntry> {
        self.entries
            .iter()
            .find(|entry| entry.preset_type == preset_type && entry.width == width)
    }

    /// Finds a preset by its furniture id.
    pub fn find_furniture_preset(&self, id: &str) -> Option<&'static PresetEntry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    /// All presets of one family, in table order.
    pub fn by_type(&self, preset_type: PresetType) -> impl Iterator<Item = &'static PresetEntry> {
        self.entries
            .iter()
            .filter(move |entry| entry.preset_type == preset_type)
    }

    /// Widths offered for one family, in table order.
    pub fn widths(&self, preset_type: PresetType) -> Vec<f64> {
        self.by_type(preset_type).map(|entry| entry.width).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'static PresetEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for UnitCatalog {
    fn default() -> Self {
        Self::standard()
    }
}
