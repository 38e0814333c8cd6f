//! Closed variant types shared by the catalog and the spatial model.
//!
//! Persisted as the string tags used by saved designs (`"standard"`,
//! `"corner-L"`, `"shelf"`, ...), matched exhaustively everywhere else.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which pair of walls a corner unit spans.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CornerOrientation {
    /// Top and right walls ("ㄱ").
    L,
    /// Left and bottom walls ("ㄴ").
    R,
}

impl CornerOrientation {
    /// The orientation whose footprint is this one rotated by 180°.
    pub fn opposite(self) -> Self {
        match self {
            Self::L => Self::R,
            Self::R => Self::L,
        }
    }
}

/// Placeable unit kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnitKind {
    #[serde(rename = "standard")]
    Standard,
    #[serde(rename = "corner-L")]
    CornerL,
    #[serde(rename = "corner-R")]
    CornerR,
}

impl UnitKind {
    /// Corner orientation, or `None` for rectangular units.
    pub fn corner_orientation(self) -> Option<CornerOrientation> {
        match self {
            Self::Standard => None,
            Self::CornerL => Some(CornerOrientation::L),
            Self::CornerR => Some(CornerOrientation::R),
        }
    }

    pub fn is_corner(self) -> bool {
        self.corner_orientation().is_some()
    }
}

impl From<CornerOrientation> for UnitKind {
    fn from(orientation: CornerOrientation) -> Self {
        match orientation {
            CornerOrientation::L => Self::CornerL,
            CornerOrientation::R => Self::CornerR,
        }
    }
}

impl fmt::Display for UnitKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Standard => write!(f, "standard"),
            Self::CornerL => write!(f, "corner-L"),
            Self::CornerR => write!(f, "corner-R"),
        }
    }
}

/// Internal fitting attached to a unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PartKind {
    Shelf,
    Rod,
    Drawer,
}

impl fmt::Display for PartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Shelf => write!(f, "shelf"),
            Self::Rod => write!(f, "rod"),
            Self::Drawer => write!(f, "drawer"),
        }
    }
}
