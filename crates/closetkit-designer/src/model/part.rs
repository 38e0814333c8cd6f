use serde::{Deserialize, Serialize};

use closetkit_core::PartKind;

pub type PartId = u64;

/// A shelf, rod or drawer fitted inside a unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Part {
    pub id: PartId,
    #[serde(rename = "type")]
    pub kind: PartKind,
    /// Vertical offset from the unit floor, `0 <= y <= unit.height`.
    pub y: f64,
    /// Front height, used by drawers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
}

impl Part {
    pub fn new(id: PartId, kind: PartKind, y: f64, height: Option<f64>) -> Self {
        Self {
            id,
            kind,
            y,
            height,
        }
    }

    /// Pulls the part inside a unit of `unit_height`.
    ///
    /// A drawer keeps its front inside the unit by lowering `y` first and
    /// shrinking its height only when the drawer is taller than the unit.
    pub fn clamp_to_height(&mut self, unit_height: f64) {
        let unit_height = unit_height.max(0.0);
        if let Some(h) = self.height.as_mut() {
            *h = h.clamp(0.0, unit_height);
            self.y = self.y.clamp(0.0, unit_height - *h);
        } else {
            self.y = self.y.clamp(0.0, unit_height);
        }
    }

    /// Top edge of the part (equal to `y` for shelves and rods).
    pub fn top(&self) -> f64 {
        self.y + self.height.unwrap_or(0.0)
    }
}

/// Sparse update for a part. Only present fields are applied.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PartUpdate {
    pub kind: Option<PartKind>,
    pub y: Option<f64>,
    /// `Some(None)` clears the height.
    pub height: Option<Option<f64>>,
}

impl PartUpdate {
    pub fn y(y: f64) -> Self {
        Self {
            y: Some(y),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.kind.is_none() && self.y.is_none() && self.height.is_none()
    }

    /// Applies the present fields to `part`.
    pub fn apply_to(&self, part: &mut Part) {
        if let Some(kind) = self.kind {
            part.kind = kind;
        }
        if let Some(y) = self.y {
            part.y = y;
        }
        if let Some(height) = self.height {
            part.height = height;
        }
    }
}
