//! Error handling for ClosetKit
//!
//! Provides error types for the layers of the layout engine:
//! - Layout errors (mutations that referenced something that does not exist)
//! - Format errors (persisted design payloads)
//!
//! All error types use `thiserror` for ergonomic error handling.
//!
//! A layout error is a value, not a failure: every mutation that returns one has
//! left the model, the history and the version counter exactly as they were.

use thiserror::Error;

/// Layout mutation error type
///
/// Returned by session mutations that could not be applied.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LayoutError {
    /// No unit with this id exists in the model
    #[error("Unknown unit {id}")]
    UnknownUnit {
        /// The requested unit id.
        id: u64,
    },

    /// The unit exists but has no part with this id
    #[error("Unknown part {part_id} on unit {unit_id}")]
    UnknownPart {
        /// The owning unit id.
        unit_id: u64,
        /// The requested part id.
        part_id: u64,
    },

    /// Catalog lookup found nothing
    #[error("Preset not found: {preset}")]
    InvalidPreset {
        /// Description of the lookup that failed.
        preset: String,
    },

    /// The unit is locked against geometry changes
    #[error("Unit {id} is locked")]
    UnitLocked {
        /// The locked unit id.
        id: u64,
    },

    /// Requested dimensions are not positive finite numbers
    #[error("Invalid dimensions: {reason}")]
    InvalidDimensions {
        /// Why the dimensions were rejected.
        reason: String,
    },

    /// No gesture is in progress for this unit
    #[error("No active gesture for unit {id}")]
    NoActiveGesture {
        /// The unit id the caller referenced.
        id: u64,
    },
}

/// Design payload error type
///
/// Represents problems with a persisted `{ components, gridSize, version }` payload.
#[derive(Error, Debug)]
pub enum FormatError {
    /// Payload is not valid JSON or is missing required fields
    #[error("Malformed design payload: {0}")]
    Json(#[from] serde_json::Error),

    /// Payload was written by a newer format
    #[error("Unsupported design version {found} (supported up to {supported})")]
    UnsupportedVersion {
        /// Version found in the payload.
        found: u32,
        /// Highest version this build reads.
        supported: u32,
    },

    /// A component failed validation
    #[error("Invalid component {id}: {reason}")]
    InvalidComponent {
        /// The component id.
        id: u64,
        /// Why the component was rejected.
        reason: String,
    },

    /// A top-level field failed validation
    #[error("Invalid design payload: {reason}")]
    InvalidPayload {
        /// Why the payload was rejected.
        reason: String,
    },
}

/// Main error type for ClosetKit
///
/// A unified error type that can represent any error from all layers.
#[derive(Error, Debug)]
pub enum Error {
    /// Layout error
    #[error(transparent)]
    Layout(#[from] LayoutError),

    /// Format error
    #[error(transparent)]
    Format(#[from] FormatError),

    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }

    /// Check if this is a layout error
    pub fn is_layout_error(&self) -> bool {
        matches!(self, Error::Layout(_))
    }

    /// Check if this is a format error
    pub fn is_format_error(&self) -> bool {
        matches!(self, Error::Format(_))
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
