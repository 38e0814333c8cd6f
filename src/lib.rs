//! # ClosetKit
//!
//! Layout engine for modular storage furniture (wardrobes, drawer units,
//! shelf units and L-shaped corner units) placed in a rectangular room:
//! - Catalog of purchasable presets
//! - Millimeter, pixel and scene-unit coordinate transforms
//! - Grid and magnetic snapping with collision push-out
//! - Corner unit outlines and panel decomposition
//! - Linear undo/redo over full-state snapshots
//!
//! ## Architecture
//!
//! ClosetKit is organized as a workspace with multiple crates:
//!
//! 1. **closetkit-core** - Constants, error types, unit catalog
//! 2. **closetkit-settings** - Layout, view and history configuration
//! 3. **closetkit-designer** - Spatial model, snapping, geometry, history, session
//! 4. **closetkit** - This crate, re-exporting the above and wiring up logging

pub use closetkit_core::data;
pub use closetkit_designer as designer;
pub use closetkit_settings as settings;

pub use closetkit_core::{
    CornerOrientation, Error, FormatError, LayoutError, PartKind, PresetEntry, PresetType,
    Result, UnitCatalog, UnitKind,
};

pub use closetkit_settings::{Config, HistorySettings, LayoutSettings, SnapTieBreak, ViewSettings};

pub use closetkit_designer::{
    ActiveView, CornerGeometry, CornerParams, DesignFile, DesignerState, Door, DoorUpdate,
    DragMode, Edge, Elevation, Part, PartUpdate, Point, Rect, Room, Rotation, Scene, Unit,
    UnitUpdate, Viewport, Wall,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Environment variable selecting the log output format (`pretty` or `json`).
pub const LOG_FORMAT_ENV: &str = "CLOSETKIT_LOG_FORMAT";

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Console output, pretty by default or JSON lines when
///   `CLOSETKIT_LOG_FORMAT=json`
/// - RUST_LOG environment variable support, `info` otherwise
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let json = std::env::var(LOG_FORMAT_ENV).is_ok_and(|v| v.eq_ignore_ascii_case("json"));

    if json {
        let fmt_layer = fmt::layer()
            .with_writer(std::io::stdout)
            .with_target(true)
            .json();
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .try_init()?;
    } else {
        let fmt_layer = fmt::layer()
            .with_writer(std::io::stdout)
            .with_target(true)
            .with_level(true)
            .with_line_number(true)
            .pretty();
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .try_init()?;
    }

    tracing::debug!("ClosetKit {} (built {})", VERSION, BUILD_DATE);
    Ok(())
}
