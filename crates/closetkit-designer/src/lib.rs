//! # ClosetKit Designer
//!
//! Room layout engine: places catalog units in a room outline and keeps the
//! plan, elevation and 3D projections consistent with one millimeter model.
//!
//! ## Core Components
//!
//! - **Model**: room, door, units and their parts
//! - **Viewport**: millimeter, pixel and scene-unit conversions
//! - **Snapping / Collision**: grid and magnetic alignment, overlap push-out
//! - **Corner / Panels**: L-profile outlines and panel decomposition
//! - **History**: linear undo/redo over full snapshots
//! - **DesignerState**: the editing session tying it all together
//!
//! ## Architecture
//!
//! ```text
//! gesture ─► Viewport (px → mm) ─► Snapping / Collision ─► DesignerState
//!                                                            ├── History
//!                                                            └── Elevation / Scene / Panels
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use closetkit_designer::{DesignerState, DragMode};
//!
//! let mut state = DesignerState::new();
//! let id = state.drop_unit("wardrobe-900", 14.0, 6.0).unwrap();
//! assert_eq!(state.unit(id).map(|u| (u.x, u.z)), Some((0.0, 0.0)));
//!
//! state.preview_move(id, 620.0, 0.0, DragMode::Plan).unwrap();
//! state.commit_move(id, 640.0, 0.0, DragMode::Plan).unwrap();
//! assert!(state.undo());
//! ```

pub mod collision;
pub mod corner;
pub mod designer_state;
pub mod elevation;
pub mod history;
pub mod model;
pub mod panels;
pub mod scene;
pub mod selection_manager;
pub mod serialization;
pub mod snapping;
pub mod viewport;

pub use collision::{resolve_collisions, resolve_in_room};
pub use corner::{build_corner_geometry, clamp_leg_depth, CornerGeometry, CornerParams};
pub use designer_state::{ActiveView, DesignerState, DragMode, Gesture, GestureKind};
pub use elevation::{Elevation, ElevationDoor, ElevationItem};
pub use history::{HistorySnapshot, UndoRedoManager};
pub use model::{
    Door, DoorUpdate, OpenDirection, Part, PartId, PartUpdate, Point, Rect, Room, Rotation, Unit,
    UnitId, UnitUpdate, Wall,
};
pub use panels::{GeometrySettings, Outline, Panel, PanelRole};
pub use scene::{Scene, SceneScale, SceneUnit};
pub use selection_manager::SelectionManager;
pub use serialization::{DesignFile, FORMAT_VERSION};
pub use snapping::{clamp_to_room, grid_snap, Edge, SnapResult, SnapSettings, SnapSource};
pub use viewport::Viewport;
