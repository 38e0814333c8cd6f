//! Shared numeric constants.
//!
//! All lengths are millimeters unless the name says otherwise.

/// Pixels per millimeter at zoom 1.0 in the 2D plan and elevation views.
pub const BASE_SCALE: f64 = 0.15;

/// Scene units per millimeter in the 3D view (1 scene unit = 1 m).
pub const UNIT_SCALE: f64 = 0.001;

pub const MIN_ZOOM: f64 = 0.25;
pub const MAX_ZOOM: f64 = 4.0;
pub const DEFAULT_ZOOM: f64 = 1.0;

/// Multiplier applied by a single zoom-in/zoom-out step.
pub const ZOOM_STEP: f64 = 1.2;

/// Fraction of the canvas reserved as padding when fitting the room.
pub const VIEW_PADDING: f64 = 0.05;

pub const DEFAULT_GRID_SIZE: f64 = 50.0;
pub const MIN_GRID_SIZE: f64 = 10.0;
pub const MAX_GRID_SIZE: f64 = 200.0;

/// Distance under which an edge is pulled onto a wall or neighbor edge.
pub const DEFAULT_SNAP_THRESHOLD: f64 = 30.0;

/// Arm thickness of corner units.
pub const DEFAULT_LEG_DEPTH: f64 = 400.0;

/// Board thickness shared by every generated panel.
pub const PANEL_THICKNESS: f64 = 18.0;

/// Smallest width or depth a resize gesture may produce.
pub const MIN_UNIT_SIZE: f64 = 100.0;

/// Height given to a drawer part when none is specified.
pub const DEFAULT_DRAWER_HEIGHT: f64 = 200.0;

pub const DEFAULT_ROOM_WIDTH: f64 = 4000.0;
pub const DEFAULT_ROOM_DEPTH: f64 = 2400.0;

pub const DEFAULT_DOOR_OFFSET: f64 = 300.0;
pub const DEFAULT_DOOR_WIDTH: f64 = 900.0;

/// Undo snapshots kept before the oldest is evicted.
pub const MAX_HISTORY_DEPTH: usize = 50;

/// Tolerance used for overlap and contact tests.
pub const GEOMETRY_EPSILON: f64 = 1e-6;
