//! Editing session for one room layout.
//!
//! This module is split into submodules for better organization:
//! - `units`: Add, update, delete, duplicate, rotate, mirror, lock
//! - `parts`: Shelf, rod and drawer edits
//! - `room`: Door, room size, grid and snap switches
//! - `gestures`: Live drag/resize previews and their commit
//! - `history`: Undo/redo
//! - `viewport`: Zoom, pan, active view, projections
//! - `file_io`: Save/load operations
//!
//! Every structural mutation either applies completely and records one
//! history snapshot, or returns a [`LayoutError`] and leaves the model, the
//! history and the version counter untouched.

mod file_io;
mod gestures;
mod history;
mod parts;
mod room;
mod units;
mod viewport;

pub use gestures::{DragMode, Gesture, GestureKind};

use std::path::PathBuf;

use closetkit_core::{LayoutError, UnitCatalog};
use closetkit_settings::{Config, LayoutSettings};

use crate::history::{HistorySnapshot, UndoRedoManager};
use crate::model::{Door, Room, Unit, UnitId, Wall};
use crate::panels::GeometrySettings;
use crate::selection_manager::SelectionManager;
use crate::snapping::{Neighbor, SnapContext, SnapSettings};
use crate::viewport::Viewport;

/// Projection the host is currently showing. View state only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveView {
    #[default]
    Plan,
    Elevation(Wall),
    Scene,
}

/// Designer state for one editing session.
#[derive(Debug, Clone)]
pub struct DesignerState {
    pub(crate) room: Room,
    pub(crate) units: Vec<Unit>,
    pub(crate) history: UndoRedoManager<HistorySnapshot>,
    pub(crate) catalog: UnitCatalog,
    pub(crate) config: Config,
    pub(crate) next_id: u64,
    pub(crate) version: u64,
    pub(crate) gesture: Option<Gesture>,
    pub viewport: Viewport,
    pub active_view: ActiveView,
    pub selection: SelectionManager,
    pub is_modified: bool,
    pub design_name: String,
    pub current_file_path: Option<PathBuf>,
}

impl DesignerState {
    /// Creates a session with default configuration and an empty room.
    pub fn new() -> Self {
        Self::with_config(&Config::default())
    }

    /// Creates a session from configuration.
    pub fn with_config(config: &Config) -> Self {
        let layout = &config.layout;
        let mut state = Self {
            room: Room::new(layout.room_width, layout.room_depth),
            units: Vec::new(),
            history: UndoRedoManager::with_max_depth(config.history.max_depth),
            catalog: UnitCatalog::standard(),
            config: config.clone(),
            next_id: 1,
            version: 0,
            gesture: None,
            viewport: Viewport::from_settings(&config.view, 1200.0, 800.0),
            active_view: ActiveView::default(),
            selection: SelectionManager::new(),
            is_modified: false,
            design_name: "Untitled".to_string(),
            current_file_path: None,
        };
        state.history.commit(state.snapshot());
        state
    }

    /// Uses another preset table for catalog lookups.
    pub fn with_catalog(mut self, catalog: UnitCatalog) -> Self {
        self.catalog = catalog;
        self
    }

    pub fn room(&self) -> &Room {
        &self.room
    }

    pub fn door(&self) -> &Door {
        &self.room.door
    }

    pub fn units(&self) -> &[Unit] {
        &self.units
    }

    pub fn unit(&self, id: UnitId) -> Option<&Unit> {
        self.units.iter().find(|u| u.id == id)
    }

    pub fn catalog(&self) -> &UnitCatalog {
        &self.catalog
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn layout_settings(&self) -> &LayoutSettings {
        &self.config.layout
    }

    pub fn grid_size(&self) -> f64 {
        self.config.layout.grid_size
    }

    /// Incremented once per change of the unit list, parts, door or room.
    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn geometry_settings(&self) -> GeometrySettings {
        GeometrySettings::from(&self.config.layout)
    }

    pub fn snap_settings(&self) -> SnapSettings {
        SnapSettings::from(&self.config.layout)
    }

    /// Copy of the structural state as history records it.
    pub fn snapshot(&self) -> HistorySnapshot {
        HistorySnapshot::new(
            self.units.clone(),
            self.room.door.clone(),
            self.room.width,
            self.room.depth,
        )
    }

    pub(crate) fn unit_index(&self, id: UnitId) -> Result<usize, LayoutError> {
        self.units
            .iter()
            .position(|u| u.id == id)
            .ok_or(LayoutError::UnknownUnit { id })
    }

    pub(crate) fn alloc_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Footprints of every unit except `exclude`.
    pub(crate) fn neighbors_excluding(&self, exclude: Option<UnitId>) -> Vec<Neighbor> {
        self.units
            .iter()
            .filter(|u| Some(u.id) != exclude)
            .map(|u| Neighbor {
                id: u.id,
                rect: u.footprint(),
            })
            .collect()
    }

    pub(crate) fn snap_context<'a>(&self, neighbors: &'a [Neighbor]) -> SnapContext<'a> {
        SnapContext {
            room_width: self.room.width,
            room_depth: self.room.depth,
            neighbors,
        }
    }

    /// Pulls a unit back inside the room.
    pub(crate) fn clamp_unit(&self, unit: &mut Unit) {
        let (w, d) = unit.plan_size();
        let (x, z) = crate::snapping::clamp_to_room(
            unit.x,
            unit.z,
            w,
            d,
            self.room.width,
            self.room.depth,
        );
        unit.x = x;
        unit.z = z;
    }

    /// Records the current structural state as a new history entry.
    pub(crate) fn commit(&mut self, action: &str) {
        self.gesture = None;
        self.history.commit(self.snapshot());
        self.version += 1;
        self.is_modified = true;
        tracing::debug!(
            "{} committed (version {}, {} units)",
            action,
            self.version,
            self.units.len()
        );
    }

    /// Replaces the live units, door and room size with `snapshot`.
    pub(crate) fn restore(&mut self, snapshot: HistorySnapshot) {
        if snapshot.room_width != self.room.width || snapshot.room_depth != self.room.depth {
            self.room.width = snapshot.room_width;
            self.room.depth = snapshot.room_depth;
            self.config.layout.room_width = snapshot.room_width;
            self.config.layout.room_depth = snapshot.room_depth;
            self.viewport.fit_room(snapshot.room_width, snapshot.room_depth);
        }
        self.units = snapshot.units;
        self.room.door = snapshot.door;
        self.selection.retain_existing(&self.units);
        self.gesture = None;
    }
}

impl Default for DesignerState {
    fn default() -> Self {
        Self::new()
    }
}
