//! Zoom, pan, active view and read-only projections.

use super::{ActiveView, DesignerState};
use crate::elevation::{project_wall, Elevation};
use crate::model::{Point, UnitId, Wall};
use crate::panels::{outline_path, unit_panels, unit_plan_outline, Outline, Panel};
use crate::scene::{project_scene, Scene, SceneScale};
use lyon::path::Path;

impl DesignerState {
    /// Zoom in.
    pub fn zoom_in(&mut self) {
        self.viewport.zoom_in();
    }

    /// Zoom out.
    pub fn zoom_out(&mut self) {
        self.viewport.zoom_out();
    }

    /// Set zoom level, clamped to the configured limits.
    pub fn set_zoom(&mut self, zoom: f64) {
        self.viewport.set_zoom(zoom);
    }

    pub fn pan_by(&mut self, dx: f64, dy: f64) {
        self.viewport.pan_by(dx, dy);
    }

    /// Resizes the canvas and fits the room into it.
    pub fn fit_room_to_canvas(&mut self, canvas_width: f64, canvas_height: f64) {
        self.viewport.set_canvas_size(canvas_width, canvas_height);
        self.viewport.fit_room(self.room.width, self.room.depth);
    }

    pub fn set_active_view(&mut self, view: ActiveView) {
        self.active_view = view;
    }

    /// Converts a plan-view pixel to room millimeters.
    pub fn screen_to_room(&self, pixel_x: f64, pixel_y: f64) -> Point {
        self.viewport.screen_to_room(pixel_x, pixel_y)
    }

    /// Selects the topmost unit under a plan-view pixel.
    pub fn select_at_screen(&mut self, pixel_x: f64, pixel_y: f64, multi: bool) -> Option<UnitId> {
        let point = self.screen_to_room(pixel_x, pixel_y);
        self.selection.select_at(&self.units, point, multi)
    }

    pub fn elevation(&self, wall: Wall) -> Elevation {
        project_wall(&self.room, &self.units, wall)
    }

    pub fn scene(&self) -> Scene {
        project_scene(
            SceneScale::new(self.config.view.unit_scale),
            &self.room,
            &self.units,
            &self.geometry_settings(),
        )
    }

    /// Plan outline of a unit in room coordinates.
    pub fn plan_outline(&self, id: UnitId) -> Option<Outline> {
        self.unit(id)
            .map(|unit| unit_plan_outline(unit, &self.geometry_settings()))
    }

    /// Plan outline as a closed path, in room millimeters.
    pub fn plan_path(&self, id: UnitId) -> Option<Path> {
        self.plan_outline(id).map(|outline| outline_path(&outline))
    }

    /// Panels of a unit in its local frame.
    pub fn panels(&self, id: UnitId) -> Option<Vec<Panel>> {
        self.unit(id)
            .map(|unit| unit_panels(unit, &self.geometry_settings()))
    }
}
