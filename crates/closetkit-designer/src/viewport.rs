//! Viewport and coordinate transformation for the plan and elevation views.
//!
//! Handles conversion between room millimeters and pixel coordinates (screen
//! space). Pixel scale depends on zoom; the 3D scene scale does not (see
//! [`crate::scene`]), so all projections read one millimeter layout.

use std::fmt;

use closetkit_core::constants::{
    BASE_SCALE, DEFAULT_ZOOM, MAX_ZOOM, MIN_ZOOM, UNIT_SCALE, VIEW_PADDING, ZOOM_STEP,
};
use closetkit_settings::ViewSettings;

use crate::model::Point;

/// Clamps `zoom` into `[MIN_ZOOM, MAX_ZOOM]`; non-finite input falls back to the default.
pub fn clamp_zoom(zoom: f64) -> f64 {
    if zoom.is_finite() {
        zoom.clamp(MIN_ZOOM, MAX_ZOOM)
    } else {
        DEFAULT_ZOOM
    }
}

/// `mm · BASE_SCALE · zoom`
pub fn mm_to_px(mm: f64, zoom: f64) -> f64 {
    mm * BASE_SCALE * clamp_zoom(zoom)
}

/// Exact inverse of [`mm_to_px`]. The clamped zoom is never zero.
pub fn px_to_mm(px: f64, zoom: f64) -> f64 {
    px / (BASE_SCALE * clamp_zoom(zoom))
}

/// `mm · UNIT_SCALE`, independent of zoom.
pub fn mm_to_scene_unit(mm: f64) -> f64 {
    mm * UNIT_SCALE
}

pub fn scene_unit_to_mm(units: f64) -> f64 {
    units / UNIT_SCALE
}

/// Represents the 2D viewport transformation state (zoom and pan).
#[derive(Debug, Clone, PartialEq)]
pub struct Viewport {
    zoom: f64,
    pan_x: f64,
    pan_y: f64,
    canvas_width: f64,
    canvas_height: f64,
    base_scale: f64,
    min_zoom: f64,
    max_zoom: f64,
}

impl Viewport {
    /// Creates a new viewport with initial dimensions and default scaling.
    pub fn new(canvas_width: f64, canvas_height: f64) -> Self {
        Self {
            zoom: DEFAULT_ZOOM,
            pan_x: 0.0,
            pan_y: 0.0,
            canvas_width,
            canvas_height,
            base_scale: BASE_SCALE,
            min_zoom: MIN_ZOOM,
            max_zoom: MAX_ZOOM,
        }
    }

    /// Creates a viewport using configured scale and zoom limits.
    pub fn from_settings(settings: &ViewSettings, canvas_width: f64, canvas_height: f64) -> Self {
        let base_scale = if settings.base_scale.is_finite() && settings.base_scale > 0.0 {
            settings.base_scale
        } else {
            BASE_SCALE
        };
        // A zero bound would let px_to_mm divide by zero.
        let min_zoom = if settings.min_zoom.is_finite() && settings.min_zoom > 0.0 {
            settings.min_zoom
        } else {
            MIN_ZOOM
        };
        let max_zoom = if settings.max_zoom.is_finite() && settings.max_zoom >= min_zoom {
            settings.max_zoom
        } else {
            MAX_ZOOM.max(min_zoom)
        };
        let mut vp = Self {
            base_scale,
            min_zoom,
            max_zoom,
            ..Self::new(canvas_width, canvas_height)
        };
        vp.set_zoom(settings.initial_zoom);
        vp
    }

    pub fn canvas_width(&self) -> f64 {
        self.canvas_width
    }

    pub fn canvas_height(&self) -> f64 {
        self.canvas_height
    }

    /// Sets the canvas dimensions (typically called when the host resizes).
    pub fn set_canvas_size(&mut self, width: f64, height: f64) {
        self.canvas_width = width;
        self.canvas_height = height;
    }

    /// Gets the current zoom level (1.0 = 100%).
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Sets the zoom level, clamped to the configured limits.
    pub fn set_zoom(&mut self, zoom: f64) {
        self.zoom = if zoom.is_finite() {
            zoom.max(self.min_zoom).min(self.max_zoom)
        } else {
            tracing::debug!("Ignoring non-finite zoom {}", zoom);
            self.zoom
        };
    }

    pub fn zoom_in(&mut self) {
        self.set_zoom(self.zoom * ZOOM_STEP);
    }

    pub fn zoom_out(&mut self) {
        self.set_zoom(self.zoom / ZOOM_STEP);
    }

    pub fn reset_zoom(&mut self) {
        self.set_zoom(DEFAULT_ZOOM);
    }

    pub fn pan_x(&self) -> f64 {
        self.pan_x
    }

    pub fn pan_y(&self) -> f64 {
        self.pan_y
    }

    pub fn set_pan(&mut self, x: f64, y: f64) {
        self.pan_x = x;
        self.pan_y = y;
    }

    pub fn pan_by(&mut self, dx: f64, dy: f64) {
        self.pan_x += dx;
        self.pan_y += dy;
    }

    pub fn reset_pan(&mut self) {
        self.pan_x = 0.0;
        self.pan_y = 0.0;
    }

    /// Pixels per millimeter at the current zoom.
    pub fn scale(&self) -> f64 {
        self.base_scale * self.zoom
    }

    pub fn mm_to_px(&self, mm: f64) -> f64 {
        mm * self.scale()
    }

    pub fn px_to_mm(&self, px: f64) -> f64 {
        px / self.scale()
    }

    /// Converts a plan position (room mm) to pixel coordinates.
    ///
    /// Plan `z` grows toward the bottom wall, matching screen `y`, so there is
    /// no axis flip:
    /// ```text
    /// pixel_x = x * scale + pan_x
    /// pixel_y = z * scale + pan_y
    /// ```
    pub fn room_to_screen(&self, x: f64, z: f64) -> (f64, f64) {
        let scale = self.scale();
        (x * scale + self.pan_x, z * scale + self.pan_y)
    }

    /// Converts pixel coordinates to a plan position (room mm); `y` of the result is plan `z`.
    pub fn screen_to_room(&self, pixel_x: f64, pixel_y: f64) -> Point {
        let scale = self.scale();
        Point::new((pixel_x - self.pan_x) / scale, (pixel_y - self.pan_y) / scale)
    }

    /// Converts an elevation position (mm along the wall, mm above the floor) to pixels.
    ///
    /// Height grows upward, so the Y axis is flipped against the canvas:
    /// ```text
    /// pixel_y = canvas_height - (height * scale + pan_y)
    /// ```
    pub fn elevation_to_screen(&self, along: f64, height: f64) -> (f64, f64) {
        let scale = self.scale();
        (
            along * scale + self.pan_x,
            self.canvas_height - (height * scale + self.pan_y),
        )
    }

    /// Inverse of [`Viewport::elevation_to_screen`]; returns `(along, height)`.
    pub fn screen_to_elevation(&self, pixel_x: f64, pixel_y: f64) -> Point {
        let scale = self.scale();
        Point::new(
            (pixel_x - self.pan_x) / scale,
            (self.canvas_height - pixel_y - self.pan_y) / scale,
        )
    }

    /// Fits a `width × depth` mm area into the canvas with padding, centered.
    ///
    /// `padding` is the fraction of the canvas reserved on each side (0.0 - 0.5).
    pub fn fit_to_bounds(&mut self, width: f64, depth: f64, padding: f64) {
        if width <= 0.0 || depth <= 0.0 || self.canvas_width <= 0.0 || self.canvas_height <= 0.0 {
            return;
        }

        let padding_factor = 1.0 - padding.clamp(0.0, 0.45) * 2.0;
        let zoom_x = self.canvas_width * padding_factor / (width * self.base_scale);
        let zoom_y = self.canvas_height * padding_factor / (depth * self.base_scale);
        self.set_zoom(zoom_x.min(zoom_y));

        let scale = self.scale();
        self.pan_x = (self.canvas_width - width * scale) / 2.0;
        self.pan_y = (self.canvas_height - depth * scale) / 2.0;
    }

    /// Fits the room into the canvas with the default padding.
    pub fn fit_room(&mut self, room_width: f64, room_depth: f64) {
        self.fit_to_bounds(room_width, room_depth, VIEW_PADDING);
    }

    /// Resets viewport to default state (1:1 zoom, no pan).
    pub fn reset(&mut self) {
        self.reset_zoom();
        self.reset_pan();
    }
}

impl fmt::Display for Viewport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Zoom: {:.2}x | Pan: ({:.1}, {:.1})",
            self.zoom, self.pan_x, self.pan_y
        )
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(1200.0, 800.0)
    }
}
