use crate::geometry::{Rect, Vec2};
use serde::{Deserialize, Serialize};

/// Fraction of the container the fitted content should fill.
pub const FIT_FILL: f32 = 0.9;
/// Zoom clamp applied to the initial fit-to-screen computation.
pub const FIT_ZOOM_MIN: f32 = 0.4;
pub const FIT_ZOOM_MAX: f32 = 1.0;
/// Zoom clamp applied during free interactive zooming.
pub const ZOOM_MIN: f32 = 0.2;
pub const ZOOM_MAX: f32 = 2.0;
/// Multiplier applied per discrete wheel step.
pub const ZOOM_STEP_FACTOR: f32 = 1.2;

/// Direction of a discrete zoom step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoomDirection {
    In,
    Out,
}

/// The zoom+pan affine mapping from content-space to screen-space.
///
/// `screen = content * zoom + pan`. The whole scene is drawn under this one
/// transform; node coordinates are never adjusted individually.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub zoom: f32,
    pub pan: Vec2,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            zoom: 1.0,
            pan: Vec2::ZERO,
        }
    }
}

impl Viewport {
    /// Reset the transform so `bounds` is centered in a `container`-sized
    /// viewport, filling 90% of it, with the fit zoom clamped to
    /// `[FIT_ZOOM_MIN, FIT_ZOOM_MAX]`.
    ///
    /// A degenerate container or bounds (zero or negative extent) leaves the
    /// viewport untouched and returns `false`. Calling this twice with the
    /// same inputs yields the same transform.
    pub fn fit(&mut self, bounds: Rect, container: Vec2) -> bool {
        if container.x <= 0.0
            || container.y <= 0.0
            || bounds.width() <= 0.0
            || bounds.height() <= 0.0
        {
            tracing::warn!(
                ?container,
                "skipping viewport fit for degenerate container or bounds"
            );
            return false;
        }

        let zoom = (container.x / bounds.width() * FIT_FILL)
            .min(container.y / bounds.height() * FIT_FILL)
            .min(1.0)
            .clamp(FIT_ZOOM_MIN, FIT_ZOOM_MAX);

        self.zoom = zoom;
        self.pan = Vec2::new(
            (container.x - bounds.width() * zoom) * 0.5 - bounds.min.x * zoom,
            (container.y - bounds.height() * zoom) * 0.5 - bounds.min.y * zoom,
        );
        true
    }

    /// One discrete zoom step, anchored at the fixed origin (not the
    /// cursor), clamped to the interactive range.
    pub fn zoom_step(&mut self, direction: ZoomDirection) {
        let factor = match direction {
            ZoomDirection::In => ZOOM_STEP_FACTOR,
            ZoomDirection::Out => 1.0 / ZOOM_STEP_FACTOR,
        };
        self.zoom_by(factor);
    }

    /// Multiply the zoom by `factor`, clamped to `[ZOOM_MIN, ZOOM_MAX]`.
    pub fn zoom_by(&mut self, factor: f32) {
        if factor <= 0.0 {
            return;
        }
        self.zoom = (self.zoom * factor).clamp(ZOOM_MIN, ZOOM_MAX);
    }

    pub fn content_to_screen(&self, p: Vec2) -> Vec2 {
        p * self.zoom + self.pan
    }

    pub fn screen_to_content(&self, p: Vec2) -> Vec2 {
        Vec2::new((p.x - self.pan.x) / self.zoom, (p.y - self.pan.y) / self.zoom)
    }
}
