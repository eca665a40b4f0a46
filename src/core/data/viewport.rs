use crate::core::data::canvas_size::CanvasSize;

/// Half-width of the visible plane window at zoom 1.
pub const BASE_SPAN: f64 = 3.0;

/// Half-extents of the visible plane window, derived from zoom and canvas aspect ratio.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Viewport {
    x_range: f64,
    y_range: f64,
}

impl Viewport {
    #[must_use]
    pub fn new(zoom: f64, canvas: CanvasSize) -> Self {
        let x_range = BASE_SPAN / zoom;

        Self {
            x_range,
            y_range: canvas.aspect_ratio() * x_range,
        }
    }

    #[must_use]
    pub fn x_range(&self) -> f64 {
        self.x_range
    }

    #[must_use]
    pub fn y_range(&self) -> f64 {
        self.y_range
    }
}
