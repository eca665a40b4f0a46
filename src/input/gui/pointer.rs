use winit::event::MouseScrollDelta;

/// Pixels one wheel notch counts for when the platform reports line deltas. Browsers report
/// about this much per notch, which the zoom step then clamps to its maximum.
pub const LINE_DELTA_PIXELS: f64 = 100.0;

/// Signed wheel travel in pixels; positive scrolls away from the user.
#[must_use]
pub fn wheel_delta_pixels(delta: &MouseScrollDelta) -> f64 {
    match delta {
        MouseScrollDelta::LineDelta(_, y) => f64::from(*y) * LINE_DELTA_PIXELS,
        MouseScrollDelta::PixelDelta(position) => position.y,
    }
}

/// Turns raw cursor and button events into drag deltas.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct PointerTracker {
    position: Option<(f64, f64)>,
    dragging: bool,
}

impl PointerTracker {
    #[must_use]
    pub fn position(&self) -> Option<(f64, f64)> {
        self.position
    }

    pub fn press(&mut self) {
        self.dragging = true;
    }

    pub fn release(&mut self) {
        self.dragging = false;
    }

    /// Records a cursor move and returns the drag delta when the button is held.
    pub fn moved(&mut self, x: f64, y: f64) -> Option<(f64, f64)> {
        let previous = self.position.replace((x, y));

        match previous {
            Some((px, py)) if self.dragging => Some((x - px, y - py)),
            _ => None,
        }
    }

    /// The cursor left the window: forget where it was so re-entry does not jump.
    pub fn left(&mut self) {
        self.position = None;
        self.dragging = false;
    }
}
