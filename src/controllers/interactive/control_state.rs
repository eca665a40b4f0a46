use crate::core::data::canvas_size::CanvasSize;
use crate::core::data::view_params::{Location, ViewParameters};
use crate::core::data::viewport::Viewport;
use crate::core::fractals::mandelbrot::colour_mapping::palette::PaletteConfig;
use crate::core::fractals::mandelbrot::iteration_budget::compute_budget;
use crate::core::util::view_navigation::{drag_to_pan_delta, zoom_about_pivot};

/// Every mutation the interactive view accepts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ViewChange {
    /// Pointer drag in pixels.
    Drag { dx: f64, dy: f64 },
    /// Wheel step about pixel `(px, py)`; positive deltas zoom in.
    ZoomAt { px: f64, py: f64, wheel_delta: f64 },
    Pan { pan_x: f64, pan_y: f64 },
    Zoom(f64),
    Precision(f64),
    ResolutionFactor(u32),
    Palette(PaletteConfig),
    Resize(CanvasSize),
    GoTo(Location),
}

/// View parameters plus everything derived from them.
///
/// `viewport` follows zoom and canvas, `iteration_budget` follows zoom and precision. Both are
/// re-derived inside [`ControlState::apply`], the only way to mutate the state.
#[derive(Debug, Clone, PartialEq)]
pub struct ControlState {
    view: ViewParameters,
    canvas: CanvasSize,
    viewport: Viewport,
    iteration_budget: u32,
    pan_allowed: bool,
}

impl ControlState {
    #[must_use]
    pub fn new(canvas: CanvasSize, view: ViewParameters) -> Self {
        Self {
            view,
            canvas,
            viewport: Viewport::new(view.zoom(), canvas),
            iteration_budget: compute_budget(view.zoom(), view.precision()),
            pan_allowed: true,
        }
    }

    #[must_use]
    pub fn view(&self) -> &ViewParameters {
        &self.view
    }

    #[must_use]
    pub fn canvas(&self) -> CanvasSize {
        self.canvas
    }

    #[must_use]
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    #[must_use]
    pub fn iteration_budget(&self) -> u32 {
        self.iteration_budget
    }

    #[must_use]
    pub fn pan_allowed(&self) -> bool {
        self.pan_allowed
    }

    /// Enabling or disabling drag panning is not a view change and never invalidates.
    pub fn set_pan_allowed(&mut self, allowed: bool) {
        self.pan_allowed = allowed;
    }

    /// Applies `change` and reports whether the rendered frame is now stale.
    ///
    /// Returns `false` for a wheel step that clamping turns into a no-op and for drags while
    /// panning is disabled.
    pub fn apply(&mut self, change: ViewChange) -> bool {
        match change {
            ViewChange::Drag { dx, dy } => {
                if !self.pan_allowed {
                    return false;
                }

                let (pan_dx, pan_dy) = drag_to_pan_delta(dx, dy, self.canvas, &self.viewport);
                self.view
                    .set_pan(self.view.pan_x() + pan_dx, self.view.pan_y() + pan_dy);
            }
            ViewChange::ZoomAt {
                px,
                py,
                wheel_delta,
            } => {
                let Some(step) = zoom_about_pivot(
                    px,
                    py,
                    wheel_delta,
                    self.view.zoom(),
                    self.canvas,
                    &self.viewport,
                ) else {
                    return false;
                };

                self.view.set_pan(
                    self.view.pan_x() + step.pan_dx,
                    self.view.pan_y() + step.pan_dy,
                );
                self.view.set_zoom(step.zoom);
            }
            ViewChange::Pan { pan_x, pan_y } => self.view.set_pan(pan_x, pan_y),
            ViewChange::Zoom(zoom) => self.view.set_zoom(zoom),
            ViewChange::Precision(precision) => self.view.set_precision(precision),
            ViewChange::ResolutionFactor(factor) => self.view.set_resolution_factor(factor),
            ViewChange::Palette(palette) => self.view.set_palette(palette),
            ViewChange::Resize(canvas) => self.canvas = canvas,
            ViewChange::GoTo(location) => self.view.set_location(location),
        }

        self.derive();
        true
    }

    fn derive(&mut self) {
        self.viewport = Viewport::new(self.view.zoom(), self.canvas);
        self.iteration_budget = compute_budget(self.view.zoom(), self.view.precision());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::view_params::{MAX_ZOOM, MIN_ZOOM};

    fn state(width: u32, height: u32) -> ControlState {
        ControlState::new(
            CanvasSize::new(width, height).unwrap(),
            ViewParameters::default(),
        )
    }

    #[test]
    fn new_derives_viewport_and_budget() {
        let state = state(200, 100);

        assert_eq!(state.viewport().x_range(), 3.0);
        assert_eq!(state.viewport().y_range(), 1.5);
        assert_eq!(state.iteration_budget(), 72);
        assert!(state.pan_allowed());
    }

    #[test]
    fn precision_change_rederives_budget() {
        let mut state = state(100, 100);

        assert!(state.apply(ViewChange::Precision(0.1)));

        assert_eq!(state.iteration_budget(), 23);
    }

    #[test]
    fn zoom_change_rederives_viewport_and_budget() {
        let mut state = state(100, 100);
        let before = state.iteration_budget();

        assert!(state.apply(ViewChange::Zoom(4.0)));

        assert_eq!(state.viewport().x_range(), 0.75);
        assert!(state.iteration_budget() >= before);
    }

    #[test]
    fn resize_rederives_viewport() {
        let mut state = state(100, 100);

        assert!(state.apply(ViewChange::Resize(CanvasSize::new(100, 300).unwrap())));

        assert_eq!(state.canvas().height(), 300);
        assert_eq!(state.viewport().y_range(), 9.0);
    }

    #[test]
    fn drag_moves_pan_in_plane_units() {
        let mut state = state(200, 100);

        assert!(state.apply(ViewChange::Drag { dx: 20.0, dy: -10.0 }));

        assert!((state.view().pan_x() - (0.5 + 0.6)).abs() < 1e-12);
        assert!((state.view().pan_y() - (-0.3)).abs() < 1e-12);
    }

    #[test]
    fn drag_is_ignored_while_panning_disabled() {
        let mut state = state(200, 100);
        state.set_pan_allowed(false);
        let before = state.clone();

        assert!(!state.apply(ViewChange::Drag { dx: 20.0, dy: 5.0 }));

        assert_eq!(state, before);
    }

    #[test]
    fn wheel_at_bound_is_no_op() {
        let mut state = state(100, 100);
        let before = state.clone();

        assert!(!state.apply(ViewChange::ZoomAt {
            px: 10.0,
            py: 90.0,
            wheel_delta: -30.0,
        }));

        assert_eq!(state, before);
        assert_eq!(state.view().zoom(), MIN_ZOOM);
    }

    #[test]
    fn zoom_in_clamps_exactly_at_maximum() {
        let mut state = state(100, 100);
        state.apply(ViewChange::Zoom(MAX_ZOOM / 1.1));

        for _ in 0..10 {
            state.apply(ViewChange::ZoomAt {
                px: 50.0,
                py: 50.0,
                wheel_delta: 50.0,
            });
        }

        assert_eq!(state.view().zoom(), MAX_ZOOM);
        assert!(!state.apply(ViewChange::ZoomAt {
            px: 50.0,
            py: 50.0,
            wheel_delta: 50.0,
        }));
    }

    #[test]
    fn goto_sets_all_fields() {
        let mut state = state(100, 100);

        state.apply(ViewChange::GoTo(Location {
            pan_x: 0.75,
            pan_y: 0.1,
            zoom: 250.0,
            precision: 0.3,
        }));

        assert_eq!(state.view().locate().zoom, 250.0);
        assert_eq!(state.view().pan_x(), 0.75);
        assert_eq!(state.iteration_budget(), compute_budget(250.0, 0.3));
    }
}
