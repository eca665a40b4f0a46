use tracing::debug;

use crate::controllers::interactive::control_state::{ControlState, ViewChange};
use crate::controllers::interactive::ports::presenter::RenderEventPort;
use crate::controllers::interactive::scheduler::{RasterScheduler, ScanState, SchedulerLimits};
use crate::core::actions::slice_budget::{SliceBudget, WallClockBudget};
use crate::core::data::canvas_size::CanvasSize;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::view_params::{Location, ViewParameters};
use crate::core::fractals::mandelbrot::colour_mapping::palette::PaletteConfig;

/// Owns the view, the pixel buffer and the resumable scan.
///
/// Every setter funnels through one invalidating path, so the buffer is only ever read
/// between ticks and always belongs to the current parameters once `redraw()` is false.
pub struct InteractiveController<P: RenderEventPort> {
    control: ControlState,
    scheduler: RasterScheduler,
    buffer: PixelBuffer,
    limits: SchedulerLimits,
    presenter_port: P,
}

impl<P: RenderEventPort> InteractiveController<P> {
    pub fn new(canvas: CanvasSize, presenter_port: P) -> Self {
        Self::with_config(
            canvas,
            ViewParameters::default(),
            SchedulerLimits::default(),
            presenter_port,
        )
    }

    pub fn with_config(
        canvas: CanvasSize,
        view: ViewParameters,
        limits: SchedulerLimits,
        presenter_port: P,
    ) -> Self {
        Self {
            control: ControlState::new(canvas, view),
            scheduler: RasterScheduler::new(),
            buffer: PixelBuffer::new(canvas),
            limits,
            presenter_port,
        }
    }

    /// One per-frame drive under the configured wall-clock slice budget.
    pub fn tick(&mut self) {
        let budget = WallClockBudget::start(self.limits.slice_budget);
        self.tick_with(&budget);
    }

    /// One per-frame drive under a caller-supplied budget.
    pub fn tick_with<B: SliceBudget>(&mut self, budget: &B) {
        self.scheduler
            .drive(&mut self.buffer, &self.control, budget, &self.presenter_port);
    }

    pub fn pan_by_drag(&mut self, dx: f64, dy: f64) {
        self.apply(ViewChange::Drag { dx, dy });
    }

    pub fn zoom_at(&mut self, px: f64, py: f64, wheel_delta: f64) {
        self.apply(ViewChange::ZoomAt {
            px,
            py,
            wheel_delta,
        });
    }

    pub fn set_pan(&mut self, pan_x: f64, pan_y: f64) {
        self.apply(ViewChange::Pan { pan_x, pan_y });
    }

    pub fn set_zoom(&mut self, zoom: f64) {
        self.apply(ViewChange::Zoom(zoom));
    }

    pub fn set_precision(&mut self, precision: f64) {
        self.apply(ViewChange::Precision(precision));
    }

    pub fn set_resolution_factor(&mut self, resolution_factor: u32) {
        self.apply(ViewChange::ResolutionFactor(resolution_factor));
    }

    pub fn set_palette(&mut self, palette: PaletteConfig) {
        self.apply(ViewChange::Palette(palette));
    }

    pub fn set_grayscale(&mut self, grayscale: bool) {
        let mut palette = *self.control.view().palette();
        palette.set_grayscale(grayscale);
        self.set_palette(palette);
    }

    pub fn set_contained_white(&mut self, white: bool) {
        let mut palette = *self.control.view().palette();
        palette.set_contained_white(white);
        self.set_palette(palette);
    }

    /// Re-creates the pixel buffer for the new canvas and restarts the scan.
    pub fn resize(&mut self, canvas: CanvasSize) {
        self.buffer = PixelBuffer::new(canvas);
        self.apply(ViewChange::Resize(canvas));
    }

    pub fn goto(&mut self, pan_x: f64, pan_y: f64, zoom: f64, precision: f64) {
        self.apply(ViewChange::GoTo(Location {
            pan_x,
            pan_y,
            zoom,
            precision,
        }));
    }

    pub fn reset_view(&mut self) {
        self.apply(ViewChange::GoTo(Location::default()));
    }

    pub fn set_pan_allowed(&mut self, allowed: bool) {
        self.control.set_pan_allowed(allowed);
    }

    #[must_use]
    pub fn pan_allowed(&self) -> bool {
        self.control.pan_allowed()
    }

    #[must_use]
    pub fn redraw(&self) -> bool {
        self.scheduler.redraw()
    }

    #[must_use]
    pub fn scan_state(&self) -> ScanState {
        self.scheduler.state()
    }

    #[must_use]
    pub fn buffer(&self) -> &PixelBuffer {
        &self.buffer
    }

    #[must_use]
    pub fn locate(&self) -> Location {
        self.control.view().locate()
    }

    #[must_use]
    pub fn view(&self) -> &ViewParameters {
        self.control.view()
    }

    #[must_use]
    pub fn canvas(&self) -> CanvasSize {
        self.control.canvas()
    }

    #[must_use]
    pub fn iteration_budget(&self) -> u32 {
        self.control.iteration_budget()
    }

    #[must_use]
    pub fn limits(&self) -> SchedulerLimits {
        self.limits
    }

    #[must_use]
    pub fn presenter_port(&self) -> &P {
        &self.presenter_port
    }

    fn apply(&mut self, change: ViewChange) {
        if self.control.apply(change) {
            debug!(?change, "view changed; restarting scan");
            self.scheduler.invalidate();
        }
    }
}
