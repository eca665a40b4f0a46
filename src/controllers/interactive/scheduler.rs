use std::time::{Duration, Instant};

use crate::controllers::interactive::control_state::ControlState;
use crate::controllers::interactive::data::frame_data::FrameData;
use crate::controllers::interactive::data::slice_data::SliceData;
use crate::controllers::interactive::events::render_event::RenderEvent;
use crate::controllers::interactive::ports::presenter::RenderEventPort;
use crate::core::actions::render_slice::render_slice::{ScanCursor, SliceOutcome, render_slice};
use crate::core::actions::slice_budget::SliceBudget;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::fractals::mandelbrot::algorithm::MandelbrotAlgorithm;
use crate::core::fractals::mandelbrot::colour_mapping::factory::mandelbrot_colour_map_factory;

pub const DEFAULT_SLICE_BUDGET: Duration = Duration::from_millis(500);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SchedulerLimits {
    /// Wall-clock time one `tick` may spend scanning before it yields.
    pub slice_budget: Duration,
}

impl Default for SchedulerLimits {
    fn default() -> Self {
        Self {
            slice_budget: DEFAULT_SLICE_BUDGET,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanState {
    /// The buffer holds a complete frame for the current parameters.
    Idle,
    /// Parameters changed; the next drive clears the buffer and starts over.
    FrameStart,
    Scanning(ScanCursor),
}

#[derive(Debug, Clone, Copy)]
struct FrameProgress {
    started: Instant,
    blocks: u64,
    slices: u32,
}

impl FrameProgress {
    fn begin() -> Self {
        Self {
            started: Instant::now(),
            blocks: 0,
            slices: 0,
        }
    }
}

/// Resumable raster scan over the block grid.
#[derive(Debug, Clone)]
pub struct RasterScheduler {
    state: ScanState,
    progress: Option<FrameProgress>,
}

impl RasterScheduler {
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: ScanState::FrameStart,
            progress: None,
        }
    }

    #[must_use]
    pub fn state(&self) -> ScanState {
        self.state
    }

    #[must_use]
    pub fn redraw(&self) -> bool {
        self.state != ScanState::Idle
    }

    /// Discards any scan in flight; the next drive starts a fresh frame.
    pub fn invalidate(&mut self) {
        self.state = ScanState::FrameStart;
        self.progress = None;
    }

    /// Runs one slice of the scan into `buffer`.
    ///
    /// Returns without touching anything when idle. A frame start clears the buffer to the
    /// palette background and reports [`RenderEvent::FrameStarted`] before scanning in the
    /// same call.
    pub fn drive<B, P>(
        &mut self,
        buffer: &mut PixelBuffer,
        control: &ControlState,
        budget: &B,
        presenter_port: &P,
    ) where
        B: SliceBudget,
        P: RenderEventPort + ?Sized,
    {
        let slice_started = Instant::now();

        let start = match self.state {
            ScanState::Idle => return,
            ScanState::FrameStart => {
                buffer.fill(control.view().palette().background);
                self.progress = Some(FrameProgress::begin());

                presenter_port.present(RenderEvent::FrameStarted {
                    location: control.view().locate(),
                    iteration_budget: control.iteration_budget(),
                });

                ScanCursor::START
            }
            ScanState::Scanning(cursor) => cursor,
        };

        let iteration_budget = control.iteration_budget();
        let algorithm = MandelbrotAlgorithm::new(iteration_budget);
        let colour_map = mandelbrot_colour_map_factory(control.view().palette(), iteration_budget);

        let outcome = render_slice(
            buffer,
            control.view(),
            control.viewport(),
            start,
            &algorithm,
            &colour_map,
            budget,
        );

        let progress = self.progress.get_or_insert_with(FrameProgress::begin);
        progress.blocks += outcome.blocks();
        progress.slices += 1;

        match outcome {
            SliceOutcome::Yielded { next, blocks } => {
                self.state = ScanState::Scanning(next);

                presenter_port.present(RenderEvent::SliceYielded(SliceData {
                    resume_at: next,
                    blocks,
                    elapsed: slice_started.elapsed(),
                }));
            }
            SliceOutcome::Completed { .. } => {
                let frame = FrameData {
                    location: control.view().locate(),
                    iteration_budget,
                    blocks: progress.blocks,
                    slices: progress.slices,
                    render_duration: progress.started.elapsed(),
                };

                self.state = ScanState::Idle;
                self.progress = None;

                presenter_port.present(RenderEvent::FrameCompleted(frame));
            }
        }
    }
}

impl Default for RasterScheduler {
    fn default() -> Self {
        Self::new()
    }
}
