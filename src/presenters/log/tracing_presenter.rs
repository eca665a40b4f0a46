use tracing::{debug, info};

use crate::controllers::interactive::events::render_event::RenderEvent;
use crate::controllers::interactive::ports::presenter::RenderEventPort;

/// Logs scan progress through `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingPresenter;

impl RenderEventPort for TracingPresenter {
    fn present(&self, event: RenderEvent) {
        match event {
            RenderEvent::FrameStarted {
                location,
                iteration_budget,
            } => {
                info!(
                    pan_x = location.pan_x,
                    pan_y = location.pan_y,
                    zoom = location.zoom,
                    precision = location.precision,
                    iteration_budget,
                    "frame started"
                );
            }
            RenderEvent::SliceYielded(slice) => {
                debug!(
                    resume_x = slice.resume_at.x,
                    resume_y = slice.resume_at.y,
                    blocks = slice.blocks,
                    elapsed_ms = slice.elapsed.as_secs_f64() * 1000.0,
                    "slice yielded"
                );
            }
            RenderEvent::FrameCompleted(frame) => {
                info!(
                    blocks = frame.blocks,
                    slices = frame.slices,
                    duration_ms = frame.render_duration.as_secs_f64() * 1000.0,
                    "frame completed"
                );
            }
        }
    }
}

impl TracingPresenter {
    pub fn new() -> Self {
        Self
    }
}
