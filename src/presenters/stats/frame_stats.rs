use std::cell::Cell;
use std::time::Duration;

use crate::controllers::interactive::data::frame_data::FrameData;
use crate::controllers::interactive::events::render_event::RenderEvent;
use crate::controllers::interactive::ports::presenter::RenderEventPort;

const FPS_SMOOTHING: f64 = 0.1;

/// Render telemetry for the stats panel.
#[derive(Debug, Default)]
pub struct FrameStats {
    frames_completed: Cell<u64>,
    slices_this_frame: Cell<u32>,
    iteration_budget: Cell<u32>,
    last_frame: Cell<Option<FrameData>>,
    fps: Cell<Option<f64>>,
}

impl RenderEventPort for FrameStats {
    fn present(&self, event: RenderEvent) {
        match event {
            RenderEvent::FrameStarted {
                iteration_budget, ..
            } => {
                self.iteration_budget.set(iteration_budget);
                self.slices_this_frame.set(0);
            }
            RenderEvent::SliceYielded(_) => {
                self.slices_this_frame.set(self.slices_this_frame.get() + 1);
            }
            RenderEvent::FrameCompleted(frame) => {
                self.frames_completed.set(self.frames_completed.get() + 1);
                self.slices_this_frame.set(0);
                self.last_frame.set(Some(frame));
            }
        }
    }
}

impl FrameStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feeds the time between two host frames into the smoothed fps estimate.
    pub fn record_host_frame(&self, dt: Duration) {
        let seconds = dt.as_secs_f64();
        if seconds <= 0.0 {
            return;
        }

        let sample = 1.0 / seconds;
        let fps = match self.fps.get() {
            Some(previous) => previous + (sample - previous) * FPS_SMOOTHING,
            None => sample,
        };
        self.fps.set(Some(fps));
    }

    #[must_use]
    pub fn fps(&self) -> Option<f64> {
        self.fps.get()
    }

    #[must_use]
    pub fn frames_completed(&self) -> u64 {
        self.frames_completed.get()
    }

    /// Slices yielded so far by the scan in flight.
    #[must_use]
    pub fn slices_this_frame(&self) -> u32 {
        self.slices_this_frame.get()
    }

    #[must_use]
    pub fn iteration_budget(&self) -> u32 {
        self.iteration_budget.get()
    }

    #[must_use]
    pub fn last_frame(&self) -> Option<FrameData> {
        self.last_frame.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controllers::interactive::data::slice_data::SliceData;
    use crate::core::actions::render_slice::render_slice::ScanCursor;
    use crate::core::data::view_params::Location;

    fn frame(blocks: u64) -> FrameData {
        FrameData {
            location: Location::default(),
            iteration_budget: 72,
            blocks,
            slices: 3,
            render_duration: Duration::from_millis(40),
        }
    }

    #[test]
    fn tracks_slices_until_completion() {
        let stats = FrameStats::new();

        stats.present(RenderEvent::FrameStarted {
            location: Location::default(),
            iteration_budget: 72,
        });
        for _ in 0..2 {
            stats.present(RenderEvent::SliceYielded(SliceData {
                resume_at: ScanCursor { x: 4, y: 0 },
                blocks: 4,
                elapsed: Duration::from_millis(500),
            }));
        }

        assert_eq!(stats.iteration_budget(), 72);
        assert_eq!(stats.slices_this_frame(), 2);
        assert_eq!(stats.last_frame(), None);

        stats.present(RenderEvent::FrameCompleted(frame(12)));

        assert_eq!(stats.frames_completed(), 1);
        assert_eq!(stats.slices_this_frame(), 0);
        assert_eq!(stats.last_frame(), Some(frame(12)));
    }

    #[test]
    fn fps_starts_at_first_sample_then_smooths() {
        let stats = FrameStats::new();
        assert_eq!(stats.fps(), None);

        stats.record_host_frame(Duration::from_millis(10));
        assert!((stats.fps().unwrap() - 100.0).abs() < 1e-9);

        stats.record_host_frame(Duration::from_millis(20));
        assert!((stats.fps().unwrap() - 95.0).abs() < 1e-9);

        stats.record_host_frame(Duration::ZERO);
        assert!((stats.fps().unwrap() - 95.0).abs() < 1e-9);
    }
}
