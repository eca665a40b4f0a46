use std::time::{Duration, Instant};

/// Decides when a scan slice must hand control back to the event loop.
///
/// Checked after every block, so at least one block is processed per slice.
pub trait SliceBudget {
    fn is_exhausted(&self) -> bool;
}

/// Exhausted once `limit` wall-clock time has passed since `start`.
#[derive(Debug, Clone, Copy)]
pub struct WallClockBudget {
    started: Instant,
    limit: Duration,
}

impl WallClockBudget {
    #[must_use]
    pub fn start(limit: Duration) -> Self {
        Self {
            started: Instant::now(),
            limit,
        }
    }

    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }
}

impl SliceBudget for WallClockBudget {
    #[inline]
    fn is_exhausted(&self) -> bool {
        self.started.elapsed() >= self.limit
    }
}

/// Never yields: the whole remaining scan runs in one slice.
#[derive(Debug, Clone, Copy, Default)]
pub struct Unlimited;

impl SliceBudget for Unlimited {
    #[inline]
    fn is_exhausted(&self) -> bool {
        false
    }
}

impl<F> SliceBudget for F
where
    F: Fn() -> bool,
{
    #[inline]
    fn is_exhausted(&self) -> bool {
        self()
    }
}
