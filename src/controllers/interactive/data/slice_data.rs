use std::time::Duration;

use crate::core::actions::render_slice::render_slice::ScanCursor;

/// A slice that ran out of time before the frame was finished.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliceData {
    pub resume_at: ScanCursor,
    pub blocks: u64,
    pub elapsed: Duration,
}
