use std::time::Duration;

use crate::core::data::view_params::Location;

/// Summary of a fully rendered frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameData {
    pub location: Location,
    pub iteration_budget: u32,
    pub blocks: u64,
    pub slices: u32,
    pub render_duration: Duration,
}
