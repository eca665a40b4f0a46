use crate::controllers::interactive::data::frame_data::FrameData;
use crate::controllers::interactive::data::slice_data::SliceData;
use crate::core::data::view_params::Location;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RenderEvent {
    /// A new scan began; carries the parameters it renders with.
    FrameStarted {
        location: Location,
        iteration_budget: u32,
    },
    SliceYielded(SliceData),
    FrameCompleted(FrameData),
}
