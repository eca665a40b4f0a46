pub mod render_slice;
pub mod slice_budget;
