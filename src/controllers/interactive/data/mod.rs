pub mod frame_data;
pub mod slice_data;
