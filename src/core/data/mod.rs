pub mod canvas_size;
pub mod colour;
pub mod complex;
pub mod pixel_buffer;
pub mod view_params;
pub mod viewport;
