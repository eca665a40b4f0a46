use std::error::Error;
use std::path::Path;

use crate::core::data::pixel_buffer::PixelBuffer;

pub trait FilePresenterPort {
    type Error: Error + 'static;

    fn present(&self, buffer: &PixelBuffer, filepath: impl AsRef<Path>) -> Result<(), Self::Error>;
}
