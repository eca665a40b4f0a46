use crate::core::data::canvas_size::CanvasSize;
use crate::core::data::colour::Colour;
use std::error::Error;
use std::fmt;

pub const BYTES_PER_PIXEL: usize = 4;
const OPAQUE: u8 = 255;

fn canvas_to_buffer_size(canvas: CanvasSize) -> usize {
    canvas.pixel_count() * BYTES_PER_PIXEL
}

#[derive(Debug, Clone, PartialEq)]
pub enum PixelBufferError {
    PixelOutsideBounds {
        x: u32,
        y: u32,
        canvas: CanvasSize,
    },
    BoundsMismatch {
        canvas_size: usize,
        buffer_size: usize,
    },
}

impl fmt::Display for PixelBufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BoundsMismatch {
                canvas_size,
                buffer_size,
            } => {
                write!(
                    f,
                    "canvas size {} does not match buffer size {}",
                    canvas_size, buffer_size
                )
            }
            Self::PixelOutsideBounds { x, y, canvas } => {
                write!(
                    f,
                    "pixel at x:{}, y:{} outside of {}x{} canvas",
                    x,
                    y,
                    canvas.width(),
                    canvas.height()
                )
            }
        }
    }
}

impl Error for PixelBufferError {}

pub type PixelBufferData = Vec<u8>;

/// Row-major RGBA8 surface, 4 bytes per pixel, alpha always 255.
#[derive(Debug, Clone)]
pub struct PixelBuffer {
    canvas: CanvasSize,
    buffer: PixelBufferData,
}

impl PixelBuffer {
    /// Creates an opaque black buffer covering `canvas`.
    #[must_use]
    pub fn new(canvas: CanvasSize) -> Self {
        let mut pixel_buffer = Self {
            canvas,
            buffer: vec![0; canvas_to_buffer_size(canvas)],
        };
        pixel_buffer.fill(Colour::BLACK);
        pixel_buffer
    }

    pub fn from_data(canvas: CanvasSize, buffer: PixelBufferData) -> Result<Self, PixelBufferError> {
        let canvas_size = canvas_to_buffer_size(canvas);

        if canvas_size != buffer.len() {
            return Err(PixelBufferError::BoundsMismatch {
                canvas_size,
                buffer_size: buffer.len(),
            });
        }

        Ok(Self { canvas, buffer })
    }

    #[must_use]
    pub fn canvas(&self) -> CanvasSize {
        self.canvas
    }

    #[must_use]
    pub fn buffer(&self) -> &[u8] {
        &self.buffer
    }

    #[must_use]
    pub fn buffer_size(&self) -> usize {
        self.buffer.len()
    }

    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> Option<Colour> {
        if !self.canvas.contains(x, y) {
            return None;
        }

        let index = self.index_of(x, y);
        Some(Colour::new(
            self.buffer[index],
            self.buffer[index + 1],
            self.buffer[index + 2],
        ))
    }

    pub fn set_pixel(&mut self, x: u32, y: u32, colour: Colour) -> Result<(), PixelBufferError> {
        if !self.canvas.contains(x, y) {
            return Err(PixelBufferError::PixelOutsideBounds {
                x,
                y,
                canvas: self.canvas,
            });
        }

        let index = self.index_of(x, y);
        self.write_at(index, colour);
        Ok(())
    }

    pub fn fill(&mut self, colour: Colour) {
        for pixel in self.buffer.chunks_exact_mut(BYTES_PER_PIXEL) {
            pixel.copy_from_slice(&[colour.r, colour.g, colour.b, OPAQUE]);
        }
    }

    /// Paints the `size`×`size` block whose top-left pixel is `(x, y)`, clipped to the canvas.
    pub fn fill_block(&mut self, x: u32, y: u32, size: u32, colour: Colour) {
        self.fill_rect(x, y, size, size, colour);
    }

    /// Paints the first `length` pixels of row `y`. Rows outside the canvas are ignored.
    pub fn draw_horizontal_line(&mut self, y: u32, length: u32, colour: Colour) {
        self.fill_rect(0, y, length, 1, colour);
    }

    fn fill_rect(&mut self, x: u32, y: u32, width: u32, height: u32, colour: Colour) {
        let x_end = x.saturating_add(width).min(self.canvas.width());
        let y_end = y.saturating_add(height).min(self.canvas.height());

        for row in y..y_end {
            let start = self.index_of(x.min(x_end), row);
            let end = start + (x_end.saturating_sub(x) as usize) * BYTES_PER_PIXEL;

            for pixel in self.buffer[start..end].chunks_exact_mut(BYTES_PER_PIXEL) {
                pixel.copy_from_slice(&[colour.r, colour.g, colour.b, OPAQUE]);
            }
        }
    }

    fn index_of(&self, x: u32, y: u32) -> usize {
        (y as usize * self.canvas.width() as usize + x as usize) * BYTES_PER_PIXEL
    }

    fn write_at(&mut self, index: usize, colour: Colour) {
        self.buffer[index] = colour.r;
        self.buffer[index + 1] = colour.g;
        self.buffer[index + 2] = colour.b;
        self.buffer[index + 3] = OPAQUE;
    }
}
