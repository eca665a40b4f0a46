use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum CanvasSizeError {
    ZeroArea { width: u32, height: u32 },
}

impl fmt::Display for CanvasSizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroArea { width, height } => {
                write!(f, "canvas must have a non-zero area: {}x{}", width, height)
            }
        }
    }
}

impl Error for CanvasSizeError {}

/// Pixel dimensions of the drawing surface. Never zero on either axis.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct CanvasSize {
    width: u32,
    height: u32,
}

impl CanvasSize {
    pub fn new(width: u32, height: u32) -> Result<Self, CanvasSizeError> {
        if width == 0 || height == 0 {
            return Err(CanvasSizeError::ZeroArea { width, height });
        }

        Ok(Self { width, height })
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// `height / width`, used to keep the plane window at the canvas aspect ratio.
    #[must_use]
    pub fn aspect_ratio(&self) -> f64 {
        f64::from(self.height) / f64::from(self.width)
    }

    #[must_use]
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    #[must_use]
    pub fn contains(&self, x: u32, y: u32) -> bool {
        x < self.width && y < self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canvas_size_new_valid() {
        let canvas = CanvasSize::new(800, 600).unwrap();

        assert_eq!(canvas.width(), 800);
        assert_eq!(canvas.height(), 600);
        assert_eq!(canvas.pixel_count(), 480_000);
    }

    #[test]
    fn test_canvas_size_rejects_zero_area() {
        assert_eq!(
            CanvasSize::new(0, 10),
            Err(CanvasSizeError::ZeroArea {
                width: 0,
                height: 10
            })
        );
        assert_eq!(
            CanvasSize::new(10, 0),
            Err(CanvasSizeError::ZeroArea {
                width: 10,
                height: 0
            })
        );
        assert_eq!(
            CanvasSize::new(0, 0),
            Err(CanvasSizeError::ZeroArea {
                width: 0,
                height: 0
            })
        );
    }

    #[test]
    fn test_single_pixel_canvas_is_valid() {
        assert!(CanvasSize::new(1, 1).is_ok());
    }

    #[test]
    fn test_aspect_ratio() {
        let canvas = CanvasSize::new(400, 300).unwrap();

        assert_eq!(canvas.aspect_ratio(), 0.75);
    }

    #[test]
    fn test_contains() {
        let canvas = CanvasSize::new(3, 2).unwrap();

        assert!(canvas.contains(0, 0));
        assert!(canvas.contains(2, 1));
        assert!(!canvas.contains(3, 1));
        assert!(!canvas.contains(2, 2));
    }

    #[test]
    fn test_error_display() {
        let error = CanvasSizeError::ZeroArea {
            width: 0,
            height: 5,
        };

        assert_eq!(error.to_string(), "canvas must have a non-zero area: 0x5");
    }
}
