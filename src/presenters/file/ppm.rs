use std::error::Error;
use std::fmt;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::adapters::pixel_format::rgba_to_rgb;
use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::data::pixel_buffer::PixelBuffer;

#[derive(Debug)]
pub enum PpmWriteError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl fmt::Display for PpmWriteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to write {}: {}", path.display(), source)
            }
        }
    }
}

impl Error for PpmWriteError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
        }
    }
}

/// Writes a buffer as a binary (P6) PPM image.
#[derive(Debug, Default)]
pub struct PpmFilePresenter {}

impl FilePresenterPort for PpmFilePresenter {
    type Error = PpmWriteError;

    fn present(&self, buffer: &PixelBuffer, filepath: impl AsRef<Path>) -> Result<(), PpmWriteError> {
        let path = filepath.as_ref();
        let io_error = |source| PpmWriteError::Io {
            path: path.to_path_buf(),
            source,
        };

        let file = File::create(path).map_err(io_error)?;
        let mut writer = BufWriter::new(file);
        write_ppm(&mut writer, buffer).map_err(io_error)?;
        writer.flush().map_err(io_error)
    }
}

impl PpmFilePresenter {
    pub fn new() -> Self {
        Self {}
    }
}

/// PPM header (`P6`, width height, max colour 255) followed by packed RGB rows.
pub fn write_ppm<W: Write>(writer: &mut W, buffer: &PixelBuffer) -> std::io::Result<()> {
    let canvas = buffer.canvas();

    writeln!(writer, "P6")?;
    writeln!(writer, "{} {}", canvas.width(), canvas.height())?;
    writeln!(writer, "255")?;
    writer.write_all(&rgba_to_rgb(buffer.buffer()))
}
