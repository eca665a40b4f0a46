//! Interactive, time-sliced Mandelbrot renderer.
//!
//! [`InteractiveController`] owns the view and scans the frame a slice at a time so a host loop
//! stays responsive; [`RenderToFileController`] drives the same scan to completion and saves it.

mod adapters;
mod controllers;
mod core;
#[cfg(feature = "gui")]
mod input;
mod presenters;

pub use crate::adapters::pixel_format::rgba_to_rgb;
pub use crate::controllers::cli::render_to_file::RenderToFileController;
pub use crate::controllers::interactive::data::frame_data::FrameData;
pub use crate::controllers::interactive::data::slice_data::SliceData;
pub use crate::controllers::interactive::{
    InteractiveController, RenderEvent, RenderEventPort, ScanState, SchedulerLimits,
};
pub use crate::controllers::ports::file_presenter::FilePresenterPort;
pub use crate::core::actions::render_slice::render_slice::{
    ScanCursor, ScanGrid, SliceOutcome, render_slice,
};
pub use crate::core::actions::slice_budget::{SliceBudget, Unlimited, WallClockBudget};
pub use crate::core::data::canvas_size::{CanvasSize, CanvasSizeError};
pub use crate::core::data::colour::Colour;
pub use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferError};
pub use crate::core::data::view_params::{Location, ViewParameters};
pub use crate::core::data::viewport::Viewport;
pub use crate::core::util::pixel_to_complex_coords::{
    complex_to_pixel_coords, pixel_to_complex_coords,
};
pub use crate::core::fractals::mandelbrot::algorithm::{MandelbrotAlgorithm, escape_time};
pub use crate::core::fractals::mandelbrot::colour_mapping::factory::{
    colorize, mandelbrot_colour_map_factory,
};
pub use crate::core::fractals::mandelbrot::colour_mapping::kinds::PaletteKind;
pub use crate::core::fractals::mandelbrot::colour_mapping::palette::PaletteConfig;
pub use crate::core::fractals::mandelbrot::iteration_budget::compute_budget;
pub use crate::presenters::file::ppm::{PpmFilePresenter, PpmWriteError, write_ppm};
pub use crate::presenters::log::tracing_presenter::TracingPresenter;
pub use crate::presenters::stats::frame_stats::FrameStats;

#[cfg(feature = "gui")]
pub use crate::input::gui::commands::run_gui::RunGuiCommand;
#[cfg(feature = "gui")]
pub use crate::presenters::pixels::factory::PixelsPresenterFactory;
