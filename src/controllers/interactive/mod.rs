//! Interactive controller for time-sliced Mandelbrot exploration.
//!
//! The controller owns the view parameters, the RGBA pixel buffer and the resumable raster
//! scan. A host event loop calls [`InteractiveController::tick`] once per frame; every
//! parameter change goes through the controller and restarts the scan.
//!
//! # Architecture
//!
//! - **Input**: drag, wheel, panel and resize calls on the controller
//! - **Output**: [`RenderEventPort`] receives frame start, slice and completion events
//! - **Core**: block rendering and the fractal maths live in `core/`

pub mod control_state;
mod controller;
pub mod data;
pub mod events;
pub mod ports;
pub mod scheduler;

pub use controller::InteractiveController;
pub use events::render_event::RenderEvent;
pub use ports::presenter::RenderEventPort;
pub use scheduler::{ScanState, SchedulerLimits};
