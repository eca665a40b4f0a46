//! Windowed explorer.
//!
//! winit owns the window and event loop, pixels holds the framebuffer the scheduler paints into,
//! and egui draws the control panel on top.

pub mod app;
pub mod commands;
mod panel;
mod pointer;
