//! Input adapters: sources of user interaction that drive the interactive controller.

#[cfg(feature = "gui")]
pub mod gui;
