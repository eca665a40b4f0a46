pub mod file;
pub mod log;
#[cfg(feature = "gui")]
pub mod pixels;
pub mod stats;
