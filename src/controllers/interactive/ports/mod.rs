//! Ports the interactive controller reports through.

pub mod presenter;
