pub mod banded_gradient;
pub mod grayscale;
