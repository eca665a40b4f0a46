use crate::core::data::complex::Complex;

pub trait FractalAlgorithm {
    /// Escape iteration for `c`, or `0` if `c` did not escape.
    fn compute(&self, c: Complex) -> u32;

    /// Iteration budget the results are bounded by.
    fn max_iterations(&self) -> u32;
}
