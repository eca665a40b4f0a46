use crate::core::actions::render_slice::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::complex::Complex;

const ESCAPE_RADIUS_SQUARED: f64 = 4.0;

/// Iterates `z ← z² + c` from `z = 0` and returns the first iteration `i` in `1..=budget`
/// at which `|z|² > 4`, or `0` if `c` stayed bounded for the whole budget.
#[must_use]
pub fn escape_time(c: Complex, budget: u32) -> u32 {
    let mut z = Complex::ORIGIN;

    for iteration in 1..=budget {
        z = z.square() + c;

        if z.magnitude_squared() > ESCAPE_RADIUS_SQUARED {
            return iteration;
        }
    }

    0
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct MandelbrotAlgorithm {
    max_iterations: u32,
}

impl FractalAlgorithm for MandelbrotAlgorithm {
    fn compute(&self, c: Complex) -> u32 {
        escape_time(c, self.max_iterations)
    }

    fn max_iterations(&self) -> u32 {
        self.max_iterations
    }
}

impl MandelbrotAlgorithm {
    #[must_use]
    pub fn new(max_iterations: u32) -> Self {
        Self { max_iterations }
    }
}
