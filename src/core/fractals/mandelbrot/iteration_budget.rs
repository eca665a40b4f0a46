const PRECISION_BASE: f64 = 1000.0;
const PRECISION_OFFSET: f64 = 1.5;
const ZOOM_OFFSET: f64 = 1000.0;

/// Maximum escape iterations for a zoom level and precision knob:
/// `floor((1000^precision - 1.5) * ln(zoom + 1000)²)`, never below zero.
///
/// The precision term gives a linear-feeling knob over an exponential range, the log term
/// grows slowly enough that deep zooms stay tractable.
#[must_use]
pub fn compute_budget(zoom: f64, precision: f64) -> u32 {
    let precision_term = PRECISION_BASE.powf(precision) - PRECISION_OFFSET;
    let depth_term = (zoom + ZOOM_OFFSET).ln().powi(2);
    let budget = (precision_term * depth_term).floor();

    if budget.is_nan() || budget <= 0.0 {
        0
    } else {
        budget.min(f64::from(u32::MAX)) as u32
    }
}
