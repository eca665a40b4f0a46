/// Re-maps `value` from `[in_min, in_max]` onto `[out_min, out_max]` without clamping.
#[must_use]
pub fn linear_map(value: f64, in_min: f64, in_max: f64, out_min: f64, out_max: f64) -> f64 {
    out_min + (value - in_min) / (in_max - in_min) * (out_max - out_min)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints_map_to_endpoints() {
        assert_eq!(linear_map(0.0, 0.0, 100.0, -3.0, 3.0), -3.0);
        assert_eq!(linear_map(100.0, 0.0, 100.0, -3.0, 3.0), 3.0);
    }

    #[test]
    fn test_midpoint() {
        assert_eq!(linear_map(50.0, 0.0, 100.0, -3.0, 3.0), 0.0);
    }

    #[test]
    fn test_extrapolates_outside_input_range() {
        assert_eq!(linear_map(150.0, 0.0, 100.0, 0.0, 1.0), 1.5);
        assert_eq!(linear_map(-50.0, 0.0, 100.0, 0.0, 1.0), -0.5);
    }

    #[test]
    fn test_reversed_output_range() {
        assert_eq!(linear_map(25.0, 0.0, 100.0, 1.0, 0.0), 0.75);
    }
}
