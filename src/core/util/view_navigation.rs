use crate::core::data::canvas_size::CanvasSize;
use crate::core::data::view_params::clamp_zoom;
use crate::core::data::viewport::Viewport;
use crate::core::util::linear_map::linear_map;

pub const MAX_WHEEL_DELTA: f64 = 50.0;
pub const WHEEL_ZOOM_RATE: f64 = 0.005;

/// Result of a wheel step about a pivot pixel.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ZoomStep {
    pub zoom: f64,
    pub pan_dx: f64,
    pub pan_dy: f64,
}

/// Zoom after one wheel event. Positive deltas zoom in. The delta is clamped to
/// `±MAX_WHEEL_DELTA` and scaled by the current zoom before the result is clamped to the
/// zoom bounds.
#[must_use]
pub fn wheel_zoom(zoom: f64, wheel_delta: f64) -> f64 {
    let delta = if wheel_delta.is_nan() {
        0.0
    } else {
        wheel_delta.clamp(-MAX_WHEEL_DELTA, MAX_WHEEL_DELTA)
    };

    clamp_zoom(zoom + delta * WHEEL_ZOOM_RATE * zoom)
}

/// Zooms about pixel `(px, py)` keeping the plane point under it fixed.
///
/// `viewport` must still be the one derived from `old_zoom`. Returns `None` when clamping
/// leaves the zoom unchanged.
#[must_use]
pub fn zoom_about_pivot(
    px: f64,
    py: f64,
    wheel_delta: f64,
    old_zoom: f64,
    canvas: CanvasSize,
    viewport: &Viewport,
) -> Option<ZoomStep> {
    let new_zoom = wheel_zoom(old_zoom, wheel_delta);

    if new_zoom == old_zoom {
        return None;
    }

    let factor = (old_zoom - new_zoom) / new_zoom;
    let offset_x = linear_map(
        px,
        0.0,
        f64::from(canvas.width()),
        -viewport.x_range(),
        viewport.x_range(),
    );
    let offset_y = linear_map(
        py,
        0.0,
        f64::from(canvas.height()),
        -viewport.y_range(),
        viewport.y_range(),
    );

    Some(ZoomStep {
        zoom: new_zoom,
        pan_dx: offset_x * factor,
        pan_dy: offset_y * factor,
    })
}

/// Converts a pointer drag in pixels into a pan offset in plane units.
#[must_use]
pub fn drag_to_pan_delta(dx: f64, dy: f64, canvas: CanvasSize, viewport: &Viewport) -> (f64, f64) {
    let width = f64::from(canvas.width());
    let height = f64::from(canvas.height());

    (
        linear_map(dx, -width / 2.0, width / 2.0, -viewport.x_range(), viewport.x_range()),
        linear_map(dy, -height / 2.0, height / 2.0, -viewport.y_range(), viewport.y_range()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::view_params::{MAX_ZOOM, MIN_ZOOM};

    fn assert_close(actual: f64, expected: f64) {
        assert!((actual - expected).abs() < 1e-9, "{} != {}", actual, expected);
    }

    #[test]
    fn test_wheel_zoom_scales_with_current_zoom() {
        assert_close(wheel_zoom(1.0, 10.0), 1.05);
        assert_close(wheel_zoom(100.0, 10.0), 105.0);
        assert_close(wheel_zoom(100.0, -10.0), 95.0);
    }

    #[test]
    fn test_wheel_delta_is_clamped_per_event() {
        assert_eq!(wheel_zoom(10.0, 5000.0), wheel_zoom(10.0, MAX_WHEEL_DELTA));
        assert_eq!(wheel_zoom(10.0, -5000.0), wheel_zoom(10.0, -MAX_WHEEL_DELTA));
        assert_close(wheel_zoom(10.0, 5000.0), 12.5);
    }

    #[test]
    fn test_repeated_zoom_out_stops_at_minimum() {
        let mut zoom = 1e6;
        for _ in 0..200 {
            zoom = wheel_zoom(zoom, -1e9);
            assert!(zoom >= MIN_ZOOM);
        }

        assert_eq!(zoom, MIN_ZOOM);
    }

    #[test]
    fn test_repeated_zoom_in_stops_at_maximum() {
        let mut zoom = 1.0;
        for _ in 0..400 {
            zoom = wheel_zoom(zoom, 1e9);
            assert!(zoom <= MAX_ZOOM);
        }

        assert_eq!(zoom, MAX_ZOOM);
    }

    #[test]
    fn test_zoom_at_bound_is_no_op() {
        let canvas = CanvasSize::new(100, 100).unwrap();
        let viewport = Viewport::new(MIN_ZOOM, canvas);

        assert_eq!(zoom_about_pivot(10.0, 10.0, -20.0, MIN_ZOOM, canvas, &viewport), None);
    }

    #[test]
    fn test_pivot_point_is_invariant() {
        let canvas = CanvasSize::new(400, 300).unwrap();
        let (pan_x, pan_y, old_zoom) = (0.5, -0.1, 3.0);
        let (px, py) = (310.0, 42.0);
        let old_viewport = Viewport::new(old_zoom, canvas);

        let plane = |pan: f64, offset: f64, range: f64, extent: f64| {
            linear_map(offset, 0.0, extent, -range, range) - pan
        };

        let step = zoom_about_pivot(px, py, 30.0, old_zoom, canvas, &old_viewport).unwrap();
        let new_viewport = Viewport::new(step.zoom, canvas);

        let real_before = plane(pan_x, px, old_viewport.x_range(), 400.0);
        let imag_before = plane(pan_y, py, old_viewport.y_range(), 300.0);
        let real_after = plane(pan_x + step.pan_dx, px, new_viewport.x_range(), 400.0);
        let imag_after = plane(pan_y + step.pan_dy, py, new_viewport.y_range(), 300.0);

        assert!(step.zoom > old_zoom);
        assert!((real_before - real_after).abs() < 1e-12);
        assert!((imag_before - imag_after).abs() < 1e-12);
    }

    #[test]
    fn test_zoom_about_centre_leaves_pan_untouched() {
        let canvas = CanvasSize::new(200, 200).unwrap();
        let viewport = Viewport::new(2.0, canvas);

        let step = zoom_about_pivot(100.0, 100.0, 50.0, 2.0, canvas, &viewport).unwrap();

        assert_eq!(step.pan_dx, 0.0);
        assert_eq!(step.pan_dy, 0.0);
        assert_close(step.zoom, 2.5);
    }

    #[test]
    fn test_drag_across_full_width_moves_by_full_span() {
        let canvas = CanvasSize::new(200, 100).unwrap();
        let viewport = Viewport::new(1.0, canvas);

        let (dx, dy) = drag_to_pan_delta(200.0, -100.0, canvas, &viewport);

        assert_eq!(dx, 6.0);
        assert_eq!(dy, -3.0);
        assert_eq!(drag_to_pan_delta(0.0, 0.0, canvas, &viewport), (0.0, 0.0));
    }
}
