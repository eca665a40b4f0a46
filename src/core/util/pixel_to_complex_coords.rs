use crate::core::data::canvas_size::CanvasSize;
use crate::core::data::complex::Complex;
use crate::core::data::view_params::ViewParameters;
use crate::core::data::viewport::Viewport;
use crate::core::util::linear_map::linear_map;

/// Plane point under pixel `(px, py)`.
///
/// `real = map(px, 0, w, -x_range, x_range) - pan_x`, likewise for `imag` on the y axis.
#[must_use]
pub fn pixel_to_complex_coords(
    px: f64,
    py: f64,
    canvas: CanvasSize,
    view: &ViewParameters,
    viewport: &Viewport,
) -> Complex {
    let real = linear_map(
        px,
        0.0,
        f64::from(canvas.width()),
        -viewport.x_range(),
        viewport.x_range(),
    ) - view.pan_x();
    let imag = linear_map(
        py,
        0.0,
        f64::from(canvas.height()),
        -viewport.y_range(),
        viewport.y_range(),
    ) - view.pan_y();

    Complex { real, imag }
}

/// Inverse of [`pixel_to_complex_coords`]: the (fractional) pixel position of `point`.
#[must_use]
pub fn complex_to_pixel_coords(
    point: Complex,
    canvas: CanvasSize,
    view: &ViewParameters,
    viewport: &Viewport,
) -> (f64, f64) {
    let px = linear_map(
        point.real + view.pan_x(),
        -viewport.x_range(),
        viewport.x_range(),
        0.0,
        f64::from(canvas.width()),
    );
    let py = linear_map(
        point.imag + view.pan_y(),
        -viewport.y_range(),
        viewport.y_range(),
        0.0,
        f64::from(canvas.height()),
    );

    (px, py)
}
