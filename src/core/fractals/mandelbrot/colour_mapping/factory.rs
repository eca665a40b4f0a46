use crate::core::actions::render_slice::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::fractals::mandelbrot::colour_mapping::{
    kinds::PaletteKind,
    map::MandelbrotColourMap,
    maps::{banded_gradient::MandelbrotBandedGradient, grayscale::MandelbrotGrayscale},
    palette::PaletteConfig,
};

#[must_use]
pub fn mandelbrot_colour_map_factory(
    palette: &PaletteConfig,
    budget: u32,
) -> Box<dyn MandelbrotColourMap> {
    match palette.kind {
        PaletteKind::BandedGradient => Box::new(MandelbrotBandedGradient::new(budget, *palette)),
        PaletteKind::Grayscale => Box::new(MandelbrotGrayscale::new(budget)),
    }
}

/// Colours a single escape time. Prefer building one map per frame via
/// [`mandelbrot_colour_map_factory`] when colouring many pixels.
#[must_use]
pub fn colorize(time: u32, budget: u32, palette: &PaletteConfig) -> Colour {
    mandelbrot_colour_map_factory(palette, budget).map(time)
}
