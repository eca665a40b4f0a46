use crate::core::actions::render_slice::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::fractals::mandelbrot::colour_mapping::kinds::PaletteKind;

/// Maps an escape time (0 = did not escape) to a colour for a fixed iteration budget.
pub trait MandelbrotColourMap: ColourMap<u32> {
    fn kind(&self) -> PaletteKind;
}

impl ColourMap<u32> for Box<dyn MandelbrotColourMap> {
    fn map(&self, value: u32) -> Colour {
        (**self).map(value)
    }

    fn display_name(&self) -> &str {
        (**self).display_name()
    }
}
