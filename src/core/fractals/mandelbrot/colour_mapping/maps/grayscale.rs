use crate::core::actions::render_slice::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::fractals::mandelbrot::colour_mapping::kinds::PaletteKind;
use crate::core::fractals::mandelbrot::colour_mapping::map::MandelbrotColourMap;

#[derive(Debug)]
pub struct MandelbrotGrayscale {
    budget: u32,
}

impl ColourMap<u32> for MandelbrotGrayscale {
    fn map(&self, time: u32) -> Colour {
        if self.budget == 0 || time == 0 {
            return Colour::BLACK;
        }

        let shade = (f64::from(time) / f64::from(self.budget)).min(1.0);

        Colour::gray((255.0 * shade).round_ties_even() as u8)
    }

    fn display_name(&self) -> &str {
        self.kind().display_name()
    }
}

impl MandelbrotColourMap for MandelbrotGrayscale {
    fn kind(&self) -> PaletteKind {
        PaletteKind::Grayscale
    }
}

impl MandelbrotGrayscale {
    #[must_use]
    pub fn new(budget: u32) -> Self {
        Self { budget }
    }
}
