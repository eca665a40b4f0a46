use crate::core::actions::render_slice::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::fractals::mandelbrot::colour_mapping::kinds::PaletteKind;
use crate::core::fractals::mandelbrot::colour_mapping::map::MandelbrotColourMap;
use crate::core::fractals::mandelbrot::colour_mapping::palette::PaletteConfig;

const BAND_COUNT: f64 = 3.0;

/// Three-band divergence-speed gradient.
///
/// `shade = 3 * time / budget` selects the band; the fractional part within the band is the
/// interpolation weight:
///
/// | shade    | from         | to       |
/// |----------|--------------|----------|
/// | `[0, 1)` | `background` | `fast`   |
/// | `[1, 2)` | `fast`       | `medium` |
/// | `[2, 3]` | `medium`     | `slow`   |
///
/// Points that never escaped get `contained`.
#[derive(Debug)]
pub struct MandelbrotBandedGradient {
    budget: u32,
    palette: PaletteConfig,
}

impl ColourMap<u32> for MandelbrotBandedGradient {
    fn map(&self, time: u32) -> Colour {
        if time == 0 || self.budget == 0 {
            return self.palette.contained;
        }

        let shade = BAND_COUNT * f64::from(time) / f64::from(self.budget);

        if shade < 1.0 {
            self.palette.background.lerp(self.palette.fast, shade)
        } else if shade < 2.0 {
            self.palette.fast.lerp(self.palette.medium, shade - 1.0)
        } else {
            self.palette.medium.lerp(self.palette.slow, (shade - 2.0).min(1.0))
        }
    }

    fn display_name(&self) -> &str {
        self.kind().display_name()
    }
}

impl MandelbrotColourMap for MandelbrotBandedGradient {
    fn kind(&self) -> PaletteKind {
        PaletteKind::BandedGradient
    }
}

impl MandelbrotBandedGradient {
    #[must_use]
    pub fn new(budget: u32, palette: PaletteConfig) -> Self {
        Self { budget, palette }
    }
}
