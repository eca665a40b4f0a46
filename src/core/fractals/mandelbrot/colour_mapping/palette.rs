use crate::core::data::colour::Colour;
use crate::core::fractals::mandelbrot::colour_mapping::kinds::PaletteKind;

/// Anchor colours for the banded gradient, plus the palette selection.
///
/// `background` is also the colour the scheduler clears to before a new scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaletteConfig {
    pub kind: PaletteKind,
    pub background: Colour,
    pub fast: Colour,
    pub medium: Colour,
    pub slow: Colour,
    pub contained: Colour,
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self {
            kind: PaletteKind::default(),
            background: Colour::BLACK,
            fast: Colour::BLUE,
            medium: Colour::RED,
            slow: Colour::YELLOW,
            contained: Colour::WHITE,
        }
    }
}

impl PaletteConfig {
    #[must_use]
    pub fn grayscale() -> Self {
        Self {
            kind: PaletteKind::Grayscale,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn is_grayscale(&self) -> bool {
        self.kind == PaletteKind::Grayscale
    }

    pub fn set_grayscale(&mut self, grayscale: bool) {
        self.kind = if grayscale {
            PaletteKind::Grayscale
        } else {
            PaletteKind::BandedGradient
        };
    }

    #[must_use]
    pub fn contained_is_white(&self) -> bool {
        self.contained == Colour::WHITE
    }

    /// Switches set members between white and black.
    pub fn set_contained_white(&mut self, white: bool) {
        self.contained = if white { Colour::WHITE } else { Colour::BLACK };
    }
}
