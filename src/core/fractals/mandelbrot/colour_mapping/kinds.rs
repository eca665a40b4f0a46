#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PaletteKind {
    #[default]
    BandedGradient,
    Grayscale,
}

impl PaletteKind {
    pub const ALL: &'static [Self] = &[Self::BandedGradient, Self::Grayscale];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::BandedGradient => "Banded gradient",
            Self::Grayscale => "Grayscale",
        }
    }
}

impl std::fmt::Display for PaletteKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).display_name())
    }
}
