#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Colour {
    pub const BLACK: Self = Self::new(0, 0, 0);
    pub const WHITE: Self = Self::new(255, 255, 255);
    pub const BLUE: Self = Self::new(0, 0, 255);
    pub const RED: Self = Self::new(255, 0, 0);
    pub const GREEN: Self = Self::new(0, 255, 0);
    pub const YELLOW: Self = Self::new(255, 255, 0);

    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    #[must_use]
    pub const fn gray(level: u8) -> Self {
        Self::new(level, level, level)
    }

    /// Linear interpolation from `self` towards `to`, with `t` clamped to `[0, 1]`.
    /// Channels round to nearest, ties to even.
    #[must_use]
    pub fn lerp(self, to: Self, t: f64) -> Self {
        let t = t.clamp(0.0, 1.0);

        Self {
            r: lerp_channel(self.r, to.r, t),
            g: lerp_channel(self.g, to.g, t),
            b: lerp_channel(self.b, to.b, t),
        }
    }

    #[must_use]
    pub const fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    #[must_use]
    pub const fn from_array(rgb: [u8; 3]) -> Self {
        Self::new(rgb[0], rgb[1], rgb[2])
    }
}

fn lerp_channel(from: u8, to: u8, t: f64) -> u8 {
    let from = f64::from(from);
    let to = f64::from(to);

    (from + (to - from) * t).round_ties_even() as u8
}
