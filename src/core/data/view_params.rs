use crate::core::fractals::mandelbrot::colour_mapping::palette::PaletteConfig;

pub const MIN_ZOOM: f64 = 1.0;
pub const MAX_ZOOM: f64 = 1e14;
pub const MIN_PRECISION: f64 = 0.1;
pub const MAX_PRECISION: f64 = 1.0;
pub const MIN_RESOLUTION_FACTOR: u32 = 1;
pub const MAX_RESOLUTION_FACTOR: u32 = 8;

pub const DEFAULT_PAN_X: f64 = 0.5;
pub const DEFAULT_PAN_Y: f64 = 0.0;
pub const DEFAULT_ZOOM: f64 = 1.0;
pub const DEFAULT_PRECISION: f64 = 0.16;

/// Snapshot of where the view is: what gets logged at the start of every scan and what
/// `goto` accepts.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Location {
    pub pan_x: f64,
    pub pan_y: f64,
    pub zoom: f64,
    pub precision: f64,
}

impl Default for Location {
    fn default() -> Self {
        Self {
            pan_x: DEFAULT_PAN_X,
            pan_y: DEFAULT_PAN_Y,
            zoom: DEFAULT_ZOOM,
            precision: DEFAULT_PRECISION,
        }
    }
}

/// User-controlled view parameters. Setters clamp instead of rejecting.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ViewParameters {
    pan_x: f64,
    pan_y: f64,
    zoom: f64,
    precision: f64,
    resolution_factor: u32,
    palette: PaletteConfig,
}

impl Default for ViewParameters {
    fn default() -> Self {
        let location = Location::default();

        Self {
            pan_x: location.pan_x,
            pan_y: location.pan_y,
            zoom: location.zoom,
            precision: location.precision,
            resolution_factor: MIN_RESOLUTION_FACTOR,
            palette: PaletteConfig::default(),
        }
    }
}

impl ViewParameters {
    #[must_use]
    pub fn pan_x(&self) -> f64 {
        self.pan_x
    }

    #[must_use]
    pub fn pan_y(&self) -> f64 {
        self.pan_y
    }

    #[must_use]
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    #[must_use]
    pub fn precision(&self) -> f64 {
        self.precision
    }

    #[must_use]
    pub fn resolution_factor(&self) -> u32 {
        self.resolution_factor
    }

    /// Screen pixels per axis that share one evaluator sample.
    #[must_use]
    pub fn block_size(&self) -> u32 {
        self.resolution_factor
    }

    #[must_use]
    pub fn palette(&self) -> &PaletteConfig {
        &self.palette
    }

    #[must_use]
    pub fn locate(&self) -> Location {
        Location {
            pan_x: self.pan_x,
            pan_y: self.pan_y,
            zoom: self.zoom,
            precision: self.precision,
        }
    }

    pub fn set_pan(&mut self, pan_x: f64, pan_y: f64) {
        self.pan_x = pan_x;
        self.pan_y = pan_y;
    }

    pub fn set_zoom(&mut self, zoom: f64) {
        self.zoom = clamp_zoom(zoom);
    }

    pub fn set_precision(&mut self, precision: f64) {
        self.precision = if precision.is_nan() {
            DEFAULT_PRECISION
        } else {
            precision.clamp(MIN_PRECISION, MAX_PRECISION)
        };
    }

    pub fn set_resolution_factor(&mut self, resolution_factor: u32) {
        self.resolution_factor =
            resolution_factor.clamp(MIN_RESOLUTION_FACTOR, MAX_RESOLUTION_FACTOR);
    }

    pub fn set_palette(&mut self, palette: PaletteConfig) {
        self.palette = palette;
    }

    pub fn palette_mut(&mut self) -> &mut PaletteConfig {
        &mut self.palette
    }

    pub fn set_location(&mut self, location: Location) {
        self.set_pan(location.pan_x, location.pan_y);
        self.set_zoom(location.zoom);
        self.set_precision(location.precision);
    }
}

#[must_use]
pub fn clamp_zoom(zoom: f64) -> f64 {
    if zoom.is_nan() {
        return MIN_ZOOM;
    }

    zoom.clamp(MIN_ZOOM, MAX_ZOOM)
}
