use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use mandelbrot_explorer::{
    CanvasSize, InteractiveController, Location, PaletteConfig, PpmFilePresenter,
    RenderToFileController, SchedulerLimits, TracingPresenter, ViewParameters,
};

/// Render one Mandelbrot frame through the time-sliced scheduler and save it as PPM.
#[derive(Parser, Debug)]
#[command(name = "mandelbrot_explorer", version)]
struct Cli {
    /// Canvas width in pixels.
    #[arg(long, default_value_t = 800)]
    width: u32,

    /// Canvas height in pixels.
    #[arg(long, default_value_t = 600)]
    height: u32,

    #[arg(long, default_value_t = Location::default().pan_x, allow_hyphen_values = true)]
    pan_x: f64,

    #[arg(long, default_value_t = Location::default().pan_y, allow_hyphen_values = true)]
    pan_y: f64,

    /// Zoom factor, clamped to [1, 1e14].
    #[arg(long, default_value_t = Location::default().zoom)]
    zoom: f64,

    /// Iteration depth control, clamped to [0.1, 1].
    #[arg(long, default_value_t = Location::default().precision)]
    precision: f64,

    /// Block size in pixels, clamped to [1, 8].
    #[arg(long, default_value_t = 1)]
    pixel_size: u32,

    /// Use the grayscale palette instead of the banded gradient.
    #[arg(long)]
    grayscale: bool,

    /// Paint set members black instead of white.
    #[arg(long)]
    contained_black: bool,

    /// Wall-clock budget of one scheduler slice, in milliseconds.
    #[arg(long, default_value_t = 500)]
    slice_ms: u64,

    /// Output PPM path.
    #[arg(long, default_value = "output/mandelbrot.ppm")]
    out: PathBuf,
}

impl Cli {
    fn view_parameters(&self) -> ViewParameters {
        let mut palette = PaletteConfig::default();
        palette.set_grayscale(self.grayscale);
        palette.set_contained_white(!self.contained_black);

        let mut view = ViewParameters::default();
        view.set_location(Location {
            pan_x: self.pan_x,
            pan_y: self.pan_y,
            zoom: self.zoom,
            precision: self.precision,
        });
        view.set_resolution_factor(self.pixel_size);
        view.set_palette(palette);
        view
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let canvas = CanvasSize::new(cli.width, cli.height)?;
    let limits = SchedulerLimits {
        slice_budget: Duration::from_millis(cli.slice_ms),
    };

    let controller = InteractiveController::with_config(
        canvas,
        cli.view_parameters(),
        limits,
        TracingPresenter::new(),
    );
    let mut render = RenderToFileController::new(controller, PpmFilePresenter::new());

    let ticks = render.generate();
    tracing::info!(
        ticks,
        iteration_budget = render.controller().iteration_budget(),
        "render finished"
    );

    if let Some(parent) = cli.out.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    render.write(&cli.out)?;
    tracing::info!(path = %cli.out.display(), "saved");

    Ok(())
}
