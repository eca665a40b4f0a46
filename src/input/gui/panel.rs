use crate::controllers::interactive::{InteractiveController, RenderEventPort, ScanState};
use crate::core::data::colour::Colour;
use crate::core::data::view_params::{
    MAX_PRECISION, MAX_RESOLUTION_FACTOR, MIN_PRECISION, MIN_RESOLUTION_FACTOR, ViewParameters,
};
use crate::core::fractals::mandelbrot::colour_mapping::palette::PaletteConfig;
use crate::presenters::stats::frame_stats::FrameStats;

/// A control the user touched this frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PanelChange {
    ResolutionFactor(u32),
    Precision(f64),
    ContainedWhite(bool),
    Grayscale(bool),
    Palette(PaletteConfig),
    ResetView,
}

pub fn apply_panel_change<P: RenderEventPort>(
    controller: &mut InteractiveController<P>,
    change: PanelChange,
) {
    match change {
        PanelChange::ResolutionFactor(factor) => controller.set_resolution_factor(factor),
        PanelChange::Precision(precision) => controller.set_precision(precision),
        PanelChange::ContainedWhite(white) => controller.set_contained_white(white),
        PanelChange::Grayscale(grayscale) => controller.set_grayscale(grayscale),
        PanelChange::Palette(palette) => controller.set_palette(palette),
        PanelChange::ResetView => controller.reset_view(),
    }
}

fn scan_state_label(state: ScanState) -> String {
    match state {
        ScanState::Idle => "complete".to_string(),
        ScanState::FrameStart => "starting".to_string(),
        ScanState::Scanning(cursor) => format!("scanning row {}", cursor.y),
    }
}

/// Draws the control panel and returns what changed.
pub fn show_panel(
    ctx: &egui::Context,
    view: &ViewParameters,
    scan_state: ScanState,
    stats: &FrameStats,
) -> Vec<PanelChange> {
    let mut changes = Vec::new();
    let mut resolution_factor = view.resolution_factor();
    let mut precision = view.precision();
    let mut palette = *view.palette();
    let mut white = palette.contained_is_white();
    let mut grayscale = palette.is_grayscale();

    egui::Window::new("Controls")
        .default_pos([10.0, 10.0])
        .default_size([260.0, 320.0])
        .show(ctx, |ui| {
            ui.heading("Mandelbrot Explorer");
            ui.separator();

            if ui
                .add(
                    egui::Slider::new(
                        &mut resolution_factor,
                        MIN_RESOLUTION_FACTOR..=MAX_RESOLUTION_FACTOR,
                    )
                    .text("Pixel size"),
                )
                .changed()
            {
                changes.push(PanelChange::ResolutionFactor(resolution_factor));
            }

            if ui
                .add(
                    egui::Slider::new(&mut precision, MIN_PRECISION..=MAX_PRECISION)
                        .step_by(0.01)
                        .text("Precision"),
                )
                .changed()
            {
                changes.push(PanelChange::Precision(precision));
            }

            if ui.checkbox(&mut white, "White").changed() {
                palette.set_contained_white(white);
                changes.push(PanelChange::ContainedWhite(white));
            }

            if ui.checkbox(&mut grayscale, "Grayscale").changed() {
                palette.set_grayscale(grayscale);
                changes.push(PanelChange::Grayscale(grayscale));
            }

            ui.collapsing("Palette", |ui| {
                let mut anchors_changed = false;
                let anchors = [
                    ("Background", &mut palette.background),
                    ("Fast", &mut palette.fast),
                    ("Medium", &mut palette.medium),
                    ("Slow", &mut palette.slow),
                    ("Contained", &mut palette.contained),
                ];

                for (label, colour) in anchors {
                    ui.horizontal(|ui| {
                        let mut rgb = colour.to_array();
                        if ui.color_edit_button_srgb(&mut rgb).changed() {
                            *colour = Colour::from_array(rgb);
                            anchors_changed = true;
                        }
                        ui.label(label);
                    });
                }

                if anchors_changed {
                    changes.push(PanelChange::Palette(palette));
                }
            });

            if ui.button("Reset view").clicked() {
                changes.push(PanelChange::ResetView);
            }

            ui.separator();
            ui.label(format!("Pan: ({:.6}, {:.6})", view.pan_x(), view.pan_y()));
            ui.label(format!("Zoom: {:.3e}", view.zoom()));
            ui.label(format!("Iteration budget: {}", stats.iteration_budget()));
            ui.label(format!("Scan: {}", scan_state_label(scan_state)));
            if let Some(fps) = stats.fps() {
                ui.label(format!("FPS: {:.1}", fps));
            }
            if let Some(frame) = stats.last_frame() {
                ui.label(format!(
                    "Last frame: {} ms in {} slices",
                    frame.render_duration.as_millis(),
                    frame.slices
                ));
            }
        });

    changes
}
