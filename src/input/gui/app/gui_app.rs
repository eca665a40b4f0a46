use std::time::Instant;

use egui::Context;
use egui_winit::State as EguiWinitState;
use winit::event::{ElementState, MouseButton, WindowEvent};
use winit::event_loop::EventLoop;
use winit::window::Window;

use crate::controllers::interactive::InteractiveController;
use crate::core::data::canvas_size::CanvasSize;
use crate::input::gui::app::ports::presenter::GuiPresenterPort;
use crate::input::gui::panel::{apply_panel_change, show_panel};
use crate::input::gui::pointer::{PointerTracker, wheel_delta_pixels};
use crate::presenters::log::tracing_presenter::TracingPresenter;
use crate::presenters::stats::frame_stats::FrameStats;

/// Render events feed the panel statistics and the log.
pub type GuiPorts = (FrameStats, TracingPresenter);

pub struct GuiApp<T: GuiPresenterPort> {
    presenter: T,
    controller: InteractiveController<GuiPorts>,
    pointer: PointerTracker,
    last_frame_at: Option<Instant>,
    repaint_pending: bool,
    pub egui_ctx: Context,
    pub egui_state: EguiWinitState,
}

impl<T: GuiPresenterPort> GuiApp<T> {
    pub fn new(
        window: &'static Window,
        event_loop: &EventLoop<()>,
        presenter: T,
        controller: InteractiveController<GuiPorts>,
    ) -> Self {
        let egui_ctx = Context::default();
        let egui_state = EguiWinitState::new(
            egui_ctx.clone(),
            egui_ctx.viewport_id(),
            event_loop,
            Some(window.scale_factor() as f32),
            None,
        );

        Self {
            presenter,
            controller,
            pointer: PointerTracker::default(),
            last_frame_at: None,
            repaint_pending: true,
            egui_ctx,
            egui_state,
        }
    }

    /// True while a scan is unfinished or egui asked for another frame.
    pub fn wants_redraw(&self) -> bool {
        self.repaint_pending || self.controller.redraw()
    }

    /// Forwards `event` to egui and returns whether egui consumed it.
    pub fn handle_window_event(&mut self, window: &Window, event: &WindowEvent) -> bool {
        let response = self.egui_state.on_window_event(window, event);
        self.repaint_pending |= response.repaint;
        response.consumed
    }

    /// Pointer navigation on the canvas. Presses and wheel steps egui consumed are ignored.
    pub fn handle_pointer(&mut self, event: &WindowEvent, consumed: bool) {
        match event {
            WindowEvent::CursorMoved { position, .. } => {
                if let Some((dx, dy)) = self.pointer.moved(position.x, position.y) {
                    self.controller.pan_by_drag(dx, dy);
                }
            }
            WindowEvent::MouseInput {
                state,
                button: MouseButton::Left,
                ..
            } => match state {
                ElementState::Pressed if !consumed => self.pointer.press(),
                ElementState::Released => self.pointer.release(),
                ElementState::Pressed => {}
            },
            WindowEvent::MouseWheel { delta, .. } if !consumed => {
                let wheel_delta = wheel_delta_pixels(delta);

                if let Some((x, y)) = self.pointer.position() {
                    self.controller.zoom_at(x, y, wheel_delta);
                }
            }
            WindowEvent::CursorLeft { .. } => {
                self.pointer.left();
                self.controller.set_pan_allowed(false);
            }
            WindowEvent::CursorEntered { .. } => self.controller.set_pan_allowed(true),
            _ => {}
        }
    }

    /// Zero-area sizes (a minimised window) are ignored.
    pub fn resize(&mut self, width: u32, height: u32) -> Result<(), pixels::TextureError> {
        let Ok(canvas) = CanvasSize::new(width, height) else {
            return Ok(());
        };

        self.presenter.resize(width, height)?;
        self.controller.resize(canvas);
        Ok(())
    }

    /// Runs one scheduler slice, the control panel, and presents the result.
    pub fn frame(&mut self, window: &Window) -> Result<(), pixels::Error> {
        let now = Instant::now();
        if let Some(previous) = self.last_frame_at.replace(now) {
            self.controller
                .presenter_port()
                .0
                .record_host_frame(now - previous);
        }

        self.controller.tick();

        let view = *self.controller.view();
        let scan_state = self.controller.scan_state();
        let stats = &self.controller.presenter_port().0;
        let raw_input = self.egui_state.take_egui_input(window);
        let mut changes = Vec::new();

        let egui_output = self.egui_ctx.run(raw_input, |ctx| {
            changes = show_panel(ctx, &view, scan_state, stats);
        });

        for change in changes {
            apply_panel_change(&mut self.controller, change);
        }

        self.repaint_pending = egui_output
            .viewport_output
            .values()
            .any(|v| v.repaint_delay.is_zero());
        self.egui_state
            .handle_platform_output(window, egui_output.platform_output.clone());

        self.presenter
            .render(self.controller.buffer(), egui_output, &self.egui_ctx)
    }
}
