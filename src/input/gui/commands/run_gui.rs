use std::error::Error;
use std::marker::PhantomData;

use tracing::error;
use winit::dpi::LogicalSize;
use winit::event::{Event, WindowEvent};
use winit::event_loop::EventLoop;
use winit::window::{Window, WindowBuilder};

use crate::controllers::interactive::InteractiveController;
use crate::core::data::canvas_size::CanvasSize;
use crate::input::gui::app::gui_app::GuiApp;
use crate::input::gui::app::ports::presenter::GuiPresenterPort;
use crate::input::gui::commands::ports::presenter_factory::GuiPresenterFactoryPort;
use crate::presenters::log::tracing_presenter::TracingPresenter;
use crate::presenters::stats::frame_stats::FrameStats;

pub struct RunGuiCommand<F, P>
where
    P: GuiPresenterPort,
    F: GuiPresenterFactoryPort<P>,
{
    presenter_factory: F,
    _phantom: PhantomData<fn() -> P>,
}

impl<F, P> RunGuiCommand<F, P>
where
    P: GuiPresenterPort,
    F: GuiPresenterFactoryPort<P>,
{
    pub fn new(presenter_factory: F) -> Self {
        Self {
            presenter_factory,
            _phantom: PhantomData,
        }
    }

    /// Opens the window and blocks until it is closed.
    pub fn execute(&self) -> Result<(), Box<dyn Error>> {
        let event_loop = EventLoop::new()?;

        // pixels borrows the window for the life of the surface
        let window: &'static Window = Box::leak(Box::new(
            WindowBuilder::new()
                .with_title("Mandelbrot Explorer")
                .with_inner_size(LogicalSize::new(800.0, 600.0))
                .with_min_inner_size(LogicalSize::new(200.0, 200.0))
                .build(&event_loop)?,
        ));

        let size = window.inner_size();
        let canvas = CanvasSize::new(size.width, size.height)?;
        let presenter = self.presenter_factory.build(window)?;
        let controller =
            InteractiveController::new(canvas, (FrameStats::new(), TracingPresenter::new()));
        let mut app = GuiApp::new(window, &event_loop, presenter, controller);

        event_loop.run(|event, elwt| match event {
            Event::WindowEvent {
                ref event,
                window_id,
            } if window_id == window.id() => {
                let egui_consumed = app.handle_window_event(window, event);

                match event {
                    WindowEvent::CloseRequested => elwt.exit(),
                    WindowEvent::RedrawRequested => {
                        if let Err(e) = app.frame(window) {
                            error!(error = %e, "render failed");
                            elwt.exit();
                        }
                    }
                    WindowEvent::Resized(size) => {
                        if let Err(e) = app.resize(size.width, size.height) {
                            error!(error = %e, "resize failed");
                            elwt.exit();
                        }
                    }
                    WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                        app.egui_ctx.set_pixels_per_point(*scale_factor as f32);
                        let size = window.inner_size();
                        if let Err(e) = app.resize(size.width, size.height) {
                            error!(error = %e, "resize failed");
                            elwt.exit();
                        }
                    }
                    other => app.handle_pointer(other, egui_consumed),
                }
            }
            Event::AboutToWait => {
                if app.wants_redraw() {
                    window.request_redraw();
                }
            }
            _ => {}
        })?;

        Ok(())
    }
}
