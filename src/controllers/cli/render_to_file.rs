use std::path::Path;

use crate::controllers::interactive::{InteractiveController, RenderEventPort};
use crate::controllers::ports::file_presenter::FilePresenterPort;

/// Drives an interactive controller to a finished frame and hands the buffer to a file
/// presenter.
pub struct RenderToFileController<P: RenderEventPort, F: FilePresenterPort> {
    controller: InteractiveController<P>,
    file_presenter: F,
}

impl<P: RenderEventPort, F: FilePresenterPort> RenderToFileController<P, F> {
    pub fn new(controller: InteractiveController<P>, file_presenter: F) -> Self {
        Self {
            controller,
            file_presenter,
        }
    }

    /// Ticks until the scan is complete and returns how many ticks it took.
    pub fn generate(&mut self) -> u32 {
        let mut ticks = 0;

        while self.controller.redraw() {
            self.controller.tick();
            ticks += 1;
        }

        ticks
    }

    pub fn write(&self, filepath: impl AsRef<Path>) -> Result<(), F::Error> {
        self.file_presenter
            .present(self.controller.buffer(), filepath)
    }

    #[must_use]
    pub fn controller(&self) -> &InteractiveController<P> {
        &self.controller
    }
}
