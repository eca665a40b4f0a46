use egui::Context as EguiContext;

use crate::core::data::pixel_buffer::PixelBuffer;

pub trait GuiPresenterPort {
    /// Shows `buffer` with the egui overlay drawn over it.
    fn render(
        &mut self,
        buffer: &PixelBuffer,
        egui_output: egui::FullOutput,
        egui_ctx: &EguiContext,
    ) -> Result<(), pixels::Error>;

    fn resize(&mut self, width: u32, height: u32) -> Result<(), pixels::TextureError>;
}
