use crate::graphics::{CpuRenderer, Renderer2d};
use crate::surface::SurfaceSize;

use pixels::Pixels;

/// Headful presenter built on `pixels`.
///
/// The pixel buffer stays at the fixed console raster size; `pixels` scales it onto the window
/// surface, so a resize only touches the surface.
pub struct PixelsRenderer2d {
    pixels: Pixels,
    buffer_size: SurfaceSize,
}

impl PixelsRenderer2d {
    pub fn new(mut pixels: Pixels, buffer_size: SurfaceSize) -> Result<Self, pixels::Error> {
        pixels.resize_buffer(buffer_size.width, buffer_size.height)?;
        Ok(Self {
            pixels,
            buffer_size,
        })
    }

    pub fn resize_surface(&mut self, size: SurfaceSize) -> Result<(), pixels::Error> {
        if size.is_empty() {
            return Ok(());
        }
        self.pixels.resize_surface(size.width, size.height)?;
        Ok(())
    }

    pub fn draw_frame<F, R>(&mut self, f: F) -> R
    where
        F: FnOnce(&mut dyn Renderer2d) -> R,
    {
        let mut cpu = CpuRenderer::new(self.pixels.frame_mut(), self.buffer_size);
        cpu.begin_frame(self.buffer_size);
        f(&mut cpu)
    }

    pub fn present(&mut self) -> Result<(), pixels::Error> {
        self.pixels.render()
    }
}
