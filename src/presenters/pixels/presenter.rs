use crate::adapters::pixel_format::copy_argb_to_rgba;
use crate::controllers::interactive::ports::presenter::FramePresenterPort;
use crate::core::data::frame_buffer::FrameBuffer;
use crate::core::data::surface::PixelDims;
use crate::core::flight::status::FlightStatus;
use egui::Context as EguiContext;
use egui_wgpu::Renderer as EguiRenderer;
use pixels::Pixels;
use pixels::SurfaceTexture;
use pixels::wgpu;
use tracing::warn;
use winit::window::Window;

/// Blits explorer frames into a `pixels` surface and draws egui on top.
///
/// The pixel buffer tracks the frame size; `pixels` scales it to the window.
pub struct PixelsPresenter {
    pixels: Pixels<'static>,
    egui_renderer: EguiRenderer,
    surface_width: u32,
    surface_height: u32,
    buffer_dims: PixelDims,
}

impl PixelsPresenter {
    pub fn new(window: &'static Window, buffer_dims: PixelDims) -> Result<Self, pixels::Error> {
        let size = window.inner_size();
        let surface_texture = SurfaceTexture::new(size.width, size.height, window);
        let pixels = Pixels::new(buffer_dims.width, buffer_dims.height, surface_texture)?;

        let egui_renderer = EguiRenderer::new(
            pixels.device(),
            pixels.render_texture_format(),
            None, // depth format
            1,    // msaa samples
        );

        Ok(Self {
            pixels,
            egui_renderer,
            surface_width: size.width,
            surface_height: size.height,
            buffer_dims,
        })
    }

    pub fn resize_surface(&mut self, width: u32, height: u32) -> Result<(), pixels::TextureError> {
        if width == 0 || height == 0 {
            return Ok(());
        }

        self.pixels.resize_surface(width, height)?;
        self.surface_width = width;
        self.surface_height = height;

        Ok(())
    }

    /// Maps a window position to a fraction of the frame, `None` outside it.
    #[must_use]
    pub fn frame_fraction(&self, x: f64, y: f64) -> Option<(f64, f64)> {
        let (px, py) = self
            .pixels
            .window_pos_to_pixel((x as f32, y as f32))
            .ok()?;

        Some((
            px as f64 / f64::from(self.buffer_dims.width),
            py as f64 / f64::from(self.buffer_dims.height),
        ))
    }

    pub fn render(
        &mut self,
        egui_output: egui::FullOutput,
        egui_ctx: &EguiContext,
    ) -> Result<(), pixels::Error> {
        if self.surface_width == 0 || self.surface_height == 0 {
            return Ok(());
        }

        self.pixels.render_with(|encoder, render_target, context| {
            context.scaling_renderer.render(encoder, render_target);

            let clipped_primitives =
                egui_ctx.tessellate(egui_output.shapes, egui_ctx.pixels_per_point());

            let screen_descriptor = egui_wgpu::ScreenDescriptor {
                size_in_pixels: [self.surface_width, self.surface_height],
                pixels_per_point: egui_ctx.pixels_per_point(),
            };

            let textures_delta = egui_output.textures_delta;

            for (id, delta) in &textures_delta.set {
                self.egui_renderer
                    .update_texture(&context.device, &context.queue, *id, delta);
            }

            self.egui_renderer.update_buffers(
                &context.device,
                &context.queue,
                encoder,
                &clipped_primitives,
                &screen_descriptor,
            );

            {
                let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                    label: Some("egui"),
                    color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                        view: render_target,
                        resolve_target: None,
                        ops: wgpu::Operations {
                            load: wgpu::LoadOp::Load, // keep the fractal underneath
                            store: wgpu::StoreOp::Store,
                        },
                    })],
                    depth_stencil_attachment: None,
                    ..Default::default()
                });

                self.egui_renderer.render(
                    &mut render_pass,
                    &clipped_primitives,
                    &screen_descriptor,
                );
            }

            for id in &textures_delta.free {
                self.egui_renderer.free_texture(id);
            }

            Ok(())
        })
    }
}

impl FramePresenterPort for PixelsPresenter {
    fn present(&mut self, frame: &FrameBuffer, _status: &FlightStatus) {
        let dims = frame.dims();

        if dims != self.buffer_dims {
            if let Err(err) = self.pixels.resize_buffer(dims.width, dims.height) {
                warn!(error = %err, width = dims.width, height = dims.height, "buffer resize failed");
                return;
            }
            self.buffer_dims = dims;
        }

        copy_argb_to_rgba(frame.pixels(), self.pixels.frame_mut());
    }
}
