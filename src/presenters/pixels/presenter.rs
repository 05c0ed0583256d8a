use egui::Context as EguiContext;
use egui_wgpu::Renderer as EguiRenderer;
use log::{debug, error};
use pixels::Pixels;
use pixels::SurfaceTexture;
use pixels::wgpu;
use winit::window::Window;

use crate::controllers::explorer::data::frame_data::FrameData;
use crate::controllers::explorer::errors::render_unavailable::RenderUnavailable;
use crate::controllers::explorer::ports::frame_presenter::FramePresenterPort;
use crate::core::data::raster_size::RasterSize;
use crate::input::gui::app::ports::presenter::GuiPresenterPort;
use crate::input::gui::app::state::OverlayState;

/// Shows frames through a pixels framebuffer sized to the raster, scaled to
/// the window surface, with egui drawn on top.
pub struct PixelsPresenter {
    pixels: Pixels<'static>,
    egui_renderer: EguiRenderer,
    raster: RasterSize,
    surface_width: u32,
    surface_height: u32,
    overlay: OverlayState,
}

impl PixelsPresenter {
    pub fn new(window: &'static Window, raster: RasterSize) -> Result<Self, pixels::Error> {
        let size = window.inner_size();
        let surface_texture = SurfaceTexture::new(size.width, size.height, window);

        let pixels = Pixels::new(raster.width(), raster.height(), surface_texture)?;

        let egui_renderer = EguiRenderer::new(
            pixels.device(),
            pixels.render_texture_format(),
            None, // depth format
            1,    // msaa samples
        );

        Ok(Self {
            pixels,
            egui_renderer,
            raster,
            surface_width: size.width,
            surface_height: size.height,
            overlay: OverlayState::default(),
        })
    }
}

impl FramePresenterPort for PixelsPresenter {
    fn present(&mut self, frame: FrameData) -> Result<(), RenderUnavailable> {
        if frame.colour_buffer.raster() != self.raster {
            return Err(RenderUnavailable::new(format!(
                "frame is {}x{} but the framebuffer is {}x{}",
                frame.colour_buffer.raster().width(),
                frame.colour_buffer.raster().height(),
                self.raster.width(),
                self.raster.height()
            )));
        }

        let src = frame.colour_buffer.buffer();
        let dest = self.pixels.frame_mut();

        if dest.len() != src.len() {
            return Err(RenderUnavailable::new(format!(
                "framebuffer holds {} bytes, frame has {}",
                dest.len(),
                src.len()
            )));
        }

        dest.copy_from_slice(src);
        self.overlay.record(&frame);
        debug!("Copied frame {} into framebuffer", frame.generation);

        Ok(())
    }
}

impl GuiPresenterPort for PixelsPresenter {
    fn render(
        &mut self,
        egui_output: egui::FullOutput,
        egui_ctx: &EguiContext,
    ) -> Result<(), pixels::Error> {
        if self.surface_width == 0 || self.surface_height == 0 {
            return Ok(());
        }

        self.pixels.render_with(|encoder, render_target, context| {
            // Scale the framebuffer onto the surface first
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

    fn resize_surface(&mut self, width: u32, height: u32) {
        self.surface_width = width;
        self.surface_height = height;

        if width == 0 || height == 0 {
            return;
        }

        if let Err(err) = self.pixels.resize_surface(width, height) {
            error!("Failed to resize surface to {}x{}: {}", width, height, err);
        }
    }

    fn overlay(&self) -> &OverlayState {
        &self.overlay
    }
}
