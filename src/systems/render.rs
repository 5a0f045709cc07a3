//! GPU rendering system
//!
//! Manages GPU rendering including:
//! - Render context and surface
//! - Shape and sprite pipelines
//! - Frame rendering

use std::sync::Arc;
use winit::window::Window;
use drivepath_core::TextureData;
use drivepath_render::{
    build_scene,
    context::{ContextError, RenderContext},
    pipeline::{CameraBuffer, CameraUniforms, ShapePipeline, SpritePipeline},
    sprite_vertices,
    texture::GpuTexture,
    Camera2D, Color, DrawList, Path, SceneStyle, Sprite2D,
};
use crate::config::RenderingConfig;

/// Render error types
#[derive(Debug)]
pub enum RenderError {
    /// Surface was lost or outdated (window resized, minimized, etc.)
    SurfaceLost,
    /// GPU out of memory
    OutOfMemory,
    /// Other surface error
    Other(String),
}

impl std::fmt::Display for RenderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RenderError::SurfaceLost => write!(f, "Surface lost"),
            RenderError::OutOfMemory => write!(f, "Out of memory"),
            RenderError::Other(msg) => write!(f, "Render error: {}", msg),
        }
    }
}

impl std::error::Error for RenderError {}

impl From<wgpu::SurfaceError> for RenderError {
    fn from(e: wgpu::SurfaceError) -> Self {
        match e {
            wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated => RenderError::SurfaceLost,
            wgpu::SurfaceError::OutOfMemory => RenderError::OutOfMemory,
            other => RenderError::Other(format!("{:?}", other)),
        }
    }
}

/// Manages GPU rendering
pub struct RenderSystem {
    context: RenderContext,
    camera_buffer: CameraBuffer,
    shape_pipeline: ShapePipeline,
    sprite_pipeline: SpritePipeline,
    /// Kept alive for the sprite bind group
    _sprite_texture: GpuTexture,
    draw_list: DrawList,
    style: SceneStyle,
    background: Color,
}

impl RenderSystem {
    /// Create the GPU context and pipelines, and upload the sprite texture
    pub fn new(
        window: Arc<Window>,
        texture: &TextureData,
        render_config: &RenderingConfig,
        vsync: bool,
    ) -> Result<Self, ContextError> {
        let context = pollster::block_on(RenderContext::with_vsync(window, vsync))?;

        let camera_buffer = CameraBuffer::new(&context.device);
        let shape_pipeline =
            ShapePipeline::new(&context.device, context.config.format, &camera_buffer);
        let mut sprite_pipeline =
            SpritePipeline::new(&context.device, context.config.format, &camera_buffer);

        let sprite_texture =
            GpuTexture::from_data(&context.device, &context.queue, texture, "Sprite Texture");
        sprite_pipeline.set_texture(&context.device, &sprite_texture);

        log::info!(
            "Uploaded {}x{} sprite texture",
            texture.width(),
            texture.height()
        );

        Ok(Self {
            context,
            camera_buffer,
            shape_pipeline,
            sprite_pipeline,
            _sprite_texture: sprite_texture,
            draw_list: DrawList::new(),
            style: render_config.scene_style(),
            background: Color::from(render_config.background_color),
        })
    }

    /// Handle window resize
    pub fn resize(&mut self, width: u32, height: u32) {
        self.context
            .resize(winit::dpi::PhysicalSize::new(width, height));
    }

    /// Reconfigure the surface at its current size (after it was lost)
    pub fn reconfigure(&mut self) {
        let size = self.context.size;
        self.context.resize(size);
    }

    /// Render a single frame
    ///
    /// Draw order: path lines, sprite, then the sprite outline and the
    /// waypoint markers on top.
    pub fn render_frame(
        &mut self,
        camera: &Camera2D,
        path: &Path,
        sprite: &Sprite2D,
    ) -> Result<(), RenderError> {
        self.camera_buffer.update(
            &self.context.queue,
            &CameraUniforms {
                view_projection: camera.view_projection(),
            },
        );

        build_scene(&mut self.draw_list, path, sprite, &self.style);
        self.shape_pipeline
            .upload(&self.context.device, &self.context.queue, &self.draw_list);
        self.sprite_pipeline
            .update_quad(&self.context.queue, &sprite_vertices(sprite));

        // Get surface texture
        let output = self.context.surface.get_current_texture()?;

        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .context
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Render Encoder"),
            });

        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Scene Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.background.to_wgpu()),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            self.shape_pipeline
                .draw_lines(&mut render_pass, &self.camera_buffer);
            self.sprite_pipeline
                .draw(&mut render_pass, &self.camera_buffer);
            self.shape_pipeline
                .draw_triangles(&mut render_pass, &self.camera_buffer);
        }

        // Submit
        self.context.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_error_display() {
        assert_eq!(format!("{}", RenderError::SurfaceLost), "Surface lost");
        assert_eq!(format!("{}", RenderError::OutOfMemory), "Out of memory");
        assert_eq!(
            format!("{}", RenderError::Other("test".to_string())),
            "Render error: test"
        );
    }

    #[test]
    fn test_surface_error_mapping() {
        assert!(matches!(
            RenderError::from(wgpu::SurfaceError::Lost),
            RenderError::SurfaceLost
        ));
        assert!(matches!(
            RenderError::from(wgpu::SurfaceError::Outdated),
            RenderError::SurfaceLost
        ));
        assert!(matches!(
            RenderError::from(wgpu::SurfaceError::OutOfMemory),
            RenderError::OutOfMemory
        ));
        assert!(matches!(
            RenderError::from(wgpu::SurfaceError::Timeout),
            RenderError::Other(_)
        ));
    }
}
