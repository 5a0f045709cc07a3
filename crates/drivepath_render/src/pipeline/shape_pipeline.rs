//! Pipeline for colored lines and filled shapes
//!
//! One shader, two wgpu pipelines: a `LineList` pipeline for the path and a
//! `TriangleList` pipeline for waypoint markers and the sprite outline.
//! Both read the camera uniform at group 0.

use super::buffers::{CameraBuffer, DynamicVertexBuffer};
use super::types::ColorVertex;
use crate::draw_list::DrawList;

/// Colored geometry renderer
pub struct ShapePipeline {
    line_pipeline: wgpu::RenderPipeline,
    triangle_pipeline: wgpu::RenderPipeline,
    line_vertices: DynamicVertexBuffer,
    triangle_vertices: DynamicVertexBuffer,
}

impl ShapePipeline {
    /// Create the line and triangle pipelines
    pub fn new(
        device: &wgpu::Device,
        surface_format: wgpu::TextureFormat,
        camera: &CameraBuffer,
    ) -> Self {
        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Shape Pipeline Layout"),
            bind_group_layouts: &[camera.layout()],
            push_constant_ranges: &[],
        });

        let shader_source = include_str!("../shaders/shape.wgsl");
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Shape Shader"),
            source: wgpu::ShaderSource::Wgsl(shader_source.into()),
        });

        let line_pipeline = Self::create_pipeline(
            device,
            &pipeline_layout,
            &shader,
            surface_format,
            wgpu::PrimitiveTopology::LineList,
            "Line Pipeline",
        );
        let triangle_pipeline = Self::create_pipeline(
            device,
            &pipeline_layout,
            &shader,
            surface_format,
            wgpu::PrimitiveTopology::TriangleList,
            "Triangle Pipeline",
        );

        Self {
            line_pipeline,
            triangle_pipeline,
            line_vertices: DynamicVertexBuffer::new(device, "Line Vertex Buffer"),
            triangle_vertices: DynamicVertexBuffer::new(device, "Triangle Vertex Buffer"),
        }
    }

    fn create_pipeline(
        device: &wgpu::Device,
        layout: &wgpu::PipelineLayout,
        shader: &wgpu::ShaderModule,
        surface_format: wgpu::TextureFormat,
        topology: wgpu::PrimitiveTopology,
        label: &str,
    ) -> wgpu::RenderPipeline {
        device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some(label),
            layout: Some(layout),
            vertex: wgpu::VertexState {
                module: shader,
                entry_point: Some("vs_main"),
                buffers: &[Self::vertex_buffer_layout()],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format: surface_format,
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                // The y flip in the camera reverses winding; draw both faces
                cull_mode: None,
                unclipped_depth: false,
                polygon_mode: wgpu::PolygonMode::Fill,
                conservative: false,
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState {
                count: 1,
                mask: !0,
                alpha_to_coverage_enabled: false,
            },
            multiview: None,
            cache: None,
        })
    }

    /// Get the vertex buffer layout for ColorVertex
    fn vertex_buffer_layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<ColorVertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                // position: vec2<f32>
                wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x2,
                    offset: 0,
                    shader_location: 0,
                },
                // color: vec4<f32>
                wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x4,
                    offset: 8,
                    shader_location: 1,
                },
            ],
        }
    }

    /// Upload this frame's lines and triangles
    pub fn upload(&mut self, device: &wgpu::Device, queue: &wgpu::Queue, draw_list: &DrawList) {
        self.line_vertices.write(device, queue, draw_list.line_vertices());
        self.triangle_vertices.write(device, queue, draw_list.triangle_vertices());
    }

    /// Draw the uploaded lines
    pub fn draw_lines(&self, render_pass: &mut wgpu::RenderPass<'_>, camera: &CameraBuffer) {
        Self::draw(render_pass, &self.line_pipeline, &self.line_vertices, camera);
    }

    /// Draw the uploaded triangles
    pub fn draw_triangles(&self, render_pass: &mut wgpu::RenderPass<'_>, camera: &CameraBuffer) {
        Self::draw(render_pass, &self.triangle_pipeline, &self.triangle_vertices, camera);
    }

    fn draw(
        render_pass: &mut wgpu::RenderPass<'_>,
        pipeline: &wgpu::RenderPipeline,
        vertices: &DynamicVertexBuffer,
        camera: &CameraBuffer,
    ) {
        let count = vertices.vertex_count();
        if count == 0 {
            return;
        }
        render_pass.set_pipeline(pipeline);
        render_pass.set_bind_group(0, camera.bind_group(), &[]);
        render_pass.set_vertex_buffer(0, vertices.buffer().slice(..));
        render_pass.draw(0..count, 0..1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_buffer_layout_stride() {
        let layout = ShapePipeline::vertex_buffer_layout();
        assert_eq!(layout.array_stride, std::mem::size_of::<ColorVertex>() as u64);
    }

    #[test]
    fn test_color_attribute_follows_position() {
        let layout = ShapePipeline::vertex_buffer_layout();
        assert_eq!(layout.attributes[1].offset, std::mem::size_of::<[f32; 2]>() as u64);
    }
}
