//! GPU-compatible data types for the 2D pipelines
//!
//! These types are designed to match the shader layouts exactly.
//! All types derive Pod and Zeroable for safe GPU buffer operations.

use bytemuck::{Pod, Zeroable};

/// A colored vertex for lines and filled shapes (matches shape.wgsl)
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct ColorVertex {
    /// Position in world space
    pub position: [f32; 2],
    /// RGBA color
    pub color: [f32; 4],
}

impl ColorVertex {
    pub fn new(position: [f32; 2], color: [f32; 4]) -> Self {
        Self { position, color }
    }
}

/// A textured vertex for sprites (matches sprite.wgsl)
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct SpriteVertex {
    /// Position in world space
    pub position: [f32; 2],
    /// Texture coordinate, (0, 0) is the top-left texel
    pub uv: [f32; 2],
}

/// Camera uniforms shared by both pipelines
/// Layout: 64 bytes (must match CameraUniforms in the shaders)
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct CameraUniforms {
    /// Column-major view-projection matrix
    pub view_projection: [[f32; 4]; 4],
}

impl Default for CameraUniforms {
    fn default() -> Self {
        Self {
            view_projection: [
                [1.0, 0.0, 0.0, 0.0],
                [0.0, 1.0, 0.0, 0.0],
                [0.0, 0.0, 1.0, 0.0],
                [0.0, 0.0, 0.0, 1.0],
            ],
        }
    }
}

/// Vertices in one sprite quad (two triangles)
pub const SPRITE_VERTEX_COUNT: usize = 6;
