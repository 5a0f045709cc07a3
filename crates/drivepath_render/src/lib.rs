//! 2D Rendering Library
//!
//! This crate provides the wgpu-based renderer for the Drive Path demo.
//!
//! ## Key Components
//!
//! - [`context::RenderContext`] - WGPU device, queue, and surface management
//! - [`camera2d::Camera2D`] - 2D view with a center and a size
//! - [`draw_list::DrawList`] - CPU-side colored lines and triangles for one frame
//! - [`scene::build_scene`] - Path, waypoint and outline geometry for a frame
//! - [`pipeline::ShapePipeline`] - Colored line and triangle rendering
//! - [`pipeline::SpritePipeline`] - Textured quad rendering
//! - [`texture::GpuTexture`] - Texture, view and sampler on the GPU

pub mod context;
pub mod camera2d;
pub mod color;
pub mod draw_list;
pub mod pipeline;
pub mod scene;
pub mod texture;

// Re-export core types for convenience
pub use drivepath_core::{Path, Sprite2D, TextureData, Transform2D};
pub use drivepath_core::{Rect, Vec2};

pub use camera2d::Camera2D;
pub use color::Color;
pub use draw_list::{sprite_vertices, DrawList};
pub use scene::{build_scene, SceneStyle};
