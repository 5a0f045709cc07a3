//! Rendering pipeline components
//!
//! This module contains the shape and sprite pipelines and the GPU buffers
//! they share.

pub mod buffers;
pub mod types;
pub mod shape_pipeline;
pub mod sprite_pipeline;

// Re-export types
pub use types::{CameraUniforms, ColorVertex, SpriteVertex, SPRITE_VERTEX_COUNT};

// Re-export pipelines
pub use buffers::{CameraBuffer, DynamicVertexBuffer};
pub use shape_pipeline::ShapePipeline;
pub use sprite_pipeline::SpritePipeline;
