//! Core types for the Drive Path demo
//!
//! This crate holds everything that does not touch the window or the GPU:
//!
//! - [`Path`] - Closed polyline of waypoints
//! - [`Mover`] - Position, target index and facing of the car on a path
//! - [`Transform2D`] - Position, rotation, and scale in 2D space
//! - [`Sprite2D`] - Textured rectangle with an origin and a transform
//! - [`TextureData`] - Decoded RGBA8 image loaded from disk
//! - [`AssetError`] / [`PathError`] - Error types for the above

mod asset_error;
mod mover;
mod path;
mod sprite;
mod texture;
mod transform;

pub use asset_error::AssetError;
pub use mover::{Mover, MoveOutcome, DEFAULT_SNAP_THRESHOLD};
pub use path::{Path, PathError, DEMO_PATH};
pub use sprite::Sprite2D;
pub use texture::TextureData;
pub use transform::Transform2D;

// Re-export commonly used types from drivepath_math for convenience
pub use drivepath_math::{Rect, Vec2};
