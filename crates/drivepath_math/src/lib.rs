//! 2D Mathematics Library
//!
//! This crate provides the small set of 2D types the Drive Path demo needs.
//!
//! ## Core Types
//!
//! - [`Vec2`] - 2D vector with x, y components
//! - [`Rect`] - Axis-aligned rectangle
//!
//! World space is y-down: positive y points toward the bottom of the screen,
//! so positive angles turn clockwise on screen.

mod vec2;
pub mod rect;

pub use vec2::Vec2;
pub use rect::Rect;

/// Wrap a (possibly out of range) index into `0..len`
///
/// `len` must be non-zero.
#[inline]
pub fn wrap_index(index: usize, len: usize) -> usize {
    debug_assert!(len > 0, "wrap_index called with empty length");
    index % len
}
