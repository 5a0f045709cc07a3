//! Textured sprite geometry
//!
//! A sprite is a `size`-sized rectangle of texels placed in the world by a
//! [`Transform2D`]. The origin is the local point that sits on the
//! transform's position; for the car it is the texture center so the car
//! turns in place.

use drivepath_math::{Rect, Vec2};

use crate::transform::Transform2D;

/// A textured rectangle in world space
#[derive(Debug, Clone, PartialEq)]
pub struct Sprite2D {
    /// Placement in the world
    pub transform: Transform2D,
    /// Texture size in texels
    size: Vec2,
    /// Local origin in texels, measured from the top-left corner
    origin: Vec2,
}

impl Sprite2D {
    /// Create a sprite for a texture of the given size, origin at its center
    pub fn new(texture_size: Vec2) -> Self {
        Self {
            transform: Transform2D::identity(),
            size: texture_size,
            origin: texture_size * 0.5,
        }
    }

    /// Set a uniform scale
    pub fn with_scale(mut self, scale: f32) -> Self {
        self.transform.scale = Vec2::splat(scale);
        self
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        self.size
    }

    #[inline]
    pub fn origin(&self) -> Vec2 {
        self.origin
    }

    #[inline]
    pub fn position(&self) -> Vec2 {
        self.transform.position
    }

    /// Move and turn the sprite
    pub fn place(&mut self, position: Vec2, rotation: f32) {
        self.transform.position = position;
        self.transform.rotation = rotation;
    }

    /// Corners relative to the origin, before the transform
    ///
    /// Order: top-left, top-right, bottom-right, bottom-left.
    pub fn local_corners(&self) -> [Vec2; 4] {
        let o = self.origin;
        [
            Vec2::new(0.0, 0.0) - o,
            Vec2::new(self.size.x, 0.0) - o,
            Vec2::new(self.size.x, self.size.y) - o,
            Vec2::new(0.0, self.size.y) - o,
        ]
    }

    /// Corners in world space, same order as [`Sprite2D::local_corners`]
    pub fn world_corners(&self) -> [Vec2; 4] {
        self.local_corners().map(|c| self.transform.transform_point(c))
    }

    /// Axis-aligned bounding rectangle of the transformed sprite
    pub fn global_bounds(&self) -> Rect {
        Rect::bounding(self.world_corners()).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    const EPSILON: f32 = 1e-3;

    #[test]
    fn test_origin_defaults_to_center() {
        let sprite = Sprite2D::new(Vec2::new(200.0, 100.0));
        assert_eq!(sprite.origin(), Vec2::new(100.0, 50.0));
        assert_eq!(sprite.local_corners()[0], Vec2::new(-100.0, -50.0));
        assert_eq!(sprite.local_corners()[2], Vec2::new(100.0, 50.0));
    }

    #[test]
    fn test_bounds_scaled_and_centered() {
        let mut sprite = Sprite2D::new(Vec2::new(200.0, 100.0)).with_scale(0.2);
        sprite.place(Vec2::new(50.0, -20.0), 0.0);

        let bounds = sprite.global_bounds();
        assert!((bounds.width() - 40.0).abs() < EPSILON);
        assert!((bounds.height() - 20.0).abs() < EPSILON);
        assert!((bounds.center() - Vec2::new(50.0, -20.0)).length() < EPSILON);
    }

    #[test]
    fn test_bounds_follow_rotation() {
        let mut sprite = Sprite2D::new(Vec2::new(200.0, 100.0)).with_scale(0.2);
        sprite.place(Vec2::ZERO, FRAC_PI_2);

        let bounds = sprite.global_bounds();
        assert!((bounds.width() - 20.0).abs() < EPSILON);
        assert!((bounds.height() - 40.0).abs() < EPSILON);
    }

    #[test]
    fn test_bounds_grow_at_diagonal() {
        let mut sprite = Sprite2D::new(Vec2::new(100.0, 100.0));
        sprite.place(Vec2::ZERO, std::f32::consts::FRAC_PI_4);

        let expected = 100.0 * std::f32::consts::SQRT_2;
        let bounds = sprite.global_bounds();
        assert!((bounds.width() - expected).abs() < EPSILON);
        assert!((bounds.height() - expected).abs() < EPSILON);
    }
}
