//! 2D Transform (position, rotation, scale)
//!
//! A Transform2D represents the position, rotation, and scale of something
//! drawn in 2D world space.

use drivepath_math::Vec2;

/// A 2D transform with position, rotation (radians) and per-axis scale
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform2D {
    /// Position in world space
    pub position: Vec2,
    /// Rotation in radians, clockwise on screen (y-down world)
    pub rotation: f32,
    /// Scale factor per axis
    pub scale: Vec2,
}

impl Default for Transform2D {
    fn default() -> Self {
        Self::identity()
    }
}

impl Transform2D {
    /// Create an identity transform
    pub fn identity() -> Self {
        Self {
            position: Vec2::ZERO,
            rotation: 0.0,
            scale: Vec2::ONE,
        }
    }

    /// Transform a point from local space to world space
    ///
    /// Applies scale, then rotation, then translation.
    pub fn transform_point(&self, p: Vec2) -> Vec2 {
        p.component_mul(self.scale).rotated(self.rotation) + self.position
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    const EPSILON: f32 = 1e-5;

    fn approx_eq(a: Vec2, b: Vec2) -> bool {
        (a - b).length() < EPSILON
    }

    #[test]
    fn test_identity() {
        let t = Transform2D::identity();
        let p = Vec2::new(1.0, 2.0);
        assert_eq!(t.transform_point(p), p);
        assert_eq!(Transform2D::default(), t);
    }

    #[test]
    fn test_translation_only() {
        let t = Transform2D {
            position: Vec2::new(10.0, -5.0),
            ..Transform2D::identity()
        };
        assert_eq!(t.transform_point(Vec2::new(1.0, 1.0)), Vec2::new(11.0, -4.0));
    }

    #[test]
    fn test_scale_rotate_translate_order() {
        let t = Transform2D {
            position: Vec2::new(100.0, 0.0),
            rotation: FRAC_PI_2,
            scale: Vec2::new(2.0, 3.0),
        };
        // (1, 0) -> scale (2, 0) -> rotate (0, 2) -> translate (100, 2)
        assert!(approx_eq(t.transform_point(Vec2::X), Vec2::new(100.0, 2.0)));
    }
}
