//! 2D Camera (view rectangle)
//!
//! The camera is the rectangle of world space shown in the window: a center
//! and a size in world units. World space is y-down, so the top edge of the
//! window is at `center.y - size.y / 2`.

use drivepath_math::Vec2;

/// 2D view onto the world
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera2D {
    /// World position shown at the middle of the window
    pub center: Vec2,
    /// World units visible horizontally and vertically
    pub size: Vec2,
}

impl Default for Camera2D {
    fn default() -> Self {
        Self::new(Vec2::ZERO, Vec2::new(1080.0, 728.0))
    }
}

impl Camera2D {
    /// Create a camera from a center and a size
    pub fn new(center: Vec2, size: Vec2) -> Self {
        Self { center, size }
    }

    /// Move the camera so `center` is in the middle of the window
    pub fn set_center(&mut self, center: Vec2) {
        self.center = center;
    }

    /// Match a new window size (one world unit per pixel)
    ///
    /// Zero sizes are ignored so a minimized window keeps a valid projection.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        self.size = Vec2::new(width as f32, height as f32);
    }

    /// Column-major orthographic view-projection matrix
    ///
    /// Maps the visible rectangle to clip space, flipping y so the top of the
    /// rectangle is at the top of the window.
    pub fn view_projection(&self) -> [[f32; 4]; 4] {
        let sx = 2.0 / self.size.x;
        let sy = -2.0 / self.size.y;
        [
            [sx, 0.0, 0.0, 0.0],
            [0.0, sy, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [-self.center.x * sx, -self.center.y * sy, 0.0, 1.0],
        ]
    }
}
