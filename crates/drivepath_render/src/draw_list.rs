//! CPU-side geometry for one frame
//!
//! A [`DrawList`] collects colored vertices in two lists: line segments
//! (drawn with a `LineList` pipeline) and filled triangles (drawn with a
//! `TriangleList` pipeline). Shapes are tessellated here so the GPU side
//! stays a plain vertex upload.

use std::f32::consts::TAU;

use drivepath_core::Sprite2D;
use drivepath_math::{Rect, Vec2};

use crate::color::Color;
use crate::pipeline::{ColorVertex, SpriteVertex, SPRITE_VERTEX_COUNT};

/// Lines and triangles to draw this frame
#[derive(Debug, Default, Clone)]
pub struct DrawList {
    lines: Vec<ColorVertex>,
    triangles: Vec<ColorVertex>,
}

impl DrawList {
    /// Create an empty draw list
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a one-pixel line from `a` to `b`
    pub fn line(&mut self, a: Vec2, b: Vec2, color: Color) {
        let color = color.to_array();
        self.lines.push(ColorVertex::new(a.to_array(), color));
        self.lines.push(ColorVertex::new(b.to_array(), color));
    }

    /// Add lines through `points`, joining the last point back to the first
    pub fn closed_polyline(&mut self, points: &[Vec2], color: Color) {
        for (i, a) in points.iter().enumerate() {
            let b = points[(i + 1) % points.len()];
            self.line(*a, b, color);
        }
    }

    /// Add a filled triangle
    pub fn triangle(&mut self, a: Vec2, b: Vec2, c: Vec2, color: Color) {
        let color = color.to_array();
        self.triangles.push(ColorVertex::new(a.to_array(), color));
        self.triangles.push(ColorVertex::new(b.to_array(), color));
        self.triangles.push(ColorVertex::new(c.to_array(), color));
    }

    /// Add a filled axis-aligned rectangle (two triangles)
    pub fn filled_rect(&mut self, rect: Rect, color: Color) {
        let tl = rect.min;
        let tr = Vec2::new(rect.max.x, rect.min.y);
        let br = rect.max;
        let bl = Vec2::new(rect.min.x, rect.max.y);
        self.triangle(tl, tr, br, color);
        self.triangle(tl, br, bl, color);
    }

    /// Add a filled circle approximated by `segments` triangles
    pub fn filled_circle(&mut self, center: Vec2, radius: f32, segments: u32, color: Color) {
        let segments = segments.max(3);
        let step = TAU / segments as f32;
        for i in 0..segments {
            let a = center + Vec2::from_angle(step * i as f32) * radius;
            let b = center + Vec2::from_angle(step * (i + 1) as f32) * radius;
            self.triangle(center, a, b, color);
        }
    }

    /// Add the border of `rect`, `thickness` units wide
    ///
    /// A positive thickness grows outward from the rectangle, a negative one
    /// inward. The inside is left empty.
    pub fn rect_outline(&mut self, rect: Rect, thickness: f32, color: Color) {
        let (outer, inner) = if thickness >= 0.0 {
            (rect.expanded(thickness), rect)
        } else {
            (rect, rect.expanded(thickness))
        };

        // top and bottom bands span the full outer width
        self.filled_rect(
            Rect::from_corners(outer.min, Vec2::new(outer.max.x, inner.min.y)),
            color,
        );
        self.filled_rect(
            Rect::from_corners(Vec2::new(outer.min.x, inner.max.y), outer.max),
            color,
        );
        // left and right bands fill the gap between them
        self.filled_rect(
            Rect::from_corners(Vec2::new(outer.min.x, inner.min.y), Vec2::new(inner.min.x, inner.max.y)),
            color,
        );
        self.filled_rect(
            Rect::from_corners(Vec2::new(inner.max.x, inner.min.y), Vec2::new(outer.max.x, inner.max.y)),
            color,
        );
    }

    /// Remove all geometry, keeping the allocations
    pub fn clear(&mut self) {
        self.lines.clear();
        self.triangles.clear();
    }

    #[inline]
    pub fn line_vertices(&self) -> &[ColorVertex] {
        &self.lines
    }

    #[inline]
    pub fn triangle_vertices(&self) -> &[ColorVertex] {
        &self.triangles
    }

    /// Get the number of line segments
    #[inline]
    pub fn line_count(&self) -> usize {
        self.lines.len() / 2
    }

    /// Get the number of triangles
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len() / 3
    }
}

/// Textured quad for a sprite, as two triangles in world space
pub fn sprite_vertices(sprite: &Sprite2D) -> [SpriteVertex; SPRITE_VERTEX_COUNT] {
    let [tl, tr, br, bl] = sprite.world_corners();
    let v = |p: Vec2, uv: [f32; 2]| SpriteVertex {
        position: p.to_array(),
        uv,
    };
    [
        v(tl, [0.0, 0.0]),
        v(tr, [1.0, 0.0]),
        v(br, [1.0, 1.0]),
        v(tl, [0.0, 0.0]),
        v(br, [1.0, 1.0]),
        v(bl, [0.0, 1.0]),
    ]
}
