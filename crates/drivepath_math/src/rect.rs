//! Axis-aligned rectangle

use crate::Vec2;

/// Axis-aligned rectangle stored as min/max corners
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub min: Vec2,
    pub max: Vec2,
}

impl Rect {
    /// Create a rectangle from two corners (in any order)
    pub fn from_corners(a: Vec2, b: Vec2) -> Self {
        Self {
            min: a.min_components(b),
            max: a.max_components(b),
        }
    }

    /// Create a rectangle centered on `center` with the given full size
    pub fn from_center_size(center: Vec2, size: Vec2) -> Self {
        let half = size.abs() * 0.5;
        Self {
            min: center - half,
            max: center + half,
        }
    }

    /// Smallest rectangle containing every point
    ///
    /// Returns `None` for an empty iterator.
    pub fn bounding<I: IntoIterator<Item = Vec2>>(points: I) -> Option<Self> {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        Some(iter.fold(Self { min: first, max: first }, |rect, p| Self {
            min: rect.min.min_components(p),
            max: rect.max.max_components(p),
        }))
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }

    /// Grow the rectangle by `amount` on every side
    pub fn expanded(&self, amount: f32) -> Self {
        Self {
            min: self.min - Vec2::splat(amount),
            max: self.max + Vec2::splat(amount),
        }
    }
}
