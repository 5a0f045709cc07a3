//! Closed waypoint path
//!
//! A [`Path`] is an ordered, cyclic list of points: the last point connects
//! back to the first. Indices passed to [`Path::point`] wrap modulo the
//! number of points.

use std::fmt;

use drivepath_math::{wrap_index, Vec2};

/// The demo track, in world units (y-down)
pub const DEMO_PATH: [[f32; 2]; 7] = [
    [0.0, 0.0],
    [-150.0, -300.0],
    [0.0, -450.0],
    [300.0, -450.0],
    [300.0, -300.0],
    [500.0, -300.0],
    [450.0, -50.0],
];

/// Error returned when a point list cannot form a path
#[derive(Debug, Clone, PartialEq)]
pub enum PathError {
    /// Fewer than two points were given
    TooFewPoints(usize),
    /// Every point is the same, so there is nowhere to drive
    Degenerate,
    /// A point has a NaN or infinite coordinate
    NonFinite(usize),
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathError::TooFewPoints(n) => {
                write!(f, "Path needs at least 2 points, got {}", n)
            }
            PathError::Degenerate => write!(f, "Path needs at least 2 distinct points"),
            PathError::NonFinite(i) => write!(f, "Path point {} is not finite", i),
        }
    }
}

impl std::error::Error for PathError {}

/// Fixed, cyclic sequence of waypoints
#[derive(Debug, Clone, PartialEq)]
pub struct Path {
    points: Vec<Vec2>,
}

impl Path {
    /// Build a path, validating that it has at least two distinct finite points
    pub fn new(points: Vec<Vec2>) -> Result<Self, PathError> {
        if points.len() < 2 {
            return Err(PathError::TooFewPoints(points.len()));
        }
        if let Some(i) = points.iter().position(|p| !p.is_finite()) {
            return Err(PathError::NonFinite(i));
        }
        let first = points[0];
        if points.iter().all(|p| *p == first) {
            return Err(PathError::Degenerate);
        }
        Ok(Self { points })
    }

    /// Build a path from `[x, y]` pairs (the config file format)
    pub fn from_arrays(points: &[[f32; 2]]) -> Result<Self, PathError> {
        Self::new(points.iter().copied().map(Vec2::from).collect())
    }

    /// The demo track
    pub fn demo() -> Self {
        Self {
            points: DEMO_PATH.iter().copied().map(Vec2::from).collect(),
        }
    }

    /// Number of waypoints
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always false; a path holds at least two points
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Waypoint at `index`, wrapping past the end
    #[inline]
    pub fn point(&self, index: usize) -> Vec2 {
        self.points[wrap_index(index, self.points.len())]
    }

    /// All waypoints in order
    #[inline]
    pub fn points(&self) -> &[Vec2] {
        &self.points
    }

    /// Index that follows `index`, wrapping to 0 after the last waypoint
    #[inline]
    pub fn next_index(&self, index: usize) -> usize {
        wrap_index(index + 1, self.points.len())
    }

    /// Segment starting at waypoint `index`
    pub fn segment(&self, index: usize) -> (Vec2, Vec2) {
        (self.point(index), self.point(index + 1))
    }

    /// Every segment, including the closing one from the last point to the first
    pub fn segments(&self) -> impl Iterator<Item = (Vec2, Vec2)> + '_ {
        (0..self.points.len()).map(move |i| self.segment(i))
    }

    /// Total length of the closed loop
    pub fn perimeter(&self) -> f32 {
        self.segments().map(|(a, b)| a.distance(b)).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_path() {
        let path = Path::demo();
        assert_eq!(path.len(), 7);
        assert_eq!(path.point(0), Vec2::ZERO);
        assert_eq!(path.point(1), Vec2::new(-150.0, -300.0));
        assert_eq!(Path::from_arrays(&DEMO_PATH).unwrap(), path);
    }

    #[test]
    fn test_point_wraps() {
        let path = Path::demo();
        assert_eq!(path.point(7), path.point(0));
        assert_eq!(path.point(8), path.point(1));
        assert_eq!(path.point(20), path.point(6));
    }

    #[test]
    fn test_next_index_wraps() {
        let path = Path::demo();
        assert_eq!(path.next_index(0), 1);
        assert_eq!(path.next_index(5), 6);
        assert_eq!(path.next_index(6), 0);
    }

    #[test]
    fn test_segments_close_the_loop() {
        let path = Path::demo();
        let segments: Vec<_> = path.segments().collect();
        assert_eq!(segments.len(), 7);
        assert_eq!(segments[0], (Vec2::ZERO, Vec2::new(-150.0, -300.0)));
        assert_eq!(segments[6], (Vec2::new(450.0, -50.0), Vec2::ZERO));
    }

    #[test]
    fn test_two_point_path() {
        let path = Path::from_arrays(&[[0.0, 0.0], [10.0, 0.0]]).unwrap();
        assert_eq!(path.segments().count(), 2);
        assert_eq!(path.perimeter(), 20.0);
    }

    #[test]
    fn test_too_few_points() {
        assert_eq!(Path::new(vec![]), Err(PathError::TooFewPoints(0)));
        assert_eq!(
            Path::from_arrays(&[[1.0, 1.0]]),
            Err(PathError::TooFewPoints(1))
        );
    }

    #[test]
    fn test_degenerate_path() {
        assert_eq!(
            Path::from_arrays(&[[3.0, 4.0], [3.0, 4.0], [3.0, 4.0]]),
            Err(PathError::Degenerate)
        );
    }

    #[test]
    fn test_non_finite_point() {
        assert_eq!(
            Path::from_arrays(&[[0.0, 0.0], [f32::NAN, 1.0]]),
            Err(PathError::NonFinite(1))
        );
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            PathError::TooFewPoints(1).to_string(),
            "Path needs at least 2 points, got 1"
        );
        assert!(PathError::Degenerate.to_string().contains("distinct"));
        assert!(PathError::NonFinite(3).to_string().contains('3'));
    }
}
