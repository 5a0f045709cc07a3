//! Constant-speed path follower
//!
//! The mover is always "travelling to waypoint `index + 1`". Every update
//! first checks whether it is within the snap threshold of that waypoint
//! (squared distance), and if so snaps onto it, advances the index and turns
//! to face the following waypoint. It then steps toward its target.
//!
//! A step never cuts a corner: when `speed * dt` is longer than the
//! remaining distance, the mover lands on the waypoint, arrives there, and
//! spends the rest of the step on the next segment. Every waypoint on the
//! way is reached in order, so large frame deltas cannot skip one.

use drivepath_math::Vec2;

use crate::path::Path;

/// Squared distance (world units²) below which a waypoint counts as reached
pub const DEFAULT_SNAP_THRESHOLD: f32 = 5.0;

/// What happened during a [`Mover::update`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Still heading for the same waypoint
    Travelling,
    /// Arrived at one or more waypoints
    Reached {
        /// The last waypoint reached; the mover now faces the one after it
        index: usize,
        /// How many waypoints were reached, in path order, ending at `index`
        passed: usize,
        /// True when waypoint 0 was among them
        lap_completed: bool,
    },
}

impl MoveOutcome {
    /// Indices of the waypoints reached, oldest first
    pub fn reached(&self, path: &Path) -> Vec<usize> {
        match *self {
            MoveOutcome::Travelling => Vec::new(),
            MoveOutcome::Reached { index, passed, .. } => {
                let len = path.len();
                let first = (index + len - (passed - 1) % len) % len;
                (0..passed).map(|k| (first + k) % len).collect()
            }
        }
    }
}

/// Position and heading of something driving around a [`Path`]
#[derive(Debug, Clone, PartialEq)]
pub struct Mover {
    position: Vec2,
    index: usize,
    /// Facing angle in radians (y-down, clockwise on screen)
    rotation: f32,
    laps: u32,
    snap_threshold: f32,
}

impl Mover {
    /// Place a mover on waypoint 0, facing waypoint 1
    pub fn new(path: &Path) -> Self {
        let position = path.point(0);
        Self {
            position,
            index: 0,
            rotation: position.angle_to(path.point(1)),
            laps: 0,
            snap_threshold: DEFAULT_SNAP_THRESHOLD,
        }
    }

    /// Set the squared arrival distance
    pub fn with_snap_threshold(mut self, threshold: f32) -> Self {
        self.snap_threshold = threshold;
        self
    }

    #[inline]
    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// Index of the waypoint most recently reached
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    #[inline]
    pub fn rotation(&self) -> f32 {
        self.rotation
    }

    /// Number of times the mover has come back to waypoint 0
    #[inline]
    pub fn laps(&self) -> u32 {
        self.laps
    }

    #[inline]
    pub fn snap_threshold(&self) -> f32 {
        self.snap_threshold
    }

    /// Index of the waypoint being driven toward
    #[inline]
    pub fn target_index(&self, path: &Path) -> usize {
        path.next_index(self.index)
    }

    /// Position of the waypoint being driven toward
    #[inline]
    pub fn target(&self, path: &Path) -> Vec2 {
        path.point(self.index + 1)
    }

    /// Advance along the path by `speed * dt` world units
    pub fn update(&mut self, path: &Path, speed: f32, dt: f32) -> MoveOutcome {
        // NaN collapses to 0
        let mut step = (speed * dt).max(0.0);
        let mut passed = 0;
        let mut lap_completed = false;

        // Whole laps bring the mover back to where it is
        let perimeter = path.perimeter();
        if perimeter > 0.0 && step >= perimeter {
            let laps = (step / perimeter).floor();
            step -= laps * perimeter;
            self.laps = self.laps.saturating_add(laps as u32);
            passed = (laps as usize).saturating_mul(path.len());
            lap_completed = true;
        }

        if self.position.distance_squared(self.target(path)) < self.snap_threshold {
            lap_completed |= self.arrive(path);
            passed = passed.saturating_add(1);
        }

        while step > 0.0 {
            let target = self.target(path);
            let to_target = target - self.position;
            let remaining = to_target.length();

            if step <= remaining {
                self.position += to_target * (step / remaining);
                break;
            }

            self.position = target;
            step -= remaining;
            lap_completed |= self.arrive(path);
            passed = passed.saturating_add(1);
        }

        if passed == 0 {
            MoveOutcome::Travelling
        } else {
            MoveOutcome::Reached {
                index: self.index,
                passed,
                lap_completed,
            }
        }
    }

    /// Snap onto the target waypoint and face the next one
    ///
    /// Returns true if that waypoint is 0.
    fn arrive(&mut self, path: &Path) -> bool {
        self.position = self.target(path);
        self.index = path.next_index(self.index);
        self.rotation = self.position.angle_to(self.target(path));
        let lap_completed = self.index == 0;
        if lap_completed {
            self.laps = self.laps.saturating_add(1);
        }
        lap_completed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-3;

    #[test]
    fn test_new_starts_on_first_waypoint() {
        let path = Path::demo();
        let mover = Mover::new(&path);
        assert_eq!(mover.position(), Vec2::ZERO);
        assert_eq!(mover.index(), 0);
        assert_eq!(mover.target_index(&path), 1);
        assert_eq!(mover.laps(), 0);
        let expected = (-300.0f32).atan2(-150.0);
        assert!((mover.rotation() - expected).abs() < EPSILON);
    }

    #[test]
    fn test_one_second_step_matches_speed() {
        let path = Path::demo();
        let mut mover = Mover::new(&path);

        let outcome = mover.update(&path, 250.0, 1.0);

        let expected = Vec2::new(-150.0, -300.0).normalized() * 250.0;
        assert_eq!(outcome, MoveOutcome::Travelling);
        assert_eq!(mover.index(), 0);
        assert!((mover.position() - expected).length() < EPSILON);
        assert!((mover.position().length() - 250.0).abs() < EPSILON);
    }

    #[test]
    fn test_zero_dt_does_not_move() {
        let path = Path::demo();
        let mut mover = Mover::new(&path);
        mover.update(&path, 250.0, 0.0);
        assert_eq!(mover.position(), Vec2::ZERO);
    }

    #[test]
    fn test_snaps_inside_threshold() {
        let path = Path::demo();
        let mut mover = Mover::new(&path);
        // 2 units away: 4 < 5
        mover.position = Vec2::new(-150.0, -298.0);

        let outcome = mover.update(&path, 250.0, 0.0);

        assert_eq!(
            outcome,
            MoveOutcome::Reached { index: 1, passed: 1, lap_completed: false }
        );
        assert_eq!(mover.position(), Vec2::new(-150.0, -300.0));
        assert_eq!(mover.index(), 1);
    }

    #[test]
    fn test_no_snap_outside_threshold() {
        let path = Path::demo();
        let mut mover = Mover::new(&path);
        // 3 units away: 9 >= 5
        mover.position = Vec2::new(-150.0, -297.0);

        let outcome = mover.update(&path, 250.0, 0.0);

        assert_eq!(outcome, MoveOutcome::Travelling);
        assert_eq!(mover.index(), 0);
    }

    #[test]
    fn test_rotation_after_snap_faces_next_target() {
        let path = Path::demo();
        let mut mover = Mover::new(&path);
        mover.position = Vec2::new(-149.0, -299.0);

        mover.update(&path, 250.0, 0.0);

        let from = Vec2::new(-150.0, -300.0);
        let to = Vec2::new(0.0, -450.0);
        let expected = (to.y - from.y).atan2(to.x - from.x);
        assert!((mover.rotation() - expected).abs() < EPSILON);
    }

    #[test]
    fn test_snap_then_moves_along_new_segment() {
        let path = Path::demo();
        let mut mover = Mover::new(&path);
        mover.position = Vec2::new(-150.0, -299.0);

        mover.update(&path, 100.0, 0.1);

        let start = Vec2::new(-150.0, -300.0);
        let dir = (Vec2::new(0.0, -450.0) - start).normalized();
        assert!((mover.position() - (start + dir * 10.0)).length() < EPSILON);
    }

    #[test]
    fn test_large_step_carries_onto_next_segment() {
        let path = Path::demo();
        let mut mover = Mover::new(&path);

        // 500 units: the 335.4 unit first segment, then the rest toward waypoint 2
        let outcome = mover.update(&path, 250.0, 2.0);

        assert_eq!(
            outcome,
            MoveOutcome::Reached { index: 1, passed: 1, lap_completed: false }
        );
        let start = Vec2::new(-150.0, -300.0);
        let dir = (Vec2::new(0.0, -450.0) - start).normalized();
        let leftover = 500.0 - start.length();
        assert!((mover.position() - (start + dir * leftover)).length() < EPSILON);
        assert!((mover.rotation() - dir.y.atan2(dir.x)).abs() < EPSILON);
    }

    #[test]
    fn test_step_spanning_several_waypoints() {
        let path = Path::from_arrays(&[[0.0, 0.0], [10.0, 0.0], [10.0, 10.0], [0.0, 10.0]])
            .unwrap();
        let mut mover = Mover::new(&path);

        let outcome = mover.update(&path, 25.0, 1.0);

        assert_eq!(
            outcome,
            MoveOutcome::Reached { index: 2, passed: 2, lap_completed: false }
        );
        assert_eq!(outcome.reached(&path), vec![1, 2]);
        assert!((mover.position() - Vec2::new(5.0, 10.0)).length() < EPSILON);
    }

    #[test]
    fn test_lap_completion() {
        let path = Path::from_arrays(&[[0.0, 0.0], [10.0, 0.0]]).unwrap();
        let mut mover = Mover::new(&path);

        let outcome = mover.update(&path, 10.0, 1.5);
        assert_eq!(
            outcome,
            MoveOutcome::Reached { index: 1, passed: 1, lap_completed: false }
        );
        assert!((mover.position() - Vec2::new(5.0, 0.0)).length() < EPSILON);

        let outcome = mover.update(&path, 10.0, 1.0);
        assert_eq!(
            outcome,
            MoveOutcome::Reached { index: 0, passed: 1, lap_completed: true }
        );
        assert!((mover.position() - Vec2::new(5.0, 0.0)).length() < EPSILON);
        assert_eq!(mover.laps(), 1);
    }

    #[test]
    fn test_whole_laps_in_one_step() {
        let path = Path::from_arrays(&[[0.0, 0.0], [10.0, 0.0]]).unwrap();
        let mut mover = Mover::new(&path);

        // Perimeter is 20: two whole laps plus 5 units
        let outcome = mover.update(&path, 45.0, 1.0);

        assert_eq!(
            outcome,
            MoveOutcome::Reached { index: 0, passed: 4, lap_completed: true }
        );
        assert_eq!(outcome.reached(&path), vec![1, 0, 1, 0]);
        assert_eq!(mover.laps(), 2);
        assert!((mover.position() - Vec2::new(5.0, 0.0)).length() < EPSILON);
    }

    #[test]
    fn test_zero_threshold_still_advances() {
        let path = Path::demo();
        let mut mover = Mover::new(&path).with_snap_threshold(0.0);

        for _ in 0..60 {
            mover.update(&path, 250.0, 1.0 / 30.0);
        }

        assert!(mover.index() >= 1);
        assert_ne!(mover.position(), Vec2::new(-150.0, -300.0));
    }

    #[test]
    fn test_nan_step_does_not_move() {
        let path = Path::demo();
        let mut mover = Mover::new(&path);
        assert_eq!(mover.update(&path, f32::NAN, 0.1), MoveOutcome::Travelling);
        assert_eq!(mover.position(), Vec2::ZERO);
    }

    #[test]
    fn test_custom_threshold() {
        let path = Path::demo();
        let mut mover = Mover::new(&path).with_snap_threshold(100.0);
        mover.position = Vec2::new(-150.0, -292.0); // 64 < 100
        assert!(matches!(
            mover.update(&path, 0.0, 0.0),
            MoveOutcome::Reached { index: 1, .. }
        ));
        assert_eq!(mover.snap_threshold(), 100.0);
    }
}
