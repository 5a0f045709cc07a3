//! Game simulation system
//!
//! Manages the per-frame simulation:
//! - Delta time calculation
//! - Driving the mover along the path
//! - Syncing the sprite and the camera to the mover

use std::time::Instant;

use drivepath_core::{Mover, MoveOutcome, Path, Sprite2D, Vec2};
use drivepath_render::Camera2D;

/// Owns the state that changes from frame to frame
pub struct SimulationSystem {
    path: Path,
    mover: Mover,
    sprite: Sprite2D,
    camera: Camera2D,
    /// World units per second
    speed: f32,
    last_frame: Instant,
}

impl SimulationSystem {
    /// Put the mover on the first waypoint and center the camera on it
    pub fn new(path: Path, mover: Mover, sprite: Sprite2D, speed: f32) -> Self {
        let mut sim = Self {
            path,
            mover,
            sprite,
            camera: Camera2D::default(),
            speed,
            last_frame: Instant::now(),
        };
        sim.sync_sprite();
        sim
    }

    /// Seconds since the previous tick
    pub fn tick(&mut self) -> f32 {
        self.tick_at(Instant::now())
    }

    fn tick_at(&mut self, now: Instant) -> f32 {
        let dt = now.saturating_duration_since(self.last_frame).as_secs_f32();
        self.last_frame = now;
        dt
    }

    /// Forget time spent before the first frame (window and GPU setup)
    pub fn restart_clock(&mut self) {
        self.last_frame = Instant::now();
    }

    /// Advance the mover by `dt` seconds and follow it with sprite and camera
    pub fn update(&mut self, dt: f32) -> MoveOutcome {
        let outcome = self.mover.update(&self.path, self.speed, dt);

        if let MoveOutcome::Reached { lap_completed, .. } = outcome {
            for index in outcome.reached(&self.path) {
                let point = self.path.point(index);
                log::debug!("Reached waypoint {} at ({:.1}, {:.1})", index, point.x, point.y);
            }
            if lap_completed {
                log::debug!("Lap {} complete", self.mover.laps());
            }
        }

        self.sync_sprite();
        outcome
    }

    /// Match the view to a new window size, still centered on the sprite
    pub fn handle_resize(&mut self, width: u32, height: u32) {
        self.camera.resize(width, height);
        self.camera.set_center(self.sprite.position());
    }

    fn sync_sprite(&mut self) {
        self.sprite.place(self.mover.position(), self.mover.rotation());
        self.camera.set_center(self.sprite.position());
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn mover(&self) -> &Mover {
        &self.mover
    }

    pub fn sprite(&self) -> &Sprite2D {
        &self.sprite
    }

    pub fn camera(&self) -> &Camera2D {
        &self.camera
    }

    /// Where the car is right now
    pub fn position(&self) -> Vec2 {
        self.mover.position()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn demo_system() -> SimulationSystem {
        let path = Path::demo();
        let mover = Mover::new(&path);
        let sprite = Sprite2D::new(Vec2::new(200.0, 100.0)).with_scale(0.2);
        SimulationSystem::new(path, mover, sprite, 250.0)
    }

    #[test]
    fn test_starts_on_first_waypoint() {
        let sim = demo_system();
        assert_eq!(sim.position(), Vec2::ZERO);
        assert_eq!(sim.sprite().position(), Vec2::ZERO);
        assert_eq!(sim.camera().center, Vec2::ZERO);
    }

    #[test]
    fn test_one_second_tick_drives_full_speed() {
        let mut sim = demo_system();
        let later = sim.last_frame + Duration::from_secs(1);

        let dt = sim.tick_at(later);
        sim.update(dt);

        assert!((dt - 1.0).abs() < 1e-6);
        assert!((sim.position().length() - 250.0).abs() < 1e-2);
    }

    #[test]
    fn test_long_stall_is_not_shortened() {
        let mut sim = demo_system();
        let later = sim.last_frame + Duration::from_secs(3);
        assert!((sim.tick_at(later) - 3.0).abs() < 1e-6);
    }

    #[test]
    fn test_delta_time_resets_each_tick() {
        let mut sim = demo_system();
        let later = sim.last_frame + Duration::from_millis(500);
        assert!((sim.tick_at(later) - 0.5).abs() < 1e-6);
        // The clock moved, so an immediate second tick is zero
        assert_eq!(sim.tick_at(later), 0.0);
    }

    #[test]
    fn test_update_moves_sprite_and_camera() {
        let mut sim = demo_system();
        sim.update(0.1);

        let pos = sim.position();
        assert!(pos.length() > 24.9 && pos.length() < 25.1);
        assert_eq!(sim.sprite().position(), pos);
        assert_eq!(sim.camera().center, pos);
        assert_eq!(sim.sprite().transform.rotation, sim.mover().rotation());
    }

    #[test]
    fn test_update_reports_arrival() {
        let mut sim = demo_system();
        // Waypoint 1 is 335 units away
        for _ in 0..20 {
            if let MoveOutcome::Reached { index, .. } = sim.update(0.1) {
                assert_eq!(index, 1);
                return;
            }
        }
        panic!("Never reached waypoint 1");
    }

    #[test]
    fn test_resize_keeps_sprite_centered() {
        let mut sim = demo_system();
        sim.update(0.5);
        sim.handle_resize(640, 480);

        assert_eq!(sim.camera().size, Vec2::new(640.0, 480.0));
        assert_eq!(sim.camera().center, sim.sprite().position());
    }

    #[test]
    fn test_zero_resize_keeps_size() {
        let mut sim = demo_system();
        sim.handle_resize(0, 0);
        assert_eq!(sim.camera().size, Vec2::new(1080.0, 728.0));
    }
}
