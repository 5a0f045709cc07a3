//! Drive Path
//!
//! A car sprite drives around a closed loop of waypoints while the camera
//! follows it.

pub mod config;
pub mod game;
pub mod input;
pub mod systems;

pub use config::AppConfig;
pub use game::{Game, StartupError};
