//! Drive Path - a car sprite following a waypoint loop

use winit::event_loop::EventLoop;

use drivepath::{AppConfig, Game};

fn main() {
    env_logger::init();

    let config = AppConfig::load().unwrap_or_else(|e| {
        log::warn!("Failed to load config: {}. Using defaults.", e);
        AppConfig::default()
    });

    let mut game = match Game::new(config) {
        Ok(game) => game,
        Err(e) => {
            log::error!("{}", e);
            std::process::exit(1);
        }
    };

    let event_loop = match EventLoop::new() {
        Ok(event_loop) => event_loop,
        Err(e) => {
            log::error!("Failed to create event loop: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = event_loop.run_app(&mut game) {
        log::error!("Event loop error: {}", e);
        std::process::exit(1);
    }

    if game.take_error().is_some() {
        std::process::exit(1);
    }
}
