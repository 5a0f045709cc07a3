//! The application handler
//!
//! `Game` owns everything for the lifetime of the event loop. Startup work
//! that can fail without a window (config, path, texture) happens in
//! [`Game::new`]; the window and GPU are created in `resumed`.

use std::time::Instant;

use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow},
    window::WindowId,
};

use drivepath_core::{AssetError, Mover, Path, PathError, Sprite2D, TextureData};
use drivepath_render::context::ContextError;

use crate::config::{AppConfig, ConfigError};
use crate::input::{EventQueue, InputAction, InputMapper};
use crate::systems::{
    FrameLimiter, RenderError, RenderSystem, SimulationSystem, WindowError, WindowSystem,
};

/// Errors that stop the game before the first frame
#[derive(Debug)]
pub enum StartupError {
    Config(ConfigError),
    Path(PathError),
    Asset(AssetError),
    Window(WindowError),
    Render(ContextError),
}

impl std::fmt::Display for StartupError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StartupError::Config(e) => write!(f, "{}", e),
            StartupError::Path(e) => write!(f, "Invalid path: {}", e),
            StartupError::Asset(e) => write!(f, "Failed to load asset: {}", e),
            StartupError::Window(e) => write!(f, "{}", e),
            StartupError::Render(e) => write!(f, "Failed to initialize GPU: {}", e),
        }
    }
}

impl std::error::Error for StartupError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StartupError::Config(e) => Some(e),
            StartupError::Path(e) => Some(e),
            StartupError::Asset(e) => Some(e),
            StartupError::Window(e) => Some(e),
            StartupError::Render(e) => Some(e),
        }
    }
}

impl From<ConfigError> for StartupError {
    fn from(e: ConfigError) -> Self {
        StartupError::Config(e)
    }
}

impl From<PathError> for StartupError {
    fn from(e: PathError) -> Self {
        StartupError::Path(e)
    }
}

impl From<AssetError> for StartupError {
    fn from(e: AssetError) -> Self {
        StartupError::Asset(e)
    }
}

impl From<WindowError> for StartupError {
    fn from(e: WindowError) -> Self {
        StartupError::Window(e)
    }
}

impl From<ContextError> for StartupError {
    fn from(e: ContextError) -> Self {
        StartupError::Render(e)
    }
}

/// Main application state
pub struct Game {
    config: AppConfig,
    /// Decoded sprite image, uploaded when the GPU is ready
    texture: TextureData,
    window: Option<WindowSystem>,
    render: Option<RenderSystem>,
    simulation: SimulationSystem,
    events: EventQueue,
    frame_limiter: FrameLimiter,
    error: Option<StartupError>,
}

impl Game {
    /// Load the sprite and set up the path; no window yet
    pub fn new(config: AppConfig) -> Result<Self, StartupError> {
        config.validate()?;
        let path = Path::from_arrays(&config.path.points)?;
        let texture = TextureData::load(&config.sprite.texture_path)?;

        let mover = Mover::new(&path).with_snap_threshold(config.path.snap_threshold);
        let sprite = Sprite2D::new(texture.size()).with_scale(config.sprite.scale);
        let simulation = SimulationSystem::new(path, mover, sprite, config.path.speed);

        log::info!(
            "Driving {} waypoints at {} units/s",
            simulation.path().len(),
            config.path.speed
        );

        let frame_limiter = FrameLimiter::new(config.window.fps_limit);

        Ok(Self {
            config,
            texture,
            window: None,
            render: None,
            simulation,
            events: EventQueue::new(),
            frame_limiter,
            error: None,
        })
    }

    /// The error that stopped the event loop, if any
    pub fn take_error(&mut self) -> Option<StartupError> {
        self.error.take()
    }

    pub fn simulation(&self) -> &SimulationSystem {
        &self.simulation
    }

    fn initialize(&mut self, event_loop: &ActiveEventLoop) -> Result<(), StartupError> {
        let window = WindowSystem::create(event_loop, &self.config.window)?;
        let render = RenderSystem::new(
            window.window().clone(),
            &self.texture,
            &self.config.rendering,
            self.config.window.vsync,
        )?;

        let size = window.inner_size();
        self.simulation.handle_resize(size.width, size.height);
        self.simulation.restart_clock();

        self.window = Some(window);
        self.render = Some(render);
        Ok(())
    }

    /// Handle queued events; returns false when the game should exit
    fn process_events(&mut self) -> bool {
        let mut keep_running = true;
        let events: Vec<_> = self.events.drain().collect();
        for event in events {
            match InputMapper::map_event(event) {
                InputAction::Exit => {
                    log::info!("Exit requested ({:?})", event);
                    keep_running = false;
                }
                InputAction::Resize { width, height } => {
                    if let Some(render) = &mut self.render {
                        render.resize(width, height);
                    }
                    self.simulation.handle_resize(width, height);
                }
            }
        }
        keep_running
    }

    fn frame(&mut self, event_loop: &ActiveEventLoop) {
        self.frame_limiter.mark_frame(Instant::now());

        if !self.process_events() {
            event_loop.exit();
            return;
        }

        let dt = self.simulation.tick();
        self.simulation.update(dt);

        let Some(render) = &mut self.render else {
            return;
        };
        let sim = &self.simulation;
        match render.render_frame(sim.camera(), sim.path(), sim.sprite()) {
            Ok(()) => {}
            Err(RenderError::SurfaceLost) => render.reconfigure(),
            Err(RenderError::OutOfMemory) => {
                log::error!("GPU out of memory");
                event_loop.exit();
            }
            Err(e) => log::warn!("{}", e),
        }
    }
}

impl ApplicationHandler for Game {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        if let Err(e) = self.initialize(event_loop) {
            log::error!("{}", e);
            self.error = Some(e);
            event_loop.exit();
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::RedrawRequested => self.frame(event_loop),
            other => self.events.push_window_event(&other),
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        // Close and key presses should not wait for the next frame
        if !self.process_events() {
            event_loop.exit();
            return;
        }

        let Some(window) = &self.window else {
            return;
        };

        if self.frame_limiter.frame_due(Instant::now()) {
            window.request_redraw();
            event_loop.set_control_flow(ControlFlow::Wait);
        } else if let Some(deadline) = self.frame_limiter.next_deadline() {
            event_loop.set_control_flow(ControlFlow::WaitUntil(deadline));
        }
    }
}
