//! Window management system
//!
//! Handles window creation, size queries and redraw requests.

use std::sync::Arc;
use winit::{
    dpi::{LogicalSize, PhysicalSize},
    event_loop::ActiveEventLoop,
    window::Window,
};
use crate::config::WindowConfig;

/// Owns the application window
pub struct WindowSystem {
    window: Arc<Window>,
}

impl WindowSystem {
    /// Create window from config
    pub fn create(
        event_loop: &ActiveEventLoop,
        config: &WindowConfig,
    ) -> Result<Self, WindowError> {
        let attrs = window_attributes(config);

        let window = Arc::new(
            event_loop
                .create_window(attrs)
                .map_err(|e| WindowError::CreationFailed(e.to_string()))?,
        );

        log::info!(
            "Created window '{}' ({}x{})",
            config.title,
            config.width,
            config.height
        );

        Ok(Self { window })
    }

    /// Get window reference (for RenderContext creation)
    pub fn window(&self) -> &Arc<Window> {
        &self.window
    }

    /// Current drawable size in physical pixels
    pub fn inner_size(&self) -> PhysicalSize<u32> {
        self.window.inner_size()
    }

    /// Request a redraw
    pub fn request_redraw(&self) {
        self.window.request_redraw();
    }
}

fn window_attributes(config: &WindowConfig) -> winit::window::WindowAttributes {
    Window::default_attributes()
        .with_title(&config.title)
        .with_inner_size(LogicalSize::new(config.width, config.height))
}

#[derive(Debug)]
pub enum WindowError {
    CreationFailed(String),
}

impl std::fmt::Display for WindowError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WindowError::CreationFailed(msg) => write!(f, "Window creation failed: {}", msg),
        }
    }
}

impl std::error::Error for WindowError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attributes_from_config() {
        // Can't create an actual window without an event loop
        let attrs = window_attributes(&WindowConfig::default());
        assert_eq!(attrs.title, "Drive Path");
        assert_eq!(
            attrs.inner_size,
            Some(LogicalSize::new(1080u32, 728u32).into())
        );
    }

    #[test]
    fn test_window_error_display() {
        let err = WindowError::CreationFailed("no display".to_string());
        assert_eq!(err.to_string(), "Window creation failed: no display");
    }
}
