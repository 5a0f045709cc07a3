//! WGPU device, queue and surface management

use std::fmt;
use std::sync::Arc;

use winit::dpi::PhysicalSize;
use winit::window::Window;

/// Errors creating the GPU context
#[derive(Debug)]
pub enum ContextError {
    /// The window surface could not be created
    Surface(wgpu::CreateSurfaceError),
    /// No adapter can present to the surface
    NoAdapter,
    /// The surface reports no texture format or no alpha mode
    UnsupportedSurface,
    /// The adapter refused to create a device
    Device(wgpu::RequestDeviceError),
}

impl fmt::Display for ContextError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContextError::Surface(e) => write!(f, "Failed to create surface: {}", e),
            ContextError::NoAdapter => write!(f, "No compatible GPU adapter found"),
            ContextError::UnsupportedSurface => {
                write!(f, "Surface is not supported by the GPU adapter")
            }
            ContextError::Device(e) => write!(f, "Failed to create device: {}", e),
        }
    }
}

impl std::error::Error for ContextError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ContextError::Surface(e) => Some(e),
            ContextError::NoAdapter | ContextError::UnsupportedSurface => None,
            ContextError::Device(e) => Some(e),
        }
    }
}

/// Owns the surface, device and queue for one window
pub struct RenderContext {
    pub surface: wgpu::Surface<'static>,
    pub device: wgpu::Device,
    pub queue: wgpu::Queue,
    pub config: wgpu::SurfaceConfiguration,
    pub size: PhysicalSize<u32>,
}

impl RenderContext {
    /// Create a context, choosing the present mode from `vsync`
    pub async fn with_vsync(window: Arc<Window>, vsync: bool) -> Result<Self, ContextError> {
        let size = window.inner_size();

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::PRIMARY,
            ..Default::default()
        });

        let surface = instance
            .create_surface(window)
            .map_err(ContextError::Surface)?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::default(),
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or(ContextError::NoAdapter)?;

        log::info!("Using GPU adapter: {}", adapter.get_info().name);

        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    label: Some("Drive Path Device"),
                    required_features: wgpu::Features::empty(),
                    required_limits: wgpu::Limits::downlevel_webgl2_defaults()
                        .using_resolution(adapter.limits()),
                    memory_hints: wgpu::MemoryHints::default(),
                },
                None,
            )
            .await
            .map_err(ContextError::Device)?;

        let (format, alpha_mode) = surface_format(&surface.get_capabilities(&adapter))?;

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: present_mode(vsync),
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        Ok(Self {
            surface,
            device,
            queue,
            config,
            size,
        })
    }

    /// Reconfigure the surface for a new window size
    ///
    /// Zero-sized requests (minimized window) are ignored.
    pub fn resize(&mut self, new_size: PhysicalSize<u32>) {
        if new_size.width == 0 || new_size.height == 0 {
            return;
        }
        self.size = new_size;
        self.config.width = new_size.width;
        self.config.height = new_size.height;
        self.surface.configure(&self.device, &self.config);
    }
}

/// Texture format and alpha mode for the surface, preferring an sRGB format
pub fn surface_format(
    caps: &wgpu::SurfaceCapabilities,
) -> Result<(wgpu::TextureFormat, wgpu::CompositeAlphaMode), ContextError> {
    let first = caps.formats.first().copied();
    let format = caps
        .formats
        .iter()
        .copied()
        .find(|f| f.is_srgb())
        .or(first)
        .ok_or(ContextError::UnsupportedSurface)?;
    let alpha_mode = caps
        .alpha_modes
        .first()
        .copied()
        .ok_or(ContextError::UnsupportedSurface)?;
    Ok((format, alpha_mode))
}

/// Present mode for the requested vsync setting
pub fn present_mode(vsync: bool) -> wgpu::PresentMode {
    if vsync {
        wgpu::PresentMode::AutoVsync
    } else {
        wgpu::PresentMode::AutoNoVsync
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_present_mode() {
        assert_eq!(present_mode(true), wgpu::PresentMode::AutoVsync);
        assert_eq!(present_mode(false), wgpu::PresentMode::AutoNoVsync);
    }

    fn caps(
        formats: Vec<wgpu::TextureFormat>,
        alpha_modes: Vec<wgpu::CompositeAlphaMode>,
    ) -> wgpu::SurfaceCapabilities {
        wgpu::SurfaceCapabilities {
            formats,
            alpha_modes,
            ..Default::default()
        }
    }

    #[test]
    fn test_surface_format_prefers_srgb() {
        let caps = caps(
            vec![
                wgpu::TextureFormat::Bgra8Unorm,
                wgpu::TextureFormat::Bgra8UnormSrgb,
            ],
            vec![wgpu::CompositeAlphaMode::Opaque],
        );
        let (format, alpha) = surface_format(&caps).unwrap();
        assert_eq!(format, wgpu::TextureFormat::Bgra8UnormSrgb);
        assert_eq!(alpha, wgpu::CompositeAlphaMode::Opaque);
    }

    #[test]
    fn test_surface_format_falls_back_to_first() {
        let caps = caps(
            vec![wgpu::TextureFormat::Rgba16Float],
            vec![wgpu::CompositeAlphaMode::PreMultiplied],
        );
        let (format, _) = surface_format(&caps).unwrap();
        assert_eq!(format, wgpu::TextureFormat::Rgba16Float);
    }

    #[test]
    fn test_empty_formats_is_error() {
        let caps = caps(vec![], vec![wgpu::CompositeAlphaMode::Opaque]);
        assert!(matches!(
            surface_format(&caps),
            Err(ContextError::UnsupportedSurface)
        ));
    }

    #[test]
    fn test_empty_alpha_modes_is_error() {
        let caps = caps(vec![wgpu::TextureFormat::Bgra8UnormSrgb], vec![]);
        assert!(matches!(
            surface_format(&caps),
            Err(ContextError::UnsupportedSurface)
        ));
    }

    #[test]
    fn test_context_error_display() {
        assert_eq!(
            ContextError::NoAdapter.to_string(),
            "No compatible GPU adapter found"
        );
        assert_eq!(
            ContextError::UnsupportedSurface.to_string(),
            "Surface is not supported by the GPU adapter"
        );
    }
}
