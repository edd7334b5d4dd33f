//! GPU rendering
//!
//! Manages the render context, the triangle pipeline, and per-frame
//! rendering.

pub mod context;
pub mod pipeline;
pub mod types;

use std::sync::Arc;
use winit::window::Window;

use crate::config::AppConfig;
use crate::shader::{ShaderError, ShaderSource};
use context::{ContextError, RenderContext};
use pipeline::TrianglePipeline;

/// Error type for application setup
#[derive(Debug)]
pub enum InitError {
    /// Window creation failed
    Window(String),
    /// GPU context creation failed
    Context(ContextError),
    /// Shader file could not be loaded
    Shader(ShaderError),
}

impl std::fmt::Display for InitError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InitError::Window(msg) => write!(f, "Window creation failed: {}", msg),
            InitError::Context(err) => write!(f, "{}", err),
            InitError::Shader(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for InitError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            InitError::Window(_) => None,
            InitError::Context(err) => Some(err),
            InitError::Shader(err) => Some(err),
        }
    }
}

impl From<ContextError> for InitError {
    fn from(err: ContextError) -> Self {
        InitError::Context(err)
    }
}

impl From<ShaderError> for InitError {
    fn from(err: ShaderError) -> Self {
        InitError::Shader(err)
    }
}

/// Per-frame render error types
#[derive(Debug)]
pub enum RenderError {
    /// Surface was lost (window resized, minimized, etc.)
    SurfaceLost,
    /// GPU out of memory
    OutOfMemory,
    /// Other surface error
    Other(String),
}

impl std::fmt::Display for RenderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RenderError::SurfaceLost => write!(f, "Surface lost"),
            RenderError::OutOfMemory => write!(f, "Out of memory"),
            RenderError::Other(msg) => write!(f, "Render error: {}", msg),
        }
    }
}

impl std::error::Error for RenderError {}

/// Owns the GPU context and the triangle pipeline
pub struct Renderer {
    context: RenderContext,
    pipeline: TrianglePipeline,
    clear_color: wgpu::Color,
}

impl Renderer {
    /// Create the renderer: GPU context, shader sources, pipeline, vertex buffer
    pub fn new(window: Arc<Window>, config: &AppConfig) -> Result<Self, InitError> {
        let context = pollster::block_on(RenderContext::with_vsync(
            window,
            config.window.vsync,
        ))?;

        let vertex_shader = ShaderSource::load(&config.shaders.vertex_path)?;
        let fragment_shader = ShaderSource::load(&config.shaders.fragment_path)?;
        log::info!(
            "Loaded shaders: {}, {}",
            vertex_shader.label(),
            fragment_shader.label()
        );

        let pipeline = TrianglePipeline::new(
            &context.device,
            context.config.format,
            &vertex_shader,
            &fragment_shader,
        );

        let bg = config.rendering.clear_color;
        let clear_color = wgpu::Color {
            r: bg[0] as f64,
            g: bg[1] as f64,
            b: bg[2] as f64,
            a: bg[3] as f64,
        };

        Ok(Self {
            context,
            pipeline,
            clear_color,
        })
    }

    /// Handle window resize
    pub fn resize(&mut self, width: u32, height: u32) {
        self.context
            .resize(winit::dpi::PhysicalSize::new(width, height));
    }

    /// Reconfigure the surface at its current size (after a lost surface)
    pub fn reconfigure(&mut self) {
        let size = self.context.size;
        self.context.resize(size);
    }

    /// Render a single frame
    pub fn render_frame(&mut self) -> Result<(), RenderError> {
        let output = match self.context.surface.get_current_texture() {
            Ok(output) => output,
            Err(wgpu::SurfaceError::Lost) => return Err(RenderError::SurfaceLost),
            Err(wgpu::SurfaceError::OutOfMemory) => return Err(RenderError::OutOfMemory),
            Err(e) => return Err(RenderError::Other(format!("{:?}", e))),
        };

        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .context
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Render Encoder"),
            });

        self.pipeline.render(&mut encoder, &view, self.clear_color);

        self.context.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_error_display() {
        assert_eq!(format!("{}", RenderError::SurfaceLost), "Surface lost");
        assert_eq!(format!("{}", RenderError::OutOfMemory), "Out of memory");
        assert_eq!(
            format!("{}", RenderError::Other("test".to_string())),
            "Render error: test"
        );
    }

    #[test]
    fn test_init_error_from_shader_error() {
        use std::error::Error;

        let err: InitError = ShaderError::NotFound("shaders/x.wgsl".to_string()).into();
        assert!(format!("{}", err).contains("shaders/x.wgsl"));
        assert!(err.source().is_some());
    }

    #[test]
    fn test_init_error_from_context_error() {
        let err: InitError = ContextError::NoAdapter.into();
        assert_eq!(format!("{}", err), "No compatible GPU adapter found");
    }
}
