//! GPU rendering system
//!
//! Owns the render context and the scene renderer; turns a mounted scene
//! into one presented frame per call.

use std::sync::Arc;
use winit::window::Window;

use vitrine_core::MountedScene;
use vitrine_render::{RenderContext, SceneRenderer};

/// Render error types
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

/// Manages GPU rendering
pub struct RenderSystem {
    context: RenderContext,
    renderer: SceneRenderer,
    background: wgpu::Color,
}

impl RenderSystem {
    /// Create render system from window and config
    pub fn new(window: Arc<Window>, vsync: bool, background: [f32; 4]) -> Self {
        let context = pollster::block_on(RenderContext::with_vsync(window, vsync));

        let mut renderer = SceneRenderer::new(&context.device, context.config.format);
        renderer.ensure_depth_texture(&context.device, context.size.width, context.size.height);

        Self {
            context,
            renderer,
            background: wgpu::Color {
                r: background[0] as f64,
                g: background[1] as f64,
                b: background[2] as f64,
                a: background[3] as f64,
            },
        }
    }

    /// Handle window resize
    pub fn resize(&mut self, width: u32, height: u32) {
        self.context
            .resize(winit::dpi::PhysicalSize::new(width, height));
        self.renderer
            .ensure_depth_texture(&self.context.device, width, height);
    }

    /// Build GPU resources for a freshly mounted scene
    pub fn attach_scene(&mut self, scene: &MountedScene) {
        self.renderer.attach(&self.context.device, scene);
    }

    /// Drop the current scene's GPU resources
    pub fn detach_scene(&mut self) {
        self.renderer.detach();
    }

    /// Render a single frame of the mounted scene
    pub fn render_frame(&mut self, scene: &mut MountedScene) -> Result<(), RenderError> {
        // Upload frame uniforms and whatever the animators dirtied
        self.renderer
            .sync(&self.context.queue, scene, self.context.aspect_ratio());

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

        self.renderer.render(&mut encoder, &view, self.background);

        self.context.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        Ok(())
    }

    /// Current surface size
    pub fn size(&self) -> (u32, u32) {
        (self.context.size.width, self.context.size.height)
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
}
