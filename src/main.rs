//! Vitrine - decorative animated 3D scenes for marketing pages
//!
//! Opens a window and renders the configured showcase scene.

use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::WindowId,
};

use vitrine::config::AppConfig;
use vitrine::input::PointerTracker;
use vitrine::systems::render::{RenderError, RenderSystem};
use vitrine::systems::simulation::SimulationSystem;
use vitrine::systems::window::WindowSystem;
use vitrine::Showcase;
use vitrine_core::{MountedScene, Scene};

/// Main application state
struct App {
    config: AppConfig,
    window_system: Option<WindowSystem>,
    render_system: Option<RenderSystem>,
    scene: Option<MountedScene>,
    simulation: SimulationSystem,
    pointer: PointerTracker,
}

impl App {
    fn new(config: AppConfig) -> Self {
        let pointer = PointerTracker::new(config.window.width, config.window.height);

        Self {
            config,
            window_system: None,
            render_system: None,
            scene: None,
            simulation: SimulationSystem::new(),
            pointer,
        }
    }

    /// Resolve the scene template from config: a RON file if one is set,
    /// otherwise the named built-in showcase
    fn load_scene_template(&self) -> Scene {
        if let Some(ref path) = self.config.showcase.scene_path {
            match Scene::load(path) {
                Ok(scene) => return scene,
                Err(e) => {
                    log::warn!("Failed to load scene '{}': {}. Falling back.", path, e);
                }
            }
        }

        let showcase = Showcase::from_name(&self.config.showcase.name).unwrap_or_else(|| {
            log::warn!(
                "Unknown showcase '{}', defaulting to particles",
                self.config.showcase.name
            );
            Showcase::Particles
        });
        showcase.scene()
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window_system.is_some() {
            return;
        }

        let window_system = WindowSystem::create(event_loop, &self.config.window)
            .expect("Failed to create window");

        let mut render_system = RenderSystem::new(
            window_system.window().clone(),
            self.config.window.vsync,
            self.config.rendering.background_color,
        );

        let template = self.load_scene_template();
        let mounted = MountedScene::from_template(&template, self.config.showcase.seed);
        render_system.attach_scene(&mounted);

        window_system.request_redraw();

        self.window_system = Some(window_system);
        self.render_system = Some(render_system);
        self.scene = Some(mounted);
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }

            WindowEvent::Resized(physical_size) => {
                if let Some(render_system) = &mut self.render_system {
                    render_system.resize(physical_size.width, physical_size.height);
                }
                self.pointer.resize(physical_size.width, physical_size.height);
            }

            WindowEvent::CursorMoved { position, .. } => {
                self.pointer.record(position.x, position.y);
                if let Some((x, y)) = self.pointer.normalized() {
                    log::trace!("pointer at ({:.2}, {:.2})", x, y);
                }
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if event.state.is_pressed() {
                    if let PhysicalKey::Code(key) = event.physical_key {
                        match key {
                            KeyCode::Escape => event_loop.exit(),
                            KeyCode::KeyF => {
                                if let Some(window_system) = &self.window_system {
                                    window_system.toggle_fullscreen();
                                }
                            }
                            _ => {}
                        }
                    }
                }
            }

            WindowEvent::RedrawRequested => {
                let (Some(window_system), Some(render_system), Some(scene)) = (
                    &self.window_system,
                    &mut self.render_system,
                    &mut self.scene,
                ) else {
                    return;
                };

                let result = self.simulation.update(scene);
                window_system.update_title(&scene.name, result.elapsed);

                match render_system.render_frame(scene) {
                    Ok(()) => {}
                    Err(RenderError::SurfaceLost) => {
                        let (width, height) = render_system.size();
                        render_system.resize(width, height);
                    }
                    Err(RenderError::OutOfMemory) => {
                        log::error!("GPU out of memory, exiting");
                        event_loop.exit();
                        return;
                    }
                    Err(e) => {
                        log::warn!("Render error: {}", e);
                    }
                }

                window_system.request_redraw();
            }

            _ => {}
        }
    }
}

fn main() {
    let config = AppConfig::load().unwrap_or_else(|e| {
        eprintln!("Failed to load config: {}. Using defaults.", e);
        AppConfig::default()
    });
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.debug.log_level.clone()),
    )
    .init();
    log::info!("Starting Vitrine");

    let event_loop = EventLoop::new().expect("Failed to create event loop");
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new(config);
    event_loop.run_app(&mut app).expect("Event loop error");
}
