//! Solar - animated solar system model
//!
//! Opens a window (or attaches to the page canvas on the web) and redraws the
//! bodies every frame, advancing the animation clock before each draw.

use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::WindowId,
};

use solar::config::AppConfig;
use solar::scene::{self, compose_frame, SolarSystem};
use solar::systems::{AnimationClock, RenderSystem, WindowSystem};
use solar_render::RenderError;

/// Events delivered back to the event loop
///
/// Native builds create the renderer inline in `resumed`, so only the web
/// build sends these.
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
enum AppEvent {
    /// Renderer creation finished (asynchronously on the web)
    RendererReady(Result<RenderSystem, RenderError>),
}

/// Main application state
struct App {
    config: AppConfig,
    system: SolarSystem,
    clock: AnimationClock,
    window: Option<WindowSystem>,
    /// `None` until creation succeeds; stays `None` if it fails
    renderer: Option<RenderSystem>,
    #[cfg(target_arch = "wasm32")]
    proxy: Option<winit::event_loop::EventLoopProxy<AppEvent>>,
}

impl App {
    fn new(config: AppConfig, event_loop: &EventLoop<AppEvent>) -> Self {
        let system = scene::load_or_standard(config.scene.path.as_deref());
        log::info!("Scene '{}' with {} bodies", system.name, system.len());

        #[cfg(not(target_arch = "wasm32"))]
        let _ = event_loop;

        Self {
            clock: AnimationClock::from_config(&config.animation),
            config,
            system,
            window: None,
            renderer: None,
            #[cfg(target_arch = "wasm32")]
            proxy: Some(event_loop.create_proxy()),
        }
    }

    fn renderer_ready(&mut self, result: Result<RenderSystem, RenderError>) {
        match result {
            Ok(mut renderer) => {
                if let Some(window) = &self.window {
                    let size = window.window().inner_size();
                    renderer.resize(size.width, size.height);
                    window.request_redraw();
                }
                let (width, height) = renderer.size();
                log::info!("Renderer ready at {}x{}", width, height);
                self.renderer = Some(renderer);
            }
            Err(e) => {
                log::error!("Failed to initialize rendering: {}", e);
                report_failure(&format!("Unable to initialize rendering: {}", e));
            }
        }
    }

    fn draw_frame(&mut self, event_loop: &ActiveEventLoop) {
        let Some(renderer) = self.renderer.as_mut() else {
            return;
        };

        let angle = self.clock.advance();
        let layout = match compose_frame(&self.system, renderer.view_matrix(), angle) {
            Ok(layout) => layout,
            Err(e) => {
                log::error!("Failed to compose frame: {}", e);
                return;
            }
        };

        match renderer.render_frame(&layout) {
            Ok(()) => {}
            Err(RenderError::SurfaceLost) => {
                if let Some(window) = &self.window {
                    let size = window.window().inner_size();
                    renderer.resize(size.width, size.height);
                }
            }
            Err(RenderError::OutOfMemory) => {
                log::error!("GPU out of memory");
                event_loop.exit();
            }
            Err(e) => log::warn!("Skipping frame: {}", e),
        }
    }
}

impl ApplicationHandler<AppEvent> for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window = match WindowSystem::create(event_loop, &self.config.window) {
            Ok(window) => window,
            Err(e) => {
                log::error!("{}", e);
                event_loop.exit();
                return;
            }
        };
        let handle = window.window().clone();
        self.window = Some(window);

        #[cfg(not(target_arch = "wasm32"))]
        {
            let result = pollster::block_on(RenderSystem::new(handle, &self.config, &self.system));
            self.renderer_ready(result);
        }

        #[cfg(target_arch = "wasm32")]
        {
            if let Some(proxy) = self.proxy.take() {
                let config = self.config.clone();
                let system = self.system.clone();
                wasm_bindgen_futures::spawn_local(async move {
                    let result = RenderSystem::new(handle, &config, &system).await;
                    if proxy.send_event(AppEvent::RendererReady(result)).is_err() {
                        log::error!("Event loop closed before the renderer was ready");
                    }
                });
            }
        }
    }

    fn user_event(&mut self, _event_loop: &ActiveEventLoop, event: AppEvent) {
        match event {
            AppEvent::RendererReady(result) => self.renderer_ready(result),
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                log::info!("Close requested, exiting");
                event_loop.exit();
            }
            WindowEvent::Resized(size) => {
                if let Some(renderer) = &mut self.renderer {
                    renderer.resize(size.width, size.height);
                }
            }
            WindowEvent::RedrawRequested => {
                self.draw_frame(event_loop);
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }
            _ => {}
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn report_failure(_message: &str) {}

#[cfg(target_arch = "wasm32")]
fn report_failure(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    let (config, config_error) = AppConfig::load_or_default();

    // RUST_LOG still wins over the configured level
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.debug.log_level.as_str()),
    )
    .init();
    log::info!("Starting Solar");
    if let Some(e) = config_error {
        log::warn!("Failed to load config: {}. Using defaults.", e);
    }

    let event_loop = EventLoop::<AppEvent>::with_user_event()
        .build()
        .expect("Failed to create event loop");
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new(config, &event_loop);
    event_loop.run_app(&mut app).expect("Event loop error");
}

#[cfg(target_arch = "wasm32")]
fn main() {
    use winit::platform::web::EventLoopExtWebSys;

    console_error_panic_hook::set_once();

    let (config, config_error) = AppConfig::load_or_default();
    let level = config.debug.log_level.parse().unwrap_or(log::Level::Info);
    if console_log::init_with_level(level).is_err() {
        web_sys::console::error_1(&"Logger already initialized".into());
    }
    log::info!("Starting Solar");
    if let Some(e) = config_error {
        log::warn!("Failed to load config: {}. Using defaults.", e);
    }

    let event_loop = EventLoop::<AppEvent>::with_user_event()
        .build()
        .expect("Failed to create event loop");
    event_loop.set_control_flow(ControlFlow::Poll);

    let app = App::new(config, &event_loop);
    event_loop.spawn_app(app);
}
