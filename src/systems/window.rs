//! Window management system
//!
//! Creates the native window, or on the web attaches to the page's canvas.

use std::sync::Arc;
use winit::{
    event_loop::ActiveEventLoop,
    window::{Fullscreen, Window, WindowAttributes},
};
use crate::config::WindowConfig;

/// Owns the application window
pub struct WindowSystem {
    window: Arc<Window>,
}

impl WindowSystem {
    /// Create window from config
    ///
    /// On the web, an existing canvas keeps the size the page gave it; the
    /// configured size only applies to windows and appended canvases.
    pub fn create(
        event_loop: &ActiveEventLoop,
        config: &WindowConfig,
    ) -> Result<Self, WindowError> {
        #[cfg(not(target_arch = "wasm32"))]
        let attrs = window_attributes(config, true);

        #[cfg(target_arch = "wasm32")]
        let attrs = {
            use winit::platform::web::WindowAttributesExtWebSys;

            match find_canvas(&config.canvas_id) {
                Some(canvas) => window_attributes(config, false).with_canvas(Some(canvas)),
                None => {
                    log::warn!("No canvas with id '{}', appending one", config.canvas_id);
                    window_attributes(config, true).with_append(true)
                }
            }
        };

        let window = Arc::new(
            event_loop
                .create_window(attrs)
                .map_err(|e| WindowError::CreationFailed(e.to_string()))?,
        );

        Ok(Self { window })
    }

    /// Get window reference (for RenderContext creation)
    pub fn window(&self) -> &Arc<Window> {
        &self.window
    }

    /// Request a redraw
    pub fn request_redraw(&self) {
        self.window.request_redraw();
    }
}

/// Title and fullscreen from config; the configured size only when `sized`
fn window_attributes(config: &WindowConfig, sized: bool) -> WindowAttributes {
    let mut attrs = Window::default_attributes().with_title(&config.title);

    if sized {
        attrs = attrs.with_inner_size(winit::dpi::LogicalSize::new(config.width, config.height));
    }

    if config.fullscreen {
        attrs = attrs.with_fullscreen(Some(Fullscreen::Borderless(None)));
    }

    attrs
}

#[cfg(target_arch = "wasm32")]
fn find_canvas(id: &str) -> Option<web_sys::HtmlCanvasElement> {
    use wasm_bindgen::JsCast;

    web_sys::window()?
        .document()?
        .get_element_by_id(id)?
        .dyn_into::<web_sys::HtmlCanvasElement>()
        .ok()
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
