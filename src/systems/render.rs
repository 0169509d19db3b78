//! GPU rendering system
//!
//! Owns the render context and the planet pipeline. Each body gets one
//! uniform slot, assigned in draw order, so drawing slots `0..n` draws the
//! bodies in the order the layout emits them.

use std::collections::HashMap;
use std::sync::Arc;

use winit::window::Window;

use solar_math::mat4::{Mat4, IDENTITY};
use solar_render::{
    BodyUniforms, FrameUniforms, PlanetPipeline, RenderContext, RenderError, SphereMesh, ViewCamera,
};

use crate::config::AppConfig;
use crate::scene::{compose_frame, FrameLayout, SolarSystem};

/// Manages GPU rendering
pub struct RenderSystem {
    context: RenderContext,
    pipeline: PlanetPipeline,
    camera: ViewCamera,
    clear_color: wgpu::Color,
    /// Slot of each body, indexed by table position
    body_slots: Vec<usize>,
    names: HashMap<String, usize>,
}

impl RenderSystem {
    /// Create the context, upload the sphere and allocate one slot per body
    pub async fn new(
        window: Arc<Window>,
        config: &AppConfig,
        system: &SolarSystem,
    ) -> Result<Self, RenderError> {
        let context = RenderContext::new(window, config.window.vsync).await?;

        let mesh = SphereMesh::new(config.rendering.sphere_slices, config.rendering.sphere_stacks);
        log::info!(
            "Sphere mesh: {} vertices, {} triangles",
            mesh.vertex_count(),
            mesh.triangle_count()
        );

        let mut pipeline = PlanetPipeline::new(&context.device, context.config.format, &mesh);
        pipeline.ensure_body_slots(&context.device, system.len());
        log::debug!("Allocated {} body slots", pipeline.slot_count());
        pipeline.ensure_depth_texture(&context.device, context.size.width, context.size.height);

        let (body_slots, names) = assign_slots(system)?;

        let bg = config.rendering.background_color;
        let mut render_system = Self {
            context,
            pipeline,
            camera: config.camera.to_camera(),
            clear_color: wgpu::Color {
                r: bg[0] as f64,
                g: bg[1] as f64,
                b: bg[2] as f64,
                a: bg[3] as f64,
            },
            body_slots,
            names,
        };
        render_system.write_projection();

        Ok(render_system)
    }

    /// Handle window resize: reconfigure the surface and rebuild the projection
    pub fn resize(&mut self, width: u32, height: u32) {
        self.context.resize(winit::dpi::PhysicalSize::new(width, height));
        self.pipeline
            .ensure_depth_texture(&self.context.device, self.context.size.width, self.context.size.height);
        self.write_projection();
    }

    fn write_projection(&self) {
        let projection = self.camera.projection(self.context.aspect_ratio());
        self.pipeline
            .update_frame(&self.context.queue, &FrameUniforms { projection });
    }

    /// Uniform slot holding the body called `name`
    pub fn slot_for(&self, name: &str) -> Option<usize> {
        self.names.get(name).copied()
    }

    /// Viewing transform loaded at the bottom of the matrix stack
    pub fn view_matrix(&self) -> Mat4 {
        self.camera.view_matrix()
    }

    /// Write every body's uniforms, clear, and draw the frame
    pub fn render_frame(&mut self, layout: &FrameLayout) -> Result<(), RenderError> {
        for draw in layout.iter() {
            let Some(&slot) = self.body_slots.get(draw.index) else {
                log::warn!("No uniform slot for body {}", draw.index);
                continue;
            };
            let written = self.pipeline.write_body(
                &self.context.queue,
                slot,
                &BodyUniforms::new(draw.model_view, draw.color),
            );
            if !written {
                log::warn!("Uniform slot {} not allocated, body {} not updated", slot, draw.index);
            }
        }

        let output = self.context.surface.get_current_texture()?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .context
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Render Encoder"),
            });

        self.pipeline
            .render(&mut encoder, &view, self.clear_color, layout.len());

        self.context.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        Ok(())
    }

    /// Get current surface size
    pub fn size(&self) -> (u32, u32) {
        (self.context.size.width, self.context.size.height)
    }
}

/// Assign slots in draw order. Returns the slot of each body by table
/// position, and the same mapping keyed by name.
fn assign_slots(system: &SolarSystem) -> Result<(Vec<usize>, HashMap<String, usize>), RenderError> {
    let order = compose_frame(system, IDENTITY, 0.0).map_err(|e| RenderError::Other(e.to_string()))?;

    let mut body_slots = vec![0; system.len()];
    let mut names = HashMap::with_capacity(system.len());
    for (slot, draw) in order.iter().enumerate() {
        body_slots[draw.index] = slot;
        names.insert(system.bodies[draw.index].name.clone(), slot);
    }

    Ok((body_slots, names))
}
