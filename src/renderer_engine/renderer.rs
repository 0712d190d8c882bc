use anyhow::{Context, Result};
use glam::Mat4;
use log::info;

use super::camera::Camera;
use super::config::RendererConfig;
use super::device::GraphicsDevice;
use super::geometry::GeometryBuffers;
use super::r#trait::RendererEngine;
use super::shader::{ShaderProgram, ShaderSources};
use super::shader_library::{ShaderLibrary, ShaderVariant};
use super::viewport::ViewportState;
use crate::cloud_engine::ParticleSet;

const CLEAR_COLOR: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
const CLEAR_DEPTH: f32 = 1.0;

/// Ce qu'une frame a envoyé au GPU.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameReport {
    pub projection: Mat4,
    pub model_view: Mat4,
    pub vertex_count: usize,
    pub variant: ShaderVariant,
}

/// Rendu du nuage de points sur un [`GraphicsDevice`].
pub struct Renderer<D: GraphicsDevice> {
    device: D,
    shaders: ShaderLibrary,
    geometry: GeometryBuffers,
    viewport: ViewportState,
    camera: Camera,
    closed: bool,
}

impl<D: GraphicsDevice> Renderer<D> {
    /// Construit le programme, alloue les buffers et règle le viewport initial.
    ///
    /// Un échec de compilation ou de liaison est fatal : pas de mode dégradé.
    pub fn new(mut device: D, width: i32, height: i32, config: &RendererConfig) -> Result<Self> {
        let sources = ShaderSources::particles(config.point_size);
        let program = ShaderProgram::build(&mut device, &sources)
            .context("building the particle shader program")?;

        let geometry = GeometryBuffers::new(&mut device);

        let mut viewport = ViewportState::default();
        viewport.resize(&mut device, width, height);

        info!(
            "✅ Renderer ready ({} x {}, point size {:.1})",
            viewport.width, viewport.height, config.point_size
        );

        Ok(Self {
            device,
            shaders: ShaderLibrary::new(program),
            geometry,
            viewport,
            camera: Camera::default(),
            closed: false,
        })
    }

    pub fn device(&self) -> &D {
        &self.device
    }

    pub fn device_mut(&mut self) -> &mut D {
        &mut self.device
    }

    pub fn shaders(&self) -> &ShaderLibrary {
        &self.shaders
    }

    /// Point d'extension de la bascule de shader : construit et enregistre
    /// le programme de la variante alternative.
    pub fn register_alternate_shader(&mut self, sources: &ShaderSources) -> Result<()> {
        let program = ShaderProgram::build(&mut self.device, sources)
            .context("building the alternate shader program")?;
        if let Some(previous) = self.shaders.register_alternate(program) {
            previous.delete(&mut self.device);
        }
        // `build` a activé le nouveau programme ; on revient à celui sélectionné.
        let active = self.shaders.active().id;
        self.device.use_program(active);
        Ok(())
    }

    pub fn vertex_count(&self) -> usize {
        self.geometry.vertex_count()
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }
}

impl<D: GraphicsDevice> RendererEngine for Renderer<D> {
    fn resize(&mut self, width: i32, height: i32) {
        self.viewport.resize(&mut self.device, width, height);
    }

    fn viewport(&self) -> ViewportState {
        self.viewport
    }

    fn needs_upload(&self, generation: u64) -> bool {
        self.geometry.needs_upload(generation)
    }

    fn upload(&mut self, particles: &ParticleSet, generation: u64) {
        self.geometry.upload(&mut self.device, particles, generation);
    }

    /// Dessine une frame :
    /// 1. efface couleur (noir opaque) et profondeur (1.0), test `LEQUAL` ;
    /// 2. projection perspective 45° avec le ratio courant ;
    /// 3. model-view fixe recalculée depuis l'identité ;
    /// 4. envoi des deux matrices ;
    /// 5. liaison des attributs position / couleur ;
    /// 6. `GL_POINTS` sur exactement le nombre de particules envoyées.
    fn render_frame(&mut self) -> FrameReport {
        let device = &mut self.device;

        device.enable_depth_test_less_equal();
        device.clear(CLEAR_COLOR, CLEAR_DEPTH);

        let projection = self.camera.projection(self.viewport.aspect());
        let model_view = self.camera.model_view();

        let program = *self.shaders.active();
        device.use_program(program.id);
        device.uniform_matrix4(program.projection_uniform, &projection);
        device.uniform_matrix4(program.model_view_uniform, &model_view);

        self.geometry.bind(device, &program);

        let vertex_count = self.geometry.vertex_count();
        device.draw_points(0, vertex_count as i32);

        FrameReport {
            projection,
            model_view,
            vertex_count,
            variant: self.shaders.selected(),
        }
    }

    fn select_shader(&mut self, alternate: bool) -> ShaderVariant {
        self.shaders.toggle(alternate)
    }

    fn close(&mut self) {
        if self.closed {
            return;
        }
        self.geometry.delete(&mut self.device);
        self.shaders.delete_all(&mut self.device);
        self.closed = true;
        info!("🧹 Renderer resources released");
    }
}
