use crate::cloud_engine::ParticleSet;
use crate::renderer_engine::renderer::FrameReport;
use crate::renderer_engine::shader_library::ShaderVariant;
use crate::renderer_engine::viewport::ViewportState;

pub trait RendererEngine {
    /// Nouvelle taille du framebuffer (démarrage, redimensionnement).
    fn resize(&mut self, width: i32, height: i32);
    fn viewport(&self) -> ViewportState;

    /// `true` si le lot de cette génération n'est pas encore sur le GPU.
    fn needs_upload(&self, generation: u64) -> bool;
    fn upload(&mut self, particles: &ParticleSet, generation: u64);

    fn render_frame(&mut self) -> FrameReport;

    fn select_shader(&mut self, alternate: bool) -> ShaderVariant;
    fn close(&mut self);
}
