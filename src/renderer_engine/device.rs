use glam::Mat4;
use std::ffi::CStr;
use std::fmt;

pub type ShaderHandle = u32;
pub type ProgramHandle = u32;
pub type BufferHandle = u32;
pub type AttribLocation = u32;
pub type UniformLocation = i32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShaderKind {
    Vertex,
    Fragment,
}

impl fmt::Display for ShaderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShaderKind::Vertex => write!(f, "vertex"),
            ShaderKind::Fragment => write!(f, "fragment"),
        }
    }
}

/// Sous-ensemble de l'API OpenGL utilisé par le pipeline.
///
/// `GlDevice` l'implémente avec de vrais appels `gl::*` ; les tests utilisent
/// un périphérique qui enregistre les appels.
///
/// Les localisations renvoyées par `attrib_location` / `uniform_location`
/// suivent la convention GL : `-1` quand le nom n'existe pas.
pub trait GraphicsDevice {
    fn viewport(&mut self, x: i32, y: i32, width: i32, height: i32);

    fn create_shader(&mut self, kind: ShaderKind) -> ShaderHandle;
    /// Charge la source et compile ; renvoie le statut de compilation.
    fn compile_shader(&mut self, shader: ShaderHandle, source: &CStr) -> bool;
    fn shader_info_log(&self, shader: ShaderHandle) -> String;
    fn delete_shader(&mut self, shader: ShaderHandle);

    fn create_program(&mut self) -> ProgramHandle;
    fn attach_shader(&mut self, program: ProgramHandle, shader: ShaderHandle);
    /// Lie le programme ; renvoie le statut de l'édition de liens.
    fn link_program(&mut self, program: ProgramHandle) -> bool;
    fn program_info_log(&self, program: ProgramHandle) -> String;
    fn delete_program(&mut self, program: ProgramHandle);
    fn use_program(&mut self, program: ProgramHandle);

    fn attrib_location(&self, program: ProgramHandle, name: &CStr) -> i32;
    fn uniform_location(&self, program: ProgramHandle, name: &CStr) -> i32;

    fn create_buffer(&mut self) -> BufferHandle;
    /// Remplace tout le contenu du buffer (`GL_STATIC_DRAW`).
    fn upload_static(&mut self, buffer: BufferHandle, data: &[f32]);
    fn delete_buffer(&mut self, buffer: BufferHandle);

    fn clear(&mut self, color: [f32; 4], depth: f32);
    /// Active le test de profondeur avec la comparaison `GL_LEQUAL`.
    fn enable_depth_test_less_equal(&mut self);
    fn uniform_matrix4(&mut self, location: UniformLocation, matrix: &Mat4);
    /// Lie `buffer` à l'attribut `location` : `components` floats par sommet,
    /// non normalisés, contigus (stride 0), puis active l'attribut.
    fn bind_vertex_attrib(
        &mut self,
        buffer: BufferHandle,
        location: AttribLocation,
        components: i32,
    );
    fn draw_points(&mut self, first: i32, count: i32);
}
