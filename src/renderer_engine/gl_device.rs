use gl::types::*;
use glam::Mat4;
use log::debug;
use std::ffi::CStr;
use std::ptr;

use super::device::{
    AttribLocation, BufferHandle, GraphicsDevice, ProgramHandle, ShaderHandle, ShaderKind,
    UniformLocation,
};

/// Implémentation de [`GraphicsDevice`] sur le contexte OpenGL courant.
///
/// Suppose que les pointeurs de fonctions `gl` sont chargés et que le
/// contexte reste courant sur ce thread pendant toute la durée de vie.
pub struct GlDevice {
    vao: u32,
}

impl GlDevice {
    pub fn new() -> Self {
        let mut vao = 0;
        unsafe {
            // Le profil core impose un VAO lié pour tout appel de dessin.
            gl::GenVertexArrays(1, &mut vao);
            gl::BindVertexArray(vao);
            // Nécessaire pour que `gl_PointSize` soit pris en compte.
            gl::Enable(gl::PROGRAM_POINT_SIZE);
        }
        debug!("GlDevice ready (vao = {})", vao);
        Self { vao }
    }
}

impl Default for GlDevice {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for GlDevice {
    fn drop(&mut self) {
        if self.vao != 0 {
            unsafe { gl::DeleteVertexArrays(1, &self.vao) };
            self.vao = 0;
        }
    }
}

fn read_info_log(len: GLint, fetch: impl FnOnce(GLsizei, *mut GLchar)) -> String {
    if len <= 0 {
        return String::new();
    }
    let mut buf = vec![0u8; len as usize];
    fetch(len, buf.as_mut_ptr() as *mut GLchar);
    String::from_utf8_lossy(&buf)
        .trim_matches(char::from(0))
        .trim_end()
        .to_string()
}

impl GraphicsDevice for GlDevice {
    fn viewport(&mut self, x: i32, y: i32, width: i32, height: i32) {
        unsafe { gl::Viewport(x, y, width, height) };
    }

    fn create_shader(&mut self, kind: ShaderKind) -> ShaderHandle {
        let ty = match kind {
            ShaderKind::Vertex => gl::VERTEX_SHADER,
            ShaderKind::Fragment => gl::FRAGMENT_SHADER,
        };
        unsafe { gl::CreateShader(ty) }
    }

    fn compile_shader(&mut self, shader: ShaderHandle, source: &CStr) -> bool {
        let mut success = gl::FALSE as GLint;
        unsafe {
            gl::ShaderSource(shader, 1, &source.as_ptr(), ptr::null());
            gl::CompileShader(shader);
            gl::GetShaderiv(shader, gl::COMPILE_STATUS, &mut success);
        }
        success == gl::TRUE as GLint
    }

    fn shader_info_log(&self, shader: ShaderHandle) -> String {
        let mut len = 0;
        unsafe { gl::GetShaderiv(shader, gl::INFO_LOG_LENGTH, &mut len) };
        read_info_log(len, |len, buf| unsafe {
            gl::GetShaderInfoLog(shader, len, ptr::null_mut(), buf)
        })
    }

    fn delete_shader(&mut self, shader: ShaderHandle) {
        unsafe { gl::DeleteShader(shader) };
    }

    fn create_program(&mut self) -> ProgramHandle {
        unsafe { gl::CreateProgram() }
    }

    fn attach_shader(&mut self, program: ProgramHandle, shader: ShaderHandle) {
        unsafe { gl::AttachShader(program, shader) };
    }

    fn link_program(&mut self, program: ProgramHandle) -> bool {
        let mut success = gl::FALSE as GLint;
        unsafe {
            gl::LinkProgram(program);
            gl::GetProgramiv(program, gl::LINK_STATUS, &mut success);
        }
        success == gl::TRUE as GLint
    }

    fn program_info_log(&self, program: ProgramHandle) -> String {
        let mut len = 0;
        unsafe { gl::GetProgramiv(program, gl::INFO_LOG_LENGTH, &mut len) };
        read_info_log(len, |len, buf| unsafe {
            gl::GetProgramInfoLog(program, len, ptr::null_mut(), buf)
        })
    }

    fn delete_program(&mut self, program: ProgramHandle) {
        unsafe { gl::DeleteProgram(program) };
    }

    fn use_program(&mut self, program: ProgramHandle) {
        unsafe { gl::UseProgram(program) };
    }

    fn attrib_location(&self, program: ProgramHandle, name: &CStr) -> i32 {
        unsafe { gl::GetAttribLocation(program, name.as_ptr()) }
    }

    fn uniform_location(&self, program: ProgramHandle, name: &CStr) -> i32 {
        unsafe { gl::GetUniformLocation(program, name.as_ptr()) }
    }

    fn create_buffer(&mut self) -> BufferHandle {
        let mut buffer = 0;
        unsafe { gl::GenBuffers(1, &mut buffer) };
        buffer
    }

    fn upload_static(&mut self, buffer: BufferHandle, data: &[f32]) {
        let bytes: &[u8] = bytemuck::cast_slice(data);
        unsafe {
            gl::BindBuffer(gl::ARRAY_BUFFER, buffer);
            gl::BufferData(
                gl::ARRAY_BUFFER,
                bytes.len() as GLsizeiptr,
                if bytes.is_empty() {
                    ptr::null()
                } else {
                    bytes.as_ptr() as *const _
                },
                gl::STATIC_DRAW,
            );
        }
    }

    fn delete_buffer(&mut self, buffer: BufferHandle) {
        unsafe { gl::DeleteBuffers(1, &buffer) };
    }

    fn clear(&mut self, color: [f32; 4], depth: f32) {
        unsafe {
            gl::ClearColor(color[0], color[1], color[2], color[3]);
            gl::ClearDepth(depth as GLdouble);
            gl::Clear(gl::COLOR_BUFFER_BIT | gl::DEPTH_BUFFER_BIT);
        }
    }

    fn enable_depth_test_less_equal(&mut self) {
        unsafe {
            gl::Enable(gl::DEPTH_TEST);
            gl::DepthFunc(gl::LEQUAL);
        }
    }

    fn uniform_matrix4(&mut self, location: UniformLocation, matrix: &Mat4) {
        let cols = matrix.to_cols_array();
        unsafe { gl::UniformMatrix4fv(location, 1, gl::FALSE, cols.as_ptr()) };
    }

    fn bind_vertex_attrib(
        &mut self,
        buffer: BufferHandle,
        location: AttribLocation,
        components: i32,
    ) {
        unsafe {
            gl::BindBuffer(gl::ARRAY_BUFFER, buffer);
            gl::VertexAttribPointer(location, components, gl::FLOAT, gl::FALSE, 0, ptr::null());
            gl::EnableVertexAttribArray(location);
        }
    }

    fn draw_points(&mut self, first: i32, count: i32) {
        unsafe { gl::DrawArrays(gl::POINTS, first, count) };
    }
}
