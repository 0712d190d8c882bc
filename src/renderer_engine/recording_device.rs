//! Périphérique graphique factice : enregistre chaque appel au lieu de
//! parler à un driver. Sert aux tests du pipeline sans contexte OpenGL.

use glam::Mat4;
use std::collections::HashMap;
use std::ffi::CStr;

use super::device::{
    AttribLocation, BufferHandle, GraphicsDevice, ProgramHandle, ShaderHandle, ShaderKind,
    UniformLocation,
};

#[derive(Debug, Clone, PartialEq)]
pub enum DeviceCall {
    Viewport(i32, i32, i32, i32),
    CreateShader(ShaderKind, ShaderHandle),
    CompileShader(ShaderHandle),
    DeleteShader(ShaderHandle),
    CreateProgram(ProgramHandle),
    AttachShader(ProgramHandle, ShaderHandle),
    LinkProgram(ProgramHandle),
    DeleteProgram(ProgramHandle),
    UseProgram(ProgramHandle),
    CreateBuffer(BufferHandle),
    UploadStatic { buffer: BufferHandle, len: usize },
    DeleteBuffer(BufferHandle),
    Clear { color: [f32; 4], depth: f32 },
    DepthTestLessEqual,
    UniformMatrix4(UniformLocation, Mat4),
    BindVertexAttrib {
        buffer: BufferHandle,
        location: AttribLocation,
        components: i32,
    },
    DrawPoints { first: i32, count: i32 },
}

#[derive(Debug, Default)]
pub struct RecordingDevice {
    pub calls: Vec<DeviceCall>,
    /// Contenu courant de chaque buffer, tel que le « GPU » le verrait.
    pub buffers: HashMap<BufferHandle, Vec<f32>>,
    /// Fait échouer la compilation des shaders de ce type.
    pub fail_compile: Option<ShaderKind>,
    pub fail_link: bool,
    /// Noms d'attributs / uniforms que le programme lié « n'expose pas ».
    pub missing_names: Vec<String>,
    next_handle: u32,
    shader_kinds: HashMap<ShaderHandle, ShaderKind>,
}

impl RecordingDevice {
    pub fn new() -> Self {
        Self::default()
    }

    fn next(&mut self) -> u32 {
        self.next_handle += 1;
        self.next_handle
    }

    fn location_of(&self, name: &CStr, base: i32) -> i32 {
        let name = name.to_string_lossy();
        if self.missing_names.iter().any(|m| *m == name) {
            return -1;
        }
        match name.as_ref() {
            "aVertexPosition" | "uModelViewMatrix" => base,
            "aColor" | "uProjectionMatrix" => base + 1,
            _ => -1,
        }
    }

    pub fn clear_calls(&mut self) {
        self.calls.clear();
    }

    pub fn draw_calls(&self) -> Vec<(i32, i32)> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                DeviceCall::DrawPoints { first, count } => Some((*first, *count)),
                _ => None,
            })
            .collect()
    }

    pub fn upload_count(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, DeviceCall::UploadStatic { .. }))
            .count()
    }

    pub fn last_viewport(&self) -> Option<(i32, i32, i32, i32)> {
        self.calls.iter().rev().find_map(|c| match c {
            DeviceCall::Viewport(x, y, w, h) => Some((*x, *y, *w, *h)),
            _ => None,
        })
    }

    pub fn deleted_shaders(&self) -> Vec<ShaderHandle> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                DeviceCall::DeleteShader(s) => Some(*s),
                _ => None,
            })
            .collect()
    }
}

impl GraphicsDevice for RecordingDevice {
    fn viewport(&mut self, x: i32, y: i32, width: i32, height: i32) {
        self.calls.push(DeviceCall::Viewport(x, y, width, height));
    }

    fn create_shader(&mut self, kind: ShaderKind) -> ShaderHandle {
        let handle = self.next();
        self.shader_kinds.insert(handle, kind);
        self.calls.push(DeviceCall::CreateShader(kind, handle));
        handle
    }

    fn compile_shader(&mut self, shader: ShaderHandle, _source: &CStr) -> bool {
        self.calls.push(DeviceCall::CompileShader(shader));
        self.fail_compile != self.shader_kinds.get(&shader).copied()
    }

    fn shader_info_log(&self, _shader: ShaderHandle) -> String {
        "0:3(12): error: syntax error, unexpected IDENTIFIER".to_string()
    }

    fn delete_shader(&mut self, shader: ShaderHandle) {
        self.calls.push(DeviceCall::DeleteShader(shader));
    }

    fn create_program(&mut self) -> ProgramHandle {
        let handle = self.next();
        self.calls.push(DeviceCall::CreateProgram(handle));
        handle
    }

    fn attach_shader(&mut self, program: ProgramHandle, shader: ShaderHandle) {
        self.calls.push(DeviceCall::AttachShader(program, shader));
    }

    fn link_program(&mut self, program: ProgramHandle) -> bool {
        self.calls.push(DeviceCall::LinkProgram(program));
        !self.fail_link
    }

    fn program_info_log(&self, _program: ProgramHandle) -> String {
        "error: vertex output 'vColor' not consumed".to_string()
    }

    fn delete_program(&mut self, program: ProgramHandle) {
        self.calls.push(DeviceCall::DeleteProgram(program));
    }

    fn use_program(&mut self, program: ProgramHandle) {
        self.calls.push(DeviceCall::UseProgram(program));
    }

    fn attrib_location(&self, _program: ProgramHandle, name: &CStr) -> i32 {
        self.location_of(name, 0)
    }

    fn uniform_location(&self, _program: ProgramHandle, name: &CStr) -> i32 {
        self.location_of(name, 10)
    }

    fn create_buffer(&mut self) -> BufferHandle {
        let handle = self.next();
        self.buffers.insert(handle, Vec::new());
        self.calls.push(DeviceCall::CreateBuffer(handle));
        handle
    }

    fn upload_static(&mut self, buffer: BufferHandle, data: &[f32]) {
        self.buffers.insert(buffer, data.to_vec());
        self.calls.push(DeviceCall::UploadStatic {
            buffer,
            len: data.len(),
        });
    }

    fn delete_buffer(&mut self, buffer: BufferHandle) {
        self.buffers.remove(&buffer);
        self.calls.push(DeviceCall::DeleteBuffer(buffer));
    }

    fn clear(&mut self, color: [f32; 4], depth: f32) {
        self.calls.push(DeviceCall::Clear { color, depth });
    }

    fn enable_depth_test_less_equal(&mut self) {
        self.calls.push(DeviceCall::DepthTestLessEqual);
    }

    fn uniform_matrix4(&mut self, location: UniformLocation, matrix: &Mat4) {
        self.calls.push(DeviceCall::UniformMatrix4(location, *matrix));
    }

    fn bind_vertex_attrib(
        &mut self,
        buffer: BufferHandle,
        location: AttribLocation,
        components: i32,
    ) {
        self.calls.push(DeviceCall::BindVertexAttrib {
            buffer,
            location,
            components,
        });
    }

    fn draw_points(&mut self, first: i32, count: i32) {
        self.calls.push(DeviceCall::DrawPoints { first, count });
    }
}
