use log::debug;

use super::device::{BufferHandle, GraphicsDevice};
use super::shader::ShaderProgram;
use crate::cloud_engine::particle::{ParticleSet, COLOR_COMPONENTS, POSITION_COMPONENTS};
use crate::utils::format_bytes;

/// Les deux buffers GPU du nuage (positions, couleurs).
///
/// Le contenu reflète toujours le `ParticleSet` passé au dernier `upload` :
/// l'indice i des deux buffers décrit la même particule.
pub struct GeometryBuffers {
    position_buffer: BufferHandle,
    color_buffer: BufferHandle,
    vertex_count: usize,
    /// Génération du lot actuellement sur le GPU ; `None` avant le premier upload.
    generation: Option<u64>,
}

impl GeometryBuffers {
    pub fn new<D: GraphicsDevice>(device: &mut D) -> Self {
        Self {
            position_buffer: device.create_buffer(),
            color_buffer: device.create_buffer(),
            vertex_count: 0,
            generation: None,
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    pub fn generation(&self) -> Option<u64> {
        self.generation
    }

    pub fn needs_upload(&self, generation: u64) -> bool {
        self.generation != Some(generation)
    }

    /// Remplace intégralement le contenu des deux buffers (`GL_STATIC_DRAW`).
    pub fn upload<D: GraphicsDevice>(&mut self, device: &mut D, set: &ParticleSet, generation: u64) {
        let positions = set.flatten_positions();
        let colors = set.flatten_colors();
        debug_assert_eq!(positions.len(), set.len() * POSITION_COMPONENTS);
        debug_assert_eq!(colors.len(), set.len() * COLOR_COMPONENTS);

        device.upload_static(self.position_buffer, &positions);
        device.upload_static(self.color_buffer, &colors);

        self.vertex_count = set.len();
        self.generation = Some(generation);

        debug!(
            "📦 Uploaded {} particles (generation {}) → {}",
            set.len(),
            generation,
            format_bytes((positions.len() + colors.len()) * std::mem::size_of::<f32>())
        );
    }

    /// Lie les buffers aux attributs du programme : 3 floats de position et
    /// 4 floats de couleur par sommet, contigus, non normalisés.
    pub fn bind<D: GraphicsDevice>(&self, device: &mut D, program: &ShaderProgram) {
        device.bind_vertex_attrib(
            self.position_buffer,
            program.position_attrib,
            POSITION_COMPONENTS as i32,
        );
        device.bind_vertex_attrib(
            self.color_buffer,
            program.color_attrib,
            COLOR_COMPONENTS as i32,
        );
    }

    pub fn delete<D: GraphicsDevice>(&mut self, device: &mut D) {
        for buffer in [&mut self.position_buffer, &mut self.color_buffer] {
            if *buffer != 0 {
                device.delete_buffer(*buffer);
                *buffer = 0;
            }
        }
        self.vertex_count = 0;
        self.generation = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cloud_engine::ParticleGenerator;
    use crate::renderer_engine::recording_device::{DeviceCall, RecordingDevice};

    #[test]
    fn test_upload_fills_both_buffers() {
        let mut device = RecordingDevice::new();
        let mut geometry = GeometryBuffers::new(&mut device);
        let set = ParticleGenerator::from_seed(5).generate(3);

        geometry.upload(&mut device, &set, 1);

        assert_eq!(device.buffers[&geometry.position_buffer], set.flatten_positions());
        assert_eq!(device.buffers[&geometry.color_buffer], set.flatten_colors());
        assert_eq!(device.buffers[&geometry.position_buffer].len(), 9);
        assert_eq!(device.buffers[&geometry.color_buffer].len(), 12);
        assert_eq!(geometry.vertex_count(), 3);
        assert!(!geometry.needs_upload(1));
        assert!(geometry.needs_upload(2));
    }

    #[test]
    fn test_upload_replaces_content_wholesale() {
        let mut device = RecordingDevice::new();
        let mut geometry = GeometryBuffers::new(&mut device);
        let mut generator = ParticleGenerator::from_seed(5);

        geometry.upload(&mut device, &generator.generate(100), 1);
        geometry.upload(&mut device, &generator.generate(2), 2);

        assert_eq!(device.buffers[&geometry.position_buffer].len(), 6);
        assert_eq!(device.buffers[&geometry.color_buffer].len(), 8);
        assert_eq!(geometry.vertex_count(), 2);
    }

    #[test]
    fn test_empty_upload() {
        let mut device = RecordingDevice::new();
        let mut geometry = GeometryBuffers::new(&mut device);

        assert!(geometry.needs_upload(0));
        geometry.upload(&mut device, &ParticleSet::empty(), 0);

        assert_eq!(geometry.vertex_count(), 0);
        assert_eq!(device.upload_count(), 2);
        assert!(device.buffers.values().all(|b| b.is_empty()));
    }

    #[test]
    fn test_bind_uses_tightly_packed_components() {
        let mut device = RecordingDevice::new();
        let geometry = GeometryBuffers::new(&mut device);
        let program = ShaderProgram {
            id: 9,
            position_attrib: 4,
            color_attrib: 7,
            model_view_uniform: 0,
            projection_uniform: 1,
        };
        device.clear_calls();

        geometry.bind(&mut device, &program);

        assert_eq!(
            device.calls,
            vec![
                DeviceCall::BindVertexAttrib {
                    buffer: geometry.position_buffer,
                    location: 4,
                    components: 3
                },
                DeviceCall::BindVertexAttrib {
                    buffer: geometry.color_buffer,
                    location: 7,
                    components: 4
                },
            ]
        );
    }

    #[test]
    fn test_delete_is_idempotent() {
        let mut device = RecordingDevice::new();
        let mut geometry = GeometryBuffers::new(&mut device);
        geometry.delete(&mut device);
        geometry.delete(&mut device);

        let deletes = device
            .calls
            .iter()
            .filter(|c| matches!(c, DeviceCall::DeleteBuffer(_)))
            .count();
        assert_eq!(deletes, 2);
    }
}
