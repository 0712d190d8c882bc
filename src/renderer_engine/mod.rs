pub mod r#trait;
pub use r#trait::RendererEngine;

pub mod error;
pub use self::error::RendererError;

pub mod device;
pub use self::device::{GraphicsDevice, ShaderKind};
pub mod gl_device;
pub use self::gl_device::GlDevice;
#[cfg(any(test, feature = "test_helpers"))]
pub mod recording_device;

pub mod shader;
pub use self::shader::{ShaderProgram, ShaderSources};
pub mod shader_library;
pub use self::shader_library::{ShaderLibrary, ShaderVariant};

pub mod camera;
pub use self::camera::Camera;
pub mod viewport;
pub use self::viewport::ViewportState;
pub mod geometry;
pub use self::geometry::GeometryBuffers;

pub mod renderer;
pub use self::renderer::{FrameReport, Renderer};

pub mod config;
pub use self::config::RendererConfig;

pub mod tools;
pub use self::tools::{setup_opengl_debug, show_opengl_context_info};
