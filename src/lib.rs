pub mod simulator;
pub use simulator::{RenderContext, Simulator, StopHandle};
// Particules : génération + validation des saisies
pub mod cloud_engine;
pub use cloud_engine::{ParticleGenerator, ParticleSet};
// Renderer engine
pub mod renderer_engine;
pub use renderer_engine::RendererEngine;
// Window engine
pub mod window_engine;
pub use window_engine::WindowEngine;

pub mod frame_stats;
// Utilities
pub mod utils;
