#![cfg(feature = "interactive_tests")]

use particle_cloud::cloud_engine::CloudConfig;
use particle_cloud::renderer_engine::{GlDevice, Renderer, RendererConfig};
use particle_cloud::window_engine::{GlfwWindowEngine, WindowEngine};
use particle_cloud::{RenderContext, Simulator};

#[test]
#[ignore] // Needs a display and an OpenGL 3.3 driver
fn test_real_context_renders_a_few_frames() -> anyhow::Result<()> {
    let window_engine = GlfwWindowEngine::init(800, 600, "Particle Cloud test")?;
    let (width, height) = window_engine.framebuffer_size();
    let renderer = Renderer::new(GlDevice::new(), width, height, &RendererConfig::default())?;

    let config = CloudConfig {
        initial_count: 3,
        seed: Some(1),
        ..Default::default()
    };
    let mut simulator = Simulator::new(renderer, window_engine, RenderContext::new(&config), false);
    for _ in 0..3 {
        assert!(simulator.step());
    }
    assert_eq!(simulator.last_report().map(|r| r.vertex_count), Some(3));
    simulator.close();
    Ok(())
}
