use anyhow::Result;
use log::{error, info, warn};

use particle_cloud::cloud_engine::{parse_particle_count, CloudConfig};
use particle_cloud::renderer_engine::{GlDevice, Renderer, RendererConfig};
use particle_cloud::utils::show_rust_core_dependencies;
use particle_cloud::window_engine::{GlfwWindowEngine, WindowEngine};
use particle_cloud::{RenderContext, Simulator};

const CLOUD_CONFIG_PATH: &str = "assets/config/cloud.toml";
const RENDERER_CONFIG_PATH: &str = "assets/config/renderer.toml";

fn main() -> Result<()> {
    env_logger::init();

    info!("🚀 Starting Particle Cloud...");

    show_rust_core_dependencies();

    let mut cloud_config = CloudConfig::from_file(CLOUD_CONFIG_PATH).unwrap_or_default();
    let renderer_config = RendererConfig::from_file(RENDERER_CONFIG_PATH).unwrap_or_default();

    // Nombre initial : argument CLI prioritaire sur la config
    if let Some(raw) = std::env::args().nth(1) {
        match parse_particle_count(&raw, cloud_config.max_count) {
            Ok(count) => cloud_config.initial_count = count,
            Err(e) => warn!("⚠️ Ignoring CLI particle count: {}", e),
        }
    }
    info!("Cloud config:\n{:#?}", cloud_config);
    info!("Renderer config:\n{:#?}", renderer_config);

    // 1. Fenêtre + contexte GL
    let mut window_engine = GlfwWindowEngine::init(
        renderer_config.window_width,
        renderer_config.window_height,
        "Particle Cloud",
    )?;
    window_engine.set_vsync(renderer_config.vsync);

    // 2. Renderer (le contexte GL est prêt)
    let (width, height) = window_engine.framebuffer_size();
    let renderer = Renderer::new(GlDevice::new(), width, height, &renderer_config)
        .inspect_err(|e| error!("❌ Renderer initialisation failed: {:#}", e))?;

    // 3. Boucle
    let context = RenderContext::new(&cloud_config);
    let mut simulator = Simulator::new(
        renderer,
        window_engine,
        context,
        renderer_config.upload_every_frame,
    );
    let result = simulator.run();
    simulator.close();

    result
}
