use log::info;

/// Affiche la version du compilateur et des crates graphiques principales.
pub fn show_rust_core_dependencies() {
    info!(
        "Rust compiler version: {}",
        rustc_version_runtime::version()
    );
    info!("  Platform    : {}", std::env::consts::OS);
    info!("  Arch        : {}", std::env::consts::ARCH);

    info!("Rust core dependencies");
    info!(
        "  GL    version: {}",
        option_env!("GL_CRATE_VERSION").unwrap_or("Unknown")
    );
    info!(
        "  GLFW  version: {}",
        option_env!("GLFW_CRATE_VERSION").unwrap_or("Unknown")
    );
    info!(
        "  IMGUI version: {}",
        option_env!("IMGUI_CRATE_VERSION").unwrap_or("Unknown")
    );
}

/// Taille en octets lisible (bytes, KB, MB, GB).
pub fn format_bytes(size: usize) -> String {
    const KB: f64 = 1024.0;
    const MB: f64 = KB * 1024.0;
    const GB: f64 = MB * 1024.0;

    let s = size as f64;
    if s >= GB {
        format!("{:.2} GB", s / GB)
    } else if s >= MB {
        format!("{:.2} MB", s / MB)
    } else if s >= KB {
        format!("{:.2} KB", s / KB)
    } else {
        format!("{} bytes", size)
    }
}
