use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct RendererConfig {
    pub window_width: i32,
    pub window_height: i32,
    /// Taille des points à l'écran, en pixels.
    pub point_size: f32,
    /// Synchronise chaque frame sur le rafraîchissement de l'écran.
    pub vsync: bool,
    /// Ré-envoie les buffers à chaque frame au lieu de seulement quand le
    /// lot de particules change.
    pub upload_every_frame: bool,
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            window_width: 1024,
            window_height: 768,
            point_size: 5.0,
            vsync: true,
            upload_every_frame: false,
        }
    }
}

impl RendererConfig {
    pub fn from_file(path: &str) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&text)?)
    }

    pub fn save_to_file(&self, path: &str) -> anyhow::Result<()> {
        let text = toml::to_string_pretty(self)?;
        std::fs::write(path, text)?;
        Ok(())
    }
}
