use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct CloudConfig {
    /// Nombre de particules générées au démarrage.
    pub initial_count: usize,
    /// Borne haute appliquée à toute saisie utilisateur.
    pub max_count: usize,
    /// Graine du générateur ; `None` = entropie OS.
    pub seed: Option<u64>,
}

impl Default for CloudConfig {
    fn default() -> Self {
        Self {
            initial_count: 1000,
            max_count: 1_000_000,
            seed: None,
        }
    }
}

impl CloudConfig {
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
