use anyhow::Result;

use super::control_panel::ControlPanel;

/// Entrées asynchrones livrées à la boucle de rendu, sur son propre thread.
#[derive(Debug, Clone, PartialEq)]
pub enum ControlEvent {
    /// Nouvelle taille du framebuffer, en pixels.
    Resized { width: i32, height: i32 },
    /// Saisie brute (non validée) du nombre de particules.
    ParticleCountInput(String),
    /// État de la case « shader alternatif ».
    ShaderToggled(bool),
    CloseRequested,
}

pub trait WindowEngine {
    fn init(width: i32, height: i32, title: &str) -> Result<Self>
    where
        Self: Sized;

    /// Récupère les événements fenêtre arrivés depuis le dernier appel.
    fn poll_events(&mut self) -> Vec<ControlEvent>;
    fn framebuffer_size(&self) -> (i32, i32);
    fn set_vsync(&mut self, enabled: bool);

    /// Dessine le panneau de contrôle par-dessus la frame et renvoie les
    /// modifications faites par l'utilisateur.
    fn draw_controls(&mut self, panel: &mut ControlPanel) -> Vec<ControlEvent>;

    fn swap_buffers(&mut self);
    fn should_close(&self) -> bool;
    fn set_should_close(&mut self, value: bool);
}
