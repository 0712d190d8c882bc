use log::info;

use super::device::GraphicsDevice;

/// Taille courante de la surface de dessin, en pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ViewportState {
    pub width: u32,
    pub height: u32,
}

impl ViewportState {
    /// Les dimensions négatives (fenêtre minimisée sur certains WM) valent 0.
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            width: width.max(0) as u32,
            height: height.max(0) as u32,
        }
    }

    /// Ratio largeur / hauteur ; la hauteur est ramenée à au moins 1 pixel.
    pub fn aspect(&self) -> f32 {
        self.width as f32 / self.height.max(1) as f32
    }

    /// Enregistre la nouvelle taille et met à jour la région de dessin du
    /// device à `(0, 0, width, height)`.
    pub fn resize<D: GraphicsDevice>(&mut self, device: &mut D, width: i32, height: i32) {
        let next = Self::new(width, height);
        if next != *self {
            info!("🖥️ Viewport resized: {} x {}", next.width, next.height);
        }
        *self = next;
        device.viewport(0, 0, self.width as i32, self.height as i32);
    }
}
