use glam::{Vec3, Vec4};

/// Un point du nuage : position dans l'espace monde + couleur RGBA.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Particle {
    pub position: Vec3,
    pub color: Vec4,
}

/// Nombre de floats par position envoyés au GPU (x, y, z).
pub const POSITION_COMPONENTS: usize = 3;
/// Nombre de floats par couleur envoyés au GPU (r, g, b, a).
pub const COLOR_COMPONENTS: usize = 4;

/// Lot ordonné de particules.
///
/// Un `ParticleSet` n'est jamais modifié en place : quand le nombre demandé
/// change, le lot entier est remplacé par un nouveau.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParticleSet {
    particles: Vec<Particle>,
}

impl ParticleSet {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Particle> {
        self.particles.iter()
    }

    pub fn as_slice(&self) -> &[Particle] {
        &self.particles
    }

    /// Aplatit les positions en `[x0, y0, z0, x1, y1, z1, ...]` (3 × N floats).
    pub fn flatten_positions(&self) -> Vec<f32> {
        let mut out = Vec::with_capacity(self.len() * POSITION_COMPONENTS);
        for p in &self.particles {
            out.extend_from_slice(&p.position.to_array());
        }
        out
    }

    /// Aplatit les couleurs en `[r0, g0, b0, a0, r1, ...]` (4 × N floats),
    /// dans le même ordre que [`flatten_positions`](Self::flatten_positions).
    pub fn flatten_colors(&self) -> Vec<f32> {
        let mut out = Vec::with_capacity(self.len() * COLOR_COMPONENTS);
        for p in &self.particles {
            out.extend_from_slice(&p.color.to_array());
        }
        out
    }
}

impl From<Vec<Particle>> for ParticleSet {
    fn from(particles: Vec<Particle>) -> Self {
        Self { particles }
    }
}

impl FromIterator<Particle> for ParticleSet {
    fn from_iter<I: IntoIterator<Item = Particle>>(iter: I) -> Self {
        Self {
            particles: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn particle(i: f32) -> Particle {
        Particle {
            position: Vec3::new(i, i + 0.1, i + 0.2),
            color: Vec4::new(i / 10.0, 0.5, 0.25, 1.0),
        }
    }

    #[test]
    fn test_flatten_preserves_particle_order() {
        let set: ParticleSet = (0..3).map(|i| particle(i as f32)).collect();

        let positions = set.flatten_positions();
        let colors = set.flatten_colors();

        assert_eq!(positions.len(), 9);
        assert_eq!(colors.len(), 12);
        assert_eq!(&positions[3..6], &[1.0, 1.1, 1.2]);
        assert_eq!(&colors[8..12], &[0.2, 0.5, 0.25, 1.0]);
    }

    #[test]
    fn test_flatten_empty_set() {
        let set = ParticleSet::empty();
        assert!(set.is_empty());
        assert!(set.flatten_positions().is_empty());
        assert!(set.flatten_colors().is_empty());
    }
}
