use glam::{Vec3, Vec4};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::particle::{Particle, ParticleSet};

/// Demi-côté du cube dans lequel les positions sont tirées : [-5, 5]³.
pub const POSITION_EXTENT: f32 = 5.0;

/// Générateur de lots de particules.
///
/// Seul état conservé entre deux appels : le flux aléatoire. Deux générateurs
/// construits avec la même graine produisent exactement les mêmes lots.
pub struct ParticleGenerator {
    rng: StdRng,
}

impl ParticleGenerator {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn from_os_rng() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Graine optionnelle (config) : déterministe si fournie, sinon entropie OS.
    pub fn new(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::from_seed(seed),
            None => Self::from_os_rng(),
        }
    }

    pub fn reseed(&mut self, seed: u64) {
        self.rng = StdRng::seed_from_u64(seed);
    }

    /// Tire `count` particules : position uniforme dans [-5, 5]³,
    /// r/g/b uniformes dans [0, 1], alpha fixé à 1.0.
    pub fn generate(&mut self, count: usize) -> ParticleSet {
        let rng = &mut self.rng;
        (0..count)
            .map(|_| Particle {
                position: Vec3::new(
                    rng.random_range(-POSITION_EXTENT..=POSITION_EXTENT),
                    rng.random_range(-POSITION_EXTENT..=POSITION_EXTENT),
                    rng.random_range(-POSITION_EXTENT..=POSITION_EXTENT),
                ),
                color: Vec4::new(
                    rng.random_range(0.0..=1.0),
                    rng.random_range(0.0..=1.0),
                    rng.random_range(0.0..=1.0),
                    1.0,
                ),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_returns_requested_count_in_range() {
        let mut generator = ParticleGenerator::from_seed(42);

        for count in [1usize, 3, 250, 4096] {
            let set = generator.generate(count);
            assert_eq!(set.len(), count);

            for p in set.iter() {
                for c in p.position.to_array() {
                    assert!((-POSITION_EXTENT..=POSITION_EXTENT).contains(&c), "{c}");
                }
                for c in &p.color.to_array()[..3] {
                    assert!((0.0..=1.0).contains(c), "{c}");
                }
                assert_eq!(p.color.w, 1.0);
            }
        }
    }

    #[test]
    fn test_generate_zero_is_empty() {
        let mut generator = ParticleGenerator::from_seed(1);
        assert!(generator.generate(0).is_empty());
    }

    #[test]
    fn test_same_seed_same_particles() {
        let a = ParticleGenerator::from_seed(7).generate(32);
        let b = ParticleGenerator::from_seed(7).generate(32);
        assert_eq!(a, b);
    }

    #[test]
    fn test_reseed_restarts_the_stream() {
        let mut generator = ParticleGenerator::from_seed(9);
        let first = generator.generate(16);
        let second = generator.generate(16);
        assert_ne!(first, second);

        generator.reseed(9);
        assert_eq!(generator.generate(16), first);
    }

    #[test]
    fn test_positions_spread_over_the_cube() {
        let set = ParticleGenerator::from_seed(3).generate(2000);
        let min_x = set.iter().map(|p| p.position.x).fold(f32::MAX, f32::min);
        let max_x = set.iter().map(|p| p.position.x).fold(f32::MIN, f32::max);
        assert!(min_x < -4.0 && max_x > 4.0, "x in [{min_x}, {max_x}]");
    }
}
