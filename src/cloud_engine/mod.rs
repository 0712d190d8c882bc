pub mod particle;
pub use self::particle::{Particle, ParticleSet};

pub mod generator;
pub use self::generator::ParticleGenerator;

pub mod count;
pub use self::count::{parse_particle_count, CountError};

pub mod config;
pub use self::config::CloudConfig;
