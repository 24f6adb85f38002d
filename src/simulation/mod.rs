mod animator;
mod field;
mod particle;

pub use animator::{Animator, TickScheduler};
pub use field::ParticleField;
pub use particle::Particle;
