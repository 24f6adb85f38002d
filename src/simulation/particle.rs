use rand::Rng;

use crate::config::{
    ATTRACT_PROBABILITY, MAX_OPACITY, MAX_RADIUS, MIN_OPACITY, MIN_RADIUS, PALETTE, SPAWN_SPEED,
};

/// A single particle of the background field.
///
/// Position and velocity are mutated every tick; radius, color, opacity,
/// and pointer affinity are fixed at spawn and never change.
#[derive(Clone, Copy, Debug)]
pub struct Particle {
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,

    /// Draw radius in pixels, uniform in [MIN_RADIUS, MAX_RADIUS)
    pub radius: f32,

    /// Fill color, uniform choice from PALETTE
    pub color: [f32; 3],

    /// Base draw alpha, uniform in [MIN_OPACITY, MAX_OPACITY)
    pub opacity: f32,

    /// Whether the particle accelerates toward the pointer
    pub attract_to_pointer: bool,
}

impl Particle {
    /// Spawn a randomized particle somewhere on a width x height surface
    pub fn spawn(rng: &mut impl Rng, width: f32, height: f32) -> Self {
        Self {
            x: rng.gen_range(0.0..width),
            y: rng.gen_range(0.0..height),
            vx: rng.gen_range(-SPAWN_SPEED..SPAWN_SPEED),
            vy: rng.gen_range(-SPAWN_SPEED..SPAWN_SPEED),
            radius: rng.gen_range(MIN_RADIUS..MAX_RADIUS),
            color: PALETTE[rng.gen_range(0..PALETTE.len())],
            opacity: rng.gen_range(MIN_OPACITY..MAX_OPACITY),
            attract_to_pointer: rng.gen_bool(ATTRACT_PROBABILITY),
        }
    }

    /// Velocity magnitude
    pub fn speed(&self) -> f32 {
        (self.vx * self.vx + self.vy * self.vy).sqrt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_spawn_within_surface() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1000 {
            let p = Particle::spawn(&mut rng, 800.0, 600.0);
            assert!(p.x >= 0.0 && p.x < 800.0);
            assert!(p.y >= 0.0 && p.y < 600.0);
            assert!(p.vx >= -SPAWN_SPEED && p.vx < SPAWN_SPEED);
            assert!(p.vy >= -SPAWN_SPEED && p.vy < SPAWN_SPEED);
            assert!(p.radius >= MIN_RADIUS && p.radius < MAX_RADIUS);
            assert!(p.opacity >= MIN_OPACITY && p.opacity < MAX_OPACITY);
        }
    }

    #[test]
    fn test_spawn_color_from_palette() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            let p = Particle::spawn(&mut rng, 100.0, 100.0);
            assert!(PALETTE.contains(&p.color));
        }
    }

    #[test]
    fn test_attraction_eligibility_rate() {
        let mut rng = StdRng::seed_from_u64(42);
        let eligible = (0..10_000)
            .filter(|_| Particle::spawn(&mut rng, 100.0, 100.0).attract_to_pointer)
            .count();
        // Bernoulli(0.3) over 10k draws stays well inside this band
        assert!((2700..3300).contains(&eligible), "got {eligible}");
    }
}
