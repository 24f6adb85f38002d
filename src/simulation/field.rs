use rand::Rng;

use crate::canvas::Canvas;
use crate::config::{
    ATTRACTION_RADIUS, ATTRACTION_STRENGTH, CONNECTION_ALPHA, CONNECTION_LINE_WIDTH,
    CONNECTION_RADIUS, CONNECTION_STRIDE, FRICTION,
};
use crate::simulation::particle::Particle;

/// The particle field: a fixed set of particles plus the surface geometry
/// and pointer state they react to.
///
/// The set is created once and never grows or shrinks. Positions and
/// velocities change only inside [`step`]; surface size and pointer are
/// plain last-write-wins fields updated between ticks by the host.
pub struct ParticleField {
    particles: Vec<Particle>,
    width: f32,
    height: f32,
    /// Latest pointer position, absent until the first movement event
    pointer: Option<(f32, f32)>,
}

impl ParticleField {
    /// Create a field of `count` randomized particles on a width x height
    /// surface. A degenerate surface is a caller bug, not a runtime
    /// condition, so it fails fast here instead of being checked per tick.
    pub fn new(rng: &mut impl Rng, width: f32, height: f32, count: usize) -> Self {
        assert!(
            width > 0.0 && height > 0.0,
            "particle field needs a non-empty surface"
        );

        let particles = (0..count)
            .map(|_| Particle::spawn(rng, width, height))
            .collect();

        Self {
            particles,
            width,
            height,
            pointer: None,
        }
    }

    /// Create a field from explicit particles (deterministic setups)
    pub fn from_particles(particles: Vec<Particle>, width: f32, height: f32) -> Self {
        assert!(
            width > 0.0 && height > 0.0,
            "particle field needs a non-empty surface"
        );

        Self {
            particles,
            width,
            height,
            pointer: None,
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn size(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    /// Track the new surface size. Particles left outside the new bounds
    /// are not repositioned here; the next tick's reflect-and-clamp pass
    /// brings them back in.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
    }

    /// Latest pointer position; last write wins
    pub fn set_pointer(&mut self, x: f32, y: f32) {
        self.pointer = Some((x, y));
    }

    /// Advance the field one tick and redraw it.
    ///
    /// Each particle, in index order: pointer attraction, Euler
    /// integration, damping, boundary reflection, then its circle and
    /// (for every CONNECTION_STRIDE-th index) its connection lines.
    /// Connection distances use the positions other particles currently
    /// hold mid-pass, so earlier indices are already updated and later
    /// ones are not.
    pub fn step(&mut self, canvas: &mut dyn Canvas) {
        canvas.clear();

        for index in 0..self.particles.len() {
            let mut p = self.particles[index];

            if p.attract_to_pointer {
                if let Some((px, py)) = self.pointer {
                    let dx = px - p.x;
                    let dy = py - p.y;
                    let distance = (dx * dx + dy * dy).sqrt();

                    if distance < ATTRACTION_RADIUS {
                        let angle = dy.atan2(dx);
                        let force = (1.0 - distance / ATTRACTION_RADIUS) * ATTRACTION_STRENGTH;
                        p.vx += angle.cos() * force;
                        p.vy += angle.sin() * force;
                    }
                }
            }

            p.x += p.vx;
            p.y += p.vy;

            p.vx *= FRICTION;
            p.vy *= FRICTION;

            // Axes reflect independently; a corner hit bounces on both
            if p.x < 0.0 || p.x > self.width {
                p.vx = -p.vx;
                p.x = p.x.clamp(0.0, self.width);
            }
            if p.y < 0.0 || p.y > self.height {
                p.vy = -p.vy;
                p.y = p.y.clamp(0.0, self.height);
            }

            self.particles[index] = p;

            canvas.set_fill_color(p.color);
            canvas.set_global_alpha(p.opacity);
            canvas.fill_circle((p.x, p.y), p.radius);

            if index % CONNECTION_STRIDE == 0 {
                for (other_index, other) in self.particles.iter().enumerate() {
                    if other_index == index {
                        continue;
                    }

                    let dx = p.x - other.x;
                    let dy = p.y - other.y;
                    let distance = (dx * dx + dy * dy).sqrt();

                    if distance < CONNECTION_RADIUS {
                        canvas.set_stroke_color(p.color);
                        canvas.set_global_alpha(
                            (1.0 - distance / CONNECTION_RADIUS) * CONNECTION_ALPHA,
                        );
                        canvas.set_line_width(CONNECTION_LINE_WIDTH);
                        canvas.draw_line((p.x, p.y), (other.x, other.y));
                    }
                }
            }
        }

        // Leave the surface opaque for whoever draws after us
        canvas.set_global_alpha(1.0);
    }
}
