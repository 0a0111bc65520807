//! Decorative particle field drawn behind the hero section.
//!
//! Independent of scroll synchronization: it only learns the hero box size
//! and is advanced once per animation frame.

use rand::Rng;

pub const PARTICLE_COUNT: usize = 50;
/// Particles are only spawned when the viewport is wider than this.
pub const MIN_VIEWPORT_WIDTH: f32 = 768.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub x: f32,
    pub y: f32,
    pub size: f32,
    pub speed_x: f32,
    pub speed_y: f32,
}

impl Particle {
    fn random<R: Rng>(rng: &mut R, width: f32, height: f32) -> Self {
        Self {
            x: rng.r#gen::<f32>() * width,
            y: rng.r#gen::<f32>() * height,
            size: rng.r#gen::<f32>() * 2.0 + 1.0,
            speed_x: rng.r#gen::<f32>() * 0.5 - 0.25,
            speed_y: rng.r#gen::<f32>() * 0.5 - 0.25,
        }
    }

    fn step(&mut self, width: f32, height: f32) {
        self.x += self.speed_x;
        self.y += self.speed_y;

        if self.x > width {
            self.x = 0.0;
        }
        if self.x < 0.0 {
            self.x = width;
        }
        if self.y > height {
            self.y = 0.0;
        }
        if self.y < 0.0 {
            self.y = height;
        }
    }
}

#[derive(Debug, Clone)]
pub struct ParticleField {
    particles: Vec<Particle>,
    width: f32,
    height: f32,
}

impl ParticleField {
    pub fn should_spawn(viewport_width: f32) -> bool {
        viewport_width > MIN_VIEWPORT_WIDTH
    }

    pub fn new<R: Rng>(rng: &mut R, count: usize, width: f32, height: f32) -> Self {
        let particles = (0..count)
            .map(|_| Particle::random(rng, width, height))
            .collect();
        Self {
            particles,
            width,
            height,
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    #[cfg(test)]
    pub fn size(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    /// Only the drawing surface changes; particles keep their positions and
    /// wrap against the new bounds on the next step.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
    }

    pub fn step(&mut self) {
        let (width, height) = (self.width, self.height);
        for particle in &mut self.particles {
            particle.step(width, height);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn spawns_within_bounds_with_expected_ranges() {
        let mut rng = StdRng::seed_from_u64(7);
        let field = ParticleField::new(&mut rng, PARTICLE_COUNT, 1200.0, 700.0);
        assert_eq!(field.particles().len(), PARTICLE_COUNT);
        for p in field.particles() {
            assert!((0.0..1200.0).contains(&p.x));
            assert!((0.0..700.0).contains(&p.y));
            assert!((1.0..3.0).contains(&p.size));
            assert!((-0.25..0.25).contains(&p.speed_x));
            assert!((-0.25..0.25).contains(&p.speed_y));
        }
    }

    #[test]
    fn particles_wrap_at_edges() {
        let mut particle = Particle {
            x: 99.9,
            y: 0.1,
            size: 1.0,
            speed_x: 0.2,
            speed_y: -0.2,
        };
        particle.step(100.0, 50.0);
        assert_eq!(particle.x, 0.0);
        assert_eq!(particle.y, 50.0);
    }

    #[test]
    fn resize_keeps_particles_and_updates_bounds() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut field = ParticleField::new(&mut rng, 5, 800.0, 600.0);
        let before = field.particles().to_vec();
        field.resize(400.0, 300.0);
        assert_eq!(field.size(), (400.0, 300.0));
        assert_eq!(field.particles(), before.as_slice());
        for _ in 0..3 {
            field.step();
        }
        for p in field.particles() {
            assert!(p.x >= 0.0 && p.x <= 400.0);
            assert!(p.y >= 0.0 && p.y <= 300.0);
        }
    }

    #[test]
    fn only_wide_viewports_spawn() {
        assert!(!ParticleField::should_spawn(768.0));
        assert!(ParticleField::should_spawn(769.0));
    }
}
