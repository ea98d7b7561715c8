//! Decorative particle field drawn behind the dashboard.
//!
//! Pure simulation logic: a fixed pool of particles drifting at constant
//! velocity, wrapping at the surface edges. The RNG is injected so tests are
//! deterministic; the canvas driver lives in `components::particle_canvas`.

use rand::Rng;

/// Fixed pool size.
pub const PARTICLE_COUNT: usize = 80;

/// One drifting point of the background effect.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub size: f64,
    pub speed_x: f64,
    pub speed_y: f64,
    /// Translucent blue-green rgba() color fixed at spawn.
    pub color: String,
}

impl Particle {
    fn spawn<R: Rng + ?Sized>(rng: &mut R, width: f64, height: f64) -> Self {
        let r = rng.gen_range(100..150);
        let g = rng.gen_range(150..250);
        let b = rng.gen_range(200..255);
        let alpha = rng.gen_range(0.1..0.5);
        Self {
            x: rng.gen_range(0.0..width),
            y: rng.gen_range(0.0..height),
            size: rng.gen_range(0.0..2.0) + 0.5,
            speed_x: (rng.gen_range(0.0..1.0) - 0.5) * 0.3,
            speed_y: (rng.gen_range(0.0..1.0) - 0.5) * 0.3,
            color: format!("rgba({r}, {g}, {b}, {alpha:.2})"),
        }
    }

    /// Advance one frame and wrap (not bounce) at every edge.
    fn step(&mut self, width: f64, height: f64) {
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

/// The full particle pool plus the surface bounds it drifts within.
#[derive(Debug, Clone, PartialEq)]
pub struct ParticleField {
    particles: Vec<Particle>,
    width: f64,
    height: f64,
}

impl ParticleField {
    /// Spawn the fixed-size pool across a `width` x `height` surface.
    pub fn new<R: Rng + ?Sized>(rng: &mut R, width: f64, height: f64) -> Self {
        // A zero-sized surface would make the spawn ranges empty.
        let width = width.max(1.0);
        let height = height.max(1.0);
        let particles = (0..PARTICLE_COUNT)
            .map(|_| Particle::spawn(rng, width, height))
            .collect();
        Self {
            particles,
            width,
            height,
        }
    }

    /// Track a resized surface; existing particles keep their positions and
    /// wrap against the new bounds.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width.max(1.0);
        self.height = height.max(1.0);
    }

    /// Advance every particle one frame.
    pub fn step(&mut self) {
        let (width, height) = (self.width, self.height);
        for particle in &mut self.particles {
            particle.step(width, height);
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn bounds(&self) -> (f64, f64) {
        (self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn field() -> ParticleField {
        let mut rng = SmallRng::seed_from_u64(7);
        ParticleField::new(&mut rng, 800.0, 600.0)
    }

    #[test]
    fn pool_has_fixed_size() {
        assert_eq!(field().particles().len(), PARTICLE_COUNT);
    }

    #[test]
    fn particles_spawn_inside_bounds() {
        for p in field().particles() {
            assert!(p.x >= 0.0 && p.x <= 800.0);
            assert!(p.y >= 0.0 && p.y <= 600.0);
            assert!(p.size >= 0.5 && p.size <= 2.5);
            assert!(p.speed_x.abs() <= 0.15);
            assert!(p.speed_y.abs() <= 0.15);
            assert!(p.color.starts_with("rgba("));
        }
    }

    #[test]
    fn step_wraps_at_right_edge() {
        let mut f = field();
        // Force a known particle to the edge moving right.
        {
            let p = &mut f.particles[0];
            p.x = 799.95;
            p.speed_x = 0.1;
        }
        f.step();
        assert_eq!(f.particles()[0].x, 0.0);
    }

    #[test]
    fn step_wraps_at_left_and_top_edges() {
        let mut f = field();
        {
            let p = &mut f.particles[0];
            p.x = 0.01;
            p.speed_x = -0.1;
            p.y = 0.01;
            p.speed_y = -0.1;
        }
        f.step();
        assert_eq!(f.particles()[0].x, 800.0);
        assert_eq!(f.particles()[0].y, 600.0);
    }

    #[test]
    fn positions_stay_in_bounds_over_many_frames() {
        let mut f = field();
        for _ in 0..10_000 {
            f.step();
        }
        let (w, h) = f.bounds();
        for p in f.particles() {
            assert!(p.x >= 0.0 && p.x <= w);
            assert!(p.y >= 0.0 && p.y <= h);
        }
    }

    #[test]
    fn resize_clamps_degenerate_bounds() {
        let mut f = field();
        f.resize(0.0, 0.0);
        assert_eq!(f.bounds(), (1.0, 1.0));
    }

    #[test]
    fn seeded_fields_are_reproducible() {
        let mut a = SmallRng::seed_from_u64(42);
        let mut b = SmallRng::seed_from_u64(42);
        assert_eq!(
            ParticleField::new(&mut a, 300.0, 200.0),
            ParticleField::new(&mut b, 300.0, 200.0)
        );
    }
}
