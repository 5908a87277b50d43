//! Particle field state and per-frame step

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::links::{Link, find_links};
use super::particle::Particle;
use crate::particle_count;
use crate::settings::{FieldSettings, SettingsError};

/// Counters for logging and tests
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FieldStats {
    /// Steps taken since creation
    pub frames: u64,
    pub particles: usize,
    /// Links at the current positions
    pub links: usize,
}

/// The simulated field: particles, surface size and pointer position.
///
/// A new field is empty (0x0 surface) until the host calls [`resize`](Self::resize)
/// with the viewport size.
#[derive(Debug, Clone)]
pub struct ParticleField {
    settings: FieldSettings,
    width: u32,
    height: u32,
    /// Last known pointer position, (0, 0) until the first move
    pointer: Vec2,
    particles: Vec<Particle>,
    rng: Pcg32,
    frames: u64,
}

impl ParticleField {
    /// Field with default settings
    pub fn new(seed: u64) -> Self {
        Self {
            settings: FieldSettings::default(),
            width: 0,
            height: 0,
            pointer: Vec2::ZERO,
            particles: Vec::new(),
            rng: Pcg32::seed_from_u64(seed),
            frames: 0,
        }
    }

    pub fn with_settings(settings: FieldSettings, seed: u64) -> Result<Self, SettingsError> {
        settings.validate()?;
        let mut field = Self::new(seed);
        field.settings = settings;
        Ok(field)
    }

    pub fn settings(&self) -> &FieldSettings {
        &self.settings
    }

    /// Surface size in pixels
    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn pointer(&self) -> Vec2 {
        self.pointer
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Direct access for hosts that place particles themselves (and tests).
    /// The next resize or regenerate discards whatever is here.
    pub fn particles_mut(&mut self) -> &mut Vec<Particle> {
        &mut self.particles
    }

    /// Set the surface size and rebuild the particle set
    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        self.regenerate();
    }

    /// Discard all particles and spawn floor(w * h / area) new ones
    pub fn regenerate(&mut self) {
        let count = particle_count(self.width, self.height, self.settings.area_per_particle);
        let (w, h) = (self.width as f32, self.height as f32);

        self.particles.clear();
        self.particles.reserve(count);
        for _ in 0..count {
            self.particles
                .push(Particle::random(&mut self.rng, w, h, &self.settings));
        }

        log::debug!(
            "Regenerated {} particles for {}x{}",
            count,
            self.width,
            self.height
        );
    }

    /// Record the latest pointer position
    pub fn set_pointer(&mut self, x: f32, y: f32) {
        self.pointer = Vec2::new(x, y);
    }

    /// Advance one frame: move and bounce every particle, then apply the
    /// pointer nudge to those within range
    pub fn step(&mut self) {
        let (w, h) = (self.width as f32, self.height as f32);
        let s = &self.settings;

        for particle in &mut self.particles {
            particle.advance(w, h);
            particle.nudge(self.pointer, s.pointer_radius, s.pointer_strength, s.pointer_mode);
        }

        self.frames += 1;
    }

    /// Proximity links at the current positions
    pub fn links(&self) -> Vec<Link> {
        find_links(
            &self.particles,
            self.settings.link_distance,
            self.settings.link_max_alpha,
        )
    }

    pub fn stats(&self) -> FieldStats {
        FieldStats {
            frames: self.frames,
            particles: self.particles.len(),
            links: self.links().len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::PointerMode;
    use proptest::prelude::*;

    fn place(field: &mut ParticleField, particles: Vec<Particle>) {
        *field.particles_mut() = particles;
    }

    #[test]
    fn test_resize_count_scenario() {
        let mut field = ParticleField::new(1);
        field.resize(1000, 600);
        assert_eq!(field.particles().len(), 30);
        assert_eq!(field.size(), (1000, 600));

        field.resize(100, 100);
        assert!(field.particles().is_empty());
    }

    #[test]
    fn test_new_field_is_empty() {
        let field = ParticleField::new(1);
        assert_eq!(field.size(), (0, 0));
        assert!(field.particles().is_empty());
        assert_eq!(field.pointer(), Vec2::ZERO);
    }

    #[test]
    fn test_regenerate_replaces_particles() {
        let mut field = ParticleField::new(3);
        field.resize(800, 600);
        let before = field.particles().to_vec();
        field.regenerate();
        assert_eq!(field.particles().len(), before.len());
        assert_ne!(field.particles(), &before[..]);
    }

    #[test]
    fn test_same_seed_same_field() {
        let mut a = ParticleField::new(42);
        let mut b = ParticleField::new(42);
        a.resize(1280, 720);
        b.resize(1280, 720);
        for _ in 0..50 {
            a.step();
            b.step();
        }
        assert_eq!(a.particles(), b.particles());
    }

    #[test]
    fn test_step_reflection_scenario() {
        let mut field = ParticleField::new(1);
        field.resize(200, 200);
        field.set_pointer(1000.0, 1000.0);
        place(
            &mut field,
            vec![Particle::new(Vec2::ZERO, Vec2::new(-0.1, 0.2), 2.0)],
        );

        field.step();
        let p = field.particles()[0];
        assert!((p.vel.x - 0.1).abs() < 1e-6);
        assert!((p.vel.y - 0.2).abs() < 1e-6);
        assert!(p.pos.x >= -0.1 - 1e-6);

        field.step();
        assert!(field.particles()[0].pos.x >= 0.0);
    }

    #[test]
    fn test_pointer_attracts() {
        let mut field = ParticleField::new(1);
        field.resize(400, 400);
        field.set_pointer(200.0, 200.0);
        place(
            &mut field,
            vec![Particle::new(Vec2::new(150.0, 200.0), Vec2::ZERO, 1.0)],
        );

        field.step();
        let p = field.particles()[0];
        assert!((p.pos.x - 150.5).abs() < 1e-4);
        assert_eq!(p.pos.y, 200.0);
    }

    #[test]
    fn test_pointer_repels() {
        let mut settings = FieldSettings::default();
        settings.pointer_mode = PointerMode::Repel;
        let mut field = ParticleField::with_settings(settings, 1).unwrap();
        field.resize(400, 400);
        field.set_pointer(200.0, 200.0);
        place(
            &mut field,
            vec![Particle::new(Vec2::new(150.0, 200.0), Vec2::ZERO, 1.0)],
        );

        field.step();
        assert!((field.particles()[0].pos.x - 149.5).abs() < 1e-4);
    }

    #[test]
    fn test_default_pointer_is_origin() {
        // No pointer event yet: particles near the top-left corner feel (0, 0)
        let mut field = ParticleField::new(1);
        field.resize(400, 400);
        place(
            &mut field,
            vec![Particle::new(Vec2::new(30.0, 40.0), Vec2::ZERO, 1.0)],
        );
        field.step();
        let p = field.particles()[0];
        assert!(p.pos.length() < 50.0);
    }

    #[test]
    fn test_invalid_settings_rejected() {
        let mut settings = FieldSettings::default();
        settings.link_distance = 0.0;
        assert!(ParticleField::with_settings(settings, 1).is_err());
    }

    #[test]
    fn test_stats() {
        let mut field = ParticleField::new(1);
        field.resize(400, 400);
        place(
            &mut field,
            vec![
                Particle::new(Vec2::new(100.0, 100.0), Vec2::ZERO, 1.0),
                Particle::new(Vec2::new(150.0, 100.0), Vec2::ZERO, 1.0),
            ],
        );
        field.step();
        field.step();
        let stats = field.stats();
        assert_eq!(stats.frames, 2);
        assert_eq!(stats.particles, 2);
        assert_eq!(stats.links, 1);
    }

    proptest! {
        #[test]
        fn prop_count_and_spawn_bounds(w in 0u32..2500, h in 0u32..1500, seed: u64) {
            let mut field = ParticleField::new(seed);
            field.resize(w, h);
            let expected = ((w as u64 * h as u64) / 20_000) as usize;
            prop_assert_eq!(field.particles().len(), expected);
            for p in field.particles() {
                prop_assert!(p.pos.x >= 0.0 && p.pos.x < w as f32);
                prop_assert!(p.pos.y >= 0.0 && p.pos.y < h as f32);
            }
        }

        #[test]
        fn prop_stays_in_bounds(seed: u64, steps in 1usize..400, px in 0.0f32..640.0, py in 0.0f32..480.0) {
            let mut field = ParticleField::new(seed);
            field.resize(640, 480);
            field.set_pointer(px, py);
            let slack = 0.25 + 1e-3;
            for _ in 0..steps {
                field.step();
                for p in field.particles() {
                    prop_assert!(p.pos.x >= -slack && p.pos.x <= 640.0 + slack);
                    prop_assert!(p.pos.y >= -slack && p.pos.y <= 480.0 + slack);
                }
            }
        }

        #[test]
        fn prop_reflection_flips_sign(
            x in 0.0f32..=100.0, y in 0.0f32..=100.0,
            vx in -0.25f32..=0.25, vy in -0.25f32..=0.25,
        ) {
            let mut field = ParticleField::new(0);
            field.resize(100, 100);
            field.set_pointer(10_000.0, 10_000.0);
            place(&mut field, vec![Particle::new(Vec2::new(x, y), Vec2::new(vx, vy), 1.0)]);

            let out_x = x + vx < 0.0 || x + vx > 100.0;
            let out_y = y + vy < 0.0 || y + vy > 100.0;
            field.step();
            let p = field.particles()[0];
            if out_x { prop_assert_eq!(p.vel.x, -vx); } else { prop_assert_eq!(p.vel.x, vx); }
            if out_y { prop_assert_eq!(p.vel.y, -vy); } else { prop_assert_eq!(p.vel.y, vy); }
        }

        #[test]
        fn prop_pointer_attraction_monotonic(dx in -70.0f32..70.0, dy in -70.0f32..70.0) {
            prop_assume!(dx.hypot(dy) > 1.0);
            let mut field = ParticleField::new(0);
            field.resize(400, 400);
            field.set_pointer(200.0, 200.0);
            let start = Vec2::new(200.0 + dx, 200.0 + dy);
            place(&mut field, vec![Particle::new(start, Vec2::ZERO, 1.0)]);

            let before = start.distance(field.pointer());
            field.step();
            let after = field.particles()[0].pos.distance(field.pointer());
            prop_assert!(after < before);
        }
    }
}
