//! A single drifting particle

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::settings::{FieldSettings, PointerMode};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Particle {
    pub pos: Vec2,
    /// px/frame; only the sign of each component ever changes
    pub vel: Vec2,
    pub radius: f32,
}

impl Particle {
    pub fn new(pos: Vec2, vel: Vec2, radius: f32) -> Self {
        Self { pos, vel, radius }
    }

    /// Spawn uniformly over [0, width) x [0, height).
    ///
    /// Width and height must be positive; a surface too small to hold one
    /// particle never reaches this.
    pub fn random<R: Rng>(
        rng: &mut R,
        width: f32,
        height: f32,
        settings: &FieldSettings,
    ) -> Self {
        let speed = settings.max_speed;
        Self {
            pos: Vec2::new(rng.random_range(0.0..width), rng.random_range(0.0..height)),
            vel: Vec2::new(
                rng.random_range(-speed..=speed),
                rng.random_range(-speed..=speed),
            ),
            radius: rng.random_range(settings.min_radius..settings.max_radius),
        }
    }

    /// Move by one frame of velocity and bounce off the surface edges.
    ///
    /// Position is not clamped: a particle may sit up to one step outside
    /// [0, width] x [0, height], with its heading already pointing back in.
    pub fn advance(&mut self, width: f32, height: f32) {
        self.pos += self.vel;

        if self.pos.x < 0.0 {
            self.vel.x = self.vel.x.abs();
        } else if self.pos.x > width {
            self.vel.x = -self.vel.x.abs();
        }

        if self.pos.y < 0.0 {
            self.vel.y = self.vel.y.abs();
        } else if self.pos.y > height {
            self.vel.y = -self.vel.y.abs();
        }
    }

    /// Shift a fraction of the way toward (or away from) a pointer within `radius`.
    /// Returns true if the particle was inside the radius.
    pub fn nudge(&mut self, pointer: Vec2, radius: f32, strength: f32, mode: PointerMode) -> bool {
        let delta = pointer - self.pos;
        if delta.length() < radius {
            self.pos += delta * strength * mode.sign();
            true
        } else {
            false
        }
    }
}
