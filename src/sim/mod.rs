//! Particle field simulation
//!
//! Pure state and per-frame update, no rendering or platform dependencies:
//! - Velocity in px/frame, no delta-time scaling
//! - Seeded RNG only (same seed, same field)
//! - Stable iteration order (by index in the collection)

pub mod field;
pub mod links;
pub mod particle;

pub use field::{FieldStats, ParticleField};
pub use links::{Link, find_links, link_alpha};
pub use particle::Particle;
