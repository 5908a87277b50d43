//! Particle Field - pointer-reactive particle background
//!
//! Core modules:
//! - `sim`: Particle state, per-frame step, proximity links
//! - `renderer`: Drawing surface abstraction and the render pass
//! - `scheduler`: Injected frame scheduling and the run/stop loop
//! - `platform`: Browser bindings (canvas, animation frames, listeners)
//! - `settings`: Tunable constants, persisted in LocalStorage

pub mod platform;
pub mod renderer;
pub mod scheduler;
pub mod settings;
pub mod sim;

pub use renderer::{RecordingSurface, Rgba, Surface, render};
pub use scheduler::{Animation, FrameScheduler, ManualScheduler};
pub use settings::{FieldSettings, PointerMode, SettingsError};
pub use sim::{FieldStats, Link, Particle, ParticleField};

/// Field configuration constants (defaults for `FieldSettings`)
pub mod consts {
    /// Surface area (px²) per particle: count = floor(w * h / AREA_PER_PARTICLE)
    pub const AREA_PER_PARTICLE: f32 = 20_000.0;

    /// Particles closer than this are joined by a line
    pub const LINK_DISTANCE: f32 = 100.0;
    /// Line alpha at zero distance
    pub const LINK_MAX_ALPHA: f32 = 0.2;

    /// Pointer influence radius
    pub const POINTER_RADIUS: f32 = 100.0;
    /// Fraction of the particle→pointer displacement applied per frame
    pub const POINTER_STRENGTH: f32 = 0.01;

    /// Max per-axis speed at creation (px/frame)
    pub const MAX_SPEED: f32 = 0.25;
    /// Particle radius range [MIN, MAX)
    pub const MIN_RADIUS: f32 = 1.0;
    pub const MAX_RADIUS: f32 = 3.0;

    /// Selector of the canvas the web host mounts on
    pub const CANVAS_SELECTOR: &str = "#particle-canvas";
}

/// Number of particles for a surface of the given size
#[inline]
pub fn particle_count(width: u32, height: u32, area_per_particle: f32) -> usize {
    let area = width as f64 * height as f64;
    (area / area_per_particle as f64).floor() as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_particle_count_scenarios() {
        assert_eq!(particle_count(1000, 600, consts::AREA_PER_PARTICLE), 30);
        assert_eq!(particle_count(1920, 1080, consts::AREA_PER_PARTICLE), 103);
        assert_eq!(particle_count(100, 100, consts::AREA_PER_PARTICLE), 0);
        assert_eq!(particle_count(0, 600, consts::AREA_PER_PARTICLE), 0);
    }
}
