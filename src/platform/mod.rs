//! Platform abstraction layer
//!
//! Browser bindings for the field:
//! - Canvas 2D drawing surface
//! - `requestAnimationFrame` scheduling
//! - Viewport resize and pointer-move listeners
//!
//! Native builds have no platform layer; they drive `ManualScheduler` directly.

#[cfg(target_arch = "wasm32")]
pub mod web;

/// Seed for a fresh field (wall clock, so each page load differs)
pub fn time_seed() -> u64 {
    #[cfg(target_arch = "wasm32")]
    {
        js_sys::Date::now() as u64
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0)
    }
}
