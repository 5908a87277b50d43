//! Particle Field entry point
//!
//! Web: mounts the field on `#particle-canvas`. Native: runs the simulation
//! headless for a fixed number of frames and logs a summary.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        return;
    }

    log::info!("Particle field starting...");
    if particle_field::platform::web::mount(particle_field::consts::CANVAS_SELECTOR).is_none() {
        log::info!("Particle field not mounted");
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use std::rc::Rc;

    use particle_field::{
        Animation, FieldSettings, ManualScheduler, ParticleField, RecordingSurface,
    };

    env_logger::init();

    // particle-field [WIDTHxHEIGHT] [FRAMES]
    let mut args = std::env::args().skip(1);
    let (width, height) = args
        .next()
        .and_then(|s| parse_size(&s))
        .unwrap_or((1280, 720));
    let frames = args
        .next()
        .and_then(|s| s.parse::<usize>().ok())
        .unwrap_or(600);

    log::info!("Particle field (native, headless) {}x{} for {} frames", width, height, frames);

    let seed = particle_field::platform::time_seed();
    let field = match ParticleField::with_settings(FieldSettings::load(), seed) {
        Ok(field) => field,
        Err(e) => {
            log::warn!("Invalid field settings ({}), using defaults", e);
            ParticleField::new(seed)
        }
    };
    let scheduler = Rc::new(ManualScheduler::new());
    let Some(animation) = Animation::start(
        Some(RecordingSurface::new()),
        field,
        (width, height),
        scheduler.clone(),
    ) else {
        return;
    };

    // Sweep the pointer around the center so the nudge is exercised
    let (cx, cy) = (width as f32 / 2.0, height as f32 / 2.0);
    let orbit = cx.min(cy) * 0.5;
    for i in 0..frames {
        let theta = i as f32 * 0.02;
        animation.set_pointer(cx + orbit * theta.cos(), cy + orbit * theta.sin());
        if !scheduler.run_frame() {
            break;
        }
    }
    animation.stop();

    let stats = animation.stats();
    log::info!(
        "Done: seed {}, {} frames, {} particles, {} links in last frame",
        seed,
        stats.frames,
        stats.particles,
        stats.links
    );
    println!(
        "{} frames, {} particles, {} links",
        stats.frames, stats.particles, stats.links
    );
}

#[cfg(not(target_arch = "wasm32"))]
fn parse_size(s: &str) -> Option<(u32, u32)> {
    let (w, h) = s.split_once('x')?;
    Some((w.parse().ok()?, h.parse().ok()?))
}
