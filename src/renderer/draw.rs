//! Per-frame render pass

use super::surface::Surface;
use crate::sim::ParticleField;

/// Draw one frame: clear, one filled circle per particle, then a line for
/// every linked pair with alpha falling off by distance.
///
/// Returns the number of lines drawn.
pub fn render<S: Surface + ?Sized>(field: &ParticleField, surface: &mut S) -> usize {
    let (width, height) = field.size();
    let settings = field.settings();
    let particles = field.particles();

    surface.clear(width as f32, height as f32);

    for particle in particles {
        surface.fill_circle(particle.pos, particle.radius, settings.particle_color);
    }

    let links = field.links();
    for link in &links {
        surface.stroke_line(
            particles[link.a].pos,
            particles[link.b].pos,
            settings.link_color.with_alpha(link.alpha),
        );
    }

    links.len()
}
