//! Proximity links between particles
//!
//! Full unordered pairing, O(n²). Counts stay in the tens to low hundreds
//! (one particle per 20000 px²), so there is no spatial index.

use super::Particle;

/// A connecting line between two particles closer than the link distance
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Link {
    /// Index of the first particle (always < `b`)
    pub a: usize,
    pub b: usize,
    pub distance: f32,
    pub alpha: f32,
}

/// Line opacity: `max_alpha` at distance 0 falling linearly to 0 at `max_distance`
#[inline]
pub fn link_alpha(distance: f32, max_distance: f32, max_alpha: f32) -> f32 {
    (max_alpha * (1.0 - distance / max_distance)).max(0.0)
}

/// Every unordered pair with distance strictly below `max_distance`
pub fn find_links(particles: &[Particle], max_distance: f32, max_alpha: f32) -> Vec<Link> {
    let mut links = Vec::new();
    for (a, p) in particles.iter().enumerate() {
        for (offset, q) in particles[a + 1..].iter().enumerate() {
            let distance = p.pos.distance(q.pos);
            if distance < max_distance {
                links.push(Link {
                    a,
                    b: a + 1 + offset,
                    distance,
                    alpha: link_alpha(distance, max_distance, max_alpha),
                });
            }
        }
    }
    links
}
