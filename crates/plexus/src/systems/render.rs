//! Per-frame drawing: dots first, then the lines between nearby pairs.

use crate::api::config::NetworkConfig;
use crate::api::types::Viewport;
use crate::renderer::traits::DrawSurface;
use crate::systems::geometry::distance;
use crate::systems::particle::Particle;

/// A visible connection between two particles. `a < b` always.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Link {
    pub a: usize,
    pub b: usize,
    pub opacity: f32,
}

/// Line opacity for a pair at `dist`: 1 when touching, fading linearly to
/// 0 at `max_distance`. `None` once the pair is too far apart.
pub fn line_opacity(dist: f32, max_distance: f32) -> Option<f32> {
    if dist < max_distance {
        Some((max_distance - dist) / max_distance)
    } else {
        None
    }
}

/// Every unordered pair closer than `max_distance`, lower index first.
/// O(n²) in the particle count.
pub fn connections(particles: &[Particle], max_distance: f32) -> impl Iterator<Item = Link> + '_ {
    particles.iter().enumerate().flat_map(move |(a, pa)| {
        particles[a + 1..].iter().enumerate().filter_map(move |(k, pb)| {
            line_opacity(distance(pa.position, pb.position), max_distance).map(|opacity| Link {
                a,
                b: a + 1 + k,
                opacity,
            })
        })
    })
}

/// Draw one frame of the network onto `surface`.
///
/// The surface is resized to the viewport first, which also wipes it.
/// Lines take the color of their lower-indexed particle.
pub fn render<S: DrawSurface + ?Sized>(
    particles: &[Particle],
    surface: &mut S,
    viewport: Viewport,
    config: &NetworkConfig,
) {
    surface.set_size(viewport.width, viewport.height);
    surface.clear_rect(0.0, 0.0, viewport.width, viewport.height);

    for p in particles {
        surface.set_fill_style(&config.dot_color.rgba(p.opacity));
        surface.fill_circle(p.position.x, p.position.y, p.radius);
    }

    surface.set_line_width(config.line_width);
    for link in connections(particles, config.max_line_distance) {
        let (pa, pb) = (&particles[link.a], &particles[link.b]);
        surface.set_stroke_style(&pa.color.rgba(link.opacity));
        surface.stroke_line(pa.position.x, pa.position.y, pb.position.x, pb.position.y);
    }
}
