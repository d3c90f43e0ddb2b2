//! Per-frame rendering of the particle field

use super::surface::DrawSurface;
use crate::field::{Particle, ParticleField};

/// What a frame put on screen
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameStats {
    pub particles: usize,
    pub connections: usize,
}

/// Draw one particle as a filled circle
#[inline]
pub fn draw_particle<S: DrawSurface + ?Sized>(surface: &mut S, p: &Particle, color: &str) {
    surface.fill_circle(p.pos, p.radius, color);
}

/// Clear, draw every particle, then every connection
///
/// Does not advance the simulation.
pub fn draw_frame<S: DrawSurface + ?Sized>(surface: &mut S, field: &ParticleField) -> FrameStats {
    let settings = field.settings();
    surface.clear(field.width(), field.height());

    for p in field.particles() {
        draw_particle(surface, p, &settings.particle_color);
    }

    let particles = field.particles();
    let mut connections = 0;
    for (i, j) in field.connections() {
        surface.stroke_line(
            particles[i].pos,
            particles[j].pos,
            &settings.connection_color,
            settings.connection_line_width,
        );
        connections += 1;
    }

    FrameStats {
        particles: particles.len(),
        connections,
    }
}
