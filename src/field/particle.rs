//! Particle value record and its per-tick operations

use glam::DVec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::settings::BackdropSettings;

/// A single drifting dot
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Particle {
    pub pos: DVec2,
    pub vel: DVec2,
    /// Constant for the particle's lifetime
    pub radius: f64,
}

impl Particle {
    pub fn new(pos: DVec2, vel: DVec2, radius: f64) -> Self {
        Self { pos, vel, radius }
    }

    /// Random particle inside a `width` x `height` surface
    ///
    /// Position is uniform in [0, width) x [0, height), each velocity
    /// component in [-speed/2, speed/2), radius in [radius_min, radius_max).
    /// A zero dimension puts every particle at 0 on that axis.
    pub fn spawn<R: Rng + ?Sized>(
        rng: &mut R,
        width: f64,
        height: f64,
        settings: &BackdropSettings,
    ) -> Self {
        let pos = DVec2::new(rng.random::<f64>() * width, rng.random::<f64>() * height);
        let vel = DVec2::new(
            (rng.random::<f64>() - 0.5) * settings.speed,
            (rng.random::<f64>() - 0.5) * settings.speed,
        );
        let radius =
            settings.radius_min + rng.random::<f64>() * (settings.radius_max - settings.radius_min);
        Self { pos, vel, radius }
    }
}

/// Move the particle by one velocity step
#[inline]
pub fn advance(p: &mut Particle) {
    p.pos += p.vel;
}

/// Flip each velocity component whose axis left [0, bound]
///
/// Position is not clamped: an overshooting particle is pulled back by
/// the reversed velocity on the next advance.
#[inline]
pub fn reflect(p: &mut Particle, width: f64, height: f64) {
    if p.pos.x < 0.0 || p.pos.x > width {
        p.vel.x = -p.vel.x;
    }
    if p.pos.y < 0.0 || p.pos.y > height {
        p.vel.y = -p.vel.y;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_advance_adds_velocity() {
        let mut p = Particle::new(DVec2::new(10.0, 20.0), DVec2::new(0.25, -0.1), 2.0);
        advance(&mut p);
        assert!((p.pos.x - 10.25).abs() < 1e-12);
        assert!((p.pos.y - 19.9).abs() < 1e-12);
    }

    #[test]
    fn test_reflect_left_edge() {
        let mut p = Particle::new(DVec2::new(0.0, 50.0), DVec2::new(-0.2, 0.1), 1.0);
        advance(&mut p);
        reflect(&mut p, 100.0, 100.0);
        assert!(p.vel.x > 0.0);
        // Not clamped
        assert!(p.pos.x < 0.0);
        // Other axis untouched
        assert_eq!(p.vel.y, 0.1);
    }

    #[test]
    fn test_reflect_both_axes_same_tick() {
        let mut p = Particle::new(DVec2::new(100.0, 100.0), DVec2::new(0.2, 0.2), 1.0);
        advance(&mut p);
        reflect(&mut p, 100.0, 100.0);
        assert!(p.vel.x < 0.0);
        assert!(p.vel.y < 0.0);
    }

    #[test]
    fn test_sitting_on_boundary_does_not_reflect() {
        let mut p = Particle::new(DVec2::new(100.0, 0.0), DVec2::new(0.1, -0.1), 1.0);
        reflect(&mut p, 100.0, 100.0);
        assert_eq!(p.vel, DVec2::new(0.1, -0.1));
    }

    #[test]
    fn test_spawn_ranges() {
        let settings = BackdropSettings::default();
        let mut rng = Pcg32::seed_from_u64(7);
        for _ in 0..500 {
            let p = Particle::spawn(&mut rng, 800.0, 600.0, &settings);
            assert!(p.pos.x >= 0.0 && p.pos.x < 800.0);
            assert!(p.pos.y >= 0.0 && p.pos.y < 600.0);
            assert!(p.vel.x >= -0.25 && p.vel.x < 0.25);
            assert!(p.vel.y >= -0.25 && p.vel.y < 0.25);
            assert!(p.radius >= 1.0 && p.radius < 3.0);
        }
    }

    #[test]
    fn test_spawn_zero_area() {
        let settings = BackdropSettings::default();
        let mut rng = Pcg32::seed_from_u64(3);
        let p = Particle::spawn(&mut rng, 0.0, 0.0, &settings);
        assert_eq!(p.pos, DVec2::ZERO);
        assert!(p.vel.is_finite());
    }
}
