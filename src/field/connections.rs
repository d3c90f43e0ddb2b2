//! Pairwise connection test
//!
//! Every unordered pair is checked, so a pass costs O(n²) distance
//! computations. That is fine at the default 60 particles (1770 pairs);
//! `PAIRWISE_PARTICLE_CEILING` marks where a frame stops fitting the budget
//! and a spatial grid would be needed instead.

use super::particle::Particle;

/// Two particles are linked when strictly closer than `max_distance`
#[inline]
pub fn within_reach(a: &Particle, b: &Particle, max_distance: f64) -> bool {
    a.pos.distance(b.pos) < max_distance
}

/// All linked pairs `(i, j)` with `i < j`, in index order
pub fn connected_pairs(
    particles: &[Particle],
    max_distance: f64,
) -> impl Iterator<Item = (usize, usize)> + '_ {
    (0..particles.len()).flat_map(move |i| {
        (i + 1..particles.len())
            .filter(move |&j| within_reach(&particles[i], &particles[j], max_distance))
            .map(move |j| (i, j))
    })
}
