//! Rings of massless tracers on circular orbits around a central point mass
//!
//! No randomness: particle `i` of `n` sits at angle `i * 2π / n` and moves
//! perpendicular to its radius vector at the circular speed `sqrt(G M / r)`.

use std::f64::consts::TAU;

use crate::error::{ensure_count, ensure_positive, ensure_same_len, GenResult, GenerationError};
use crate::simulation::enclosed_mass::tangential_velocity;
use crate::simulation::states::{NVec2, ParticleSet2};

/// Single ring of `nb_particles` at `radius` around `central_mass`
pub fn ring(nb_particles: usize, radius: f64, gravity_const: f64, central_mass: f64) -> GenResult<ParticleSet2> {
    ensure_count("nb_particles", nb_particles)?;
    ensure_positive("radius", radius)?;
    ensure_positive("gravity_const", gravity_const)?;
    ensure_positive("central_mass", central_mass)?;

    let arc = TAU / nb_particles as f64; // angular spacing
    let speed = (gravity_const * central_mass / radius).sqrt(); // circular speed, same for every particle

    let mut positions = Vec::with_capacity(nb_particles);
    let mut velocities = Vec::with_capacity(nb_particles);
    for i in 0..nb_particles {
        let angle = i as f64 * arc;
        positions.push(NVec2::new(radius * angle.cos(), radius * angle.sin()));
        velocities.push(tangential_velocity(speed, angle));
    }

    log::debug!("ring: n = {nb_particles}, r = {radius}, v = {speed}");
    // Tracers: the central mass carries all the gravity
    ParticleSet2::new(positions, velocities, vec![0.0; nb_particles])
}

/// Concentric rings, concatenated in input order
///
/// `nb_particles[k]` particles are placed on the ring of radius `radii[k]`.
pub fn multi_ring(
    nb_particles: &[usize],
    radii: &[f64],
    gravity_const: f64,
    central_mass: f64,
) -> GenResult<ParticleSet2> {
    ensure_same_len("radii", radii.len(), "nb_particles", nb_particles.len())?;
    if radii.is_empty() {
        return Err(GenerationError::EmptyInput("radii"));
    }

    // Validate every ring before building any of them
    for (&n, &r) in nb_particles.iter().zip(radii) {
        ensure_count("nb_particles", n)?;
        ensure_positive("radius", r)?;
    }

    let rings = nb_particles
        .iter()
        .zip(radii)
        .map(|(&n, &r)| ring(n, r, gravity_const, central_mass))
        .collect::<GenResult<Vec<_>>>()?;

    let set = ParticleSet2::concat(rings);
    log::info!("generated multi_ring: {} rings, {} particles", radii.len(), set.len());
    Ok(set)
}
