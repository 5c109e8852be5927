//! Randomized disks (2D and thick 3D)
//!
//! Planar radius is drawn uniformly in radius, not in area, so particles
//! crowd toward the centre. Masses are uniform draws rescaled to the total
//! mass. Each particle then gets the circular speed set by the mass on one
//! side of it (see [`crate::simulation::enclosed_mass`]).

use std::f64::consts::TAU;

use crate::error::{ensure_positive, GenResult};
use crate::generation::rng::{normalized_masses, scaled_draws, seeded_rng, uniform_draws};
use crate::simulation::enclosed_mass::{circular_velocities, Accumulation};
use crate::simulation::engine::Engine;
use crate::simulation::params::{Disk3DParams, DiskParams};
use crate::simulation::states::{NVec2, NVec3, ParticleSet2, ParticleSet3};

/// Flat disk in the x-y plane
///
/// Enclosed mass counts particles strictly closer to the centre.
pub fn disk_2d(params: &DiskParams, gravity_const: f64, seed: Option<u64>, engine: &Engine) -> GenResult<ParticleSet2> {
    params.validate()?;
    ensure_positive("gravity_const", gravity_const)?;

    let n = params.nb_stars;
    let mut rng = seeded_rng(seed);

    // Positions
    let distances = scaled_draws(&mut rng, n, params.radius);
    let angles = scaled_draws(&mut rng, n, TAU);
    let positions: Vec<NVec2> = distances
        .iter()
        .zip(&angles)
        .map(|(&d, &a)| NVec2::new(a.cos() * d, a.sin() * d))
        .collect();

    // Masses, then speeds from the enclosed mass
    let masses = normalized_masses(&mut rng, n, params.total_mass);
    let velocities = circular_velocities(gravity_const, &distances, &angles, &masses, Accumulation::InsideOut, engine);

    log::info!("generated disk_2d: {} stars, r = {}, M = {}", n, params.radius, params.total_mass);
    ParticleSet2::new(positions, velocities, masses)
}

/// Thick disk, flattening toward the mid-plane with radius
///
/// Vertical offsets are uniform on `[-z_max, z_max)` scaled by
/// `1 - sqrt(d / radius)`. Velocities stay in the x-y plane and use the
/// planar distance; which side counts as enclosed is
/// `params.accumulation` (outside-in unless overridden).
pub fn disk_3d(params: &Disk3DParams, gravity_const: f64, seed: Option<u64>, engine: &Engine) -> GenResult<ParticleSet3> {
    params.validate()?;
    ensure_positive("gravity_const", gravity_const)?;

    let disk = &params.disk;
    let n = disk.nb_stars;
    let mut rng = seeded_rng(seed);

    // Normalized radii first: the vertical taper uses them before scaling
    let normalized = uniform_draws(&mut rng, n);
    let z_offsets: Vec<f64> = uniform_draws(&mut rng, n)
        .into_iter()
        .zip(&normalized)
        .map(|(w, &u)| (w - 0.5) * 2.0 * params.z_offset_max * (1.0 - u.sqrt()))
        .collect();
    let distances: Vec<f64> = normalized.iter().map(|u| u * disk.radius).collect();
    let angles = scaled_draws(&mut rng, n, TAU);

    let positions: Vec<NVec3> = distances
        .iter()
        .zip(&angles)
        .zip(&z_offsets)
        .map(|((&d, &a), &z)| NVec3::new(a.cos() * d, a.sin() * d, z))
        .collect();

    let masses = normalized_masses(&mut rng, n, disk.total_mass);
    let velocities: Vec<NVec3> =
        circular_velocities(gravity_const, &distances, &angles, &masses, params.accumulation, engine)
            .into_iter()
            .map(|v| NVec3::new(v.x, v.y, 0.0))
            .collect();

    log::info!(
        "generated disk_3d: {} stars, r = {}, M = {}, z_max = {}",
        n,
        disk.radius,
        disk.total_mass,
        params.z_offset_max
    );
    ParticleSet3::new(positions, velocities, masses)
}
