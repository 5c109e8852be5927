//! Flat disk with stars clustered along wound arms
//!
//! Per star, with `s = u^2` a normalized distance concentrated near the centre:
//! - the azimuth is snapped to the nearest arm (multiples of `2π / nb_arms`)
//! - a jitter `o = (w * spread - spread / 2) / s` is squared keeping its sign,
//!   so stars near the centre scatter widely and outer stars hug their arm
//! - `s * rotation_factor` is added, which winds the arms
//! - optionally the angle is truncated to an integer, producing the banded
//!   look of the classic output
//!
//! Masses and speeds follow the 2D disk (inside-out enclosed mass).

use std::f64::consts::TAU;

use crate::error::{ensure_positive, GenResult};
use crate::generation::rng::{normalized_masses, scaled_draws, seeded_rng, uniform_draws};
use crate::simulation::enclosed_mass::{circular_velocities, Accumulation};
use crate::simulation::engine::Engine;
use crate::simulation::params::SpiralArmParams;
use crate::simulation::states::{NVec2, ParticleSet2};

/// Signed square of the arm jitter at normalized distance `s`
fn arm_jitter(raw: f64, spread: f64, s: f64) -> f64 {
    if s <= 0.0 {
        return 0.0;
    }
    let offset = (raw - spread / 2.0) / s;
    offset * offset.abs()
}

/// Final azimuth of one star
fn arm_angle(azimuth: f64, jitter: f64, s: f64, arm_separation: f64, params: &SpiralArmParams) -> f64 {
    let snapped = (azimuth / arm_separation).round() * arm_separation;
    let angle = snapped + jitter + s * params.rotation_factor;
    if params.quantize_angle {
        angle.trunc()
    } else {
        angle
    }
}

pub fn spiral_arms_2d(
    params: &SpiralArmParams,
    gravity_const: f64,
    seed: Option<u64>,
    engine: &Engine,
) -> GenResult<ParticleSet2> {
    params.validate()?;
    ensure_positive("gravity_const", gravity_const)?;

    let n = params.nb_stars;
    let arm_separation = TAU / params.nb_arms as f64;
    let mut rng = seeded_rng(seed);

    let normalized: Vec<f64> = uniform_draws(&mut rng, n).into_iter().map(|u| u * u).collect();
    let azimuths = scaled_draws(&mut rng, n, TAU);
    let raw_offsets = scaled_draws(&mut rng, n, params.arm_offset);

    let angles: Vec<f64> = normalized
        .iter()
        .zip(&azimuths)
        .zip(&raw_offsets)
        .map(|((&s, &az), &raw)| {
            let jitter = arm_jitter(raw, params.arm_offset, s);
            arm_angle(az, jitter, s, arm_separation, params)
        })
        .collect();

    let distances: Vec<f64> = normalized.iter().map(|s| s * params.radius).collect();
    let positions: Vec<NVec2> = distances
        .iter()
        .zip(&angles)
        .map(|(&d, &a)| NVec2::new(a.cos() * d, a.sin() * d))
        .collect();

    let masses = normalized_masses(&mut rng, n, params.total_mass);
    let velocities = circular_velocities(gravity_const, &distances, &angles, &masses, Accumulation::InsideOut, engine);

    log::info!(
        "generated spiral_arms: {} stars, {} arms, r = {}, M = {}",
        n,
        params.nb_arms,
        params.radius,
        params.total_mass
    );
    ParticleSet2::new(positions, velocities, masses)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn jitter_keeps_sign_and_grows_inward() {
        let near = arm_jitter(0.0, 1.0, 0.5);
        let far = arm_jitter(0.0, 1.0, 1.0);
        assert!(near < 0.0 && far < 0.0);
        assert!(near.abs() > far.abs());
        assert_eq!(arm_jitter(1.0, 1.0, 1.0), 0.25);
    }

    #[test]
    fn jitter_is_zero_at_centre() {
        assert_eq!(arm_jitter(0.3, 1.0, 0.0), 0.0);
    }
}
