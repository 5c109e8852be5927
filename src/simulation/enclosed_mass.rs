//! # Enclosed mass and circular velocities
//!
//! The disk and spiral samplers give every particle the circular speed
//! `sqrt(G * M_enc / d)`, where `M_enc` is the total mass of the particles on
//! one side of it in planar distance `d`.
//!
//! Two ways to get `M_enc`:
//!
//! - [`EnclosedMassMethod::Direct`]: for each particle scan every other
//!   particle. O(N^2), trivially parallel (each particle only reads the shared
//!   distance and mass arrays), and the reference result.
//! - [`EnclosedMassMethod::Sorted`]: sort the distances once, build prefix
//!   (or suffix) sums of mass, and answer each particle with a binary search.
//!   O(N log N).
//!
//! Both honour the strict inequality: particles at exactly the same distance
//! never count each other. Sums are taken in a different order, so the two
//! methods agree to rounding, not bit for bit.

use rayon::prelude::*;

use crate::simulation::engine::Engine;
use crate::simulation::states::NVec2;

/// Which particles count as enclosed by particle `i`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Accumulation {
    /// Mass at distance strictly less than `d_i` (the usual enclosed mass)
    #[default]
    InsideOut,
    /// Mass at distance strictly greater than `d_i`
    OutsideIn,
}

impl Accumulation {
    #[inline]
    fn counts(self, d_j: f64, d_i: f64) -> bool {
        match self {
            Accumulation::InsideOut => d_j < d_i,
            Accumulation::OutsideIn => d_j > d_i,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EnclosedMassMethod {
    Direct,
    #[default]
    Sorted,
}

/// Enclosed mass for every particle
///
/// `distances` and `masses` are index-aligned; masses are expected to be
/// non-negative.
pub fn enclosed_masses(distances: &[f64], masses: &[f64], accumulation: Accumulation, engine: &Engine) -> Vec<f64> {
    debug_assert_eq!(distances.len(), masses.len());
    log::debug!(
        "enclosed mass: n = {}, method = {:?}, accumulation = {:?}, parallel = {}",
        distances.len(),
        engine.enclosed_mass,
        accumulation,
        engine.parallel
    );
    match engine.enclosed_mass {
        EnclosedMassMethod::Direct if engine.parallel => enclosed_direct_par(distances, masses, accumulation),
        EnclosedMassMethod::Direct => enclosed_direct(distances, masses, accumulation),
        EnclosedMassMethod::Sorted => enclosed_sorted(distances, masses, accumulation),
    }
}

/// Mass on the `accumulation` side of `d_i`, by full scan
#[inline]
fn enclosed_one(d_i: f64, distances: &[f64], masses: &[f64], accumulation: Accumulation) -> f64 {
    distances
        .iter()
        .zip(masses)
        .filter(|(&d_j, _)| accumulation.counts(d_j, d_i))
        .map(|(_, &m_j)| m_j)
        .sum()
}

/// Reference O(N^2) pairwise scan
pub fn enclosed_direct(distances: &[f64], masses: &[f64], accumulation: Accumulation) -> Vec<f64> {
    distances
        .iter()
        .map(|&d_i| enclosed_one(d_i, distances, masses, accumulation))
        .collect()
}

/// Same scan as [`enclosed_direct`], one rayon task per particle
pub fn enclosed_direct_par(distances: &[f64], masses: &[f64], accumulation: Accumulation) -> Vec<f64> {
    distances
        .par_iter()
        .map(|&d_i| enclosed_one(d_i, distances, masses, accumulation))
        .collect()
}

/// O(N log N) version: sort once, cumulative sums, binary search per particle
pub fn enclosed_sorted(distances: &[f64], masses: &[f64], accumulation: Accumulation) -> Vec<f64> {
    let n = distances.len();

    // Indices ordered by distance
    let mut order: Vec<usize> = (0..n).collect();
    order.sort_by(|&a, &b| distances[a].total_cmp(&distances[b]));
    let sorted: Vec<f64> = order.iter().map(|&k| distances[k]).collect();

    match accumulation {
        Accumulation::InsideOut => {
            // below[k] = mass of the k nearest particles
            let mut below = Vec::with_capacity(n + 1);
            below.push(0.0);
            let mut acc = 0.0;
            for &k in &order {
                acc += masses[k];
                below.push(acc);
            }
            distances
                .iter()
                .map(|&d_i| below[sorted.partition_point(|&d| d < d_i)])
                .collect()
        }
        Accumulation::OutsideIn => {
            // above[k] = mass of the particles from sorted position k outwards
            let mut above = vec![0.0; n + 1];
            for k in (0..n).rev() {
                above[k] = above[k + 1] + masses[order[k]];
            }
            distances
                .iter()
                .map(|&d_i| above[sorted.partition_point(|&d| d <= d_i)])
                .collect()
        }
    }
}

/// Circular speed `sqrt(G M / d)`; zero at `d == 0`
#[inline]
pub fn circular_speed(gravity_const: f64, enclosed_mass: f64, distance: f64) -> f64 {
    if distance > 0.0 {
        (gravity_const * enclosed_mass.max(0.0) / distance).sqrt()
    } else {
        0.0
    }
}

/// Planar velocity of magnitude `speed` perpendicular to azimuth `angle`
#[inline]
pub fn tangential_velocity(speed: f64, angle: f64) -> NVec2 {
    let beta = angle + std::f64::consts::FRAC_PI_2;
    NVec2::new(speed * beta.cos(), speed * beta.sin())
}

/// Tangential circular velocities for particles at (`distances`, `angles`)
pub fn circular_velocities(
    gravity_const: f64,
    distances: &[f64],
    angles: &[f64],
    masses: &[f64],
    accumulation: Accumulation,
    engine: &Engine,
) -> Vec<NVec2> {
    let enclosed = enclosed_masses(distances, masses, accumulation, engine);
    distances
        .iter()
        .zip(angles)
        .zip(&enclosed)
        .map(|((&d, &a), &m)| tangential_velocity(circular_speed(gravity_const, m, d), a))
        .collect()
}
