//! Static ball of stars, uniform by volume
//!
//! Direction: a standard normal 3-vector, normalized (isotropic).
//! Radius: `radius * cbrt(u)`, the inverse CDF of `r^2` on `[0, radius]`.
//! All particles start at rest.

use rand::Rng;
use rand_chacha::ChaChaRng;
use rand_distr::StandardNormal;

use crate::error::{ensure_positive, GenResult};
use crate::generation::rng::{normalized_masses, seeded_rng, uniform_draws};
use crate::simulation::params::SphereParams;
use crate::simulation::states::{NVec3, ParticleSet3};

/// Isotropic unit vector; redraws the (measure-zero) zero vector
fn random_direction(rng: &mut ChaChaRng) -> NVec3 {
    loop {
        let v = NVec3::new(
            rng.sample(StandardNormal),
            rng.sample(StandardNormal),
            rng.sample(StandardNormal),
        );
        let norm = v.norm();
        if norm > 0.0 {
            return v / norm;
        }
    }
}

pub fn uniform_sphere(params: &SphereParams, gravity_const: f64, seed: Option<u64>) -> GenResult<ParticleSet3> {
    params.validate()?;
    ensure_positive("gravity_const", gravity_const)?;

    let n = params.nb_stars;
    let mut rng = seeded_rng(seed);

    let directions: Vec<NVec3> = (0..n).map(|_| random_direction(&mut rng)).collect();
    let positions: Vec<NVec3> = uniform_draws(&mut rng, n)
        .into_iter()
        .zip(directions)
        .map(|(u, dir)| dir * (u.cbrt() * params.radius))
        .collect();

    let masses = normalized_masses(&mut rng, n, params.total_mass);

    log::info!("generated uniform_sphere: {} stars, r = {}, M = {}", n, params.radius, params.total_mass);
    ParticleSet3::new(positions, vec![NVec3::zeros(); n], masses)
}
