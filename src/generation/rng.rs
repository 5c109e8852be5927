//! Per-call random streams
//!
//! Every randomized sampler owns its generator for the duration of one call.
//! Nothing here touches a global or thread-local generator except to draw a
//! fresh seed when the caller did not provide one.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaChaRng;

/// Generator for one sampler call
///
/// A given seed always yields the same stream. Without a seed one is drawn
/// from the thread generator and logged, so an unseeded run can be replayed.
pub fn seeded_rng(seed: Option<u64>) -> ChaChaRng {
    let seed = seed.unwrap_or_else(|| {
        let drawn: u64 = rand::random();
        log::debug!("no seed given, drew seed {drawn}");
        drawn
    });
    ChaChaRng::seed_from_u64(seed)
}

/// `n` independent draws on [0, 1)
pub fn uniform_draws(rng: &mut ChaChaRng, n: usize) -> Vec<f64> {
    (0..n).map(|_| rng.random::<f64>()).collect()
}

/// `n` independent draws on [0, 1) scaled by `scale`
pub fn scaled_draws(rng: &mut ChaChaRng, n: usize, scale: f64) -> Vec<f64> {
    (0..n).map(|_| rng.random::<f64>() * scale).collect()
}

/// `n` uniform masses rescaled so they sum to `total_mass`
///
/// Falls back to equal shares in the (measure-zero) case where every raw draw
/// is exactly zero.
pub fn normalized_masses(rng: &mut ChaChaRng, n: usize, total_mass: f64) -> Vec<f64> {
    let raw = uniform_draws(rng, n);
    let sum: f64 = raw.iter().sum();
    if sum > 0.0 {
        let scale = total_mass / sum;
        raw.into_iter().map(|m| m * scale).collect()
    } else {
        vec![total_mass / n as f64; n]
    }
}
