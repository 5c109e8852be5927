use std::time::Instant;

use crate::generation::disk::disk_2d;
use crate::simulation::constants::GRAVITATIONAL_CONSTANT;
use crate::simulation::enclosed_mass::{enclosed_direct, enclosed_direct_par, enclosed_sorted, Accumulation};
use crate::simulation::engine::Engine;
use crate::simulation::params::DiskParams;

/// Helper to build deterministic distance / mass arrays of size `n`
fn make_arrays(n: usize) -> (Vec<f64>, Vec<f64>) {
    // deterministic values, no rand needed
    let distances = (0..n).map(|i| ((i as f64 * 0.37).sin() * 5.0).abs()).collect();
    let masses = (0..n).map(|i| 1.0 + (i as f64 * 0.13).cos().abs()).collect();
    (distances, masses)
}

/// Time the three enclosed-mass paths for a range of n
pub fn bench_enclosed_mass() {
    // Different ensemble sizes to test
    let ns = [200, 400, 800, 1600, 3200, 6400, 12800];

    for n in ns {
        let (distances, masses) = make_arrays(n);

        // Warm up
        let _ = enclosed_direct(&distances, &masses, Accumulation::InsideOut);
        let _ = enclosed_sorted(&distances, &masses, Accumulation::InsideOut);

        // Time direct
        let t0 = Instant::now();
        let direct = enclosed_direct(&distances, &masses, Accumulation::InsideOut);
        let dt_direct = t0.elapsed().as_secs_f64();

        // Time direct on the rayon pool
        let t1 = Instant::now();
        let _ = enclosed_direct_par(&distances, &masses, Accumulation::InsideOut);
        let dt_par = t1.elapsed().as_secs_f64();

        // Time sorted prefix sums
        let t2 = Instant::now();
        let sorted = enclosed_sorted(&distances, &masses, Accumulation::InsideOut);
        let dt_sorted = t2.elapsed().as_secs_f64();

        // Largest disagreement between the reference and the fast path
        let max_diff = direct
            .iter()
            .zip(&sorted)
            .map(|(a, b)| (a - b).abs())
            .fold(0.0, f64::max);

        println!(
            "N = {n:5}, direct = {:8.6} s, direct(par) = {:8.6} s, sorted = {:8.6} s, max |diff| = {:.3e}",
            dt_direct, dt_par, dt_sorted, max_diff
        );
    }
}

/// Time a full disk_2d generation per engine for a range of n
/// Paste output directly into a spreadsheet to graph
pub fn bench_disk_curve() {
    println!("N,direct_ms,sorted_ms");

    for n in (1000..=20000).step_by(1000) {
        let params = DiskParams {
            nb_stars: n,
            radius: 1.0,
            total_mass: 1.0,
        };

        let mut row = Vec::with_capacity(2);
        for engine in [Engine::direct(), Engine::sorted()] {
            let t0 = Instant::now();
            if let Err(e) = disk_2d(&params, GRAVITATIONAL_CONSTANT, Some(42), &engine) {
                log::warn!("bench_disk_curve: n = {n}: {e}");
                return;
            }
            row.push(t0.elapsed().as_secs_f64() * 1000.0); // ms
        }

        println!("{},{:.6},{:.6}", n, row[0], row[1]);
    }
}
