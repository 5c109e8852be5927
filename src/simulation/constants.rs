//! Physical constants in the generator's unit system
//!
//! Lengths are in parsecs, masses in solar masses and velocities in km/s.

/// Gravitational constant in pc · M_sun^-1 · (km/s)^2
pub const GRAVITATIONAL_CONSTANT: f64 = 4.302e-3;

/// Fractional step used by the halo's finite-difference density (r ± 1%)
pub const DENSITY_SHELL_FRACTION: f64 = 0.01;
