//! Massless halo around a point-mass galaxy core
//!
//! Inside `halo_radius` the enclosed mass grows like an isothermal-ish halo,
//! `v_h^2 r^3 / (G (r + R)^2)` with `v_h = 2 sqrt(G M / R)`; at and beyond
//! `halo_radius` it is just the central mass. The two branches meet at
//! `r = R`, where the inner formula also gives `M`.
//!
//! Density is the finite-difference derivative of that mass over a ±1% shell,
//! and dynamical friction is a Chandrasekhar-like drag regularized by
//! `(1 + |v_rel|)^3` so it stays finite at low relative speed.

use std::f64::consts::PI;

use crate::error::{ensure_positive, ensure_same_len, GenResult};
use crate::simulation::constants::{DENSITY_SHELL_FRACTION, GRAVITATIONAL_CONSTANT};
use crate::simulation::profiles::DensityProfile;
use crate::simulation::states::NVec;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HaloModel {
    central_mass: f64, // point mass at the centre
    halo_radius: f64, // characteristic radius R
    gravity_const: f64, // G
    halo_velocity: f64, // v_h = 2 sqrt(G M / R)
}

impl HaloModel {
    /// Halo in the default unit system
    pub fn new(central_mass: f64, halo_radius: f64) -> GenResult<Self> {
        Self::with_gravity_const(central_mass, halo_radius, GRAVITATIONAL_CONSTANT)
    }

    pub fn with_gravity_const(central_mass: f64, halo_radius: f64, gravity_const: f64) -> GenResult<Self> {
        ensure_positive("central_mass", central_mass)?;
        ensure_positive("halo_radius", halo_radius)?;
        ensure_positive("gravity_const", gravity_const)?;

        let halo_velocity = 2.0 * (gravity_const * central_mass / halo_radius).sqrt();
        log::debug!("halo: M = {central_mass}, R = {halo_radius}, v_h = {halo_velocity}");
        Ok(Self {
            central_mass,
            halo_radius,
            gravity_const,
            halo_velocity,
        })
    }

    pub fn central_mass(&self) -> f64 {
        self.central_mass
    }

    pub fn halo_radius(&self) -> f64 {
        self.halo_radius
    }

    pub fn gravity_const(&self) -> f64 {
        self.gravity_const
    }

    pub fn halo_velocity(&self) -> f64 {
        self.halo_velocity
    }

    /// Enclosed mass at a single radius
    pub fn interior_mass_at(&self, r: f64) -> f64 {
        if r < self.halo_radius {
            let rr = r + self.halo_radius;
            self.halo_velocity * self.halo_velocity * r.powi(3) / (self.gravity_const * rr * rr)
        } else {
            self.central_mass
        }
    }

    /// Enclosed mass at every radius
    pub fn interior_mass(&self, radii: &[f64]) -> Vec<f64> {
        radii.iter().map(|&r| self.interior_mass_at(r)).collect()
    }

    /// Shell density at a single radius
    pub fn density_at(&self, r: f64) -> f64 {
        if r == 0.0 {
            // 0/0 in the shell quotient; small-r limit of the inner branch
            return 3.0 * self.halo_velocity * self.halo_velocity
                / (4.0 * PI * self.gravity_const * self.halo_radius * self.halo_radius);
        }
        let r_in = (1.0 - DENSITY_SHELL_FRACTION) * r;
        let r_out = (1.0 + DENSITY_SHELL_FRACTION) * r;
        let dm = self.interior_mass_at(r_out) - self.interior_mass_at(r_in);
        let dv = 4.0 / 3.0 * PI * (r_out.powi(3) - r_in.powi(3));
        dm / dv
    }

    /// Shell density at every radius
    pub fn density(&self, radii: &[f64]) -> Vec<f64> {
        radii.iter().map(|&r| self.density_at(r)).collect()
    }

    /// Drag on a body of `mass` at radius `r` moving at `velocity`
    pub fn dynamic_friction_at<const D: usize>(
        &self,
        r: f64,
        velocity: &NVec<D>,
        central_velocity: &NVec<D>,
        mass: f64,
    ) -> NVec<D> {
        let rho = self.density_at(r);
        let rel = velocity - central_velocity;
        let speed = rel.norm();
        let g2 = self.gravity_const * self.gravity_const;
        rel * (-4.0 * PI * g2 * 3.0 * mass * rho / (1.0 + speed).powi(3))
    }

    /// Drag for every (radius, velocity) pair
    ///
    /// Fails with a length mismatch if `radii` and `velocities` differ in length.
    pub fn dynamic_friction<const D: usize>(
        &self,
        radii: &[f64],
        velocities: &[NVec<D>],
        central_velocity: &NVec<D>,
        mass: f64,
    ) -> GenResult<Vec<NVec<D>>> {
        ensure_same_len("radii", radii.len(), "velocities", velocities.len())?;
        Ok(radii
            .iter()
            .zip(velocities)
            .map(|(&r, v)| self.dynamic_friction_at(r, v, central_velocity, mass))
            .collect())
    }
}

impl DensityProfile for HaloModel {
    fn density(&self, r: f64) -> f64 {
        self.density_at(r)
    }
}
