//! A generated ensemble placed in space, with an optional halo
//!
//! `Galaxy` composes a [`ParticleSet`] with an optional [`HaloModel`] and the
//! centre's position and velocity. Halo behaviour is an add-on, not a
//! different kind of galaxy: any morphology can carry a halo.

use crate::error::GenResult;
use crate::generation::ring::multi_ring;
use crate::simulation::halo::HaloModel;
use crate::simulation::states::{NVec, ParticleSet};

#[derive(Debug, Clone, PartialEq)]
pub struct Galaxy<const D: usize> {
    particles: ParticleSet<D>, // particle state, already in the global frame
    halo: Option<HaloModel>, // halo around the central mass, if any
    center_position: NVec<D>, // centre of the galaxy
    center_velocity: NVec<D>, // bulk velocity of the galaxy
}

pub type Galaxy2 = Galaxy<2>;
pub type Galaxy3 = Galaxy<3>;

impl<const D: usize> Galaxy<D> {
    /// Galaxy centred at the origin, at rest, without a halo
    pub fn new(particles: ParticleSet<D>) -> Self {
        Self {
            particles,
            halo: None,
            center_position: NVec::<D>::zeros(),
            center_velocity: NVec::<D>::zeros(),
        }
    }

    pub fn with_halo(mut self, halo: HaloModel) -> Self {
        self.halo = Some(halo);
        self
    }

    /// Move the galaxy so its centre sits at `x_c` moving at `v_c`
    ///
    /// Particles are shifted by the change of centre, so calling this twice
    /// does not stack the offsets.
    pub fn placed_at(self, x_c: NVec<D>, v_c: NVec<D>) -> Self {
        let dx = x_c - self.center_position;
        let dv = v_c - self.center_velocity;
        Self {
            particles: self.particles.translated(&dx, &dv),
            halo: self.halo,
            center_position: x_c,
            center_velocity: v_c,
        }
    }

    pub fn particles(&self) -> &ParticleSet<D> {
        &self.particles
    }

    pub fn halo(&self) -> Option<&HaloModel> {
        self.halo.as_ref()
    }

    pub fn center_position(&self) -> &NVec<D> {
        &self.center_position
    }

    pub fn center_velocity(&self) -> &NVec<D> {
        &self.center_velocity
    }

    /// Distance of every particle from the centre
    pub fn radii_from_center(&self) -> Vec<f64> {
        self.particles
            .positions()
            .iter()
            .map(|x| (x - self.center_position).norm())
            .collect()
    }

    /// Halo drag on a body of `mass` at each particle's position and velocity
    ///
    /// `None` when the galaxy has no halo.
    pub fn halo_drag(&self, mass: f64) -> Option<Vec<NVec<D>>> {
        let halo = self.halo.as_ref()?;
        let radii = self.radii_from_center();
        Some(
            radii
                .iter()
                .zip(self.particles.velocities())
                .map(|(&r, v)| halo.dynamic_friction_at(r, v, &self.center_velocity, mass))
                .collect(),
        )
    }

    pub fn into_particles(self) -> ParticleSet<D> {
        self.particles
    }
}

impl Galaxy<2> {
    /// Concentric tracer rings orbiting `central_mass`, inside `halo`
    pub fn rings(
        nb_particles: &[usize],
        radii: &[f64],
        gravity_const: f64,
        central_mass: f64,
        halo: Option<HaloModel>,
    ) -> GenResult<Self> {
        let particles = multi_ring(nb_particles, radii, gravity_const, central_mass)?;
        let galaxy = Galaxy::new(particles);
        Ok(match halo {
            Some(h) => galaxy.with_halo(h),
            None => galaxy,
        })
    }
}
