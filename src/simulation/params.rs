//! Numerical and physical parameters for generation
//!
//! `Parameters` holds the run-wide settings (gravitational constant, seed).
//! The remaining structs carry the per-morphology inputs of the randomized
//! samplers; each validates itself before any sampling starts.

use crate::error::{ensure_count, ensure_finite, ensure_non_negative, ensure_positive, GenResult};
use crate::simulation::constants::GRAVITATIONAL_CONSTANT;
use crate::simulation::enclosed_mass::Accumulation;

#[allow(non_snake_case)]
#[derive(Debug, Clone, PartialEq)]
pub struct Parameters {
    pub G: f64, // gravitational constant
    pub seed: Option<u64>, // deterministic seed, `None` draws one from the OS
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            G: GRAVITATIONAL_CONSTANT,
            seed: None,
        }
    }
}

/// Flat disk of `nb_stars` inside `radius`
#[derive(Debug, Clone, PartialEq)]
pub struct DiskParams {
    pub nb_stars: usize, // number of particles
    pub radius: f64, // disk radius
    pub total_mass: f64, // masses are rescaled to sum to this
}

impl DiskParams {
    pub fn validate(&self) -> GenResult<()> {
        ensure_count("nb_stars", self.nb_stars)?;
        ensure_positive("radius", self.radius)?;
        ensure_positive("total_mass", self.total_mass)?;
        Ok(())
    }
}

/// Thick disk: a [`DiskParams`] plus vertical structure
#[derive(Debug, Clone, PartialEq)]
pub struct Disk3DParams {
    pub disk: DiskParams,
    pub z_offset_max: f64, // half-thickness at the centre, tapers to 0 at the edge
    pub accumulation: Accumulation, // side of each particle whose mass sets its speed
}

impl Disk3DParams {
    /// Thick disk with the outside-in accumulation the 3D sampler has always used
    pub fn new(nb_stars: usize, radius: f64, total_mass: f64, z_offset_max: f64) -> Self {
        Self {
            disk: DiskParams {
                nb_stars,
                radius,
                total_mass,
            },
            z_offset_max,
            accumulation: Accumulation::OutsideIn,
        }
    }

    pub fn validate(&self) -> GenResult<()> {
        self.disk.validate()?;
        ensure_non_negative("z_offset_max", self.z_offset_max)?;
        Ok(())
    }
}

/// Disk whose stars cluster along `nb_arms` wound arms
#[derive(Debug, Clone, PartialEq)]
pub struct SpiralArmParams {
    pub nb_stars: usize, // number of particles
    pub nb_arms: usize, // number of arms
    pub radius: f64, // outer radius
    pub arm_offset: f64, // spread of the angular jitter around each arm
    pub total_mass: f64, // masses are rescaled to sum to this
    pub rotation_factor: f64, // winding: extra angle per unit normalized distance
    pub quantize_angle: bool, // truncate the final angle to an integer (banding)
}

impl SpiralArmParams {
    pub fn validate(&self) -> GenResult<()> {
        ensure_count("nb_stars", self.nb_stars)?;
        ensure_count("nb_arms", self.nb_arms)?;
        ensure_positive("radius", self.radius)?;
        ensure_non_negative("arm_offset", self.arm_offset)?;
        ensure_positive("total_mass", self.total_mass)?;
        ensure_finite("rotation_factor", self.rotation_factor)?;
        Ok(())
    }
}

/// Ball of `nb_stars` uniform by volume
#[derive(Debug, Clone, PartialEq)]
pub struct SphereParams {
    pub nb_stars: usize, // number of particles
    pub radius: f64, // sphere radius
    pub total_mass: f64, // masses are rescaled to sum to this
}

impl SphereParams {
    pub fn validate(&self) -> GenResult<()> {
        ensure_count("nb_stars", self.nb_stars)?;
        ensure_positive("radius", self.radius)?;
        ensure_positive("total_mass", self.total_mass)?;
        Ok(())
    }
}
