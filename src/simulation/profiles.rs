//! Analytic spherical density profiles
//!
//! Each profile is a small value type implementing [`DensityProfile`]. They
//! are reference shapes (test oracles, comparison curves); the samplers do
//! not draw from them.

use std::f64::consts::PI;
use std::fmt;
use std::str::FromStr;

use crate::error::GenerationError;

/// Trait for radius -> density maps
/// Implementations provide the scalar form; the slice form maps over it
pub trait DensityProfile {
    fn density(&self, r: f64) -> f64;

    fn densities(&self, radii: &[f64]) -> Vec<f64> {
        radii.iter().map(|&r| self.density(r)).collect()
    }
}

/// Constant density inside `r0`, nothing outside
pub struct UniformSphere {
    pub r0: f64, // cutoff radius
    pub mass: f64, // total mass
}

impl DensityProfile for UniformSphere {
    fn density(&self, r: f64) -> f64 {
        if r > self.r0 {
            0.0
        } else {
            3.0 * self.mass / (4.0 * PI * self.r0.powi(3))
        }
    }
}

/// Singular isothermal sphere, `p0 (r / r0)^-2`
///
/// Infinite at r = 0.
pub struct Isothermal {
    pub r0: f64, // reference radius
    pub p0: f64, // density at r0
}

impl DensityProfile for Isothermal {
    fn density(&self, r: f64) -> f64 {
        self.p0 * (r / self.r0).powi(-2)
    }
}

pub struct Plummer {
    pub r0: f64, // scale radius
    pub mass: f64, // total mass
}

impl DensityProfile for Plummer {
    fn density(&self, r: f64) -> f64 {
        let r02 = self.r0 * self.r0;
        3.0 * self.mass / (4.0 * PI) * r02 / (r02 + r * r).powf(1.5)
    }
}

pub struct Hernquist {
    pub r0: f64, // scale radius
    pub mass: f64, // total mass
}

impl DensityProfile for Hernquist {
    fn density(&self, r: f64) -> f64 {
        self.mass / (2.0 * PI) * self.r0 / (r * (self.r0 + r).powi(3))
    }
}

pub struct Jaffe {
    pub r0: f64, // scale radius
    pub mass: f64, // total mass
}

impl DensityProfile for Jaffe {
    fn density(&self, r: f64) -> f64 {
        self.mass / (4.0 * PI) * self.r0 / (r * r * (self.r0 + r).powi(2))
    }
}

/// Profile family selector
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileKind {
    UniformSphere,
    Isothermal,
    Plummer,
    Hernquist,
    Jaffe,
}

impl ProfileKind {
    pub const ALL: [ProfileKind; 5] = [
        ProfileKind::UniformSphere,
        ProfileKind::Isothermal,
        ProfileKind::Plummer,
        ProfileKind::Hernquist,
        ProfileKind::Jaffe,
    ];

    /// Concrete profile; `mass_or_p0` is the reference density for the
    /// isothermal sphere and the total mass otherwise
    pub fn build(self, r0: f64, mass_or_p0: f64) -> Box<dyn DensityProfile + Send + Sync> {
        match self {
            ProfileKind::UniformSphere => Box::new(UniformSphere { r0, mass: mass_or_p0 }),
            ProfileKind::Isothermal => Box::new(Isothermal { r0, p0: mass_or_p0 }),
            ProfileKind::Plummer => Box::new(Plummer { r0, mass: mass_or_p0 }),
            ProfileKind::Hernquist => Box::new(Hernquist { r0, mass: mass_or_p0 }),
            ProfileKind::Jaffe => Box::new(Jaffe { r0, mass: mass_or_p0 }),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ProfileKind::UniformSphere => "uniform_sphere",
            ProfileKind::Isothermal => "isothermal",
            ProfileKind::Plummer => "plummer",
            ProfileKind::Hernquist => "hernquist",
            ProfileKind::Jaffe => "jaffe",
        }
    }
}

impl fmt::Display for ProfileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ProfileKind {
    type Err = GenerationError;

    /// Accepts snake_case and camelCase names, case-insensitively
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s.chars().filter(|c| *c != '_' && *c != '-').collect::<String>().to_ascii_lowercase();
        match key.as_str() {
            "uniformsphere" | "uniform" => Ok(ProfileKind::UniformSphere),
            "isothermal" | "isothermalsphere" => Ok(ProfileKind::Isothermal),
            "plummer" => Ok(ProfileKind::Plummer),
            "hernquist" => Ok(ProfileKind::Hernquist),
            "jaffe" => Ok(ProfileKind::Jaffe),
            _ => Err(GenerationError::UnknownProfile(s.to_string())),
        }
    }
}

/// Densities of profile `kind` at every radius
pub fn density_profile(kind: ProfileKind, radii: &[f64], r0: f64, mass_or_p0: f64) -> Vec<f64> {
    kind.build(r0, mass_or_p0).densities(radii)
}

/// [`density_profile`] with the kind given by name
///
/// Unknown names are a configuration error.
pub fn density_profile_named(kind: &str, radii: &[f64], r0: f64, mass_or_p0: f64) -> Result<Vec<f64>, GenerationError> {
    let kind: ProfileKind = kind.parse()?;
    Ok(density_profile(kind, radii, r0, mass_or_p0))
}
