//! Configuration types for loading generation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! generation scenario. A scenario consists of:
//!
//! - [`EngineConfig`]      – how enclosed mass is computed (direct / sorted, parallel)
//! - [`ParametersConfig`]  – gravitational constant and random seed
//! - [`MorphologyConfig`]  – which ensemble to generate, with its parameters
//! - [`HaloConfig`]        – optional halo around a central mass
//! - [`CenterConfig`]      – optional centre position / velocity of the galaxy
//! - [`ScenarioConfig`]    – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! An example 3D disk scenario matching these types:
//!
//! ```yaml
//! engine:
//!   enclosed_mass: "sorted"   # or "direct"
//!   parallel: false
//!
//! parameters:
//!   G: 4.302e-3               # optional, pc Msun^-1 (km/s)^2
//!   seed: 42                  # optional, omit for an entropy-seeded run
//!
//! morphology:
//!   kind: disk_3d
//!   nb_stars: 2000
//!   radius: 10.0
//!   total_mass: 1.0e9
//!   z_offset_max: 0.5
//!
//! halo:
//!   central_mass: 1.0e9
//!   halo_radius: 20.0
//!
//! center:
//!   x: [ 0.0, 0.0, 0.0 ]
//!   v: [ 0.0, 0.0, 0.0 ]
//! ```
//!
//! `Scenario::build_scenario` maps this configuration onto the runtime types;
//! parameter validation happens there, in the samplers.

use std::io::Read;

use serde::Deserialize;

/// Enclosed-mass method used by the disk and spiral samplers
/// `enclosed_mass: "direct"` or `enclosed_mass: "sorted"`
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EnclosedMassConfig {
    #[serde(rename = "direct")] // Pairwise scan over all particles, O(N^2)
    Direct,

    #[default]
    #[serde(rename = "sorted")] // Sort by distance once and use prefix sums, O(N log N)
    Sorted,
}

/// Which side of a particle counts as "enclosed"
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccumulationConfig {
    #[serde(rename = "inside_out")] // mass at strictly smaller distance
    InsideOut,

    #[serde(rename = "outside_in")] // mass at strictly larger distance
    OutsideIn,
}

/// High-level engine configuration
#[derive(Deserialize, Debug, Clone, Default)]
pub struct EngineConfig {
    #[serde(default)]
    pub enclosed_mass: EnclosedMassConfig, // enclosed-mass method
    #[serde(default)]
    pub parallel: bool, // `true` - run the per-particle scan on the rayon pool
}

/// Global physical parameters for a scenario
#[allow(non_snake_case)]
#[derive(Deserialize, Debug, Clone, Default)]
pub struct ParametersConfig {
    pub G: Option<f64>, // gravitational constant, defaults to the pc/Msun/km s^-1 value
    pub seed: Option<u64>, // deterministic seed to make runs reproducible
}

/// Morphology of the generated ensemble, tagged by `kind`
#[derive(Deserialize, Debug, Clone)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MorphologyConfig {
    Ring {
        nb_particles: usize,
        radius: f64,
        central_mass: f64,
    },
    MultiRing {
        nb_particles: Vec<usize>,
        radii: Vec<f64>,
        central_mass: f64,
    },
    #[serde(rename = "disk_2d")]
    Disk2D {
        nb_stars: usize,
        radius: f64,
        total_mass: f64,
    },
    #[serde(rename = "disk_3d")]
    Disk3D {
        nb_stars: usize,
        radius: f64,
        total_mass: f64,
        z_offset_max: f64,
        accumulation: Option<AccumulationConfig>, // defaults to outside_in
    },
    SpiralArms {
        nb_stars: usize,
        nb_arms: usize,
        radius: f64,
        arm_offset: f64,
        total_mass: f64,
        rotation_factor: f64,
        quantize_angle: Option<bool>, // defaults to true
    },
    UniformSphere {
        nb_stars: usize,
        radius: f64,
        total_mass: f64,
    },
}

/// Halo around the galaxy's central mass
#[derive(Deserialize, Debug, Clone)]
pub struct HaloConfig {
    pub central_mass: f64, // point mass at the centre of the halo
    pub halo_radius: f64, // characteristic halo radius
}

/// Where the galaxy sits and how it moves as a whole
#[derive(Deserialize, Debug, Clone)]
pub struct CenterConfig {
    pub x: Vec<f64>, // centre position, 2 or 3 components to match the morphology
    pub v: Vec<f64>, // centre velocity, same length as `x`
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone)]
pub struct ScenarioConfig {
    #[serde(default)]
    pub engine: EngineConfig, // Enclosed-mass engine options
    #[serde(default)]
    pub parameters: ParametersConfig, // Gravitational constant and seed
    pub morphology: MorphologyConfig, // What to generate
    pub halo: Option<HaloConfig>, // Optional halo model
    pub center: Option<CenterConfig>, // Optional centre state
}

impl ScenarioConfig {
    /// Parse a scenario from YAML text
    pub fn from_yaml_str(text: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(text)
    }

    /// Parse a scenario from any reader yielding YAML
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_reader(reader)
    }
}
