pub mod error;
pub mod simulation;
pub mod generation;
pub mod configuration;
pub mod persistence;
pub mod benchmark;

pub use error::{GenerationError, GenResult};

pub use simulation::constants::GRAVITATIONAL_CONSTANT;
pub use simulation::states::{ParticleSet, ParticleSet2, ParticleSet3, NVec, NVec2, NVec3};
pub use simulation::params::{Parameters, DiskParams, Disk3DParams, SpiralArmParams, SphereParams};
pub use simulation::engine::Engine;
pub use simulation::enclosed_mass::{Accumulation, EnclosedMassMethod};
pub use simulation::profiles::{density_profile, density_profile_named, DensityProfile, ProfileKind};
pub use simulation::halo::HaloModel;
pub use simulation::galaxy::{Galaxy, Galaxy2, Galaxy3};
pub use simulation::scenario::{Scenario, GalaxyState};

pub use generation::ring::{ring, multi_ring};
pub use generation::disk::{disk_2d, disk_3d};
pub use generation::spiral_arms::spiral_arms_2d;
pub use generation::sphere::uniform_sphere;

pub use configuration::config::{ScenarioConfig, EngineConfig, ParametersConfig, MorphologyConfig, HaloConfig, CenterConfig};

pub use persistence::state_file::{write_state, write_state_with, read_state, read_state_with, write_galaxy_state};
pub use persistence::state_file::{write_cluster_table, read_cluster_table, ClusterInfo, StateLayout, StateFileError};

pub use benchmark::benchmark::{bench_enclosed_mass, bench_disk_curve};
