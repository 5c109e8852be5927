//! Build fully-initialized galaxy scenarios from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces a runtime bundle
//! (`Scenario`) containing:
//! - engine settings (`Engine`)
//! - physical parameters (`Parameters`)
//! - the generated galaxy at t = 0 (`GalaxyState`, 2D or 3D by morphology)
//!
//! All validation happens in the samplers and the halo constructor, so a
//! scenario is either fully built or not built at all.

use crate::configuration::config::{AccumulationConfig, CenterConfig, HaloConfig, MorphologyConfig, ScenarioConfig};
use crate::error::{ensure_same_len, GenResult};
use crate::generation::disk::{disk_2d, disk_3d};
use crate::generation::ring::{multi_ring, ring};
use crate::generation::sphere::uniform_sphere;
use crate::generation::spiral_arms::spiral_arms_2d;
use crate::simulation::constants::GRAVITATIONAL_CONSTANT;
use crate::simulation::enclosed_mass::Accumulation;
use crate::simulation::engine::Engine;
use crate::simulation::galaxy::{Galaxy2, Galaxy3};
use crate::simulation::halo::HaloModel;
use crate::simulation::params::{Disk3DParams, DiskParams, Parameters, SphereParams, SpiralArmParams};
use crate::simulation::states::{NVec, ParticleSet2, ParticleSet3};

/// Generated galaxy, planar or spatial depending on the morphology
#[derive(Debug, Clone, PartialEq)]
pub enum GalaxyState {
    Planar(Galaxy2),
    Spatial(Galaxy3),
}

impl GalaxyState {
    pub fn dimension(&self) -> usize {
        match self {
            GalaxyState::Planar(_) => 2,
            GalaxyState::Spatial(_) => 3,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            GalaxyState::Planar(g) => g.particles().len(),
            GalaxyState::Spatial(g) => g.particles().len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Runtime bundle built from a [`ScenarioConfig`]
#[derive(Debug, Clone, PartialEq)]
pub struct Scenario {
    pub engine: Engine,
    pub parameters: Parameters,
    pub galaxy: GalaxyState,
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> GenResult<Self> {
        // Engine (runtime) from EngineConfig
        let engine = Engine::from(&cfg.engine);

        // Parameters (runtime) from ParametersConfig
        let parameters = Parameters {
            G: cfg.parameters.G.unwrap_or(GRAVITATIONAL_CONSTANT),
            seed: cfg.parameters.seed,
        };

        // Halo: built first so a bad halo fails before sampling
        let halo = cfg
            .halo
            .as_ref()
            .map(|h: &HaloConfig| HaloModel::with_gravity_const(h.central_mass, h.halo_radius, parameters.G))
            .transpose()?;

        let galaxy = match generate(&cfg.morphology, &parameters, &engine)? {
            Generated::Planar(set) => {
                let mut galaxy = Galaxy2::new(set);
                if let Some(h) = halo {
                    galaxy = galaxy.with_halo(h);
                }
                if let Some(c) = &cfg.center {
                    let (x, v) = center_vectors::<2>(c)?;
                    galaxy = galaxy.placed_at(x, v);
                }
                GalaxyState::Planar(galaxy)
            }
            Generated::Spatial(set) => {
                let mut galaxy = Galaxy3::new(set);
                if let Some(h) = halo {
                    galaxy = galaxy.with_halo(h);
                }
                if let Some(c) = &cfg.center {
                    let (x, v) = center_vectors::<3>(c)?;
                    galaxy = galaxy.placed_at(x, v);
                }
                GalaxyState::Spatial(galaxy)
            }
        };

        log::info!(
            "scenario built: {}D, {} particles, halo = {}",
            galaxy.dimension(),
            galaxy.len(),
            cfg.halo.is_some()
        );

        Ok(Self {
            engine,
            parameters,
            galaxy,
        })
    }
}

enum Generated {
    Planar(ParticleSet2),
    Spatial(ParticleSet3),
}

/// Dispatch a morphology to its sampler
fn generate(morphology: &MorphologyConfig, p: &Parameters, engine: &Engine) -> GenResult<Generated> {
    let set = match morphology {
        MorphologyConfig::Ring {
            nb_particles,
            radius,
            central_mass,
        } => Generated::Planar(ring(*nb_particles, *radius, p.G, *central_mass)?),
        MorphologyConfig::MultiRing {
            nb_particles,
            radii,
            central_mass,
        } => Generated::Planar(multi_ring(nb_particles, radii, p.G, *central_mass)?),
        MorphologyConfig::Disk2D {
            nb_stars,
            radius,
            total_mass,
        } => {
            let params = DiskParams {
                nb_stars: *nb_stars,
                radius: *radius,
                total_mass: *total_mass,
            };
            Generated::Planar(disk_2d(&params, p.G, p.seed, engine)?)
        }
        MorphologyConfig::Disk3D {
            nb_stars,
            radius,
            total_mass,
            z_offset_max,
            accumulation,
        } => {
            let mut params = Disk3DParams::new(*nb_stars, *radius, *total_mass, *z_offset_max);
            if let Some(acc) = accumulation {
                params.accumulation = match acc {
                    AccumulationConfig::InsideOut => Accumulation::InsideOut,
                    AccumulationConfig::OutsideIn => Accumulation::OutsideIn,
                };
            }
            Generated::Spatial(disk_3d(&params, p.G, p.seed, engine)?)
        }
        MorphologyConfig::SpiralArms {
            nb_stars,
            nb_arms,
            radius,
            arm_offset,
            total_mass,
            rotation_factor,
            quantize_angle,
        } => {
            let params = SpiralArmParams {
                nb_stars: *nb_stars,
                nb_arms: *nb_arms,
                radius: *radius,
                arm_offset: *arm_offset,
                total_mass: *total_mass,
                rotation_factor: *rotation_factor,
                quantize_angle: quantize_angle.unwrap_or(true),
            };
            Generated::Planar(spiral_arms_2d(&params, p.G, p.seed, engine)?)
        }
        MorphologyConfig::UniformSphere {
            nb_stars,
            radius,
            total_mass,
        } => {
            let params = SphereParams {
                nb_stars: *nb_stars,
                radius: *radius,
                total_mass: *total_mass,
            };
            Generated::Spatial(uniform_sphere(&params, p.G, p.seed)?)
        }
    };
    Ok(set)
}

/// Centre position / velocity as D-vectors
fn center_vectors<const D: usize>(c: &CenterConfig) -> GenResult<(NVec<D>, NVec<D>)> {
    ensure_same_len("center.x", c.x.len(), "dimension", D)?;
    ensure_same_len("center.v", c.v.len(), "dimension", D)?;
    Ok((NVec::<D>::from_column_slice(&c.x), NVec::<D>::from_column_slice(&c.v)))
}
