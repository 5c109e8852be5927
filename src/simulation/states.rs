//! Core state types for generated initial conditions.
//!
//! A [`ParticleSet`] is the t = 0 phase-space state of one ensemble:
//! - `positions` / `velocities` as nalgebra vectors (`NVec2` in 2D, `NVec3` in 3D)
//! - `masses` as plain scalars
//!
//! The three sequences are index-aligned. A set is built once by a sampler and
//! is never mutated afterwards; helpers that "move" a set return a new one.

use nalgebra::{SVector, Vector2, Vector3};

use crate::error::{ensure_same_len, GenResult};

pub type NVec2 = Vector2<f64>;
pub type NVec3 = Vector3<f64>;
pub type NVec<const D: usize> = SVector<f64, D>;

#[derive(Debug, Clone, PartialEq)]
pub struct ParticleSet<const D: usize> {
    positions: Vec<NVec<D>>, // position of each particle
    velocities: Vec<NVec<D>>, // velocity of each particle
    masses: Vec<f64>, // mass of each particle
}

pub type ParticleSet2 = ParticleSet<2>;
pub type ParticleSet3 = ParticleSet<3>;

impl<const D: usize> ParticleSet<D> {
    /// Build a set from index-aligned sequences
    ///
    /// Fails with a length mismatch if the three sequences differ in length.
    pub fn new(positions: Vec<NVec<D>>, velocities: Vec<NVec<D>>, masses: Vec<f64>) -> GenResult<Self> {
        ensure_same_len("positions", positions.len(), "velocities", velocities.len())?;
        ensure_same_len("positions", positions.len(), "masses", masses.len())?;
        Ok(Self { positions, velocities, masses })
    }

    /// A set with no particles
    pub fn empty() -> Self {
        Self {
            positions: Vec::new(),
            velocities: Vec::new(),
            masses: Vec::new(),
        }
    }

    pub fn positions(&self) -> &[NVec<D>] {
        &self.positions
    }

    pub fn velocities(&self) -> &[NVec<D>] {
        &self.velocities
    }

    pub fn masses(&self) -> &[f64] {
        &self.masses
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn total_mass(&self) -> f64 {
        self.masses.iter().sum()
    }

    /// Euclidean norm of every position
    pub fn radii(&self) -> Vec<f64> {
        self.positions.iter().map(|x| x.norm()).collect()
    }

    /// Concatenate sets in order
    pub fn concat<I>(sets: I) -> Self
    where
        I: IntoIterator<Item = Self>,
    {
        let mut out = Self::empty();
        for set in sets {
            out.positions.extend(set.positions);
            out.velocities.extend(set.velocities);
            out.masses.extend(set.masses);
        }
        out
    }

    /// Copy of this set shifted by `dx` in position and `dv` in velocity
    pub fn translated(&self, dx: &NVec<D>, dv: &NVec<D>) -> Self {
        Self {
            positions: self.positions.iter().map(|x| x + dx).collect(),
            velocities: self.velocities.iter().map(|v| v + dv).collect(),
            masses: self.masses.clone(),
        }
    }
}
