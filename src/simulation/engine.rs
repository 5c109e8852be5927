//! High-level runtime engine settings
//!
//! Selects how the disk and spiral samplers evaluate enclosed mass and
//! whether the per-particle pass runs on the rayon pool

use crate::configuration::config::{EngineConfig, EnclosedMassConfig};
use crate::simulation::enclosed_mass::EnclosedMassMethod;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Engine {
    pub enclosed_mass: EnclosedMassMethod, // direct O(N^2) scan or sorted prefix sums
    pub parallel: bool, // false = serial, true = rayon (direct method only)
}

impl Engine {
    pub fn direct() -> Self {
        Self {
            enclosed_mass: EnclosedMassMethod::Direct,
            parallel: false,
        }
    }

    pub fn sorted() -> Self {
        Self {
            enclosed_mass: EnclosedMassMethod::Sorted,
            parallel: false,
        }
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}

impl From<&EngineConfig> for Engine {
    fn from(cfg: &EngineConfig) -> Self {
        let enclosed_mass = match cfg.enclosed_mass {
            EnclosedMassConfig::Direct => EnclosedMassMethod::Direct,
            EnclosedMassConfig::Sorted => EnclosedMassMethod::Sorted,
        };
        Self {
            enclosed_mass,
            parallel: cfg.parallel,
        }
    }
}
