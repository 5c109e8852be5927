pub mod constants;
pub mod states;
pub mod params;
pub mod engine;
pub mod enclosed_mass;
pub mod profiles;
pub mod halo;
pub mod galaxy;
pub mod scenario;
