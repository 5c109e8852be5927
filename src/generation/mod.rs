pub mod rng;
pub mod ring;
pub mod disk;
pub mod spiral_arms;
pub mod sphere;
