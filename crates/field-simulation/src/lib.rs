//! # Field Simulation
//!
//! CPU simulation of tracer particles pulled by user-placed masses.

pub mod field;
pub mod params;
pub mod placement;
pub mod spawner;

pub use field::*;
pub use params::*;
pub use placement::*;
pub use spawner::*;
