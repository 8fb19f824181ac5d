//! # Field Physics
//!
//! Bodies, vector helpers and the inverse-square pull law for the 2D
//! gravitational field simulation.

pub mod body;
pub mod bounds;
pub mod constants;
pub mod forces;
pub mod mass;
pub mod particle;
pub mod vector;

pub use body::*;
pub use bounds::*;
pub use constants::*;
pub use forces::*;
pub use mass::*;
pub use particle::*;
pub use vector::*;
