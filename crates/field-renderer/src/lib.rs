//! # Field Renderer
//!
//! Instanced 2D drawing of particles and masses, with strength labels
//! shaped by cosmic-text.

pub mod camera;
pub mod error;
pub mod instance;
pub mod label;
pub mod palette;
pub mod renderer;
pub mod scene;
pub mod text;

pub use camera::*;
pub use error::*;
pub use instance::*;
pub use label::*;
pub use palette::*;
pub use renderer::*;
pub use scene::*;
pub use text::*;
