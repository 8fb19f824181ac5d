//! Text drawing for mass labels
//!
//! - `shaper`: cosmic-text shaping and coverage masks
//! - `atlas`: shelf packer for the R8 glyph texture
//! - `renderer`: glyph quads drawn on top of the shapes

pub mod atlas;
pub mod renderer;
pub mod shaper;

pub use atlas::*;
pub use renderer::*;
pub use shaper::*;
