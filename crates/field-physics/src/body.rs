//! State shared by every point body in the field

use crate::constants::{INITIAL_INTENSITY, INITIAL_MASS};
use crate::vector::Vector2;

/// Position, velocity, mass and intensity of a point body.
///
/// Mass and intensity only ever grow; they are private so that
/// [`Body::grow`] is the single way to change them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Body {
    pub position: Vector2,
    pub velocity: Vector2,
    mass: f32,
    intensity: f32,
}

impl Body {
    pub fn new(position: Vector2, velocity: Vector2) -> Self {
        Self {
            position,
            velocity,
            mass: INITIAL_MASS,
            intensity: INITIAL_INTENSITY,
        }
    }

    /// Body at rest
    pub fn at_rest(position: Vector2) -> Self {
        Self::new(position, Vector2::ZERO)
    }

    pub fn mass(&self) -> f32 {
        self.mass
    }

    /// Scales how strongly this body pulls on particles
    pub fn intensity(&self) -> f32 {
        self.intensity
    }

    /// Increase mass and intensity. Negative deltas are ignored.
    pub fn grow(&mut self, mass_delta: f32, intensity_delta: f32) {
        self.mass += mass_delta.max(0.0);
        self.intensity += intensity_delta.max(0.0);
    }
}
