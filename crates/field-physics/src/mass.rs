//! User-placed attractors

use crate::body::Body;
use crate::constants::*;
use crate::vector::{distance, Vector2};

/// A stationary attractor whose strength grows while the user holds the pointer on it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mass {
    pub body: Body,
    strength: u32,
}

impl Mass {
    pub fn new(position: Vector2) -> Self {
        Self {
            body: Body::at_rest(position),
            strength: INITIAL_STRENGTH,
        }
    }

    pub fn position(&self) -> Vector2 {
        self.body.position
    }

    pub fn mass(&self) -> f32 {
        self.body.mass()
    }

    pub fn intensity(&self) -> f32 {
        self.body.intensity()
    }

    pub fn strength(&self) -> u32 {
        self.strength
    }

    /// One growth step: mass +1, intensity +1.75, strength +1
    pub fn grow(&mut self) {
        self.body.grow(GROWTH_MASS, GROWTH_INTENSITY);
        self.strength = self.strength.saturating_add(GROWTH_STRENGTH);
    }

    /// Strong masses capture nearby particles into orbit
    pub fn is_strong(&self, threshold: u32) -> bool {
        self.strength > threshold
    }

    /// Visual radius: `4 * ceil(log10(mass + 1))`.
    /// Grows with the number of decades of mass, not linearly.
    pub fn radius(&self) -> f32 {
        MASS_RADIUS_STEP * (self.mass() + 1.0).log10().ceil()
    }

    /// Whether `point` falls strictly inside the `hitbox`×`hitbox` square around the mass
    pub fn hit_test(&self, point: Vector2, hitbox: f32) -> bool {
        let half = hitbox * 0.5;
        let delta = (point - self.position()).abs();
        delta.x < half && delta.y < half
    }

    pub fn distance_to(&self, point: Vector2) -> f32 {
        distance(self.position(), point)
    }
}
