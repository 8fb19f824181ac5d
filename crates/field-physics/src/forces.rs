//! Inverse-square pull of a mass on a particle
//!
//! Particles are treated as unit test masses, so the pull depends only on the
//! attractor. This is not a symmetric Newtonian pair force: masses never feel
//! the particles.

use crate::mass::Mass;
use crate::vector::{angle, from_angle, Vector2};

/// Distance between two points, never below `floor`
#[inline]
pub fn clamped_distance(delta: Vector2, floor: f32) -> f32 {
    delta.length().max(floor)
}

/// F = G * m * intensity / r²
#[inline]
pub fn force_magnitude(g: f32, mass: f32, intensity: f32, distance: f32) -> f32 {
    g * mass * intensity / (distance * distance)
}

/// Velocity change a mass imparts on a particle at `position` in one tick
pub fn gravitational_pull(mass: &Mass, position: Vector2, g: f32, floor: f32) -> Vector2 {
    let delta = mass.position() - position;
    let distance = clamped_distance(delta, floor);
    let magnitude = force_magnitude(g, mass.mass(), mass.intensity(), distance);

    // atan2 of a zero delta is 0, so a coincident particle is pushed along +x
    from_angle(angle(delta)) * magnitude
}

/// Sum of the pulls from every mass
pub fn total_pull<'a>(
    masses: impl IntoIterator<Item = &'a Mass>,
    position: Vector2,
    g: f32,
    floor: f32,
) -> Vector2 {
    masses
        .into_iter()
        .map(|mass| gravitational_pull(mass, position, g, floor))
        .fold(Vector2::ZERO, |acc, pull| acc + pull)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{DISTANCE_FLOOR, G};

    #[test]
    fn test_force_decreases_with_distance() {
        let mut previous = f32::INFINITY;
        for step in 0..200 {
            let d = 1.0 + step as f32 * 0.5;
            let f = force_magnitude(G, 3.0, 4.5, d);
            assert!(f < previous);
            previous = f;
        }
    }

    #[test]
    fn test_distance_floor() {
        assert_eq!(clamped_distance(Vector2::ZERO, DISTANCE_FLOOR), 1.0);
        assert_eq!(clamped_distance(Vector2::new(0.3, 0.4), DISTANCE_FLOOR), 1.0);
        assert_eq!(clamped_distance(Vector2::new(3.0, 4.0), DISTANCE_FLOOR), 5.0);
    }

    #[test]
    fn test_coincident_pull_is_finite() {
        let mass = Mass::new(Vector2::new(10.0, 10.0));
        let pull = gravitational_pull(&mass, Vector2::new(10.0, 10.0), G, DISTANCE_FLOOR);
        assert!(pull.is_finite());
        assert!((pull.length() - G).abs() < 1e-7);
    }

    #[test]
    fn test_pull_points_at_mass() {
        let mass = Mass::new(Vector2::new(110.0, 100.0));
        let pull = gravitational_pull(&mass, Vector2::new(100.0, 100.0), G, DISTANCE_FLOOR);
        assert!(pull.x > 0.0);
        assert!(pull.y.abs() < 1e-9);
        assert!((pull.x - G / 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_symmetric_pulls_cancel() {
        let masses = [
            Mass::new(Vector2::new(100.0, 300.0)),
            Mass::new(Vector2::new(300.0, 300.0)),
        ];
        let pull = total_pull(&masses, Vector2::new(200.0, 300.0), G, DISTANCE_FLOOR);
        assert!(pull.length() < 1e-9);
    }
}
