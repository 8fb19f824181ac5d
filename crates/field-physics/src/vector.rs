//! 2D vector helpers on top of `glam::Vec2`

pub use glam::Vec2 as Vector2;

/// Component-wise sum
#[inline]
pub fn add(a: Vector2, b: Vector2) -> Vector2 {
    a + b
}

/// Scalar multiple
#[inline]
pub fn scale(v: Vector2, s: f32) -> Vector2 {
    v * s
}

/// Euclidean length
#[inline]
pub fn magnitude(v: Vector2) -> f32 {
    v.length()
}

/// Unit vector in the direction of `v`.
///
/// The zero vector has no direction and normalizes to the zero vector.
#[inline]
pub fn normalize(v: Vector2) -> Vector2 {
    v.normalize_or_zero()
}

/// Unit vector `(cos θ, sin θ)`
#[inline]
pub fn from_angle(theta: f32) -> Vector2 {
    Vector2::new(theta.cos(), theta.sin())
}

/// Angle of `v` measured from the +x axis, `atan2(y, x)`
#[inline]
pub fn angle(v: Vector2) -> f32 {
    v.y.atan2(v.x)
}

/// Distance between two points
#[inline]
pub fn distance(a: Vector2, b: Vector2) -> f32 {
    (b - a).length()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn test_normalize_zero_is_zero() {
        assert_eq!(normalize(Vector2::ZERO), Vector2::ZERO);
    }

    #[test]
    fn test_normalize_unit_length() {
        let n = normalize(Vector2::new(3.0, 4.0));
        assert!((magnitude(n) - 1.0).abs() < 1e-6);
        assert!((n.x - 0.6).abs() < 1e-6);
    }

    #[test]
    fn test_angle_from_angle_inverse() {
        let v = from_angle(FRAC_PI_2);
        assert!(v.x.abs() < 1e-6);
        assert!((v.y - 1.0).abs() < 1e-6);
        assert!((angle(v) - FRAC_PI_2).abs() < 1e-6);
    }

    #[test]
    fn test_angle_of_zero_is_zero() {
        assert_eq!(angle(Vector2::ZERO), 0.0);
    }

    #[test]
    fn test_add_scale_distance() {
        let v = add(Vector2::new(1.0, 2.0), scale(Vector2::new(1.0, 1.0), 2.0));
        assert_eq!(v, Vector2::new(3.0, 4.0));
        assert_eq!(distance(Vector2::ZERO, v), 5.0);
    }
}
