//! Axis-aligned rectangle in canvas space

use crate::vector::Vector2;
use rand::Rng;

/// Rectangle spanning `min..=max` (y grows downward on the canvas)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min: Vector2,
    pub max: Vector2,
}

impl Bounds {
    pub fn new(min: Vector2, max: Vector2) -> Self {
        Self {
            min: min.min(max),
            max: min.max(max),
        }
    }

    /// Rectangle with its top-left corner at the origin
    pub fn from_size(width: f32, height: f32) -> Self {
        Self::new(Vector2::ZERO, Vector2::new(width, height))
    }

    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    pub fn center(&self) -> Vector2 {
        (self.min + self.max) * 0.5
    }

    /// Shrink by `margin` on every side. Collapses to the center rather than inverting.
    pub fn inset(&self, margin: f32) -> Self {
        let margin = Vector2::splat(margin).min(self.max - self.center());
        Self::new(self.min + margin, self.max - margin)
    }

    pub fn contains(&self, point: Vector2) -> bool {
        point.x >= self.min.x && point.x <= self.max.x && point.y >= self.min.y && point.y <= self.max.y
    }

    /// Whether a `size`×`size` box centered on `center` overlaps the rectangle.
    /// Touching edges do not count as overlap.
    pub fn intersects_box(&self, center: Vector2, size: f32) -> bool {
        let half = size * 0.5;
        center.x + half > self.min.x
            && center.x - half < self.max.x
            && center.y + half > self.min.y
            && center.y - half < self.max.y
    }

    /// Uniformly sampled point inside the rectangle
    pub fn random_point<R: Rng + ?Sized>(&self, rng: &mut R) -> Vector2 {
        Vector2::new(
            rng.random_range(self.min.x..=self.max.x),
            rng.random_range(self.min.y..=self.max.y),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_intersects_box_edges() {
        let bounds = Bounds::from_size(900.0, 600.0);
        assert!(bounds.intersects_box(Vector2::new(450.0, 300.0), 3.0));
        // Still overlapping by half a pixel
        assert!(bounds.intersects_box(Vector2::new(901.0, 300.0), 3.0));
        assert!(!bounds.intersects_box(Vector2::new(902.5, 300.0), 3.0));
        assert!(!bounds.intersects_box(Vector2::new(450.0, -5.0), 3.0));
    }

    #[test]
    fn test_random_point_inside() {
        let bounds = Bounds::from_size(900.0, 600.0).inset(100.0);
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1000 {
            assert!(bounds.contains(bounds.random_point(&mut rng)));
        }
    }

    #[test]
    fn test_inset() {
        let bounds = Bounds::from_size(900.0, 600.0).inset(100.0);
        assert_eq!(bounds.min, Vector2::new(100.0, 100.0));
        assert_eq!(bounds.max, Vector2::new(800.0, 500.0));
        assert_eq!(bounds.width(), 700.0);
    }

    #[test]
    fn test_inset_collapses_to_center() {
        let bounds = Bounds::from_size(10.0, 10.0).inset(20.0);
        assert_eq!(bounds.min, bounds.max);
        assert_eq!(bounds.center(), Vector2::new(5.0, 5.0));
    }
}
