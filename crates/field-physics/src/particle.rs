//! Tracer particles and their orbit-lock state

use crate::body::Body;
use crate::bounds::Bounds;
use crate::vector::{angle, from_angle, Vector2};
use rand::Rng;
use std::f32::consts::TAU;
use std::ops::RangeInclusive;

/// Capture recorded on a particle for the current tick only
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitLock {
    pub center: Vector2,
    pub radius: f32,
}

/// A free-flying tracer pulled by every mass in the field
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub body: Body,
    orbit: Option<OrbitLock>,
}

impl Particle {
    pub fn new(position: Vector2, velocity: Vector2) -> Self {
        Self {
            body: Body::new(position, velocity),
            orbit: None,
        }
    }

    /// Particle launched in a uniformly random direction with a speed drawn from `speed_range`.
    ///
    /// The direction comes from a random angle, so the launch velocity is never zero
    /// unless the speed range itself reaches zero.
    pub fn spawn<R: Rng + ?Sized>(
        position: Vector2,
        speed_range: RangeInclusive<f32>,
        rng: &mut R,
    ) -> Self {
        let direction = from_angle(rng.random_range(0.0..TAU));
        let speed = rng.random_range(speed_range);
        Self::new(position, direction * speed)
    }

    pub fn position(&self) -> Vector2 {
        self.body.position
    }

    pub fn velocity(&self) -> Vector2 {
        self.body.velocity
    }

    pub fn orbit(&self) -> Option<OrbitLock> {
        self.orbit
    }

    pub fn orbit_center(&self) -> Option<Vector2> {
        self.orbit.map(|lock| lock.center)
    }

    /// Radius of the current lock, 0 when free
    pub fn orbit_radius(&self) -> f32 {
        self.orbit.map_or(0.0, |lock| lock.radius)
    }

    pub fn is_locked(&self) -> bool {
        self.orbit.is_some()
    }

    pub fn set_orbit(&mut self, orbit: Option<OrbitLock>) {
        self.orbit = orbit;
    }

    /// Add an accumulated velocity change
    pub fn accelerate(&mut self, delta_v: Vector2) {
        self.body.velocity += delta_v;
    }

    /// Move by one tick of velocity
    pub fn advance(&mut self) {
        self.body.position += self.body.velocity;
    }

    /// Snap onto the lock ring (`radius * ring_scale` from the center), keeping the
    /// particle's bearing from the center. Does nothing when free.
    pub fn apply_orbit_lock(&mut self, ring_scale: f32) {
        let Some(lock) = self.orbit else {
            return;
        };

        let bearing = angle(self.body.position - lock.center);
        self.body.position = lock.center + from_angle(bearing) * (lock.radius * ring_scale);
    }

    /// Move a particle whose `size`×`size` box no longer overlaps `bounds` to a
    /// uniformly random point inside them. The velocity is kept and any lock is
    /// dropped. Returns `true` on respawn.
    pub fn respawn_if_outside<R: Rng + ?Sized>(
        &mut self,
        bounds: &Bounds,
        size: f32,
        rng: &mut R,
    ) -> bool {
        if bounds.intersects_box(self.body.position, size) {
            return false;
        }

        self.body.position = bounds.random_point(rng);
        self.orbit = None;
        true
    }

    /// One tick of motion: advance, snap to the orbit ring if locked, then
    /// respawn if the result left `bounds`. Returns `true` on respawn.
    ///
    /// The bounds check comes last so a ring that reaches past the canvas edge
    /// never leaves a particle outside it.
    pub fn integrate<R: Rng + ?Sized>(
        &mut self,
        bounds: &Bounds,
        size: f32,
        ring_scale: f32,
        rng: &mut R,
    ) -> bool {
        self.advance();
        self.apply_orbit_lock(ring_scale);
        self.respawn_if_outside(bounds, size, rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{MAX_SPAWN_SPEED, MIN_SPAWN_SPEED, ORBIT_RADIUS, ORBIT_RING_SCALE, PARTICLE_SIZE};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_spawn_speed_in_range() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..500 {
            let p = Particle::spawn(Vector2::ZERO, MIN_SPAWN_SPEED..=MAX_SPAWN_SPEED, &mut rng);
            let speed = p.velocity().length();
            assert!(speed >= MIN_SPAWN_SPEED - 1e-4 && speed <= MAX_SPAWN_SPEED + 1e-4);
            assert_eq!(p.body.mass(), 1.0);
            assert_eq!(p.body.intensity(), 1.0);
            assert!(p.orbit_center().is_none());
        }
    }

    #[test]
    fn test_integrate_moves_by_velocity() {
        let bounds = Bounds::from_size(900.0, 600.0);
        let mut rng = StdRng::seed_from_u64(1);
        let mut p = Particle::new(Vector2::new(100.0, 100.0), Vector2::new(2.0, -1.0));
        assert!(!p.integrate(&bounds, PARTICLE_SIZE, ORBIT_RING_SCALE, &mut rng));
        assert_eq!(p.position(), Vector2::new(102.0, 99.0));
    }

    #[test]
    fn test_integrate_respawns_and_keeps_velocity() {
        let bounds = Bounds::from_size(900.0, 600.0);
        let mut rng = StdRng::seed_from_u64(3);
        let mut p = Particle::new(Vector2::new(899.0, 300.0), Vector2::new(5.0, 0.0));
        assert!(p.integrate(&bounds, PARTICLE_SIZE, ORBIT_RING_SCALE, &mut rng));
        assert!(bounds.contains(p.position()));
        assert_eq!(p.velocity(), Vector2::new(5.0, 0.0));
    }

    #[test]
    fn test_ring_past_canvas_edge_respawns() {
        let bounds = Bounds::from_size(900.0, 600.0);
        let mut rng = StdRng::seed_from_u64(5);
        let mut p = Particle::new(Vector2::new(1.0, 300.0), Vector2::new(0.5, 0.0));
        p.set_orbit(Some(OrbitLock {
            center: Vector2::new(5.0, 300.0),
            radius: ORBIT_RADIUS,
        }));

        // The ring point on the left of the mass is at x = -55
        assert!(p.integrate(&bounds, PARTICLE_SIZE, ORBIT_RING_SCALE, &mut rng));
        assert!(bounds.contains(p.position()));
        assert_eq!(p.velocity(), Vector2::new(0.5, 0.0));
        assert!(!p.is_locked());
    }

    #[test]
    fn test_locked_integrate_lands_on_ring() {
        let bounds = Bounds::from_size(900.0, 600.0);
        let mut rng = StdRng::seed_from_u64(6);
        let center = Vector2::new(450.0, 300.0);
        let mut p = Particle::new(Vector2::new(450.0, 330.0), Vector2::new(0.0, 2.0));
        p.set_orbit(Some(OrbitLock {
            center,
            radius: ORBIT_RADIUS,
        }));

        assert!(!p.integrate(&bounds, PARTICLE_SIZE, ORBIT_RING_SCALE, &mut rng));
        assert!(((p.position() - center).length() - 60.0).abs() < 1e-3);
        assert!(p.is_locked());
    }

    #[test]
    fn test_orbit_lock_snaps_to_ring() {
        let center = Vector2::new(300.0, 300.0);
        let mut p = Particle::new(Vector2::new(300.0, 270.0), Vector2::ZERO);
        p.set_orbit(Some(OrbitLock {
            center,
            radius: ORBIT_RADIUS,
        }));
        p.apply_orbit_lock(ORBIT_RING_SCALE);

        let offset = p.position() - center;
        assert!((offset.length() - 60.0).abs() < 1e-3);
        // Bearing is preserved: still straight "up" on the canvas
        assert!(offset.x.abs() < 1e-3);
        assert!(offset.y < 0.0);
    }

    #[test]
    fn test_orbit_lock_noop_when_free() {
        let mut p = Particle::new(Vector2::new(10.0, 10.0), Vector2::ZERO);
        p.apply_orbit_lock(ORBIT_RING_SCALE);
        assert_eq!(p.position(), Vector2::new(10.0, 10.0));
        assert_eq!(p.orbit_radius(), 0.0);
    }

    #[test]
    fn test_orbit_lock_at_center_uses_zero_bearing() {
        let center = Vector2::new(50.0, 50.0);
        let mut p = Particle::new(center, Vector2::ZERO);
        p.set_orbit(Some(OrbitLock { center, radius: 50.0 }));
        p.apply_orbit_lock(1.2);
        assert!((p.position() - Vector2::new(110.0, 50.0)).length() < 1e-4);
    }
}
