//! The gravitational field: particles, masses and the per-tick update
//!
//! One tick runs in three passes over the particles:
//! 1. accumulate the pull of every mass into each particle's velocity
//! 2. record an orbit lock for particles close to a strong mass (or clear it)
//! 3. move each particle, snap locked particles onto their ring, then respawn
//!    any particle that ended up off the canvas (dropping its lock)
//!
//! Locked particles keep accumulating velocity in pass 1 even though pass 3
//! overrides their position. The hidden velocity is what they fly off with
//! once the lock clears.

use crate::params::{PhysicsParams, SimulationConfig};
use crate::spawner::{batch_size, SpawnTimer, DEFAULT_SPAWN_INTERVAL};
use field_physics::{total_pull, Mass, OrbitLock, Particle, Vector2};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Index of a mass in its field. Masses are never removed, so ids stay valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MassId(usize);

impl MassId {
    pub fn index(self) -> usize {
        self.0
    }
}

pub struct Field {
    config: SimulationConfig,
    particles: Vec<Particle>,
    masses: Vec<Mass>,
    rng: StdRng,
    spawn_timer: SpawnTimer,
    tick: u64,
}

impl Field {
    pub fn new(config: SimulationConfig) -> Self {
        Self::with_rng(config, StdRng::from_os_rng())
    }

    /// Field with reproducible spawn positions and launch velocities
    pub fn with_seed(config: SimulationConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: SimulationConfig, rng: StdRng) -> Self {
        let spawn_timer = SpawnTimer::new(config.spawn_interval.unwrap_or(DEFAULT_SPAWN_INTERVAL));
        Self {
            config,
            particles: Vec::new(),
            masses: Vec::new(),
            rng,
            spawn_timer,
            tick: 0,
        }
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn masses(&self) -> &[Mass] {
        &self.masses
    }

    pub fn mass(&self, id: MassId) -> Option<&Mass> {
        self.masses.get(id.0)
    }

    /// Number of completed steps
    pub fn tick(&self) -> u64 {
        self.tick
    }

    pub fn strong_mass_count(&self) -> usize {
        let threshold = self.config.physics.strong_mass_threshold;
        self.masses.iter().filter(|m| m.is_strong(threshold)).count()
    }

    pub fn locked_particle_count(&self) -> usize {
        self.particles.iter().filter(|p| p.is_locked()).count()
    }

    pub fn add_particle(&mut self, particle: Particle) {
        self.particles.push(particle);
    }

    /// Spawn a particle at `position` with a random launch velocity
    pub fn spawn_particle(&mut self, position: Vector2) {
        let particle = Particle::spawn(position, self.config.speed_range(), &mut self.rng);
        self.particles.push(particle);
    }

    /// Spawn `count` particles uniformly over the whole canvas
    pub fn populate(&mut self, count: usize) {
        let bounds = self.config.bounds();
        for _ in 0..count {
            let position = bounds.random_point(&mut self.rng);
            self.spawn_particle(position);
        }
        log::info!("Populated field with {} particles", count);
    }

    pub fn clear_particles(&mut self) {
        log::debug!("Clearing {} particles", self.particles.len());
        self.particles.clear();
    }

    /// Advance the spawn timer. When it fires, add a quarter of `num_particles`
    /// (rounded down) inside the spawn region. Returns how many were added.
    pub fn generate_random_particles(&mut self, num_particles: usize) -> usize {
        if !self.spawn_timer.tick() {
            return 0;
        }

        let region = self.config.spawn_region();
        let batch = batch_size(num_particles);
        for _ in 0..batch {
            let position = region.random_point(&mut self.rng);
            self.spawn_particle(position);
        }
        log::debug!("Spawned batch of {} particles (total {})", batch, self.particles.len());
        batch
    }

    pub fn add_mass(&mut self, mass: Mass) -> MassId {
        self.masses.push(mass);
        MassId(self.masses.len() - 1)
    }

    /// Place a fresh mass at `position`
    pub fn place_mass(&mut self, position: Vector2) -> MassId {
        let id = self.add_mass(Mass::new(position));
        log::debug!(
            "Placed mass #{} at ({:.0}, {:.0})",
            id.0,
            position.x,
            position.y
        );
        id
    }

    /// Grow a mass by one step. Returns `false` for an unknown id.
    pub fn grow_mass(&mut self, id: MassId) -> bool {
        let threshold = self.config.physics.strong_mass_threshold;
        let Some(mass) = self.masses.get_mut(id.0) else {
            return false;
        };

        let was_strong = mass.is_strong(threshold);
        mass.grow();
        if !was_strong && mass.is_strong(threshold) {
            log::debug!("Mass #{} became strong (strength {})", id.0, mass.strength());
        }
        true
    }

    /// Whether `point` is on the given mass's hitbox
    pub fn hits_mass(&self, id: MassId, point: Vector2) -> bool {
        self.mass(id)
            .is_some_and(|mass| mass.hit_test(point, self.config.mass_hitbox))
    }

    /// The mass under `point`, nearest first; ties go to the earliest placed
    pub fn mass_at(&self, point: Vector2) -> Option<MassId> {
        let hitbox = self.config.mass_hitbox;
        self.masses
            .iter()
            .enumerate()
            .filter(|(_, mass)| mass.hit_test(point, hitbox))
            .min_by(|(_, a), (_, b)| a.distance_to(point).total_cmp(&b.distance_to(point)))
            .map(|(index, _)| MassId(index))
    }

    /// Force pass and orbit-lock test for every particle, without moving anything.
    /// Masses must not change between this call and the integration that follows.
    pub fn apply_gravitational_field(&mut self) {
        let physics = self.config.physics;
        for particle in &mut self.particles {
            let pull = total_pull(
                &self.masses,
                particle.position(),
                physics.gravitational_constant,
                physics.distance_floor,
            );
            particle.accelerate(pull);
            particle.set_orbit(capture(&self.masses, particle.position(), &physics));
        }
    }

    /// One physics tick
    pub fn step(&mut self) {
        self.apply_gravitational_field();

        let bounds = self.config.bounds();
        let size = self.config.particle_size;
        let ring_scale = self.config.physics.orbit_ring_scale;
        let mut respawned = 0usize;
        for particle in &mut self.particles {
            if particle.integrate(&bounds, size, ring_scale, &mut self.rng) {
                respawned += 1;
            }
        }

        self.tick += 1;
        if respawned > 0 {
            log::debug!("Tick {}: respawned {} particles", self.tick, respawned);
        }
        log::trace!(
            "Tick {}: {} particles ({} locked), {} masses",
            self.tick,
            self.particles.len(),
            self.locked_particle_count(),
            self.masses.len()
        );
    }
}

/// Lock onto the nearest strong mass closer than the capture distance.
/// Ties go to the earliest placed mass.
fn capture(masses: &[Mass], position: Vector2, physics: &PhysicsParams) -> Option<OrbitLock> {
    masses
        .iter()
        .filter(|mass| mass.is_strong(physics.strong_mass_threshold))
        .map(|mass| (mass, mass.distance_to(position)))
        .filter(|(_, distance)| *distance < physics.capture_distance)
        .min_by(|(_, a), (_, b)| a.total_cmp(b))
        .map(|(mass, _)| OrbitLock {
            center: mass.position(),
            radius: physics.orbit_radius,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strong_mass(position: Vector2, strength: u32) -> Mass {
        let mut mass = Mass::new(position);
        for _ in 1..strength {
            mass.grow();
        }
        mass
    }

    #[test]
    fn test_capture_prefers_nearest() {
        let physics = PhysicsParams::default();
        let masses = [
            strong_mass(Vector2::new(100.0, 100.0), 20),
            strong_mass(Vector2::new(140.0, 100.0), 20),
        ];
        let lock = capture(&masses, Vector2::new(125.0, 100.0), &physics).unwrap();
        assert_eq!(lock.center, Vector2::new(140.0, 100.0));
        assert_eq!(lock.radius, 50.0);
    }

    #[test]
    fn test_capture_tie_goes_to_first() {
        let physics = PhysicsParams::default();
        let masses = [
            strong_mass(Vector2::new(100.0, 100.0), 20),
            strong_mass(Vector2::new(140.0, 100.0), 20),
        ];
        let lock = capture(&masses, Vector2::new(120.0, 100.0), &physics).unwrap();
        assert_eq!(lock.center, Vector2::new(100.0, 100.0));
    }

    #[test]
    fn test_capture_ignores_weak_and_distant() {
        let physics = PhysicsParams::default();
        let masses = [
            strong_mass(Vector2::new(100.0, 100.0), 15),
            strong_mass(Vector2::new(300.0, 100.0), 16),
        ];
        assert!(capture(&masses, Vector2::new(110.0, 100.0), &physics).is_none());
        assert!(capture(&masses, Vector2::new(250.0, 100.0), &physics).is_none());
        assert!(capture(&masses, Vector2::new(251.0, 100.0), &physics).is_some());
    }

    #[test]
    fn test_mass_at_and_grow() {
        let mut field = Field::with_seed(SimulationConfig::default(), 0);
        let a = field.place_mass(Vector2::new(100.0, 100.0));
        let b = field.place_mass(Vector2::new(130.0, 100.0));

        assert_eq!(field.mass_at(Vector2::new(105.0, 100.0)), Some(a));
        assert_eq!(field.mass_at(Vector2::new(125.0, 100.0)), Some(b));
        assert_eq!(field.mass_at(Vector2::new(400.0, 400.0)), None);

        assert!(field.grow_mass(b));
        assert_eq!(field.mass(b).unwrap().strength(), 2);
        assert!(!field.grow_mass(MassId(7)));
    }

    #[test]
    fn test_populate_and_clear() {
        let mut field = Field::with_seed(SimulationConfig::default(), 11);
        field.populate(100);
        assert_eq!(field.particles().len(), 100);
        let bounds = field.config().bounds();
        assert!(field.particles().iter().all(|p| bounds.contains(p.position())));

        field.clear_particles();
        assert!(field.particles().is_empty());
    }

    #[test]
    fn test_generate_random_particles_on_interval() {
        let config = SimulationConfig {
            spawn_interval: Some(2),
            ..Default::default()
        };
        let mut field = Field::with_seed(config, 5);

        assert_eq!(field.generate_random_particles(100), 0);
        assert_eq!(field.generate_random_particles(100), 25);
        assert_eq!(field.particles().len(), 25);

        let region = field.config().spawn_region();
        assert!(field.particles().iter().all(|p| region.contains(p.position())));

        // A count below the divisor still consumes the interval
        assert_eq!(field.generate_random_particles(3), 0);
        assert_eq!(field.generate_random_particles(3), 0);
        assert_eq!(field.particles().len(), 25);
    }

    #[test]
    fn test_step_counts_ticks() {
        let mut field = Field::with_seed(SimulationConfig::default(), 9);
        field.populate(10);
        field.step();
        field.step();
        assert_eq!(field.tick(), 2);
        assert_eq!(field.particles().len(), 10);
    }
}
