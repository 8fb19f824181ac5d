//! Simulation configuration
//!
//! Everything the field and the renderer need is passed in explicitly through
//! [`SimulationConfig`]; nothing reads ambient globals.

use field_physics::constants::*;
use field_physics::Bounds;
use std::ops::RangeInclusive;
use std::time::Duration;

/// Tunables of the pull law and the orbit capture
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PhysicsParams {
    pub gravitational_constant: f32,
    pub distance_floor: f32,
    /// Masses with strength strictly above this capture particles
    pub strong_mass_threshold: u32,
    /// Capture happens when a particle is closer than this to a strong mass
    pub capture_distance: f32,
    pub orbit_radius: f32,
    pub orbit_ring_scale: f32,
}

impl Default for PhysicsParams {
    fn default() -> Self {
        Self {
            gravitational_constant: G,
            distance_floor: DISTANCE_FLOOR,
            strong_mass_threshold: STRONG_MASS_THRESHOLD,
            capture_distance: CAPTURE_DISTANCE,
            orbit_radius: ORBIT_RADIUS,
            orbit_ring_scale: ORBIT_RING_SCALE,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SimulationConfig {
    /// Canvas size in pixels
    pub width: f32,
    pub height: f32,
    /// Physics steps per second
    pub tick_rate: u32,
    /// Particles spawned over the whole canvas at startup
    pub particle_count: usize,
    pub particle_size: f32,
    pub mass_hitbox: f32,
    pub min_spawn_speed: f32,
    pub max_spawn_speed: f32,
    /// Distance between the canvas edge and the periodic spawn region
    pub spawn_margin: f32,
    /// Ticks between periodic spawn batches, `None` disables periodic spawning
    pub spawn_interval: Option<u32>,
    pub physics: PhysicsParams,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            width: 900.0,
            height: 600.0,
            tick_rate: 60,
            particle_count: 100,
            particle_size: PARTICLE_SIZE,
            mass_hitbox: MASS_HITBOX,
            min_spawn_speed: MIN_SPAWN_SPEED,
            max_spawn_speed: MAX_SPAWN_SPEED,
            spawn_margin: 100.0,
            spawn_interval: None,
            physics: PhysicsParams::default(),
        }
    }
}

impl SimulationConfig {
    /// Visible canvas rectangle
    pub fn bounds(&self) -> Bounds {
        Bounds::from_size(self.width, self.height)
    }

    /// Inner rectangle used by periodic spawning
    pub fn spawn_region(&self) -> Bounds {
        self.bounds().inset(self.spawn_margin)
    }

    pub fn speed_range(&self) -> RangeInclusive<f32> {
        let low = self.min_spawn_speed.min(self.max_spawn_speed);
        let high = self.min_spawn_speed.max(self.max_spawn_speed);
        low..=high
    }

    /// Wall-clock length of one tick
    pub fn tick_duration(&self) -> Duration {
        Duration::from_secs_f64(1.0 / f64::from(self.tick_rate.max(1)))
    }
}
