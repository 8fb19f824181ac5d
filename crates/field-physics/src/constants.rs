//! Simulation constants for the gravitational field
//!
//! These are tuned for a pixel-space canvas at 60 ticks per second, not for
//! physical accuracy.

/// Gravitational constant in simulation units
pub const G: f32 = 0.002;

/// Lower bound on the distance used by the pull law.
/// Keeps coincident bodies away from the r→0 singularity.
pub const DISTANCE_FLOOR: f32 = 1.0;

/// Masses with a strength above this value are "strong" and can capture particles
pub const STRONG_MASS_THRESHOLD: u32 = 15;

/// A particle closer than this to a strong mass is orbit-locked
pub const CAPTURE_DISTANCE: f32 = 50.0;

/// Orbit radius recorded on a captured particle
pub const ORBIT_RADIUS: f32 = 50.0;

/// Multiplier applied to the orbit radius when placing a locked particle on its ring
pub const ORBIT_RING_SCALE: f32 = 1.2;

/// Initial mass of every body
pub const INITIAL_MASS: f32 = 1.0;

/// Initial intensity of every body
pub const INITIAL_INTENSITY: f32 = 1.0;

/// Initial strength of a placed mass
pub const INITIAL_STRENGTH: u32 = 1;

// Per-growth increments. These are deliberately not proportional to each other.
pub const GROWTH_MASS: f32 = 1.0;
pub const GROWTH_INTENSITY: f32 = 1.75;
pub const GROWTH_STRENGTH: u32 = 1;

/// Particle launch speed range (inclusive)
pub const MIN_SPAWN_SPEED: f32 = 1.0;
pub const MAX_SPAWN_SPEED: f32 = 3.0;

/// Particle edge length in pixels, used for rendering and the bounds test
pub const PARTICLE_SIZE: f32 = 3.0;

/// Edge length of the square used to hit-test the cursor against a mass
pub const MASS_HITBOX: f32 = 40.0;

/// Visual radius per decade of mass
pub const MASS_RADIUS_STEP: f32 = 4.0;
