//! Field state → shape instances

use crate::instance::ShapeInstance;
use crate::palette::FieldPalette;
use field_physics::{Mass, Particle};
use glam::Vec2;

/// Build one frame of shape instances: particles first, then masses on top.
/// Strength labels are drawn afterwards by the text pass.
pub fn build_scene(
    particles: &[Particle],
    masses: &[Mass],
    particle_size: f32,
    palette: &FieldPalette,
) -> Vec<ShapeInstance> {
    let half = Vec2::splat(particle_size * 0.5);
    let mut instances = Vec::with_capacity(particles.len() + masses.len());

    instances.extend(
        particles
            .iter()
            .map(|p| ShapeInstance::rect(p.position(), half, palette.particle)),
    );

    instances.extend(
        masses
            .iter()
            .map(|m| ShapeInstance::circle(m.position(), m.radius(), palette.mass)),
    );

    instances
}
