use crate::domain::particle::Particle;

use super::{GRAVITY_COUPLING, MAX_VELOCITY};

/// Apply gravity to a particle's velocity.
///
/// Acceleration scales with material density (see GRAVITY_COUPLING).
#[inline(always)]
pub fn apply_gravity(p: &mut Particle, gravity: f32) {
    p.vy += gravity * p.density * GRAVITY_COUPLING;

    // Clamp to max velocity
    p.vx = p.vx.clamp(-MAX_VELOCITY, MAX_VELOCITY);
    p.vy = p.vy.clamp(-MAX_VELOCITY, MAX_VELOCITY);
}

/// Apply friction to a particle's velocity: exponential decay per tick.
///
/// NOTE: no small-velocity snap to zero here. With friction = 1 the
/// velocity must pass through unchanged, however small.
#[inline(always)]
pub fn apply_friction(p: &mut Particle) {
    let friction = p.friction.clamp(0.0, 1.0);
    p.vx *= friction;
    p.vy *= friction;

    if !p.vx.is_finite() {
        p.vx = 0.0;
    }
    if !p.vy.is_finite() {
        p.vy = 0.0;
    }
}
