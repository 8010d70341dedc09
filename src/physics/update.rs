use crate::domain::particle::Particle;

use super::bounds::{clamp_floor, reflect_walls};
use super::forces::{apply_friction, apply_gravity};
use super::types::StepResult;

/// Per-tick inputs shared by every particle
#[derive(Clone, Copy, Debug)]
pub struct Environment {
    /// Gravitational acceleration (positive = down)
    pub gravity: f32,
    /// Global speed multiplier applied at integration
    pub speed: f32,
    pub width: f32,
    pub height: f32,
}

/// Full physics update for a single particle.
///
/// Order matters and is fixed: gravity, friction, integration, horizontal
/// bound, vertical bound. Each particle updates independently of the rest.
pub fn step_particle(p: &mut Particle, env: &Environment) -> StepResult {
    apply_gravity(p, env.gravity);
    apply_friction(p);

    let dx = p.vx * env.speed;
    let dy = p.vy * env.speed;
    p.x += dx;
    p.y += dy;

    let bounced_wall = reflect_walls(p, env.width);
    let bounced_floor = clamp_floor(p, env.height);

    StepResult {
        moved: dx != 0.0 || dy != 0.0,
        bounced_wall,
        bounced_floor,
        speed: p.speed(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env(gravity: f32, width: f32, height: f32) -> Environment {
        Environment {
            gravity,
            speed: 1.0,
            width,
            height,
        }
    }

    fn particle(x: f32, y: f32, vx: f32, vy: f32, friction: f32) -> Particle {
        Particle {
            x,
            y,
            vx,
            vy,
            radius: 2.0,
            color: 0,
            material: 0,
            density: 1.5,
            friction,
        }
    }

    #[test]
    fn gravity_scales_with_density() {
        let mut p = particle(50.0, 50.0, 0.0, 0.0, 1.0);
        step_particle(&mut p, &env(2.0, 200.0, 200.0));
        // vy += gravity * density * 0.01 = 2.0 * 1.5 * 0.01
        assert!((p.vy - 0.03).abs() < 1e-6);
    }

    #[test]
    fn friction_is_applied_after_gravity() {
        let mut p = particle(50.0, 50.0, 1.0, 0.0, 0.5);
        step_particle(&mut p, &env(2.0, 200.0, 200.0));
        assert!((p.vx - 0.5).abs() < 1e-6);
        assert!((p.vy - 0.015).abs() < 1e-6);
    }

    #[test]
    fn speed_multiplier_scales_displacement_not_velocity() {
        let mut p = particle(50.0, 50.0, 3.0, 0.0, 1.0);
        let e = Environment {
            gravity: 0.0,
            speed: 2.0,
            width: 200.0,
            height: 200.0,
        };
        step_particle(&mut p, &e);
        assert!((p.x - 56.0).abs() < 1e-6);
        assert!((p.vx - 3.0).abs() < 1e-6);
    }

    #[test]
    fn wall_hit_is_reported_in_result() {
        let mut p = particle(1.0, 50.0, -2.0, 0.0, 1.0);
        let result = step_particle(&mut p, &env(0.0, 200.0, 200.0));
        assert!(result.bounced());
        assert!(result.bounced_wall);
        assert!(!result.bounced_floor);
    }

    #[test]
    fn non_finite_velocity_is_reset() {
        let mut p = particle(50.0, 50.0, f32::NAN, 0.0, 0.9);
        let result = step_particle(&mut p, &env(0.0, 200.0, 200.0));
        assert_eq!(p.vx, 0.0);
        assert!(result.speed.is_finite());
    }
}
