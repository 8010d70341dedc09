use crate::domain::particle::Particle;

use super::RESTITUTION;

/// Reflect off the left/right walls: clamp x to the wall and invert vx
/// scaled by the restitution coefficient (inelastic bounce).
///
/// Returns true if the particle hit a wall.
#[inline(always)]
pub fn reflect_walls(p: &mut Particle, width: f32) -> bool {
    if p.x < p.radius {
        p.x = p.radius;
        p.vx = -p.vx * RESTITUTION;
        return true;
    }
    if p.x > width - p.radius {
        p.x = width - p.radius;
        p.vx = -p.vx * RESTITUTION;
        return true;
    }
    false
}

/// Clamp to the floor and invert vy scaled by restitution.
///
/// Only the floor is handled; particles thrown above the top edge fall
/// back into view on their own.
#[inline(always)]
pub fn clamp_floor(p: &mut Particle, height: f32) -> bool {
    if p.y > height - p.radius {
        p.y = height - p.radius;
        p.vy = -p.vy * RESTITUTION;
        return true;
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    fn particle(x: f32, y: f32, vx: f32, vy: f32) -> Particle {
        Particle {
            x,
            y,
            vx,
            vy,
            radius: 3.0,
            color: 0,
            material: 0,
            density: 1.0,
            friction: 1.0,
        }
    }

    #[test]
    fn left_wall_reflects_inward() {
        let mut p = particle(1.0, 50.0, -2.0, 0.0);
        assert!(reflect_walls(&mut p, 100.0));
        assert_eq!(p.x, 3.0);
        assert!((p.vx - 1.6).abs() < 1e-6);
    }

    #[test]
    fn right_wall_reflects_inward() {
        let mut p = particle(99.0, 50.0, 2.0, 0.0);
        assert!(reflect_walls(&mut p, 100.0));
        assert_eq!(p.x, 97.0);
        assert!((p.vx + 1.6).abs() < 1e-6);
    }

    #[test]
    fn interior_particle_is_untouched() {
        let mut p = particle(50.0, 50.0, 2.0, 2.0);
        assert!(!reflect_walls(&mut p, 100.0));
        assert!(!clamp_floor(&mut p, 100.0));
        assert_eq!(p.x, 50.0);
        assert_eq!(p.vx, 2.0);
    }

    #[test]
    fn floor_clamps_and_bounces() {
        let mut p = particle(50.0, 99.5, 0.0, 4.0);
        assert!(clamp_floor(&mut p, 100.0));
        assert_eq!(p.y, 97.0);
        assert!((p.vy + 3.2).abs() < 1e-6);
    }
}
