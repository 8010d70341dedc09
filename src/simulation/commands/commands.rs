use std::f32::consts::TAU;

use crate::domain::material::{MaterialId, MaterialProps};
use crate::domain::particle::Particle;

use super::random::{rand_range, xorshift32};
use super::{SimulationCore, MAX_PARTICLES};

/// Start a run: discard the current set, spawn a category-sized batch.
pub(super) fn start(core: &mut SimulationCore, material: MaterialId) -> Result<u32, String> {
    let props = *core
        .catalog
        .props(material)
        .ok_or_else(|| format!("unknown material id: {}", material))?;

    let count = core
        .catalog
        .batch_size_for(material)
        .unwrap_or(0)
        .min(MAX_PARTICLES as u32);

    core.particles.clear();
    core.frame = 0;
    core.active_material = Some(material);
    core.particles.reserve(count as usize);

    let width = core.width;
    let height = core.height;
    for _ in 0..count {
        let p = make_particle(core, material, &props, |rng, radius| {
            // Batch spawns rain in across the full width, upper half only
            let x = rand_range(rng, radius, (width - radius).max(radius));
            let y = rand_range(rng, radius, (height * 0.5).max(radius));
            (x, y)
        });
        core.particles.push(p);
    }

    Ok(count)
}

/// Freehand brush: spawn `count` particles uniformly inside a disc.
/// Stops silently at the particle cap; returns the number actually added.
pub(super) fn spawn_in_radius(
    core: &mut SimulationCore,
    cx: f32,
    cy: f32,
    radius: f32,
    material: MaterialId,
    count: u32,
) -> u32 {
    let Some(props) = core.catalog.props(material).copied() else {
        return 0;
    };
    if radius <= 0.0 {
        return 0;
    }

    let mut added = 0u32;
    for _ in 0..count {
        if core.particles.len() >= MAX_PARTICLES {
            break;
        }
        let p = make_particle(core, material, &props, |rng, _| {
            let angle = rand_range(rng, 0.0, TAU);
            // sqrt keeps the disc uniform instead of center-heavy
            let dist = radius * rand_range(rng, 0.0, 1.0).sqrt();
            (cx + angle.cos() * dist, cy + angle.sin() * dist)
        });
        core.particles.push(p);
        added += 1;
    }

    // Brush spawns may land outside; clamp so the bounds invariant holds
    let (w, h) = (core.width, core.height);
    let start = core.particles.len() - added as usize;
    for p in core.particles[start..].iter_mut() {
        p.x = p.x.clamp(p.radius, (w - p.radius).max(p.radius));
        p.y = p.y.clamp(p.radius, (h - p.radius).max(p.radius));
    }

    added
}

/// Eraser brush: remove every particle whose center lies inside the disc.
pub(super) fn erase_in_radius(core: &mut SimulationCore, cx: f32, cy: f32, radius: f32) -> u32 {
    let r2 = radius * radius;
    let before = core.particles.len();
    core.particles.retain(|p| {
        let dx = p.x - cx;
        let dy = p.y - cy;
        dx * dx + dy * dy > r2
    });
    (before - core.particles.len()) as u32
}

/// Stop the run and discard all particles
pub(super) fn clear(core: &mut SimulationCore) {
    core.particles.clear();
    core.active_material = None;
    core.frame = 0;
}

fn make_particle<F>(
    core: &mut SimulationCore,
    material: MaterialId,
    props: &MaterialProps,
    position: F,
) -> Particle
where
    F: FnOnce(&mut u32, f32) -> (f32, f32),
{
    let radius = props.size * rand_range(&mut core.rng_state, 0.75, 1.25);
    let (x, y) = position(&mut core.rng_state, radius);
    let vx = rand_range(&mut core.rng_state, -1.0, 1.0);
    let vy = rand_range(&mut core.rng_state, 0.0, 2.0);

    let seed = (xorshift32(&mut core.rng_state) & 31) as u8;
    let color = core
        .catalog
        .color_with_variation(material, seed)
        .unwrap_or(props.color);

    Particle {
        x,
        y,
        vx,
        vy,
        radius,
        color,
        material,
        density: props.density,
        friction: props.friction,
    }
}
