use crate::domain::particle::Particle;
use crate::physics::{step_particle, Environment};

use super::{PerfTimer, SimulationCore};

/// Per-step accounting, folded across all particles
#[derive(Clone, Copy, Default)]
struct StepTally {
    moved: u32,
    wall_bounces: u32,
    floor_bounces: u32,
    speed_max: f32,
}

impl StepTally {
    #[inline]
    fn add(&mut self, result: crate::physics::StepResult) {
        if result.moved {
            self.moved += 1;
        }
        if result.bounced_wall {
            self.wall_bounces += 1;
        }
        if result.bounced_floor {
            self.floor_bounces += 1;
        }
        if result.speed > self.speed_max {
            self.speed_max = result.speed;
        }
    }

    #[cfg(feature = "parallel")]
    fn merge(mut self, other: StepTally) -> StepTally {
        self.moved += other.moved;
        self.wall_bounces += other.wall_bounces;
        self.floor_bounces += other.floor_bounces;
        self.speed_max = self.speed_max.max(other.speed_max);
        self
    }
}

/// Each particle updates independently, so the stepper can fan out.
#[cfg(feature = "parallel")]
fn run_stepper(particles: &mut [Particle], env: &Environment) -> StepTally {
    use rayon::prelude::*;

    particles
        .par_iter_mut()
        .fold(StepTally::default, |mut tally, p| {
            tally.add(step_particle(p, env));
            tally
        })
        .reduce(StepTally::default, StepTally::merge)
}

#[cfg(not(feature = "parallel"))]
fn run_stepper(particles: &mut [Particle], env: &Environment) -> StepTally {
    let mut tally = StepTally::default();
    for p in particles.iter_mut() {
        tally.add(step_particle(p, env));
    }
    tally
}

pub(super) fn step(core: &mut SimulationCore) {
    let perf_on = core.perf_enabled;
    if perf_on {
        core.perf_stats.reset();
    }
    let step_start = if perf_on { Some(PerfTimer::start()) } else { None };

    let env = Environment {
        gravity: core.gravity,
        speed: core.speed,
        width: core.width,
        height: core.height,
    };

    let tally = if perf_on {
        let t0 = PerfTimer::start();
        let tally = run_stepper(&mut core.particles, &env);
        core.perf_stats.physics_ms = t0.elapsed_ms();
        tally
    } else {
        run_stepper(&mut core.particles, &env)
    };

    if perf_on {
        core.perf_stats.particle_count = core.particles.len() as u32;
        core.perf_stats.particles_moved = tally.moved;
        core.perf_stats.wall_bounces = tally.wall_bounces;
        core.perf_stats.floor_bounces = tally.floor_bounces;
        core.perf_stats.speed_max = tally.speed_max;
        // Rough estimate: particle array + transfer buffers
        core.perf_stats.memory_bytes = (core.particles.len()
            * (std::mem::size_of::<Particle>() + 2 * 4 + 4 + 4))
            as u32;
        if let Some(start) = step_start {
            core.perf_stats.step_ms = start.elapsed_ms();
        }
    }

    core.frame += 1;
}
