use super::perf_stats::PerfStats;
use super::SimulationCore;

pub(super) fn enable_perf_metrics(core: &mut SimulationCore, enabled: bool) {
    core.perf_enabled = enabled;
}

pub(super) fn get_perf_stats(core: &SimulationCore) -> PerfStats {
    core.perf_stats.clone()
}

pub(super) fn set_gravity(core: &mut SimulationCore, gravity: f32) {
    core.gravity = gravity;
}

pub(super) fn set_speed(core: &mut SimulationCore, speed: f32) {
    // The demo slider range; negative speed would run the integration backwards
    core.speed = speed.clamp(0.0, 10.0);
}

pub(super) fn resize(core: &mut SimulationCore, width: u32, height: u32) {
    core.width = width as f32;
    core.height = height as f32;

    // Re-clamp live particles so the bounds invariant holds immediately
    let (w, h) = (core.width, core.height);
    for p in core.particles.iter_mut() {
        p.x = p.x.clamp(p.radius, (w - p.radius).max(p.radius));
        p.y = p.y.min(h - p.radius);
    }
}
