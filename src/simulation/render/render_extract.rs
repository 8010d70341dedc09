use super::{PerfTimer, SimulationCore};

/// Pack live particles into the flat transfer buffers.
///
/// The JS host builds typed-array views over wasm memory from the ptr/len
/// pairs, so nothing is copied across the boundary. Positions are
/// interleaved x,y; colors are already canvas byte order.
pub(super) fn extract_frame(core: &mut SimulationCore) -> usize {
    let perf_on = core.perf_enabled;
    let t0 = if perf_on { Some(PerfTimer::start()) } else { None };

    let n = core.particles.len();
    core.render.positions.resize(n * 2, 0.0);
    core.render.colors.resize(n, 0);
    core.render.radii.resize(n, 0.0);

    for (i, p) in core.particles.iter().enumerate() {
        core.render.positions[i * 2] = p.x;
        core.render.positions[i * 2 + 1] = p.y;
        core.render.colors[i] = p.color;
        core.render.radii[i] = p.radius;
    }

    if let Some(t) = t0 {
        core.perf_stats.extract_ms = t.elapsed_ms();
    }

    n
}
