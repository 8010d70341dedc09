use std::sync::Arc;

use crate::domain::catalog::MaterialCatalog;

use super::perf_stats::PerfStats;
use super::{RenderBuffers, SimulationCore};

pub(super) fn create_simulation_core(width: u32, height: u32) -> SimulationCore {
    SimulationCore {
        catalog: Arc::new(MaterialCatalog::from_builtin()),
        particles: Vec::new(),
        width: width as f32,
        height: height as f32,
        gravity: 1.0,
        speed: 1.0,
        active_material: None,
        frame: 0,
        rng_state: 12345,
        perf_enabled: false,
        perf_stats: PerfStats::default(),
        render: RenderBuffers {
            positions: Vec::new(),
            colors: Vec::new(),
            radii: Vec::new(),
        },
    }
}
