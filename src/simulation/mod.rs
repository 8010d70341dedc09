//! Simulation - owns the particle set and drives the per-frame loop
//!
//! Refactored for SOLID principles:
//! - Single Responsibility: the core only orchestrates, delegating to
//!   commands/step/settings/render submodules
//! - The physics itself lives in physics/, material data in domain/
//!
//! The facade (`Simulation`) is the WASM boundary; `SimulationCore` is the
//! pure-Rust core the tests exercise directly.

use std::sync::Arc;

use crate::domain::catalog::MaterialCatalog;
use crate::domain::material::MaterialId;
use crate::domain::particle::Particle;

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "init/random.rs"]
mod random;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
#[path = "commands/commands.rs"]
mod commands;
#[path = "step/step.rs"]
mod step;
#[path = "render/render_extract.rs"]
mod render_extract;
mod facade;

pub use facade::{FrameLayout, Simulation};
pub use perf_stats::PerfStats;

use perf_timer::PerfTimer;

/// Hard cap on live particles (batch spawn + brush combined)
pub const MAX_PARTICLES: usize = 2000;

/// Flat transfer buffers the JS host reads after each tick
pub(crate) struct RenderBuffers {
    /// Interleaved x,y pairs
    positions: Vec<f32>,
    colors: Vec<u32>,
    radii: Vec<f32>,
}

pub(crate) struct FrameLayoutData {
    pub(crate) positions_ptr: *const f32,
    pub(crate) positions_len_elements: usize,
    pub(crate) positions_len_bytes: usize,
    pub(crate) colors_ptr: *const u32,
    pub(crate) colors_len_elements: usize,
    pub(crate) colors_len_bytes: usize,
    pub(crate) radii_ptr: *const f32,
    pub(crate) radii_len_elements: usize,
    pub(crate) radii_len_bytes: usize,
}

/// The simulation core
pub struct SimulationCore {
    catalog: Arc<MaterialCatalog>,
    particles: Vec<Particle>,

    // Settings
    width: f32,
    height: f32,
    gravity: f32,
    speed: f32,

    // State
    active_material: Option<MaterialId>,
    frame: u64,
    rng_state: u32,

    // Perf metrics
    perf_enabled: bool,
    perf_stats: PerfStats,

    render: RenderBuffers,
}

impl SimulationCore {
    /// Create a new simulation with given canvas dimensions
    pub fn new(width: u32, height: u32) -> Self {
        init::create_simulation_core(width, height)
    }

    pub fn load_material_bundle_json(&mut self, json: &str) -> Result<(), String> {
        let catalog = MaterialCatalog::from_bundle_json(json)?;
        self.catalog = Arc::new(catalog);
        self.clear();
        Ok(())
    }

    pub fn get_material_manifest_json(&self) -> String {
        self.catalog.manifest_json()
    }

    pub fn scan_rgba(
        &self,
        rgba: &[u8],
        width: u32,
        height: u32,
    ) -> Result<crate::domain::classify::ScanResult, String> {
        crate::domain::classify::classify_rgba(&self.catalog, rgba, width, height)
    }

    pub fn width(&self) -> f32 { self.width }

    pub fn height(&self) -> f32 { self.height }

    pub fn particle_count(&self) -> u32 { self.particles.len() as u32 }

    pub fn frame(&self) -> u64 { self.frame }

    pub fn active_material(&self) -> Option<MaterialId> { self.active_material }

    pub fn catalog(&self) -> &MaterialCatalog { &self.catalog }

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        settings::enable_perf_metrics(self, enabled);
    }

    /// Get last step perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        settings::get_perf_stats(self)
    }

    pub fn set_gravity(&mut self, gravity: f32) {
        settings::set_gravity(self, gravity);
    }

    pub fn gravity(&self) -> f32 { self.gravity }

    pub fn set_speed(&mut self, speed: f32) {
        settings::set_speed(self, speed);
    }

    pub fn speed(&self) -> f32 { self.speed }

    /// Resize canvas bounds; live particles are re-clamped inside
    pub fn resize(&mut self, width: u32, height: u32) {
        settings::resize(self, width, height);
    }

    /// Start a simulation run: discard the current set and spawn a batch
    /// sized by the material's category. Returns the number spawned.
    pub fn start(&mut self, material: MaterialId) -> Result<u32, String> {
        commands::start(self, material)
    }

    /// Freehand brush: spawn `count` particles inside a radius
    pub fn spawn_in_radius(
        &mut self,
        cx: f32,
        cy: f32,
        radius: f32,
        material: MaterialId,
        count: u32,
    ) -> u32 {
        commands::spawn_in_radius(self, cx, cy, radius, material, count)
    }

    /// Eraser brush: remove all particles inside a radius
    pub fn erase_in_radius(&mut self, cx: f32, cy: f32, radius: f32) -> u32 {
        commands::erase_in_radius(self, cx, cy, radius)
    }

    /// Stop the run and discard all particles
    pub fn clear(&mut self) {
        commands::clear(self)
    }

    /// Step the simulation forward one display tick
    pub fn step(&mut self) {
        step::step(self);
    }

    /// Pack live particles into the transfer buffers; returns particle count
    pub fn extract_frame(&mut self) -> usize {
        render_extract::extract_frame(self)
    }

    pub fn positions_ptr(&self) -> *const f32 {
        self.render.positions.as_ptr()
    }

    pub fn positions_len(&self) -> usize {
        self.render.positions.len()
    }

    pub fn colors_ptr(&self) -> *const u32 {
        self.render.colors.as_ptr()
    }

    pub fn colors_len(&self) -> usize {
        self.render.colors.len()
    }

    pub fn radii_ptr(&self) -> *const f32 {
        self.render.radii.as_ptr()
    }

    pub fn radii_len(&self) -> usize {
        self.render.radii.len()
    }

    pub(crate) fn frame_layout_data(&self) -> FrameLayoutData {
        FrameLayoutData {
            positions_ptr: self.positions_ptr(),
            positions_len_elements: self.positions_len(),
            positions_len_bytes: self.positions_len() * std::mem::size_of::<f32>(),
            colors_ptr: self.colors_ptr(),
            colors_len_elements: self.colors_len(),
            colors_len_bytes: self.colors_len() * std::mem::size_of::<u32>(),
            radii_ptr: self.radii_ptr(),
            radii_len_elements: self.radii_len(),
            radii_len_bytes: self.radii_len() * std::mem::size_of::<f32>(),
        }
    }

    #[cfg(test)]
    pub(crate) fn particles(&self) -> &[Particle] {
        &self.particles
    }

    #[cfg(test)]
    pub(crate) fn particles_mut(&mut self) -> &mut Vec<Particle> {
        &mut self.particles
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
