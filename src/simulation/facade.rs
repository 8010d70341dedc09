use wasm_bindgen::prelude::*;

use super::perf_stats::PerfStats;
use super::SimulationCore;

/// Pointer/length table for the render transfer buffers.
///
/// Valid until the next command or `extract_frame` call reallocates a
/// buffer; the JS host re-reads the layout each frame.
#[wasm_bindgen]
pub struct FrameLayout {
    positions_ptr: u32,
    positions_len_elements: u32,
    positions_len_bytes: u32,
    colors_ptr: u32,
    colors_len_elements: u32,
    colors_len_bytes: u32,
    radii_ptr: u32,
    radii_len_elements: u32,
    radii_len_bytes: u32,
}

#[wasm_bindgen]
impl FrameLayout {
    #[wasm_bindgen(getter)]
    pub fn positions_ptr(&self) -> u32 { self.positions_ptr }
    #[wasm_bindgen(getter)]
    pub fn positions_len_elements(&self) -> u32 { self.positions_len_elements }
    #[wasm_bindgen(getter)]
    pub fn positions_len_bytes(&self) -> u32 { self.positions_len_bytes }

    #[wasm_bindgen(getter)]
    pub fn colors_ptr(&self) -> u32 { self.colors_ptr }
    #[wasm_bindgen(getter)]
    pub fn colors_len_elements(&self) -> u32 { self.colors_len_elements }
    #[wasm_bindgen(getter)]
    pub fn colors_len_bytes(&self) -> u32 { self.colors_len_bytes }

    #[wasm_bindgen(getter)]
    pub fn radii_ptr(&self) -> u32 { self.radii_ptr }
    #[wasm_bindgen(getter)]
    pub fn radii_len_elements(&self) -> u32 { self.radii_len_elements }
    #[wasm_bindgen(getter)]
    pub fn radii_len_bytes(&self) -> u32 { self.radii_len_bytes }
}

#[wasm_bindgen]
pub struct Simulation {
    core: SimulationCore,
}

#[wasm_bindgen]
impl Simulation {
    /// Create a new simulation with given canvas dimensions
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            core: SimulationCore::new(width, height),
        }
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> f32 { self.core.width() }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> f32 { self.core.height() }

    #[wasm_bindgen(getter)]
    pub fn particle_count(&self) -> u32 { self.core.particle_count() }

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.core.frame() }

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.core.enable_perf_metrics(enabled);
    }

    /// Get last step perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        self.core.get_perf_stats()
    }

    pub fn set_gravity(&mut self, gravity: f32) {
        self.core.set_gravity(gravity);
    }

    pub fn set_speed(&mut self, speed: f32) {
        self.core.set_speed(speed);
    }

    /// Resize canvas bounds; live particles are re-clamped inside
    pub fn resize(&mut self, width: u32, height: u32) {
        self.core.resize(width, height);
    }

    /// Start a run on a material; returns the number of particles spawned
    pub fn start(&mut self, material: u8) -> Result<u32, JsValue> {
        self.core.start(material).map_err(|e| JsValue::from_str(&e))
    }

    /// Freehand brush: spawn `count` particles inside a radius
    pub fn spawn_in_radius(
        &mut self,
        cx: f32,
        cy: f32,
        radius: f32,
        material: u8,
        count: u32,
    ) -> u32 {
        self.core.spawn_in_radius(cx, cy, radius, material, count)
    }

    /// Eraser brush: remove all particles inside a radius
    pub fn erase_in_radius(&mut self, cx: f32, cy: f32, radius: f32) -> u32 {
        self.core.erase_in_radius(cx, cy, radius)
    }

    /// Stop the run and discard all particles
    pub fn clear(&mut self) {
        self.core.clear();
    }

    /// Step the simulation forward one display tick
    pub fn step(&mut self) {
        self.core.step();
    }

    pub fn load_material_bundle(&mut self, json: String) -> Result<(), JsValue> {
        self.core
            .load_material_bundle_json(&json)
            .map_err(|e| JsValue::from_str(&e))?;
        Ok(())
    }

    pub fn get_material_manifest_json(&self) -> String {
        self.core.get_material_manifest_json()
    }

    /// Classify an RGBA8 pixel patch against the catalog; returns a JSON
    /// ScanResult { materialId, key, confidence }
    pub fn scan_pixels(&self, rgba: &[u8], width: u32, height: u32) -> Result<String, JsValue> {
        let result = self
            .core
            .scan_rgba(rgba, width, height)
            .map_err(|e| JsValue::from_str(&e))?;
        serde_json::to_string(&result).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    // === RENDER TRANSFER API ===

    /// Pack live particles into the transfer buffers; returns particle count
    pub fn extract_frame(&mut self) -> usize {
        self.core.extract_frame()
    }

    /// Get pointer to interleaved x,y positions (for JS rendering)
    pub fn positions_ptr(&self) -> *const f32 {
        self.core.positions_ptr()
    }

    pub fn positions_len(&self) -> usize {
        self.core.positions_len()
    }

    /// Get pointer to per-particle colors (canvas byte order)
    pub fn colors_ptr(&self) -> *const u32 {
        self.core.colors_ptr()
    }

    pub fn colors_len(&self) -> usize {
        self.core.colors_len()
    }

    /// Get pointer to per-particle radii
    pub fn radii_ptr(&self) -> *const f32 {
        self.core.radii_ptr()
    }

    pub fn radii_len(&self) -> usize {
        self.core.radii_len()
    }

    pub fn frame_layout(&self) -> FrameLayout {
        let data = self.core.frame_layout_data();
        FrameLayout {
            positions_ptr: data.positions_ptr as u32,
            positions_len_elements: data.positions_len_elements as u32,
            positions_len_bytes: data.positions_len_bytes as u32,
            colors_ptr: data.colors_ptr as u32,
            colors_len_elements: data.colors_len_elements as u32,
            colors_len_bytes: data.colors_len_bytes as u32,
            radii_ptr: data.radii_ptr as u32,
            radii_len_elements: data.radii_len_elements as u32,
            radii_len_bytes: data.radii_len_bytes as u32,
        }
    }
}
