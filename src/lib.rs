//! Matflow Engine - particle simulation for material flow visualization in WASM
//!
//! Architecture:
//! - domain/     - Materials, catalog, classification
//! - physics/    - Per-particle stepper (gravity, friction, bounds)
//! - simulation/ - Orchestration, commands, perf, render buffers, WASM facade
//!
//! The JS host drives the loop: call `step()` once per display refresh tick,
//! then read the transfer buffers and draw. Draw always follows update in the
//! same tick; the next tick is scheduled only after draw completes.

pub mod domain;
pub mod physics;
pub mod simulation;

// Convenience re-exports (the facade is the primary entry point)
pub use domain::catalog::MaterialCatalog;
pub use domain::material::MaterialId;
pub use simulation::{PerfStats, Simulation};

use wasm_bindgen::prelude::*;

// Re-export wasm-bindgen-rayon for thread pool initialization
#[cfg(feature = "parallel")]
pub use wasm_bindgen_rayon::init_thread_pool;

#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    web_sys::console::log_1(&"🦀 Matflow WASM Engine initialized!".into());
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Export material category constants for JS
#[wasm_bindgen]
pub fn cat_bulk() -> u8 { domain::material::CAT_BULK }
#[wasm_bindgen]
pub fn cat_granular() -> u8 { domain::material::CAT_GRANULAR }
#[wasm_bindgen]
pub fn cat_powder() -> u8 { domain::material::CAT_POWDER }
#[wasm_bindgen]
pub fn cat_piece() -> u8 { domain::material::CAT_PIECE }
#[wasm_bindgen]
pub fn cat_liquid() -> u8 { domain::material::CAT_LIQUID }
