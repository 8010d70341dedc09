//! Per-particle physics: gravity, friction, integration, boundary handling.
//!
//! `step_particle` is pure given its inputs and order-independent across
//! particles, so the simulation loop may fan it out in parallel.

pub mod bounds;
pub mod forces;
pub mod types;
pub mod update;

pub use types::StepResult;
pub use update::{step_particle, Environment};

/// Scale constant coupling gravity to material density.
///
/// Denser particles accelerate faster. Real gravitational acceleration is
/// mass-independent; the demo's visible behavior depends on this coupling,
/// so it stays.
pub const GRAVITY_COUPLING: f32 = 0.01;

/// Fraction of velocity retained (with sign flip) after a boundary bounce
pub const RESTITUTION: f32 = 0.8;

/// Hard velocity cap, far above anything the demo produces
pub const MAX_VELOCITY: f32 = 1000.0;
