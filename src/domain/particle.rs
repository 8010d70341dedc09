//! Particle state. Material properties that the stepper needs every tick
//! (density, friction) are copied in at spawn so the hot loop never touches
//! the catalog.

use crate::domain::material::MaterialId;

#[derive(Clone, Copy, Debug)]
pub struct Particle {
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
    pub radius: f32,
    /// Canvas-byte-order color, ready for the render buffer
    pub color: u32,
    pub material: MaterialId,
    pub density: f32,
    pub friction: f32,
}

impl Particle {
    /// Velocity magnitude
    #[inline]
    pub fn speed(&self) -> f32 {
        (self.vx * self.vx + self.vy * self.vy).sqrt()
    }
}
