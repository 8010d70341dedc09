/// Result of a physics step for a single particle
#[derive(Clone, Copy, Debug)]
pub struct StepResult {
    /// Did the particle move this tick?
    pub moved: bool,
    /// Bounced off the left or right wall
    pub bounced_wall: bool,
    /// Clamped to (and bounced off) the floor
    pub bounced_floor: bool,
    /// Speed magnitude after this integration
    pub speed: f32,
}

impl StepResult {
    #[inline]
    pub fn bounced(&self) -> bool {
        self.bounced_wall || self.bounced_floor
    }
}
