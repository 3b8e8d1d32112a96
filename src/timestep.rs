//! Fixed-timestep clock.
//!
//! Wall-clock frame deltas are clamped and banked; the simulation then
//! consumes the bank in constant steps, so physics does not depend on the
//! display's refresh rate.

/// Simulation step, seconds.
pub const STEP: f32 = 1.0 / 120.0;
/// Largest frame delta that is banked; anything longer (a stall, a
/// suspended terminal) is treated as this long.
pub const MAX_DELTA: f32 = 0.05;

#[derive(Debug)]
pub struct FixedStep {
    step: f32,
    max_delta: f32,
    accumulator: f32,
}

impl FixedStep {
    pub fn new(step: f32, max_delta: f32) -> Self {
        Self {
            step,
            max_delta,
            accumulator: 0.0,
        }
    }

    /// Banks `dt` and returns how many whole steps are now due. The due
    /// time is removed from the bank.
    pub fn accumulate(&mut self, dt: f32) -> u32 {
        self.accumulator += dt.clamp(0.0, self.max_delta);
        let mut due = 0;
        while self.accumulator >= self.step {
            self.accumulator -= self.step;
            due += 1;
        }
        due
    }

    pub fn step(&self) -> f32 {
        self.step
    }

    pub fn leftover(&self) -> f32 {
        self.accumulator
    }
}

impl Default for FixedStep {
    fn default() -> Self {
        Self::new(STEP, MAX_DELTA)
    }
}

/// Turns monotonic frame timestamps into step counts.
#[derive(Debug)]
pub struct FrameClock {
    prev: f64,
    fixed: FixedStep,
}

impl FrameClock {
    pub fn new(start: f64) -> Self {
        Self {
            prev: start,
            fixed: FixedStep::default(),
        }
    }

    /// `now` is seconds on the same monotonic scale as `start`. A timestamp
    /// that goes backwards counts as zero elapsed time.
    pub fn frame(&mut self, now: f64) -> u32 {
        let dt = (now - self.prev).max(0.0) as f32;
        self.prev = now;
        self.fixed.accumulate(dt)
    }

    pub fn step(&self) -> f32 {
        self.fixed.step()
    }

    pub fn leftover(&self) -> f32 {
        self.fixed.leftover()
    }
}
