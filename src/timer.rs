use std::time::Duration;

/// Upper bound on ticks handed out by one `advance`.
pub const MAX_TICKS_PER_UPDATE: u32 = 100;
/// Longer frame gaps than this are treated as a stall and clipped.
const MAX_FRAME_GAP: Duration = Duration::from_secs(1);

/// Fixed-step clock: turns wall time into whole simulation ticks plus a
/// fractional remainder for render interpolation.
#[derive(Debug, Clone)]
pub struct Timer {
    ticks_per_second: f32,
    /// Multiplier applied to elapsed time.
    pub time_scale: f32,
    passed: f32,
    /// Whole ticks to simulate this frame.
    pub ticks: u32,
    /// Fraction of the next tick already elapsed, in `[0, 1)`.
    pub alpha: f32,
}

impl Timer {
    pub fn new(ticks_per_second: f32) -> Self {
        Self {
            ticks_per_second,
            time_scale: 1.0,
            passed: 0.0,
            ticks: 0,
            alpha: 0.0,
        }
    }

    #[inline]
    pub fn ticks_per_second(&self) -> f32 {
        self.ticks_per_second
    }

    /// Accounts for `elapsed` wall time since the previous call.
    pub fn advance(&mut self, elapsed: Duration) {
        let elapsed = elapsed.min(MAX_FRAME_GAP);
        self.passed += elapsed.as_secs_f32() * self.time_scale * self.ticks_per_second;
        let whole = self.passed.floor();
        self.passed -= whole;
        self.ticks = (whole as u32).min(MAX_TICKS_PER_UPDATE);
        self.alpha = self.passed;
    }
}
