// File: crates/trend-core/src/scheduler.rs
// Summary: Fixed-interval repeating timer driven by elapsed time from the host loop.

use std::time::Duration;

/// Fires at a fixed interval a fixed number of times, until cancelled.
///
/// The timer owns no clock; the host feeds it elapsed time through [`RepeatTimer::advance`]
/// and runs one callback per fire reported.
#[derive(Clone, Debug)]
pub struct RepeatTimer {
    interval: Duration,
    repeat: u32,
    fired: u32,
    carry: Duration,
    cancelled: bool,
}

impl RepeatTimer {
    pub fn new(interval: Duration, repeat: u32) -> Self {
        Self { interval, repeat, fired: 0, carry: Duration::ZERO, cancelled: false }
    }

    /// Timer at `ticks_per_second` firing `repeat` times.
    pub fn at_rate(ticks_per_second: u32, repeat: u32) -> Self {
        Self::new(Duration::from_secs(1) / ticks_per_second.max(1), repeat)
    }

    /// Accumulate `elapsed` and return how many fires became due.
    pub fn advance(&mut self, elapsed: Duration) -> u32 {
        if self.is_done() { return 0; }
        if self.interval.is_zero() {
            let due = self.remaining();
            self.fired = self.repeat;
            return due;
        }
        self.carry += elapsed;
        let mut due = 0;
        while self.carry >= self.interval && self.fired < self.repeat {
            self.carry -= self.interval;
            self.fired += 1;
            due += 1;
        }
        due
    }

    /// Stop future fires. Calling it again has no further effect.
    pub fn cancel(&mut self) {
        self.cancelled = true;
    }

    pub fn is_cancelled(&self) -> bool { self.cancelled }
    pub fn is_done(&self) -> bool { self.cancelled || self.fired >= self.repeat }
    pub fn fired(&self) -> u32 { self.fired }
    pub fn remaining(&self) -> u32 { self.repeat - self.fired }
    pub fn interval(&self) -> Duration { self.interval }
}
