//! Clock module - fixed-rate logic timer
//!
//! Turns wall-clock timestamps into discrete "cycle elapsed" signals at a fixed
//! frequency. The game loop calls [`Clock::update`] every frame and runs one
//! logic step whenever [`Clock::has_elapsed_cycle`] reports true.
//!
//! The clock never catches up: if several cycle lengths pass between two
//! updates, only one cycle is signalled and the surplus whole cycles are
//! dropped. The fractional remainder carries into the next cycle.

/// Fixed-rate ticker driven by caller-supplied millisecond timestamps.
#[derive(Debug, Clone)]
pub struct Clock {
    cycle_ms: f64,
    accumulated_ms: f64,
    last_update_ms: Option<u64>,
    elapsed: bool,
    paused: bool,
}

impl Clock {
    /// Create a running clock ticking `frequency_hz` cycles per second.
    pub fn new(frequency_hz: f64) -> Self {
        Self {
            cycle_ms: 1000.0 / frequency_hz,
            accumulated_ms: 0.0,
            last_update_ms: None,
            elapsed: false,
            paused: false,
        }
    }

    /// Advance to `now_ms`.
    ///
    /// Time is measured from the previous update, paused or not, so a long
    /// pause does not turn into a burst of accumulated time on resume.
    pub fn update(&mut self, now_ms: u64) {
        let delta = match self.last_update_ms {
            Some(last) => now_ms.saturating_sub(last) as f64,
            None => 0.0,
        };
        self.last_update_ms = Some(now_ms);

        if self.paused {
            return;
        }

        self.accumulated_ms += delta;
        if self.accumulated_ms >= self.cycle_ms {
            self.accumulated_ms %= self.cycle_ms;
            self.elapsed = true;
        }
    }

    /// Take the pending cycle signal, if any.
    pub fn has_elapsed_cycle(&mut self) -> bool {
        std::mem::take(&mut self.elapsed)
    }

    /// Freeze or resume accumulation. The accumulator is kept as is.
    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Drop accumulated time and any pending signal.
    pub fn reset(&mut self) {
        self.accumulated_ms = 0.0;
        self.elapsed = false;
    }
}
