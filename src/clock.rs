//! Wall-clock time sources
//!
//! Trap spawning runs on wall-clock time rather than accumulated frame deltas,
//! so spawn cadence doesn't follow the refresh rate. The clock is a trait so
//! tests can drive time by hand.

/// Monotonic millisecond clock
pub trait Clock {
    fn now_ms(&self) -> f64;
}

/// macroquad's `get_time()`, which works on native and in the browser
/// (`std::time::Instant` panics on wasm32-unknown-unknown)
#[derive(Debug, Clone, Copy, Default)]
pub struct MacroquadClock;

impl Clock for MacroquadClock {
    fn now_ms(&self) -> f64 {
        macroquad::prelude::get_time() * 1000.0
    }
}

/// Hand-driven clock for tests. Clones share the same time.
#[cfg(test)]
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: std::rc::Rc<std::cell::Cell<f64>>,
}

#[cfg(test)]
impl ManualClock {
    pub fn new(start_ms: f64) -> Self {
        let clock = Self::default();
        clock.set(start_ms);
        clock
    }

    pub fn set(&self, ms: f64) {
        self.now.set(ms);
    }

    pub fn advance(&self, ms: f64) {
        self.now.set(self.now.get() + ms);
    }
}

#[cfg(test)]
impl Clock for ManualClock {
    fn now_ms(&self) -> f64 {
        self.now.get()
    }
}
