//! Time based debouncing of the shared signal pin
//!
//! A raw level has to hold for the full debounce interval before it becomes
//! the steady state. Every change of the raw level restarts the interval.
//! The two most recent steady states are kept so a rising or falling edge
//! can be reported for exactly one tick after it settles.
//!
//! There is one debouncer per signal pin, not per channel. Callers switching
//! channels between ticks share the same history.

use embassy_time::{Duration, Instant};

/// Settled level change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    /// Low to high (press)
    Rising,
    /// High to low (release)
    Falling,
}

#[derive(Debug, Clone)]
pub struct Debouncer {
    previous_steady: bool,
    last_steady: bool,
    last_flickerable: bool,
    interval: Duration,
    last_transition: Instant,
}

impl Debouncer {
    /// Start settled at `level`.
    pub fn new(level: bool, interval: Duration) -> Self {
        Self {
            previous_steady: level,
            last_steady: level,
            last_flickerable: level,
            interval,
            last_transition: Instant::from_ticks(0),
        }
    }

    /// Feed one raw sample taken at `now`.
    ///
    /// Returns the edge latched by this sample, if any.
    pub fn update(&mut self, raw: bool, now: Instant) -> Option<Edge> {
        if raw != self.last_flickerable {
            self.last_transition = now;
            self.last_flickerable = raw;
        }

        if now.saturating_duration_since(self.last_transition) >= self.interval {
            self.previous_steady = self.last_steady;
            self.last_steady = self.last_flickerable;
            return self.edge();
        }

        None
    }

    /// Edge between the two most recent steady states.
    pub fn edge(&self) -> Option<Edge> {
        match (self.previous_steady, self.last_steady) {
            (false, true) => Some(Edge::Rising),
            (true, false) => Some(Edge::Falling),
            _ => None,
        }
    }

    pub fn is_pressed(&self) -> bool {
        self.edge() == Some(Edge::Rising)
    }

    pub fn is_released(&self) -> bool {
        self.edge() == Some(Edge::Falling)
    }

    /// Debounced level.
    pub fn level(&self) -> bool {
        self.last_steady
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }
}
