//! Fundamental geometric and simulation types.

use serde::{Deserialize, Serialize};

/// 2D position in arena space (pixels).
/// Only `x` participates in motion and range checks; `y` is the lane row,
/// carried through for renderers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// Simulation time tracking.
///
/// The driver supplies a monotonic timestamp on every tick; all timing
/// rules (attack cooldowns, pause windows, spawn periods) are expressed in
/// real milliseconds against that clock, never in tick counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each tick).
    pub tick: u64,
    /// Monotonic timestamp of the most recent tick (milliseconds).
    pub now_ms: u64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Horizontal distance to another position.
    pub fn distance_x(&self, other: &Position) -> f64 {
        (other.x - self.x).abs()
    }
}

impl SimTime {
    /// Advance by one tick to the supplied timestamp.
    pub fn advance(&mut self, now_ms: u64) {
        self.tick += 1;
        self.now_ms = now_ms;
    }
}
