//! Timer state structure and defaults

use serde::{Deserialize, Serialize};

use crate::clock;

/// Canonical initial budget: 9000 hours, in seconds.
pub const DEFAULT_BUDGET_SECONDS: f64 = 9_000.0 * 3_600.0;

/// Persistent countdown state.
///
/// Serialized field names are part of the save-file format; a field missing
/// from the record falls back to its default instead of failing the load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimerState {
    /// Seconds left in the budget, clamped to >= 0 by every mutation
    #[serde(default = "default_remaining")]
    pub remaining: f64,
    /// Whether the countdown is actively decrementing
    #[serde(default)]
    pub running: bool,
    /// Unix-epoch seconds at which `remaining` was last authoritative
    #[serde(default = "crate::clock::unix_now")]
    pub last_update: f64,
}

fn default_remaining() -> f64 {
    DEFAULT_BUDGET_SECONDS
}

impl TimerState {
    /// Create the state for a fresh install: full budget, stopped.
    pub fn fresh(budget_seconds: f64, now: f64) -> Self {
        Self {
            remaining: budget_seconds.max(0.0),
            running: false,
            last_update: now,
        }
    }

    /// Check if the countdown is running
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Get the remaining budget in seconds
    pub fn remaining_seconds(&self) -> f64 {
        self.remaining
    }
}

impl Default for TimerState {
    fn default() -> Self {
        Self::fresh(DEFAULT_BUDGET_SECONDS, clock::unix_now())
    }
}
