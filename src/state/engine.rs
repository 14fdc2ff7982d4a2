//! Countdown engine: owns every timer state transition

use tracing::{debug, info};

use super::TimerState;
use crate::storage::{SaveFile, StoreError};

/// The single owner of [`TimerState`] transitions.
///
/// All operations are total: arithmetic clamps at zero and every transition
/// is defined in both the running and stopped states. Mutating operations
/// persist the new state and return the persistence result so callers can
/// observe degraded-mode behavior; the in-memory state stays authoritative
/// either way.
///
/// The engine never reads the wall clock. Callers pass `now` (Unix-epoch
/// seconds) into the operations that need it.
#[derive(Debug)]
pub struct CountdownEngine {
    state: TimerState,
    store: SaveFile,
}

impl CountdownEngine {
    pub fn new(state: TimerState, store: SaveFile) -> Self {
        Self { state, store }
    }

    pub fn state(&self) -> &TimerState {
        &self.state
    }

    pub fn is_running(&self) -> bool {
        self.state.running
    }

    pub fn remaining_seconds(&self) -> f64 {
        self.state.remaining
    }

    /// Start the countdown. No-op when already running.
    pub fn start(&mut self, now: f64) -> Result<(), StoreError> {
        if self.state.running {
            return Ok(());
        }
        self.state.running = true;
        self.state.last_update = now;
        info!("Countdown started, {:.0}s remaining", self.state.remaining);
        self.save()
    }

    /// Stop the countdown. No-op when already stopped; `remaining` keeps
    /// whatever the last tick applied.
    pub fn stop(&mut self) -> Result<(), StoreError> {
        if !self.state.running {
            return Ok(());
        }
        self.state.running = false;
        info!("Countdown stopped, {:.0}s remaining", self.state.remaining);
        self.save()
    }

    /// Flip between running and stopped (the single Start/Stop control).
    pub fn toggle(&mut self, now: f64) -> Result<(), StoreError> {
        if self.state.running {
            self.stop()
        } else {
            self.start(now)
        }
    }

    /// Advance the countdown by the wall time elapsed since the last update.
    ///
    /// Only meaningful while running; a tick in the stopped state is a no-op
    /// and does not advance `last_update`. The caller drives the cadence,
    /// typically once per second.
    pub fn tick(&mut self, now: f64) -> Result<(), StoreError> {
        if !self.state.running {
            return Ok(());
        }
        let elapsed = (now - self.state.last_update).max(0.0);
        self.state.remaining = (self.state.remaining - elapsed).max(0.0);
        self.state.last_update = now;
        self.save()
    }

    /// Add or remove budget, clamped at zero, in any state.
    pub fn adjust(&mut self, delta_seconds: f64) -> Result<(), StoreError> {
        self.state.remaining = (self.state.remaining + delta_seconds).max(0.0);
        info!(
            "Adjusted budget by {:+.0}s, {:.0}s remaining",
            delta_seconds, self.state.remaining
        );
        self.save()
    }

    /// Account once, at startup, for wall time that passed while the
    /// application was closed. Only applies when the saved state was running.
    ///
    /// Does not persist by itself; callers save after reconciling.
    pub fn reconcile_on_load(&mut self, now: f64) {
        if !self.state.running {
            return;
        }
        let offline = (now - self.state.last_update).max(0.0);
        if offline > 0.0 {
            debug!("Subtracting {:.0}s elapsed while closed", offline);
        }
        self.state.remaining = (self.state.remaining - offline).max(0.0);
        self.state.last_update = now;
    }

    /// Persist the current state.
    pub fn save(&self) -> Result<(), StoreError> {
        self.store.save(&self.state)
    }
}
