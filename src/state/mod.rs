//! State management module
//!
//! This module contains the countdown state and the engine that owns its
//! transitions.

pub mod engine;
pub mod timer_state;

// Re-export main types
pub use engine::CountdownEngine;
pub use timer_state::{TimerState, DEFAULT_BUDGET_SECONDS};
