//! hourbank - a persistent terminal countdown of a personal hour budget
//!
//! The core is a small state machine (running/stopped) over a single
//! remaining-seconds counter, persisted to a JSON save file after every
//! mutation. The terminal front-end in [`ui`] is a thin driver around it.

pub mod clock;
pub mod config;
pub mod state;
pub mod storage;
pub mod ui;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use state::{CountdownEngine, TimerState};
pub use storage::{SaveFile, StoreError};
pub use utils::signals::shutdown_signal;
