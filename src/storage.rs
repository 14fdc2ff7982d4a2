//! On-disk persistence for the timer state
//!
//! The save file is a single small JSON record. Writes go to a temporary
//! file in the same directory followed by a rename, so a crash mid-write
//! leaves the previous valid record in place.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use thiserror::Error;
use tracing::{debug, warn};

use crate::state::TimerState;

/// Persistence failures, kept distinct so callers can tell a fresh install
/// from a damaged record.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("no saved state at {0}")]
    Missing(PathBuf),
    #[error("failed to access save file: {0}")]
    Io(#[from] io::Error),
    #[error("save file is malformed: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Handle to the JSON save file holding one [`TimerState`] record.
#[derive(Debug, Clone)]
pub struct SaveFile {
    path: PathBuf,
}

impl SaveFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and parse the saved record.
    pub fn read(&self) -> Result<TimerState, StoreError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(StoreError::Missing(self.path.clone()))
            }
            Err(e) => return Err(e.into()),
        };
        Ok(serde_json::from_str(&raw)?)
    }

    /// Load the saved record, substituting a fresh state on any failure.
    ///
    /// A missing file is the normal first launch and only logged at debug;
    /// an unreadable record is logged at warn and discarded. Never raises.
    pub fn load_or_default(&self, budget_seconds: f64, now: f64) -> TimerState {
        match self.read() {
            Ok(state) => state,
            Err(StoreError::Missing(_)) => {
                debug!("No save file at {}, starting fresh", self.path.display());
                TimerState::fresh(budget_seconds, now)
            }
            Err(e) => {
                warn!("Discarding unreadable save file: {}", e);
                TimerState::fresh(budget_seconds, now)
            }
        }
    }

    /// Write the record durably: temp file in the same directory, then rename.
    pub fn save(&self, state: &TimerState) -> Result<(), StoreError> {
        if let Some(dir) = self.path.parent() {
            if !dir.as_os_str().is_empty() {
                fs::create_dir_all(dir)?;
            }
        }
        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, serde_json::to_string(state)?)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}
