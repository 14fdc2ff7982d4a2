//! Configuration and CLI argument handling

use std::path::PathBuf;

use clap::Parser;

/// CLI argument parsing structure
#[derive(Parser, Debug)]
#[command(name = "hourbank")]
#[command(about = "A persistent terminal countdown of a personal hour budget")]
#[command(version)]
pub struct Config {
    /// Save file location (defaults to the platform data directory)
    #[arg(long, value_name = "PATH")]
    pub data_file: Option<PathBuf>,

    /// Initial budget in hours, used only on a fresh install
    #[arg(long, default_value = "9000")]
    pub budget_hours: u64,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    /// Parse configuration from command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Get the initial budget in seconds
    pub fn budget_seconds(&self) -> f64 {
        self.budget_hours as f64 * 3_600.0
    }

    /// Get the save file path, honoring the --data-file override
    pub fn save_path(&self) -> PathBuf {
        self.data_file.clone().unwrap_or_else(|| {
            dirs::data_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("hourbank")
                .join("hourbank.json")
        })
    }

    /// Get the log file path, next to the save file
    pub fn log_path(&self) -> PathBuf {
        self.save_path().with_file_name("hourbank.log")
    }

    /// Get the appropriate log level based on verbose flag
    pub fn log_level(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else {
            "info"
        }
    }
}
