//! hourbank - a persistent terminal countdown of a personal hour budget
//!
//! This is the main entry point: it wires configuration, the save file, the
//! countdown engine, and the terminal UI together.

use anyhow::Context;
use tracing::{info, warn};

use hourbank::{clock, config::Config, state::CountdownEngine, storage::SaveFile, ui};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // The terminal belongs to the widget, so logs go to a file next to the
    // save file.
    let log_path = config.log_path();
    if let Some(dir) = log_path.parent() {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("failed to create {}", dir.display()))?;
    }
    let log_file = std::fs::File::create(&log_path)
        .with_context(|| format!("failed to open log file {}", log_path.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(format!("hourbank={}", config.log_level()))
        .with_writer(std::sync::Mutex::new(log_file))
        .with_ansi(false)
        .init();

    info!("Starting hourbank");
    info!(
        "Configuration: save file={}, budget={}h",
        config.save_path().display(),
        config.budget_hours
    );

    let store = SaveFile::new(config.save_path());
    let now = clock::unix_now();
    let state = store.load_or_default(config.budget_seconds(), now);

    let mut engine = CountdownEngine::new(state, store);
    // Account for wall time that passed while the app was closed, then make
    // the reconciled state durable before the first render.
    engine.reconcile_on_load(now);
    if let Err(e) = engine.save() {
        warn!("Initial save failed: {}", e);
    }

    if engine.is_running() {
        info!("Countdown was running when last closed, resuming");
    }

    ui::run(&mut engine).await?;

    // Quitting does not stop the countdown; a running timer keeps counting
    // against the budget until the next launch reconciles it.
    if let Err(e) = engine.save() {
        warn!("Final save failed: {}", e);
    }

    info!("Shutdown complete");
    Ok(())
}
