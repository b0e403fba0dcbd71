//! Headless engine binary for the Frostvale simulation.
//!
//! This is the main entry point that wires together the configuration,
//! the starting world, and the real-time tick loop. A scripted
//! [`Autopilot`](autopilot::Autopilot) stands in for the keyboard so the
//! whole session can run unattended.
//!
//! # Startup Sequence
//!
//! 1. Load configuration from `frostvale-config.yaml`
//! 2. Initialize structured logging (tracing)
//! 3. Create the session (clock, seeded RNG, starting world, player)
//! 4. Run the simulation loop
//! 5. Log the result and the final HUD

mod autopilot;
mod error;
mod log_callback;

use std::path::Path;

use frostvale_core::config::SimulationConfig;
use frostvale_core::runner::{self, SimulationResult};
use frostvale_core::tick::SimulationState;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::autopilot::Autopilot;
use crate::error::EngineError;
use crate::log_callback::LogCallback;

/// Config file looked up in the working directory.
const CONFIG_PATH: &str = "frostvale-config.yaml";

/// Application entry point for the engine.
///
/// # Errors
///
/// Returns an error if any initialization step or the simulation itself fails.
#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Load configuration.
    let (config, from_file) = load_config()?;

    // 2. Initialize structured logging. RUST_LOG wins over `logging.level`.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.logging.level)),
        )
        .with_target(true)
        .init();

    info!("frostvale-engine starting");
    if !from_file {
        info!("Config file not found, using defaults");
    }
    info!(
        world_name = config.world.name,
        seed = config.world.seed,
        tick_interval_ms = config.world.tick_interval_ms,
        day_length_ms = config.time.day_length_ms,
        max_ticks = config.world.max_ticks,
        "Configuration loaded"
    );

    // 3. Create the session.
    let summary_interval = config.logging.summary_interval_ticks;
    let mut state = SimulationState::new(config).map_err(EngineError::from)?;
    info!(
        session_id = %state.session_id,
        started_at = %state.started_at,
        nodes = state.resources.len(),
        creatures = state.creatures.len(),
        "Session ready, entering tick loop"
    );

    // 4. Run the simulation.
    let mut input = Autopilot::new();
    let mut callback = LogCallback::new(summary_interval);
    let result = runner::run_simulation(&mut state, &mut input, &mut callback)
        .await
        .map_err(EngineError::from)?;

    // 5. Log results.
    runner::log_simulation_end(&result);
    report_final_hud(&result)?;

    info!(
        end_reason = ?result.end_reason,
        total_ticks = result.total_ticks,
        "frostvale-engine shutdown complete"
    );

    Ok(())
}

/// Load the simulation configuration from `frostvale-config.yaml`.
///
/// Looks for the config file relative to the current working directory
/// and falls back to the built-in defaults when it is absent. The flag
/// reports whether the file was read.
fn load_config() -> Result<(SimulationConfig, bool), EngineError> {
    let config_path = Path::new(CONFIG_PATH);
    if config_path.exists() {
        let config = SimulationConfig::from_file(config_path)?;
        Ok((config, true))
    } else {
        let mut config = SimulationConfig::default();
        config.world.apply_env_overrides();
        Ok((config, false))
    }
}

/// Log the last HUD snapshot as JSON.
fn report_final_hud(result: &SimulationResult) -> Result<(), EngineError> {
    if let Some(summary) = &result.final_summary {
        let hud = serde_json::to_string(&summary.hud)?;
        info!(hud = %hud, "Final HUD");
    }
    Ok(())
}
