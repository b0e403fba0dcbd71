//! Real-time simulation loop.
//!
//! This module provides [`run_simulation`], the top-level async function
//! that drives the tick cycle at a fixed frame rate:
//!
//! - **Frame driver**: a `tokio::time::interval` at `world.tick_interval_ms`
//! - **Input**: one [`InputSource`] poll per frame; its actions are applied
//!   in order before the frame's tick
//! - **Bounded simulation**: stop after `world.max_ticks` (0 = unbounded)
//! - **Game over**: stop on the tick the player dies
//!
//! The runner wraps the single-tick [`run_tick`] function and adds the
//! frame pacing around it. Everything runs on the caller's task; there is
//! no shared state and no locking.
//!
//! [`run_tick`]: crate::tick::run_tick

use core::time::Duration;

use frostvale_types::{ActionResult, GameOverCause};
use tokio::time::MissedTickBehavior;
use tracing::{Instrument, info, info_span, warn};

use crate::actions::apply_action;
use crate::input::InputSource;
use crate::tick::{self, SimulationState, TickSummary};

/// Errors that can occur during the simulation run.
#[derive(Debug, thiserror::Error)]
pub enum RunnerError {
    /// The tick interval cannot drive a timer.
    #[error("invalid frame interval: {interval_ms} ms")]
    InvalidInterval {
        /// The rejected interval in milliseconds.
        interval_ms: f64,
    },
}

/// Why the run stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndReason {
    /// The player died.
    GameOver(GameOverCause),
    /// `world.max_ticks` ticks have run.
    MaxTicksReached,
}

/// Result of the simulation run.
#[derive(Debug)]
pub struct SimulationResult {
    /// The reason the simulation ended.
    pub end_reason: EndReason,
    /// The last tick summary, if any tick completed.
    pub final_summary: Option<TickSummary>,
    /// Total number of ticks executed by this run.
    pub total_ticks: u64,
}

/// Callback invoked as the run progresses.
///
/// Implementations can use this to render, update a HUD, or log. The
/// callback receives each summary together with the current state.
pub trait TickCallback: Send {
    /// Called after a tick completes.
    fn on_tick(&mut self, summary: &TickSummary, state: &SimulationState);

    /// Called after each player action is resolved.
    fn on_action(&mut self, _result: &ActionResult, _state: &SimulationState) {}
}

/// A no-op tick callback for testing.
pub struct NoOpCallback;

impl TickCallback for NoOpCallback {
    fn on_tick(&mut self, _summary: &TickSummary, _state: &SimulationState) {}
}

/// Convert a millisecond interval into a timer period.
fn frame_period(interval_ms: f64) -> Result<Duration, RunnerError> {
    Duration::try_from_secs_f64(interval_ms / 1000.0)
        .ok()
        .filter(|period| !period.is_zero())
        .ok_or(RunnerError::InvalidInterval { interval_ms })
}

/// Run the simulation loop until the player dies or the tick limit is hit.
///
/// Every frame: poll `input`, apply its actions, run one tick with its
/// movement intent, and notify `callback`. All of it happens inside a
/// `session` span carrying the session id.
///
/// # Errors
///
/// Returns [`RunnerError`] if the configured tick interval cannot be used
/// as a timer period.
pub async fn run_simulation(
    state: &mut SimulationState,
    input: &mut dyn InputSource,
    callback: &mut dyn TickCallback,
) -> Result<SimulationResult, RunnerError> {
    let span = info_span!("session", session_id = %state.session_id);
    run_frames(state, input, callback).instrument(span).await
}

async fn run_frames(
    state: &mut SimulationState,
    input: &mut dyn InputSource,
    callback: &mut dyn TickCallback,
) -> Result<SimulationResult, RunnerError> {
    let interval_ms = state.config.world.tick_interval_ms;
    let max_ticks = state.config.world.max_ticks;
    let period = frame_period(interval_ms)?;

    let mut last_summary: Option<TickSummary> = None;
    let mut total_ticks: u64 = 0;

    info!(max_ticks, tick_interval_ms = interval_ms, "Simulation starting");

    let mut frames = tokio::time::interval(period);
    frames.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        // --- Check game over (before frame) ---
        if let Some(cause) = state.game_over {
            return Ok(SimulationResult {
                end_reason: EndReason::GameOver(cause),
                final_summary: last_summary,
                total_ticks,
            });
        }

        frames.tick().await;

        // --- Input and actions ---
        let frame = input.poll(state.clock.tick().saturating_add(1), state);
        for action in frame.actions {
            let result = apply_action(state, action);
            callback.on_action(&result, state);
        }

        // --- Execute tick ---
        let summary = tick::run_tick(state, &frame.intent);
        total_ticks = total_ticks.saturating_add(1);
        callback.on_tick(&summary, state);

        if let Some(cause) = summary.game_over {
            info!(tick = summary.tick, %cause, "Player died");
            return Ok(SimulationResult {
                end_reason: EndReason::GameOver(cause),
                final_summary: Some(summary),
                total_ticks,
            });
        }

        // --- Check tick limit (after tick) ---
        if max_ticks > 0 && summary.tick >= max_ticks {
            info!(tick = summary.tick, max_ticks, "Tick limit reached");
            return Ok(SimulationResult {
                end_reason: EndReason::MaxTicksReached,
                final_summary: Some(summary),
                total_ticks,
            });
        }

        last_summary = Some(summary);
    }
}

/// Log the simulation end sequence.
///
/// Call this after [`run_simulation`] returns.
pub fn log_simulation_end(result: &SimulationResult) {
    info!(
        reason = ?result.end_reason,
        total_ticks = result.total_ticks,
        final_tick = result.final_summary.as_ref().map(|s| s.tick),
        "Simulation ended"
    );

    if let Some(ref summary) = result.final_summary {
        let hud = &summary.hud;
        info!(
            tick = summary.tick,
            health = hud.stats.health.current,
            hunger = hud.stats.hunger.current,
            stamina = hud.stats.stamina.current,
            wood = hud.inventory.wood,
            stone = hud.inventory.stone,
            food = hud.inventory.food,
            equipped = %hud.equipped,
            "Final tick summary"
        );
    } else {
        warn!("Simulation ended with no ticks executed");
    }
}
