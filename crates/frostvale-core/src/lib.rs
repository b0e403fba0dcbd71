//! World clock, tick cycle, and orchestration for the Frostvale simulation.
//!
//! This crate owns the [`SimulationState`] and everything that moves it
//! forward: the fixed-order tick cycle (movement, creatures, survival,
//! clock), the discrete action dispatcher, and the real-time runner.
//!
//! # Modules
//!
//! - [`actions`] -- Player action dispatch and rejection mapping.
//! - [`build`] -- Build mode staging and placed buildings.
//! - [`clock`] -- World clock with day/night phase and light levels.
//! - [`config`] -- Configuration loading from `frostvale-config.yaml` into
//!   strongly-typed structs.
//! - [`hud`] -- HUD snapshot assembly.
//! - [`input`] -- [`InputSource`] trait, [`IdleInput`], and [`ScriptedInput`].
//! - [`interaction`] -- Gather, attack, and tool use against the nearest
//!   target.
//! - [`runner`] -- Async frame loop with tick limits and callbacks.
//! - [`tick`] -- The per-tick update and session setup.
//!
//! [`SimulationState`]: tick::SimulationState
//! [`InputSource`]: input::InputSource
//! [`IdleInput`]: input::IdleInput
//! [`ScriptedInput`]: input::ScriptedInput

pub mod actions;
pub mod build;
pub mod clock;
pub mod config;
pub mod hud;
pub mod input;
pub mod interaction;
pub mod runner;
pub mod tick;

pub use actions::apply_action;
pub use config::{ConfigError, SimulationConfig};
pub use input::{FrameInput, IdleInput, InputSource, ScriptedInput};
pub use runner::{
    EndReason, NoOpCallback, RunnerError, SimulationResult, TickCallback, log_simulation_end,
    run_simulation,
};
pub use tick::{SetupError, SimulationState, TickSummary, run_tick};
