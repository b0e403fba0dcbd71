//! Player-side rules for the Frostvale simulation.
//!
//! Everything here mutates the [`Player`](frostvale_types::Player) record
//! and nothing else: no world lookups, no I/O. The tick cycle in
//! `frostvale-core` calls into these functions with borrows of the parts it
//! owns.
//!
//! # Modules
//!
//! - [`config`] -- Tunables for vitals and movement ([`VitalsConfig`], [`MovementConfig`])
//! - [`crafting`] -- Tool stats, recipes, crafting, and tool selection
//! - [`error`] -- Error types ([`SurvivorError`])
//! - [`inventory`] -- Atomic spend and saturating credit against the inventory
//! - [`movement`] -- Intent-driven movement and stamina
//! - [`vitals`] -- Per-tick hunger, starvation, and auto-eating

pub mod config;
pub mod crafting;
pub mod error;
pub mod inventory;
pub mod movement;
pub mod vitals;

// Re-export primary types at crate root for convenience.
pub use config::{MovementConfig, VitalsConfig};
pub use crafting::{CraftRecipe, ToolStats, craft, recipe_for, select_slot, select_tool, tool_stats};
pub use error::SurvivorError;
pub use movement::{MoveOutcome, apply_movement};
pub use vitals::{VitalTickResult, apply_damage, apply_vital_tick, starting_stats};
