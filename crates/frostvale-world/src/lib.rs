//! Resource nodes, creatures, terrain, and building blueprints for the
//! Frostvale simulation.
//!
//! This crate models everything in the world that is not the player: the
//! gatherable nodes, the creature population and its behaviour, the static
//! water features, and the building cost table.
//!
//! # Modules
//!
//! - [`behavior`] -- Per-tick chase, strike, and wander state machine
//! - [`config`] -- Tunables for generation and behaviour
//! - [`creature`] -- Creature templates, population, and combat hits
//! - [`error`] -- Error types for world generation ([`WorldError`])
//! - [`resource`] -- Node templates and the [`ResourceField`]
//! - [`starting_world`] -- Seeded procedural starting map
//! - [`structure`] -- Building blueprints (cost and passive effect)
//! - [`terrain`] -- Lake and river geometry for fishing

pub mod behavior;
pub mod config;
pub mod creature;
pub mod error;
pub mod resource;
pub mod starting_world;
pub mod structure;
pub mod terrain;

// Re-export primary types at crate root.
pub use behavior::{Strike, update_creatures};
pub use config::{BehaviorConfig, GenerationConfig};
pub use creature::{CreaturePopulation, HitOutcome, kill_reward};
pub use error::WorldError;
pub use resource::{GatherOutcome, ResourceField};
pub use starting_world::{GeneratedWorld, create_starting_world};
pub use structure::{BuildingBlueprint, blueprint};
pub use terrain::near_water;
