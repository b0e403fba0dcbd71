//! Configuration loading and typed config structures for the Frostvale
//! simulation.
//!
//! The canonical configuration lives in `frostvale-config.yaml` at the
//! project root. This module defines strongly-typed structs that mirror the
//! YAML structure, and provides a loader that reads the file. Every field
//! has a default, so a partial or empty file is valid.
//!
//! The per-crate configs ([`VitalsConfig`], [`MovementConfig`],
//! [`BehaviorConfig`], [`GenerationConfig`]) are plain structs built from
//! this one by the conversion methods on [`SimulationConfig`].

use std::path::Path;

use frostvale_survivor::{MovementConfig, VitalsConfig};
use frostvale_world::{BehaviorConfig, GenerationConfig};
use serde::Deserialize;
use tracing::warn;

/// Environment variable that overrides `world.seed`.
pub const SEED_ENV_VAR: &str = "FROSTVALE_SEED";

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Top-level simulation configuration.
///
/// Mirrors the structure of `frostvale-config.yaml`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SimulationConfig {
    /// World-level settings (name, seed, size, timing).
    #[serde(default)]
    pub world: WorldConfig,

    /// Day/night settings.
    #[serde(default)]
    pub time: TimeConfig,

    /// Hunger, starvation, and stat maxima.
    #[serde(default)]
    pub survival: SurvivalConfig,

    /// Player movement and stamina.
    #[serde(default)]
    pub movement: MovementSettings,

    /// Creature chase, strike, and wander.
    #[serde(default)]
    pub creatures: CreatureConfig,

    /// Gather, attack, and tool reach.
    #[serde(default)]
    pub interaction: InteractionConfig,

    /// Starting-world population.
    #[serde(default)]
    pub generation: GenerationSettings,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl SimulationConfig {
    /// Load configuration from a YAML file at the given path.
    ///
    /// `FROSTVALE_SEED` overrides `world.seed` when set to a valid `u64`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, or
    /// [`ConfigError::Yaml`] if the content is not valid YAML.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let mut config = Self::parse(&contents)?;
        config.world.apply_env_overrides();
        Ok(config)
    }

    /// Parse configuration from a YAML string. No environment overrides
    /// are applied.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yml::from_str(yaml)?)
    }

    /// Survival tunables for the stat system.
    pub const fn vitals(&self) -> VitalsConfig {
        let s = &self.survival;
        VitalsConfig {
            hunger_decay: s.hunger_decay,
            starvation_damage: s.starvation_damage,
            auto_eat_threshold: s.auto_eat_threshold,
            food_restore: s.food_restore,
            max_health: s.max_health,
            max_hunger: s.max_hunger,
            max_stamina: s.max_stamina,
        }
    }

    /// Movement tunables for the player controller.
    pub const fn movement(&self) -> MovementConfig {
        let m = &self.movement;
        MovementConfig {
            base_speed: m.base_speed,
            run_multiplier: m.run_multiplier,
            run_stamina_threshold: m.run_stamina_threshold,
            run_stamina_cost: m.run_stamina_cost,
            stamina_regen: m.stamina_regen,
            world_extent: self.world.extent,
        }
    }

    /// Creature tunables for the AI controller.
    pub const fn behavior(&self) -> BehaviorConfig {
        let c = &self.creatures;
        BehaviorConfig {
            world_extent: self.world.extent,
            chase_radius: c.chase_radius,
            chase_multiplier: c.chase_multiplier,
            attack_radius: c.attack_radius,
            attack_cooldown: c.attack_cooldown_ticks,
            redirect_interval: c.redirect_interval_ticks,
            edge_margin: c.edge_margin,
        }
    }

    /// Population settings for the world generator.
    pub const fn generation(&self) -> GenerationConfig {
        let g = &self.generation;
        GenerationConfig {
            world_extent: self.world.extent,
            trees: g.trees,
            rocks: g.rocks,
            berry_bushes: g.berry_bushes,
            ore_deposits: g.ore_deposits,
            trolls: g.trolls,
            deer: g.deer,
            node_separation: g.node_separation,
            creature_spread: g.creature_spread,
            player_clearance: g.player_clearance,
            creature_separation: g.creature_separation,
            max_attempts: g.max_attempts,
        }
    }
}

/// World-level configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct WorldConfig {
    /// Human-readable session name.
    #[serde(default = "default_world_name")]
    pub name: String,

    /// Random seed for reproducibility.
    #[serde(default = "default_seed")]
    pub seed: u64,

    /// Side length of the square world.
    #[serde(default = "default_extent")]
    pub extent: f64,

    /// Milliseconds per tick, both simulated and real-time.
    #[serde(default = "default_tick_interval_ms")]
    pub tick_interval_ms: f64,

    /// Stop after this many ticks (0 = run until game over).
    #[serde(default)]
    pub max_ticks: u64,
}

impl WorldConfig {
    /// Apply environment overrides.
    ///
    /// - `FROSTVALE_SEED` overrides `seed`
    pub fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var(SEED_ENV_VAR) {
            match val.trim().parse::<u64>() {
                Ok(seed) => self.seed = seed,
                Err(_) => warn!(value = val, "Ignoring unparseable {SEED_ENV_VAR}"),
            }
        }
    }
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            name: default_world_name(),
            seed: default_seed(),
            extent: default_extent(),
            tick_interval_ms: default_tick_interval_ms(),
            max_ticks: 0,
        }
    }
}

/// Day/night configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TimeConfig {
    /// Length of one full day/night cycle in simulated milliseconds.
    #[serde(default = "default_day_length_ms")]
    pub day_length_ms: f64,
}

impl Default for TimeConfig {
    fn default() -> Self {
        Self {
            day_length_ms: default_day_length_ms(),
        }
    }
}

/// Survival configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SurvivalConfig {
    /// Hunger lost per tick.
    #[serde(default = "default_hunger_decay")]
    pub hunger_decay: f64,

    /// Health lost per tick at zero hunger.
    #[serde(default = "default_starvation_damage")]
    pub starvation_damage: f64,

    /// Hunger below which food is eaten automatically.
    #[serde(default = "default_auto_eat_threshold")]
    pub auto_eat_threshold: f64,

    /// Hunger restored per food unit.
    #[serde(default = "default_food_restore")]
    pub food_restore: f64,

    /// Maximum health.
    #[serde(default = "default_stat_max")]
    pub max_health: f64,

    /// Maximum hunger.
    #[serde(default = "default_stat_max")]
    pub max_hunger: f64,

    /// Maximum stamina.
    #[serde(default = "default_stat_max")]
    pub max_stamina: f64,
}

impl Default for SurvivalConfig {
    fn default() -> Self {
        Self {
            hunger_decay: default_hunger_decay(),
            starvation_damage: default_starvation_damage(),
            auto_eat_threshold: default_auto_eat_threshold(),
            food_restore: default_food_restore(),
            max_health: default_stat_max(),
            max_hunger: default_stat_max(),
            max_stamina: default_stat_max(),
        }
    }
}

/// Movement configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MovementSettings {
    /// Walking distance per tick.
    #[serde(default = "default_base_speed")]
    pub base_speed: f64,

    /// Running speed multiplier.
    #[serde(default = "default_run_multiplier")]
    pub run_multiplier: f64,

    /// Stamina must exceed this to run.
    #[serde(default = "default_run_stamina_threshold")]
    pub run_stamina_threshold: f64,

    /// Stamina spent per running tick.
    #[serde(default = "default_run_stamina_cost")]
    pub run_stamina_cost: f64,

    /// Stamina regained per idle tick.
    #[serde(default = "default_stamina_regen")]
    pub stamina_regen: f64,
}

impl Default for MovementSettings {
    fn default() -> Self {
        Self {
            base_speed: default_base_speed(),
            run_multiplier: default_run_multiplier(),
            run_stamina_threshold: default_run_stamina_threshold(),
            run_stamina_cost: default_run_stamina_cost(),
            stamina_regen: default_stamina_regen(),
        }
    }
}

/// Creature behaviour configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CreatureConfig {
    /// Distance at which creatures start chasing.
    #[serde(default = "default_chase_radius")]
    pub chase_radius: f64,

    /// Chase speed as a multiple of wander speed.
    #[serde(default = "default_chase_multiplier")]
    pub chase_multiplier: f64,

    /// Distance at which creatures strike.
    #[serde(default = "default_creature_attack_radius")]
    pub attack_radius: f64,

    /// Ticks between strikes.
    #[serde(default = "default_attack_cooldown_ticks")]
    pub attack_cooldown_ticks: u32,

    /// Wander ticks before a new heading.
    #[serde(default = "default_redirect_interval_ticks")]
    pub redirect_interval_ticks: u32,

    /// Wanderers stay this far from the world edge.
    #[serde(default = "default_edge_margin")]
    pub edge_margin: f64,
}

impl Default for CreatureConfig {
    fn default() -> Self {
        Self {
            chase_radius: default_chase_radius(),
            chase_multiplier: default_chase_multiplier(),
            attack_radius: default_creature_attack_radius(),
            attack_cooldown_ticks: default_attack_cooldown_ticks(),
            redirect_interval_ticks: default_redirect_interval_ticks(),
            edge_margin: default_edge_margin(),
        }
    }
}

/// Player interaction configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct InteractionConfig {
    /// Nodes closer than this can be gathered.
    #[serde(default = "default_gather_radius")]
    pub gather_radius: f64,

    /// Creatures closer than this can be hit in melee.
    #[serde(default = "default_player_attack_radius")]
    pub attack_radius: f64,

    /// The fishing rod works within this distance of water.
    #[serde(default = "default_fishing_radius")]
    pub fishing_radius: f64,

    /// Chance that a fishing cast lands a fish.
    #[serde(default = "default_fishing_chance")]
    pub fishing_chance: f64,
}

impl Default for InteractionConfig {
    fn default() -> Self {
        Self {
            gather_radius: default_gather_radius(),
            attack_radius: default_player_attack_radius(),
            fishing_radius: default_fishing_radius(),
            fishing_chance: default_fishing_chance(),
        }
    }
}

/// Starting-world population.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GenerationSettings {
    /// Number of trees.
    #[serde(default = "default_trees")]
    pub trees: u32,

    /// Number of rocks.
    #[serde(default = "default_rocks")]
    pub rocks: u32,

    /// Number of berry bushes.
    #[serde(default = "default_berry_bushes")]
    pub berry_bushes: u32,

    /// Number of ore deposits.
    #[serde(default = "default_ore_deposits")]
    pub ore_deposits: u32,

    /// Number of trolls.
    #[serde(default = "default_trolls")]
    pub trolls: u32,

    /// Number of deer.
    #[serde(default = "default_deer")]
    pub deer: u32,

    /// Minimum spacing between nodes.
    #[serde(default = "default_node_separation")]
    pub node_separation: f64,

    /// Fraction of the extent creatures spawn within.
    #[serde(default = "default_creature_spread")]
    pub creature_spread: f64,

    /// Minimum creature distance from the player spawn.
    #[serde(default = "default_player_clearance")]
    pub player_clearance: f64,

    /// Minimum creature distance from other entities.
    #[serde(default = "default_creature_separation")]
    pub creature_separation: f64,

    /// Candidate spots tried per entity.
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            trees: default_trees(),
            rocks: default_rocks(),
            berry_bushes: default_berry_bushes(),
            ore_deposits: default_ore_deposits(),
            trolls: default_trolls(),
            deer: default_deer(),
            node_separation: default_node_separation(),
            creature_spread: default_creature_spread(),
            player_clearance: default_player_clearance(),
            creature_separation: default_creature_separation(),
            max_attempts: default_max_attempts(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error). `RUST_LOG` wins.
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log a progress summary every N ticks (0 disables).
    #[serde(default = "default_summary_interval_ticks")]
    pub summary_interval_ticks: u64,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            summary_interval_ticks: default_summary_interval_ticks(),
        }
    }
}

// ---------------------------------------------------------------------------
// Default value functions
// ---------------------------------------------------------------------------

fn default_world_name() -> String {
    "Frostvale".to_owned()
}

const fn default_seed() -> u64 {
    42
}

const fn default_extent() -> f64 {
    300.0
}

const fn default_tick_interval_ms() -> f64 {
    16.67
}

const fn default_day_length_ms() -> f64 {
    120_000.0
}

const fn default_hunger_decay() -> f64 {
    0.02
}

const fn default_starvation_damage() -> f64 {
    0.1
}

const fn default_auto_eat_threshold() -> f64 {
    50.0
}

const fn default_food_restore() -> f64 {
    30.0
}

const fn default_stat_max() -> f64 {
    100.0
}

const fn default_base_speed() -> f64 {
    0.5
}

const fn default_run_multiplier() -> f64 {
    1.5
}

const fn default_run_stamina_threshold() -> f64 {
    10.0
}

const fn default_run_stamina_cost() -> f64 {
    0.5
}

const fn default_stamina_regen() -> f64 {
    0.3
}

const fn default_chase_radius() -> f64 {
    15.0
}

const fn default_chase_multiplier() -> f64 {
    1.5
}

const fn default_creature_attack_radius() -> f64 {
    3.0
}

const fn default_attack_cooldown_ticks() -> u32 {
    60
}

const fn default_redirect_interval_ticks() -> u32 {
    180
}

const fn default_edge_margin() -> f64 {
    10.0
}

const fn default_gather_radius() -> f64 {
    4.0
}

const fn default_player_attack_radius() -> f64 {
    5.0
}

const fn default_fishing_radius() -> f64 {
    3.0
}

const fn default_fishing_chance() -> f64 {
    0.35
}

const fn default_trees() -> u32 {
    40
}

const fn default_rocks() -> u32 {
    30
}

const fn default_berry_bushes() -> u32 {
    20
}

const fn default_ore_deposits() -> u32 {
    10
}

const fn default_trolls() -> u32 {
    8
}

const fn default_deer() -> u32 {
    6
}

const fn default_node_separation() -> f64 {
    8.0
}

const fn default_creature_spread() -> f64 {
    0.6
}

const fn default_player_clearance() -> f64 {
    20.0
}

const fn default_creature_separation() -> f64 {
    10.0
}

const fn default_max_attempts() -> u32 {
    1000
}

fn default_log_level() -> String {
    "info".to_owned()
}

const fn default_summary_interval_ticks() -> u64 {
    600
}
