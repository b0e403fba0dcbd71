//! Tunables for world generation and creature behaviour.
//!
//! The core builds these from the YAML config; tests construct them
//! directly. Defaults reproduce the stock map.

/// Settings for the starting-world generator.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationConfig {
    /// Side length of the square world (default: 300).
    pub world_extent: f64,
    /// Number of trees (default: 40).
    pub trees: u32,
    /// Number of rocks (default: 30).
    pub rocks: u32,
    /// Number of berry bushes (default: 20).
    pub berry_bushes: u32,
    /// Number of ore deposits (default: 10).
    pub ore_deposits: u32,
    /// Number of trolls (default: 8).
    pub trolls: u32,
    /// Number of deer (default: 6).
    pub deer: u32,
    /// Minimum distance between any two nodes (default: 8).
    pub node_separation: f64,
    /// Creatures spawn within this fraction of the extent, centred (default: 0.6).
    pub creature_spread: f64,
    /// Minimum creature distance from the player spawn (default: 20).
    pub player_clearance: f64,
    /// Minimum creature distance from any other entity (default: 10).
    pub creature_separation: f64,
    /// Candidate spots tried per entity before giving up (default: 1000).
    pub max_attempts: u32,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            world_extent: 300.0,
            trees: 40,
            rocks: 30,
            berry_bushes: 20,
            ore_deposits: 10,
            trolls: 8,
            deer: 6,
            node_separation: 8.0,
            creature_spread: 0.6,
            player_clearance: 20.0,
            creature_separation: 10.0,
            max_attempts: 1000,
        }
    }
}

/// Settings for the creature state machine.
#[derive(Debug, Clone, PartialEq)]
pub struct BehaviorConfig {
    /// Side length of the square world (default: 300).
    pub world_extent: f64,
    /// Creatures closer than this chase the player (default: 15).
    pub chase_radius: f64,
    /// Chase speed as a multiple of wander speed (default: 1.5).
    pub chase_multiplier: f64,
    /// Creatures closer than this may strike (default: 3).
    pub attack_radius: f64,
    /// Ticks between strikes (default: 60).
    pub attack_cooldown: u32,
    /// Wander ticks before a new heading is drawn (default: 180).
    pub redirect_interval: u32,
    /// Wandering creatures stay this far inside the world edge (default: 10).
    pub edge_margin: f64,
}

impl BehaviorConfig {
    /// Half-extent of the square wandering creatures may occupy.
    pub fn wander_limit(&self) -> f64 {
        self.world_extent / 2.0 - self.edge_margin
    }
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        Self {
            world_extent: 300.0,
            chase_radius: 15.0,
            chase_multiplier: 1.5,
            attack_radius: 3.0,
            attack_cooldown: 60,
            redirect_interval: 180,
            edge_margin: 10.0,
        }
    }
}
