//! Configuration for player vitals and movement.
//!
//! The [`VitalsConfig`] and [`MovementConfig`] structs bundle every tunable
//! so that callers (tick cycle, tests) can override defaults. The core
//! builds them from `frostvale-config.yaml` at session start.

/// Configuration for the per-tick survival decay.
///
/// All rates are applied once per tick.
#[derive(Debug, Clone, PartialEq)]
pub struct VitalsConfig {
    /// Hunger lost per tick (default: 0.02).
    pub hunger_decay: f64,

    /// Health lost per tick while hunger is zero (default: 0.1).
    pub starvation_damage: f64,

    /// Hunger below which one food unit is eaten automatically (default: 50).
    pub auto_eat_threshold: f64,

    /// Hunger restored per food unit, capped at max (default: 30).
    pub food_restore: f64,

    /// Maximum health (default: 100).
    pub max_health: f64,

    /// Maximum hunger (default: 100).
    pub max_hunger: f64,

    /// Maximum stamina (default: 100).
    pub max_stamina: f64,
}

impl Default for VitalsConfig {
    fn default() -> Self {
        Self {
            hunger_decay: 0.02,
            starvation_damage: 0.1,
            auto_eat_threshold: 50.0,
            food_restore: 30.0,
            max_health: 100.0,
            max_hunger: 100.0,
            max_stamina: 100.0,
        }
    }
}

/// Configuration for the player movement integrator.
#[derive(Debug, Clone, PartialEq)]
pub struct MovementConfig {
    /// Distance covered per tick when walking (default: 0.5).
    pub base_speed: f64,

    /// Speed multiplier while running (default: 1.5).
    pub run_multiplier: f64,

    /// Stamina must exceed this to run (default: 10).
    pub run_stamina_threshold: f64,

    /// Stamina spent per running tick (default: 0.5).
    pub run_stamina_cost: f64,

    /// Stamina regained per idle tick (default: 0.3).
    pub stamina_regen: f64,

    /// Side length of the square world; the player stays within half of it
    /// on each axis (default: 300).
    pub world_extent: f64,
}

impl MovementConfig {
    /// Half the world extent: the hard wall on each axis.
    pub fn half_extent(&self) -> f64 {
        self.world_extent / 2.0
    }
}

impl Default for MovementConfig {
    fn default() -> Self {
        Self {
            base_speed: 0.5,
            run_multiplier: 1.5,
            run_stamina_threshold: 10.0,
            run_stamina_cost: 0.5,
            stamina_regen: 0.3,
            world_extent: 300.0,
        }
    }
}
