//! Survival mechanics applied to the player each tick.
//!
//! Per tick:
//!
//! - Hunger falls by `hunger_decay`
//! - At zero hunger, health falls by `starvation_damage`
//! - Below the auto-eat threshold one food unit is eaten if carried
//! - Every stat is clamped into `[0, max]`
//! - Zero health ends the session by starvation
//!
//! Combat damage is applied separately by the tick cycle; this module
//! only owns the decay that happens whether or not anything attacks.

use frostvale_types::{GameOverCause, Inventory, ResourceKind, Stats};
use tracing::debug;

use crate::config::VitalsConfig;
use crate::inventory;

/// Result of applying one tick of vital mechanics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct VitalTickResult {
    /// Whether a food unit was eaten automatically.
    pub ate: bool,
    /// Set if health reached zero this tick.
    pub death: Option<GameOverCause>,
}

/// Fresh stats filled to the configured maxima.
pub const fn starting_stats(config: &VitalsConfig) -> Stats {
    Stats::full(config.max_health, config.max_hunger, config.max_stamina)
}

/// Apply one tick of hunger decay, starvation, and auto-eating.
///
/// # Order of operations
///
/// 1. Decay hunger
/// 2. Apply starvation damage if hunger hit zero
/// 3. Clamp all stats
/// 4. Auto-eat if hungry and food is carried
/// 5. Check death
pub fn apply_vital_tick(
    stats: &mut Stats,
    inventory: &mut Inventory,
    config: &VitalsConfig,
) -> VitalTickResult {
    // 1. Decay
    stats.hunger.current -= config.hunger_decay;

    // 2. Starvation
    if stats.hunger.current <= 0.0 {
        stats.hunger.current = 0.0;
        stats.health.current -= config.starvation_damage;
    }

    // 3. Clamp
    stats.clamp_all();

    // 4. Auto-eat
    let ate = stats.hunger.current < config.auto_eat_threshold
        && inventory::take_one(inventory, ResourceKind::Food);
    if ate {
        stats.hunger.current = (stats.hunger.current + config.food_restore).min(stats.hunger.max);
        debug!(
            hunger = stats.hunger.current,
            food_left = inventory.food,
            "Ate one food"
        );
    }

    // 5. Death
    let death = stats
        .health
        .is_depleted()
        .then_some(GameOverCause::Starvation);

    VitalTickResult { ate, death }
}

/// Subtract combat damage from health, clamped at zero.
///
/// Returns `true` if the hit was fatal.
pub fn apply_damage(stats: &mut Stats, damage: f64) -> bool {
    stats.health.current -= damage;
    stats.health.clamp();
    stats.health.is_depleted()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn hunger_decays_each_tick() {
        let config = VitalsConfig::default();
        let mut stats = starting_stats(&config);
        let mut inv = Inventory::default();
        let result = apply_vital_tick(&mut stats, &mut inv, &config);
        assert!(approx(stats.hunger.current, 99.98));
        assert!(approx(stats.health.current, 100.0));
        assert_eq!(result, VitalTickResult::default());
    }

    #[test]
    fn starvation_damages_health_and_floors_hunger() {
        let config = VitalsConfig::default();
        let mut stats = starting_stats(&config);
        stats.hunger.current = 0.01;
        let mut inv = Inventory::default();
        apply_vital_tick(&mut stats, &mut inv, &config);
        assert!(approx(stats.hunger.current, 0.0));
        assert!(approx(stats.health.current, 99.9));
    }

    #[test]
    fn auto_eat_restores_hunger_and_consumes_food() {
        let config = VitalsConfig::default();
        let mut stats = starting_stats(&config);
        stats.hunger.current = 49.0;
        let mut inv = Inventory {
            food: 2,
            ..Inventory::default()
        };
        let result = apply_vital_tick(&mut stats, &mut inv, &config);
        assert!(result.ate);
        assert_eq!(inv.food, 1);
        assert!(approx(stats.hunger.current, 78.98));
    }

    #[test]
    fn auto_eat_caps_at_max() {
        let config = VitalsConfig {
            auto_eat_threshold: 95.0,
            ..VitalsConfig::default()
        };
        let mut stats = starting_stats(&config);
        stats.hunger.current = 90.0;
        let mut inv = Inventory {
            food: 1,
            ..Inventory::default()
        };
        apply_vital_tick(&mut stats, &mut inv, &config);
        assert!(approx(stats.hunger.current, 100.0));
    }

    #[test]
    fn no_food_means_no_eating() {
        let config = VitalsConfig::default();
        let mut stats = starting_stats(&config);
        stats.hunger.current = 10.0;
        let mut inv = Inventory::default();
        let result = apply_vital_tick(&mut stats, &mut inv, &config);
        assert!(!result.ate);
        assert!(approx(stats.hunger.current, 9.98));
    }

    #[test]
    fn starving_to_death_reports_starvation() {
        let config = VitalsConfig::default();
        let mut stats = starting_stats(&config);
        stats.hunger.current = 0.0;
        stats.health.current = 0.05;
        let mut inv = Inventory::default();
        let result = apply_vital_tick(&mut stats, &mut inv, &config);
        assert_eq!(result.death, Some(GameOverCause::Starvation));
        assert!(approx(stats.health.current, 0.0));
    }

    #[test]
    fn stats_stay_in_range_over_many_ticks() {
        let config = VitalsConfig::default();
        let mut stats = starting_stats(&config);
        stats.stamina.current = 140.0;
        let mut inv = Inventory {
            food: 3,
            ..Inventory::default()
        };
        for _ in 0..20_000 {
            apply_vital_tick(&mut stats, &mut inv, &config);
            for stat in [stats.health, stats.hunger, stats.stamina] {
                assert!(stat.current >= 0.0 && stat.current <= stat.max);
            }
        }
        assert_eq!(inv.food, 0);
    }

    #[test]
    fn damage_clamps_and_reports_fatal() {
        let mut stats = Stats::default();
        assert!(!apply_damage(&mut stats, 15.0));
        assert!(approx(stats.health.current, 85.0));
        assert!(apply_damage(&mut stats, 200.0));
        assert!(approx(stats.health.current, 0.0));
    }
}
