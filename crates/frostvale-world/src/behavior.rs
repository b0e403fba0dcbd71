//! Per-tick creature state machine.
//!
//! Every creature is in one of two modes, chosen fresh each tick from its
//! distance `d` to the player:
//!
//! - **Chase** (`d < chase_radius`): step toward the player at the chase
//!   speed and face them. Creatures that carry a damage value strike when
//!   `d < attack_radius` and their cooldown has run out.
//! - **Wander**: keep walking along the current heading, drawing a new one
//!   every `redirect_interval` ticks and turning back at the edge margin.
//!
//! The attack cooldown counts down every tick in either mode. Strikes are
//! returned to the caller; this module never touches the player.

use core::f64::consts::{PI, TAU};

use frostvale_types::{Creature, CreatureId, Vec2};
use rand::Rng;

use crate::config::BehaviorConfig;
use crate::creature::CreaturePopulation;

/// A hit landed on the player this tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Strike {
    /// The attacker.
    pub by: CreatureId,
    /// Damage dealt.
    pub damage: f64,
}

/// Advance every creature by one tick, in ascending id order.
///
/// Returns the strikes landed on the player, in the order they happened.
pub fn update_creatures(
    population: &mut CreaturePopulation,
    player: Vec2,
    config: &BehaviorConfig,
    rng: &mut impl Rng,
) -> Vec<Strike> {
    population
        .iter_mut()
        .filter_map(|creature| step_creature(creature, player, config, rng))
        .collect()
}

/// Advance one creature by one tick.
pub fn step_creature(
    creature: &mut Creature,
    player: Vec2,
    config: &BehaviorConfig,
    rng: &mut impl Rng,
) -> Option<Strike> {
    let distance = creature.position.distance(player);

    let strike = if distance < config.chase_radius {
        chase(creature, player, distance, config)
    } else {
        wander(creature, config, rng);
        None
    };

    creature.attack_cooldown = creature.attack_cooldown.saturating_sub(1);
    strike
}

fn chase(
    creature: &mut Creature,
    player: Vec2,
    distance: f64,
    config: &BehaviorConfig,
) -> Option<Strike> {
    let toward = player - creature.position;
    let step = toward
        .normalized()
        .scaled(creature.speed * config.chase_multiplier);
    creature.position = creature.position + step;
    if toward.length() > 0.0 {
        creature.facing = toward.x.atan2(toward.z);
    }

    // Range is measured before the step, matching what the player saw.
    if distance < config.attack_radius
        && creature.attack_cooldown == 0
        && let Some(damage) = creature.damage
    {
        creature.attack_cooldown = config.attack_cooldown;
        return Some(Strike {
            by: creature.id,
            damage,
        });
    }
    None
}

fn wander(creature: &mut Creature, config: &BehaviorConfig, rng: &mut impl Rng) {
    creature.redirect_timer = creature.redirect_timer.saturating_add(1);
    if creature.redirect_timer > config.redirect_interval {
        creature.heading = rng.random_range(0.0..TAU);
        creature.redirect_timer = 0;
    }

    let step = Vec2::new(creature.heading.cos(), creature.heading.sin()).scaled(creature.speed);
    let candidate = creature.position + step;
    if candidate.within(config.wander_limit()) {
        creature.position = candidate;
    } else {
        creature.heading += PI;
    }
    creature.facing = creature.heading;
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use frostvale_types::CreatureKind;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    use super::*;
    use crate::creature::spawn_creature;

    fn troll_at(x: f64, z: f64) -> Creature {
        spawn_creature(CreatureId::new(1), CreatureKind::Troll, Vec2::new(x, z), 0.0)
    }

    #[test]
    fn troll_in_range_strikes_once_per_cooldown() {
        let config = BehaviorConfig::default();
        let mut rng = SmallRng::seed_from_u64(42);
        let mut troll = troll_at(2.0, 0.0);
        let mut strikes = 0;
        for _ in 0..60 {
            // Pin the troll in place so range never changes.
            troll.position = Vec2::new(2.0, 0.0);
            if step_creature(&mut troll, Vec2::ZERO, &config, &mut rng).is_some() {
                strikes += 1;
            }
        }
        assert_eq!(strikes, 1);
        troll.position = Vec2::new(2.0, 0.0);
        let next = step_creature(&mut troll, Vec2::ZERO, &config, &mut rng);
        assert_eq!(
            next,
            Some(Strike {
                by: CreatureId::new(1),
                damage: 15.0
            })
        );
    }

    #[test]
    fn chasing_creature_closes_distance() {
        let config = BehaviorConfig::default();
        let mut rng = SmallRng::seed_from_u64(1);
        let mut troll = troll_at(10.0, 0.0);
        step_creature(&mut troll, Vec2::ZERO, &config, &mut rng);
        assert!((troll.position.x - (10.0 - 0.045)).abs() < 1e-9);
        assert!((troll.facing - (-core::f64::consts::FRAC_PI_2)).abs() < 1e-9);
    }

    #[test]
    fn deer_chases_but_never_strikes() {
        let config = BehaviorConfig::default();
        let mut rng = SmallRng::seed_from_u64(3);
        let mut deer =
            spawn_creature(CreatureId::new(2), CreatureKind::Deer, Vec2::new(1.0, 0.0), 0.0);
        for _ in 0..200 {
            assert_eq!(step_creature(&mut deer, Vec2::ZERO, &config, &mut rng), None);
        }
    }

    #[test]
    fn wanderer_follows_heading() {
        let config = BehaviorConfig::default();
        let mut rng = SmallRng::seed_from_u64(5);
        let mut troll = troll_at(50.0, 50.0);
        step_creature(&mut troll, Vec2::ZERO, &config, &mut rng);
        assert!((troll.position.x - 50.03).abs() < 1e-9);
        assert!((troll.position.z - 50.0).abs() < 1e-9);
        assert_eq!(troll.redirect_timer, 1);
    }

    #[test]
    fn wanderer_redirects_after_interval() {
        let config = BehaviorConfig::default();
        let mut rng = SmallRng::seed_from_u64(9);
        let mut troll = troll_at(50.0, 50.0);
        troll.redirect_timer = config.redirect_interval;
        step_creature(&mut troll, Vec2::ZERO, &config, &mut rng);
        assert_eq!(troll.redirect_timer, 0);
        assert!((0.0..TAU).contains(&troll.heading));
    }

    #[test]
    fn wanderer_turns_back_at_edge() {
        let config = BehaviorConfig::default();
        let mut rng = SmallRng::seed_from_u64(11);
        let mut troll = troll_at(139.99, 0.0);
        step_creature(&mut troll, Vec2::ZERO, &config, &mut rng);
        assert!((troll.position.x - 139.99).abs() < 1e-9);
        assert!((troll.heading - PI).abs() < 1e-9);
        assert!((troll.facing - PI).abs() < 1e-9);
    }

    #[test]
    fn wanderers_stay_inside_margin() {
        let config = BehaviorConfig::default();
        let mut rng = SmallRng::seed_from_u64(77);
        let mut pop = CreaturePopulation::new();
        for (id, offset) in (1..).zip([20.0, 40.0, 60.0, 80.0, 100.0, 120.0]) {
            pop.insert(spawn_creature(
                CreatureId::new(id),
                CreatureKind::Troll,
                Vec2::new(offset, -offset),
                offset / 20.0,
            ));
        }
        for _ in 0..5_000 {
            update_creatures(&mut pop, Vec2::ZERO, &config, &mut rng);
            assert!(pop.iter().all(|c| c.position.within(config.wander_limit())));
        }
    }

    #[test]
    fn cooldown_counts_down_while_wandering() {
        let config = BehaviorConfig::default();
        let mut rng = SmallRng::seed_from_u64(13);
        let mut troll = troll_at(80.0, 0.0);
        troll.attack_cooldown = 2;
        step_creature(&mut troll, Vec2::ZERO, &config, &mut rng);
        step_creature(&mut troll, Vec2::ZERO, &config, &mut rng);
        step_creature(&mut troll, Vec2::ZERO, &config, &mut rng);
        assert_eq!(troll.attack_cooldown, 0);
    }
}
