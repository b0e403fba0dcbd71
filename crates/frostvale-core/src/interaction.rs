//! Player interactions with the world: gather, attack, and tool use.
//!
//! Each resolver finds the nearest eligible target, applies the equipped
//! tool's stats to it, credits any yield to the player, and describes what
//! happened as a [`Resolution`]. A missing target is not an error; it
//! resolves to [`ActionOutcome::NoEffect`].
//!
//! Range checks are strict (`distance < radius`). Equal distances resolve
//! to the lowest entity id.

use frostvale_survivor::inventory;
use frostvale_survivor::tool_stats;
use frostvale_types::{ActionOutcome, Player, ResourceKind, SimEvent, ToastTone, ToolKind};
use frostvale_world::{CreaturePopulation, GatherOutcome, HitOutcome, ResourceField, near_water};
use rand::Rng;
use tracing::{debug, info};

use crate::config::InteractionConfig;

/// Food units landed by a successful cast.
const FISH_YIELD: u32 = 1;

/// How an interaction was resolved and what it emitted.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution {
    /// Applied, no effect, or rejected.
    pub outcome: ActionOutcome,
    /// Events describing the change.
    pub events: Vec<SimEvent>,
}

impl Resolution {
    /// State changed.
    pub const fn applied(events: Vec<SimEvent>) -> Self {
        Self {
            outcome: ActionOutcome::Applied,
            events,
        }
    }

    /// Nothing to act on.
    pub const fn no_effect() -> Self {
        Self {
            outcome: ActionOutcome::NoEffect,
            events: Vec::new(),
        }
    }
}

/// Harvest the nearest node within `gather_radius` with the equipped tool.
pub fn gather(
    player: &mut Player,
    resources: &mut ResourceField,
    config: &InteractionConfig,
) -> Resolution {
    let power = tool_stats(player.tools.equipped()).gather_speed;
    let Some(outcome) = resources.gather_nearest(player.position, config.gather_radius, power)
    else {
        debug!("Nothing in reach to gather");
        return Resolution::no_effect();
    };

    let event = match outcome {
        GatherOutcome::Damaged { id, remaining } => SimEvent::NodeDamaged {
            id,
            health: remaining,
        },
        GatherOutcome::Depleted {
            id,
            resource,
            amount,
        } => {
            inventory::credit(&mut player.inventory, resource, amount);
            SimEvent::NodeDepleted {
                id,
                resource,
                amount,
            }
        }
    };
    Resolution::applied(vec![event])
}

/// Hit the nearest creature within `attack_radius` with the equipped tool.
pub fn attack(
    player: &mut Player,
    creatures: &mut CreaturePopulation,
    config: &InteractionConfig,
) -> Resolution {
    let damage = tool_stats(player.tools.equipped()).damage;
    strike_nearest(player, creatures, config.attack_radius, damage)
}

/// Trigger the equipped tool's special ability.
///
/// The bow shoots the nearest creature within its range. The fishing rod
/// casts when the player stands near water and lands a fish with
/// `fishing_chance`. Every other tool only logs the use.
pub fn use_tool(
    player: &mut Player,
    creatures: &mut CreaturePopulation,
    config: &InteractionConfig,
    rng: &mut impl Rng,
) -> Resolution {
    let tool = player.tools.equipped();
    info!(%tool, "Using tool");
    let stats = tool_stats(tool);

    match tool {
        ToolKind::Bow => match stats.range {
            Some(range) => strike_nearest(player, creatures, range, stats.damage),
            None => Resolution::no_effect(),
        },
        ToolKind::FishingRod => cast(player, config, rng),
        _ => Resolution::no_effect(),
    }
}

fn strike_nearest(
    player: &mut Player,
    creatures: &mut CreaturePopulation,
    radius: f64,
    damage: f64,
) -> Resolution {
    let Some(outcome) = creatures.hit_nearest(player.position, radius, damage) else {
        debug!(radius, "No creature in reach");
        return Resolution::no_effect();
    };

    let event = match outcome {
        HitOutcome::Wounded { id, remaining } => SimEvent::CreatureDamaged {
            id,
            health: remaining,
        },
        HitOutcome::Slain { id, kind, reward } => {
            inventory::credit_all(&mut player.inventory, &reward);
            info!(creature = %id, %kind, "Creature slain");
            SimEvent::CreatureSlain { id, kind, reward }
        }
    };
    Resolution::applied(vec![event])
}

fn cast(player: &mut Player, config: &InteractionConfig, rng: &mut impl Rng) -> Resolution {
    if !near_water(player.position, config.fishing_radius) {
        return Resolution {
            outcome: ActionOutcome::NoEffect,
            events: vec![SimEvent::toast("No water nearby", ToastTone::Info)],
        };
    }

    if rng.random::<f64>() < config.fishing_chance {
        inventory::credit(&mut player.inventory, ResourceKind::Food, FISH_YIELD);
        debug!(food = player.inventory.food, "Fish caught");
        Resolution::applied(vec![
            SimEvent::FishCaught { amount: FISH_YIELD },
            SimEvent::toast("Caught a fish!", ToastTone::Success),
        ])
    } else {
        Resolution {
            outcome: ActionOutcome::NoEffect,
            events: vec![SimEvent::toast("Nothing is biting", ToastTone::Info)],
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
