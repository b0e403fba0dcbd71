//! Procedural starting world.
//!
//! Scatters trees, rocks, berry bushes, and ore deposits across the map
//! with a minimum spacing, then drops trolls and deer around the player
//! spawn, keeping them clear of the spawn point and of every other entity.
//! All randomness comes from the caller's RNG, so a seeded RNG reproduces
//! the same map.

use frostvale_types::{CreatureKind, IdSequence, NodeKind, SimEvent, Vec2};
use rand::Rng;
use tracing::{debug, info};

use crate::config::GenerationConfig;
use crate::creature::{CreaturePopulation, spawn_creature};
use crate::error::WorldError;
use crate::resource::{ResourceField, node_template, spawn_node};

/// A freshly generated world.
#[derive(Debug, Clone)]
pub struct GeneratedWorld {
    /// Every resource node.
    pub resources: ResourceField,
    /// Every creature.
    pub creatures: CreaturePopulation,
    /// Spawn events, nodes first, in creation order.
    pub events: Vec<SimEvent>,
}

/// Constraints for one placement.
struct Placement<'a> {
    what: &'a str,
    half_span: f64,
    separation: f64,
    clearance: Option<(Vec2, f64)>,
}

/// Generate the starting world around `player_spawn`.
///
/// Fails with [`WorldError::PlacementExhausted`] if some entity finds no
/// legal spot within `config.max_attempts` tries.
pub fn create_starting_world(
    config: &GenerationConfig,
    player_spawn: Vec2,
    ids: &mut IdSequence,
    rng: &mut impl Rng,
) -> Result<GeneratedWorld, WorldError> {
    if !(config.world_extent > 0.0 && config.world_extent.is_finite()) {
        return Err(WorldError::InvalidConfig {
            reason: format!("world extent must be positive, got {}", config.world_extent),
        });
    }

    let mut resources = ResourceField::new();
    let mut creatures = CreaturePopulation::new();
    let mut events = Vec::new();
    let mut occupied: Vec<Vec2> = Vec::new();

    let node_plan = [
        (NodeKind::Tree, config.trees),
        (NodeKind::Rock, config.rocks),
        (NodeKind::BerryBush, config.berry_bushes),
        (NodeKind::OreDeposit, config.ore_deposits),
    ];
    for (kind, count) in node_plan {
        let name = kind.to_string();
        let rule = Placement {
            what: &name,
            half_span: config.world_extent * node_template(kind).spread / 2.0,
            separation: config.node_separation,
            clearance: None,
        };
        for _ in 0..count {
            let position = find_spot(&rule, &occupied, config.max_attempts, rng)?;
            let id = ids.node();
            resources.insert(spawn_node(id, kind, position));
            occupied.push(position);
            events.push(SimEvent::NodeSpawned { id, kind, position });
        }
        debug!(%kind, count, "Nodes placed");
    }

    let creature_plan = [
        (CreatureKind::Troll, config.trolls),
        (CreatureKind::Deer, config.deer),
    ];
    for (kind, count) in creature_plan {
        let name = kind.to_string();
        let rule = Placement {
            what: &name,
            half_span: config.world_extent * config.creature_spread / 2.0,
            separation: config.creature_separation,
            clearance: Some((player_spawn, config.player_clearance)),
        };
        for _ in 0..count {
            let position = find_spot(&rule, &occupied, config.max_attempts, rng)?;
            let heading = rng.random_range(0.0..core::f64::consts::TAU);
            let id = ids.creature();
            creatures.insert(spawn_creature(id, kind, position, heading));
            occupied.push(position);
            events.push(SimEvent::CreatureSpawned { id, kind, position });
        }
        debug!(%kind, count, "Creatures placed");
    }

    info!(
        nodes = resources.len(),
        creatures = creatures.len(),
        "Starting world generated"
    );

    Ok(GeneratedWorld {
        resources,
        creatures,
        events,
    })
}

/// Draw candidate spots until one satisfies `rule`.
fn find_spot(
    rule: &Placement<'_>,
    occupied: &[Vec2],
    max_attempts: u32,
    rng: &mut impl Rng,
) -> Result<Vec2, WorldError> {
    if rule.half_span > 0.0 {
        for _ in 0..max_attempts {
            let candidate = Vec2::new(
                rng.random_range(-rule.half_span..rule.half_span),
                rng.random_range(-rule.half_span..rule.half_span),
            );
            let clear_of_spawn = rule
                .clearance
                .is_none_or(|(point, radius)| candidate.distance(point) >= radius);
            let spaced = occupied
                .iter()
                .all(|other| candidate.distance(*other) >= rule.separation);
            if clear_of_spawn && spaced {
                return Ok(candidate);
            }
        }
    }
    Err(WorldError::PlacementExhausted {
        what: rule.what.to_string(),
        attempts: max_attempts,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    use super::*;

    fn generate(seed: u64) -> Result<GeneratedWorld, WorldError> {
        let mut ids = IdSequence::new();
        let mut rng = SmallRng::seed_from_u64(seed);
        create_starting_world(&GenerationConfig::default(), Vec2::ZERO, &mut ids, &mut rng)
    }

    #[test]
    fn stock_world_has_expected_counts() {
        let world = generate(42).unwrap();
        assert_eq!(world.resources.len(), 100);
        assert_eq!(world.creatures.len(), 14);
        assert_eq!(world.events.len(), 114);
        let trees = world
            .resources
            .iter()
            .filter(|n| n.kind == NodeKind::Tree)
            .count();
        assert_eq!(trees, 40);
        let deer = world
            .creatures
            .iter()
            .filter(|c| c.kind == CreatureKind::Deer)
            .count();
        assert_eq!(deer, 6);
    }

    #[test]
    fn nodes_respect_separation() {
        let world = generate(7).unwrap();
        let nodes: Vec<Vec2> = world.resources.iter().map(|n| n.position).collect();
        for (i, a) in nodes.iter().enumerate() {
            for b in nodes.iter().skip(i + 1) {
                assert!(a.distance(*b) >= 8.0);
            }
        }
    }

    #[test]
    fn creatures_keep_clear_of_spawn_and_entities() {
        let world = generate(99).unwrap();
        for creature in world.creatures.iter() {
            assert!(creature.position.distance(Vec2::ZERO) >= 20.0);
            assert!(creature.position.within(45.0 + 1e-9));
            for node in world.resources.iter() {
                assert!(creature.position.distance(node.position) >= 10.0);
            }
        }
    }

    #[test]
    fn same_seed_same_world() {
        let a = generate(5).map(|w| w.events);
        let b = generate(5).map(|w| w.events);
        assert!(a.is_ok());
        assert_eq!(a, b);
    }

    #[test]
    fn different_seed_different_world() {
        let a = generate(5).map(|w| w.events);
        let b = generate(6).map(|w| w.events);
        assert!(a.is_ok() && b.is_ok());
        assert_ne!(a, b);
    }

    #[test]
    fn crowded_world_gives_up() {
        let config = GenerationConfig {
            world_extent: 20.0,
            trees: 50,
            max_attempts: 100,
            ..GenerationConfig::default()
        };
        let mut ids = IdSequence::new();
        let mut rng = SmallRng::seed_from_u64(1);
        let result = create_starting_world(&config, Vec2::ZERO, &mut ids, &mut rng);
        assert_eq!(
            result.err(),
            Some(WorldError::PlacementExhausted {
                what: String::from("tree"),
                attempts: 100,
            })
        );
    }

    #[test]
    fn zero_extent_is_rejected() {
        let config = GenerationConfig {
            world_extent: 0.0,
            ..GenerationConfig::default()
        };
        let mut ids = IdSequence::new();
        let mut rng = SmallRng::seed_from_u64(1);
        let result = create_starting_world(&config, Vec2::ZERO, &mut ids, &mut rng);
        assert!(matches!(result, Err(WorldError::InvalidConfig { .. })));
    }
}
