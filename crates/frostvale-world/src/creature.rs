//! The creature population: spawn templates, lookups, and combat hits.
//!
//! Movement and striking live in [`behavior`](crate::behavior); this module
//! only owns the records and what happens when the player hits one.

use std::collections::BTreeMap;

use frostvale_types::{
    Creature, CreatureBehavior, CreatureId, CreatureKind, EntityRef, Inventory, Pose, Vec2,
};
use tracing::debug;

// ---------------------------------------------------------------------------
// Templates
// ---------------------------------------------------------------------------

/// Spawn parameters shared by every creature of a kind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CreatureTemplate {
    /// Hostile or passive.
    pub behavior: CreatureBehavior,
    /// Starting health.
    pub health: f64,
    /// Wander speed per tick.
    pub speed: f64,
    /// Strike damage, `None` for animals that never attack.
    pub damage: Option<f64>,
}

/// Return the spawn template for `kind`.
pub const fn creature_template(kind: CreatureKind) -> CreatureTemplate {
    match kind {
        CreatureKind::Troll => CreatureTemplate {
            behavior: CreatureBehavior::Hostile,
            health: 20.0,
            speed: 0.03,
            damage: Some(15.0),
        },
        CreatureKind::Deer => CreatureTemplate {
            behavior: CreatureBehavior::Passive,
            health: 10.0,
            speed: 0.04,
            damage: None,
        },
    }
}

/// Build a fresh creature of `kind` at `position` facing `heading`.
pub const fn spawn_creature(
    id: CreatureId,
    kind: CreatureKind,
    position: Vec2,
    heading: f64,
) -> Creature {
    let template = creature_template(kind);
    Creature {
        id,
        kind,
        behavior: template.behavior,
        position,
        health: template.health,
        max_health: template.health,
        speed: template.speed,
        heading,
        facing: heading,
        redirect_timer: 0,
        attack_cooldown: 0,
        damage: template.damage,
    }
}

/// Resources dropped when a creature of the given behaviour dies.
///
/// Hostiles drop one food; passive animals drop two food and one leather.
pub const fn kill_reward(behavior: CreatureBehavior) -> Inventory {
    match behavior {
        CreatureBehavior::Hostile => Inventory {
            wood: 0,
            stone: 0,
            food: 1,
            iron: 0,
            leather: 0,
        },
        CreatureBehavior::Passive => Inventory {
            wood: 0,
            stone: 0,
            food: 2,
            iron: 0,
            leather: 1,
        },
    }
}

// ---------------------------------------------------------------------------
// Population
// ---------------------------------------------------------------------------

/// What a player hit did to a creature.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HitOutcome {
    /// The creature survived.
    Wounded {
        /// The creature hit.
        id: CreatureId,
        /// Health left.
        remaining: f64,
    },
    /// The creature died and was removed.
    Slain {
        /// The creature removed.
        id: CreatureId,
        /// Its species.
        kind: CreatureKind,
        /// Resources to credit.
        reward: Inventory,
    },
}

/// All live creatures.
#[derive(Debug, Clone, Default)]
pub struct CreaturePopulation {
    creatures: BTreeMap<CreatureId, Creature>,
}

impl CreaturePopulation {
    /// An empty population.
    pub const fn new() -> Self {
        Self {
            creatures: BTreeMap::new(),
        }
    }

    /// Add a creature, replacing any creature with the same id.
    pub fn insert(&mut self, creature: Creature) {
        self.creatures.insert(creature.id, creature);
    }

    /// Look up a creature.
    pub fn get(&self, id: CreatureId) -> Option<&Creature> {
        self.creatures.get(&id)
    }

    /// Number of live creatures.
    pub fn len(&self) -> usize {
        self.creatures.len()
    }

    /// Whether every creature is dead.
    pub fn is_empty(&self) -> bool {
        self.creatures.is_empty()
    }

    /// Live creatures in ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = &Creature> {
        self.creatures.values()
    }

    /// Mutable access in ascending id order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Creature> {
        self.creatures.values_mut()
    }

    /// The closest creature strictly within `radius` of `position`.
    ///
    /// Equal distances resolve to the lowest id.
    pub fn nearest_within(&self, position: Vec2, radius: f64) -> Option<&Creature> {
        let mut best: Option<(&Creature, f64)> = None;
        for creature in self.creatures.values() {
            let distance = creature.position.distance(position);
            if distance >= radius {
                continue;
            }
            match best {
                Some((_, best_distance)) if distance >= best_distance => {}
                _ => best = Some((creature, distance)),
            }
        }
        best.map(|(creature, _)| creature)
    }

    /// Hit creature `id` for `damage`. Removes it on death.
    pub fn hit(&mut self, id: CreatureId, damage: f64) -> Option<HitOutcome> {
        let creature = self.creatures.get_mut(&id)?;
        creature.health -= damage;
        if creature.health > 0.0 {
            debug!(creature = %id, remaining = creature.health, "Creature wounded");
            return Some(HitOutcome::Wounded {
                id,
                remaining: creature.health,
            });
        }
        let creature = self.creatures.remove(&id)?;
        debug!(creature = %id, kind = %creature.kind, "Creature slain");
        Some(HitOutcome::Slain {
            id,
            kind: creature.kind,
            reward: kill_reward(creature.behavior),
        })
    }

    /// Hit the nearest creature within `radius` of `position`.
    ///
    /// At most one creature is touched.
    pub fn hit_nearest(&mut self, position: Vec2, radius: f64, damage: f64) -> Option<HitOutcome> {
        let id = self.nearest_within(position, radius)?.id;
        self.hit(id, damage)
    }

    /// Render poses for every creature.
    pub fn poses(&self) -> impl Iterator<Item = Pose> + '_ {
        self.creatures.values().map(|c| Pose {
            entity: EntityRef::Creature(c.id),
            position: c.position,
            facing: c.facing,
        })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
