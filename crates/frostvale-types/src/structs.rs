//! Core entity structs: the player, resource nodes, creatures, buildings.
//!
//! These are plain data records. The logic that mutates them lives in the
//! downstream crates (`frostvale-survivor`, `frostvale-world`,
//! `frostvale-core`); only invariant-preserving helpers live here.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::enums::{
    BuildingKind, CreatureBehavior, CreatureKind, FoodKind, NodeKind, ResourceKind, ToolKind,
};
use crate::ids::{BuildingId, CreatureId, NodeId};

/// Resource amounts keyed by kind, used for recipe and building costs.
pub type ResourceCost = BTreeMap<ResourceKind, u32>;

// ---------------------------------------------------------------------------
// Geometry
// ---------------------------------------------------------------------------

/// A point or direction on the ground plane.
///
/// The world is a flat plane; `x` runs east-west and `z` north-south.
/// Height is fixed and never simulated.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Vec2 {
    /// East-west coordinate.
    pub x: f64,
    /// North-south coordinate.
    pub z: f64,
}

impl Vec2 {
    /// The origin.
    pub const ZERO: Self = Self { x: 0.0, z: 0.0 };

    /// Create a vector from its components.
    pub const fn new(x: f64, z: f64) -> Self {
        Self { x, z }
    }

    /// Euclidean length.
    pub fn length(self) -> f64 {
        self.x.hypot(self.z)
    }

    /// Euclidean distance to another point.
    pub fn distance(self, other: Self) -> f64 {
        (self - other).length()
    }

    /// Unit vector in the same direction, or zero for the zero vector.
    #[must_use]
    pub fn normalized(self) -> Self {
        let len = self.length();
        if len > 0.0 {
            Self::new(self.x / len, self.z / len)
        } else {
            Self::ZERO
        }
    }

    /// Multiply both components by `factor`.
    #[must_use]
    pub fn scaled(self, factor: f64) -> Self {
        Self::new(self.x * factor, self.z * factor)
    }

    /// Whether both coordinates lie strictly inside `±half_extent`.
    pub fn within(self, half_extent: f64) -> bool {
        self.x.abs() < half_extent && self.z.abs() < half_extent
    }
}

impl core::ops::Add for Vec2 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.z + rhs.z)
    }
}

impl core::ops::Sub for Vec2 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.z - rhs.z)
    }
}

// ---------------------------------------------------------------------------
// Player
// ---------------------------------------------------------------------------

/// A bounded survival stat.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Stat {
    /// Current value, kept within `[0, max]` after every tick.
    pub current: f64,
    /// Upper bound.
    pub max: f64,
}

impl Stat {
    /// A stat filled to `max`.
    pub const fn full(max: f64) -> Self {
        Self { current: max, max }
    }

    /// Clamp the current value into `[0, max]`.
    pub fn clamp(&mut self) {
        self.current = self.current.clamp(0.0, self.max);
    }

    /// Whether the stat has reached zero.
    pub fn is_depleted(&self) -> bool {
        self.current <= 0.0
    }
}

/// The player's three survival stats.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Stats {
    /// Hit points. Zero ends the session.
    pub health: Stat,
    /// Satiation. Decays every tick; zero drains health.
    pub hunger: Stat,
    /// Spent by running, regenerated while standing still.
    pub stamina: Stat,
}

impl Stats {
    /// All three stats full at the given maxima.
    pub const fn full(max_health: f64, max_hunger: f64, max_stamina: f64) -> Self {
        Self {
            health: Stat::full(max_health),
            hunger: Stat::full(max_hunger),
            stamina: Stat::full(max_stamina),
        }
    }

    /// Clamp every stat into its range.
    pub fn clamp_all(&mut self) {
        self.health.clamp();
        self.hunger.clamp();
        self.stamina.clamp();
    }
}

impl Default for Stats {
    fn default() -> Self {
        Self::full(100.0, 100.0, 100.0)
    }
}

/// Carried resource counts. One fixed slot per [`ResourceKind`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Inventory {
    /// Wood count.
    pub wood: u32,
    /// Stone count.
    pub stone: u32,
    /// Food count.
    pub food: u32,
    /// Iron count.
    pub iron: u32,
    /// Leather count.
    pub leather: u32,
}

impl Inventory {
    /// Count held of `kind`.
    pub const fn count(&self, kind: ResourceKind) -> u32 {
        match kind {
            ResourceKind::Wood => self.wood,
            ResourceKind::Stone => self.stone,
            ResourceKind::Food => self.food,
            ResourceKind::Iron => self.iron,
            ResourceKind::Leather => self.leather,
        }
    }

    /// Mutable slot for `kind`.
    pub const fn slot_mut(&mut self, kind: ResourceKind) -> &mut u32 {
        match kind {
            ResourceKind::Wood => &mut self.wood,
            ResourceKind::Stone => &mut self.stone,
            ResourceKind::Food => &mut self.food,
            ResourceKind::Iron => &mut self.iron,
            ResourceKind::Leather => &mut self.leather,
        }
    }

    /// All counts keyed by kind.
    pub fn to_map(&self) -> BTreeMap<ResourceKind, u32> {
        ResourceKind::ALL
            .iter()
            .map(|kind| (*kind, self.count(*kind)))
            .collect()
    }
}

/// The tools the player owns and the one in hand.
///
/// `Hands` is unlocked on construction and there is no way to lock a tool,
/// so the equipped tool is always unlocked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct ToolBelt {
    equipped: ToolKind,
    unlocked: BTreeSet<ToolKind>,
}

impl ToolBelt {
    /// A belt holding only bare hands.
    pub fn new() -> Self {
        Self {
            equipped: ToolKind::Hands,
            unlocked: BTreeSet::from([ToolKind::Hands]),
        }
    }

    /// The tool currently in hand.
    pub const fn equipped(&self) -> ToolKind {
        self.equipped
    }

    /// Whether `tool` has been unlocked.
    pub fn is_unlocked(&self, tool: ToolKind) -> bool {
        self.unlocked.contains(&tool)
    }

    /// Unlocked tools in slot order.
    pub fn unlocked(&self) -> impl Iterator<Item = ToolKind> + '_ {
        self.unlocked.iter().copied()
    }

    /// Mark `tool` as owned.
    pub fn unlock(&mut self, tool: ToolKind) {
        self.unlocked.insert(tool);
    }

    /// Put `tool` in hand. Returns `false` (and changes nothing) if it is locked.
    pub fn equip(&mut self, tool: ToolKind) -> bool {
        if self.is_unlocked(tool) {
            self.equipped = tool;
            true
        } else {
            false
        }
    }
}

impl Default for ToolBelt {
    fn default() -> Self {
        Self::new()
    }
}

/// The single player character.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Player {
    /// Ground-plane position.
    pub position: Vec2,
    /// Facing angle in radians, `atan2(dx, dz)` of the last movement.
    pub facing: f64,
    /// Survival stats.
    pub stats: Stats,
    /// Carried resources.
    pub inventory: Inventory,
    /// Owned and equipped tools.
    pub tools: ToolBelt,
}

impl Player {
    /// A fresh player at `position` with the given stats and an empty pack.
    pub fn new(position: Vec2, stats: Stats) -> Self {
        Self {
            position,
            facing: 0.0,
            stats,
            inventory: Inventory::default(),
            tools: ToolBelt::new(),
        }
    }
}

// ---------------------------------------------------------------------------
// World entities
// ---------------------------------------------------------------------------

/// A gatherable node: tree, rock, bush or ore deposit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct ResourceNode {
    /// Unique identifier.
    pub id: NodeId,
    /// What the node looks like.
    pub kind: NodeKind,
    /// Ground-plane position.
    pub position: Vec2,
    /// Remaining health. The node is removed once this reaches zero.
    pub health: f64,
    /// Health at spawn.
    pub max_health: f64,
    /// Resource credited when the node is depleted.
    pub resource: ResourceKind,
    /// Amount credited when the node is depleted.
    pub yield_amount: u32,
    /// Food subtype for food-yielding nodes.
    pub food: Option<FoodKind>,
}

/// A mobile non-player entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Creature {
    /// Unique identifier.
    pub id: CreatureId,
    /// Species.
    pub kind: CreatureKind,
    /// Hostile or passive.
    pub behavior: CreatureBehavior,
    /// Ground-plane position.
    pub position: Vec2,
    /// Remaining health.
    pub health: f64,
    /// Health at spawn.
    pub max_health: f64,
    /// Movement per tick while wandering.
    pub speed: f64,
    /// Wander heading in radians.
    pub heading: f64,
    /// Facing angle in radians, for rendering.
    pub facing: f64,
    /// Ticks since the wander heading last changed.
    pub redirect_timer: u32,
    /// Ticks until the creature may strike again.
    pub attack_cooldown: u32,
    /// Damage per strike. `None` for passive animals.
    pub damage: Option<f64>,
}

/// A completed player structure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Building {
    /// Unique identifier.
    pub id: BuildingId,
    /// Building type.
    pub kind: BuildingKind,
    /// Where it was placed.
    pub position: Vec2,
    /// Resources paid at construction.
    pub cost: ResourceCost,
    /// Tick on which it was placed.
    pub placed_at_tick: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalized_zero_stays_zero() {
        assert_eq!(Vec2::ZERO.normalized(), Vec2::ZERO);
    }

    #[test]
    fn normalized_diagonal_has_unit_length() {
        let v = Vec2::new(1.0, 1.0).normalized();
        assert!((v.length() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn within_is_strict() {
        assert!(Vec2::new(149.9, 0.0).within(150.0));
        assert!(!Vec2::new(150.0, 0.0).within(150.0));
        assert!(!Vec2::new(0.0, -151.0).within(150.0));
    }

    #[test]
    fn stat_clamps_both_ends() {
        let mut stat = Stat::full(100.0);
        stat.current = 120.0;
        stat.clamp();
        assert!((stat.current - 100.0).abs() < f64::EPSILON);
        stat.current = -3.0;
        stat.clamp();
        assert!(stat.current.abs() < f64::EPSILON);
        assert!(stat.is_depleted());
    }

    #[test]
    fn inventory_slots_match_counts() {
        let mut inv = Inventory::default();
        *inv.slot_mut(ResourceKind::Iron) += 4;
        assert_eq!(inv.count(ResourceKind::Iron), 4);
        assert_eq!(inv.iron, 4);
        assert_eq!(inv.to_map().len(), ResourceKind::ALL.len());
    }

    #[test]
    fn tool_belt_starts_with_hands() {
        let belt = ToolBelt::new();
        assert_eq!(belt.equipped(), ToolKind::Hands);
        assert!(belt.is_unlocked(ToolKind::Hands));
        assert!(!belt.is_unlocked(ToolKind::Axe));
    }

    #[test]
    fn tool_belt_refuses_locked_tool() {
        let mut belt = ToolBelt::new();
        assert!(!belt.equip(ToolKind::Sword));
        assert_eq!(belt.equipped(), ToolKind::Hands);
        belt.unlock(ToolKind::Sword);
        assert!(belt.equip(ToolKind::Sword));
        assert_eq!(belt.equipped(), ToolKind::Sword);
    }
}
