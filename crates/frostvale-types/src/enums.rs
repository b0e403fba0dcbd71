//! Enumeration types for the Frostvale simulation.
//!
//! Every kind the game knows about is a closed enum so recipe and cost
//! tables can be matched exhaustively.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

// ---------------------------------------------------------------------------
// Resources
// ---------------------------------------------------------------------------

/// A resource the player can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export, export_to = "bindings/")]
pub enum ResourceKind {
    /// Logs chopped from trees.
    Wood,
    /// Stone broken from rocks.
    Stone,
    /// Edible units; consumed automatically when hungry.
    Food,
    /// Iron from ore deposits.
    Iron,
    /// Hides from slain animals.
    Leather,
}

impl ResourceKind {
    /// Every resource kind, in inventory display order.
    pub const ALL: [Self; 5] = [Self::Wood, Self::Stone, Self::Food, Self::Iron, Self::Leather];
}

impl core::fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let name = match self {
            Self::Wood => "wood",
            Self::Stone => "stone",
            Self::Food => "food",
            Self::Iron => "iron",
            Self::Leather => "leather",
        };
        f.write_str(name)
    }
}

/// Food subtype carried by a node, used to describe nutrition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export, export_to = "bindings/")]
pub enum FoodKind {
    /// Berries picked from bushes.
    Berries,
    /// Meat from hunted animals.
    Meat,
    /// Fish caught with a rod.
    Fish,
}

// ---------------------------------------------------------------------------
// Tools
// ---------------------------------------------------------------------------

/// A tool the player can equip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export, export_to = "bindings/")]
pub enum ToolKind {
    /// Bare hands. Always unlocked.
    Hands,
    /// Fast wood gathering.
    Axe,
    /// Fast stone gathering.
    Pickaxe,
    /// Melee weapon.
    Sword,
    /// Ranged weapon.
    Bow,
    /// Heavy tool with a building bonus.
    Hammer,
    /// Catches fish near water.
    FishingRod,
}

impl ToolKind {
    /// Every tool, in hotbar slot order (slot 1 is `Hands`).
    pub const ALL: [Self; 7] = [
        Self::Hands,
        Self::Axe,
        Self::Pickaxe,
        Self::Sword,
        Self::Bow,
        Self::Hammer,
        Self::FishingRod,
    ];

    /// Map a 1-based hotbar slot to a tool. Returns `None` outside 1..=7.
    pub fn from_slot(slot: u8) -> Option<Self> {
        let index = usize::from(slot).checked_sub(1)?;
        Self::ALL.get(index).copied()
    }

    /// The 1-based hotbar slot of this tool.
    pub const fn slot(self) -> u8 {
        match self {
            Self::Hands => 1,
            Self::Axe => 2,
            Self::Pickaxe => 3,
            Self::Sword => 4,
            Self::Bow => 5,
            Self::Hammer => 6,
            Self::FishingRod => 7,
        }
    }
}

impl core::fmt::Display for ToolKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let name = match self {
            Self::Hands => "hands",
            Self::Axe => "axe",
            Self::Pickaxe => "pickaxe",
            Self::Sword => "sword",
            Self::Bow => "bow",
            Self::Hammer => "hammer",
            Self::FishingRod => "fishingrod",
        };
        f.write_str(name)
    }
}

// ---------------------------------------------------------------------------
// Buildings
// ---------------------------------------------------------------------------

/// A structure the player can build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export, export_to = "bindings/")]
pub enum BuildingKind {
    /// Shelter for the night.
    House,
    /// Lookout post.
    Watchtower,
    /// Crafting station.
    Workshop,
    /// Food plot.
    Farm,
}

impl BuildingKind {
    /// Every building kind, in build menu order.
    pub const ALL: [Self; 4] = [Self::House, Self::Watchtower, Self::Workshop, Self::Farm];
}

impl core::fmt::Display for BuildingKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let name = match self {
            Self::House => "house",
            Self::Watchtower => "watchtower",
            Self::Workshop => "workshop",
            Self::Farm => "farm",
        };
        f.write_str(name)
    }
}

/// Passive effect a building declares. Not simulated beyond presence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "bindings/")]
pub enum BuildingEffect {
    /// Protection during the night.
    NightShelter,
    /// Extended view distance.
    Lookout,
    /// Advanced crafting.
    CraftingStation,
    /// Periodic food production.
    FoodProduction,
}

// ---------------------------------------------------------------------------
// World entities
// ---------------------------------------------------------------------------

/// The kind of a gatherable resource node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "bindings/")]
pub enum NodeKind {
    /// Yields wood.
    Tree,
    /// Yields stone.
    Rock,
    /// Yields food (berries).
    BerryBush,
    /// Yields iron.
    OreDeposit,
}

impl core::fmt::Display for NodeKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Tree => write!(f, "tree"),
            Self::Rock => write!(f, "rock"),
            Self::BerryBush => write!(f, "berry_bush"),
            Self::OreDeposit => write!(f, "ore_deposit"),
        }
    }
}

/// The kind of a creature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export, export_to = "bindings/")]
pub enum CreatureKind {
    /// Hostile brute that attacks the player.
    Troll,
    /// Passive animal hunted for food and leather.
    Deer,
}

impl core::fmt::Display for CreatureKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Troll => write!(f, "troll"),
            Self::Deer => write!(f, "deer"),
        }
    }
}

/// Whether a creature attacks the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export, export_to = "bindings/")]
pub enum CreatureBehavior {
    /// Chases and strikes the player.
    Hostile,
    /// Chases but never strikes.
    Passive,
}

// ---------------------------------------------------------------------------
// Session state
// ---------------------------------------------------------------------------

/// Day or night, derived from the world clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export, export_to = "bindings/")]
pub enum DayPhase {
    /// Sun is up.
    Day,
    /// Sun is down.
    Night,
}

impl core::fmt::Display for DayPhase {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Day => write!(f, "day"),
            Self::Night => write!(f, "night"),
        }
    }
}

/// Why the session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "bindings/")]
pub enum GameOverCause {
    /// Killed by a hostile creature.
    Defeated,
    /// Health drained by hunger or lingering injuries.
    Starvation,
}

impl core::fmt::Display for GameOverCause {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Defeated => write!(f, "defeated by enemies"),
            Self::Starvation => write!(f, "died from starvation or injuries"),
        }
    }
}

/// Why a player action was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "bindings/")]
pub enum RejectionReason {
    /// Not enough resources for the recipe or building.
    InsufficientResources,
    /// The requested tool has not been crafted yet.
    ToolLocked,
    /// The tool has no recipe (bare hands).
    NotCraftable,
    /// The hotbar slot does not exist.
    InvalidSlot,
    /// Placement was confirmed without a staged building.
    NotInBuildMode,
    /// The session has ended.
    SessionOver,
}

/// Which menu panel the UI should show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export, export_to = "bindings/")]
pub enum Panel {
    /// No panel open.
    #[default]
    Closed,
    /// Crafting menu.
    Crafting,
    /// Building menu.
    Building,
}

/// Tone of a transient toast message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export, export_to = "bindings/")]
pub enum ToastTone {
    /// Something succeeded.
    Success,
    /// Something was refused.
    Failure,
    /// Neutral information.
    Info,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn slots_round_trip_for_every_tool() {
        for tool in ToolKind::ALL {
            assert_eq!(ToolKind::from_slot(tool.slot()), Some(tool));
        }
    }

    #[test]
    fn slot_out_of_range_is_none() {
        assert_eq!(ToolKind::from_slot(0), None);
        assert_eq!(ToolKind::from_slot(8), None);
    }

    #[test]
    fn tool_ids_serialize_lowercase() {
        let json = serde_json::to_string(&ToolKind::FishingRod).unwrap();
        assert_eq!(json, "\"fishingrod\"");
        assert_eq!(ToolKind::FishingRod.to_string(), "fishingrod");
    }
}
