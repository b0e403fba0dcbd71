//! Tool stats, crafting recipes, and tool selection.
//!
//! Defines the static tables for every [`ToolKind`]: what each tool does
//! when swung and what it costs to craft. Crafting deducts the recipe
//! atomically, unlocks the tool and puts it in hand. `Hands` has no recipe
//! and is owned from the start.

use std::collections::BTreeMap;

use frostvale_types::{Inventory, ResourceCost, ResourceKind, ToolBelt, ToolKind};
use tracing::{debug, info};

use crate::error::SurvivorError;
use crate::inventory;

// ---------------------------------------------------------------------------
// Tool stats
// ---------------------------------------------------------------------------

/// What a tool does when used.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToolStats {
    /// Health removed from a creature per attack.
    pub damage: f64,
    /// Health removed from a resource node per gather.
    pub gather_speed: f64,
    /// Reach of the tool's ranged ability, if any.
    pub range: Option<f64>,
    /// Whether the tool can fish.
    pub fishing: bool,
    /// Whether the tool speeds up building.
    pub build_bonus: bool,
}

impl ToolStats {
    const fn melee(damage: f64, gather_speed: f64) -> Self {
        Self {
            damage,
            gather_speed,
            range: None,
            fishing: false,
            build_bonus: false,
        }
    }
}

/// Look up the fixed stats for `tool`.
pub const fn tool_stats(tool: ToolKind) -> ToolStats {
    match tool {
        ToolKind::Hands => ToolStats::melee(1.0, 1.0),
        ToolKind::Axe => ToolStats::melee(3.0, 2.0),
        ToolKind::Pickaxe => ToolStats::melee(2.0, 3.0),
        ToolKind::Sword => ToolStats::melee(5.0, 0.5),
        ToolKind::Bow => ToolStats {
            range: Some(15.0),
            ..ToolStats::melee(4.0, 0.5)
        },
        ToolKind::Hammer => ToolStats {
            build_bonus: true,
            ..ToolStats::melee(6.0, 1.0)
        },
        ToolKind::FishingRod => ToolStats {
            fishing: true,
            ..ToolStats::melee(1.0, 1.0)
        },
    }
}

// ---------------------------------------------------------------------------
// Recipe table
// ---------------------------------------------------------------------------

/// A single crafting recipe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CraftRecipe {
    /// The tool produced.
    pub output: ToolKind,
    /// Input materials consumed (resource -> quantity).
    pub inputs: ResourceCost,
}

/// Look up the crafting recipe for `tool`.
///
/// Returns `None` for [`ToolKind::Hands`], which cannot be crafted.
pub fn recipe_for(tool: ToolKind) -> Option<CraftRecipe> {
    let inputs = match tool {
        ToolKind::Hands => return None,
        ToolKind::Axe => BTreeMap::from([(ResourceKind::Wood, 5), (ResourceKind::Stone, 2)]),
        ToolKind::Pickaxe => BTreeMap::from([(ResourceKind::Wood, 3), (ResourceKind::Stone, 4)]),
        ToolKind::Sword => BTreeMap::from([(ResourceKind::Wood, 2), (ResourceKind::Stone, 3)]),
        ToolKind::Bow => BTreeMap::from([(ResourceKind::Wood, 4), (ResourceKind::Leather, 2)]),
        ToolKind::Hammer => BTreeMap::from([(ResourceKind::Wood, 3), (ResourceKind::Iron, 5)]),
        ToolKind::FishingRod => {
            BTreeMap::from([(ResourceKind::Wood, 3), (ResourceKind::Leather, 1)])
        }
    };
    Some(CraftRecipe {
        output: tool,
        inputs,
    })
}

/// Every tool that has a recipe, in hotbar order.
pub const fn craftable_tools() -> &'static [ToolKind] {
    &[
        ToolKind::Axe,
        ToolKind::Pickaxe,
        ToolKind::Sword,
        ToolKind::Bow,
        ToolKind::Hammer,
        ToolKind::FishingRod,
    ]
}

/// Whether each craftable tool's recipe is covered by `inventory`.
///
/// Already-owned tools are included; the flag only reflects materials.
pub fn craft_affordability(inventory: &Inventory) -> BTreeMap<ToolKind, bool> {
    craftable_tools()
        .iter()
        .filter_map(|tool| {
            recipe_for(*tool)
                .map(|recipe| (*tool, inventory::can_afford(inventory, &recipe.inputs)))
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Operations
// ---------------------------------------------------------------------------

/// Craft `tool`: pay its recipe, unlock it, and equip it.
///
/// Crafting a tool that is already owned pays again and re-equips it.
/// Nothing changes on failure.
pub fn craft(
    inventory: &mut Inventory,
    tools: &mut ToolBelt,
    tool: ToolKind,
) -> Result<(), SurvivorError> {
    let recipe = recipe_for(tool).ok_or(SurvivorError::NotCraftable(tool))?;
    inventory::spend(inventory, &recipe.inputs)?;
    tools.unlock(tool);
    tools.equip(tool);
    info!(%tool, "Tool crafted");
    Ok(())
}

/// Equip an already-unlocked tool.
pub fn select_tool(tools: &mut ToolBelt, tool: ToolKind) -> Result<(), SurvivorError> {
    if tools.equip(tool) {
        debug!(%tool, "Tool equipped");
        Ok(())
    } else {
        Err(SurvivorError::ToolLocked(tool))
    }
}

/// Equip the tool bound to a 1-based hotbar slot.
pub fn select_slot(tools: &mut ToolBelt, slot: u8) -> Result<ToolKind, SurvivorError> {
    let tool = ToolKind::from_slot(slot).ok_or(SurvivorError::InvalidSlot(slot))?;
    select_tool(tools, tool)?;
    Ok(tool)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
