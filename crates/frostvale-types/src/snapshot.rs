//! Snapshot handed to the UI layer after every tick.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::enums::{BuildingKind, Panel, ToolKind};
use crate::structs::{Inventory, Stats, Vec2};

/// Everything the HUD, crafting menu and build menu display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct HudSnapshot {
    /// Tick the snapshot was taken on.
    pub tick: u64,
    /// Health, hunger and stamina with their maxima.
    pub stats: Stats,
    /// Carried resources.
    pub inventory: Inventory,
    /// Tool in hand.
    pub equipped: ToolKind,
    /// All unlocked tools.
    pub unlocked: Vec<ToolKind>,
    /// Whether each craftable tool is currently affordable.
    pub craftable: BTreeMap<ToolKind, bool>,
    /// Whether each building is currently affordable.
    pub buildable: BTreeMap<BuildingKind, bool>,
    /// Open menu panel.
    pub panel: Panel,
    /// Staged building, if in build mode.
    pub build_stage: Option<BuildStageView>,
    /// Whether the session has ended.
    pub game_over: bool,
}

/// Build-mode ghost as shown to the player.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct BuildStageView {
    /// Staged building.
    pub kind: BuildingKind,
    /// Last previewed cursor position.
    pub preview: Option<Vec2>,
    /// Whether the staged building is still affordable.
    pub affordable: bool,
}
