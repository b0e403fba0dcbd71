//! Input and action types exchanged between the input layer and the core.
//!
//! Movement is level-triggered: the input layer reports a [`MoveIntent`]
//! once per tick. Everything else is a discrete [`PlayerAction`] resolved
//! immediately and answered with an [`ActionResult`].

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::enums::{BuildingKind, RejectionReason, ToolKind};
use crate::events::SimEvent;
use crate::structs::Vec2;

/// Directional flags held during a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct MoveIntent {
    /// Move toward negative `z`.
    pub up: bool,
    /// Move toward positive `z`.
    pub down: bool,
    /// Move toward negative `x`.
    pub left: bool,
    /// Move toward positive `x`.
    pub right: bool,
    /// Run modifier.
    pub run: bool,
}

impl MoveIntent {
    /// No keys held.
    pub const IDLE: Self = Self {
        up: false,
        down: false,
        left: false,
        right: false,
        run: false,
    };

    /// Whether any direction is held.
    pub const fn is_moving(&self) -> bool {
        self.up || self.down || self.left || self.right
    }

    /// Sum of the held axis contributions (not normalized).
    pub fn axis(&self) -> Vec2 {
        let mut v = Vec2::ZERO;
        if self.up {
            v.z -= 1.0;
        }
        if self.down {
            v.z += 1.0;
        }
        if self.left {
            v.x -= 1.0;
        }
        if self.right {
            v.x += 1.0;
        }
        v
    }
}

/// A discrete request from the input layer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[serde(tag = "type", rename_all = "snake_case")]
#[ts(export, export_to = "bindings/")]
pub enum PlayerAction {
    /// Harvest the nearest node.
    Gather,
    /// Hit the nearest creature.
    Attack,
    /// Trigger the equipped tool's special ability.
    UseTool,
    /// Equip the tool in a hotbar slot (1..=7).
    SelectTool {
        /// 1-based hotbar slot.
        slot: u8,
    },
    /// Show the crafting menu.
    OpenCrafting,
    /// Show the building menu.
    OpenBuilding,
    /// Craft and equip a tool.
    Craft {
        /// Tool to craft.
        tool: ToolKind,
    },
    /// Stage a building for placement.
    EnterBuildMode {
        /// Building to stage.
        kind: BuildingKind,
    },
    /// Move the placement ghost. Advisory only.
    PreviewPlacement {
        /// Cursor position on the ground plane.
        position: Vec2,
    },
    /// Confirm the staged building at a position.
    PlaceBuilding {
        /// Cursor position on the ground plane.
        position: Vec2,
    },
    /// Discard the staged building.
    CancelBuildMode,
    /// Back out of build mode or close the open panel.
    Escape,
}

/// How an action was resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "status", rename_all = "snake_case")]
#[ts(export, export_to = "bindings/")]
pub enum ActionOutcome {
    /// State changed.
    Applied,
    /// Valid request with nothing to act on (e.g. no target in range).
    NoEffect,
    /// Refused; state unchanged.
    Rejected {
        /// Why it was refused.
        reason: RejectionReason,
    },
}

/// The answer to a [`PlayerAction`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct ActionResult {
    /// The request.
    pub action: PlayerAction,
    /// How it was resolved.
    pub outcome: ActionOutcome,
    /// Events emitted while resolving it.
    pub events: Vec<SimEvent>,
}

impl ActionResult {
    /// Whether the action changed state.
    pub const fn is_applied(&self) -> bool {
        matches!(self.outcome, ActionOutcome::Applied)
    }
}
