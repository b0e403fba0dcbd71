//! Events and per-frame render data emitted by the core.
//!
//! The core never calls into rendering or UI code. It emits [`SimEvent`]s
//! for discrete changes (spawns, despawns, toasts, game over) and a set of
//! [`Pose`]s plus [`Lighting`] every tick; the presentation layer decides
//! how to draw them.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::enums::{
    BuildingKind, CreatureKind, DayPhase, GameOverCause, NodeKind, Panel, ResourceKind,
    ToastTone, ToolKind,
};
use crate::ids::{BuildingId, CreatureId, NodeId};
use crate::structs::{Inventory, Vec2};

/// Something that happened in the simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(tag = "type", rename_all = "snake_case")]
#[ts(export, export_to = "bindings/")]
pub enum SimEvent {
    /// A node was placed in the world.
    NodeSpawned {
        /// Node id.
        id: NodeId,
        /// Node kind.
        kind: NodeKind,
        /// Where it stands.
        position: Vec2,
    },
    /// A node took a gather hit and survived.
    NodeDamaged {
        /// Node id.
        id: NodeId,
        /// Health left.
        health: f64,
    },
    /// A node was used up and removed; its yield went to the player.
    NodeDepleted {
        /// Node id.
        id: NodeId,
        /// Resource credited.
        resource: ResourceKind,
        /// Amount credited.
        amount: u32,
    },
    /// A creature was placed in the world.
    CreatureSpawned {
        /// Creature id.
        id: CreatureId,
        /// Species.
        kind: CreatureKind,
        /// Where it stands.
        position: Vec2,
    },
    /// A creature was hit and survived.
    CreatureDamaged {
        /// Creature id.
        id: CreatureId,
        /// Health left.
        health: f64,
    },
    /// A creature died and was removed; rewards went to the player.
    CreatureSlain {
        /// Creature id.
        id: CreatureId,
        /// Species.
        kind: CreatureKind,
        /// Resources credited.
        reward: Inventory,
    },
    /// A creature hit the player.
    PlayerStruck {
        /// Attacker.
        by: CreatureId,
        /// Damage dealt.
        damage: f64,
        /// Player health afterwards.
        health: f64,
    },
    /// The player ate a unit of food automatically.
    FoodEaten {
        /// Hunger afterwards.
        hunger: f64,
        /// Food units left.
        food_left: u32,
    },
    /// A fishing cast landed a catch.
    FishCaught {
        /// Food units credited.
        amount: u32,
    },
    /// A tool was crafted and equipped.
    ToolCrafted {
        /// The new tool.
        tool: ToolKind,
    },
    /// A different tool was put in hand.
    ToolEquipped {
        /// The tool now in hand.
        tool: ToolKind,
    },
    /// A menu panel opened or closed.
    PanelChanged {
        /// The panel now showing.
        panel: Panel,
    },
    /// A building was staged for placement.
    BuildModeEntered {
        /// Staged building.
        kind: BuildingKind,
    },
    /// The staged building was discarded.
    BuildModeCancelled {
        /// Discarded building.
        kind: BuildingKind,
    },
    /// A building was placed and paid for.
    BuildingPlaced {
        /// Building id.
        id: BuildingId,
        /// Building kind.
        kind: BuildingKind,
        /// Where it stands.
        position: Vec2,
    },
    /// Day turned to night or back.
    PhaseChanged {
        /// The new phase.
        phase: DayPhase,
    },
    /// A short message for the player.
    Toast {
        /// Message text.
        message: String,
        /// Success, failure or info.
        tone: ToastTone,
    },
    /// The session ended. Emitted exactly once.
    GameOver {
        /// Why.
        cause: GameOverCause,
        /// Tick on which it happened.
        tick: u64,
    },
}

impl SimEvent {
    /// Build a toast event.
    pub fn toast(message: impl Into<String>, tone: ToastTone) -> Self {
        Self::Toast {
            message: message.into(),
            tone,
        }
    }
}

/// Which entity a [`Pose`] belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "kind", content = "id", rename_all = "snake_case")]
#[ts(export, export_to = "bindings/")]
pub enum EntityRef {
    /// The player.
    Player,
    /// A creature.
    Creature(CreatureId),
}

/// Position and facing of a moving entity for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Pose {
    /// Whose pose.
    pub entity: EntityRef,
    /// Ground-plane position.
    pub position: Vec2,
    /// Facing angle in radians.
    pub facing: f64,
}

/// Light levels derived from the world clock.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Lighting {
    /// Whether it is night.
    pub is_night: bool,
    /// Directional (sun) light intensity.
    pub sun_intensity: f64,
    /// Ambient light intensity.
    pub ambient_intensity: f64,
    /// Fog and sky colour as `0xRRGGBB`.
    pub fog_color: u32,
}
