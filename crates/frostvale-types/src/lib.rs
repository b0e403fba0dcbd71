//! Shared type definitions for the Frostvale survival simulation.
//!
//! This crate is the single source of truth for all types used across the
//! Frostvale workspace. Types defined here flow downstream to `TypeScript`
//! via `ts-rs` for the presentation layer.
//!
//! # Modules
//!
//! - [`ids`] -- Sequential entity identifiers and the session UUID
//! - [`enums`] -- Closed enumerations (resources, tools, buildings, creatures)
//! - [`structs`] -- Core entity structs (player, nodes, creatures, buildings)
//! - [`actions`] -- Movement intent, player actions, and action results
//! - [`events`] -- Simulation events, poses, and lighting
//! - [`snapshot`] -- HUD snapshot for the UI layer

pub mod actions;
pub mod enums;
pub mod events;
pub mod ids;
pub mod snapshot;
pub mod structs;

// Re-export all public types at crate root for convenience.
pub use actions::{ActionOutcome, ActionResult, MoveIntent, PlayerAction};
pub use enums::{
    BuildingEffect, BuildingKind, CreatureBehavior, CreatureKind, DayPhase, FoodKind,
    GameOverCause, NodeKind, Panel, RejectionReason, ResourceKind, ToastTone, ToolKind,
};
pub use events::{EntityRef, Lighting, Pose, SimEvent};
pub use ids::{BuildingId, CreatureId, IdSequence, NodeId, SessionId};
pub use snapshot::{BuildStageView, HudSnapshot};
pub use structs::{
    Building, Creature, Inventory, Player, ResourceCost, ResourceNode, Stat, Stats, ToolBelt,
    Vec2,
};

#[cfg(test)]
mod tests {
    //! `TypeScript` binding generation.

    #[test]
    fn export_bindings() {
        // ts-rs writes the files to the `bindings/` directory relative to
        // the crate root.
        use ts_rs::TS;

        // IDs
        let _ = crate::ids::NodeId::export_all();
        let _ = crate::ids::CreatureId::export_all();
        let _ = crate::ids::BuildingId::export_all();
        let _ = crate::ids::SessionId::export_all();

        // Enums
        let _ = crate::enums::ResourceKind::export_all();
        let _ = crate::enums::FoodKind::export_all();
        let _ = crate::enums::ToolKind::export_all();
        let _ = crate::enums::BuildingKind::export_all();
        let _ = crate::enums::BuildingEffect::export_all();
        let _ = crate::enums::NodeKind::export_all();
        let _ = crate::enums::CreatureKind::export_all();
        let _ = crate::enums::CreatureBehavior::export_all();
        let _ = crate::enums::DayPhase::export_all();
        let _ = crate::enums::GameOverCause::export_all();
        let _ = crate::enums::RejectionReason::export_all();
        let _ = crate::enums::Panel::export_all();
        let _ = crate::enums::ToastTone::export_all();

        // Structs
        let _ = crate::structs::Vec2::export_all();
        let _ = crate::structs::Stat::export_all();
        let _ = crate::structs::Stats::export_all();
        let _ = crate::structs::Inventory::export_all();
        let _ = crate::structs::ToolBelt::export_all();
        let _ = crate::structs::Player::export_all();
        let _ = crate::structs::ResourceNode::export_all();
        let _ = crate::structs::Creature::export_all();
        let _ = crate::structs::Building::export_all();

        // Actions and events
        let _ = crate::actions::MoveIntent::export_all();
        let _ = crate::actions::PlayerAction::export_all();
        let _ = crate::actions::ActionOutcome::export_all();
        let _ = crate::actions::ActionResult::export_all();
        let _ = crate::events::SimEvent::export_all();
        let _ = crate::events::EntityRef::export_all();
        let _ = crate::events::Pose::export_all();
        let _ = crate::events::Lighting::export_all();

        // Snapshot
        let _ = crate::snapshot::HudSnapshot::export_all();
        let _ = crate::snapshot::BuildStageView::export_all();
    }
}
