//! Discrete player action dispatch.
//!
//! [`apply_action`] resolves one [`PlayerAction`] against the session
//! immediately and answers with an [`ActionResult`]. Component errors are
//! mapped onto [`RejectionReason`]s here and never escape as `Err`.
//! Refused actions leave the state untouched.
//!
//! Crafting and building report success or failure to the player through
//! toast events as well as through the outcome.

use frostvale_survivor::{craft, select_slot};
use frostvale_types::{
    ActionOutcome, ActionResult, BuildingKind, Panel, PlayerAction, RejectionReason, SimEvent,
    ToastTone, ToolKind, Vec2,
};
use tracing::{debug, info, warn};

use crate::build::BuildError;
use crate::interaction::{self, Resolution};
use crate::tick::SimulationState;

/// Toast shown when a craft or build cannot be paid for.
pub const NOT_ENOUGH_RESOURCES: &str = "Not enough resources";

/// Resolve one player action against the session.
pub fn apply_action(state: &mut SimulationState, action: PlayerAction) -> ActionResult {
    let resolution = if state.is_over() {
        debug!(?action, "Action ignored after game over");
        rejected(RejectionReason::SessionOver, Vec::new())
    } else {
        dispatch(state, action)
    };

    ActionResult {
        action,
        outcome: resolution.outcome,
        events: resolution.events,
    }
}

fn dispatch(state: &mut SimulationState, action: PlayerAction) -> Resolution {
    let interaction_config = &state.config.interaction;
    match action {
        PlayerAction::Gather => {
            interaction::gather(&mut state.player, &mut state.resources, interaction_config)
        }
        PlayerAction::Attack => {
            interaction::attack(&mut state.player, &mut state.creatures, interaction_config)
        }
        PlayerAction::UseTool => interaction::use_tool(
            &mut state.player,
            &mut state.creatures,
            interaction_config,
            &mut state.rng,
        ),
        PlayerAction::SelectTool { slot } => select(state, slot),
        PlayerAction::OpenCrafting => open_panel(state, Panel::Crafting),
        PlayerAction::OpenBuilding => open_panel(state, Panel::Building),
        PlayerAction::Craft { tool } => craft_tool(state, tool),
        PlayerAction::EnterBuildMode { kind } => enter_build_mode(state, kind),
        PlayerAction::PreviewPlacement { position } => {
            if state.build.preview(position) {
                Resolution::applied(Vec::new())
            } else {
                Resolution::no_effect()
            }
        }
        PlayerAction::PlaceBuilding { position } => place_building(state, position),
        PlayerAction::CancelBuildMode => cancel_build_mode(state),
        PlayerAction::Escape => {
            if state.build.is_staged() {
                cancel_build_mode(state)
            } else {
                open_panel(state, Panel::Closed)
            }
        }
    }
}

const fn rejected(reason: RejectionReason, events: Vec<SimEvent>) -> Resolution {
    Resolution {
        outcome: ActionOutcome::Rejected { reason },
        events,
    }
}

/// Rejection for a failed craft or build, with a toast when it was the
/// player's purse that came up short.
fn refuse(reason: RejectionReason) -> Resolution {
    let events = if reason == RejectionReason::InsufficientResources {
        vec![SimEvent::toast(NOT_ENOUGH_RESOURCES, ToastTone::Failure)]
    } else {
        Vec::new()
    };
    rejected(reason, events)
}

fn select(state: &mut SimulationState, slot: u8) -> Resolution {
    match select_slot(&mut state.player.tools, slot) {
        Ok(tool) => Resolution::applied(vec![SimEvent::ToolEquipped { tool }]),
        Err(err) => {
            warn!(slot, %err, "Tool selection ignored");
            rejected(err.rejection(), Vec::new())
        }
    }
}

fn open_panel(state: &mut SimulationState, panel: Panel) -> Resolution {
    if state.panel == panel {
        return Resolution::no_effect();
    }
    state.panel = panel;
    debug!(?panel, "Panel changed");
    Resolution::applied(vec![SimEvent::PanelChanged { panel }])
}

fn craft_tool(state: &mut SimulationState, tool: ToolKind) -> Resolution {
    let player = &mut state.player;
    match craft(&mut player.inventory, &mut player.tools, tool) {
        Ok(()) => Resolution::applied(vec![
            SimEvent::ToolCrafted { tool },
            SimEvent::ToolEquipped { tool },
            SimEvent::toast(format!("Crafted {tool}"), ToastTone::Success),
        ]),
        Err(err) => {
            warn!(%tool, %err, "Craft refused");
            refuse(err.rejection())
        }
    }
}

fn enter_build_mode(state: &mut SimulationState, kind: BuildingKind) -> Resolution {
    match state.build.enter_build_mode(kind, &state.player.inventory) {
        Ok(()) => {
            let mut events = Vec::new();
            if state.panel != Panel::Closed {
                state.panel = Panel::Closed;
                events.push(SimEvent::PanelChanged {
                    panel: Panel::Closed,
                });
            }
            events.push(SimEvent::BuildModeEntered { kind });
            Resolution::applied(events)
        }
        Err(err) => {
            warn!(%kind, %err, "Build mode refused");
            refuse(err.rejection())
        }
    }
}

fn place_building(state: &mut SimulationState, position: Vec2) -> Resolution {
    let tick = state.clock.tick();
    let placed = state.build.confirm_placement(
        position,
        &mut state.player.inventory,
        &mut state.ids,
        tick,
    );
    match placed {
        Ok(building) => Resolution::applied(vec![
            SimEvent::BuildingPlaced {
                id: building.id,
                kind: building.kind,
                position: building.position,
            },
            SimEvent::toast(format!("Built {}", building.kind), ToastTone::Success),
        ]),
        Err(BuildError::NotInBuildMode) => {
            debug!("Placement confirmed with nothing staged");
            refuse(RejectionReason::NotInBuildMode)
        }
        Err(BuildError::Unaffordable(err)) => {
            warn!(%err, "Placement refused");
            refuse(err.rejection())
        }
    }
}

fn cancel_build_mode(state: &mut SimulationState) -> Resolution {
    match state.build.cancel() {
        Some(kind) => {
            info!(%kind, "Build mode cancelled");
            Resolution::applied(vec![SimEvent::BuildModeCancelled { kind }])
        }
        None => Resolution::no_effect(),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
