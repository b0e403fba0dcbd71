//! Scripted survivor that plays the game without a keyboard.
//!
//! The [`Autopilot`] is a greedy [`InputSource`]: every frame it picks the
//! first applicable goal in priority order.
//!
//! 1. Swing at any creature in reach
//! 2. Craft the next tool on its shopping list
//! 3. Raise the next building on its shopping list
//! 4. Harvest the nearest node in reach
//! 5. Walk toward the nearest node anywhere
//!
//! Swings and harvests are rate limited so the pace resembles a person
//! mashing a key rather than one action per frame.

use frostvale_core::build::build_affordability;
use frostvale_core::{FrameInput, InputSource, SimulationState};
use frostvale_survivor::crafting::craft_affordability;
use frostvale_types::{BuildingKind, MoveIntent, PlayerAction, ToolKind, Vec2};
use tracing::debug;

/// Tools the autopilot crafts, in order.
const CRAFT_ORDER: [ToolKind; 3] = [ToolKind::Axe, ToolKind::Pickaxe, ToolKind::Sword];

/// Buildings the autopilot raises, once each, in order.
const BUILD_ORDER: [BuildingKind; 2] = [BuildingKind::House, BuildingKind::Farm];

/// Ticks between two swings or two harvest hits.
const ACTION_INTERVAL_TICKS: u64 = 20;

/// Offsets under this distance do not steer.
const STEER_DEAD_ZONE: f64 = 0.25;

/// Where a new building goes, relative to the player.
const BUILD_OFFSET: Vec2 = Vec2::new(0.0, 4.0);

/// A greedy gatherer and fighter.
#[derive(Debug, Clone, Copy, Default)]
pub struct Autopilot;

impl Autopilot {
    /// Create a new autopilot.
    pub const fn new() -> Self {
        Self
    }

    fn next_craft(state: &SimulationState) -> Option<ToolKind> {
        let affordable = craft_affordability(&state.player.inventory);
        CRAFT_ORDER.into_iter().find(|tool| {
            !state.player.tools.is_unlocked(*tool) && affordable.get(tool).copied() == Some(true)
        })
    }

    fn next_building(state: &SimulationState) -> Option<BuildingKind> {
        let affordable = build_affordability(&state.player.inventory);
        BUILD_ORDER.into_iter().find(|kind| {
            let built = state.build.buildings().iter().any(|b| b.kind == *kind);
            !built && affordable.get(kind).copied() == Some(true)
        })
    }
}

/// Hold the keys that move the player toward `target`.
fn steer_toward(from: Vec2, target: Vec2) -> MoveIntent {
    let dx = target.x - from.x;
    let dz = target.z - from.z;
    MoveIntent {
        up: dz < -STEER_DEAD_ZONE,
        down: dz > STEER_DEAD_ZONE,
        left: dx < -STEER_DEAD_ZONE,
        right: dx > STEER_DEAD_ZONE,
        run: false,
    }
}

const fn on_beat(tick: u64) -> bool {
    tick % ACTION_INTERVAL_TICKS == 0
}

impl InputSource for Autopilot {
    fn poll(&mut self, tick: u64, state: &SimulationState) -> FrameInput {
        let position = state.player.position;
        let interaction = &state.config.interaction;

        if let Some(target) = state
            .creatures
            .nearest_within(position, interaction.attack_radius)
        {
            let actions = if on_beat(tick) {
                debug!(tick, target = %target.id, "Autopilot swings");
                vec![PlayerAction::Attack]
            } else {
                Vec::new()
            };
            return FrameInput {
                intent: MoveIntent::IDLE,
                actions,
            };
        }

        if let Some(tool) = Self::next_craft(state) {
            debug!(tick, %tool, "Autopilot crafts");
            return FrameInput {
                intent: MoveIntent::IDLE,
                actions: vec![PlayerAction::Craft { tool }],
            };
        }

        if let Some(kind) = Self::next_building(state) {
            debug!(tick, %kind, "Autopilot builds");
            return FrameInput {
                intent: MoveIntent::IDLE,
                actions: vec![
                    PlayerAction::EnterBuildMode { kind },
                    PlayerAction::PlaceBuilding {
                        position: position + BUILD_OFFSET,
                    },
                ],
            };
        }

        if state
            .resources
            .nearest_within(position, interaction.gather_radius)
            .is_some()
        {
            let actions = if on_beat(tick) {
                vec![PlayerAction::Gather]
            } else {
                Vec::new()
            };
            return FrameInput {
                intent: MoveIntent::IDLE,
                actions,
            };
        }

        state
            .resources
            .nearest_within(position, f64::INFINITY)
            .map_or_else(FrameInput::default, |node| {
                FrameInput::moving(steer_toward(position, node.position))
            })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use frostvale_core::config::GenerationSettings;
    use frostvale_core::{SimulationConfig, apply_action};
    use frostvale_types::{CreatureId, CreatureKind, NodeId, NodeKind};
    use frostvale_world::creature::spawn_creature;
    use frostvale_world::resource::spawn_node;

    use super::*;

    fn empty_state() -> SimulationState {
        let config = SimulationConfig {
            generation: GenerationSettings {
                trees: 0,
                rocks: 0,
                berry_bushes: 0,
                ore_deposits: 0,
                trolls: 0,
                deer: 0,
                ..GenerationSettings::default()
            },
            ..SimulationConfig::default()
        };
        SimulationState::new(config).unwrap()
    }

    #[test]
    fn walks_toward_a_distant_node() {
        let mut state = empty_state();
        state.resources.insert(spawn_node(
            NodeId::new(900),
            NodeKind::Rock,
            Vec2::new(30.0, -10.0),
        ));

        let frame = Autopilot::new().poll(1, &state);
        assert!(frame.intent.right);
        assert!(frame.intent.up);
        assert!(!frame.intent.left);
        assert!(frame.actions.is_empty());
    }

    #[test]
    fn harvests_on_the_beat() {
        let mut state = empty_state();
        state.resources.insert(spawn_node(
            NodeId::new(900),
            NodeKind::Tree,
            Vec2::new(1.0, 0.0),
        ));
        let mut pilot = Autopilot::new();

        assert!(pilot.poll(19, &state).actions.is_empty());
        assert_eq!(pilot.poll(20, &state).actions, vec![PlayerAction::Gather]);
    }

    #[test]
    fn crafts_before_harvesting() {
        let mut state = empty_state();
        state.player.inventory.wood = 5;
        state.player.inventory.stone = 2;

        let frame = Autopilot::new().poll(1, &state);
        assert_eq!(
            frame.actions,
            vec![PlayerAction::Craft {
                tool: ToolKind::Axe
            }]
        );

        let _ = apply_action(&mut state, PlayerAction::Craft { tool: ToolKind::Axe });
        assert!(Autopilot::new().poll(2, &state).actions.is_empty());
    }

    #[test]
    fn builds_each_kind_once() {
        let mut state = empty_state();
        state.player.tools.unlock(ToolKind::Axe);
        state.player.tools.unlock(ToolKind::Pickaxe);
        state.player.tools.unlock(ToolKind::Sword);
        state.player.inventory.wood = 10;
        state.player.inventory.stone = 5;
        let mut pilot = Autopilot::new();

        let frame = pilot.poll(1, &state);
        for action in frame.actions {
            assert!(apply_action(&mut state, action).is_applied());
        }
        assert_eq!(state.build.buildings().len(), 1);

        state.player.inventory.wood = 10;
        state.player.inventory.stone = 5;
        assert!(pilot.poll(2, &state).actions.is_empty());
    }

    #[test]
    fn fights_back_when_cornered() {
        let mut state = empty_state();
        state.creatures.insert(spawn_creature(
            CreatureId::new(700),
            CreatureKind::Troll,
            Vec2::new(2.0, 0.0),
            0.0,
        ));
        let frame = Autopilot::new().poll(40, &state);
        assert_eq!(frame.actions, vec![PlayerAction::Attack]);
        assert!(!frame.intent.is_moving());
    }
}
