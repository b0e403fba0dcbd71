//! Tick cycle: the fixed-order update that drives the Frostvale simulation.
//!
//! Each tick runs through these phases:
//!
//! 1. **Movement** -- integrate the player's [`MoveIntent`], spending or
//!    regenerating stamina.
//! 2. **Creatures** -- advance every creature's chase/wander state machine
//!    and apply the strikes it lands. A fatal strike ends the session as
//!    [`GameOverCause::Defeated`] and skips the survival phase.
//! 3. **Survival** -- hunger decay, starvation, and auto-eating. Zero
//!    health ends the session as [`GameOverCause::Starvation`].
//! 4. **Clock** -- advance simulated time by the tick interval and report
//!    day/night transitions.
//!
//! Discrete player actions are not part of the tick; the caller resolves
//! them with [`apply_action`](crate::actions::apply_action) between ticks.
//! Once the session has ended every further tick is inert.

use chrono::{DateTime, Utc};
use frostvale_survivor::{
    MovementConfig, VitalsConfig, apply_damage, apply_movement, apply_vital_tick, starting_stats,
};
use frostvale_types::{
    DayPhase, EntityRef, GameOverCause, HudSnapshot, IdSequence, Lighting, MoveIntent, Panel,
    Player, Pose, SessionId, SimEvent, Vec2,
};
use frostvale_world::{
    BehaviorConfig, CreaturePopulation, ResourceField, WorldError, create_starting_world,
    update_creatures,
};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use tracing::{debug, info, warn};

use crate::build::BuildSystem;
use crate::clock::{ClockError, WorldClock};
use crate::config::SimulationConfig;
use crate::hud;

/// Where the player stands when a session starts.
pub const PLAYER_SPAWN: Vec2 = Vec2::ZERO;

/// Errors that can occur while setting up a session.
#[derive(Debug, thiserror::Error)]
pub enum SetupError {
    /// The clock configuration is invalid.
    #[error("clock error: {source}")]
    Clock {
        /// The underlying clock error.
        #[from]
        source: ClockError,
    },

    /// The starting world could not be generated.
    #[error("world error: {source}")]
    World {
        /// The underlying world error.
        #[from]
        source: WorldError,
    },

    /// The tick interval is not a positive finite number.
    #[error("invalid tick interval: {value} ms")]
    InvalidTickInterval {
        /// The rejected interval.
        value: f64,
    },

    /// A stat maximum is not a positive finite number.
    #[error("invalid {stat} maximum: {value}")]
    InvalidStatMax {
        /// Which stat (`health`, `hunger` or `stamina`).
        stat: &'static str,
        /// The rejected maximum.
        value: f64,
    },
}

/// Everything a tick produced, for the render and UI layers.
#[derive(Debug, Clone, PartialEq)]
pub struct TickSummary {
    /// The tick number that was executed.
    pub tick: u64,
    /// Events emitted during the tick, in order.
    pub events: Vec<SimEvent>,
    /// Player pose followed by every creature pose.
    pub poses: Vec<Pose>,
    /// Light levels after the clock advanced.
    pub lighting: Lighting,
    /// HUD state after the tick.
    pub hud: HudSnapshot,
    /// Set once the session has ended.
    pub game_over: Option<GameOverCause>,
}

/// The mutable simulation state passed through the tick cycle.
///
/// Owns the player, the world, the clock, the RNG, and the id sequence.
/// Components receive borrows of exactly the parts they operate on.
#[derive(Debug)]
pub struct SimulationState {
    /// Identifier stamped on every log line of the session.
    pub session_id: SessionId,
    /// Wall-clock time the session was created.
    pub started_at: DateTime<Utc>,
    /// The player character.
    pub player: Player,
    /// The world clock.
    pub clock: WorldClock,
    /// Live resource nodes.
    pub resources: ResourceField,
    /// Live creatures.
    pub creatures: CreaturePopulation,
    /// Build stage and placed buildings.
    pub build: BuildSystem,
    /// Open menu panel.
    pub panel: Panel,
    /// Set once the session has ended.
    pub game_over: Option<GameOverCause>,
    /// Entity id source.
    pub ids: IdSequence,
    /// Session RNG, seeded from `world.seed`.
    pub rng: SmallRng,
    /// The configuration the session was built from.
    pub config: SimulationConfig,
    /// Survival tunables.
    pub vitals_config: VitalsConfig,
    /// Movement tunables.
    pub movement_config: MovementConfig,
    /// Creature tunables.
    pub behavior_config: BehaviorConfig,
    /// Spawn events waiting for the first tick.
    pending_events: Vec<SimEvent>,
}

impl SimulationState {
    /// Create a session: seed the RNG, generate the starting world, and
    /// place a fresh player at [`PLAYER_SPAWN`].
    ///
    /// The spawn events are reported by the first tick.
    pub fn new(config: SimulationConfig) -> Result<Self, SetupError> {
        let interval = config.world.tick_interval_ms;
        if !(interval.is_finite() && interval > 0.0) {
            return Err(SetupError::InvalidTickInterval { value: interval });
        }
        let survival = &config.survival;
        for (stat, value) in [
            ("health", survival.max_health),
            ("hunger", survival.max_hunger),
            ("stamina", survival.max_stamina),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(SetupError::InvalidStatMax { stat, value });
            }
        }

        let clock = WorldClock::new(&config.time)?;
        let mut rng = SmallRng::seed_from_u64(config.world.seed);
        let mut ids = IdSequence::new();
        let world = create_starting_world(&config.generation(), PLAYER_SPAWN, &mut ids, &mut rng)?;

        let vitals_config = config.vitals();
        let player = Player::new(PLAYER_SPAWN, starting_stats(&vitals_config));
        let session_id = SessionId::new();

        info!(
            %session_id,
            name = %config.world.name,
            seed = config.world.seed,
            nodes = world.resources.len(),
            creatures = world.creatures.len(),
            "Session created"
        );

        Ok(Self {
            session_id,
            started_at: Utc::now(),
            player,
            clock,
            resources: world.resources,
            creatures: world.creatures,
            build: BuildSystem::new(),
            panel: Panel::Closed,
            game_over: None,
            ids,
            rng,
            movement_config: config.movement(),
            behavior_config: config.behavior(),
            vitals_config,
            config,
            pending_events: world.events,
        })
    }

    /// Whether the session has ended.
    pub const fn is_over(&self) -> bool {
        self.game_over.is_some()
    }

    /// Player pose followed by every creature pose in id order.
    pub fn poses(&self) -> Vec<Pose> {
        let player = Pose {
            entity: EntityRef::Player,
            position: self.player.position,
            facing: self.player.facing,
        };
        core::iter::once(player)
            .chain(self.creatures.poses())
            .collect()
    }

    fn summary(&self, tick: u64, events: Vec<SimEvent>) -> TickSummary {
        TickSummary {
            tick,
            events,
            poses: self.poses(),
            lighting: self.clock.lighting(),
            hud: hud::hud_snapshot(self),
            game_over: self.game_over,
        }
    }

    fn end_session(&mut self, cause: GameOverCause, tick: u64, events: &mut Vec<SimEvent>) {
        self.game_over = Some(cause);
        info!(session_id = %self.session_id, tick, %cause, "Game over");
        events.push(SimEvent::GameOver { cause, tick });
    }
}

/// Execute one tick of the simulation with the given movement intent.
///
/// # Phases
///
/// 1. Movement
/// 2. Creatures
/// 3. Survival
/// 4. Clock
pub fn run_tick(state: &mut SimulationState, intent: &MoveIntent) -> TickSummary {
    if state.is_over() {
        return state.summary(state.clock.tick(), Vec::new());
    }

    let mut events = core::mem::take(&mut state.pending_events);
    let tick = state.clock.tick().saturating_add(1);
    debug!(tick, "Tick started");

    // --- Phase 1: Movement ---
    let step = apply_movement(&mut state.player, intent, &state.movement_config);
    if step.blocked {
        debug!(tick, "Step blocked by world edge");
    }

    // --- Phase 2: Creatures ---
    let strikes = update_creatures(
        &mut state.creatures,
        state.player.position,
        &state.behavior_config,
        &mut state.rng,
    );
    for strike in strikes {
        let fatal = apply_damage(&mut state.player.stats, strike.damage);
        let health = state.player.stats.health.current;
        debug!(tick, attacker = %strike.by, damage = strike.damage, health, "Player struck");
        events.push(SimEvent::PlayerStruck {
            by: strike.by,
            damage: strike.damage,
            health,
        });
        if fatal {
            state.end_session(GameOverCause::Defeated, tick, &mut events);
            break;
        }
    }

    // --- Phase 3: Survival ---
    if !state.is_over() {
        let vital = apply_vital_tick(
            &mut state.player.stats,
            &mut state.player.inventory,
            &state.vitals_config,
        );
        if vital.ate {
            events.push(SimEvent::FoodEaten {
                hunger: state.player.stats.hunger.current,
                food_left: state.player.inventory.food,
            });
        }
        if let Some(cause) = vital.death {
            state.end_session(cause, tick, &mut events);
        }
    }

    // --- Phase 4: Clock ---
    match state.clock.advance(state.config.world.tick_interval_ms) {
        Ok(advance) => {
            if let Some(phase) = advance.transition {
                match phase {
                    DayPhase::Night => info!(tick, "Night falls"),
                    DayPhase::Day => info!(tick, "Dawn breaks"),
                }
                events.push(SimEvent::PhaseChanged { phase });
            }
        }
        Err(err) => warn!(tick, %err, "Clock did not advance"),
    }

    state.summary(tick, events)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
