//! Tick callback that narrates the session through `tracing`.
//!
//! Toasts and kills are logged as they happen. Every
//! `logging.summary_interval_ticks` ticks a one-line status report is
//! emitted with the player's stats and pack.

use frostvale_core::{SimulationState, TickCallback, TickSummary};
use frostvale_types::{ActionOutcome, ActionResult, SimEvent};
use tracing::{debug, info, trace};

/// Callback that turns tick summaries into log lines.
pub struct LogCallback {
    summary_interval: u64,
    struck: u64,
    kills: u64,
}

impl LogCallback {
    /// Create a callback that reports status every `summary_interval`
    /// ticks. Zero disables the periodic report.
    pub const fn new(summary_interval: u64) -> Self {
        Self {
            summary_interval,
            struck: 0,
            kills: 0,
        }
    }

    /// Whether `tick` gets a status report.
    const fn is_report_tick(&self, tick: u64) -> bool {
        self.summary_interval > 0 && tick % self.summary_interval == 0
    }

    fn record(&mut self, tick: u64, event: &SimEvent) {
        match event {
            SimEvent::Toast { message, tone } => info!(tick, ?tone, "{message}"),
            SimEvent::CreatureSlain { id, kind, reward } => {
                self.kills = self.kills.saturating_add(1);
                info!(
                    tick,
                    creature = %id,
                    %kind,
                    food = reward.food,
                    leather = reward.leather,
                    "Creature slain"
                );
            }
            SimEvent::PlayerStruck { by, damage, health } => {
                self.struck = self.struck.saturating_add(1);
                debug!(tick, attacker = %by, damage, health, "Player struck");
            }
            SimEvent::NodeDepleted {
                id,
                resource,
                amount,
            } => debug!(tick, node = %id, %resource, amount, "Node depleted"),
            other => trace!(tick, event = ?other, "Event"),
        }
    }
}

impl TickCallback for LogCallback {
    fn on_tick(&mut self, summary: &TickSummary, state: &SimulationState) {
        for event in &summary.events {
            self.record(summary.tick, event);
        }

        if self.is_report_tick(summary.tick) {
            let hud = &summary.hud;
            info!(
                tick = summary.tick,
                health = hud.stats.health.current,
                hunger = hud.stats.hunger.current,
                stamina = hud.stats.stamina.current,
                wood = hud.inventory.wood,
                stone = hud.inventory.stone,
                food = hud.inventory.food,
                equipped = %hud.equipped,
                night = summary.lighting.is_night,
                nodes = state.resources.len(),
                creatures = state.creatures.len(),
                buildings = state.build.buildings().len(),
                struck = self.struck,
                kills = self.kills,
                "Status"
            );
        }
    }

    fn on_action(&mut self, result: &ActionResult, _state: &SimulationState) {
        if let ActionOutcome::Rejected { reason } = result.outcome {
            debug!(action = ?result.action, ?reason, "Action rejected");
        }
    }
}

#[cfg(test)]
mod tests {
    use frostvale_types::{CreatureId, CreatureKind, Inventory, ToastTone};

    use super::*;

    #[test]
    fn report_ticks_follow_the_interval() {
        let cb = LogCallback::new(600);
        assert!(!cb.is_report_tick(1));
        assert!(cb.is_report_tick(600));
        assert!(cb.is_report_tick(1_200));
        assert!(!LogCallback::new(0).is_report_tick(600));
    }

    #[test]
    fn kills_and_hits_are_counted() {
        let mut cb = LogCallback::new(0);
        cb.record(
            5,
            &SimEvent::CreatureSlain {
                id: CreatureId::new(3),
                kind: CreatureKind::Deer,
                reward: Inventory {
                    food: 2,
                    leather: 1,
                    ..Inventory::default()
                },
            },
        );
        cb.record(
            6,
            &SimEvent::PlayerStruck {
                by: CreatureId::new(4),
                damage: 15.0,
                health: 85.0,
            },
        );
        cb.record(7, &SimEvent::toast("Built house", ToastTone::Success));
        assert_eq!(cb.kills, 1);
        assert_eq!(cb.struck, 1);
    }
}
