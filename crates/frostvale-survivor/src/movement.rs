//! Player movement integration.
//!
//! Each tick the input layer reports a [`MoveIntent`]. Held directions are
//! summed, normalized, and scaled by the walking speed; running multiplies
//! the step and spends stamina. A step that would leave the world square is
//! dropped whole. Standing still regenerates stamina.

use frostvale_types::{MoveIntent, Player};

use crate::config::MovementConfig;

/// What the movement step did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MoveOutcome {
    /// The position changed.
    pub moved: bool,
    /// A step was attempted but hit the world edge.
    pub blocked: bool,
    /// The step was taken at running speed.
    pub ran: bool,
}

/// Advance the player by one tick of `intent`.
///
/// Movement needs stamina above zero; running needs it above the run
/// threshold. Facing follows the step direction even when the wall
/// rejects the step.
pub fn apply_movement(
    player: &mut Player,
    intent: &MoveIntent,
    config: &MovementConfig,
) -> MoveOutcome {
    let mut outcome = MoveOutcome::default();
    let direction = intent.axis().normalized();
    let stamina = &mut player.stats.stamina;

    if direction.length() > 0.0 && stamina.current > 0.0 {
        let mut step = direction.scaled(config.base_speed);
        if intent.run && stamina.current > config.run_stamina_threshold {
            step = step.scaled(config.run_multiplier);
            stamina.current -= config.run_stamina_cost;
            outcome.ran = true;
        }

        let candidate = player.position + step;
        if candidate.within(config.half_extent()) {
            player.position = candidate;
            outcome.moved = true;
        } else {
            outcome.blocked = true;
        }
        player.facing = step.x.atan2(step.z);
    }

    // Opposite keys cancel the step but still count as held.
    if !intent.is_moving() && stamina.current < stamina.max {
        stamina.current = (stamina.current + config.stamina_regen).min(stamina.max);
    }

    outcome
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use frostvale_types::{Stats, Vec2};

    use super::*;

    fn player_at(x: f64, z: f64) -> Player {
        Player::new(Vec2::new(x, z), Stats::default())
    }

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    const RIGHT: MoveIntent = MoveIntent {
        right: true,
        ..MoveIntent::IDLE
    };

    #[test]
    fn walking_right_moves_half_unit() {
        let mut player = player_at(0.0, 0.0);
        let outcome = apply_movement(&mut player, &RIGHT, &MovementConfig::default());
        assert!(outcome.moved);
        assert!(approx(player.position.x, 0.5));
        assert!(approx(player.position.z, 0.0));
        assert!(approx(player.facing, core::f64::consts::FRAC_PI_2));
        assert!(approx(player.stats.stamina.current, 100.0));
    }

    #[test]
    fn diagonal_step_is_normalized() {
        let mut player = player_at(0.0, 0.0);
        let intent = MoveIntent {
            up: true,
            left: true,
            ..MoveIntent::IDLE
        };
        apply_movement(&mut player, &intent, &MovementConfig::default());
        assert!(approx(player.position.length(), 0.5));
        assert!(player.position.x < 0.0 && player.position.z < 0.0);
    }

    #[test]
    fn running_is_faster_and_costs_stamina() {
        let mut player = player_at(0.0, 0.0);
        let intent = MoveIntent {
            run: true,
            ..RIGHT
        };
        let outcome = apply_movement(&mut player, &intent, &MovementConfig::default());
        assert!(outcome.ran);
        assert!(approx(player.position.x, 0.75));
        assert!(approx(player.stats.stamina.current, 99.5));
    }

    #[test]
    fn running_needs_stamina_above_threshold() {
        let mut player = player_at(0.0, 0.0);
        player.stats.stamina.current = 10.0;
        let intent = MoveIntent {
            run: true,
            ..RIGHT
        };
        let outcome = apply_movement(&mut player, &intent, &MovementConfig::default());
        assert!(!outcome.ran);
        assert!(approx(player.position.x, 0.5));
        assert!(approx(player.stats.stamina.current, 10.0));
    }

    #[test]
    fn exhausted_player_cannot_move() {
        let mut player = player_at(0.0, 0.0);
        player.stats.stamina.current = 0.0;
        let outcome = apply_movement(&mut player, &RIGHT, &MovementConfig::default());
        assert_eq!(outcome, MoveOutcome::default());
        assert_eq!(player.position, Vec2::ZERO);
        // Holding a key blocks regeneration.
        assert!(approx(player.stats.stamina.current, 0.0));
    }

    #[test]
    fn wall_rejects_whole_step_but_turns_player() {
        let mut player = player_at(149.7, 10.0);
        let outcome = apply_movement(&mut player, &RIGHT, &MovementConfig::default());
        assert!(outcome.blocked);
        assert!(!outcome.moved);
        assert!(approx(player.position.x, 149.7));
        assert!(approx(player.facing, core::f64::consts::FRAC_PI_2));
    }

    #[test]
    fn idle_regenerates_up_to_max() {
        let mut player = player_at(0.0, 0.0);
        player.stats.stamina.current = 99.9;
        apply_movement(&mut player, &MoveIntent::IDLE, &MovementConfig::default());
        assert!(approx(player.stats.stamina.current, 100.0));
        player.stats.stamina.current = 50.0;
        apply_movement(&mut player, &MoveIntent::IDLE, &MovementConfig::default());
        assert!(approx(player.stats.stamina.current, 50.3));
    }

    #[test]
    fn opposite_keys_neither_move_nor_regenerate() {
        let mut player = player_at(0.0, 0.0);
        player.stats.stamina.current = 50.0;
        let intent = MoveIntent {
            left: true,
            right: true,
            ..MoveIntent::IDLE
        };
        let outcome = apply_movement(&mut player, &intent, &MovementConfig::default());
        assert!(!outcome.moved);
        assert!(approx(player.stats.stamina.current, 50.0));
    }

    #[test]
    fn player_never_leaves_the_square() {
        let config = MovementConfig::default();
        let mut player = player_at(0.0, 0.0);
        let intent = MoveIntent {
            down: true,
            right: true,
            run: true,
            ..MoveIntent::IDLE
        };
        for _ in 0..2_000 {
            apply_movement(&mut player, &intent, &config);
            assert!(player.position.within(config.half_extent()));
        }
    }
}
