//! HUD snapshot assembly.

use frostvale_survivor::crafting::craft_affordability;
use frostvale_types::HudSnapshot;

use crate::build::build_affordability;
use crate::tick::SimulationState;

/// Capture everything the HUD and menus display.
pub fn hud_snapshot(state: &SimulationState) -> HudSnapshot {
    let player = &state.player;
    HudSnapshot {
        tick: state.clock.tick(),
        stats: player.stats,
        inventory: player.inventory,
        equipped: player.tools.equipped(),
        unlocked: player.tools.unlocked().collect(),
        craftable: craft_affordability(&player.inventory),
        buildable: build_affordability(&player.inventory),
        panel: state.panel,
        build_stage: state.build.stage_view(&player.inventory),
        game_over: state.is_over(),
    }
}
