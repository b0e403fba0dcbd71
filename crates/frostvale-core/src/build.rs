//! Build mode and placed structures.
//!
//! Building is a two-step flow. [`BuildSystem::enter_build_mode`] stages a
//! blueprint after checking the player can afford it, without charging
//! anything. The cursor position may then be previewed any number of
//! times. [`BuildSystem::confirm_placement`] checks the cost again against
//! the same blueprint table, deducts it, and records the [`Building`].

use std::collections::BTreeMap;

use frostvale_survivor::{SurvivorError, inventory};
use frostvale_types::{
    BuildStageView, Building, BuildingKind, IdSequence, Inventory, RejectionReason, Vec2,
};
use frostvale_world::blueprint;
use tracing::{debug, info};

/// Errors from the build flow.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BuildError {
    /// Placement was confirmed with nothing staged.
    #[error("no building is staged")]
    NotInBuildMode,

    /// The player cannot pay for the building.
    #[error("cannot afford building: {0}")]
    Unaffordable(#[from] SurvivorError),
}

impl BuildError {
    /// The rejection reported back to the input layer.
    pub const fn rejection(&self) -> RejectionReason {
        match self {
            Self::NotInBuildMode => RejectionReason::NotInBuildMode,
            Self::Unaffordable(err) => err.rejection(),
        }
    }
}

/// A building waiting for placement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BuildStage {
    /// What will be built.
    pub kind: BuildingKind,
    /// Last previewed cursor position.
    pub preview: Option<Vec2>,
}

/// Staged ghost plus every building placed this session.
#[derive(Debug, Clone, Default)]
pub struct BuildSystem {
    stage: Option<BuildStage>,
    buildings: Vec<Building>,
}

impl BuildSystem {
    /// Nothing staged, nothing built.
    pub const fn new() -> Self {
        Self {
            stage: None,
            buildings: Vec::new(),
        }
    }

    /// The staged building, if any.
    pub const fn stage(&self) -> Option<&BuildStage> {
        self.stage.as_ref()
    }

    /// Whether a building is staged.
    pub const fn is_staged(&self) -> bool {
        self.stage.is_some()
    }

    /// Placed buildings in placement order.
    pub fn buildings(&self) -> &[Building] {
        &self.buildings
    }

    /// Stage `kind` for placement. Charges nothing.
    ///
    /// Any previous stage is replaced.
    pub fn enter_build_mode(
        &mut self,
        kind: BuildingKind,
        inventory: &Inventory,
    ) -> Result<(), BuildError> {
        if let Some(missing) = inventory::shortfall(inventory, &blueprint(kind).cost) {
            return Err(missing.into());
        }
        self.stage = Some(BuildStage {
            kind,
            preview: None,
        });
        debug!(%kind, "Build mode entered");
        Ok(())
    }

    /// Move the ghost to `position`. Returns `false` with nothing staged.
    pub const fn preview(&mut self, position: Vec2) -> bool {
        match self.stage.as_mut() {
            Some(stage) => {
                stage.preview = Some(position);
                true
            }
            None => false,
        }
    }

    /// Pay for and place the staged building at `position`.
    ///
    /// The stage is cleared on success and kept on failure.
    pub fn confirm_placement(
        &mut self,
        position: Vec2,
        inventory: &mut Inventory,
        ids: &mut IdSequence,
        tick: u64,
    ) -> Result<Building, BuildError> {
        let stage = self.stage.ok_or(BuildError::NotInBuildMode)?;
        let plan = blueprint(stage.kind);
        inventory::spend(inventory, &plan.cost)?;

        let building = Building {
            id: ids.building(),
            kind: stage.kind,
            position,
            cost: plan.cost,
            placed_at_tick: tick,
        };
        self.stage = None;
        self.buildings.push(building.clone());
        info!(
            building = %building.id,
            kind = %building.kind,
            x = position.x,
            z = position.z,
            "Building placed"
        );
        Ok(building)
    }

    /// Discard the stage. Returns what was staged.
    pub fn cancel(&mut self) -> Option<BuildingKind> {
        self.stage.take().map(|stage| stage.kind)
    }

    /// The stage as shown to the player.
    pub fn stage_view(&self, inventory: &Inventory) -> Option<BuildStageView> {
        self.stage.map(|stage| BuildStageView {
            kind: stage.kind,
            preview: stage.preview,
            affordable: inventory::can_afford(inventory, &blueprint(stage.kind).cost),
        })
    }
}

/// Whether each building kind is currently affordable.
pub fn build_affordability(inventory: &Inventory) -> BTreeMap<BuildingKind, bool> {
    BuildingKind::ALL
        .iter()
        .map(|kind| (*kind, inventory::can_afford(inventory, &blueprint(*kind).cost)))
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use frostvale_types::{BuildingId, ResourceKind};

    use super::*;

    fn pack(wood: u32, stone: u32, iron: u32) -> Inventory {
        Inventory {
            wood,
            stone,
            iron,
            ..Inventory::default()
        }
    }

    #[test]
    fn house_placement_charges_on_confirm_only() {
        let mut build = BuildSystem::new();
        let mut inv = pack(10, 5, 0);
        let mut ids = IdSequence::new();

        assert!(build.enter_build_mode(BuildingKind::House, &inv).is_ok());
        assert_eq!(inv, pack(10, 5, 0));
        assert!(build.preview(Vec2::new(3.0, 4.0)));

        let placed = build
            .confirm_placement(Vec2::new(5.0, 5.0), &mut inv, &mut ids, 12)
            .unwrap();
        assert_eq!(placed.kind, BuildingKind::House);
        assert_eq!(placed.placed_at_tick, 12);
        assert_eq!(placed.id, BuildingId::new(1));
        assert_eq!(inv, Inventory::default());
        assert!(!build.is_staged());
        assert_eq!(build.buildings().len(), 1);
    }

    #[test]
    fn unaffordable_stage_is_refused() {
        let mut build = BuildSystem::new();
        let result = build.enter_build_mode(BuildingKind::Workshop, &pack(20, 8, 4));
        assert!(matches!(
            result,
            Err(BuildError::Unaffordable(SurvivorError::InsufficientResource {
                resource: ResourceKind::Iron,
                ..
            }))
        ));
        assert!(!build.is_staged());
        assert_eq!(
            result.err().map(|e| e.rejection()),
            Some(RejectionReason::InsufficientResources)
        );
    }

    #[test]
    fn confirm_rechecks_cost_and_keeps_stage() {
        let mut build = BuildSystem::new();
        let mut inv = pack(12, 3, 0);
        let mut ids = IdSequence::new();
        assert!(build.enter_build_mode(BuildingKind::Farm, &inv).is_ok());

        inv.wood = 11;
        let result = build.confirm_placement(Vec2::ZERO, &mut inv, &mut ids, 0);
        assert!(matches!(result, Err(BuildError::Unaffordable(_))));
        assert_eq!(inv, pack(11, 3, 0));
        assert!(build.is_staged());
        assert!(build.buildings().is_empty());
    }

    #[test]
    fn confirm_without_stage_is_rejected() {
        let mut build = BuildSystem::new();
        let mut inv = pack(100, 100, 100);
        let mut ids = IdSequence::new();
        let result = build.confirm_placement(Vec2::ZERO, &mut inv, &mut ids, 0);
        assert_eq!(result.err(), Some(BuildError::NotInBuildMode));
        assert_eq!(inv, pack(100, 100, 100));
    }

    #[test]
    fn cancel_discards_stage() {
        let mut build = BuildSystem::new();
        assert!(build.enter_build_mode(BuildingKind::House, &pack(10, 5, 0)).is_ok());
        assert_eq!(build.cancel(), Some(BuildingKind::House));
        assert_eq!(build.cancel(), None);
        assert!(!build.preview(Vec2::ZERO));
    }

    #[test]
    fn restaging_replaces_the_ghost() {
        let mut build = BuildSystem::new();
        let inv = pack(20, 10, 0);
        assert!(build.enter_build_mode(BuildingKind::House, &inv).is_ok());
        build.preview(Vec2::new(1.0, 1.0));
        assert!(build.enter_build_mode(BuildingKind::Watchtower, &inv).is_ok());
        let view = build.stage_view(&inv);
        assert_eq!(
            view,
            Some(BuildStageView {
                kind: BuildingKind::Watchtower,
                preview: None,
                affordable: true,
            })
        );
    }

    #[test]
    fn affordability_covers_every_kind() {
        let flags = build_affordability(&pack(12, 5, 0));
        assert_eq!(flags.len(), 4);
        assert_eq!(flags.get(&BuildingKind::House), Some(&true));
        assert_eq!(flags.get(&BuildingKind::Farm), Some(&true));
        assert_eq!(flags.get(&BuildingKind::Watchtower), Some(&false));
        assert_eq!(flags.get(&BuildingKind::Workshop), Some(&false));
    }
}
