//! Building blueprints.
//!
//! [`blueprint`] returns the static cost and passive effect for each
//! [`BuildingKind`]. Effects are declared for the presentation layer and
//! future systems; the tick cycle does not apply them.

use std::collections::BTreeMap;

use frostvale_types::{BuildingEffect, BuildingKind, ResourceCost, ResourceKind};

/// Static description of a building type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildingBlueprint {
    /// The building this describes.
    pub kind: BuildingKind,
    /// Resources deducted on placement.
    pub cost: ResourceCost,
    /// Passive effect once standing.
    pub effect: BuildingEffect,
}

/// Return the canonical blueprint for `kind`.
pub fn blueprint(kind: BuildingKind) -> BuildingBlueprint {
    let (cost, effect) = match kind {
        BuildingKind::House => (
            BTreeMap::from([(ResourceKind::Wood, 10), (ResourceKind::Stone, 5)]),
            BuildingEffect::NightShelter,
        ),
        BuildingKind::Watchtower => (
            BTreeMap::from([(ResourceKind::Wood, 15), (ResourceKind::Stone, 10)]),
            BuildingEffect::Lookout,
        ),
        BuildingKind::Workshop => (
            BTreeMap::from([
                (ResourceKind::Wood, 20),
                (ResourceKind::Stone, 8),
                (ResourceKind::Iron, 5),
            ]),
            BuildingEffect::CraftingStation,
        ),
        BuildingKind::Farm => (
            BTreeMap::from([(ResourceKind::Wood, 12), (ResourceKind::Stone, 3)]),
            BuildingEffect::FoodProduction,
        ),
    };
    BuildingBlueprint { kind, cost, effect }
}
