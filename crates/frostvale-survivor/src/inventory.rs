//! Resource accounting against the player's carried [`Inventory`].
//!
//! Costs are [`ResourceCost`] maps. Spending is all-or-nothing: every
//! threshold is checked before any count is touched. Credits saturate at
//! `u32::MAX` rather than wrapping.

use frostvale_types::{Inventory, ResourceCost, ResourceKind};

use crate::error::SurvivorError;

/// Check whether the inventory holds at least `amount` of `resource`.
pub const fn has_resource(inventory: &Inventory, resource: ResourceKind, amount: u32) -> bool {
    inventory.count(resource) >= amount
}

/// Check whether every entry of `cost` is covered.
pub fn can_afford(inventory: &Inventory, cost: &ResourceCost) -> bool {
    shortfall(inventory, cost).is_none()
}

/// The first resource (in kind order) that `cost` asks more of than is held.
pub fn shortfall(inventory: &Inventory, cost: &ResourceCost) -> Option<SurvivorError> {
    cost.iter().find_map(|(resource, requested)| {
        let available = inventory.count(*resource);
        (available < *requested).then_some(SurvivorError::InsufficientResource {
            resource: *resource,
            requested: *requested,
            available,
        })
    })
}

/// Deduct `cost` from the inventory.
///
/// Fails without touching any count if a single entry is short.
pub fn spend(inventory: &mut Inventory, cost: &ResourceCost) -> Result<(), SurvivorError> {
    if let Some(err) = shortfall(inventory, cost) {
        return Err(err);
    }
    for (resource, amount) in cost {
        let slot = inventory.slot_mut(*resource);
        *slot = slot.saturating_sub(*amount);
    }
    Ok(())
}

/// Add `amount` units of `resource`.
pub const fn credit(inventory: &mut Inventory, resource: ResourceKind, amount: u32) {
    let slot = inventory.slot_mut(resource);
    *slot = slot.saturating_add(amount);
}

/// Add every count of `other` to the inventory.
pub fn credit_all(inventory: &mut Inventory, other: &Inventory) {
    for resource in ResourceKind::ALL {
        credit(inventory, resource, other.count(resource));
    }
}

/// Remove one unit of `resource` if any is held. Returns whether one was taken.
pub const fn take_one(inventory: &mut Inventory, resource: ResourceKind) -> bool {
    let slot = inventory.slot_mut(resource);
    if *slot > 0 {
        *slot -= 1;
        true
    } else {
        false
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
