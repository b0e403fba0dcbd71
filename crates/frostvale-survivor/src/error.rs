//! Error types for the frostvale-survivor crate.
//!
//! Inventory and crafting operations return these instead of panicking.
//! The action dispatcher in `frostvale-core` maps each one onto the
//! [`RejectionReason`] reported back to the input layer.

use frostvale_types::{RejectionReason, ResourceKind, ToolKind};

/// Errors raised by inventory, crafting, and tool selection.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SurvivorError {
    /// A cost could not be paid from the carried inventory.
    #[error("insufficient resource: wanted {requested} of {resource} but only have {available}")]
    InsufficientResource {
        /// The first resource found short.
        resource: ResourceKind,
        /// The quantity the cost asked for.
        requested: u32,
        /// The quantity actually carried.
        available: u32,
    },

    /// Tried to equip a tool that has not been crafted.
    #[error("tool is locked: {0}")]
    ToolLocked(ToolKind),

    /// The tool has no recipe.
    #[error("tool cannot be crafted: {0}")]
    NotCraftable(ToolKind),

    /// A hotbar slot outside `1..=7`.
    #[error("no tool in hotbar slot {0}")]
    InvalidSlot(u8),
}

impl SurvivorError {
    /// The rejection reported to the input layer for this error.
    pub const fn rejection(&self) -> RejectionReason {
        match self {
            Self::InsufficientResource { .. } => RejectionReason::InsufficientResources,
            Self::ToolLocked(_) => RejectionReason::ToolLocked,
            Self::NotCraftable(_) => RejectionReason::NotCraftable,
            Self::InvalidSlot(_) => RejectionReason::InvalidSlot,
        }
    }
}
