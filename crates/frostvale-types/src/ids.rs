//! Type-safe identifier wrappers.
//!
//! Entities inside a session get sequential `u64` identifiers handed out by
//! a single [`IdSequence`]. Sequential ids give every entity collection a
//! stable total order, which the nearest-target search relies on to break
//! distance ties deterministically.
//!
//! Sessions themselves are identified by a [`SessionId`] (UUID v7) so that
//! log lines from separate runs can be told apart.

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

/// Generates a newtype wrapper around a sequential `u64` with standard derives.
macro_rules! define_id {
    (
        $(#[$meta:meta])*
        $name:ident
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
        #[ts(export, export_to = "bindings/")]
        pub struct $name(pub u64);

        impl $name {
            /// Wrap a raw sequence value.
            pub const fn new(raw: u64) -> Self {
                Self(raw)
            }

            /// Return the inner `u64` value.
            pub const fn into_inner(self) -> u64 {
                self.0
            }
        }

        impl core::fmt::Display for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<u64> for $name {
            fn from(raw: u64) -> Self {
                Self(raw)
            }
        }
    };
}

define_id! {
    /// Unique identifier for a gatherable resource node.
    NodeId
}

define_id! {
    /// Unique identifier for a creature (hostile or passive).
    CreatureId
}

define_id! {
    /// Unique identifier for a player-built structure.
    BuildingId
}

/// Monotonic source of entity identifiers for one session.
///
/// Every id kind draws from the same counter, so no two entities in a
/// session ever share a raw value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdSequence {
    next: u64,
}

impl Default for IdSequence {
    fn default() -> Self {
        Self::new()
    }
}

impl IdSequence {
    /// Create a sequence starting at 1.
    pub const fn new() -> Self {
        Self { next: 1 }
    }

    /// Take the next raw value.
    pub const fn next_raw(&mut self) -> u64 {
        let raw = self.next;
        self.next = self.next.saturating_add(1);
        raw
    }

    /// Allocate a [`NodeId`].
    pub const fn node(&mut self) -> NodeId {
        NodeId(self.next_raw())
    }

    /// Allocate a [`CreatureId`].
    pub const fn creature(&mut self) -> CreatureId {
        CreatureId(self.next_raw())
    }

    /// Allocate a [`BuildingId`].
    pub const fn building(&mut self) -> BuildingId {
        BuildingId(self.next_raw())
    }
}

/// Unique identifier for a play session (UUID v7, time-ordered).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct SessionId(pub Uuid);

impl SessionId {
    /// Create a new session identifier.
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Display for SessionId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}
