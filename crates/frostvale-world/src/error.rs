//! Error types for the `frostvale-world` crate.
//!
//! World generation is the only fallible operation here; per-tick creature
//! updates and gathering never fail.

/// Errors that can occur while generating the starting world.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WorldError {
    /// No free spot was found for an entity within the attempt limit.
    #[error("could not place {what} after {attempts} attempts")]
    PlacementExhausted {
        /// What was being placed (e.g. `"tree"`, `"troll"`).
        what: String,
        /// How many candidate spots were tried.
        attempts: u32,
    },

    /// The generation settings cannot produce a world.
    #[error("invalid generation config: {reason}")]
    InvalidConfig {
        /// Description of the problem.
        reason: String,
    },
}
