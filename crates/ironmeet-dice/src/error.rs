//! Error types for the resolution engine.

use thiserror::Error;

/// Result type for resolution operations.
pub type ResolveResult<T> = Result<T, ResolveError>;

/// Errors produced by the resolution state machine.
///
/// Both variants are invalid-state errors: the surrounding UI drove the
/// two-phase cycle out of order. The resolver state is left unchanged so
/// the caller can recover.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// A new roll was requested while another is awaiting a Renown decision.
    #[error("a roll is already awaiting a renown decision")]
    RollInFlight,

    /// A decision arrived with no suspended roll to apply it to.
    #[error("no roll is awaiting a renown decision")]
    NoPendingChoice,
}
