//=========================================================================
// Errors
//=========================================================================
//
// Structural-misuse and precondition errors for stage management.
//
// These signal programming bugs, not recoverable conditions: no retries,
// no automatic correction. They propagate to the frame loop, which is
// expected to halt the affected operation.
//
// Likely-typo hook names are NOT errors; they are one-time `log::warn!`
// diagnostics emitted by the dispatcher.
//
//=========================================================================

//=== External Dependencies ===============================================

use thiserror::Error;

//=== Internal Dependencies ===============================================

use crate::core::entity::EntityId;

//=== StageError ==========================================================

/// Errors raised by stage-management and attachment-requiring operations.
///
/// All variants indicate structural misuse (wrong lifecycle order, stale
/// ids) rather than runtime conditions a game should handle.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StageError {
    /// The game object has not been added to a stage.
    ///
    /// Raised by `leave`, `can_move`, `is_beyond_stage_edge` and friends
    /// when the entity is detached.
    #[error("game object {0:?} has not been added to a stage")]
    NotOnStage(EntityId),

    /// No entity with this id exists in the arena (never spawned, or
    /// already despawned).
    #[error("game object {0:?} does not exist")]
    UnknownEntity(EntityId),

    /// The stage key has not been registered with the production.
    #[error("stage {0} is not registered")]
    UnknownStage(String),

    /// `orbit` was called on an entity without a configured orbit center.
    #[error("game object {0:?} has no orbit center")]
    NoOrbitCenter(EntityId),

    /// The configured orbit center has been despawned.
    #[error("orbit center {0:?} no longer exists")]
    OrbitCenterGone(EntityId),
}
