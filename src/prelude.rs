//=========================================================================
// Prelude
//=========================================================================
//
// Convenience module that re-exports commonly used types and traits.
//
// Usage:
//   use stagecraft::prelude::*;
//
//=========================================================================

//=== Public API ==========================================================

// Production and platform runner
pub use crate::core::stage::{Production, ProductionBuilder};
pub use crate::{Platform, PlatformError, Renderer};

// Stages
pub use crate::core::stage::{Stage, StageContext, StageKey, StageRole};

// Entities
pub use crate::core::entity::{
    DebugDraw, EntityId, GameObj, GameObjBuilder, Mask, Role, Sprite,
};

// Dispatch
pub use crate::core::dispatch::{Hook, HookFn, HookSet, StageHookFn};

// Input
pub use crate::core::input::{
    ButtonSet, KeyCode, KeyEvent, Modifiers, MouseButton, MouseEvent, MouseState,
};

// Drawing seam
pub use crate::core::canvas::{Canvas, Color, Rect, StageBounds};

// Errors
pub use crate::core::error::StageError;

// Re-exported math type used throughout the public API
pub use glam::Vec2;
