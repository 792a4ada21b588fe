//=========================================================================
// Core Systems
//=========================================================================
//
// Platform-independent heart of the framework: scenes, entities, hook
// dispatch, input state and the drawing seam.
//
// Data flow per frame:
//   platform adapter → Production entry points
//     → base stage behavior (background, entity fan-out)
//     → Dispatcher (role / ad-hoc resolution, typo diagnostics)
//     → hooks, seeing the world through StageContext
//
//=========================================================================

//=== Module Declarations =================================================

pub mod canvas;
pub mod dispatch;
pub mod entity;
pub mod error;
pub mod input;
pub mod stage;
