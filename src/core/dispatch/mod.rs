//=========================================================================
// Dispatch System
//=========================================================================
//
// Hook resolution: default behavior, role overrides, ad-hoc per-instance
// overrides, and one-time typo diagnostics.
//
// Architecture:
//   Production entry point
//     └─ Dispatcher::dispatch_entity / dispatch_stage
//          ├─ base implementation (always, first)
//          ├─ role HookSet  — OR —  name-keyed HookMap (exactly one)
//          └─ spellcheck on the not-found branch (once per kind)
//
//=========================================================================

//=== Module Declarations =================================================

mod dispatcher;
mod hook;
mod hook_map;
pub mod spellcheck;

//=== Public API ==========================================================

pub use dispatcher::Dispatcher;
pub use hook::{Hook, HookSet, GAMEOBJ_HOOKS, STAGE_HOOKS};
pub use hook_map::{HookFn, HookMap, NamedHooks, StageHookFn, StageHookMap};

//=== Crate-internal API ==================================================

pub(crate) use dispatcher::HookArgs;
