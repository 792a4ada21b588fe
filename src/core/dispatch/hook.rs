//=========================================================================
// Hooks
//=========================================================================
//
// The closed set of per-frame and per-event callbacks an entity or stage
// may customize, plus the capability set roles use to declare which of
// them they implement.
//
// Game objects respond to `act`, stages to `update`; everything else is
// shared. The fixed expected lists drive the dispatcher's spelling
// diagnostics.
//
//=========================================================================

//=== Hook ================================================================

/// A named callback slot in the frame/event cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Hook {
    /// Per-frame rendering.
    Draw,

    /// Per-frame behavior of a game object.
    Act,

    /// Per-frame behavior of a stage.
    Update,

    OnKeyDown,
    OnKeyUp,
    OnMouseDown,
    OnMouseUp,
    OnMouseMove,
}

impl Hook {
    /// Canonical registration name of this hook.
    pub const fn name(self) -> &'static str {
        match self {
            Hook::Draw => "draw",
            Hook::Act => "act",
            Hook::Update => "update",
            Hook::OnKeyDown => "on_key_down",
            Hook::OnKeyUp => "on_key_up",
            Hook::OnMouseDown => "on_mouse_down",
            Hook::OnMouseUp => "on_mouse_up",
            Hook::OnMouseMove => "on_mouse_move",
        }
    }

    const fn bit(self) -> u16 {
        1 << self as u16
    }
}

/// Hooks a game object may define.
pub const GAMEOBJ_HOOKS: [Hook; 7] = [
    Hook::Draw,
    Hook::Act,
    Hook::OnKeyDown,
    Hook::OnKeyUp,
    Hook::OnMouseDown,
    Hook::OnMouseUp,
    Hook::OnMouseMove,
];

/// Hooks a stage may define.
pub const STAGE_HOOKS: [Hook; 7] = [
    Hook::Draw,
    Hook::Update,
    Hook::OnKeyDown,
    Hook::OnKeyUp,
    Hook::OnMouseDown,
    Hook::OnMouseUp,
    Hook::OnMouseMove,
];

//=== HookSet =============================================================

/// Bit set over [`Hook`] — the capability declaration of a role.
///
/// A role's hook method is only invoked when the corresponding hook is in
/// its declared set; undeclared hooks fall through to the (usually no-op)
/// default. Built up with `with` in const position:
///
/// ```
/// use stagecraft::core::dispatch::{Hook, HookSet};
///
/// const HOOKS: HookSet = HookSet::EMPTY.with(Hook::Draw).with(Hook::Act);
/// assert!(HOOKS.contains(Hook::Draw));
/// assert!(!HOOKS.contains(Hook::OnKeyDown));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HookSet(u16);

impl HookSet {
    /// No hooks declared.
    pub const EMPTY: HookSet = HookSet(0);

    /// Returns this set with `hook` added.
    pub const fn with(self, hook: Hook) -> HookSet {
        HookSet(self.0 | hook.bit())
    }

    /// Returns `true` if `hook` is declared.
    pub const fn contains(self, hook: Hook) -> bool {
        self.0 & hook.bit() != 0
    }

    /// Returns `true` if no hooks are declared.
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
