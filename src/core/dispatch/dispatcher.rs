//=========================================================================
// Dispatcher
//=========================================================================
//
// Decides, per entity and hook, what actually runs.
//
// Contract for every dispatch:
//   1. The base implementation runs first, exactly once (for entities
//      that is the sprite draw with debug overlays on `draw`, a no-op on
//      everything else; for stages the background paint and entity
//      fan-out, which the production performs before handing over here).
//   2. Exactly one override strategy is consulted: a role's declared
//      hook set when a role is attached, otherwise the instance's
//      name-keyed hook map. At most one override runs.
//   3. On a miss with registered names present, a one-time diagnostic
//      per kind name fuzzy-compares the registered names against the
//      expected hook list and logs suggestions.
//   4. Otherwise the miss is a silent no-op — most hooks are optional.
//
// The diagnostic registry is owned here, not global: one `Dispatcher`
// per production, reset when the production is dropped.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::HashSet;

use log::warn;

//=== Internal Dependencies ===============================================

use super::hook::{Hook, GAMEOBJ_HOOKS, STAGE_HOOKS};
use super::hook_map::{HookFn, StageHookFn, StageHookMap};
use super::spellcheck;
use crate::core::canvas::Canvas;
use crate::core::entity::Entity;
use crate::core::input::{KeyEvent, MouseEvent};
use crate::core::stage::{StageContext, StageKey, StageRole};

//=== HookArgs ============================================================

/// Payload threaded through a dispatch, reborrowed per target.
pub(crate) enum HookArgs<'a> {
    /// `draw` — the frame's canvas.
    Draw(&'a mut dyn Canvas),

    /// `act` / `update` — no payload.
    Tick,

    /// Keyboard events.
    Key(&'a KeyEvent),

    /// Mouse events.
    Mouse(&'a MouseEvent),
}

//=== Dispatcher ==========================================================

/// Hook resolution plus the one-time diagnostic registry.
pub struct Dispatcher {
    /// Kind names already diagnosed. Grows monotonically, bounded by the
    /// number of distinct kinds, not by dispatch count.
    warned: HashSet<String>,
}

impl Dispatcher {
    //--- Construction -----------------------------------------------------

    pub fn new() -> Self {
        Self { warned: HashSet::new() }
    }

    //--- Entity Dispatch --------------------------------------------------

    /// Runs the base hook and at most one override on `entity`.
    pub(crate) fn dispatch_entity<K: StageKey>(
        &mut self,
        entity: &mut Entity<K>,
        hook: Hook,
        args: &mut HookArgs<'_>,
        ctx: &mut StageContext<'_, K>,
    ) {
        // Base implementation always runs first. Only draw has one; the
        // default act and event hooks are no-ops.
        if let (Hook::Draw, HookArgs::Draw(canvas)) = (hook, &mut *args) {
            entity.obj.base_draw(&mut **canvas);
        }

        // Role strategy: an entity with a role never falls back to its
        // hook map, matching the either/or resolution of the original.
        if let Some(role) = entity.role.as_deref_mut() {
            if role.hooks().contains(hook) {
                let obj = &mut entity.obj;
                match (hook, &mut *args) {
                    (Hook::Draw, HookArgs::Draw(canvas)) => role.draw(obj, ctx, &mut **canvas),
                    (Hook::Act, HookArgs::Tick) => role.act(obj, ctx),
                    (Hook::OnKeyDown, HookArgs::Key(event)) => role.on_key_down(obj, ctx, event),
                    (Hook::OnKeyUp, HookArgs::Key(event)) => role.on_key_up(obj, ctx, event),
                    (Hook::OnMouseDown, HookArgs::Mouse(event)) => role.on_mouse_down(obj, ctx, event),
                    (Hook::OnMouseUp, HookArgs::Mouse(event)) => role.on_mouse_up(obj, ctx, event),
                    (Hook::OnMouseMove, HookArgs::Mouse(event)) => role.on_mouse_move(obj, ctx, event),
                    _ => {}
                }
            }
            return;
        }

        // Ad-hoc strategy with miss diagnostics.
        let kind = entity.obj.kind().to_string();
        let registered: Vec<String> =
            entity.hooks.names().iter().map(|n| n.to_string()).collect();

        match (entity.hooks.get_mut(hook.name()), &mut *args) {
            (Some(HookFn::Draw(f)), HookArgs::Draw(canvas)) => f(&mut entity.obj, ctx, &mut **canvas),
            (Some(HookFn::Act(f)), HookArgs::Tick) => f(&mut entity.obj, ctx),
            (Some(HookFn::Key(f)), HookArgs::Key(event)) => f(&mut entity.obj, ctx, event),
            (Some(HookFn::Mouse(f)), HookArgs::Mouse(event)) => f(&mut entity.obj, ctx, event),
            (Some(_), _) => self.warn_mismatch(&kind, hook),
            (None, _) => {
                self.diagnose_missing(&kind, &registered, &GAMEOBJ_HOOKS, ("update", "act"))
            }
        }
    }

    //--- Stage Dispatch ---------------------------------------------------

    /// Resolves and runs at most one stage-level override.
    ///
    /// The stage's base behavior (background paint, entity fan-out) has
    /// already been performed by the production when this is called.
    pub(crate) fn dispatch_stage<K: StageKey>(
        &mut self,
        role: Option<&mut dyn StageRole<K>>,
        hooks: &mut StageHookMap<K>,
        kind: &str,
        hook: Hook,
        args: &mut HookArgs<'_>,
        ctx: &mut StageContext<'_, K>,
    ) {
        if let Some(role) = role {
            if role.hooks().contains(hook) {
                match (hook, &mut *args) {
                    (Hook::Draw, HookArgs::Draw(canvas)) => role.draw(ctx, &mut **canvas),
                    (Hook::Update, HookArgs::Tick) => role.update(ctx),
                    (Hook::OnKeyDown, HookArgs::Key(event)) => role.on_key_down(ctx, event),
                    (Hook::OnKeyUp, HookArgs::Key(event)) => role.on_key_up(ctx, event),
                    (Hook::OnMouseDown, HookArgs::Mouse(event)) => role.on_mouse_down(ctx, event),
                    (Hook::OnMouseUp, HookArgs::Mouse(event)) => role.on_mouse_up(ctx, event),
                    (Hook::OnMouseMove, HookArgs::Mouse(event)) => role.on_mouse_move(ctx, event),
                    _ => {}
                }
            }
            return;
        }

        let registered: Vec<String> = hooks.names().iter().map(|n| n.to_string()).collect();

        match (hooks.get_mut(hook.name()), &mut *args) {
            (Some(StageHookFn::Draw(f)), HookArgs::Draw(canvas)) => f(ctx, &mut **canvas),
            (Some(StageHookFn::Update(f)), HookArgs::Tick) => f(ctx),
            (Some(StageHookFn::Key(f)), HookArgs::Key(event)) => f(ctx, event),
            (Some(StageHookFn::Mouse(f)), HookArgs::Mouse(event)) => f(ctx, event),
            (Some(_), _) => self.warn_mismatch(kind, hook),
            (None, _) => self.diagnose_missing(kind, &registered, &STAGE_HOOKS, ("act", "update")),
        }
    }

    //--- Test Accessors ---------------------------------------------------

    /// Returns whether `kind` has already been diagnosed.
    #[cfg(test)]
    pub(crate) fn has_warned(&self, kind: &str) -> bool {
        self.warned.contains(kind)
    }

    //--- Diagnostics ------------------------------------------------------

    /// One-time near-miss diagnostics for a kind whose hook lookup failed.
    ///
    /// The kind is marked as diagnosed even when nothing is printed, so
    /// the comparison runs at most once per distinct kind name.
    fn diagnose_missing(
        &mut self,
        kind: &str,
        registered: &[String],
        expected: &[Hook],
        cross_hint: (&str, &'static str),
    ) {
        if !self.warned.insert(kind.to_string()) {
            return;
        }
        if registered.is_empty() {
            return;
        }

        let expected_names: Vec<&'static str> = expected.iter().map(|h| h.name()).collect();
        let found: Vec<&str> = registered.iter().map(|s| s.as_str()).collect();

        for (found_name, suggestion) in spellcheck::compare(&found, &expected_names) {
            warn!(
                "found hook named `{}` on `{}`, did you mean `{}`?",
                found_name, kind, suggestion
            );
        }

        // The classic stage/game-object confusion: the tick hook is named
        // `update` on stages and `act` on game objects.
        let (wrong, right) = cross_hint;
        if found.contains(&wrong) {
            warn!(
                "found hook named `{}` on `{}`, did you mean `{}`?",
                wrong, kind, right
            );
        }
    }

    fn warn_mismatch(&mut self, kind: &str, hook: Hook) {
        if self.warned.insert(kind.to_string()) {
            warn!(
                "hook `{}` on `{}` is registered with the wrong payload signature and will not run",
                hook.name(),
                kind
            );
        }
    }
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
//
// End-to-end dispatch behavior (base-exactly-once, strategy exclusivity,
// the drow/draw scenario) is covered with a full world in the production
// tests; here we pin the registry semantics.
//
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn diagnosis_runs_once_per_kind() {
        let mut dispatcher = Dispatcher::new();
        assert!(!dispatcher.has_warned("Crab"));

        dispatcher.diagnose_missing(
            "Crab",
            &["drow".to_string()],
            &GAMEOBJ_HOOKS,
            ("update", "act"),
        );
        assert!(dispatcher.has_warned("Crab"));

        // Second call is a no-op regardless of content.
        dispatcher.diagnose_missing(
            "Crab",
            &["akt".to_string()],
            &GAMEOBJ_HOOKS,
            ("update", "act"),
        );
        assert!(dispatcher.has_warned("Crab"));
        assert!(!dispatcher.has_warned("Pearl"));
    }

    #[test]
    fn empty_registration_still_marks_kind() {
        let mut dispatcher = Dispatcher::new();
        dispatcher.diagnose_missing("Rock", &[], &GAMEOBJ_HOOKS, ("update", "act"));
        assert!(dispatcher.has_warned("Rock"));
    }

    #[test]
    fn mismatch_uses_same_registry() {
        let mut dispatcher = Dispatcher::new();
        dispatcher.warn_mismatch("Crab", Hook::Draw);
        assert!(dispatcher.has_warned("Crab"));
    }
}
