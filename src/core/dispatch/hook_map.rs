//=========================================================================
// Ad-hoc Hook Registration
//=========================================================================
//
// Name-keyed, per-instance hook overrides.
//
// This is the composition replacement for patching a behavior function
// onto a single object after the fact: closures are registered by hook
// name at construction time (through the builders) and consulted by the
// dispatcher for entities and stages that carry no role.
//
// Registration is stringly-keyed on purpose — the name is the part a
// game author can get wrong, and misspelled names feed the dispatcher's
// one-time suggestion diagnostics.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::core::canvas::Canvas;
use crate::core::entity::GameObj;
use crate::core::input::{KeyEvent, MouseEvent};
use crate::core::stage::{StageContext, StageKey};

//=== Hook Closures =======================================================

/// A per-instance hook override for a game object.
///
/// The variant fixes the payload the closure receives; the dispatcher
/// checks that the registered variant matches the hook it resolves, and
/// diagnoses mismatches once per kind.
pub enum HookFn<K: StageKey> {
    /// `draw` — runs after the base sprite draw.
    Draw(Box<dyn FnMut(&mut GameObj<K>, &mut StageContext<'_, K>, &mut dyn Canvas)>),

    /// `act` — per-frame behavior.
    Act(Box<dyn FnMut(&mut GameObj<K>, &mut StageContext<'_, K>)>),

    /// `on_key_down` / `on_key_up`.
    Key(Box<dyn FnMut(&mut GameObj<K>, &mut StageContext<'_, K>, &KeyEvent)>),

    /// `on_mouse_down` / `on_mouse_up` / `on_mouse_move`.
    Mouse(Box<dyn FnMut(&mut GameObj<K>, &mut StageContext<'_, K>, &MouseEvent)>),
}

/// A per-instance hook override for a stage.
///
/// Stage closures see the world through the context only; the stage's
/// own data (background, cast) is reachable from there.
pub enum StageHookFn<K: StageKey> {
    /// `draw` — runs after the background and the entity draw pass.
    Draw(Box<dyn FnMut(&mut StageContext<'_, K>, &mut dyn Canvas)>),

    /// `update` — runs after the entity act pass.
    Update(Box<dyn FnMut(&mut StageContext<'_, K>)>),

    /// `on_key_down` / `on_key_up`.
    Key(Box<dyn FnMut(&mut StageContext<'_, K>, &KeyEvent)>),

    /// `on_mouse_down` / `on_mouse_up` / `on_mouse_move`.
    Mouse(Box<dyn FnMut(&mut StageContext<'_, K>, &MouseEvent)>),
}

//=== NamedHooks ==========================================================

/// Ordered name → closure registry.
///
/// Registration order is preserved (it is also the order diagnostics
/// report names in). Registering a name twice replaces the first entry.
pub struct NamedHooks<F> {
    entries: Vec<(String, F)>,
}

/// Ad-hoc hooks of a game object.
pub type HookMap<K> = NamedHooks<HookFn<K>>;

/// Ad-hoc hooks of a stage.
pub type StageHookMap<K> = NamedHooks<StageHookFn<K>>;

impl<F> NamedHooks<F> {
    pub fn new() -> Self {
        Self { entries: Vec::new() }
    }

    /// Registers `hook` under `name`, replacing any previous registration
    /// of the same name.
    pub fn insert(&mut self, name: impl Into<String>, hook: F) {
        let name = name.into();
        if let Some(entry) = self.entries.iter_mut().find(|(n, _)| *n == name) {
            entry.1 = hook;
        } else {
            self.entries.push((name, hook));
        }
    }

    /// Looks up a registration by exact name.
    pub fn get_mut(&mut self, name: &str) -> Option<&mut F> {
        self.entries
            .iter_mut()
            .find(|(n, _)| n == name)
            .map(|(_, f)| f)
    }

    /// All registered names, in registration order.
    pub fn names(&self) -> Vec<&str> {
        self.entries.iter().map(|(n, _)| n.as_str()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<F> Default for NamedHooks<F> {
    fn default() -> Self {
        Self::new()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_and_lookup() {
        let mut hooks: NamedHooks<u32> = NamedHooks::new();
        assert!(hooks.is_empty());

        hooks.insert("act", 1);
        hooks.insert("draw", 2);

        assert_eq!(hooks.get_mut("act"), Some(&mut 1));
        assert_eq!(hooks.get_mut("draw"), Some(&mut 2));
        assert_eq!(hooks.get_mut("update"), None);
    }

    #[test]
    fn reinsert_replaces_in_place() {
        let mut hooks: NamedHooks<u32> = NamedHooks::new();
        hooks.insert("act", 1);
        hooks.insert("draw", 2);
        hooks.insert("act", 3);

        assert_eq!(hooks.get_mut("act"), Some(&mut 3));
        assert_eq!(hooks.names(), vec!["act", "draw"]);
    }

    #[test]
    fn names_preserve_registration_order() {
        let mut hooks: NamedHooks<u32> = NamedHooks::new();
        hooks.insert("on_mouse_down", 1);
        hooks.insert("act", 2);
        assert_eq!(hooks.names(), vec!["on_mouse_down", "act"]);
    }
}
