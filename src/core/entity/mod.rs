//=========================================================================
// Entity System
//=========================================================================
//
// Game objects and their behavior attachments.
//
// An `Entity` bundles the data half (`GameObj`: position, heading,
// sprite, stage membership) with the behavior half (an optional `Role`
// or a map of ad-hoc hooks). The world stores entities in an arena
// keyed by `EntityId`; stages hold id lists, never the objects
// themselves, so membership changes are cheap and an object can be
// addressed while detached.
//
//=========================================================================

//=== Module Declarations =================================================

mod builder;
mod game_obj;
mod sprite;

//=== Public API ==========================================================

pub use builder::GameObjBuilder;
pub use game_obj::{DebugDraw, GameObj};
pub use sprite::{Mask, Sprite};

//=== Internal Dependencies ===============================================

use crate::core::canvas::Canvas;
use crate::core::dispatch::{HookMap, HookSet};
use crate::core::input::{KeyEvent, MouseEvent};
use crate::core::stage::{StageContext, StageKey};

//=== EntityId ============================================================

/// Stable handle to a game object, unique within one production.
///
/// Ids are never reused; a despawned entity's id dangles harmlessly and
/// lookups report `UnknownEntity`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityId(pub(crate) u64);

//=== Role ================================================================

/// Reusable, typed behavior for a family of game objects.
///
/// A role declares up front which hooks it overrides via [`hooks`];
/// the dispatcher only calls the declared ones, and an entity with a
/// role never consults its ad-hoc hook map. Default method bodies are
/// no-ops so a role implements only what it declares.
///
/// [`hooks`]: Role::hooks
#[allow(unused_variables)]
pub trait Role<K: StageKey>: 'static {
    /// Kind name for queries and diagnostics.
    fn kind(&self) -> &'static str;

    /// The hooks this role overrides.
    fn hooks(&self) -> HookSet;

    /// Runs after the base sprite draw.
    fn draw(&mut self, obj: &mut GameObj<K>, ctx: &mut StageContext<'_, K>, canvas: &mut dyn Canvas) {
    }

    /// Per-frame behavior.
    fn act(&mut self, obj: &mut GameObj<K>, ctx: &mut StageContext<'_, K>) {}

    fn on_key_down(&mut self, obj: &mut GameObj<K>, ctx: &mut StageContext<'_, K>, event: &KeyEvent) {
    }

    fn on_key_up(&mut self, obj: &mut GameObj<K>, ctx: &mut StageContext<'_, K>, event: &KeyEvent) {}

    fn on_mouse_down(
        &mut self,
        obj: &mut GameObj<K>,
        ctx: &mut StageContext<'_, K>,
        event: &MouseEvent,
    ) {
    }

    fn on_mouse_up(
        &mut self,
        obj: &mut GameObj<K>,
        ctx: &mut StageContext<'_, K>,
        event: &MouseEvent,
    ) {
    }

    fn on_mouse_move(
        &mut self,
        obj: &mut GameObj<K>,
        ctx: &mut StageContext<'_, K>,
        event: &MouseEvent,
    ) {
    }
}

//=== Entity ==============================================================

/// A game object together with its behavior attachments.
pub struct Entity<K: StageKey> {
    pub(crate) obj: GameObj<K>,
    pub(crate) role: Option<Box<dyn Role<K>>>,
    pub(crate) hooks: HookMap<K>,
}
