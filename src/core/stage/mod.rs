//=========================================================================
// Stage System
//=========================================================================
//
// Scene containers and the world they live in.
//
// A `Stage` is a background plus an ordered cast of entity ids; the
// `World` owns all stages and the entity arena; a `StageContext` is the
// borrowed view hooks receive; the `Production` drives frames and events
// through the dispatcher.
//
//=========================================================================

//=== Module Declarations =================================================

mod context;
mod production;
mod world;

//=== Public API ==========================================================

pub use context::StageContext;
pub use production::{Production, ProductionBuilder};

//=== Crate-internal API ==================================================

pub(crate) use world::World;

//=== External Dependencies ===============================================

use std::fmt::Debug;
use std::hash::Hash;

//=== Internal Dependencies ===============================================

use crate::core::canvas::Canvas;
use crate::core::dispatch::{HookSet, StageHookFn, StageHookMap};
use crate::core::entity::EntityId;
use crate::core::input::{KeyEvent, MouseEvent};

//=== StageKey ============================================================

/// Marker trait for the type identifying stages.
///
/// Typically a small user-defined enum:
///
/// ```
/// use stagecraft::core::stage::StageKey;
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// enum Scene {
///     Title,
///     Beach,
/// }
///
/// impl StageKey for Scene {}
/// ```
pub trait StageKey: Clone + Copy + Eq + Hash + Debug + 'static {}

//=== StageRole ===========================================================

/// Reusable, typed stage-level behavior.
///
/// The stage counterpart of [`Role`](crate::core::entity::Role): declares
/// the hooks it overrides, receives the stage context instead of a game
/// object, and names its per-frame hook `update` rather than `act`.
#[allow(unused_variables)]
pub trait StageRole<K: StageKey>: 'static {
    /// Kind name for diagnostics.
    fn kind(&self) -> &'static str;

    /// The hooks this role overrides.
    fn hooks(&self) -> HookSet;

    /// Runs after the background paint and the entity draw pass.
    fn draw(&mut self, ctx: &mut StageContext<'_, K>, canvas: &mut dyn Canvas) {}

    /// Runs after the entity act pass.
    fn update(&mut self, ctx: &mut StageContext<'_, K>) {}

    fn on_key_down(&mut self, ctx: &mut StageContext<'_, K>, event: &KeyEvent) {}

    fn on_key_up(&mut self, ctx: &mut StageContext<'_, K>, event: &KeyEvent) {}

    fn on_mouse_down(&mut self, ctx: &mut StageContext<'_, K>, event: &MouseEvent) {}

    fn on_mouse_up(&mut self, ctx: &mut StageContext<'_, K>, event: &MouseEvent) {}

    fn on_mouse_move(&mut self, ctx: &mut StageContext<'_, K>, event: &MouseEvent) {}
}

//=== Stage ===============================================================

/// A scene: an optional background and an ordered cast of entities.
///
/// The cast holds ids only; entities live in the world's arena. Insertion
/// order is draw and update order.
pub struct Stage<K: StageKey> {
    pub(crate) background: Option<String>,
    pub(crate) cast: Vec<EntityId>,
    pub(crate) role: Option<Box<dyn StageRole<K>>>,
    pub(crate) hooks: StageHookMap<K>,
    pub(crate) kind: String,
}

impl<K: StageKey> Stage<K> {
    pub fn new() -> Self {
        Self {
            background: None,
            cast: Vec::new(),
            role: None,
            hooks: StageHookMap::new(),
            kind: "Stage".to_string(),
        }
    }

    //--- Configuration ----------------------------------------------------

    /// Background image, blitted instead of the blank fill.
    pub fn with_background(mut self, image: impl Into<String>) -> Self {
        self.background = Some(image.into());
        self
    }

    /// Kind name for diagnostics. Defaults to the role's kind when a role
    /// is attached, otherwise `"Stage"`.
    pub fn kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = kind.into();
        self
    }

    /// Attaches a stage role. A role suppresses ad-hoc hooks entirely.
    pub fn with_role(mut self, role: impl StageRole<K>) -> Self {
        self.kind = role.kind().to_string();
        self.role = Some(Box::new(role));
        self
    }

    /// Registers an ad-hoc stage hook under `name`.
    pub fn hook(mut self, name: impl Into<String>, hook: StageHookFn<K>) -> Self {
        self.hooks.insert(name, hook);
        self
    }

    //--- Access -----------------------------------------------------------

    pub fn background(&self) -> Option<&str> {
        self.background.as_deref()
    }

    /// Cast ids in insertion order.
    pub fn cast(&self) -> &[EntityId] {
        &self.cast
    }
}

impl<K: StageKey> Default for Stage<K> {
    fn default() -> Self {
        Self::new()
    }
}
