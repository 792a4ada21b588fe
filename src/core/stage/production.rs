//=========================================================================
// Production
//=========================================================================
//
// The top-level context object: owns the world, the mouse state and the
// dispatcher, and exposes the frame and event entry points the platform
// adapter drives.
//
// Entry-point order per frame is fixed by the host: `draw`, then
// `update`, then each input event as delivered. Within a pass, on-stage
// entities are visited in cast order over a snapshot taken at pass
// start; membership is re-checked per entity so detachments performed
// earlier in the same pass skip the detached entity, while entities
// spawned and attached mid-pass are first visited on the next pass.
//
// While an entity's hook runs, that entity is held outside the arena.
// The hook gets full mutable access to the rest of the world through the
// context without aliasing its own object.
//
//=========================================================================

//=== External Dependencies ===============================================

use glam::Vec2;
use log::info;

//=== Internal Dependencies ===============================================

use super::context::StageContext;
use super::world::World;
use super::{Stage, StageKey};
use crate::core::canvas::{Canvas, Color, StageBounds};
use crate::core::dispatch::{Dispatcher, Hook, HookArgs};
use crate::core::entity::{EntityId, GameObj, GameObjBuilder};
use crate::core::error::StageError;
use crate::core::input::{
    ButtonSet, KeyCode, KeyEvent, Modifiers, MouseButton, MouseEvent, MouseState,
};

//=== ProductionBuilder ===================================================

/// Configures a production before the curtain rises.
pub struct ProductionBuilder<K: StageKey> {
    title: String,
    bounds: StageBounds,
    stages: Vec<(K, Stage<K>)>,
    opening: Option<K>,
}

impl<K: StageKey> ProductionBuilder<K> {
    pub fn new() -> Self {
        Self {
            title: "Stagecraft".to_string(),
            bounds: StageBounds::new(800.0, 600.0),
            stages: Vec::new(),
            opening: None,
        }
    }

    /// Window title the platform adapter uses.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Stage dimensions in pixels. Defaults to 800x600.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is not positive.
    pub fn bounds(mut self, width: f32, height: f32) -> Self {
        assert!(
            width > 0.0 && height > 0.0,
            "stage bounds must be positive, got {}x{}",
            width,
            height
        );
        self.bounds = StageBounds::new(width, height);
        self
    }

    /// Registers a stage under `key`.
    pub fn stage(mut self, key: K, stage: Stage<K>) -> Self {
        self.stages.push((key, stage));
        self
    }

    /// The stage shown first.
    pub fn opening_stage(mut self, key: K) -> Self {
        self.opening = Some(key);
        self
    }

    pub fn build(self) -> Result<Production<K>, StageError> {
        info!(
            "Building production `{}` ({}x{}, {} stages)",
            self.title,
            self.bounds.width,
            self.bounds.height,
            self.stages.len()
        );

        let mut world = World::new(self.bounds);
        for (key, stage) in self.stages {
            world.add_stage(key, stage);
        }
        if let Some(key) = self.opening {
            world.show(key)?;
        }
        Ok(Production {
            world,
            mouse: MouseState::new(),
            dispatcher: Dispatcher::new(),
            title: self.title,
        })
    }
}

impl<K: StageKey> Default for ProductionBuilder<K> {
    fn default() -> Self {
        Self::new()
    }
}

//=== Production ==========================================================

/// A running show: stages, entities, mouse state and the dispatcher.
///
/// Replaces the ambient singletons of older scene frameworks; everything
/// hooks may touch is owned here and passed down explicitly.
pub struct Production<K: StageKey> {
    world: World<K>,
    mouse: MouseState,
    dispatcher: Dispatcher,
    title: String,
}

impl<K: StageKey> Production<K> {
    //--- Construction -----------------------------------------------------

    pub fn builder() -> ProductionBuilder<K> {
        ProductionBuilder::new()
    }

    //--- Host Access ------------------------------------------------------

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn bounds(&self) -> StageBounds {
        self.world.bounds
    }

    /// The currently shown stage, if any.
    pub fn current_stage(&self) -> Option<K> {
        self.world.current
    }

    /// Makes `key` the current stage.
    pub fn show(&mut self, key: K) -> Result<(), StageError> {
        self.world.show(key)
    }

    /// Registers an additional stage after construction.
    pub fn add_stage(&mut self, key: K, stage: Stage<K>) {
        self.world.add_stage(key, stage);
    }

    //--- Entity Management ------------------------------------------------

    /// Creates a detached entity.
    pub fn spawn(&mut self, builder: GameObjBuilder<K>) -> EntityId {
        self.world.spawn(builder)
    }

    pub fn despawn(&mut self, id: EntityId) -> Result<(), StageError> {
        self.world.despawn(id)
    }

    /// Puts an entity on stage `key`, detaching it from any prior stage
    /// first.
    pub fn enter(&mut self, id: EntityId, key: K) -> Result<(), StageError> {
        self.world.attach(id, key)
    }

    /// Takes an entity off its stage. Fails with `NotOnStage` when it is
    /// already detached.
    pub fn leave(&mut self, id: EntityId) -> Result<(), StageError> {
        self.world.detach(id)
    }

    pub fn obj(&self, id: EntityId) -> Option<&GameObj<K>> {
        self.world.entities.get(&id).map(|entity| &entity.obj)
    }

    pub fn obj_mut(&mut self, id: EntityId) -> Option<&mut GameObj<K>> {
        self.world
            .entities
            .get_mut(&id)
            .map(|entity| &mut entity.obj)
    }

    //--- Queries ----------------------------------------------------------

    /// Ids of entities on the current stage, in cast order.
    pub fn cast(&self) -> Vec<EntityId> {
        match self.world.current {
            Some(key) => self.world.members(key, |_| true),
            None => Vec::new(),
        }
    }

    /// Like [`cast`](Self::cast), filtered to a kind name.
    pub fn cast_of_kind(&self, kind: &str) -> Vec<EntityId> {
        match self.world.current {
            Some(key) => self.world.members(key, |obj| obj.kind() == kind),
            None => Vec::new(),
        }
    }

    pub fn count_of_kind(&self, kind: &str) -> usize {
        self.cast_of_kind(kind).len()
    }

    /// Detaches every current-stage entity of the given kind, over a
    /// snapshot of the matching set. Returns how many left.
    pub fn clear_kind(&mut self, kind: &str) -> usize {
        let matching = self.cast_of_kind(kind);
        let mut removed = 0;
        for id in matching {
            if self.world.detach(id).is_ok() {
                removed += 1;
            }
        }
        removed
    }

    //--- Frame Entry Points -----------------------------------------------

    /// Paints the current stage: background, each entity's draw in cast
    /// order, then the stage-level draw override.
    pub fn draw(&mut self, canvas: &mut dyn Canvas) {
        let Some(key) = self.world.current else { return };

        let background = self
            .world
            .stages
            .get(&key)
            .and_then(|stage| stage.background.clone());
        match background {
            Some(image) => canvas.blit(&image, Vec2::ZERO, 0.0),
            None => canvas.fill(Color::WHITE),
        }

        let mut args = HookArgs::Draw(canvas);
        self.entity_pass(key, Hook::Draw, &mut args);
        self.stage_pass(key, Hook::Draw, &mut args);
    }

    /// Advances the current stage one tick: each entity's `act`, then the
    /// stage-level `update`.
    pub fn update(&mut self) {
        let Some(key) = self.world.current else { return };
        let mut args = HookArgs::Tick;
        self.entity_pass(key, Hook::Act, &mut args);
        self.stage_pass(key, Hook::Update, &mut args);
    }

    //--- Event Entry Points -----------------------------------------------

    pub fn on_key_down(&mut self, key: KeyCode, modifiers: Modifiers, text: Option<char>) {
        let event = KeyEvent { key, modifiers, text };
        self.key_event(Hook::OnKeyDown, event);
    }

    pub fn on_key_up(&mut self, key: KeyCode, modifiers: Modifiers) {
        let event = KeyEvent { key, modifiers, text: None };
        self.key_event(Hook::OnKeyUp, event);
    }

    pub fn on_mouse_down(&mut self, pos: Vec2, button: MouseButton) {
        self.mouse.press(button);
        self.mouse.set_pos(pos);
        self.mouse_event(Hook::OnMouseDown, MouseEvent::click(pos, button));
    }

    pub fn on_mouse_up(&mut self, pos: Vec2, button: MouseButton) {
        self.mouse.release(button);
        self.mouse.set_pos(pos);
        self.mouse_event(Hook::OnMouseUp, MouseEvent::click(pos, button));
    }

    pub fn on_mouse_move(&mut self, pos: Vec2, rel: Vec2, held: ButtonSet) {
        self.mouse.set_pos(pos);
        self.mouse_event(Hook::OnMouseMove, MouseEvent::movement(pos, rel, held));
    }

    fn key_event(&mut self, hook: Hook, event: KeyEvent) {
        let Some(key) = self.world.current else { return };
        let mut args = HookArgs::Key(&event);
        self.entity_pass(key, hook, &mut args);
        self.stage_pass(key, hook, &mut args);
    }

    fn mouse_event(&mut self, hook: Hook, event: MouseEvent) {
        let Some(key) = self.world.current else { return };
        let mut args = HookArgs::Mouse(&event);
        self.entity_pass(key, hook, &mut args);
        self.stage_pass(key, hook, &mut args);
    }

    //--- Dispatch Passes --------------------------------------------------

    /// Fans one hook out to every entity on stage `key`.
    ///
    /// Iterates a snapshot of the cast and re-checks membership per
    /// entity, so hooks may freely attach and detach entities mid-pass.
    fn entity_pass(&mut self, key: K, hook: Hook, args: &mut HookArgs<'_>) {
        let snapshot: Vec<EntityId> = match self.world.stages.get(&key) {
            Some(stage) => stage.cast.clone(),
            None => return,
        };

        let Self { world, mouse, dispatcher, .. } = self;
        for id in snapshot {
            // The entity leaves the arena for the duration of its hook.
            let Some(mut entity) = world.entities.remove(&id) else {
                continue;
            };
            // Detached earlier in this same pass.
            if entity.obj.stage() != Some(key) {
                world.entities.insert(id, entity);
                continue;
            }

            let mut ctx = StageContext {
                world: &mut *world,
                mouse: &mut *mouse,
                pass_stage: key,
            };
            dispatcher.dispatch_entity(&mut entity, hook, args, &mut ctx);

            world.entities.insert(id, entity);
        }
    }

    /// Runs the stage-level override for one hook.
    ///
    /// The stage's base behavior (background paint, entity fan-out) has
    /// already happened; role and hook map are lifted out so the context
    /// can borrow the whole world underneath.
    fn stage_pass(&mut self, key: K, hook: Hook, args: &mut HookArgs<'_>) {
        let Some(stage) = self.world.stages.get_mut(&key) else { return };
        let mut role = stage.role.take();
        let mut hooks = std::mem::take(&mut stage.hooks);
        let kind = stage.kind.clone();

        {
            let Self { world, mouse, dispatcher, .. } = self;
            let mut ctx = StageContext { world, mouse, pass_stage: key };
            dispatcher.dispatch_stage(role.as_deref_mut(), &mut hooks, &kind, hook, args, &mut ctx);
        }

        if let Some(stage) = self.world.stages.get_mut(&key) {
            if stage.role.is_none() {
                stage.role = role;
            }
            if stage.hooks.is_empty() {
                stage.hooks = hooks;
            }
        }
    }
}

//=========================================================================
// Integration Tests
//=========================================================================
//
// Full-world scenarios: hook resolution end to end, mid-pass mutation,
// stage switching, orbit through the context, and the diagnostics
// scenarios.
//
//=========================================================================
