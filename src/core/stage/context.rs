//=========================================================================
// Stage Context
//=========================================================================
//
// The borrowed view of the world a hook runs against.
//
// There is no global current stage and no global mouse state; everything
// a hook may touch arrives through this context. Operations come in two
// addressing modes:
//
//   by id   — for other entities, resolved through the arena. During an
//             entity's own hook that entity is outside the arena, so
//             id-based operations cannot address it (`UnknownEntity`).
//   by obj  — for the entity currently in hand, which every entity hook
//             receives as its first parameter.
//
//=========================================================================

//=== External Dependencies ===============================================

use glam::Vec2;

//=== Internal Dependencies ===============================================

use super::world::World;
use super::StageKey;
use crate::core::canvas::StageBounds;
use crate::core::entity::{EntityId, GameObj, GameObjBuilder};
use crate::core::error::StageError;
use crate::core::input::MouseState;

//=== StageContext ========================================================

/// World access for one hook invocation.
pub struct StageContext<'w, K: StageKey> {
    pub(crate) world: &'w mut World<K>,
    pub(crate) mouse: &'w mut MouseState,
    pub(crate) pass_stage: K,
}

impl<'w, K: StageKey> StageContext<'w, K> {
    //--- Ambient State ----------------------------------------------------

    /// The stage this dispatch pass runs over.
    pub fn stage(&self) -> K {
        self.pass_stage
    }

    pub fn bounds(&self) -> StageBounds {
        self.world.bounds
    }

    /// Mouse state. Mutable because the `moved` query is edge-triggered.
    pub fn mouse(&mut self) -> &mut MouseState {
        self.mouse
    }

    /// Background of the pass stage.
    pub fn background(&self) -> Option<&str> {
        self.world
            .stages
            .get(&self.pass_stage)
            .and_then(|stage| stage.background())
    }

    pub fn set_background(&mut self, image: Option<String>) {
        if let Some(stage) = self.world.stages.get_mut(&self.pass_stage) {
            stage.background = image;
        }
    }

    //--- Stage Switching --------------------------------------------------

    /// Makes `key` the current stage starting with the next frame. The
    /// running dispatch pass still completes over the old stage.
    pub fn show(&mut self, key: K) -> Result<(), StageError> {
        self.world.show(key)
    }

    //--- Entity Lifecycle -------------------------------------------------

    /// Creates a detached entity. It joins dispatch passes once attached,
    /// starting with the next pass.
    pub fn spawn(&mut self, builder: GameObjBuilder<K>) -> EntityId {
        self.world.spawn(builder)
    }

    pub fn despawn(&mut self, id: EntityId) -> Result<(), StageError> {
        self.world.despawn(id)
    }

    /// Puts another entity on stage `key`, detaching it from any prior
    /// stage first.
    pub fn enter(&mut self, id: EntityId, key: K) -> Result<(), StageError> {
        self.world.attach(id, key)
    }

    /// Takes another entity off its stage. Takes effect immediately: if
    /// the running pass has not visited it yet, it will be skipped.
    pub fn leave(&mut self, id: EntityId) -> Result<(), StageError> {
        self.world.detach(id)
    }

    /// Puts the entity in hand on stage `key`.
    pub fn enter_self(&mut self, obj: &mut GameObj<K>, key: K) -> Result<(), StageError> {
        World::attach_to(&mut self.world.stages, obj, key)
    }

    /// Takes the entity in hand off its stage. Fails with `NotOnStage`
    /// when it is already detached.
    pub fn leave_self(&mut self, obj: &mut GameObj<K>) -> Result<(), StageError> {
        World::detach_from(&mut self.world.stages, obj)
    }

    //--- Queries ----------------------------------------------------------

    /// Ids of entities currently on the pass stage, in cast order.
    ///
    /// Membership is checked at call time, so entities detached earlier
    /// in the same pass are not reported. The entity whose hook is
    /// running is not included; it is already in hand.
    pub fn cast(&self) -> Vec<EntityId> {
        self.world.members(self.pass_stage, |_| true)
    }

    /// Like [`cast`](Self::cast), filtered to a kind name.
    pub fn cast_of_kind(&self, kind: &str) -> Vec<EntityId> {
        self.world.members(self.pass_stage, |obj| obj.kind() == kind)
    }

    pub fn count_of_kind(&self, kind: &str) -> usize {
        self.cast_of_kind(kind).len()
    }

    /// Detaches every on-stage entity of the given kind, over a snapshot
    /// of the matching set. Returns how many left.
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

    pub fn pos_of(&self, id: EntityId) -> Result<Vec2, StageError> {
        self.world
            .entities
            .get(&id)
            .map(|entity| entity.obj.pos)
            .ok_or(StageError::UnknownEntity(id))
    }

    pub fn kind_of(&self, id: EntityId) -> Result<&str, StageError> {
        self.world
            .entities
            .get(&id)
            .map(|entity| entity.obj.kind())
            .ok_or(StageError::UnknownEntity(id))
    }

    /// Pixel-exact overlap between the entity in hand and another one.
    pub fn overlaps(&self, obj: &GameObj<K>, other: EntityId) -> Result<bool, StageError> {
        self.world
            .entities
            .get(&other)
            .map(|entity| obj.overlaps(&entity.obj))
            .ok_or(StageError::UnknownEntity(other))
    }

    //--- Boundary & Movement ----------------------------------------------

    /// Boundary test for an arbitrary position against the stage size.
    pub fn is_beyond_edge(&self, pos: Vec2, inset: Vec2) -> bool {
        self.world.bounds.is_beyond(pos, inset)
    }

    /// Whether the entity in hand sits beyond the inset stage edges.
    /// Requires attachment.
    pub fn is_beyond_stage_edge(
        &self,
        obj: &GameObj<K>,
        inset: Option<Vec2>,
    ) -> Result<bool, StageError> {
        if obj.stage().is_none() {
            return Err(StageError::NotOnStage(obj.id()));
        }
        let inset = inset.unwrap_or(GameObj::<K>::DEFAULT_EDGE_INSET);
        Ok(self.world.bounds.is_beyond(obj.pos, inset))
    }

    /// Whether an `advance(distance)` would keep the entity within the
    /// stage edges. Unlike [`is_beyond_stage_edge`](Self::is_beyond_stage_edge)
    /// the default inset is zero, so the full stage is walkable. Requires
    /// attachment.
    pub fn can_move(
        &self,
        obj: &GameObj<K>,
        distance: Option<f32>,
        inset: Option<Vec2>,
    ) -> Result<bool, StageError> {
        if obj.stage().is_none() {
            return Err(StageError::NotOnStage(obj.id()));
        }
        let inset = inset.unwrap_or(GameObj::<K>::DEFAULT_MOVE_INSET);
        let prospective = obj.pos + obj.next_hop(distance);
        Ok(!self.world.bounds.is_beyond(prospective, inset))
    }

    //--- Orbit ------------------------------------------------------------

    /// Rotates the entity in hand `angle` degrees counter-clockwise
    /// around its configured orbit center's current position.
    pub fn orbit(&mut self, obj: &mut GameObj<K>, angle: f32) -> Result<(), StageError> {
        let center_id = obj.orbit_center.ok_or(StageError::NoOrbitCenter(obj.id()))?;
        let center = self
            .world
            .entities
            .get(&center_id)
            .map(|entity| entity.obj.pos)
            .ok_or(StageError::OrbitCenterGone(center_id))?;
        obj.orbit_step(center, angle);
        Ok(())
    }
}
