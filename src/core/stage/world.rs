//=========================================================================
// World
//=========================================================================
//
// Owned state of a production: registered stages, the single current
// stage, and the entity arena.
//
// Stages hold id lists; the arena owns the entities. During a dispatch
// pass the production temporarily removes the dispatched entity from the
// arena, so attachment helpers come in two flavors: id-based (arena
// lookup) and obj-based (for the entity currently in hand).
//
// Invariant: `obj.stage() == Some(k)` iff `obj.id()` is in stage `k`'s
// cast, and in no other stage's cast.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::HashMap;

use log::debug;

//=== Internal Dependencies ===============================================

use crate::core::canvas::StageBounds;
use crate::core::entity::{Entity, EntityId, GameObj, GameObjBuilder};
use crate::core::error::StageError;
use crate::core::stage::{Stage, StageKey};

//=== World ===============================================================

pub(crate) struct World<K: StageKey> {
    pub(crate) stages: HashMap<K, Stage<K>>,
    pub(crate) current: Option<K>,
    pub(crate) entities: HashMap<EntityId, Entity<K>>,
    pub(crate) bounds: StageBounds,
    next_id: u64,
}

impl<K: StageKey> World<K> {
    //--- Construction -----------------------------------------------------

    pub(crate) fn new(bounds: StageBounds) -> Self {
        Self {
            stages: HashMap::new(),
            current: None,
            entities: HashMap::new(),
            bounds,
            next_id: 0,
        }
    }

    //--- Stage Registry ---------------------------------------------------

    pub(crate) fn add_stage(&mut self, key: K, stage: Stage<K>) {
        self.stages.insert(key, stage);
    }

    /// Makes `key` the single current stage.
    pub(crate) fn show(&mut self, key: K) -> Result<(), StageError> {
        if !self.stages.contains_key(&key) {
            return Err(StageError::UnknownStage(format!("{key:?}")));
        }
        debug!(target: "stage", "Showing stage {key:?} (was {:?})", self.current);
        self.current = Some(key);
        Ok(())
    }

    /// Ids of entities currently on stage `key` that pass `keep`, in
    /// cast order.
    ///
    /// Membership is checked per entity at call time, so ids whose
    /// entity was detached (or is temporarily out of the arena for its
    /// own hook) are not reported.
    pub(crate) fn members(&self, key: K, keep: impl Fn(&GameObj<K>) -> bool) -> Vec<EntityId> {
        let Some(stage) = self.stages.get(&key) else {
            return Vec::new();
        };
        stage
            .cast
            .iter()
            .copied()
            .filter(|id| {
                self.entities
                    .get(id)
                    .map(|entity| entity.obj.stage() == Some(key) && keep(&entity.obj))
                    .unwrap_or(false)
            })
            .collect()
    }

    //--- Entity Lifecycle -------------------------------------------------

    /// Stores a new, detached entity and hands back its id.
    pub(crate) fn spawn(&mut self, builder: GameObjBuilder<K>) -> EntityId {
        self.next_id += 1;
        let id = EntityId(self.next_id);
        self.entities.insert(id, builder.materialize(id));
        id
    }

    /// Removes the entity entirely, detaching it first if needed.
    pub(crate) fn despawn(&mut self, id: EntityId) -> Result<(), StageError> {
        let entity = self
            .entities
            .remove(&id)
            .ok_or(StageError::UnknownEntity(id))?;
        if let Some(key) = entity.obj.stage() {
            if let Some(stage) = self.stages.get_mut(&key) {
                stage.cast.retain(|member| *member != id);
            }
        }
        Ok(())
    }

    //--- Attachment -------------------------------------------------------

    /// Puts the entity on stage `key`, detaching it from any prior stage
    /// first. Appends to the cast, so a re-attached entity moves to the
    /// end of the draw/update order.
    pub(crate) fn attach(&mut self, id: EntityId, key: K) -> Result<(), StageError> {
        let entity = self
            .entities
            .get_mut(&id)
            .ok_or(StageError::UnknownEntity(id))?;
        Self::attach_to(&mut self.stages, &mut entity.obj, key)
    }

    /// Takes the entity off its current stage.
    pub(crate) fn detach(&mut self, id: EntityId) -> Result<(), StageError> {
        let entity = self
            .entities
            .get_mut(&id)
            .ok_or(StageError::UnknownEntity(id))?;
        Self::detach_from(&mut self.stages, &mut entity.obj)
    }

    //--- Obj-based Attachment Helpers -------------------------------------
    //
    // Used both by the id-based operations above and by the context for
    // the entity currently outside the arena.

    pub(crate) fn attach_to(
        stages: &mut HashMap<K, Stage<K>>,
        obj: &mut GameObj<K>,
        key: K,
    ) -> Result<(), StageError> {
        if !stages.contains_key(&key) {
            return Err(StageError::UnknownStage(format!("{key:?}")));
        }
        if obj.stage().is_some() {
            Self::detach_from(stages, obj)?;
        }
        if let Some(stage) = stages.get_mut(&key) {
            stage.cast.push(obj.id());
        }
        debug!(target: "stage", "{} {:?} enters stage {key:?}", obj.kind(), obj.id());
        obj.set_stage(Some(key));
        Ok(())
    }

    pub(crate) fn detach_from(
        stages: &mut HashMap<K, Stage<K>>,
        obj: &mut GameObj<K>,
    ) -> Result<(), StageError> {
        let key = obj.stage().ok_or(StageError::NotOnStage(obj.id()))?;
        if let Some(stage) = stages.get_mut(&key) {
            stage.cast.retain(|member| *member != obj.id());
        }
        debug!(target: "stage", "{} {:?} leaves stage {key:?}", obj.kind(), obj.id());
        obj.set_stage(None);
        Ok(())
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
