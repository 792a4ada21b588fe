//=========================================================================
// GameObj Builder
//=========================================================================
//
// Declarative construction of a game object together with its behavior:
// either a role (typed, reusable) or ad-hoc named closures, never both
// consulted at dispatch time.
//
// The builder produces a detached object; `Production::spawn` assigns
// the id and stores the entity, and attachment to a stage is a separate
// step.
//
//=========================================================================

//=== External Dependencies ===============================================

use glam::Vec2;

//=== Internal Dependencies ===============================================

use super::game_obj::{DebugDraw, GameObj};
use super::sprite::Sprite;
use super::{Entity, EntityId, Role};
use crate::core::canvas::Color;
use crate::core::dispatch::{HookFn, HookMap};
use crate::core::stage::StageKey;

//=== GameObjBuilder ======================================================

/// Configures a game object before it enters the world.
///
/// ```no_run
/// # use stagecraft::core::entity::GameObjBuilder;
/// # use stagecraft::core::entity::Sprite;
/// # use glam::Vec2;
/// # #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// # enum Key { Main }
/// # impl stagecraft::core::stage::StageKey for Key {}
/// let crab = GameObjBuilder::<Key>::new()
///     .kind("Crab")
///     .sprite(Sprite::opaque("crab", 64, 48))
///     .pos(Vec2::new(100.0, 200.0))
///     .angle(90.0);
/// ```
pub struct GameObjBuilder<K: StageKey> {
    pos: Vec2,
    angle: f32,
    speed: f32,
    speed_limits: (f32, f32),
    orbit_center: Option<EntityId>,
    debug: DebugDraw,
    sprite: Sprite,
    kind: Option<String>,
    role: Option<Box<dyn Role<K>>>,
    hooks: HookMap<K>,
}

impl<K: StageKey> GameObjBuilder<K> {
    pub fn new() -> Self {
        Self {
            pos: Vec2::ZERO,
            angle: 0.0,
            speed: GameObj::<K>::DEFAULT_SPEED,
            speed_limits: (GameObj::<K>::MIN_SPEED, GameObj::<K>::MAX_SPEED),
            orbit_center: None,
            debug: DebugDraw::default(),
            sprite: Sprite::invisible(),
            kind: None,
            role: None,
            hooks: HookMap::new(),
        }
    }

    //--- State ------------------------------------------------------------

    pub fn pos(mut self, pos: Vec2) -> Self {
        self.pos = pos;
        self
    }

    /// Heading in degrees, 0° = +x, positive = counter-clockwise.
    pub fn angle(mut self, angle: f32) -> Self {
        self.angle = angle;
        self
    }

    pub fn speed(mut self, speed: f32) -> Self {
        self.speed = speed;
        self
    }

    /// Replaces the default `(-10, 10)` speed clamp.
    pub fn speed_limits(mut self, min: f32, max: f32) -> Self {
        self.speed_limits = (min, max);
        self
    }

    pub fn sprite(mut self, sprite: Sprite) -> Self {
        self.sprite = sprite;
        self
    }

    /// Entity this object should orbit around.
    pub fn orbit_center(mut self, center: EntityId) -> Self {
        self.orbit_center = Some(center);
        self
    }

    /// Kind name for queries and diagnostics.
    ///
    /// Defaults to the role's kind when a role is attached, otherwise
    /// to `"GameObj"`.
    pub fn kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = Some(kind.into());
        self
    }

    //--- Behavior ---------------------------------------------------------

    /// Attaches a role. A role suppresses ad-hoc hooks entirely.
    pub fn role(mut self, role: impl Role<K>) -> Self {
        self.role = Some(Box::new(role));
        self
    }

    /// Registers an ad-hoc hook under `name`.
    ///
    /// The name is looked up verbatim at dispatch time; a near-miss is
    /// diagnosed once per kind, not corrected.
    pub fn hook(mut self, name: impl Into<String>, hook: HookFn<K>) -> Self {
        self.hooks.insert(name, hook);
        self
    }

    //--- Debug Overlays ---------------------------------------------------

    pub fn draw_center(mut self, color: Color) -> Self {
        self.debug.center = Some(color);
        self
    }

    pub fn draw_rect(mut self, color: Color) -> Self {
        self.debug.rect = Some(color);
        self
    }

    pub fn draw_pos(mut self, color: Color) -> Self {
        self.debug.pos_text = Some(color);
        self
    }

    //--- Materialization --------------------------------------------------

    pub(crate) fn materialize(self, id: EntityId) -> Entity<K> {
        let kind = match (self.kind, &self.role) {
            (Some(kind), _) => kind,
            (None, Some(role)) => role.kind().to_string(),
            (None, None) => "GameObj".to_string(),
        };

        Entity {
            obj: GameObj::new(
                id,
                self.pos,
                self.angle,
                self.speed,
                self.speed_limits,
                self.orbit_center,
                self.debug,
                self.sprite,
                kind,
            ),
            role: self.role,
            hooks: self.hooks,
        }
    }
}

impl<K: StageKey> Default for GameObjBuilder<K> {
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
    use crate::core::dispatch::HookSet;
    use crate::core::stage::StageKey;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    enum TestStage {
        Main,
    }
    impl StageKey for TestStage {}

    struct Crab;
    impl Role<TestStage> for Crab {
        fn kind(&self) -> &'static str {
            "Crab"
        }
        fn hooks(&self) -> HookSet {
            HookSet::EMPTY
        }
    }

    #[test]
    fn defaults_match_documented_values() {
        let entity = GameObjBuilder::<TestStage>::new().materialize(EntityId(1));
        let obj = &entity.obj;
        assert_eq!(obj.pos, Vec2::ZERO);
        assert_eq!(obj.angle, 0.0);
        assert_eq!(obj.speed, 5.0);
        assert_eq!(obj.speed_limits(), (-10.0, 10.0));
        assert_eq!(obj.kind(), "GameObj");
        assert_eq!(obj.stage(), None);
        assert!(obj.sprite().image().is_none());
    }

    #[test]
    fn kind_falls_back_to_role() {
        let entity = GameObjBuilder::new().role(Crab).materialize(EntityId(1));
        assert_eq!(entity.obj.kind(), "Crab");
    }

    #[test]
    fn explicit_kind_beats_role_kind() {
        let entity = GameObjBuilder::new()
            .role(Crab)
            .kind("Hermit")
            .materialize(EntityId(1));
        assert_eq!(entity.obj.kind(), "Hermit");
    }

    #[test]
    fn hooks_are_registered_by_name() {
        let entity = GameObjBuilder::<TestStage>::new()
            .hook("act", HookFn::Act(Box::new(|_, _| {})))
            .hook("drow", HookFn::Draw(Box::new(|_, _, _| {})))
            .materialize(EntityId(1));
        assert_eq!(entity.hooks.names(), vec!["act", "drow"]);
    }
}
