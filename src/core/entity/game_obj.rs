//=========================================================================
// GameObj
//=========================================================================
//
// A movable, drawable entity: position, heading, speed, optional orbit
// center, sprite, and a stage back-reference.
//
// Coordinate conventions:
// - `pos` is the sprite center, screen space, y grows downward.
// - Heading 0° points along +x; positive angles rotate visually
//   counter-clockwise, which is why the vertical displacement term is
//   negated in `next_hop`.
//
// World-coupled operations (attachment, `can_move`, orbit-center
// resolution) live on `Production` / `StageContext`; everything here is
// self-contained state and math.
//
//=========================================================================

//=== External Dependencies ===============================================

use glam::Vec2;

//=== Internal Dependencies ===============================================

use super::sprite::Sprite;
use super::EntityId;
use crate::core::canvas::{Canvas, Color, Rect};
use crate::core::stage::StageKey;

//=== DebugDraw ===========================================================

/// Optional debug overlays drawn on top of the sprite.
///
/// Each overlay is enabled by giving it a color.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DebugDraw {
    /// Filled dot on the center position.
    pub center: Option<Color>,

    /// Bounding-rectangle outline.
    pub rect: Option<Color>,

    /// Rounded coordinate tuple above the center.
    pub pos_text: Option<Color>,
}

//=== GameObj =============================================================

/// An actor on stage.
///
/// Constructed detached through [`GameObjBuilder`](super::GameObjBuilder);
/// attached and detached via the production or a hook's stage context.
#[derive(Debug)]
pub struct GameObj<K: StageKey> {
    id: EntityId,

    /// Center position in screen coordinates.
    pub pos: Vec2,

    /// Heading in degrees, 0° = +x, positive = counter-clockwise.
    pub angle: f32,

    /// Current scalar speed in pixels per tick. May be negative.
    pub speed: f32,

    /// Entity this object orbits around, if any.
    pub orbit_center: Option<EntityId>,

    /// Debug overlay configuration.
    pub debug: DebugDraw,

    speed_limits: (f32, f32),
    total_orbit_angle: f32,
    sprite: Sprite,
    stage: Option<K>,
    kind: String,
}

impl<K: StageKey> GameObj<K> {
    //--- Constants --------------------------------------------------------

    /// Default speed in pixels.
    pub const DEFAULT_SPEED: f32 = 5.0;

    /// Default minimum (backwards) speed.
    pub const MIN_SPEED: f32 = -10.0;

    /// Default maximum speed.
    pub const MAX_SPEED: f32 = 10.0;

    /// Speed change applied by `speed_up` / `slow_down`.
    pub const SPEED_STEP: f32 = 0.1;

    /// Default inset for `is_beyond_stage_edge`.
    pub const DEFAULT_EDGE_INSET: Vec2 = Vec2::new(30.0, 30.0);

    /// Default inset for `can_move`. Movement checks against the bare
    /// stage edges unless the caller narrows them.
    pub const DEFAULT_MOVE_INSET: Vec2 = Vec2::ZERO;

    //--- Construction (builder only) --------------------------------------

    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new(
        id: EntityId,
        pos: Vec2,
        angle: f32,
        speed: f32,
        speed_limits: (f32, f32),
        orbit_center: Option<EntityId>,
        debug: DebugDraw,
        sprite: Sprite,
        kind: String,
    ) -> Self {
        Self {
            id,
            pos,
            angle,
            speed,
            orbit_center,
            debug,
            speed_limits,
            total_orbit_angle: 0.0,
            sprite,
            stage: None,
            kind,
        }
    }

    //--- Identity ---------------------------------------------------------

    pub fn id(&self) -> EntityId {
        self.id
    }

    /// Kind name used for queries and diagnostics.
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// The stage this object is currently on, `None` when detached.
    pub fn stage(&self) -> Option<K> {
        self.stage
    }

    pub(crate) fn set_stage(&mut self, stage: Option<K>) {
        self.stage = stage;
    }

    //--- Sprite & Geometry ------------------------------------------------

    pub fn sprite(&self) -> &Sprite {
        &self.sprite
    }

    /// Swaps the visual surface (and with it the collision mask).
    pub fn set_sprite(&mut self, sprite: Sprite) {
        self.sprite = sprite;
    }

    /// Top-left corner of the sprite.
    pub fn top_left(&self) -> Vec2 {
        self.pos - self.sprite.size() / 2.0
    }

    /// Axis-aligned bounding rectangle.
    pub fn rect(&self) -> Rect {
        let top_left = self.top_left();
        let size = self.sprite.size();
        Rect::new(top_left.x, top_left.y, size.x, size.y)
    }

    //--- Movement ---------------------------------------------------------

    /// Turns `angle` degrees towards the left (counter-clockwise).
    pub fn turn(&mut self, angle: f32) {
        self.angle += angle;
    }

    /// The displacement an `advance(distance)` call would apply.
    ///
    /// `None` uses the current speed.
    pub fn next_hop(&self, distance: Option<f32>) -> Vec2 {
        let rad = self.angle.to_radians();
        let distance = distance.unwrap_or(self.speed);
        Vec2::new(rad.cos() * distance, -rad.sin() * distance)
    }

    /// Moves forward in the current direction.
    pub fn advance(&mut self, distance: Option<f32>) {
        self.pos += self.next_hop(distance);
    }

    /// Increments speed by [`Self::SPEED_STEP`], ceiled by the maximum.
    pub fn speed_up(&mut self) {
        self.speed = (self.speed + Self::SPEED_STEP).min(self.speed_limits.1);
    }

    /// Decrements speed by [`Self::SPEED_STEP`], floored by the minimum.
    pub fn slow_down(&mut self) {
        self.speed = (self.speed - Self::SPEED_STEP).max(self.speed_limits.0);
    }

    /// The configured `(min, max)` speed clamp.
    pub fn speed_limits(&self) -> (f32, f32) {
        self.speed_limits
    }

    //--- Orbit ------------------------------------------------------------

    /// Rotates this object `angle` degrees counter-clockwise around
    /// `center`, keeping the radius constant.
    ///
    /// Polar coordinates are recomputed from the current Cartesian offset
    /// on every call, so consecutive steps do not accumulate drift in the
    /// radius beyond floating-point noise.
    pub fn orbit_step(&mut self, center: Vec2, angle: f32) {
        self.total_orbit_angle += angle;

        let offset = self.pos - center;
        let radius = offset.length();
        let current_degrees = offset.y.atan2(offset.x).to_degrees();
        let next = (current_degrees + angle).to_radians();

        self.pos = center + radius * Vec2::new(next.cos(), next.sin());
    }

    /// Accumulated signed orbit angle in degrees.
    pub fn total_orbit_angle(&self) -> f32 {
        self.total_orbit_angle
    }

    /// Count of completed revolutions: `floor(total / 360)`.
    ///
    /// Negative when the net rotation is negative.
    pub fn full_orbits(&self) -> i32 {
        (self.total_orbit_angle / 360.0).floor() as i32
    }

    //--- Collision --------------------------------------------------------

    /// Pixel-exact overlap test against another game object.
    ///
    /// Two-phase: the bounding rectangles are intersected first, and only
    /// on a rectangle hit are the pixel masks consulted at the rounded
    /// relative offset. Symmetric in its arguments.
    pub fn overlaps(&self, other: &GameObj<K>) -> bool {
        if !self.rect().intersects(&other.rect()) {
            return false;
        }

        let delta = self.top_left() - other.top_left();
        let offset = (delta.x.round() as i32, delta.y.round() as i32);
        other.sprite.mask().overlaps(self.sprite.mask(), offset)
    }

    //--- Base Draw --------------------------------------------------------

    /// The framework-mandated draw: sprite blit plus debug overlays.
    ///
    /// Runs on every `draw` dispatch before any override.
    pub(crate) fn base_draw(&self, canvas: &mut dyn Canvas) {
        if let Some(image) = self.sprite.image() {
            canvas.blit(image, self.top_left(), self.angle);
        }
        if let Some(color) = self.debug.center {
            canvas.fill_circle(self.pos, 5.0, color);
        }
        if let Some(color) = self.debug.rect {
            canvas.draw_rect(self.rect(), color);
        }
        if let Some(color) = self.debug.pos_text {
            let label = format!(
                "({},{})",
                self.pos.x.round() as i32,
                self.pos.y.round() as i32
            );
            canvas.draw_text(&label, self.pos, color);
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::stage::StageKey;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    enum TestStage {
        Main,
    }
    impl StageKey for TestStage {}

    fn obj() -> GameObj<TestStage> {
        GameObj::new(
            EntityId(1),
            Vec2::ZERO,
            0.0,
            GameObj::<TestStage>::DEFAULT_SPEED,
            (
                GameObj::<TestStage>::MIN_SPEED,
                GameObj::<TestStage>::MAX_SPEED,
            ),
            None,
            DebugDraw::default(),
            Sprite::invisible(),
            "GameObj".to_string(),
        )
    }

    fn assert_close(a: Vec2, b: Vec2) {
        assert!((a - b).length() < 1e-4, "{a:?} != {b:?}");
    }

    //--- Movement Tests ---------------------------------------------------

    #[test]
    fn next_hop_points_along_positive_x_at_zero_degrees() {
        let o = obj();
        assert_close(o.next_hop(Some(10.0)), Vec2::new(10.0, 0.0));
    }

    /// 90° heads straight up on a y-down screen.
    #[test]
    fn next_hop_negates_vertical_axis() {
        let mut o = obj();
        o.angle = 90.0;
        assert_close(o.next_hop(Some(10.0)), Vec2::new(0.0, -10.0));

        o.angle = 270.0;
        assert_close(o.next_hop(Some(10.0)), Vec2::new(0.0, 10.0));
    }

    #[test]
    fn next_hop_defaults_to_current_speed() {
        let mut o = obj();
        o.speed = 3.0;
        assert_close(o.next_hop(None), Vec2::new(3.0, 0.0));
    }

    #[test]
    fn advance_applies_hop_to_position() {
        let mut o = obj();
        o.pos = Vec2::new(100.0, 100.0);
        o.angle = 180.0;
        o.advance(Some(20.0));
        assert_close(o.pos, Vec2::new(80.0, 100.0));
    }

    #[test]
    fn turn_accumulates_counter_clockwise() {
        let mut o = obj();
        o.turn(45.0);
        o.turn(45.0);
        assert_eq!(o.angle, 90.0);
        o.turn(-120.0);
        assert_eq!(o.angle, -30.0);
    }

    #[test]
    fn speed_is_clamped_at_both_limits() {
        let mut o = obj();
        o.speed = 9.95;
        o.speed_up();
        o.speed_up();
        assert_eq!(o.speed, GameObj::<TestStage>::MAX_SPEED);

        o.speed = -9.95;
        o.slow_down();
        o.slow_down();
        assert_eq!(o.speed, GameObj::<TestStage>::MIN_SPEED);
    }

    //--- Orbit Tests ------------------------------------------------------

    /// Radius stays constant over an arbitrary step sequence.
    #[test]
    fn orbit_preserves_radius() {
        let mut o = obj();
        let center = Vec2::new(50.0, 50.0);
        o.pos = Vec2::new(80.0, 50.0);

        for angle in [10.0, -35.0, 123.0, 720.0, -0.5] {
            o.orbit_step(center, angle);
            let radius = (o.pos - center).length();
            assert!((radius - 30.0).abs() < 1e-3, "radius drifted to {radius}");
        }
    }

    #[test]
    fn full_orbits_floor_semantics() {
        let mut o = obj();
        let center = Vec2::new(0.0, 0.0);
        o.pos = Vec2::new(10.0, 0.0);

        for _ in 0..4 {
            o.orbit_step(center, 90.0);
        }
        assert_eq!(o.full_orbits(), 1);

        o.orbit_step(center, 90.0);
        assert_eq!(o.full_orbits(), 1);
    }

    /// Negative net rotation floors downward.
    #[test]
    fn full_orbits_negative() {
        let mut o = obj();
        o.pos = Vec2::new(10.0, 0.0);
        o.orbit_step(Vec2::ZERO, -10.0);
        assert_eq!(o.full_orbits(), -1);

        o.orbit_step(Vec2::ZERO, -350.0);
        assert_eq!(o.full_orbits(), -1);

        o.orbit_step(Vec2::ZERO, -10.0);
        assert_eq!(o.full_orbits(), -2);
    }

    #[test]
    fn orbit_quarter_turn_moves_to_expected_quadrant() {
        let mut o = obj();
        o.pos = Vec2::new(10.0, 0.0);
        o.orbit_step(Vec2::ZERO, 90.0);
        assert_close(o.pos, Vec2::new(0.0, 10.0));
    }

    //--- Collision Tests --------------------------------------------------

    fn solid(pos: Vec2) -> GameObj<TestStage> {
        let mut o = obj();
        o.set_sprite(Sprite::opaque("block", 10, 10));
        o.pos = pos;
        o
    }

    #[test]
    fn overlapping_solids_collide_symmetrically() {
        let a = solid(Vec2::new(0.0, 0.0));
        let b = solid(Vec2::new(5.0, 5.0));
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
    }

    #[test]
    fn distant_rects_short_circuit_to_false() {
        let a = solid(Vec2::new(0.0, 0.0));
        let b = solid(Vec2::new(100.0, 0.0));
        assert!(!a.overlaps(&b));
        assert!(!b.overlaps(&a));
    }

    /// Rect hit but masks miss: only the pixel phase can tell.
    #[test]
    fn intersecting_rects_with_disjoint_pixels_do_not_collide() {
        // left half solid / right half solid, 4x4 sprites
        let mut left_rgba = vec![0u8; 4 * 4 * 4];
        let mut right_rgba = vec![0u8; 4 * 4 * 4];
        for y in 0..4usize {
            for x in 0..4usize {
                let i = (y * 4 + x) * 4 + 3;
                if x < 2 {
                    left_rgba[i] = 255;
                } else {
                    right_rgba[i] = 255;
                }
            }
        }

        let mut a = obj();
        a.set_sprite(Sprite::from_rgba("left", 4, 4, &left_rgba));
        let mut b = obj();
        b.set_sprite(Sprite::from_rgba("right", 4, 4, &right_rgba));

        // Same center: rects coincide, solid halves do not touch.
        assert!(!a.overlaps(&b));
        assert!(!b.overlaps(&a));

        // Shift a to the right so its solid left half meets b's right half.
        a.pos = Vec2::new(2.0, 0.0);
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
    }

    #[test]
    fn invisible_default_sprite_never_collides() {
        let a = obj();
        let b = solid(Vec2::ZERO);
        assert!(!a.overlaps(&b));
        assert!(!b.overlaps(&a));
    }
}
