//=========================================================================
// Mouse State
//=========================================================================
//
// Tracks the pressed-button set, the last cursor position, and a one-shot
// "moved" flag.
//
// Mutated only by the production's event entry points (which the platform
// adapter drives); game hooks query it read-mostly. The `moved` query is
// edge-triggered: reading it clears the flag, so two consecutive reads
// without an intervening actual movement yield `true` then `false`.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::HashSet;

use glam::Vec2;

//=== Internal Dependencies ===============================================

use super::event::MouseButton;

//=== MouseState ==========================================================

/// The current state of the mouse.
#[derive(Debug, Default)]
pub struct MouseState {
    pressed: HashSet<MouseButton>,
    pos: Vec2,
    moved: bool,
}

impl MouseState {
    //--- Construction -----------------------------------------------------

    /// Creates a state with no buttons pressed, position at origin.
    pub fn new() -> Self {
        Self {
            pressed: HashSet::new(),
            pos: Vec2::ZERO,
            moved: false,
        }
    }

    //--- Mutation (crate-internal) ----------------------------------------

    /// Marks `button` as pressed.
    pub(crate) fn press(&mut self, button: MouseButton) {
        self.pressed.insert(button);
    }

    /// Marks `button` as released.
    pub(crate) fn release(&mut self, button: MouseButton) {
        self.pressed.remove(&button);
    }

    /// Updates the cursor position.
    ///
    /// Sets the moved flag only when `pos` differs from the stored value,
    /// so repeated reports of the same position never count as movement.
    pub(crate) fn set_pos(&mut self, pos: Vec2) {
        if pos != self.pos {
            self.moved = true;
        }
        self.pos = pos;
    }

    //--- Queries ----------------------------------------------------------

    /// Returns `true` while `button` is held.
    pub fn is_pressed(&self, button: MouseButton) -> bool {
        self.pressed.contains(&button)
    }

    /// Returns the last known cursor position.
    pub fn pos(&self) -> Vec2 {
        self.pos
    }

    /// Edge-triggered movement query.
    ///
    /// Returns the current flag value and unconditionally resets it, so an
    /// immediately following call returns `false` until the next distinct
    /// position change.
    pub fn moved(&mut self) -> bool {
        let result = self.moved;
        self.moved = false;
        result
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn press_and_release_update_button_state() {
        let mut mouse = MouseState::new();
        assert!(!mouse.is_pressed(MouseButton::Left));

        mouse.press(MouseButton::Left);
        mouse.press(MouseButton::Right);
        assert!(mouse.is_pressed(MouseButton::Left));
        assert!(mouse.is_pressed(MouseButton::Right));
        assert!(!mouse.is_pressed(MouseButton::Middle));

        mouse.release(MouseButton::Left);
        assert!(!mouse.is_pressed(MouseButton::Left));
        assert!(mouse.is_pressed(MouseButton::Right));
    }

    #[test]
    fn releasing_unpressed_button_is_harmless() {
        let mut mouse = MouseState::new();
        mouse.release(MouseButton::Middle);
        assert!(!mouse.is_pressed(MouseButton::Middle));
    }

    /// `moved` returns true exactly once after a position change, then
    /// false until another distinct change occurs.
    #[test]
    fn moved_is_edge_triggered() {
        let mut mouse = MouseState::new();
        assert!(!mouse.moved());

        mouse.set_pos(Vec2::new(10.0, 10.0));
        assert!(mouse.moved());
        assert!(!mouse.moved());
        assert!(!mouse.moved());

        mouse.set_pos(Vec2::new(10.0, 11.0));
        assert!(mouse.moved());
        assert!(!mouse.moved());
    }

    #[test]
    fn same_position_does_not_set_moved() {
        let mut mouse = MouseState::new();
        mouse.set_pos(Vec2::new(5.0, 5.0));
        assert!(mouse.moved());

        mouse.set_pos(Vec2::new(5.0, 5.0));
        assert!(!mouse.moved());
    }

    #[test]
    fn pos_reflects_last_update() {
        let mut mouse = MouseState::new();
        mouse.set_pos(Vec2::new(1.0, 2.0));
        mouse.set_pos(Vec2::new(3.0, 4.0));
        assert_eq!(mouse.pos(), Vec2::new(3.0, 4.0));
    }
}
