//=========================================================================
// Input Event Types
//=========================================================================
//
// Engine-stable representations of low-level input.
//
// This module abstracts platform-specific input (Winit here, anything
// else tomorrow) into the portable payloads the hook system hands to
// stages and game objects.
//
// Event flow:
// ```text
// Platform Layer (Winit)
//         ↓
//   InputTranslator
//         ↓
//   KeyEvent / MouseEvent (this module)
//         ↓
//   Production entry points → Dispatcher → hooks
// ```
//
//=========================================================================

//=== External Dependencies ===============================================

use glam::Vec2;

//=== MouseButton =========================================================

/// Physical mouse button identifier.
///
/// The `Other` variant covers side buttons, thumb buttons and anything
/// else the platform reports beyond the standard three.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Primary button (typically left).
    Left,

    /// Secondary button (typically right).
    Right,

    /// Middle button (wheel click).
    Middle,

    /// Any other button.
    Other,
}

//=== KeyCode =============================================================

/// Physical keyboard key identifier.
///
/// Represents the physical key location, not the character produced
/// (`KeyA` is the same key on QWERTY and AZERTY). The character, where
/// one exists, travels in [`KeyEvent::text`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    //--- Numeric Keys -----------------------------------------------------

    Digit0, Digit1, Digit2, Digit3, Digit4,
    Digit5, Digit6, Digit7, Digit8, Digit9,

    //--- Alphabetic Keys --------------------------------------------------

    KeyA, KeyB, KeyC, KeyD, KeyE, KeyF, KeyG, KeyH, KeyI,
    KeyJ, KeyK, KeyL, KeyM, KeyN, KeyO, KeyP, KeyQ, KeyR,
    KeyS, KeyT, KeyU, KeyV, KeyW, KeyX, KeyY, KeyZ,

    //--- Arrow Keys -------------------------------------------------------

    ArrowDown,
    ArrowLeft,
    ArrowRight,
    ArrowUp,

    //--- Special Keys -----------------------------------------------------

    Space,
    Enter,
    Escape,
    Tab,
    Backspace,
    Delete,

    /// Fallback for keys not explicitly mapped by the input layer.
    Unidentified,
}

//=== Modifiers ===========================================================

/// Modifier key state attached to keyboard and mouse-button events.
///
/// Winit normalizes platform keys (macOS Cmd → Ctrl, Option → Alt).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
}

impl Modifiers {
    pub const NONE: Modifiers = Modifiers { shift: false, ctrl: false, alt: false };
    pub const SHIFT: Modifiers = Modifiers { shift: true, ctrl: false, alt: false };
    pub const CTRL: Modifiers = Modifiers { shift: false, ctrl: true, alt: false };
    pub const ALT: Modifiers = Modifiers { shift: false, ctrl: false, alt: true };
}

//=== ButtonSet ===========================================================

/// The set of standard mouse buttons held during a mouse-move event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ButtonSet {
    pub left: bool,
    pub middle: bool,
    pub right: bool,
}

impl ButtonSet {
    pub const NONE: ButtonSet = ButtonSet { left: false, middle: false, right: false };

    /// Returns `true` if `button` is in the set. `Other` buttons are not
    /// tracked and always report `false`.
    pub fn contains(&self, button: MouseButton) -> bool {
        match button {
            MouseButton::Left => self.left,
            MouseButton::Middle => self.middle,
            MouseButton::Right => self.right,
            MouseButton::Other => false,
        }
    }

    pub(crate) fn set(&mut self, button: MouseButton, held: bool) {
        match button {
            MouseButton::Left => self.left = held,
            MouseButton::Middle => self.middle = held,
            MouseButton::Right => self.right = held,
            MouseButton::Other => {}
        }
    }
}

//=== KeyEvent ============================================================

/// Payload handed to `on_key_down` / `on_key_up` hooks.
///
/// `text` carries the produced character on key-down events where one
/// exists; it is `None` on key-up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    pub key: KeyCode,
    pub modifiers: Modifiers,
    pub text: Option<char>,
}

//=== MouseEvent ==========================================================

/// Payload handed to `on_mouse_down` / `on_mouse_up` / `on_mouse_move`
/// hooks.
///
/// `button` is set on down/up events; `rel` and `held` are meaningful on
/// move events. Handlers read the fields they care about, mirroring the
/// original hooks' subset parameter lists.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MouseEvent {
    /// Cursor position in screen coordinates.
    pub pos: Vec2,

    /// Button that went down or up, `None` on move events.
    pub button: Option<MouseButton>,

    /// Movement since the previous cursor position, zero on down/up.
    pub rel: Vec2,

    /// Buttons held during a move event.
    pub held: ButtonSet,
}

impl MouseEvent {
    /// Down/up event for `button` at `pos`.
    pub fn click(pos: Vec2, button: MouseButton) -> Self {
        Self { pos, button: Some(button), rel: Vec2::ZERO, held: ButtonSet::NONE }
    }

    /// Move event.
    pub fn movement(pos: Vec2, rel: Vec2, held: ButtonSet) -> Self {
        Self { pos, button: None, rel, held }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn button_set_tracks_standard_buttons() {
        let mut held = ButtonSet::NONE;
        held.set(MouseButton::Left, true);
        held.set(MouseButton::Right, true);

        assert!(held.contains(MouseButton::Left));
        assert!(held.contains(MouseButton::Right));
        assert!(!held.contains(MouseButton::Middle));

        held.set(MouseButton::Left, false);
        assert!(!held.contains(MouseButton::Left));
    }

    #[test]
    fn button_set_ignores_other_buttons() {
        let mut held = ButtonSet::NONE;
        held.set(MouseButton::Other, true);
        assert!(!held.contains(MouseButton::Other));
    }

    #[test]
    fn click_event_has_no_motion() {
        let event = MouseEvent::click(Vec2::new(10.0, 20.0), MouseButton::Left);
        assert_eq!(event.button, Some(MouseButton::Left));
        assert_eq!(event.rel, Vec2::ZERO);
        assert_eq!(event.held, ButtonSet::NONE);
    }
}
