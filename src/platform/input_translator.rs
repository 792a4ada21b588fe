//=========================================================================
// Input Translator
//=========================================================================
//
// Converts platform-specific Winit events into the portable payloads the
// production entry points take.
//
// Architecture:
//   Winit Events → InputTranslator → Production::on_* entry points
//
// Stateful on three axes: modifier state is cached from ModifiersChanged
// events and applied to all subsequent key events; the last cursor
// position is kept so move events can report relative motion; held
// standard buttons are tracked for move events. Unmapped keys (F13-F24,
// exotic keyboards) are filtered (returns None).
//
//=========================================================================

//=== External Dependencies ===============================================

use glam::Vec2;
use winit::{
    event::ElementState,
    event::{KeyEvent as WinitKeyEvent, MouseButton as WinitMouseButton},
    keyboard::{KeyCode as WinitKeyCode, ModifiersState, PhysicalKey},
};

//=== Internal Dependencies ===============================================

use crate::core::input::{ButtonSet, KeyCode, Modifiers, MouseButton};

//=== Translated Events ===================================================

/// A keyboard event ready for the production.
pub(crate) struct TranslatedKey {
    pub key: KeyCode,
    pub modifiers: Modifiers,
    /// Produced character, down events only.
    pub text: Option<char>,
    pub pressed: bool,
}

/// A cursor move ready for the production.
pub(crate) struct TranslatedMove {
    pub pos: Vec2,
    pub rel: Vec2,
    pub held: ButtonSet,
}

//=== InputTranslator =====================================================

/// Converts Winit events to engine payloads with stateful modifier,
/// cursor and held-button tracking.
pub(crate) struct InputTranslator {
    current_modifiers: Modifiers,
    cursor: Vec2,
    held: ButtonSet,
}

impl InputTranslator {
    //--- Construction -----------------------------------------------------

    pub(crate) fn new() -> Self {
        Self {
            current_modifiers: Modifiers::NONE,
            cursor: Vec2::ZERO,
            held: ButtonSet::NONE,
        }
    }

    //--- Modifier State Management ----------------------------------------

    /// Updates cached modifier state (applied to subsequent events).
    pub(crate) fn update_modifiers(&mut self, state: ModifiersState) {
        self.current_modifiers = Modifiers::from(state);
    }

    pub(crate) fn current_modifiers(&self) -> Modifiers {
        self.current_modifiers
    }

    //--- Event Translation ------------------------------------------------

    /// Translates a Winit key event. Filters unmapped keys.
    pub(crate) fn translate_key(&self, event: &WinitKeyEvent) -> Option<TranslatedKey> {
        let key = match event.physical_key {
            PhysicalKey::Code(code) => KeyCode::from(code),
            _ => return None,
        };
        if matches!(key, KeyCode::Unidentified) {
            return None;
        }

        let pressed = event.state == ElementState::Pressed;
        let text = if pressed {
            event.text.as_ref().and_then(|text| text.chars().next())
        } else {
            None
        };

        Some(TranslatedKey {
            key,
            modifiers: self.current_modifiers,
            text,
            pressed,
        })
    }

    /// Translates a button event, updating the held set for later move
    /// events. Returns the button and whether it went down.
    pub(crate) fn translate_button(
        &mut self,
        button: WinitMouseButton,
        state: ElementState,
    ) -> (MouseButton, bool) {
        let button = MouseButton::from(button);
        let pressed = state == ElementState::Pressed;
        self.held.set(button, pressed);
        (button, pressed)
    }

    /// Translates a cursor move, deriving relative motion from the
    /// previous position.
    pub(crate) fn translate_move(&mut self, x: f32, y: f32) -> TranslatedMove {
        let pos = Vec2::new(x, y);
        let rel = pos - self.cursor;
        self.cursor = pos;
        TranslatedMove { pos, rel, held: self.held }
    }

    /// The last known cursor position.
    pub(crate) fn cursor(&self) -> Vec2 {
        self.cursor
    }
}

//=========================================================================
// Winit Conversions
//=========================================================================

/// Winit normalizes platform keys (macOS Cmd → Ctrl, Option → Alt).
impl From<ModifiersState> for Modifiers {
    fn from(state: ModifiersState) -> Self {
        Self {
            shift: state.shift_key(),
            ctrl: state.control_key(),
            alt: state.alt_key(),
        }
    }
}

/// Converts Winit physical key codes to engine key codes.
///
/// Maps A-Z, 0-9, arrows, and common special keys. Unmapped keys (F13-F24,
/// numpad, media keys) return `KeyCode::Unidentified`.
impl From<WinitKeyCode> for KeyCode {
    fn from(code: WinitKeyCode) -> Self {
        use WinitKeyCode::*;
        match code {
            //--- Digits -------------------------------------------------------

            Digit0 => KeyCode::Digit0,
            Digit1 => KeyCode::Digit1,
            Digit2 => KeyCode::Digit2,
            Digit3 => KeyCode::Digit3,
            Digit4 => KeyCode::Digit4,
            Digit5 => KeyCode::Digit5,
            Digit6 => KeyCode::Digit6,
            Digit7 => KeyCode::Digit7,
            Digit8 => KeyCode::Digit8,
            Digit9 => KeyCode::Digit9,

            //--- Letters ------------------------------------------------------

            KeyA => KeyCode::KeyA,
            KeyB => KeyCode::KeyB,
            KeyC => KeyCode::KeyC,
            KeyD => KeyCode::KeyD,
            KeyE => KeyCode::KeyE,
            KeyF => KeyCode::KeyF,
            KeyG => KeyCode::KeyG,
            KeyH => KeyCode::KeyH,
            KeyI => KeyCode::KeyI,
            KeyJ => KeyCode::KeyJ,
            KeyK => KeyCode::KeyK,
            KeyL => KeyCode::KeyL,
            KeyM => KeyCode::KeyM,
            KeyN => KeyCode::KeyN,
            KeyO => KeyCode::KeyO,
            KeyP => KeyCode::KeyP,
            KeyQ => KeyCode::KeyQ,
            KeyR => KeyCode::KeyR,
            KeyS => KeyCode::KeyS,
            KeyT => KeyCode::KeyT,
            KeyU => KeyCode::KeyU,
            KeyV => KeyCode::KeyV,
            KeyW => KeyCode::KeyW,
            KeyX => KeyCode::KeyX,
            KeyY => KeyCode::KeyY,
            KeyZ => KeyCode::KeyZ,

            //--- Arrows -------------------------------------------------------

            ArrowUp => KeyCode::ArrowUp,
            ArrowDown => KeyCode::ArrowDown,
            ArrowLeft => KeyCode::ArrowLeft,
            ArrowRight => KeyCode::ArrowRight,

            //--- Special ------------------------------------------------------

            Space => KeyCode::Space,
            Enter => KeyCode::Enter,
            Escape => KeyCode::Escape,
            Tab => KeyCode::Tab,
            Backspace => KeyCode::Backspace,
            Delete => KeyCode::Delete,

            //--- Unmapped (return Unidentified) -------------------------------

            _ => KeyCode::Unidentified,
        }
    }
}

/// Converts Winit mouse buttons to engine buttons.
///
/// Left/Right/Middle mapped directly; Back/Forward/Other → Other.
impl From<WinitMouseButton> for MouseButton {
    fn from(button: WinitMouseButton) -> Self {
        match button {
            WinitMouseButton::Left => MouseButton::Left,
            WinitMouseButton::Right => MouseButton::Right,
            WinitMouseButton::Middle => MouseButton::Middle,
            _ => MouseButton::Other,
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn make_modifiers(shift: bool, ctrl: bool, alt: bool) -> ModifiersState {
        let mut state = ModifiersState::empty();
        if shift {
            state.insert(ModifiersState::SHIFT);
        }
        if ctrl {
            state.insert(ModifiersState::CONTROL);
        }
        if alt {
            state.insert(ModifiersState::ALT);
        }
        state
    }

    #[test]
    fn starts_with_no_modifiers() {
        let translator = InputTranslator::new();
        let mods = translator.current_modifiers();
        assert!(!mods.shift && !mods.ctrl && !mods.alt);
    }

    #[test]
    fn modifiers_are_sticky_until_changed() {
        let mut translator = InputTranslator::new();
        translator.update_modifiers(make_modifiers(true, false, true));

        let mods = translator.current_modifiers();
        assert!(mods.shift && !mods.ctrl && mods.alt);

        translator.update_modifiers(make_modifiers(false, false, false));
        assert_eq!(translator.current_modifiers(), Modifiers::NONE);
    }

    #[test]
    fn move_reports_relative_motion() {
        let mut translator = InputTranslator::new();

        let first = translator.translate_move(10.0, 20.0);
        assert_eq!(first.pos, Vec2::new(10.0, 20.0));
        assert_eq!(first.rel, Vec2::new(10.0, 20.0));

        let second = translator.translate_move(15.0, 18.0);
        assert_eq!(second.pos, Vec2::new(15.0, 18.0));
        assert_eq!(second.rel, Vec2::new(5.0, -2.0));
    }

    #[test]
    fn held_buttons_appear_in_move_events() {
        let mut translator = InputTranslator::new();
        translator.translate_button(WinitMouseButton::Left, ElementState::Pressed);

        let during_drag = translator.translate_move(5.0, 5.0);
        assert!(during_drag.held.contains(MouseButton::Left));
        assert!(!during_drag.held.contains(MouseButton::Right));

        translator.translate_button(WinitMouseButton::Left, ElementState::Released);
        let after = translator.translate_move(6.0, 6.0);
        assert!(!after.held.contains(MouseButton::Left));
    }

    #[test]
    fn letters_and_arrows_are_mapped() {
        assert_eq!(KeyCode::from(WinitKeyCode::KeyA), KeyCode::KeyA);
        assert_eq!(KeyCode::from(WinitKeyCode::Digit7), KeyCode::Digit7);
        assert_eq!(KeyCode::from(WinitKeyCode::ArrowLeft), KeyCode::ArrowLeft);
        assert_eq!(KeyCode::from(WinitKeyCode::F13), KeyCode::Unidentified);
    }

    #[test]
    fn side_buttons_collapse_to_other() {
        assert_eq!(MouseButton::from(WinitMouseButton::Back), MouseButton::Other);
        assert_eq!(
            MouseButton::from(WinitMouseButton::Middle),
            MouseButton::Middle
        );
    }
}
