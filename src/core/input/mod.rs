//=========================================================================
// Input
//=========================================================================
//
// Portable input payloads and the mouse-state tracker.
//
// Architecture:
//   platform::InputTranslator → KeyEvent / MouseEvent → Production
//     Production keeps MouseState current before dispatching hooks
//
//=========================================================================

//=== Module Declarations =================================================

pub mod event;
mod mouse_state;

//=== Public API ==========================================================

pub use event::{ButtonSet, KeyCode, KeyEvent, Modifiers, MouseButton, MouseEvent};
pub use mouse_state::MouseState;
