//=========================================================================
// Platform Subsystem
//=========================================================================
//
// Bridges Winit (OS-level events) with the production.
//
// Architecture:
// ```text
//  Winit Event Loop (main thread)
//    ↓
//  InputTranslator
//    ├─ Converts Winit types → engine payloads
//    └─ Tracks modifiers, cursor, held buttons
//    ↓
//  Production entry points (on_key_*, on_mouse_*)
//
//  RedrawRequested = frame boundary:
//    renderer frame → production.draw → production.update
//    → request next redraw
// ```
//
// Everything runs single-threaded on the main thread (a Winit mandate on
// macOS/iOS anyway); events are forwarded to the production in the order
// the OS delivers them, which is the only ordering the hook model
// promises.
//
// Rendering is behind the `Renderer` seam: the host brings whatever
// draws pixels and resolves image names; this layer only decides when a
// frame happens.
//
//=========================================================================

//=== Module Declarations =================================================

mod input_translator;

//=== External Dependencies ===============================================

use log::{debug, error, info, trace};
use thiserror::Error;
use winit::{
    application::ApplicationHandler,
    dpi::LogicalSize,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, EventLoop},
    window::{Window, WindowAttributes},
};

//=== Internal Dependencies ===============================================

use crate::core::canvas::Canvas;
use crate::core::stage::{Production, StageKey};
use input_translator::InputTranslator;

//=== Renderer ============================================================

/// Host-supplied frame producer.
///
/// Called once per `RedrawRequested`; the implementation prepares a
/// surface, hands a [`Canvas`] for it to the closure, and presents the
/// result afterwards.
pub trait Renderer {
    fn frame(&mut self, draw: &mut dyn FnMut(&mut dyn Canvas));
}

//=== PlatformError =======================================================

/// Event-loop initialization and runtime errors. Fatal: if the loop
/// cannot be created or breaks, the show cannot go on.
#[derive(Debug, Error)]
pub enum PlatformError {
    #[error("event loop creation failed: {0}")]
    EventLoopCreation(winit::error::EventLoopError),

    #[error("event loop error: {0}")]
    EventLoopExecution(winit::error::EventLoopError),
}

//=== Platform ============================================================

/// Window owner and event pump driving one production.
///
/// # Lifecycle
///
/// 1. `Platform::new(production, renderer)`
/// 2. `platform.run()` — blocks in the Winit event loop
/// 3. Window close → loop exits
pub struct Platform<K: StageKey, R: Renderer> {
    /// OS window handle, created lazily in `resumed` (mobile resume may
    /// call it again, the window is kept).
    window: Option<Window>,
    production: Production<K>,
    renderer: R,
    translator: InputTranslator,
}

impl<K: StageKey, R: Renderer> Platform<K, R> {
    //--- Construction -----------------------------------------------------

    pub fn new(production: Production<K>, renderer: R) -> Self {
        info!(target: "platform", "Platform subsystem initialized");
        Self {
            window: None,
            production,
            renderer,
            translator: InputTranslator::new(),
        }
    }

    //--- Execution --------------------------------------------------------

    /// Runs the event loop until the window closes.
    ///
    /// Must be called on the main thread (Winit requirement on
    /// macOS/iOS).
    pub fn run(mut self) -> Result<(), PlatformError> {
        debug!(target: "platform", "Starting Winit event loop");

        let event_loop = EventLoop::new().map_err(PlatformError::EventLoopCreation)?;
        event_loop
            .run_app(&mut self)
            .map_err(PlatformError::EventLoopExecution)
    }

    //--- Frame ------------------------------------------------------------

    /// One frame: draw the current stage, then advance it one tick.
    fn frame(&mut self) {
        let production = &mut self.production;
        self.renderer.frame(&mut |canvas| {
            production.draw(canvas);
        });
        production.update();
    }
}

//=== Winit Integration ===================================================

impl<K: StageKey, R: Renderer> ApplicationHandler for Platform<K, R> {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            debug!(target: "platform", "Window already exists (mobile resume?)");
            return;
        }

        let bounds = self.production.bounds();
        let attrs = WindowAttributes::default()
            .with_title(self.production.title().to_string())
            .with_inner_size(LogicalSize::new(bounds.width, bounds.height));

        match event_loop.create_window(attrs) {
            Ok(window) => {
                info!(
                    target: "platform",
                    "Window created: {}x{} @ {}x DPI",
                    window.inner_size().width,
                    window.inner_size().height,
                    window.scale_factor()
                );
                window.request_redraw();
                self.window = Some(window);
            }
            Err(e) => {
                error!(target: "platform", "Window creation failed: {}", e);
                event_loop.exit();
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: winit::window::WindowId,
        event: WindowEvent,
    ) {
        match &event {
            WindowEvent::CloseRequested => {
                info!(target: "platform", "Window close requested");
                event_loop.exit();
            }

            WindowEvent::ModifiersChanged(state) => {
                trace!(target: "platform::input", "Modifiers changed: {:?}", state);
                self.translator.update_modifiers(state.state());
            }

            WindowEvent::CursorMoved { position, .. } => {
                let translated = self
                    .translator
                    .translate_move(position.x as f32, position.y as f32);
                self.production
                    .on_mouse_move(translated.pos, translated.rel, translated.held);
            }

            WindowEvent::KeyboardInput { event: key_event, .. } => {
                match self.translator.translate_key(key_event) {
                    Some(key) if key.pressed => {
                        self.production.on_key_down(key.key, key.modifiers, key.text);
                    }
                    Some(key) => {
                        self.production.on_key_up(key.key, key.modifiers);
                    }
                    None => {
                        trace!(target: "platform::input", "Unmapped key ignored");
                    }
                }
            }

            WindowEvent::MouseInput { state, button, .. } => {
                let (button, pressed) = self.translator.translate_button(*button, *state);
                let pos = self.translator.cursor();
                if pressed {
                    self.production.on_mouse_down(pos, button);
                } else {
                    self.production.on_mouse_up(pos, button);
                }
            }

            WindowEvent::RedrawRequested => {
                self.frame();

                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }

            _ => {
                // Ignore: Resized, Focused, etc.
            }
        }
    }
}
