//=========================================================================
// Stagecraft — Library Root
//
// This crate defines the public API surface of Stagecraft, a 2D scene
// and entity framework: stages holding casts of game objects, a hook
// dispatcher with roles, ad-hoc overrides and typo diagnostics, and
// pixel-accurate collision.
//
// Responsibilities:
// - Expose the core systems (`core`) for framework-level use
// - Re-export the platform runner (`Platform`) so hosts do not need to
//   know the internal module structure
//
// Typical usage:
// ```no_run
// use stagecraft::prelude::*;
//
// #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
// enum Scene {
//     Beach,
// }
// impl StageKey for Scene {}
//
// fn main() -> Result<(), StageError> {
//     let mut production = Production::builder()
//         .title("Crab Beach")
//         .bounds(560.0, 460.0)
//         .stage(Scene::Beach, Stage::new().with_background("sand"))
//         .opening_stage(Scene::Beach)
//         .build()?;
//
//     let crab = production.spawn(
//         GameObjBuilder::new()
//             .kind("Crab")
//             .sprite(Sprite::opaque("crab", 64, 48)),
//     );
//     production.enter(crab, Scene::Beach)?;
//     Ok(())
// }
// ```
//
//=========================================================================

//--- Public Modules ------------------------------------------------------
//
// `core` contains all framework systems (stages, entities, dispatch,
// input, the canvas seam). It is exposed publicly for extensibility, but
// normal game code will mostly use the `prelude`.
//
pub mod core;
pub mod prelude;

//--- Internal Modules ----------------------------------------------------
//
// `platform` contains OS-specific logic (window, Winit integration,
// event loop). Its runner types are re-exported below; the wiring stays
// private.
//
mod platform;

//--- Public Exports ------------------------------------------------------

pub use platform::{Platform, PlatformError, Renderer};
