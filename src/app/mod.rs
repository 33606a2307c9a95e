// Card Editor - app/mod.rs
//
// Application layer: state management and background file loading.
// Dependencies: core and platform layers.
// Must NOT depend on: ui.

pub mod loader;
pub mod state;
