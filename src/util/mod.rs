// Card Editor - util/mod.rs
//
// Utility modules: error types, named constants, logging setup.
// No dependencies on app, ui, or platform layers.

pub mod constants;
pub mod error;
pub mod logging;
