// Card Editor - platform/mod.rs
//
// Platform abstraction layer: config file, directories, filesystem access.
// Dependencies: standard library, directories crate, core value types.
// Must NOT depend on: app, ui.

pub mod config;
pub mod fs;
