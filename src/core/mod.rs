// Card Editor - core/mod.rs
//
// Core business logic layer: the card model and the load/normalise/edit/
// export pipeline.
// Dependencies: util layer and serde only.
// Must NOT depend on: ui, platform, app, or touch the filesystem.

pub mod collection;
pub mod edit;
pub mod export;
pub mod model;
pub mod normalize;
