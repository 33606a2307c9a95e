// Card Editor - ui/panels/mod.rs

pub mod about;
pub mod cards;
