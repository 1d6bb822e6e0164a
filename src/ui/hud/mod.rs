// src/ui/hud/mod.rs
//
// Heads-up display for the yard session: clock, progress counters,
// the current toast and a pause banner.

pub mod components;
pub mod plugin;
pub mod systems;

pub use plugin::UiPlugin;
