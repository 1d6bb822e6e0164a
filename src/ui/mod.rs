// src/ui/mod.rs
//
// UI module providing screen-space overlays for the yard session.
//
// Current features:
// - HUD (session clock, food/mischief/affection counters, toasts, pause banner)

pub mod hud;

// Re-export the main plugin
pub use hud::UiPlugin;
