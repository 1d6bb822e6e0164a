//! Player input module - turns keys into movement intent and one-shot actions.

pub mod components;
pub mod plugin;
pub mod systems;

pub use plugin::PlayerPlugin;
