//! Rendering-free yard simulation: actors, food, scoring and the tick driver.
pub mod diagnostics;
pub mod events;
pub mod geometry;
pub mod interaction;
pub mod locomotion;
pub mod plugin;
pub mod schedule;
pub mod score;
pub mod state;
pub mod supply;
pub mod toast;
pub mod wander;

pub use plugin::YardPlugin;
