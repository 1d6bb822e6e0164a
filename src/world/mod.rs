//! World module: scenery, raccoon models and the follow camera mirroring the yard simulation.
pub mod components;
pub mod plugin;
pub mod scenery;
pub mod systems;

pub use plugin::WorldPlugin;
