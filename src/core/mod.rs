//! Core module housing session settings and wall-clock timing.
pub mod config;
pub mod plugin;

pub use config::YardSettings;
pub use plugin::{CorePlugin, SimulationClock};
