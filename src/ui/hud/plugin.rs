// src/ui/hud/plugin.rs
//
// UiPlugin spawns the HUD and refreshes it after each simulation step.

use bevy::prelude::*;

use crate::yard::plugin::step_yard_simulation;

use super::components::HudSettings;
use super::systems::{spawn_hud, update_hud};

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        info!("UiPlugin registered");

        app.insert_resource(HudSettings::default())
            .add_systems(Startup, spawn_hud)
            .add_systems(Update, update_hud.after(step_yard_simulation));
    }
}
