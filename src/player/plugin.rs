//! Player plugin wiring keyboard input into the yard simulation.
use bevy::prelude::*;

use crate::player::{components::PlayerCommands, systems::gather_player_commands};

pub struct PlayerPlugin;

impl Plugin for PlayerPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PlayerCommands>()
            .add_systems(Update, gather_player_commands);
    }
}
