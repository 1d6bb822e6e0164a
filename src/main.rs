use bevy::prelude::*;

mod core;
mod player;
mod ui;
mod world;
mod yard;

use crate::{
    core::CorePlugin, player::PlayerPlugin, ui::UiPlugin, world::WorldPlugin, yard::YardPlugin,
};

fn main() {
    App::new()
        .add_plugins((
            DefaultPlugins.set(WindowPlugin {
                primary_window: Some(Window {
                    title: "Raccoon Yard".into(),
                    ..default()
                }),
                ..default()
            }),
            CorePlugin::default(),
            YardPlugin,
            PlayerPlugin,
            WorldPlugin, // After YardPlugin so scenery can read the session fixtures
            UiPlugin,
        ))
        .run();
}
