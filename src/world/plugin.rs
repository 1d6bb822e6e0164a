//! WorldPlugin builds the yard scene and keeps it in step with the simulation.
use bevy::prelude::*;

use crate::{
    world::{
        components::ObjectVisuals,
        scenery::{spawn_actor_visuals, spawn_fixture_visuals, spawn_yard_environment},
        systems::{apply_yard_events, follow_player_camera, sync_actor_transforms},
    },
    yard::plugin::{start_yard_session, step_yard_simulation},
};

pub struct WorldPlugin;

impl Plugin for WorldPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ObjectVisuals>()
            .add_systems(
                Startup,
                (
                    spawn_yard_environment,
                    (spawn_fixture_visuals, spawn_actor_visuals).after(start_yard_session),
                ),
            )
            .add_systems(
                Update,
                (
                    apply_yard_events,
                    sync_actor_transforms,
                    follow_player_camera.after(sync_actor_transforms),
                )
                    .after(step_yard_simulation),
            );
    }
}
