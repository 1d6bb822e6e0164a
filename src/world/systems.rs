//! Systems mirroring simulation state onto rendered entities.
use std::f32::consts::{FRAC_PI_2, PI};

use bevy::{ecs::message::MessageReader, prelude::*};
use rand::Rng;

use crate::{
    world::components::{
        CompanionAvatar, FixtureVisual, FoodAssets, FollowCamera, ObjectVisual, ObjectVisuals,
        PlayerAvatar,
    },
    yard::{events::YardEvent, state::YardSimulation, supply::ObjectId},
};

const FEEDER_WOBBLE: f32 = 0.3;

/// Applies this frame's domain events: food appears and disappears, the trash
/// can falls over and the feeder wobbles.
pub fn apply_yard_events(
    mut commands: Commands,
    mut events: MessageReader<YardEvent>,
    mut visuals: ResMut<ObjectVisuals>,
    food_assets: Option<Res<FoodAssets>>,
    mut fixtures: Query<(&ObjectVisual, &mut Transform), With<FixtureVisual>>,
) {
    let mut rng = rand::thread_rng();

    for event in events.read() {
        match event {
            YardEvent::FoodSpawned { id, position } => {
                let Some(assets) = food_assets.as_ref() else {
                    warn!("Food {} spawned before food assets were ready", id);
                    continue;
                };
                let entity = commands
                    .spawn((
                        Mesh3d(assets.mesh.clone()),
                        MeshMaterial3d(assets.material.clone()),
                        Transform::from_translation(*position),
                        ObjectVisual { id: *id },
                        Name::new(format!("Food ({})", id)),
                    ))
                    .id();
                visuals.by_object.insert(*id, entity);
            }
            YardEvent::FoodRemoved { id, reason } => {
                if let Some(entity) = visuals.by_object.remove(id) {
                    commands.entity(entity).despawn();
                    debug!("Food {} removed from view ({:?})", id, reason);
                }
            }
            YardEvent::TrashTipped { id } => {
                let Some(mut transform) = fixture_transform(&visuals, &mut fixtures, *id) else {
                    continue;
                };
                let side = if rng.gen_bool(0.5) { 1.0 } else { -1.0 };
                transform.rotation = Quat::from_rotation_z(side * FRAC_PI_2);
            }
            YardEvent::FeederShaken { id } => {
                let Some(mut transform) = fixture_transform(&visuals, &mut fixtures, *id) else {
                    continue;
                };
                let wobble = rng.gen_range(-FEEDER_WOBBLE..FEEDER_WOBBLE);
                transform.rotation = Quat::from_rotation_z(wobble) * Quat::from_rotation_x(PI);
            }
            YardEvent::ToastShown { message } => debug!("Toast: {}", message),
            YardEvent::Won => info!("Raccoon family started"),
            YardEvent::Jumped => {}
        }
    }
}

fn fixture_transform<'a>(
    visuals: &ObjectVisuals,
    fixtures: &'a mut Query<(&ObjectVisual, &mut Transform), With<FixtureVisual>>,
    id: ObjectId,
) -> Option<Mut<'a, Transform>> {
    let entity = visuals.by_object.get(&id)?;
    let (visual, transform) = fixtures.get_mut(*entity).ok()?;
    (visual.id == id).then_some(transform)
}

/// Copies actor positions and headings onto the raccoon models.
pub fn sync_actor_transforms(
    simulation: Res<YardSimulation>,
    mut players: Query<&mut Transform, (With<PlayerAvatar>, Without<CompanionAvatar>)>,
    mut companions: Query<&mut Transform, (With<CompanionAvatar>, Without<PlayerAvatar>)>,
) {
    if let Ok(mut transform) = players.single_mut() {
        let actor = simulation.player();
        transform.translation = actor.position;
        transform.rotation = Quat::from_rotation_y(actor.yaw);
    }
    if let Ok(mut transform) = companions.single_mut() {
        let actor = simulation.companion();
        transform.translation = actor.position;
        transform.rotation = Quat::from_rotation_y(actor.yaw);
    }
}

/// Eases the camera toward its offset behind the player and keeps it aimed
/// slightly above the raccoon's head.
pub fn follow_player_camera(
    simulation: Res<YardSimulation>,
    mut cameras: Query<(&mut Transform, &mut FollowCamera)>,
) {
    let player = simulation.player().position;
    for (mut transform, mut follow) in &mut cameras {
        let desired = player + follow.offset;
        transform.translation = transform.translation.lerp(desired, follow.position_lerp);

        let target = player + follow.look_offset;
        follow.focus = follow.focus.lerp(target, follow.focus_lerp);
        let focus = follow.focus;
        transform.look_at(focus, Vec3::Y);
    }
}
