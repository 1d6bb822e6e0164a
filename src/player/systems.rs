//! Systems translating keyboard input into player commands.
use std::f32::consts::PI;

use bevy::prelude::*;

use crate::{
    player::components::PlayerCommands, world::components::FollowCamera,
    yard::state::YardSimulation,
};

const FORWARD_KEYS: [KeyCode; 2] = [KeyCode::ArrowUp, KeyCode::KeyW];
const BACK_KEYS: [KeyCode; 2] = [KeyCode::ArrowDown, KeyCode::KeyS];
const LEFT_KEYS: [KeyCode; 2] = [KeyCode::ArrowLeft, KeyCode::KeyA];
const RIGHT_KEYS: [KeyCode; 2] = [KeyCode::ArrowRight, KeyCode::KeyD];

/// Reads held movement keys and freshly pressed action keys.
pub fn gather_player_commands(
    keyboard: Res<ButtonInput<KeyCode>>,
    camera_query: Query<&Transform, With<FollowCamera>>,
    simulation: Res<YardSimulation>,
    mut commands: ResMut<PlayerCommands>,
) {
    let axis = |positive: [KeyCode; 2], negative: [KeyCode; 2]| {
        let held = |keys: [KeyCode; 2]| keyboard.any_pressed(keys) as i32 as f32;
        held(positive) - held(negative)
    };
    let forward = axis(FORWARD_KEYS, BACK_KEYS);
    // Screen-left maps to +x in the camera frame.
    let sideways = axis(LEFT_KEYS, RIGHT_KEYS);

    let camera_yaw = camera_query
        .single()
        .map(|camera| {
            let player = simulation.player().position;
            let offset = camera.translation - player;
            offset.x.atan2(offset.z) + PI
        })
        .unwrap_or(PI);

    commands.intent = intent_from_axes(forward, sideways, camera_yaw);

    if keyboard.just_pressed(KeyCode::Space) {
        commands.jump = true;
    }
    if keyboard.just_pressed(KeyCode::KeyB) {
        commands.bite = true;
    }
    if keyboard.just_pressed(KeyCode::KeyT) {
        commands.touch = true;
    }
    if keyboard.just_pressed(KeyCode::KeyP) {
        commands.toggle_pause = true;
    }
}

/// Normalises the key axes and rotates them about the vertical axis by the
/// camera's yaw, giving a ground-plane (x, z) intent.
pub fn intent_from_axes(forward: f32, sideways: f32, camera_yaw: f32) -> Vec2 {
    let local = Vec2::new(sideways, forward).normalize_or_zero();
    if local == Vec2::ZERO {
        return Vec2::ZERO;
    }
    let (sin, cos) = camera_yaw.sin_cos();
    Vec2::new(
        local.x * cos + local.y * sin,
        -local.x * sin + local.y * cos,
    )
    .normalize_or_zero()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: Vec2, expected: Vec2) {
        assert!(
            actual.distance(expected) < 1e-5,
            "{actual} != {expected}"
        );
    }

    #[test]
    fn idle_keys_give_zero_intent() {
        assert_eq!(intent_from_axes(0.0, 0.0, 1.3), Vec2::ZERO);
    }

    #[test]
    fn camera_behind_player_maps_forward_away_from_camera() {
        // Camera sits on +Z looking toward -Z.
        assert_close(intent_from_axes(1.0, 0.0, PI), Vec2::new(0.0, -1.0));
        assert_close(intent_from_axes(0.0, 1.0, PI), Vec2::new(-1.0, 0.0));
        assert_close(intent_from_axes(-1.0, 0.0, PI), Vec2::new(0.0, 1.0));
    }

    #[test]
    fn diagonal_intent_is_unit_length() {
        let intent = intent_from_axes(1.0, -1.0, 0.4);
        assert!((intent.length() - 1.0).abs() < 1e-5);
    }
}
