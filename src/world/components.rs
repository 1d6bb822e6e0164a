//! Components and resources used by the world module.
use std::collections::HashMap;

use bevy::prelude::*;

use crate::yard::supply::ObjectId;

/// Camera that trails the player raccoon.
#[derive(Component, Debug)]
pub struct FollowCamera {
    /// Desired offset from the player.
    pub offset: Vec3,
    /// Point above the player the camera looks at.
    pub look_offset: Vec3,
    pub position_lerp: f32,
    pub focus_lerp: f32,
    pub focus: Vec3,
}

impl Default for FollowCamera {
    fn default() -> Self {
        Self {
            offset: Vec3::new(0.0, 3.5, 6.5),
            look_offset: Vec3::new(0.0, 1.2, 0.0),
            position_lerp: 0.08,
            focus_lerp: 0.15,
            focus: Vec3::new(0.0, 0.5, 0.0),
        }
    }
}

/// Marker for the rendered player raccoon.
#[derive(Component, Debug, Default)]
pub struct PlayerAvatar;

/// Marker for the rendered companion raccoon.
#[derive(Component, Debug, Default)]
pub struct CompanionAvatar;

/// Links a rendered entity back to its domain object.
#[derive(Component, Debug, Clone, Copy)]
pub struct ObjectVisual {
    pub id: ObjectId,
}

/// Marker for fixture visuals whose pose reacts to interactions.
#[derive(Component, Debug, Default)]
pub struct FixtureVisual;

/// Side table from domain object ids to the entities that draw them.
#[derive(Resource, Debug, Default)]
pub struct ObjectVisuals {
    pub by_object: HashMap<ObjectId, Entity>,
}

/// Shared mesh and material for every food object.
#[derive(Resource, Debug, Clone)]
pub struct FoodAssets {
    pub mesh: Handle<Mesh>,
    pub material: Handle<StandardMaterial>,
}
