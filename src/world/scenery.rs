//! Startup systems building the yard's static scenery, fixtures and actors.
use std::f32::consts::{FRAC_PI_2, FRAC_PI_6, PI};

use bevy::{
    math::primitives::{Capsule3d, Cone, Cuboid, Cylinder, Plane3d, Sphere},
    prelude::*,
};
use rand::Rng;

use crate::{
    world::components::{
        CompanionAvatar, FixtureVisual, FoodAssets, FollowCamera, ObjectVisual, ObjectVisuals,
        PlayerAvatar,
    },
    yard::state::YardSimulation,
};

const YARD_SIZE: Vec2 = Vec2::new(80.0, 60.0);
const PATIO_SIZE: Vec2 = Vec2::new(16.0, 10.0);
const PATIO_CENTER: Vec3 = Vec3::new(-18.0, 0.01, -12.0);
const FENCE_HEIGHT: f32 = 3.0;
const FENCE_THICKNESS: f32 = 0.5;
const TREE_COUNT: usize = 15;
const TREE_CLEARING: f32 = 8.0;
const FOOD_RADIUS: f32 = 0.32;
const CAMERA_START: Vec3 = Vec3::new(0.0, 12.0, 22.0);

/// Spawns ground, patio, fence, trees, the sun and the follow camera.
pub fn spawn_yard_environment(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    commands.insert_resource(ClearColor(Color::srgb_u8(11, 16, 32)));

    commands.spawn((
        Mesh3d(meshes.add(Plane3d::default().mesh().size(YARD_SIZE.x, YARD_SIZE.y))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::srgb_u8(41, 77, 47),
            perceptual_roughness: 1.0,
            ..default()
        })),
        Transform::default(),
        Name::new("Lawn"),
    ));

    commands.spawn((
        Mesh3d(meshes.add(Plane3d::default().mesh().size(PATIO_SIZE.x, PATIO_SIZE.y))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::srgb_u8(122, 109, 88),
            ..default()
        })),
        Transform::from_translation(PATIO_CENTER),
        Name::new("Patio"),
    ));

    let fence_material = materials.add(StandardMaterial {
        base_color: Color::srgb_u8(191, 160, 122),
        ..default()
    });
    let half = YARD_SIZE / 2.0;
    let segments = [
        (YARD_SIZE.x, Vec3::new(0.0, FENCE_HEIGHT / 2.0, -half.y), 0.0),
        (YARD_SIZE.x, Vec3::new(0.0, FENCE_HEIGHT / 2.0, half.y), 0.0),
        (YARD_SIZE.y, Vec3::new(-half.x, FENCE_HEIGHT / 2.0, 0.0), FRAC_PI_2),
        (YARD_SIZE.y, Vec3::new(half.x, FENCE_HEIGHT / 2.0, 0.0), FRAC_PI_2),
    ];
    for (length, center, turn) in segments {
        commands.spawn((
            Mesh3d(meshes.add(Mesh::from(Cuboid::new(
                length,
                FENCE_HEIGHT,
                FENCE_THICKNESS,
            )))),
            MeshMaterial3d(fence_material.clone()),
            Transform::from_translation(center).with_rotation(Quat::from_rotation_y(turn)),
            Name::new("Fence"),
        ));
    }

    let trunk_mesh = meshes.add(Mesh::from(Cylinder::new(0.5, 5.0)));
    let trunk_material = materials.add(StandardMaterial {
        base_color: Color::srgb_u8(138, 90, 43),
        ..default()
    });
    let leaves_mesh = meshes.add(Mesh::from(Sphere::new(2.2)));
    let leaves_material = materials.add(StandardMaterial {
        base_color: Color::srgb_u8(47, 111, 62),
        ..default()
    });
    let mut rng = rand::thread_rng();
    let mut planted = 0;
    for _ in 0..TREE_COUNT {
        let x = rng.gen_range(-35.0..35.0_f32);
        let z = rng.gen_range(-25.0..25.0_f32);
        if x.abs() < TREE_CLEARING && z.abs() < TREE_CLEARING {
            continue;
        }
        commands
            .spawn((
                Transform::from_xyz(x, 0.0, z),
                Visibility::default(),
                Name::new("Tree"),
            ))
            .with_children(|tree| {
                tree.spawn((
                    Mesh3d(trunk_mesh.clone()),
                    MeshMaterial3d(trunk_material.clone()),
                    Transform::from_xyz(0.0, 2.5, 0.0),
                ));
                tree.spawn((
                    Mesh3d(leaves_mesh.clone()),
                    MeshMaterial3d(leaves_material.clone()),
                    Transform::from_xyz(0.0, 5.5, 0.0),
                ));
            });
        planted += 1;
    }

    commands.spawn((
        DirectionalLight {
            illuminance: 12_000.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(20.0, 30.0, 10.0).looking_at(Vec3::ZERO, Vec3::Y),
        Name::new("Sun"),
    ));

    commands.spawn((
        Camera3d::default(),
        Transform::from_translation(CAMERA_START).looking_at(Vec3::new(0.0, 0.5, 0.0), Vec3::Y),
        FollowCamera::default(),
        Name::new("Follow Camera"),
    ));

    commands.insert_resource(FoodAssets {
        mesh: meshes.add(Mesh::from(Sphere::new(FOOD_RADIUS))),
        material: materials.add(StandardMaterial {
            base_color: Color::srgb_u8(255, 136, 85),
            ..default()
        }),
    });

    info!("Yard environment spawned ({} trees)", planted);
}

/// Spawns the feeder, picnic table and trash can, registering each in the side table.
pub fn spawn_fixture_visuals(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut visuals: ResMut<ObjectVisuals>,
    simulation: Res<YardSimulation>,
) {
    let fixtures = simulation.fixtures();

    let feeder = &fixtures.feeder;
    commands.spawn((
        Mesh3d(meshes.add(Mesh::from(Cylinder::new(0.1, 3.0)))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::srgb_u8(119, 119, 119),
            ..default()
        })),
        Transform::from_xyz(feeder.position.x, 1.5, feeder.position.z),
        Name::new("Feeder pole"),
    ));
    let hopper = commands
        .spawn((
            Mesh3d(meshes.add(Mesh::from(Cone::new(0.6, 1.0)))),
            MeshMaterial3d(materials.add(StandardMaterial {
                base_color: Color::srgb_u8(204, 170, 68),
                ..default()
            })),
            Transform::from_translation(feeder.position).with_rotation(Quat::from_rotation_x(PI)),
            ObjectVisual { id: feeder.id },
            FixtureVisual,
            Name::new(format!("{} ({})", feeder.kind.label(), feeder.id)),
        ))
        .id();
    visuals.by_object.insert(feeder.id, hopper);

    let picnic = &fixtures.picnic;
    let wood = materials.add(StandardMaterial {
        base_color: Color::srgb_u8(139, 107, 74),
        ..default()
    });
    let top_mesh = meshes.add(Mesh::from(Cuboid::new(5.0, 0.3, 2.0)));
    let bench_mesh = meshes.add(Mesh::from(Cuboid::new(5.0, 0.2, 0.4)));
    let table = commands
        .spawn((
            Transform::from_translation(picnic.position),
            Visibility::default(),
            ObjectVisual { id: picnic.id },
            Name::new(format!("{} ({})", picnic.kind.label(), picnic.id)),
        ))
        .with_children(|table| {
            table.spawn((
                Mesh3d(top_mesh),
                MeshMaterial3d(wood.clone()),
                Transform::from_xyz(0.0, 1.2, 0.0),
            ));
            for side in [-1.2, 1.2] {
                table.spawn((
                    Mesh3d(bench_mesh.clone()),
                    MeshMaterial3d(wood.clone()),
                    Transform::from_xyz(0.0, 0.6, side),
                ));
            }
        })
        .id();
    visuals.by_object.insert(picnic.id, table);

    let trash = &fixtures.trash;
    let can = commands
        .spawn((
            Mesh3d(meshes.add(Mesh::from(Cylinder::new(0.85, 1.5)))),
            MeshMaterial3d(materials.add(StandardMaterial {
                base_color: Color::srgb_u8(85, 106, 119),
                metallic: 0.4,
                perceptual_roughness: 0.5,
                ..default()
            })),
            Transform::from_translation(trash.position),
            ObjectVisual { id: trash.id },
            FixtureVisual,
            Name::new(format!("{} ({})", trash.kind.label(), trash.id)),
        ))
        .id();
    visuals.by_object.insert(trash.id, can);

    for fixture in fixtures.iter() {
        info!(
            "Spawned {} {} at {:?}",
            fixture.kind.label(),
            fixture.id,
            fixture.position
        );
    }
}

/// Spawns the two raccoon models at the actors' starting poses.
pub fn spawn_actor_visuals(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    simulation: Res<YardSimulation>,
) {
    let player = spawn_raccoon(
        &mut commands,
        &mut meshes,
        &mut materials,
        Color::srgb_u8(136, 136, 136),
        simulation.player().position,
    );
    commands
        .entity(player)
        .insert((PlayerAvatar, Name::new("Player raccoon")));

    let companion = spawn_raccoon(
        &mut commands,
        &mut meshes,
        &mut materials,
        Color::srgb_u8(154, 154, 154),
        simulation.companion().position,
    );
    commands
        .entity(companion)
        .insert((CompanionAvatar, Name::new("Companion raccoon")));
}

fn spawn_raccoon(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    fur: Color,
    position: Vec3,
) -> Entity {
    let fur = materials.add(StandardMaterial {
        base_color: fur,
        ..default()
    });
    let face = materials.add(StandardMaterial {
        base_color: Color::srgb_u8(119, 119, 119),
        ..default()
    });
    let dark = materials.add(StandardMaterial {
        base_color: Color::srgb_u8(34, 34, 34),
        ..default()
    });
    let ear_mesh = meshes.add(Mesh::from(Cone::new(0.15, 0.25)));

    commands
        .spawn((Transform::from_translation(position), Visibility::default()))
        .with_children(|raccoon| {
            raccoon.spawn((
                Mesh3d(meshes.add(Mesh::from(Capsule3d::new(0.6, 1.2)))),
                MeshMaterial3d(fur.clone()),
                Transform::from_xyz(0.0, 0.9, 0.0),
            ));
            raccoon.spawn((
                Mesh3d(meshes.add(Mesh::from(Sphere::new(0.45)))),
                MeshMaterial3d(face.clone()),
                Transform::from_xyz(0.0, 1.6, 0.45),
            ));
            raccoon.spawn((
                Mesh3d(meshes.add(Mesh::from(Capsule3d::new(0.28, 0.1)))),
                MeshMaterial3d(dark.clone()),
                Transform::from_xyz(0.0, 1.55, 0.7).with_rotation(Quat::from_rotation_x(FRAC_PI_2)),
            ));
            raccoon.spawn((
                Mesh3d(meshes.add(Mesh::from(Capsule3d::new(0.3, 0.9)))),
                MeshMaterial3d(dark.clone()),
                Transform::from_xyz(-0.5, 1.0, -0.3).with_rotation(Quat::from_rotation_z(FRAC_PI_6)),
            ));
            for x in [-0.2, 0.2] {
                raccoon.spawn((
                    Mesh3d(ear_mesh.clone()),
                    MeshMaterial3d(face.clone()),
                    Transform::from_xyz(x, 1.95, 0.2),
                ));
            }
        })
        .id()
}
