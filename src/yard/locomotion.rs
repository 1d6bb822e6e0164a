//! Actor state and player locomotion integration.
use bevy::math::{Vec2, Vec3};

use super::geometry::{compute_yaw, damp, damp_angle};

/// Horizontal acceleration along the intent direction.
pub const ACCELERATION: f32 = 8.0;
/// Fraction of [`ACCELERATION`] applied per tick of held input.
pub const INPUT_GAIN: f32 = 0.12;
pub const GRAVITY: f32 = -20.0;
/// Damp rate pulling horizontal velocity back to rest.
pub const FRICTION: f32 = 14.0;
/// Damp rate turning the actor toward its travel direction.
pub const TURN_RATE: f32 = 12.0;
pub const JUMP_VELOCITY: f32 = 8.5;

/// A simulated body: the player raccoon or its companion.
#[derive(Debug, Clone, PartialEq)]
pub struct Actor {
    pub position: Vec3,
    pub velocity: Vec3,
    pub yaw: f32,
    pub grounded: bool,
}

impl Actor {
    pub fn at(position: Vec3) -> Self {
        Self {
            position,
            velocity: Vec3::ZERO,
            yaw: 0.0,
            grounded: true,
        }
    }

    /// Launches the actor upward. Returns `false` while airborne.
    pub fn try_jump(&mut self) -> bool {
        if !self.grounded {
            return false;
        }
        self.velocity.y = JUMP_VELOCITY;
        self.grounded = false;
        true
    }

    /// Advances velocity, position and facing by `dt` seconds of ground-plane `intent`.
    pub fn integrate(&mut self, intent: Vec2, dt: f32) {
        if intent != Vec2::ZERO {
            self.velocity.x += intent.x * ACCELERATION * INPUT_GAIN;
            self.velocity.z += intent.y * ACCELERATION * INPUT_GAIN;
            let target = compute_yaw(intent.x, intent.y);
            self.yaw = damp_angle(self.yaw, target, TURN_RATE, dt);
        }

        self.velocity.y += GRAVITY * dt;
        self.velocity.x = damp(self.velocity.x, 0.0, FRICTION, dt);
        self.velocity.z = damp(self.velocity.z, 0.0, FRICTION, dt);

        self.position += self.velocity * dt;
        if self.position.y <= 0.0 {
            self.position.y = 0.0;
            self.velocity.y = 0.0;
            self.grounded = true;
        }
    }
}
