//! Proximity queries, orientation and yard containment helpers.
use std::f32::consts::{PI, TAU};

use bevy::math::Vec3;

/// Half extents of the walkable yard: the 80 x 60 fence less a 1.2 margin.
pub const YARD_HALF_WIDTH: f32 = 38.8;
pub const YARD_HALF_DEPTH: f32 = 28.8;

pub const FOOD_PICKUP_RADIUS: f32 = 1.4;
pub const MATE_SHARE_RADIUS: f32 = 3.0;
pub const TRASH_TIP_RADIUS: f32 = 2.0;
pub const FEEDER_SHAKE_RADIUS: f32 = 2.2;
pub const PICNIC_SWIPE_RADIUS: f32 = 3.0;

/// Returns `true` when `target` lies strictly inside `radius` of `origin`.
pub fn within(origin: Vec3, target: Vec3, radius: f32) -> bool {
    origin.distance_squared(target) < radius * radius
}

/// Yaw facing a ground-plane direction: `+Z` is 0, `+X` is `+PI/2`.
pub fn compute_yaw(x: f32, z: f32) -> f32 {
    x.atan2(z)
}

/// Frame-rate independent exponential approach of `current` toward `target`.
pub fn damp(current: f32, target: f32, rate: f32, dt: f32) -> f32 {
    current + (target - current) * (1.0 - (-rate * dt).exp())
}

/// Like [`damp`], but travels the shorter way around the circle.
pub fn damp_angle(current: f32, target: f32, rate: f32, dt: f32) -> f32 {
    let delta = wrap_angle(target - current);
    wrap_angle(damp(current, current + delta, rate, dt))
}

/// Maps an angle into `(-PI, PI]`.
pub fn wrap_angle(angle: f32) -> f32 {
    let wrapped = (angle + PI).rem_euclid(TAU) - PI;
    if wrapped <= -PI {
        wrapped + TAU
    } else {
        wrapped
    }
}

/// Clamps a horizontal position into the yard rectangle, leaving `y` untouched.
pub fn contain_in_yard(position: Vec3) -> Vec3 {
    Vec3::new(
        position.x.clamp(-YARD_HALF_WIDTH, YARD_HALF_WIDTH),
        position.y,
        position.z.clamp(-YARD_HALF_DEPTH, YARD_HALF_DEPTH),
    )
}
