//! Autonomous wandering for the companion raccoon.
use std::{f32::consts::TAU, ops::RangeInclusive};

use bevy::math::Vec2;
use rand::Rng;

use super::{geometry::contain_in_yard, locomotion::Actor};

pub const WANDER_SPEED: f32 = 2.0;
pub const REDIRECT_SECONDS: RangeInclusive<f32> = 1.2..=2.6;

/// Current ground-plane heading and the time left before picking another.
#[derive(Debug, Clone, PartialEq)]
pub struct WanderState {
    heading: Vec2,
    remaining: f32,
}

impl Default for WanderState {
    fn default() -> Self {
        Self {
            heading: Vec2::X,
            remaining: 0.0,
        }
    }
}

impl WanderState {
    /// Unit heading as (x, z).
    #[allow(dead_code)]
    pub fn heading(&self) -> Vec2 {
        self.heading
    }

    #[allow(dead_code)]
    pub fn remaining(&self) -> f32 {
        self.remaining
    }

    /// Counts down, redirects when due, then walks `companion` and keeps it in the yard.
    pub fn advance(&mut self, companion: &mut Actor, dt: f32, rng: &mut impl Rng) {
        self.remaining -= dt;
        if self.remaining <= 0.0 {
            self.remaining = rng.gen_range(REDIRECT_SECONDS);
            let angle = rng.gen_range(0.0..TAU);
            self.heading = Vec2::new(angle.cos(), angle.sin());
        }

        companion.position.x += self.heading.x * WANDER_SPEED * dt;
        companion.position.z += self.heading.y * WANDER_SPEED * dt;
        companion.position = contain_in_yard(companion.position);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::yard::geometry::{YARD_HALF_DEPTH, YARD_HALF_WIDTH};
    use bevy::math::Vec3;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn first_tick_redirects_and_moves_at_wander_speed() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let mut wander = WanderState::default();
        let mut mate = Actor::at(Vec3::new(-10.0, 0.0, 8.0));

        wander.advance(&mut mate, 0.5, &mut rng);

        assert!(REDIRECT_SECONDS.contains(&wander.remaining()));
        assert!((wander.heading().length() - 1.0).abs() < 1e-5);
        let travelled = Vec2::new(mate.position.x + 10.0, mate.position.z - 8.0).length();
        assert!((travelled - WANDER_SPEED * 0.5).abs() < 1e-4);
    }

    #[test]
    fn heading_holds_until_the_timer_runs_out() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let mut wander = WanderState::default();
        let mut mate = Actor::at(Vec3::ZERO);
        wander.advance(&mut mate, 0.0, &mut rng);
        let heading = wander.heading();

        let steps = (REDIRECT_SECONDS.start() / 0.1) as usize - 1;
        for _ in 0..steps {
            wander.advance(&mut mate, 0.1, &mut rng);
            assert_eq!(wander.heading(), heading);
        }
    }

    #[test]
    fn companion_never_leaves_the_yard() {
        let mut rng = ChaCha8Rng::seed_from_u64(99);
        let mut wander = WanderState::default();
        let mut mate = Actor::at(Vec3::new(38.0, 0.0, 28.0));
        for _ in 0..5_000 {
            wander.advance(&mut mate, 0.25, &mut rng);
            assert!(mate.position.x.abs() <= YARD_HALF_WIDTH);
            assert!(mate.position.z.abs() <= YARD_HALF_DEPTH);
        }
    }
}
