//! Headless self-check run against a copy of the live session.
use std::{f32::consts::FRAC_PI_2, fmt};

use bevy::math::{Vec2, Vec3};

use super::{
    geometry::{compute_yaw, contain_in_yard},
    state::YardSimulation,
    supply::FOOD_CAPACITY,
};

const YAW_TOLERANCE: f32 = 0.05;

/// A self-check that did not hold.
#[derive(Debug, Clone, PartialEq)]
pub struct SelfCheckFailure {
    pub name: &'static str,
    pub detail: String,
}

impl fmt::Display for SelfCheckFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.detail)
    }
}

impl std::error::Error for SelfCheckFailure {}

#[derive(Debug, Clone, Default)]
pub struct SelfCheckReport {
    pub passed: Vec<&'static str>,
    pub failures: Vec<SelfCheckFailure>,
}

impl SelfCheckReport {
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }

    fn record(&mut self, name: &'static str, result: Result<(), String>) {
        match result {
            Ok(()) => self.passed.push(name),
            Err(detail) => self.failures.push(SelfCheckFailure { name, detail }),
        }
    }
}

/// Runs every check on a clone, leaving `simulation` untouched.
pub fn run_self_checks(simulation: &YardSimulation) -> SelfCheckReport {
    let mut report = SelfCheckReport::default();

    report.record("actors inside the yard", {
        let player = simulation.player().position;
        let companion = simulation.companion().position;
        let inside = |position: Vec3| position.is_finite() && contain_in_yard(position) == position;
        if inside(player) && inside(companion) {
            Ok(())
        } else {
            Err(format!("player {player}, companion {companion}"))
        }
    });

    report.record("spawn grows the food supply", {
        let mut scratch = simulation.clone();
        let before = scratch.food().len();
        let id = scratch.spawn_food();
        if scratch.food().contains(id) && scratch.food().len() == (before + 1).min(FOOD_CAPACITY) {
            Ok(())
        } else {
            Err(format!("{} -> {}", before, scratch.food().len()))
        }
    });

    report.record("touch never removes food", {
        let mut scratch = simulation.clone();
        let before = scratch.food().len();
        scratch.touch();
        if scratch.food().len() >= before {
            Ok(())
        } else {
            Err(format!("{} -> {}", before, scratch.food().len()))
        }
    });

    report.record("movement updates position", {
        let mut scratch = simulation.clone();
        let player = scratch.player_mut();
        let start = player.position;
        player.velocity = Vec3::new(2.0, 0.0, 0.0);
        player.integrate(Vec2::ZERO, 0.016);
        if player.position.distance(start) > 0.0 {
            Ok(())
        } else {
            Err("position unchanged".to_string())
        }
    });

    report.record("yaw faces +X, +Z and -X", {
        let checks = [
            ("+X", compute_yaw(1.0, 0.0), FRAC_PI_2),
            ("+Z", compute_yaw(0.0, 1.0), 0.0),
            ("-X", compute_yaw(-1.0, 0.0), -FRAC_PI_2),
        ];
        checks
            .iter()
            .find(|(_, actual, expected)| (actual - expected).abs() > YAW_TOLERANCE)
            .map_or(Ok(()), |(axis, actual, _)| {
                Err(format!("yaw {axis} wrong: {actual}"))
            })
    });

    report
}
