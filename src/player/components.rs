//! Resources carrying player input toward the simulation.
use bevy::prelude::*;

use crate::yard::state::TickInput;

/// Intent and one-shot actions collected since the last simulation tick.
#[derive(Resource, Debug, Default, Clone, PartialEq)]
pub struct PlayerCommands {
    /// Ground-plane direction as (x, z), already rotated into world space.
    pub intent: Vec2,
    pub jump: bool,
    pub bite: bool,
    pub touch: bool,
    pub toggle_pause: bool,
}

impl PlayerCommands {
    /// Packages the pending commands for one tick and clears the one-shot actions.
    pub fn take_tick_input(&mut self, dt: f32) -> TickInput {
        let input = TickInput {
            dt,
            intent: self.intent,
            jump: self.jump,
            bite: self.bite,
            touch: self.touch,
            toggle_pause: self.toggle_pause,
        };
        self.jump = false;
        self.bite = false;
        self.touch = false;
        self.toggle_pause = false;
        input
    }
}
