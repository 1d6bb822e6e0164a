//! Domain events published after each simulation tick.
use bevy::{math::Vec3, prelude::Message};

use super::supply::ObjectId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FoodRemovalReason {
    Eaten,
    Evicted,
}

/// Something the display layer may want to mirror.
#[derive(Message, Debug, Clone, PartialEq)]
pub enum YardEvent {
    FoodSpawned { id: ObjectId, position: Vec3 },
    FoodRemoved { id: ObjectId, reason: FoodRemovalReason },
    TrashTipped { id: ObjectId },
    FeederShaken { id: ObjectId },
    Jumped,
    ToastShown { message: String },
    Won,
}
