//! World objects and the capacity-bounded food supply.
use std::{collections::VecDeque, fmt};

use bevy::math::Vec3;
use rand::Rng;

/// Maximum number of food objects lying around at once.
pub const FOOD_CAPACITY: usize = 12;
/// Height food rests at when dropped by the periodic spawner.
pub const FOOD_HEIGHT: f32 = 0.35;
pub const SPAWN_HALF_WIDTH: f32 = 30.0;
pub const SPAWN_HALF_DEPTH: f32 = 20.0;

/// Identifier shared by a domain object and its rendered counterpart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(u64);

impl ObjectId {
    pub fn new(value: u64) -> Self {
        Self(value)
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "OBJ-{:04}", self.0)
    }
}

/// Issues monotonically increasing object ids.
#[derive(Debug, Default, Clone)]
pub struct ObjectIdGenerator {
    next: u64,
}

impl ObjectIdGenerator {
    pub fn next_id(&mut self) -> ObjectId {
        let id = self.next;
        self.next += 1;
        ObjectId::new(id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectKind {
    Food,
    Feeder,
    Picnic,
    TrashCan { tipped: bool },
}

impl ObjectKind {
    pub fn label(self) -> &'static str {
        match self {
            Self::Food => "food",
            Self::Feeder => "feeder",
            Self::Picnic => "picnic table",
            Self::TrashCan { .. } => "trash can",
        }
    }
}

/// A non-actor interactable in the yard.
#[derive(Debug, Clone, PartialEq)]
pub struct WorldObject {
    pub id: ObjectId,
    pub kind: ObjectKind,
    pub position: Vec3,
}

impl WorldObject {
    pub fn new(id: ObjectId, kind: ObjectKind, position: Vec3) -> Self {
        Self { id, kind, position }
    }

    pub fn is_tipped(&self) -> bool {
        matches!(self.kind, ObjectKind::TrashCan { tipped: true })
    }
}

/// Insertion-ordered food objects; the oldest is evicted beyond [`FOOD_CAPACITY`].
#[derive(Debug, Clone, Default)]
pub struct FoodSupply {
    items: VecDeque<WorldObject>,
}

impl FoodSupply {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Oldest first.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &WorldObject> {
        self.items.iter()
    }

    pub fn contains(&self, id: ObjectId) -> bool {
        self.items.iter().any(|item| item.id == id)
    }

    /// Appends a food object at `position`, returning its id and whatever was evicted.
    pub fn push(
        &mut self,
        ids: &mut ObjectIdGenerator,
        position: Vec3,
    ) -> (ObjectId, Option<WorldObject>) {
        let id = ids.next_id();
        self.items
            .push_back(WorldObject::new(id, ObjectKind::Food, position));
        let evicted = if self.items.len() > FOOD_CAPACITY {
            self.items.pop_front()
        } else {
            None
        };
        (id, evicted)
    }

    /// Drops one food object somewhere inside the spawn area.
    pub fn spawn(
        &mut self,
        ids: &mut ObjectIdGenerator,
        rng: &mut impl Rng,
    ) -> (ObjectId, Option<WorldObject>) {
        let x = rng.gen_range(-SPAWN_HALF_WIDTH..=SPAWN_HALF_WIDTH);
        let z = rng.gen_range(-SPAWN_HALF_DEPTH..=SPAWN_HALF_DEPTH);
        self.push(ids, Vec3::new(x, FOOD_HEIGHT, z))
    }

    /// Removes a specific object, keeping the order of the rest.
    pub fn remove(&mut self, id: ObjectId) -> Option<WorldObject> {
        let index = self.items.iter().position(|item| item.id == id)?;
        self.items.remove(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn spawn_stays_inside_the_spawn_area() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let mut ids = ObjectIdGenerator::default();
        let mut supply = FoodSupply::default();
        for _ in 0..FOOD_CAPACITY {
            supply.spawn(&mut ids, &mut rng);
        }
        for food in supply.iter() {
            assert_eq!(food.kind, ObjectKind::Food);
            assert!(food.position.x.abs() <= SPAWN_HALF_WIDTH);
            assert!(food.position.z.abs() <= SPAWN_HALF_DEPTH);
            assert_eq!(food.position.y, FOOD_HEIGHT);
        }
    }

    #[test]
    fn capacity_evicts_oldest_first() {
        let mut ids = ObjectIdGenerator::default();
        let mut supply = FoodSupply::default();
        let mut pushed = Vec::new();
        for i in 0..FOOD_CAPACITY {
            let (id, evicted) = supply.push(&mut ids, Vec3::splat(i as f32));
            assert!(evicted.is_none());
            pushed.push(id);
        }

        let (newest, evicted) = supply.push(&mut ids, Vec3::ZERO);
        assert_eq!(evicted.map(|food| food.id), Some(pushed[0]));
        assert_eq!(supply.len(), FOOD_CAPACITY);

        let (_, evicted) = supply.push(&mut ids, Vec3::ZERO);
        assert_eq!(evicted.map(|food| food.id), Some(pushed[1]));
        assert_eq!(supply.len(), FOOD_CAPACITY);
        assert!(supply.contains(newest));
    }

    #[test]
    fn remove_preserves_relative_order() {
        let mut ids = ObjectIdGenerator::default();
        let mut supply = FoodSupply::default();
        let a = supply.push(&mut ids, Vec3::X).0;
        let b = supply.push(&mut ids, Vec3::Y).0;
        let c = supply.push(&mut ids, Vec3::Z).0;

        let removed = supply.remove(b).expect("b is present");
        assert_eq!(removed.position, Vec3::Y);
        assert!(supply.remove(b).is_none());

        let order: Vec<_> = supply.iter().map(|food| food.id).collect();
        assert_eq!(order, vec![a, c]);
    }

    #[test]
    fn object_ids_are_unique_and_displayed() {
        let mut ids = ObjectIdGenerator::default();
        let first = ids.next_id();
        let second = ids.next_id();
        assert_ne!(first, second);
        assert_eq!(first.to_string(), "OBJ-0000");
        assert_eq!(second.to_string(), "OBJ-0001");
    }
}
