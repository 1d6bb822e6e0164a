//! Bite and touch: the discrete actions the player can take on nearby objects.
use bevy::{log::info, math::Vec3};
use rand::Rng;

use super::{
    events::YardEvent,
    geometry::{
        within, FEEDER_SHAKE_RADIUS, FOOD_PICKUP_RADIUS, MATE_SHARE_RADIUS, PICNIC_SWIPE_RADIUS,
        TRASH_TIP_RADIUS,
    },
    score::{
        Counter, AFFECTION_PER_SHARE, FOOD_PER_BITE, MISCHIEF_PER_FEEDER_SHAKE,
        MISCHIEF_PER_PICNIC_SWIPE, MISCHIEF_PER_TRASH_TIP,
    },
    state::YardSimulation,
    supply::{ObjectId, ObjectKind},
    toast,
};

pub const TRASH_SPILL_COUNT: usize = 3;
const TRASH_SPILL_SPREAD: f32 = 0.6;
const TRASH_SPILL_HEIGHT: f32 = 0.3;
const FEEDER_DROP_SPREAD: f32 = 0.4;
const FEEDER_DROP_HEIGHT: f32 = 0.28;
const PICNIC_SNACK_LIFT: Vec3 = Vec3::new(0.0, 0.4, 0.0);

/// What a bite ended up doing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BiteOutcome {
    Ate { food: ObjectId, shared: bool },
    TippedTrash { spilled: Vec<ObjectId> },
    Nothing,
}

/// Food dropped by each touch sub-check that fired.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TouchOutcome {
    pub feeder_drop: Option<ObjectId>,
    pub picnic_snack: Option<ObjectId>,
}

impl TouchOutcome {
    pub fn is_nothing(&self) -> bool {
        self.feeder_drop.is_none() && self.picnic_snack.is_none()
    }
}

impl YardSimulation {
    /// Eats the newest food in reach, sharing with a nearby mate; failing that,
    /// tips the trash can once.
    pub fn bite(&mut self) -> BiteOutcome {
        let player = self.player.position;
        let target = self
            .food
            .iter()
            .rev()
            .find(|food| within(player, food.position, FOOD_PICKUP_RADIUS))
            .map(|food| food.id);

        if let Some(id) = target {
            self.eat_food(id);
            self.score.add(Counter::Food, FOOD_PER_BITE);
            self.show_toast(toast::CHOMP);

            let shared = within(player, self.companion.position, MATE_SHARE_RADIUS);
            if shared {
                self.score.add(Counter::Affection, AFFECTION_PER_SHARE);
                self.show_toast(toast::SHARED_WITH_MATE);
            }

            info!(
                "Ate {}{} (food {}, affection {})",
                id,
                if shared { " with mate" } else { "" },
                self.score.food(),
                self.score.affection()
            );
            return BiteOutcome::Ate { food: id, shared };
        }

        let trash = &self.fixtures.trash;
        if trash.is_tipped() || !within(player, trash.position, TRASH_TIP_RADIUS) {
            return BiteOutcome::Nothing;
        }
        let trash_id = trash.id;
        let origin = trash.position;

        self.fixtures.trash.kind = ObjectKind::TrashCan { tipped: true };
        self.score.add(Counter::Mischief, MISCHIEF_PER_TRASH_TIP);
        self.show_toast(toast::TRASH_TIPPED);
        self.push_event(YardEvent::TrashTipped { id: trash_id });

        let spilled: Vec<_> = (0..TRASH_SPILL_COUNT)
            .map(|_| {
                let dx = self.rng.gen_range(-TRASH_SPILL_SPREAD..=TRASH_SPILL_SPREAD);
                let dz = self.rng.gen_range(-TRASH_SPILL_SPREAD..=TRASH_SPILL_SPREAD);
                self.drop_food_at(Vec3::new(origin.x + dx, TRASH_SPILL_HEIGHT, origin.z + dz))
            })
            .collect();

        info!(
            "Tipped the trash can, {} scraps spilled (mischief {})",
            spilled.len(),
            self.score.mischief()
        );
        BiteOutcome::TippedTrash { spilled }
    }

    /// Shakes the feeder and raids the picnic table; either, both or neither may fire.
    pub fn touch(&mut self) -> TouchOutcome {
        let player = self.player.position;
        let mut outcome = TouchOutcome::default();

        let feeder = &self.fixtures.feeder;
        if within(player, feeder.position, FEEDER_SHAKE_RADIUS) {
            let feeder_id = feeder.id;
            let base = feeder.position;

            self.score.add(Counter::Mischief, MISCHIEF_PER_FEEDER_SHAKE);
            self.show_toast(toast::FEEDER_SHAKEN);
            self.push_event(YardEvent::FeederShaken { id: feeder_id });

            let dx = self.rng.gen_range(-FEEDER_DROP_SPREAD..=FEEDER_DROP_SPREAD);
            let dz = self.rng.gen_range(-FEEDER_DROP_SPREAD..=FEEDER_DROP_SPREAD);
            outcome.feeder_drop =
                Some(self.drop_food_at(Vec3::new(base.x + dx, FEEDER_DROP_HEIGHT, base.z + dz)));
            info!("Shook the feeder (mischief {})", self.score.mischief());
        }

        if within(player, self.fixtures.picnic.position, PICNIC_SWIPE_RADIUS) {
            self.score.add(Counter::Mischief, MISCHIEF_PER_PICNIC_SWIPE);
            self.show_toast(toast::PICNIC_SWIPED);
            outcome.picnic_snack = Some(self.drop_food_at(player + PICNIC_SNACK_LIFT));
            info!("Swiped from the picnic (mischief {})", self.score.mischief());
        }

        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        core::YardSettings,
        yard::{
            score::COUNTER_MAX,
            state::{FEEDER_POSITION, PICNIC_POSITION, TRASH_POSITION},
            supply::FOOD_CAPACITY,
        },
    };
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    const FAR_AWAY: Vec3 = Vec3::new(-30.0, 0.0, 20.0);

    fn empty_yard() -> YardSimulation {
        let mut simulation = YardSimulation::new(&YardSettings {
            seed: Some(5),
            initial_food: 0,
            ..YardSettings::default()
        });
        simulation.companion_mut().position = FAR_AWAY;
        simulation.drain_events();
        simulation
    }

    fn toasts(events: &[YardEvent]) -> Vec<&str> {
        events
            .iter()
            .filter_map(|event| match event {
                YardEvent::ToastShown { message } => Some(message.as_str()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn bite_eats_food_in_reach() {
        let mut simulation = empty_yard();
        let food = simulation.drop_food_at(Vec3::new(5.0, 0.35, 5.0));
        simulation.player_mut().position = Vec3::new(5.5, 0.0, 5.0);

        let outcome = simulation.bite();

        assert_eq!(outcome, BiteOutcome::Ate { food, shared: false });
        assert!(!simulation.food().contains(food));
        assert_eq!(simulation.score().food(), 8);
        assert_eq!(simulation.score().affection(), 0);
        assert_eq!(simulation.toast().message(), toast::CHOMP);
    }

    #[test]
    fn bite_next_to_mate_also_adds_affection() {
        let mut simulation = empty_yard();
        let food = simulation.drop_food_at(Vec3::new(5.0, 0.35, 5.0));
        simulation.player_mut().position = Vec3::new(5.0, 0.0, 5.0);
        simulation.companion_mut().position = Vec3::new(7.0, 0.0, 6.0);
        simulation.drain_events();

        let outcome = simulation.bite();

        assert_eq!(outcome, BiteOutcome::Ate { food, shared: true });
        assert_eq!(simulation.score().food(), 8);
        assert_eq!(simulation.score().affection(), 12);
        let events = simulation.drain_events();
        assert_eq!(toasts(&events), vec![toast::CHOMP, toast::SHARED_WITH_MATE]);
        assert_eq!(simulation.toast().message(), toast::SHARED_WITH_MATE);
    }

    #[test]
    fn bite_prefers_the_newest_food() {
        let mut simulation = empty_yard();
        let older = simulation.drop_food_at(Vec3::new(1.0, 0.35, 0.0));
        let newer = simulation.drop_food_at(Vec3::new(-1.0, 0.35, 0.0));

        assert_eq!(
            simulation.bite(),
            BiteOutcome::Ate {
                food: newer,
                shared: false
            }
        );
        assert!(simulation.food().contains(older));
    }

    #[test]
    fn bite_with_nothing_in_reach_does_nothing() {
        let mut simulation = empty_yard();
        simulation.drop_food_at(Vec3::new(10.0, 0.35, -10.0));
        simulation.drain_events();

        assert_eq!(simulation.bite(), BiteOutcome::Nothing);
        assert_eq!(*simulation.score(), Default::default());
        assert!(!simulation.toast().is_visible());
        assert!(simulation.drain_events().is_empty());
    }

    #[test]
    fn trash_tips_once_and_spills_three_scraps() {
        let mut simulation = empty_yard();
        simulation.player_mut().position = Vec3::new(TRASH_POSITION.x, 0.0, TRASH_POSITION.z);

        let BiteOutcome::TippedTrash { spilled } = simulation.bite() else {
            panic!("expected the trash can to tip");
        };
        assert_eq!(spilled.len(), TRASH_SPILL_COUNT);
        assert!(simulation.fixtures().trash.is_tipped());
        assert_eq!(simulation.score().mischief(), 12);
        assert_eq!(simulation.toast().message(), toast::TRASH_TIPPED);
        for food in simulation.food().iter() {
            assert!((food.position.x - TRASH_POSITION.x).abs() <= TRASH_SPILL_SPREAD);
            assert!((food.position.z - TRASH_POSITION.z).abs() <= TRASH_SPILL_SPREAD);
        }

        // The spilled scraps are in reach; after eating them the can stays tipped.
        for _ in 0..TRASH_SPILL_COUNT {
            assert!(matches!(simulation.bite(), BiteOutcome::Ate { .. }));
        }
        assert_eq!(simulation.bite(), BiteOutcome::Nothing);
        assert_eq!(simulation.score().mischief(), 12);
        assert_eq!(simulation.score().food(), 24);
    }

    #[test]
    fn trash_spill_respects_capacity() {
        let mut simulation = empty_yard();
        for i in 0..FOOD_CAPACITY {
            simulation.drop_food_at(Vec3::new(-25.0 + i as f32, 0.35, -15.0));
        }
        let oldest: Vec<_> = simulation
            .food()
            .iter()
            .take(TRASH_SPILL_COUNT)
            .map(|food| food.id)
            .collect();
        simulation.player_mut().position = Vec3::new(TRASH_POSITION.x, 0.0, TRASH_POSITION.z);

        assert!(matches!(simulation.bite(), BiteOutcome::TippedTrash { .. }));
        assert_eq!(simulation.food().len(), FOOD_CAPACITY);
        for id in oldest {
            assert!(!simulation.food().contains(id));
        }
    }

    #[test]
    fn touching_the_feeder_drops_food_at_its_base() {
        let mut simulation = empty_yard();
        simulation.player_mut().position = Vec3::new(FEEDER_POSITION.x, 1.5, FEEDER_POSITION.z);

        let outcome = simulation.touch();

        let drop = outcome.feeder_drop.expect("feeder should drop food");
        assert!(outcome.picnic_snack.is_none());
        assert_eq!(simulation.score().mischief(), 6);
        assert_eq!(simulation.toast().message(), toast::FEEDER_SHAKEN);
        let food = simulation
            .food()
            .iter()
            .find(|food| food.id == drop)
            .expect("drop is in the supply");
        assert_eq!(food.position.y, FEEDER_DROP_HEIGHT);
        assert!((food.position.x - FEEDER_POSITION.x).abs() <= FEEDER_DROP_SPREAD);
        assert!((food.position.z - FEEDER_POSITION.z).abs() <= FEEDER_DROP_SPREAD);
    }

    #[test]
    fn feeder_is_out_of_reach_from_the_ground() {
        let mut simulation = empty_yard();
        simulation.player_mut().position = Vec3::new(FEEDER_POSITION.x, 0.0, FEEDER_POSITION.z);
        assert!(simulation.touch().is_nothing());
        assert_eq!(simulation.score().mischief(), 0);
    }

    #[test]
    fn touching_the_picnic_drops_a_snack_at_the_player() {
        let mut simulation = empty_yard();
        let player = PICNIC_POSITION + Vec3::new(1.0, 0.0, 1.0);
        simulation.player_mut().position = player;

        let outcome = simulation.touch();

        let snack = outcome.picnic_snack.expect("picnic should drop a snack");
        assert!(outcome.feeder_drop.is_none());
        assert_eq!(simulation.score().mischief(), 5);
        assert_eq!(simulation.toast().message(), toast::PICNIC_SWIPED);
        let food = simulation.food().iter().next().expect("one snack");
        assert_eq!(food.id, snack);
        assert_eq!(food.position, player + PICNIC_SNACK_LIFT);
    }

    #[test]
    fn touch_sub_checks_fire_together() {
        let mut simulation = empty_yard();
        simulation.fixtures.picnic.position = Vec3::new(FEEDER_POSITION.x, 0.0, FEEDER_POSITION.z);
        simulation.player_mut().position = Vec3::new(FEEDER_POSITION.x, 1.5, FEEDER_POSITION.z);

        let outcome = simulation.touch();

        assert!(outcome.feeder_drop.is_some());
        assert!(outcome.picnic_snack.is_some());
        assert_eq!(simulation.score().mischief(), 11);
        assert_eq!(simulation.food().len(), 2);
        let events = simulation.drain_events();
        assert_eq!(
            toasts(&events),
            vec![toast::FEEDER_SHAKEN, toast::PICNIC_SWIPED]
        );
    }

    #[test]
    fn touch_never_removes_food() {
        let mut simulation = YardSimulation::new(&YardSettings {
            seed: Some(8),
            ..YardSettings::default()
        });
        let before = simulation.food().len();
        simulation.touch();
        assert!(simulation.food().len() >= before);
    }

    #[test]
    fn counters_stay_bounded_under_any_action_sequence() {
        let mut simulation = empty_yard();
        let mut rng = ChaCha8Rng::seed_from_u64(21);
        let spots = [
            Vec3::new(TRASH_POSITION.x, 0.0, TRASH_POSITION.z),
            Vec3::new(FEEDER_POSITION.x, 1.5, FEEDER_POSITION.z),
            PICNIC_POSITION,
            Vec3::ZERO,
        ];

        for _ in 0..500 {
            let spot = spots[rng.gen_range(0..spots.len())];
            simulation.player_mut().position = spot;
            simulation.companion_mut().position = spot + Vec3::X;
            if rng.gen_bool(0.5) {
                simulation.bite();
            } else {
                simulation.touch();
            }

            let score = simulation.score();
            for value in [score.food(), score.mischief(), score.affection()] {
                assert!(value <= COUNTER_MAX);
            }
            assert!(simulation.food().len() <= FOOD_CAPACITY);
        }
        assert_eq!(simulation.score().mischief(), COUNTER_MAX);
    }
}
