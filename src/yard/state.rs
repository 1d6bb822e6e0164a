//! The explicit simulation state and its per-tick driver.
use std::time::Duration;

use bevy::{
    log::{debug, info},
    math::{Vec2, Vec3},
    prelude::Resource,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::core::YardSettings;

use super::{
    events::{FoodRemovalReason, YardEvent},
    geometry::contain_in_yard,
    interaction::BiteOutcome,
    locomotion::Actor,
    schedule::{DeferredEvent, DeferredSchedule, ScheduleHandle},
    score::{ScoreState, WinThresholds},
    supply::{FoodSupply, ObjectId, ObjectIdGenerator, ObjectKind, WorldObject},
    toast::{self, ToastState},
    wander::WanderState,
};

pub const PLAYER_START: Vec3 = Vec3::ZERO;
pub const COMPANION_START: Vec3 = Vec3::new(-10.0, 0.0, 8.0);
/// The feeder hopper hangs on a pole, so reaching it takes a jump.
pub const FEEDER_POSITION: Vec3 = Vec3::new(14.0, 3.2, -6.0);
pub const PICNIC_POSITION: Vec3 = Vec3::new(-16.0, 0.0, -12.0);
pub const TRASH_POSITION: Vec3 = Vec3::new(10.0, 0.75, 10.0);
/// Longest step a single tick will simulate; larger host stalls are clamped.
pub const MAX_TICK_SECONDS: f32 = 3600.0;

/// Everything the host hands the simulation for one tick.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TickInput {
    /// Elapsed real time since the previous tick, in seconds.
    pub dt: f32,
    /// Desired ground-plane direction as (x, z); zero when idle.
    pub intent: Vec2,
    pub jump: bool,
    pub bite: bool,
    pub touch: bool,
    pub toggle_pause: bool,
}

/// Session-persistent interactables.
#[derive(Debug, Clone)]
pub struct Fixtures {
    pub feeder: WorldObject,
    pub picnic: WorldObject,
    pub trash: WorldObject,
}

impl Fixtures {
    fn new(ids: &mut ObjectIdGenerator) -> Self {
        Self {
            feeder: WorldObject::new(ids.next_id(), ObjectKind::Feeder, FEEDER_POSITION),
            picnic: WorldObject::new(ids.next_id(), ObjectKind::Picnic, PICNIC_POSITION),
            trash: WorldObject::new(
                ids.next_id(),
                ObjectKind::TrashCan { tipped: false },
                TRASH_POSITION,
            ),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &WorldObject> {
        [&self.feeder, &self.picnic, &self.trash].into_iter()
    }
}

/// Owns all mutable state of one yard session.
#[derive(Resource, Debug, Clone)]
pub struct YardSimulation {
    settings: YardSettings,
    seed: u64,
    pub(super) rng: ChaCha8Rng,
    pub(super) ids: ObjectIdGenerator,
    pub(super) player: Actor,
    pub(super) companion: Actor,
    wander: WanderState,
    pub(super) fixtures: Fixtures,
    pub(super) food: FoodSupply,
    pub(super) score: ScoreState,
    toast: ToastState,
    schedule: DeferredSchedule,
    spawn_trigger: Option<ScheduleHandle>,
    timer_clock: Duration,
    paused: bool,
    won: bool,
    torn_down: bool,
    outbox: Vec<YardEvent>,
}

impl YardSimulation {
    /// Starts a session: actors at their spawn points, starting food seeded and
    /// the periodic spawn trigger armed.
    pub fn new(settings: &YardSettings) -> Self {
        let seed = settings.seed.unwrap_or_else(rand::random);
        let mut ids = ObjectIdGenerator::default();
        let fixtures = Fixtures::new(&mut ids);

        let mut simulation = Self {
            settings: settings.clone(),
            seed,
            rng: ChaCha8Rng::seed_from_u64(seed),
            ids,
            player: Actor::at(PLAYER_START),
            companion: Actor::at(COMPANION_START),
            wander: WanderState::default(),
            fixtures,
            food: FoodSupply::default(),
            score: ScoreState::default(),
            toast: ToastState::default(),
            schedule: DeferredSchedule::default(),
            spawn_trigger: None,
            timer_clock: Duration::ZERO,
            paused: false,
            won: false,
            torn_down: false,
            outbox: Vec::new(),
        };

        for _ in 0..settings.initial_food {
            simulation.spawn_food();
        }
        simulation.spawn_trigger = Some(
            simulation
                .schedule
                .schedule(settings.food_spawn_interval, DeferredEvent::SpawnFood),
        );
        simulation
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn player(&self) -> &Actor {
        &self.player
    }

    pub fn player_mut(&mut self) -> &mut Actor {
        &mut self.player
    }

    pub fn companion(&self) -> &Actor {
        &self.companion
    }

    #[allow(dead_code)]
    pub fn companion_mut(&mut self) -> &mut Actor {
        &mut self.companion
    }

    pub fn food(&self) -> &FoodSupply {
        &self.food
    }

    pub fn fixtures(&self) -> &Fixtures {
        &self.fixtures
    }

    pub fn score(&self) -> &ScoreState {
        &self.score
    }

    pub fn toast(&self) -> &ToastState {
        &self.toast
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn has_won(&self) -> bool {
        self.won
    }

    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    /// Number of deferred events still waiting to run.
    pub fn pending_deferred(&self) -> usize {
        self.schedule.len()
    }

    /// Time as seen by the deferred schedule.
    #[allow(dead_code)]
    pub fn timer_clock(&self) -> Duration {
        self.timer_clock
    }

    pub fn set_paused(&mut self, paused: bool) {
        if self.paused != paused {
            info!("Yard {}", if paused { "paused" } else { "resumed" });
        }
        self.paused = paused;
    }

    /// Takes the events produced since the last call.
    pub fn drain_events(&mut self) -> Vec<YardEvent> {
        std::mem::take(&mut self.outbox)
    }

    /// Advances the whole session by one tick.
    pub fn tick(&mut self, input: &TickInput) {
        if self.torn_down {
            return;
        }
        if input.toggle_pause {
            self.set_paused(!self.paused);
        }

        let dt = if input.dt.is_finite() {
            input.dt.clamp(0.0, MAX_TICK_SECONDS)
        } else {
            0.0
        };

        if !(self.paused && self.settings.pause_freezes_timers) {
            self.timer_clock += Duration::from_secs_f32(dt);
            self.run_due_events();
        }
        if self.paused {
            return;
        }

        if input.jump && self.player.try_jump() {
            self.outbox.push(YardEvent::Jumped);
            self.show_toast(toast::HOP);
        }
        self.player.integrate(input.intent, dt);
        self.player.position = contain_in_yard(self.player.position);
        self.wander.advance(&mut self.companion, dt, &mut self.rng);

        self.check_win();

        if input.bite {
            match self.bite() {
                BiteOutcome::Ate { food, shared } => {
                    debug!("Bite took {} (shared: {})", food, shared)
                }
                BiteOutcome::TippedTrash { spilled } => {
                    debug!("Bite spilled {} scraps", spilled.len())
                }
                BiteOutcome::Nothing => debug!("Bite found nothing in reach"),
            }
        }
        if input.touch {
            let outcome = self.touch();
            if outcome.is_nothing() {
                debug!("Touch found nothing in reach");
            }
        }
    }

    /// Cancels the periodic spawn trigger and every pending deferred event.
    pub fn teardown(&mut self) {
        if self.torn_down {
            return;
        }
        if let Some(trigger) = self.spawn_trigger.take() {
            self.schedule.cancel(trigger);
        }
        let cancelled = self.schedule.len();
        self.schedule.clear();
        self.torn_down = true;
        info!(
            "Yard session torn down after {:.1}s ({} deferred events cancelled)",
            self.timer_clock.as_secs_f32(),
            cancelled
        );
    }

    /// Drops one food object at a random spot in the spawn area.
    pub fn spawn_food(&mut self) -> ObjectId {
        let (id, evicted) = self.food.spawn(&mut self.ids, &mut self.rng);
        self.record_food_added(id, evicted);
        id
    }

    /// Places a food object at an exact position, subject to capacity eviction.
    pub fn drop_food_at(&mut self, position: Vec3) -> ObjectId {
        let (id, evicted) = self.food.push(&mut self.ids, position);
        self.record_food_added(id, evicted);
        id
    }

    pub(super) fn eat_food(&mut self, id: ObjectId) -> Option<WorldObject> {
        let eaten = self.food.remove(id)?;
        self.outbox.push(YardEvent::FoodRemoved {
            id,
            reason: FoodRemovalReason::Eaten,
        });
        Some(eaten)
    }

    pub(super) fn show_toast(&mut self, message: &str) {
        self.toast.show(
            message,
            self.timer_clock,
            self.settings.toast_duration,
            &mut self.schedule,
        );
        self.outbox.push(YardEvent::ToastShown {
            message: message.to_string(),
        });
    }

    pub(super) fn push_event(&mut self, event: YardEvent) {
        self.outbox.push(event);
    }

    fn record_food_added(&mut self, id: ObjectId, evicted: Option<WorldObject>) {
        if let Some(position) = self
            .food
            .iter()
            .rev()
            .find(|food| food.id == id)
            .map(|food| food.position)
        {
            self.outbox.push(YardEvent::FoodSpawned { id, position });
        }
        if let Some(old) = evicted {
            debug!("Food supply full, evicting {}", old.id);
            self.outbox.push(YardEvent::FoodRemoved {
                id: old.id,
                reason: FoodRemovalReason::Evicted,
            });
        }
    }

    fn run_due_events(&mut self) {
        while let Some((handle, event)) = self.schedule.pop_due(self.timer_clock) {
            match event {
                DeferredEvent::SpawnFood => {
                    self.spawn_food();
                    let next = handle.due() + self.settings.food_spawn_interval;
                    self.spawn_trigger =
                        Some(self.schedule.schedule(next, DeferredEvent::SpawnFood));
                }
                DeferredEvent::ExpireToast => self.toast.expire(handle),
            }
        }
    }

    fn check_win(&mut self) {
        if !self.score.meets(&WinThresholds::default()) {
            return;
        }
        if self.won && self.settings.latch_win {
            return;
        }
        if !self.won {
            info!(
                "Win condition reached (food {}, mischief {}, affection {})",
                self.score.food(),
                self.score.mischief(),
                self.score.affection()
            );
            self.outbox.push(YardEvent::Won);
        }
        self.won = true;
        self.show_toast(toast::FAMILY_STARTED);
    }
}
