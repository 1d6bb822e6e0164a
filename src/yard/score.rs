//! Bounded progress counters and the win condition.

pub const COUNTER_MAX: u32 = 100;

pub const FOOD_PER_BITE: u32 = 8;
pub const AFFECTION_PER_SHARE: u32 = 12;
pub const MISCHIEF_PER_TRASH_TIP: u32 = 12;
pub const MISCHIEF_PER_FEEDER_SHAKE: u32 = 6;
pub const MISCHIEF_PER_PICNIC_SWIPE: u32 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Counter {
    Food,
    Mischief,
    Affection,
}

impl Counter {
    pub fn label(self) -> &'static str {
        match self {
            Self::Food => "food",
            Self::Mischief => "mischief",
            Self::Affection => "affection",
        }
    }
}

/// Thresholds that must all hold at once to win.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WinThresholds {
    pub food: u32,
    pub mischief: u32,
    pub affection: u32,
}

impl Default for WinThresholds {
    fn default() -> Self {
        Self {
            food: 50,
            mischief: 40,
            affection: 100,
        }
    }
}

/// The three counters, each kept within `0..=COUNTER_MAX`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScoreState {
    food: u32,
    mischief: u32,
    affection: u32,
}

impl ScoreState {
    pub fn food(&self) -> u32 {
        self.food
    }

    pub fn mischief(&self) -> u32 {
        self.mischief
    }

    pub fn affection(&self) -> u32 {
        self.affection
    }

    pub fn get(&self, counter: Counter) -> u32 {
        match counter {
            Counter::Food => self.food,
            Counter::Mischief => self.mischief,
            Counter::Affection => self.affection,
        }
    }

    /// Adds to one counter and re-clamps all three.
    pub fn add(&mut self, counter: Counter, amount: u32) {
        let slot = match counter {
            Counter::Food => &mut self.food,
            Counter::Mischief => &mut self.mischief,
            Counter::Affection => &mut self.affection,
        };
        *slot = slot.saturating_add(amount);
        self.clamp();
    }

    fn clamp(&mut self) {
        self.food = self.food.min(COUNTER_MAX);
        self.mischief = self.mischief.min(COUNTER_MAX);
        self.affection = self.affection.min(COUNTER_MAX);
    }

    pub fn meets(&self, thresholds: &WinThresholds) -> bool {
        self.food >= thresholds.food
            && self.mischief >= thresholds.mischief
            && self.affection >= thresholds.affection
    }
}
