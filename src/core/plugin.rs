//! CorePlugin wires session settings, wall-clock timing and logging utilities.
use bevy::prelude::*;
#[cfg(feature = "core_debug")]
use bevy::time::TimerMode;
use std::time::Duration;

use super::config::YardSettings;

#[cfg(feature = "core_debug")]
#[derive(Resource)]
struct DebugTickTimer {
    timer: Timer,
}

#[cfg(feature = "core_debug")]
impl Default for DebugTickTimer {
    fn default() -> Self {
        Self {
            timer: Timer::from_seconds(1.0, TimerMode::Repeating),
        }
    }
}

/// Tracks real frame deltas and the wall-clock time since the session started.
#[derive(Resource, Debug, Default)]
pub struct SimulationClock {
    last_delta: Duration,
    elapsed: Duration,
    ticks: u64,
}

impl SimulationClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last real delta reported by Bevy's Time resource.
    pub fn last_delta(&self) -> Duration {
        self.last_delta
    }

    /// Total duration elapsed since the clock was initialised, paused time included.
    #[allow(dead_code)]
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    #[cfg_attr(not(feature = "core_debug"), allow(dead_code))]
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Display-ready `MM:SS` label for the elapsed session time.
    pub fn label(&self) -> String {
        format_clock(self.elapsed.as_secs())
    }

    /// Applies a real delta to the clock.
    pub fn tick(&mut self, real_delta: Duration) {
        self.last_delta = real_delta;
        self.elapsed += real_delta;
        self.ticks = self.ticks.saturating_add(1);
    }
}

/// Formats whole seconds as zero-padded minutes and seconds.
pub fn format_clock(seconds: u64) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

/// Registers session settings and the wall clock.
#[derive(Debug, Clone, Default)]
pub struct CorePlugin {
    settings: Option<YardSettings>,
}

impl CorePlugin {
    /// Uses the provided settings instead of reading `config/yard.toml`.
    #[allow(dead_code)]
    pub fn with_settings(settings: YardSettings) -> Self {
        Self {
            settings: Some(settings),
        }
    }
}

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        let settings = self
            .settings
            .clone()
            .unwrap_or_else(YardSettings::load_or_default);

        app.insert_resource(settings)
            .insert_resource(SimulationClock::new())
            .add_systems(Startup, log_startup_settings)
            .add_systems(PreUpdate, update_simulation_clock);

        #[cfg(feature = "core_debug")]
        {
            app.insert_resource(DebugTickTimer::default())
                .add_systems(Update, log_clock_ticks);
        }
    }
}

fn update_simulation_clock(mut clock: ResMut<SimulationClock>, time: Res<Time>) {
    clock.tick(time.delta());
}

fn log_startup_settings(settings: Res<YardSettings>) {
    info!(
        "CorePlugin initialised: seed {:?}, {} starting food, spawn every {:.1}s, toast {:.1}s, win latch {}, pause freezes timers {}",
        settings.seed,
        settings.initial_food,
        settings.food_spawn_interval.as_secs_f32(),
        settings.toast_duration.as_secs_f32(),
        settings.latch_win,
        settings.pause_freezes_timers
    );
}

#[cfg(feature = "core_debug")]
fn log_clock_ticks(mut timer: ResMut<DebugTickTimer>, clock: Res<SimulationClock>) {
    if timer.timer.tick(clock.last_delta()).just_finished() {
        info!(
            target: "core_debug",
            "Session {} | ticks: {} | real dt: {:.4}s",
            clock.label(),
            clock.ticks(),
            clock.last_delta().as_secs_f32(),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clock_accumulates_deltas() {
        let mut clock = SimulationClock::new();
        clock.tick(Duration::from_millis(1200));
        clock.tick(Duration::from_millis(800));

        assert_eq!(clock.last_delta(), Duration::from_millis(800));
        assert_eq!(clock.elapsed(), Duration::from_secs(2));
        assert_eq!(clock.ticks(), 2);
    }

    #[test]
    fn label_is_zero_padded_minutes_and_seconds() {
        assert_eq!(format_clock(0), "00:00");
        assert_eq!(format_clock(59), "00:59");
        assert_eq!(format_clock(61), "01:01");
        assert_eq!(format_clock(3600), "60:00");

        let mut clock = SimulationClock::new();
        clock.tick(Duration::from_millis(75_900));
        assert_eq!(clock.label(), "01:15");
    }
}
