//! YardPlugin owns the simulation resource and steps it once per frame.
use bevy::prelude::*;

use crate::{
    core::{SimulationClock, YardSettings},
    player::{components::PlayerCommands, systems::gather_player_commands},
};

use super::{diagnostics::run_self_checks, events::YardEvent, state::YardSimulation};

pub struct YardPlugin;

impl Plugin for YardPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<YardEvent>()
            .add_systems(Startup, start_yard_session)
            .add_systems(
                Update,
                step_yard_simulation.after(gather_player_commands),
            )
            .add_systems(Last, teardown_on_exit);
    }
}

/// Creates the session resource and runs the startup self-check against it.
pub fn start_yard_session(mut commands: Commands, settings: Res<YardSettings>) {
    let simulation = YardSimulation::new(&settings);
    info!(
        "Yard session started with seed {} ({} food on the lawn)",
        simulation.seed(),
        simulation.food().len()
    );

    let report = run_self_checks(&simulation);
    if report.is_clean() {
        info!("Self-checks: all {} passed", report.passed.len());
    } else {
        for failure in &report.failures {
            warn!("Self-check failed: {}", failure);
        }
        warn!(
            "Self-checks: {} passed / {} failed",
            report.passed.len(),
            report.failures.len()
        );
    }

    commands.insert_resource(simulation);
}

/// Feeds this frame's delta and player commands into the simulation and
/// publishes the resulting domain events.
pub fn step_yard_simulation(
    clock: Res<SimulationClock>,
    mut player_commands: ResMut<PlayerCommands>,
    mut simulation: ResMut<YardSimulation>,
    mut events: MessageWriter<YardEvent>,
) {
    if simulation.is_torn_down() {
        return;
    }
    let input = player_commands.take_tick_input(clock.last_delta().as_secs_f32());
    simulation.tick(&input);
    events.write_batch(simulation.drain_events());
}

/// Cancels deferred work once the app is shutting down.
pub fn teardown_on_exit(
    mut exits: MessageReader<AppExit>,
    mut simulation: ResMut<YardSimulation>,
) {
    if exits.read().next().is_some() {
        debug!(
            "App exiting with {} deferred events pending",
            simulation.pending_deferred()
        );
        simulation.teardown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::CorePlugin;

    fn headless_app() -> App {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins)
            .add_plugins(CorePlugin::with_settings(YardSettings {
                seed: Some(9),
                ..YardSettings::default()
            }))
            .add_plugins(YardPlugin)
            .init_resource::<PlayerCommands>();
        app
    }

    #[test]
    fn startup_inserts_a_seeded_session() {
        let mut app = headless_app();
        app.update();

        let simulation = app.world().resource::<YardSimulation>();
        assert_eq!(simulation.seed(), 9);
        assert_eq!(simulation.food().len(), 6);
    }

    #[test]
    fn queued_pause_command_reaches_the_simulation() {
        let mut app = headless_app();
        app.update();

        app.world_mut().resource_mut::<PlayerCommands>().toggle_pause = true;
        app.update();

        assert!(app.world().resource::<YardSimulation>().is_paused());
        assert!(!app.world().resource::<PlayerCommands>().toggle_pause);
    }
}
