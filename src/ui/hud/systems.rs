// src/ui/hud/systems.rs
//
// Systems for spawning and refreshing the HUD.

use bevy::prelude::*;

use crate::core::{plugin::format_clock, SimulationClock};
use crate::yard::score::{Counter, ScoreState};
use crate::yard::state::YardSimulation;

use super::components::{ClockText, HudSettings, PauseBanner, ScoreText, ToastText};

// Visual constants
const PANEL_COLOR: Color = Color::srgba(0.0, 0.0, 0.0, 0.45);
const TEXT_COLOR: Color = Color::WHITE;
const TOAST_COLOR: Color = Color::srgb(1.0, 0.9, 0.4);
const WON_COLOR: Color = Color::srgb(0.55, 1.0, 0.55);
const BANNER_COLOR: Color = Color::srgba(1.0, 1.0, 1.0, 0.9);
const PAUSED_TEXT: &str = "Paused";

/// Spawns the status panel, toast line and pause banner.
pub fn spawn_hud(mut commands: Commands, settings: Res<HudSettings>) {
    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                top: Val::Px(settings.corner_offset),
                left: Val::Px(settings.corner_offset),
                padding: UiRect::all(Val::Px(settings.padding)),
                flex_direction: FlexDirection::Column,
                row_gap: Val::Px(4.0),
                ..default()
            },
            BackgroundColor(PANEL_COLOR),
        ))
        .with_children(|panel| {
            panel.spawn((
                Text::new(format_clock(0)),
                TextFont {
                    font_size: settings.status_font_size,
                    ..default()
                },
                TextColor(TEXT_COLOR),
                ClockText,
            ));
            panel.spawn((
                Text::new(score_line(&ScoreState::default())),
                TextFont {
                    font_size: settings.status_font_size,
                    ..default()
                },
                TextColor(TEXT_COLOR),
                ScoreText,
            ));
        });

    commands
        .spawn(Node {
            position_type: PositionType::Absolute,
            top: Val::Percent(18.0),
            width: Val::Percent(100.0),
            justify_content: JustifyContent::Center,
            ..default()
        })
        .with_children(|row| {
            row.spawn((
                Text::new(""),
                TextFont {
                    font_size: settings.toast_font_size,
                    ..default()
                },
                TextColor(TOAST_COLOR),
                ToastText,
            ));
        });

    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                ..default()
            },
            Visibility::Hidden,
            PauseBanner,
        ))
        .with_children(|banner| {
            banner.spawn((
                Text::new(PAUSED_TEXT),
                TextFont {
                    font_size: settings.banner_font_size,
                    ..default()
                },
                TextColor(BANNER_COLOR),
            ));
        });

    info!("HUD spawned");
}

/// Mirrors clock, counters, toast and pause state into the HUD nodes.
#[allow(clippy::type_complexity)]
pub fn update_hud(
    clock: Res<SimulationClock>,
    simulation: Option<Res<YardSimulation>>,
    mut clock_text: Query<&mut Text, (With<ClockText>, Without<ScoreText>, Without<ToastText>)>,
    mut score_text: Query<(&mut Text, &mut TextColor), (With<ScoreText>, Without<ClockText>, Without<ToastText>)>,
    mut toast_text: Query<&mut Text, (With<ToastText>, Without<ClockText>, Without<ScoreText>)>,
    mut banner: Query<&mut Visibility, With<PauseBanner>>,
) {
    let Some(simulation) = simulation else {
        return;
    };

    if let Ok(mut text) = clock_text.single_mut() {
        let label = clock.label();
        if text.0 != label {
            text.0 = label;
        }
    }

    if let Ok((mut text, mut color)) = score_text.single_mut() {
        let line = score_line(simulation.score());
        if text.0 != line {
            text.0 = line;
        }
        let wanted = if simulation.has_won() {
            WON_COLOR
        } else {
            TEXT_COLOR
        };
        if color.0 != wanted {
            color.0 = wanted;
        }
    }

    if let Ok(mut text) = toast_text.single_mut() {
        let message = simulation.toast().message();
        if text.0 != message {
            text.0 = message.to_string();
        }
    }

    if let Ok(mut visibility) = banner.single_mut() {
        let wanted = if simulation.is_paused() {
            Visibility::Inherited
        } else {
            Visibility::Hidden
        };
        visibility.set_if_neq(wanted);
    }
}

/// One-line summary of the three progress counters.
pub fn score_line(score: &ScoreState) -> String {
    [Counter::Food, Counter::Mischief, Counter::Affection]
        .into_iter()
        .map(|counter| format!("{} {}", counter.label(), score.get(counter)))
        .collect::<Vec<_>>()
        .join("  |  ")
}
