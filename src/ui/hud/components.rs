// src/ui/hud/components.rs
//
// Marker components and layout settings for the HUD.

use bevy::prelude::*;

/// Text node showing the elapsed session clock.
#[derive(Component, Debug, Default)]
pub struct ClockText;

/// Text node showing the three progress counters.
#[derive(Component, Debug, Default)]
pub struct ScoreText;

/// Text node showing the current toast message.
#[derive(Component, Debug, Default)]
pub struct ToastText;

/// Banner shown while the simulation is paused.
#[derive(Component, Debug, Default)]
pub struct PauseBanner;

/// Resource containing HUD layout settings.
#[derive(Resource, Debug)]
pub struct HudSettings {
    /// Offset of the status panel from the top-left corner (pixels).
    pub corner_offset: f32,

    /// Padding inside the status panel (pixels).
    pub padding: f32,

    /// Font size for the clock and counters (points).
    pub status_font_size: f32,

    /// Font size for toasts (points).
    pub toast_font_size: f32,

    /// Font size for the pause banner (points).
    pub banner_font_size: f32,
}

impl Default for HudSettings {
    fn default() -> Self {
        Self {
            corner_offset: 12.0,
            padding: 10.0,
            status_font_size: 18.0,
            toast_font_size: 22.0,
            banner_font_size: 48.0,
        }
    }
}
