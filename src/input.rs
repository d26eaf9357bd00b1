//! Input handling for keyboard shortcuts and scene clicks.
//!
//! Space pauses the scene's motion and Escape returns to the landing page.
//! A left press and release with little cursor travel counts as a click and
//! is forwarded to selection; longer drags belong to the camera.

use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use bevy_egui::EguiContexts;

use crate::picking::cursor_to_ndc;
use crate::selection::SceneClick;
use crate::types::{AppState, GalaxyPhase, SceneClock};

/// Cursor travel in pixels beyond which a press is a drag, not a click.
pub const CLICK_SLOP: f32 = 4.0;

/// Where the current left press started, if it started on the scene.
#[derive(Resource, Default)]
pub struct ClickTracker {
    pub press_position: Option<Vec2>,
}

impl ClickTracker {
    /// True when a press at `start` released at `end` is a click.
    pub fn is_click(start: Vec2, end: Vec2) -> bool {
        start.distance(end) <= CLICK_SLOP
    }
}

/// Plugin providing keyboard shortcuts and click detection.
pub struct InputPlugin;

impl Plugin for InputPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ClickTracker>().add_systems(
            Update,
            (
                keyboard_shortcuts.run_if(in_state(AppState::Galaxy)),
                track_scene_clicks.run_if(in_state(GalaxyPhase::Running)),
            ),
        );
    }
}

/// Handle keyboard shortcuts while the scene is shown.
fn keyboard_shortcuts(
    keys: Res<ButtonInput<KeyCode>>,
    mut clock: ResMut<SceneClock>,
    mut next_state: ResMut<NextState<AppState>>,
) {
    // Space: toggle pause
    if keys.just_pressed(KeyCode::Space) {
        clock.paused = !clock.paused;
        info!("Scene {}", if clock.paused { "paused" } else { "running" });
    }

    // Escape: back to the landing page
    if keys.just_pressed(KeyCode::Escape) {
        info!("Leaving the scene");
        next_state.set(AppState::Landing);
    }
}

/// Turn short left press/release pairs on the scene into [`SceneClick`]s.
fn track_scene_clicks(
    mouse: Res<ButtonInput<MouseButton>>,
    window_query: Query<&Window, With<PrimaryWindow>>,
    mut tracker: ResMut<ClickTracker>,
    mut clicks: MessageWriter<SceneClick>,
    mut contexts: EguiContexts,
) {
    let Ok(window) = window_query.single() else {
        return;
    };
    let cursor = window.cursor_position();

    if mouse.just_pressed(MouseButton::Left) {
        // Presses on egui panels never reach the scene
        let over_ui = contexts
            .ctx_mut()
            .map(|ctx| ctx.is_pointer_over_area())
            .unwrap_or(false);
        tracker.press_position = if over_ui { None } else { cursor };
    }

    if mouse.just_released(MouseButton::Left) {
        let start = tracker.press_position.take();
        if let (Some(start), Some(end)) = (start, cursor)
            && ClickTracker::is_click(start, end)
        {
            clicks.write(SceneClick {
                ndc: cursor_to_ndc(end, window.size()),
            });
        }
    }
}
