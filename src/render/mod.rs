//! Rendering for the solar-system scene.
//!
//! This module builds the scene's entities and keeps their visuals in step:
//! glow materials, the backdrop video and the egui-painted labels.

mod background;
pub mod bodies;
pub mod glow;
mod labels;

use bevy::prelude::*;
use bevy_egui::EguiPrimaryContextPass;

use crate::types::{AppState, GalaxyPhase, TickSystemSet};

use self::background::play_background_video;
use self::glow::sync_glow_materials;
use self::labels::draw_body_labels;

pub use self::background::{BACKDROP_RADIUS, Backdrop, BackgroundVideo, VideoStatus, poll_video_frames};
pub use self::bodies::{
    CelestialBody, OrbitRing, PlanetLight, RING_WIDTH, planet_light_factor, spawn_solar_system,
};
pub use self::glow::{GlowMaterial, GlowShell};
pub use self::labels::{BodyLabel, LABEL_GAP, LABEL_SIZE, LabelSettings};

/// Plugin aggregating all rendering functionality.
pub struct RenderPlugin;

impl Plugin for RenderPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(MaterialPlugin::<GlowMaterial>::default())
            .init_resource::<LabelSettings>()
            .add_systems(OnEnter(GalaxyPhase::Running), spawn_solar_system)
            .add_systems(
                Update,
                (
                    poll_video_frames.run_if(in_state(AppState::Galaxy)),
                    play_background_video.run_if(in_state(GalaxyPhase::Running)),
                    sync_glow_materials.after(TickSystemSet::ViewDependent),
                ),
            )
            .add_systems(
                EguiPrimaryContextPass,
                draw_body_labels.run_if(in_state(GalaxyPhase::Running)),
            );
    }
}
