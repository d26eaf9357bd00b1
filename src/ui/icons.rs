//! Phosphor icon definitions for the UI.
//!
//! Icons are registered with egui via `setup_fonts` on the first UI pass.

use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

/// Resource to track if fonts have been initialized.
#[derive(Resource, Default)]
pub struct FontsInitialized(pub bool);

/// Register the Phosphor icon font with egui.
/// Runs in EguiPrimaryContextPass where the egui context is guaranteed to be ready.
pub fn setup_fonts(mut contexts: EguiContexts, mut initialized: ResMut<FontsInitialized>) {
    if initialized.0 {
        return;
    }

    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    let mut fonts = egui::FontDefinitions::default();
    egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);

    ctx.set_fonts(fonts);
    initialized.0 = true;

    info!("Phosphor icon fonts initialized");
}

pub fn fonts_ready(initialized: Res<FontsInitialized>) -> bool {
    initialized.0
}

// Browse all icons at https://phosphoricons.com/

/// Close/X icon
pub const CLOSE: &str = egui_phosphor::regular::X;
/// Start button
pub const ROCKET: &str = egui_phosphor::regular::ROCKET;
/// Ringed planet, floating on the landing page
pub const PLANET: &str = egui_phosphor::regular::PLANET;
/// Globe, floating on the landing page
pub const GLOBE: &str = egui_phosphor::regular::GLOBE_HEMISPHERE_WEST;
/// Star, before fact-sheet bullets
pub const STAR: &str = egui_phosphor::regular::STAR_FOUR;
