//! UI module providing the egui-based landing page and fact-sheet modal.

pub mod fact_sheet;
pub mod icons;
pub mod landing;

use bevy::prelude::*;
use bevy_egui::EguiPrimaryContextPass;

use crate::types::AppState;

pub use fact_sheet::ModalTransition;
pub use landing::LandingPage;

/// Plugin that adds all UI systems.
pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<icons::FontsInitialized>()
            .init_resource::<LandingPage>()
            .init_resource::<ModalTransition>()
            .add_systems(OnEnter(AppState::Landing), landing::mount_landing_page)
            .add_systems(OnExit(AppState::Galaxy), reset_modal)
            // Font initialization MUST run before any UI systems that use icons
            .add_systems(EguiPrimaryContextPass, icons::setup_fonts)
            .add_systems(
                EguiPrimaryContextPass,
                (
                    landing::landing_page_system.run_if(in_state(AppState::Landing)),
                    fact_sheet::fact_sheet_system.run_if(in_state(AppState::Galaxy)),
                )
                    .after(icons::setup_fonts)
                    .run_if(icons::fonts_ready),
            );
    }
}

fn reset_modal(mut transition: ResMut<ModalTransition>) {
    *transition = ModalTransition::default();
}
