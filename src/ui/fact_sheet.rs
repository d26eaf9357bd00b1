//! Fact-sheet modal for the selected body.
//!
//! Opens centered over the scene when a body is selected and closes from its
//! close button. Both directions animate with a short scale-and-fade; while
//! closing the sheet of the previous body stays visible until the animation
//! finishes.

use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

use crate::catalog::{BodyId, FactSheet};
use crate::selection::SelectedBody;

use super::icons;

/// Colors for the modal.
mod colors {
    use bevy_egui::egui::Color32;

    pub const MODAL_BG: Color32 = Color32::from_rgba_premultiplied(18, 18, 28, 240);
    pub const MODAL_BORDER: Color32 = Color32::from_rgb(60, 60, 80);
    pub const TITLE: Color32 = Color32::from_rgb(240, 240, 250);
    pub const LABEL: Color32 = Color32::from_rgb(140, 170, 220);
    pub const ACCENT: Color32 = Color32::from_rgb(255, 200, 90);
}

/// Duration of the open and close animation.
pub const MODAL_TRANSITION_SECS: f32 = 0.5;

/// Scale the modal grows from when opening.
///
/// Only reached at zero progress, where nothing is drawn, so the layer
/// transform never collapses to a point.
const MODAL_MIN_SCALE: f32 = 0.0;

const MODAL_WIDTH: f32 = 420.0;
const MODAL_MAX_HEIGHT: f32 = 480.0;

/// Animation state of the modal.
#[derive(Resource, Default, Clone, Debug, PartialEq)]
pub struct ModalTransition {
    /// Body whose sheet is drawn; kept while the close animation runs.
    pub shown: Option<BodyId>,
    /// 0 is fully hidden, 1 fully open.
    pub progress: f32,
}

impl ModalTransition {
    /// Move the animation towards showing `target`, or towards hidden.
    pub fn advance(&mut self, dt: f32, target: Option<BodyId>) {
        let step = dt / MODAL_TRANSITION_SECS;
        match target {
            Some(id) => {
                self.shown = Some(id);
                self.progress = (self.progress + step).min(1.0);
            }
            None => {
                self.progress = (self.progress - step).max(0.0);
                if self.progress == 0.0 {
                    self.shown = None;
                }
            }
        }
    }

    /// Uniform scale applied to the modal layer.
    pub fn scale(&self) -> f32 {
        MODAL_MIN_SCALE + (1.0 - MODAL_MIN_SCALE) * ease_out(self.progress)
    }

    pub fn opacity(&self) -> f32 {
        ease_out(self.progress)
    }
}

fn ease_out(t: f32) -> f32 {
    1.0 - (1.0 - t).powi(2)
}

/// Draw the modal and handle its close button.
pub fn fact_sheet_system(
    mut contexts: EguiContexts,
    time: Res<Time>,
    mut selected: ResMut<SelectedBody>,
    mut transition: ResMut<ModalTransition>,
) {
    transition.advance(time.delta_secs(), selected.body);
    let Some(id) = transition.shown else {
        return;
    };
    if transition.progress <= 0.0 {
        return;
    }

    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    let sheet = id.fact_sheet();
    let opacity = transition.opacity();
    let mut close_clicked = false;

    let frame = egui::Frame::window(&ctx.style())
        .fill(colors::MODAL_BG)
        .stroke(egui::Stroke::new(1.0, colors::MODAL_BORDER))
        .corner_radius(12.0)
        .inner_margin(16.0);

    let response = egui::Window::new(sheet.name)
        .id(egui::Id::new("fact_sheet"))
        .title_bar(false)
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
        .fixed_size(egui::vec2(MODAL_WIDTH, MODAL_MAX_HEIGHT))
        .frame(frame)
        .show(ctx, |ui| {
            ui.set_opacity(opacity);
            close_clicked = render_sheet(ui, sheet);
        });

    if let Some(inner) = response {
        let center = inner.response.rect.center();
        let scale = transition.scale();
        // Scale about the modal's own center
        let transform = egui::emath::TSTransform::from_translation(center.to_vec2() * (1.0 - scale))
            * egui::emath::TSTransform::from_scaling(scale);
        ctx.set_transform_layer(inner.response.layer_id, transform);
    }

    if close_clicked {
        info!("Closed fact sheet for {}", sheet.name);
        selected.dismiss();
    }
}

/// Lay out one fact sheet; returns true when the close button was clicked.
fn render_sheet(ui: &mut egui::Ui, sheet: &FactSheet) -> bool {
    let mut close_clicked = false;

    ui.horizontal(|ui| {
        ui.label(
            egui::RichText::new(sheet.name)
                .size(26.0)
                .strong()
                .color(colors::TITLE),
        );
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui
                .add(egui::Button::new(egui::RichText::new(icons::CLOSE).size(18.0)).frame(false))
                .on_hover_text("Close")
                .clicked()
            {
                close_clicked = true;
            }
        });
    });

    ui.add_space(6.0);
    ui.label(sheet.description);
    ui.add_space(10.0);

    egui::ScrollArea::vertical()
        .max_height(MODAL_MAX_HEIGHT - 120.0)
        .show(ui, |ui| {
            egui::Grid::new("fact_sheet_fields")
                .num_columns(2)
                .spacing([16.0, 6.0])
                .striped(true)
                .show(ui, |ui| {
                    for field in sheet.fields() {
                        ui.label(egui::RichText::new(field.label).color(colors::LABEL));
                        ui.label(field.value);
                        ui.end_row();
                    }
                });

            if !sheet.notable_facts.is_empty() {
                ui.add_space(12.0);
                ui.label(
                    egui::RichText::new("Notable Facts")
                        .size(16.0)
                        .strong()
                        .color(colors::ACCENT),
                );
                for fact in sheet.notable_facts {
                    ui.horizontal_wrapped(|ui| {
                        ui.label(egui::RichText::new(icons::STAR).color(colors::ACCENT));
                        ui.label(*fact);
                    });
                }
            }
        });

    close_clicked
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_opens_over_transition_duration() {
        let mut t = ModalTransition::default();
        t.advance(MODAL_TRANSITION_SECS / 2.0, Some(BodyId::Earth));
        assert_eq!(t.shown, Some(BodyId::Earth));
        assert_relative_eq!(t.progress, 0.5);

        t.advance(MODAL_TRANSITION_SECS, Some(BodyId::Earth));
        assert_eq!(t.progress, 1.0);
        assert_relative_eq!(t.scale(), 1.0);
        assert_relative_eq!(t.opacity(), 1.0);
    }

    #[test]
    fn test_closing_keeps_sheet_until_hidden() {
        let mut t = ModalTransition {
            shown: Some(BodyId::Mars),
            progress: 1.0,
        };
        t.advance(0.1, None);
        assert_eq!(t.shown, Some(BodyId::Mars));

        t.advance(1.0, None);
        assert_eq!(t.progress, 0.0);
        assert_eq!(t.shown, None);
    }

    #[test]
    fn test_switching_bodies_swaps_sheet() {
        let mut t = ModalTransition {
            shown: Some(BodyId::Mars),
            progress: 1.0,
        };
        t.advance(0.016, Some(BodyId::Venus));
        assert_eq!(t.shown, Some(BodyId::Venus));
    }

    #[test]
    fn test_hidden_modal_starts_from_nothing() {
        let t = ModalTransition::default();
        assert_eq!(t.scale(), 0.0);
        assert_eq!(t.opacity(), 0.0);
    }

    #[test]
    fn test_first_frame_of_opening_is_visible_but_small() {
        let mut t = ModalTransition::default();
        t.advance(0.016, Some(BodyId::Jupiter));
        assert!(t.scale() > 0.0);
        assert!(t.scale() < 0.2);
    }
}
