//! Planet name labels.
//!
//! Each planet carries a label child: a camera-facing quad above the planet
//! that takes part in picking. The text itself is painted with egui at the
//! quad's projected position, scaled to the quad's on-screen height. Egui
//! has no depth buffer, so labels hidden behind a body are skipped.

use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

use crate::camera::MainCamera;
use crate::picking::{PickShape, intersect};

use super::bodies::CelestialBody;

/// Label quad size in world units (width, height).
pub const LABEL_SIZE: Vec2 = Vec2::new(10.0, 5.0);

/// Gap between a planet's surface and its label's center.
pub const LABEL_GAP: f32 = 2.0;

/// Name label attached to a planet.
#[derive(Component, Clone, Debug)]
pub struct BodyLabel {
    pub text: &'static str,
}

/// Local offset of a label above a body of `radius`.
pub fn label_offset(radius: f32) -> Vec3 {
    Vec3::new(0.0, radius + LABEL_GAP, 0.0)
}

/// Settings for label rendering.
#[derive(Resource)]
pub struct LabelSettings {
    pub visible: bool,
    /// Fraction of the quad's screen height used by the glyphs.
    pub text_fill: f32,
    /// Labels smaller than this on screen are skipped.
    pub min_font_size: f32,
    pub max_font_size: f32,
}

impl Default for LabelSettings {
    fn default() -> Self {
        Self {
            visible: true,
            text_fill: 0.5,
            min_font_size: 6.0,
            max_font_size: 48.0,
        }
    }
}

/// Font size for a label whose quad spans `screen_height` pixels, or `None`
/// when it would be too small to read.
pub fn label_font_size(screen_height: f32, settings: &LabelSettings) -> Option<f32> {
    let size = screen_height * settings.text_fill;
    (size >= settings.min_font_size).then(|| size.min(settings.max_font_size))
}

/// Whether a body's sphere lies between `eye` and `point`.
pub fn is_occluded<'a>(
    eye: Vec3,
    point: Vec3,
    bodies: impl IntoIterator<Item = (&'a PickShape, &'a GlobalTransform)>,
) -> bool {
    let Ok(direction) = Dir3::new(point - eye) else {
        return false;
    };
    let ray = Ray3d::new(eye, direction);
    let reach = eye.distance(point);

    bodies
        .into_iter()
        .any(|(shape, transform)| intersect(shape, transform, ray).is_some_and(|t| t < reach))
}

/// Paint every visible label's text over its quad.
pub fn draw_body_labels(
    mut egui_ctx: EguiContexts,
    labels: Query<(&BodyLabel, &GlobalTransform)>,
    bodies: Query<(&PickShape, &GlobalTransform), With<CelestialBody>>,
    camera: Query<(&Camera, &GlobalTransform), With<MainCamera>>,
    settings: Res<LabelSettings>,
) {
    if !settings.visible {
        return;
    }

    let Ok((camera, camera_transform)) = camera.single() else {
        return;
    };
    let Ok(ctx) = egui_ctx.ctx_mut() else {
        return;
    };

    let half_up = camera_transform.up() * (LABEL_SIZE.y / 2.0);

    egui::Area::new(egui::Id::new("body_labels"))
        .fixed_pos(egui::pos2(0.0, 0.0))
        .order(egui::Order::Background)
        .interactable(false)
        .show(ctx, |ui| {
            let painter = ui.painter();

            for (label, transform) in &labels {
                let center = transform.translation();
                if is_occluded(camera_transform.translation(), center, &bodies) {
                    continue;
                }

                let (Ok(top), Ok(bottom)) = (
                    camera.world_to_viewport(camera_transform, center + half_up),
                    camera.world_to_viewport(camera_transform, center - half_up),
                ) else {
                    continue;
                };

                let Some(font_size) = label_font_size((bottom.y - top.y).abs(), &settings) else {
                    continue;
                };

                let pos = egui::pos2((top.x + bottom.x) / 2.0, (top.y + bottom.y) / 2.0);
                let font = egui::FontId::proportional(font_size);

                painter.text(
                    pos + egui::vec2(1.0, 1.0),
                    egui::Align2::CENTER_CENTER,
                    label.text,
                    font.clone(),
                    egui::Color32::from_rgba_unmultiplied(0, 0, 0, 180),
                );
                painter.text(
                    pos,
                    egui::Align2::CENTER_CENTER,
                    label.text,
                    font,
                    egui::Color32::WHITE,
                );
            }
        });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_sits_above_surface() {
        let offset = label_offset(6.0);
        assert_eq!(offset, Vec3::new(0.0, 8.0, 0.0));
    }

    fn star(radius: f32) -> (PickShape, GlobalTransform) {
        (PickShape::Sphere { radius }, GlobalTransform::IDENTITY)
    }

    #[test]
    fn test_label_behind_star_is_hidden() {
        let (shape, transform) = star(30.0);
        let eye = Vec3::new(0.0, 0.0, 100.0);
        assert!(is_occluded(eye, Vec3::new(0.0, 8.0, -200.0), [(&shape, &transform)]));
    }

    #[test]
    fn test_label_beside_or_before_star_is_visible() {
        let (shape, transform) = star(30.0);
        let eye = Vec3::new(0.0, 0.0, 100.0);
        assert!(!is_occluded(eye, Vec3::new(120.0, 8.0, -200.0), [(&shape, &transform)]));
        assert!(!is_occluded(eye, Vec3::new(0.0, 8.0, 50.0), [(&shape, &transform)]));
        assert!(!is_occluded(
            eye,
            Vec3::new(0.0, 8.0, -200.0),
            std::iter::empty::<(&PickShape, &GlobalTransform)>()
        ));
    }

    #[test]
    fn test_font_size_scales_and_clamps() {
        let settings = LabelSettings::default();
        assert_eq!(label_font_size(5.0, &settings), None);
        assert_eq!(label_font_size(20.0, &settings), Some(10.0));
        assert_eq!(label_font_size(1000.0, &settings), Some(48.0));
    }
}
