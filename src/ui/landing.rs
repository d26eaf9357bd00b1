//! Landing page shown before the scene.
//!
//! A black hero screen with twinkling stars, a title whose words take turns
//! coming into focus, a short subtitle and a start button. Two planet glyphs
//! bob gently in the corners. The whole intro fades in and rises on mount.

use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};
use rand::Rng;

use crate::types::AppState;

use super::icons;

/// Colors for the landing page.
mod colors {
    use bevy_egui::egui::Color32;

    pub const BACKGROUND: Color32 = Color32::BLACK;
    pub const TITLE_DIM: Color32 = Color32::from_rgb(110, 110, 130);
    pub const TITLE_FOCUS: Color32 = Color32::from_rgb(255, 255, 255);
    pub const FOCUS_FRAME: Color32 = Color32::from_rgb(0, 200, 255);
    pub const SUBTITLE: Color32 = Color32::from_rgb(180, 180, 200);
    pub const BUTTON: Color32 = Color32::from_rgb(34, 211, 238);
    pub const GLYPH_WARM: Color32 = Color32::from_rgb(255, 170, 80);
    pub const GLYPH_COOL: Color32 = Color32::from_rgb(90, 170, 255);
}

pub const TITLE_WORDS: [&str; 6] = ["Explore", "the", "Wonders", "of", "the", "Universe"];
pub const SUBTITLE: &str = "Vast, mysterious and beautiful, the universe holds countless secrets \
waiting to be discovered. Join us on an incredible journey through our galaxy and beyond.";

/// Number of twinkling background stars.
pub const STAR_COUNT: usize = 50;

/// Seconds a title word stays in focus, then the pause before the next.
pub const FOCUS_DURATION: f32 = 2.0;
pub const FOCUS_PAUSE: f32 = 1.0;

/// Intro fade-in duration and rise distance in pixels.
pub const INTRO_DURATION: f32 = 1.0;
pub const INTRO_RISE: f32 = 50.0;

/// Bobbing amplitude of the corner glyphs, in pixels.
pub const BOB_AMPLITUDE: f32 = 10.0;

/// One background star, positioned as a fraction of the screen.
#[derive(Clone, Debug)]
pub struct TwinkleStar {
    pub position: Vec2,
    /// Diameter in pixels.
    pub size: f32,
    /// Seconds per fade-in/fade-out cycle.
    pub period: f32,
}

impl TwinkleStar {
    pub fn random(rng: &mut impl Rng) -> Self {
        Self {
            position: Vec2::new(rng.random(), rng.random()),
            size: rng.random_range(0.5..3.0),
            period: rng.random_range(2.0..5.0),
        }
    }
}

/// State of the landing page.
#[derive(Resource, Default)]
pub struct LandingPage {
    /// Set after the first full frame; the start button is inert before.
    pub ready: bool,
    /// `Time::elapsed_secs` when the page mounted.
    pub mounted_at: f32,
    pub stars: Vec<TwinkleStar>,
    start_hovered: bool,
}

/// Reset the page each time it is entered.
pub fn mount_landing_page(mut landing: ResMut<LandingPage>, time: Res<Time>) {
    let mut rng = rand::rng();
    *landing = LandingPage {
        ready: false,
        mounted_at: time.elapsed_secs(),
        stars: (0..STAR_COUNT).map(|_| TwinkleStar::random(&mut rng)).collect(),
        start_hovered: false,
    };
}

/// Smooth 0 → 1 → 0 pulse over `period` seconds.
pub fn pulse(t: f32, period: f32) -> f32 {
    let phase = (t / period).rem_euclid(1.0);
    0.5 - 0.5 * (phase * std::f32::consts::TAU).cos()
}

/// Opacity of a star at time `t`.
pub fn twinkle_opacity(t: f32, period: f32) -> f32 {
    pulse(t, period)
}

/// Vertical glyph offset at time `t`; positive is up.
pub fn bob_offset(t: f32, period: f32, amplitude: f32) -> f32 {
    amplitude * pulse(t, period)
}

/// Index of the title word in focus at time `t`.
pub fn focused_word(t: f32, word_count: usize) -> usize {
    if word_count == 0 {
        return 0;
    }
    let cycle = FOCUS_DURATION + FOCUS_PAUSE;
    (t.max(0.0) / cycle) as usize % word_count
}

/// Intro animation progress in [0, 1].
pub fn intro_progress(t: f32) -> f32 {
    (t / INTRO_DURATION).clamp(0.0, 1.0)
}

/// Draw the landing page and start the scene on request.
pub fn landing_page_system(
    mut contexts: EguiContexts,
    time: Res<Time>,
    mut landing: ResMut<LandingPage>,
    mut next_state: ResMut<NextState<AppState>>,
) {
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    let t = time.elapsed_secs() - landing.mounted_at;

    egui::CentralPanel::default()
        .frame(egui::Frame::NONE.fill(colors::BACKGROUND))
        .show(ctx, |ui| {
            let rect = ui.max_rect();
            let painter = ui.painter();

            for star in &landing.stars {
                let center = rect.min
                    + egui::vec2(star.position.x * rect.width(), star.position.y * rect.height());
                let alpha = (twinkle_opacity(t, star.period) * 255.0) as u8;
                painter.circle_filled(center, star.size / 2.0, egui::Color32::from_white_alpha(alpha));
            }

            // Floating glyphs in opposite corners, out of phase
            painter.text(
                rect.left_bottom() + egui::vec2(60.0, -60.0 - bob_offset(t, 2.0, BOB_AMPLITUDE)),
                egui::Align2::LEFT_BOTTOM,
                icons::PLANET,
                egui::FontId::proportional(96.0),
                colors::GLYPH_WARM,
            );
            painter.text(
                rect.right_top() + egui::vec2(-60.0, 60.0 + bob_offset(t, 3.0, BOB_AMPLITUDE)),
                egui::Align2::RIGHT_TOP,
                icons::GLOBE,
                egui::FontId::proportional(72.0),
                colors::GLYPH_COOL,
            );
        });

    let intro = intro_progress(t);
    let focus = focused_word(t, TITLE_WORDS.len());
    let hover = ctx.animate_bool(egui::Id::new("landing_start_hover"), landing.start_hovered);
    let mut start_clicked = false;

    egui::Area::new(egui::Id::new("landing_intro"))
        .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, (1.0 - intro) * INTRO_RISE))
        .show(ctx, |ui| {
            ui.set_opacity(intro);
            ui.vertical_centered(|ui| {
                ui.horizontal(|ui| {
                    for (i, word) in TITLE_WORDS.iter().enumerate() {
                        render_title_word(ui, word, i == focus);
                    }
                });

                ui.add_space(16.0);
                ui.set_max_width(640.0);
                ui.label(egui::RichText::new(SUBTITLE).size(18.0).color(colors::SUBTITLE));
                ui.add_space(32.0);

                let size = 22.0 * (1.0 + 0.1 * hover);
                let button = egui::Button::new(
                    egui::RichText::new(format!("{0} Start the Journey {0}", icons::ROCKET))
                        .size(size)
                        .color(colors::BUTTON),
                )
                .fill(egui::Color32::TRANSPARENT)
                .stroke(egui::Stroke::new(2.0, colors::BUTTON))
                .corner_radius(24.0)
                .min_size(egui::vec2(220.0, 48.0));

                let response = ui.add(button);
                landing.start_hovered = response.hovered();
                start_clicked = response.clicked();
            });
        });

    if start_clicked && landing.ready {
        info!("Starting the solar system tour");
        next_state.set(AppState::Galaxy);
    }
    landing.ready = true;
}

fn render_title_word(ui: &mut egui::Ui, word: &str, focused: bool) {
    let (color, stroke) = if focused {
        (colors::TITLE_FOCUS, egui::Stroke::new(2.0, colors::FOCUS_FRAME))
    } else {
        (colors::TITLE_DIM, egui::Stroke::NONE)
    };

    egui::Frame::NONE
        .stroke(stroke)
        .corner_radius(6.0)
        .inner_margin(egui::Margin::symmetric(10, 4))
        .show(ui, |ui| {
            ui.label(egui::RichText::new(word).size(44.0).strong().color(color));
        });
}
