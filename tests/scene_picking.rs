//! Click selection against a constructed scene.
//!
//! Clicks are injected as normalized device coordinates computed from the
//! test camera, so each test aims at a known world point.

mod common;

use bevy::prelude::*;
use stellar_tour::catalog::BodyId;
use stellar_tour::picking::{PickShape, cast_ray, ray_from_ndc};
use stellar_tour::render::{BodyLabel, CelestialBody};
use stellar_tour::selection::SelectedBody;

use common::*;

fn selected(app: &App) -> Option<BodyId> {
    app.world().resource::<SelectedBody>().body
}

/// Paused scene with global transforms and label orientation settled.
fn settled_scene() -> App {
    let mut app = scene_app();
    enter_scene(&mut app, textures_without(&[]));
    set_paused(&mut app, true);
    app.update();
    app.update();
    app
}

fn label_position(app: &mut App, id: BodyId) -> Vec3 {
    app.world_mut()
        .query::<(&BodyLabel, &GlobalTransform)>()
        .iter(app.world())
        .find(|(label, _)| label.text == id.name())
        .map(|(_, transform)| transform.translation())
        .expect("label exists")
}

fn body_position(app: &mut App, id: BodyId) -> Vec3 {
    app.world_mut()
        .query::<(&CelestialBody, &GlobalTransform)>()
        .iter(app.world())
        .find(|(body, _)| body.id == id)
        .map(|(_, transform)| transform.translation())
        .expect("body exists")
}

#[test]
fn test_click_through_glow_selects_star() {
    let mut app = settled_scene();
    let ndc = world_to_ndc(&mut app, Vec3::ZERO);
    click(&mut app, ndc);
    assert_eq!(selected(&app), Some(BodyId::Sun));
}

#[test]
fn test_click_on_planet_selects_it() {
    let mut app = settled_scene();
    let target = body_position(&mut app, BodyId::Saturn);
    let ndc = world_to_ndc(&mut app, target);
    click(&mut app, ndc);
    assert_eq!(selected(&app), Some(BodyId::Saturn));
}

#[test]
fn test_label_in_front_of_planet_resolves_to_planet() {
    let mut app = settled_scene();
    let target = label_position(&mut app, BodyId::Jupiter);
    let ndc = world_to_ndc(&mut app, target);

    // The label quad is the nearest hit along this ray
    let (camera, projection) = app
        .world_mut()
        .query::<(&GlobalTransform, &Projection)>()
        .iter(app.world())
        .next()
        .map(|(t, p)| (*t, p.clone()))
        .expect("camera");
    let ray = ray_from_ndc(ndc, &camera, &projection).expect("ray");
    let hits = {
        let mut shapes = app
            .world_mut()
            .query::<(Entity, &PickShape, &GlobalTransform)>();
        cast_ray(ray, shapes.iter(app.world()))
    };
    assert!(hits.len() >= 2);
    assert!(app.world().get::<BodyLabel>(hits[0].entity).is_some());

    click(&mut app, ndc);
    assert_eq!(selected(&app), Some(BodyId::Jupiter));
}

#[test]
fn test_ring_only_click_keeps_selection() {
    let mut app = settled_scene();
    let ndc = world_to_ndc(&mut app, Vec3::ZERO);
    click(&mut app, ndc);
    assert_eq!(selected(&app), Some(BodyId::Sun));

    // Mercury's ring on the far side from Mercury itself
    let mercury_ring = BodyId::Mercury.data().distance + 0.1;
    let ndc = world_to_ndc(&mut app, Vec3::new(-mercury_ring, 0.0, 0.0));
    click(&mut app, ndc);
    assert_eq!(selected(&app), Some(BodyId::Sun));
}

#[test]
fn test_empty_click_after_dismiss_selects_nothing() {
    let mut app = settled_scene();
    let ndc = world_to_ndc(&mut app, Vec3::ZERO);
    click(&mut app, ndc);
    assert_eq!(selected(&app), Some(BodyId::Sun));

    app.world_mut().resource_mut::<SelectedBody>().dismiss();
    app.update();

    // Near the top edge the ray passes over every ring and body
    click(&mut app, Vec2::new(0.0, 0.99));
    assert_eq!(selected(&app), None);
}
