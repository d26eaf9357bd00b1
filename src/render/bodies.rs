//! Scene construction.
//!
//! Builds the star with its glow shells and lights, one orbit pivot per
//! planet carrying the planet, its label and a directional light aimed at
//! it, the orbit rings and the sky backdrop. Runs once per mount, after every texture request has settled.

use std::f32::consts::FRAC_PI_2;

use bevy::prelude::*;

use crate::assets::{GALAXY_TEXTURE, ResolvedTextures};
use crate::catalog::{BodyData, BodyId, BodyKind, STAR_FALLBACK_COLOR, planets, random_fallback_color};
use crate::motion::{OrbitPivot, Spin};
use crate::picking::PickShape;
use crate::render::background::{BACKDROP_RADIUS, Backdrop};
use crate::render::glow::{GLOW_SHELLS, GlowMaterial, GlowShell, hex_color};
use crate::render::labels::{BodyLabel, LABEL_SIZE, label_offset};
use crate::selection::Selectable;
use crate::types::SceneEntity;

/// Width of an orbit ring, outward from the orbit radius.
pub const RING_WIDTH: f32 = 0.2;

/// Segments around each orbit ring.
const RING_RESOLUTION: u32 = 128;

/// Opacity of the orbit rings.
const RING_OPACITY: f32 = 0.3;

/// Main star light: (color, intensity in lumens, range).
const SUN_LIGHT: (u32, f32, f32) = (0xffffff, 4.0e9, 1000.0);

/// Wider, dimmer fill light from the star.
const SUN_HALO_LIGHT: (u32, f32, f32) = (0xffffcc, 1.0e9, 2000.0);

/// Illuminance of a planet's directional light at full strength.
const PLANET_LIGHT_LUX: f32 = 2_000.0;

/// Orbit distance at which planet lights reach their dimmest.
const PLANET_LIGHT_FALLOFF: f32 = 600.0;

/// Directional light shining from the star towards one planet.
#[derive(Component, Clone, Copy, Debug)]
pub struct PlanetLight {
    pub body: BodyId,
}

/// Relative strength of a planet's light, dimming linearly with distance to
/// a floor of 0.1.
pub fn planet_light_factor(distance: f32) -> f32 {
    (1.0 - distance / PLANET_LIGHT_FALLOFF * 0.8).max(0.1)
}

/// Component marking an entity as a star or planet of the scene.
#[derive(Component, Clone, Debug)]
pub struct CelestialBody {
    pub id: BodyId,
    pub kind: BodyKind,
    /// Sphere radius in display units.
    pub radius: f32,
    /// Orbit radius in display units (0 for the star).
    pub distance: f32,
}

impl From<&BodyData> for CelestialBody {
    fn from(data: &BodyData) -> Self {
        Self {
            id: data.id,
            kind: data.id.kind(),
            radius: data.radius,
            distance: data.distance,
        }
    }
}

/// Thin ring tracing a planet's orbit.
#[derive(Component, Clone, Copy, Debug)]
pub struct OrbitRing {
    pub body: BodyId,
}

/// Surface material for a body: its texture when it loaded, otherwise a
/// solid fallback color.
pub fn body_material(id: BodyId, textures: &ResolvedTextures, rng: &mut impl rand::Rng) -> StandardMaterial {
    let texture = textures.for_body(id);
    match (id.kind(), texture) {
        (BodyKind::Star, Some(texture)) => StandardMaterial {
            base_color_texture: Some(texture),
            unlit: true,
            ..default()
        },
        (BodyKind::Star, None) => StandardMaterial {
            base_color: STAR_FALLBACK_COLOR,
            unlit: true,
            ..default()
        },
        (BodyKind::Planet, Some(texture)) => StandardMaterial {
            base_color_texture: Some(texture),
            perceptual_roughness: 0.9,
            ..default()
        },
        (BodyKind::Planet, None) => StandardMaterial {
            base_color: random_fallback_color(rng),
            perceptual_roughness: 0.9,
            ..default()
        },
    }
}

/// Spawn every body, ring and the backdrop.
pub fn spawn_solar_system(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut glow_materials: ResMut<Assets<GlowMaterial>>,
    textures: Option<Res<ResolvedTextures>>,
) {
    let Some(textures) = textures else {
        warn!("Scene construction skipped: textures were never resolved");
        return;
    };
    let mut rng = rand::rng();

    spawn_backdrop(&mut commands, &mut meshes, &mut materials, &textures);
    spawn_star(
        &mut commands,
        &mut meshes,
        &mut materials,
        &mut glow_materials,
        &textures,
        &mut rng,
    );

    let ring_material = materials.add(StandardMaterial {
        base_color: Color::srgba(1.0, 1.0, 1.0, RING_OPACITY),
        alpha_mode: AlphaMode::Blend,
        unlit: true,
        double_sided: true,
        cull_mode: None,
        ..default()
    });

    let mut planet_count = 0;
    for data in planets() {
        spawn_planet(&mut commands, &mut meshes, &mut materials, data, &textures, &mut rng);
        spawn_orbit_ring(&mut commands, &mut meshes, ring_material.clone(), data);
        planet_count += 1;
    }

    info!(
        "Spawned the star, {} planets and their orbits ({} textures loaded)",
        planet_count,
        textures.loaded_count()
    );
}

fn spawn_backdrop(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    textures: &ResolvedTextures,
) {
    let texture = textures.get(GALAXY_TEXTURE);
    let material = StandardMaterial {
        // Black blends with the clear color when the texture is missing
        base_color: if texture.is_some() { Color::WHITE } else { Color::BLACK },
        base_color_texture: texture,
        unlit: true,
        cull_mode: None,
        ..default()
    };

    commands.spawn((
        Mesh3d(meshes.add(Sphere::new(BACKDROP_RADIUS).mesh().uv(64, 32))),
        MeshMaterial3d(materials.add(material)),
        Transform::default(),
        Backdrop,
        SceneEntity,
    ));
}

fn spawn_star(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    glow_materials: &mut Assets<GlowMaterial>,
    textures: &ResolvedTextures,
    rng: &mut impl rand::Rng,
) {
    let data = BodyId::Sun.data();
    let material = body_material(data.id, textures, rng);

    commands
        .spawn((
            Mesh3d(meshes.add(Sphere::new(data.radius).mesh().uv(64, 64))),
            MeshMaterial3d(materials.add(material)),
            Transform::default(),
            CelestialBody::from(data),
            Selectable {
                index: data.id.index(),
            },
            Spin::new(data.spin_rate),
            PickShape::Sphere {
                radius: data.radius,
            },
            SceneEntity,
        ))
        .with_children(|parent| {
            for &(radius, intensity, rgb) in &GLOW_SHELLS {
                let shell = GlowShell::new(radius, intensity, hex_color(rgb));
                parent.spawn((
                    Mesh3d(meshes.add(Sphere::new(radius).mesh().uv(64, 64))),
                    MeshMaterial3d(glow_materials.add(GlowMaterial::new(&shell))),
                    Transform::default(),
                    shell,
                    PickShape::Sphere { radius },
                ));
            }

            for (rgb, intensity, range) in [SUN_LIGHT, SUN_HALO_LIGHT] {
                parent.spawn((
                    PointLight {
                        color: hex_color(rgb),
                        intensity,
                        range,
                        shadows_enabled: false,
                        ..default()
                    },
                    Transform::default(),
                ));
            }
        });
}

fn spawn_planet(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    data: &BodyData,
    textures: &ResolvedTextures,
    rng: &mut impl rand::Rng,
) {
    let material = body_material(data.id, textures, rng);
    let mesh = meshes.add(Sphere::new(data.radius).mesh().uv(32, 32));

    commands
        .spawn((
            OrbitPivot::new(data.id, data.angular_speed),
            Transform::default(),
            Visibility::default(),
            SceneEntity,
        ))
        .with_children(|pivot| {
            pivot
                .spawn((
                    Mesh3d(mesh),
                    MeshMaterial3d(materials.add(material)),
                    Transform::from_xyz(data.distance, 0.0, 0.0),
                    CelestialBody::from(data),
                    Selectable {
                        index: data.id.index(),
                    },
                    Spin::new(data.spin_rate),
                    PickShape::Sphere {
                        radius: data.radius,
                    },
                ))
                .with_children(|planet| {
                    planet.spawn((
                        BodyLabel {
                            text: data.id.name(),
                        },
                        Transform::from_translation(label_offset(data.radius)),
                        PickShape::Quad {
                            half_size: LABEL_SIZE / 2.0,
                        },
                    ));
                });

            // Sits opposite the planet and turns with the pivot
            pivot.spawn((
                DirectionalLight {
                    color: Color::WHITE,
                    illuminance: PLANET_LIGHT_LUX * planet_light_factor(data.distance),
                    shadows_enabled: false,
                    ..default()
                },
                Transform::from_xyz(-data.distance, 0.0, 0.0)
                    .looking_at(Vec3::new(data.distance, 0.0, 0.0), Vec3::Y),
                PlanetLight { body: data.id },
            ));
        });
}

fn spawn_orbit_ring(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    material: Handle<StandardMaterial>,
    data: &BodyData,
) {
    let inner = data.distance;
    let outer = data.distance + RING_WIDTH;

    commands.spawn((
        Mesh3d(meshes.add(Annulus::new(inner, outer).mesh().resolution(RING_RESOLUTION))),
        MeshMaterial3d(material),
        // Annulus meshes lie in XY; lay the ring flat in the orbit plane
        Transform::from_rotation(Quat::from_rotation_x(-FRAC_PI_2)),
        OrbitRing { body: data.id },
        PickShape::Annulus { inner, outer },
        SceneEntity,
    ));
}
