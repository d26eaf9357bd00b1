//! View-dependent glow shells around the star.
//!
//! Each shell is a slightly larger sphere drawn with additive blending. The
//! fragment shader brightens the rim, where the surface normal is
//! perpendicular to the view vector, so the shells read as a halo. The view
//! vector lives on a CPU-side [`GlowShell`] component that the tick loop
//! updates; [`sync_glow_materials`] copies it into the material uniform.

use bevy::prelude::*;
use bevy::render::render_resource::{AsBindGroup, ShaderType};
use bevy::shader::ShaderRef;

/// Fragment shader asset.
const GLOW_SHADER_PATH: &str = "shaders/glow.wgsl";

/// (radius, intensity, sRGB color) of each shell, innermost first.
pub const GLOW_SHELLS: [(f32, f32, u32); 3] = [
    (47.0, 0.5, 0xffdd99),
    (50.0, 0.3, 0xff9933),
    (55.0, 0.1, 0xff5500),
];

/// Convert a packed 0xRRGGBB color.
pub fn hex_color(rgb: u32) -> Color {
    Color::srgb_u8((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8)
}

/// Uniform block read by the glow shader.
#[derive(ShaderType, Clone, Copy, Debug)]
pub struct GlowUniform {
    pub view_vector: Vec3,
    pub intensity: f32,
    pub color: LinearRgba,
}

/// Additive rim-glow material.
#[derive(Asset, TypePath, AsBindGroup, Clone, Debug)]
pub struct GlowMaterial {
    #[uniform(0)]
    pub params: GlowUniform,
}

impl GlowMaterial {
    pub fn new(shell: &GlowShell) -> Self {
        Self {
            params: GlowUniform {
                view_vector: shell.view_vector,
                intensity: shell.intensity,
                color: shell.color,
            },
        }
    }
}

impl Material for GlowMaterial {
    fn fragment_shader() -> ShaderRef {
        GLOW_SHADER_PATH.into()
    }

    fn alpha_mode(&self) -> AlphaMode {
        AlphaMode::Add
    }
}

/// Per-shell glow parameters; the view vector is refreshed every tick.
#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct GlowShell {
    pub radius: f32,
    pub intensity: f32,
    pub color: LinearRgba,
    /// From the shell's center towards the camera, world space.
    pub view_vector: Vec3,
}

impl GlowShell {
    pub fn new(radius: f32, intensity: f32, color: Color) -> Self {
        Self {
            radius,
            intensity,
            color: color.to_linear(),
            view_vector: Vec3::Z,
        }
    }
}

/// Copy changed shell parameters into their materials.
pub fn sync_glow_materials(
    shells: Query<(&GlowShell, &MeshMaterial3d<GlowMaterial>), Changed<GlowShell>>,
    mut materials: ResMut<Assets<GlowMaterial>>,
) {
    for (shell, handle) in &shells {
        if let Some(mut material) = materials.get_mut(&handle.0) {
            material.params.view_vector = shell.view_vector;
            material.params.intensity = shell.intensity;
            material.params.color = shell.color;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shells_grow_outward_and_fade() {
        for pair in GLOW_SHELLS.windows(2) {
            assert!(pair[0].0 < pair[1].0);
            assert!(pair[0].1 > pair[1].1);
        }
        // Innermost shell still clears the star's surface
        assert!(GLOW_SHELLS[0].0 > crate::catalog::BodyId::Sun.data().radius);
    }

    #[test]
    fn test_hex_color_unpacks_channels() {
        let color = hex_color(0xff5500).to_srgba();
        assert_eq!(color.red, 1.0);
        assert!((color.green - 0x55 as f32 / 255.0).abs() < 1e-6);
        assert_eq!(color.blue, 0.0);
    }

    #[test]
    fn test_material_mirrors_shell() {
        let mut shell = GlowShell::new(50.0, 0.3, hex_color(0xff9933));
        shell.view_vector = Vec3::new(0.0, 10.0, 100.0);
        let material = GlowMaterial::new(&shell);
        assert_eq!(material.params.view_vector, shell.view_vector);
        assert_eq!(material.params.intensity, 0.3);
    }
}
