//! Camera system for the solar-system scene.
//!
//! A perspective camera driven by damped orbit controls: left drag orbits
//! around the focus point, right drag pans it, and the scroll wheel zooms.

use bevy::{
    input::mouse::{AccumulatedMouseMotion, AccumulatedMouseScroll},
    prelude::*,
};
use bevy_egui::EguiContexts;

/// Vertical field of view (75 degrees).
pub const CAMERA_FOV: f32 = 75.0 * std::f32::consts::PI / 180.0;

/// Near clipping distance.
pub const CAMERA_NEAR: f32 = 0.1;

/// Far clipping distance; must enclose the backdrop sphere.
pub const CAMERA_FAR: f32 = 5000.0;

/// Starting eye position, looking at the origin.
pub const CAMERA_START: Vec3 = Vec3::new(0.0, 0.0, 100.0);

/// Closest allowed distance to the focus point.
pub const MIN_DISTANCE: f32 = 10.0;

/// Furthest allowed distance to the focus point.
pub const MAX_DISTANCE: f32 = 1500.0;

/// Pitch limit, just short of the poles.
const MAX_PITCH: f32 = 1.55;

/// Marker component for the main camera.
#[derive(Component)]
pub struct MainCamera;

/// Tuning for the orbit controls.
#[derive(Resource)]
pub struct OrbitControlSettings {
    /// Fraction of the pending motion applied each frame.
    pub damping: f32,
    /// Radians of orbit per pixel dragged.
    pub rotate_speed: f32,
    /// Pan distance per pixel, relative to the orbit distance.
    pub pan_speed: f32,
    /// Zoom factor per scroll line.
    pub zoom_speed: f32,
}

impl Default for OrbitControlSettings {
    fn default() -> Self {
        Self {
            damping: 0.05,
            rotate_speed: 0.005,
            pan_speed: 0.0015,
            zoom_speed: 0.1,
        }
    }
}

/// Damped orbit state of the main camera.
#[derive(Component, Clone, Debug)]
pub struct OrbitController {
    pub focus: Vec3,
    pub distance: f32,
    pub yaw: f32,
    pub pitch: f32,
    /// Motion requested by input but not yet applied.
    pub pending_yaw: f32,
    pub pending_pitch: f32,
    pub pending_pan: Vec3,
    pub pending_zoom: f32,
}

impl Default for OrbitController {
    fn default() -> Self {
        Self {
            focus: Vec3::ZERO,
            distance: CAMERA_START.length(),
            yaw: 0.0,
            pitch: 0.0,
            pending_yaw: 0.0,
            pending_pitch: 0.0,
            pending_pan: Vec3::ZERO,
            pending_zoom: 0.0,
        }
    }
}

impl OrbitController {
    /// Apply a damped share of the pending motion.
    pub fn step(&mut self, damping: f32) {
        self.yaw += self.pending_yaw * damping;
        self.pitch = (self.pitch + self.pending_pitch * damping).clamp(-MAX_PITCH, MAX_PITCH);
        self.focus += self.pending_pan * damping;
        self.distance =
            (self.distance * (1.0 + self.pending_zoom * damping)).clamp(MIN_DISTANCE, MAX_DISTANCE);

        let decay = 1.0 - damping;
        self.pending_yaw *= decay;
        self.pending_pitch *= decay;
        self.pending_pan *= decay;
        self.pending_zoom *= decay;
    }

    /// Eye position on the sphere around the focus.
    pub fn eye(&self) -> Vec3 {
        let dir = Vec3::new(
            self.yaw.sin() * self.pitch.cos(),
            self.pitch.sin(),
            self.yaw.cos() * self.pitch.cos(),
        );
        self.focus + dir * self.distance
    }

    pub fn transform(&self) -> Transform {
        Transform::from_translation(self.eye()).looking_at(self.focus, Vec3::Y)
    }
}

/// Plugin providing camera functionality.
pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<OrbitControlSettings>()
            .add_systems(Startup, setup_camera)
            .add_systems(
                Update,
                (orbit_camera_input, apply_orbit_controller).chain(),
            );
    }
}

/// Spawn the main camera with a perspective projection.
///
/// The aspect ratio is left to Bevy, which refits it whenever the window
/// resizes.
fn setup_camera(mut commands: Commands) {
    let controller = OrbitController::default();
    commands.spawn((
        Camera3d::default(),
        Projection::Perspective(PerspectiveProjection {
            fov: CAMERA_FOV,
            near: CAMERA_NEAR,
            far: CAMERA_FAR,
            ..default()
        }),
        controller.transform(),
        AmbientLight {
            color: Color::srgb_u8(0x33, 0x33, 0x33),
            brightness: 400.0,
            ..default()
        },
        controller,
        MainCamera,
    ));
}

/// Turn mouse drags and scrolling into pending orbit motion.
fn orbit_camera_input(
    mouse_buttons: Res<ButtonInput<MouseButton>>,
    mouse_motion: Res<AccumulatedMouseMotion>,
    mouse_scroll: Res<AccumulatedMouseScroll>,
    settings: Res<OrbitControlSettings>,
    mut camera_query: Query<&mut OrbitController, With<MainCamera>>,
    mut contexts: EguiContexts,
) {
    // Leave the pointer to egui when it is over a panel
    if let Ok(ctx) = contexts.ctx_mut()
        && ctx.is_pointer_over_area()
    {
        return;
    }

    let Ok(mut controller) = camera_query.single_mut() else {
        return;
    };

    let delta = mouse_motion.delta;
    if mouse_buttons.pressed(MouseButton::Left) && delta != Vec2::ZERO {
        controller.pending_yaw -= delta.x * settings.rotate_speed;
        controller.pending_pitch += delta.y * settings.rotate_speed;
    }

    if mouse_buttons.pressed(MouseButton::Right) && delta != Vec2::ZERO {
        // Pan in the camera's screen plane
        let rotation = controller.transform().rotation;
        let scale = controller.distance * settings.pan_speed;
        let right = rotation * Vec3::X;
        let up = rotation * Vec3::Y;
        controller.pending_pan += (-right * delta.x + up * delta.y) * scale;
    }

    if mouse_scroll.delta.y != 0.0 {
        controller.pending_zoom -= mouse_scroll.delta.y * settings.zoom_speed;
    }
}

/// Advance the damped controller and place the camera.
fn apply_orbit_controller(
    settings: Res<OrbitControlSettings>,
    mut camera_query: Query<(&mut OrbitController, &mut Transform), With<MainCamera>>,
) {
    let Ok((mut controller, mut transform)) = camera_query.single_mut() else {
        return;
    };
    controller.step(settings.damping);
    *transform = controller.transform();
}

/// Put the camera back at its starting view.
pub fn reset_camera(mut camera_query: Query<(&mut OrbitController, &mut Transform), With<MainCamera>>) {
    let Ok((mut controller, mut transform)) = camera_query.single_mut() else {
        return;
    };
    *controller = OrbitController::default();
    *transform = controller.transform();
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_default_eye_matches_start() {
        let controller = OrbitController::default();
        let eye = controller.eye();
        assert_relative_eq!(eye.x, CAMERA_START.x, epsilon = 1e-4);
        assert_relative_eq!(eye.y, CAMERA_START.y, epsilon = 1e-4);
        assert_relative_eq!(eye.z, CAMERA_START.z, epsilon = 1e-4);
    }

    #[test]
    fn test_damping_converges_to_requested_motion() {
        let mut controller = OrbitController {
            pending_yaw: 1.0,
            ..default()
        };
        for _ in 0..500 {
            controller.step(0.05);
        }
        assert_relative_eq!(controller.yaw, 1.0, epsilon = 1e-3);
        assert!(controller.pending_yaw.abs() < 1e-3);
    }

    #[test]
    fn test_single_step_applies_damped_share() {
        let mut controller = OrbitController {
            pending_yaw: 1.0,
            ..default()
        };
        controller.step(0.05);
        assert_relative_eq!(controller.yaw, 0.05, epsilon = 1e-6);
        assert_relative_eq!(controller.pending_yaw, 0.95, epsilon = 1e-6);
    }

    #[test]
    fn test_zoom_is_clamped() {
        let mut controller = OrbitController {
            pending_zoom: -100.0,
            ..default()
        };
        for _ in 0..100 {
            controller.step(0.05);
        }
        assert!(controller.distance >= MIN_DISTANCE);

        controller.pending_zoom = 1000.0;
        for _ in 0..100 {
            controller.step(0.05);
        }
        assert!(controller.distance <= MAX_DISTANCE);
    }

    #[test]
    fn test_pitch_stays_off_the_poles() {
        let mut controller = OrbitController {
            pending_pitch: 100.0,
            ..default()
        };
        controller.step(1.0);
        assert!(controller.pitch <= MAX_PITCH);
    }
}
