use bevy::input::mouse::{MouseMotion, MouseWheel};
use bevy::prelude::*;
use std::f32::consts::PI;

pub const MIN_RADIUS: f32 = 10.0;
pub const MAX_RADIUS: f32 = 200.0;

const DRAG_SENSITIVITY: f32 = 0.005;
const ZOOM_SENSITIVITY: f32 = 0.1;
const KEY_NUDGE: f32 = 0.02;

#[derive(Component)]
pub struct OrbitCamera {
    pub focus: Vec3,
    pub radius: f32,
    pub azimuth: f32,
    pub elevation: f32,
}

impl OrbitCamera {
    /// Recover rig parameters from an initial eye position looking at the
    /// origin.
    pub fn from_position(eye: Vec3) -> Self {
        let distance = eye.length().max(f32::EPSILON);
        Self {
            focus: Vec3::ZERO,
            radius: distance.clamp(MIN_RADIUS, MAX_RADIUS),
            azimuth: eye.x.atan2(eye.z),
            elevation: (eye.y / distance).asin(),
        }
    }
}

pub fn orbit_camera(
    mut query: Query<(&mut Transform, &mut OrbitCamera)>,
    mouse_button: Res<ButtonInput<MouseButton>>,
    mut mouse_motion: EventReader<MouseMotion>,
    mut scroll: EventReader<MouseWheel>,
    keys: Res<ButtonInput<KeyCode>>,
) {
    let Ok((mut transform, mut orbit)) = query.get_single_mut() else {
        return;
    };

    if mouse_button.pressed(MouseButton::Left) {
        for ev in mouse_motion.read() {
            orbit.azimuth -= ev.delta.x * DRAG_SENSITIVITY;
            orbit.elevation = (orbit.elevation - ev.delta.y * DRAG_SENSITIVITY)
                .clamp(-PI / 2.0 + 0.05, PI / 2.0 - 0.05);
        }
    } else {
        mouse_motion.clear();
    }

    for ev in scroll.read() {
        orbit.radius = (orbit.radius * (1.0 - ev.y * ZOOM_SENSITIVITY)).clamp(MIN_RADIUS, MAX_RADIUS);
    }

    if keys.pressed(KeyCode::ArrowLeft) {
        orbit.azimuth += KEY_NUDGE;
    }
    if keys.pressed(KeyCode::ArrowRight) {
        orbit.azimuth -= KEY_NUDGE;
    }
    if keys.pressed(KeyCode::ArrowUp) {
        orbit.elevation = (orbit.elevation + KEY_NUDGE).min(PI / 2.0 - 0.05);
    }
    if keys.pressed(KeyCode::ArrowDown) {
        orbit.elevation = (orbit.elevation - KEY_NUDGE).max(-PI / 2.0 + 0.05);
    }

    let pos = Vec3::new(
        orbit.radius * orbit.elevation.cos() * orbit.azimuth.sin(),
        orbit.radius * orbit.elevation.sin(),
        orbit.radius * orbit.elevation.cos() * orbit.azimuth.cos(),
    ) + orbit.focus;

    *transform = Transform::from_translation(pos).looking_at(orbit.focus, Vec3::Y);
}
