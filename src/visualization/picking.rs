use bevy::input::mouse::MouseMotion;
use bevy::prelude::*;
use bevy::window::{CursorIcon, PrimaryWindow};
use bevy_egui::EguiContexts;

use crate::simulation::kinematics;
use crate::simulation::scenario::SolarSystem;
use crate::visualization::scene::to_render;

/// Press-to-release travel below this many pixels counts as a click.
const CLICK_DRAG_TOLERANCE: f32 = 4.0;

#[derive(Resource, Default)]
pub struct PointerState {
    pub hovered: Option<usize>,
    drag_travel: f32,
}

pub fn pick_bodies(
    mut windows: Query<&mut Window, With<PrimaryWindow>>,
    cameras: Query<(&Camera, &GlobalTransform)>,
    mut system: ResMut<SolarSystem>,
    mut pointer: ResMut<PointerState>,
    buttons: Res<ButtonInput<MouseButton>>,
    mut motion: EventReader<MouseMotion>,
    mut egui: EguiContexts,
) {
    let Ok(mut window) = windows.get_single_mut() else {
        return;
    };
    let Ok((camera, camera_transform)) = cameras.get_single() else {
        return;
    };

    if buttons.just_pressed(MouseButton::Left) {
        pointer.drag_travel = 0.0;
    }
    if buttons.pressed(MouseButton::Left) {
        for ev in motion.read() {
            pointer.drag_travel += ev.delta.length();
        }
    } else {
        motion.clear();
    }

    pointer.hovered = window
        .cursor_position()
        .and_then(|cursor| camera.viewport_to_world(camera_transform, cursor))
        .and_then(|ray| nearest_hit(&ray, &system));

    window.cursor.icon = if pointer.hovered.is_some() {
        CursorIcon::Pointer
    } else {
        CursorIcon::Default
    };

    let over_ui = egui.ctx_mut().wants_pointer_input();
    if buttons.just_released(MouseButton::Left)
        && pointer.drag_travel < CLICK_DRAG_TOLERANCE
        && !over_ui
    {
        if let Some(index) = pointer.hovered {
            info!("selected {}", system.bodies[index].descriptor.name);
            system.click(index);
        }
    }
}

/// Index of the closest body whose sphere the ray hits, if any. The sun's
/// hit radius includes the current pulse scale.
fn nearest_hit(ray: &Ray3d, system: &SolarSystem) -> Option<usize> {
    let mut best: Option<(usize, f32)> = None;
    for (i, body) in system.bodies.iter().enumerate() {
        let center = to_render(kinematics::model_position(body));
        let radius = (body.descriptor.radius * kinematics::pulse_scale(body)) as f32;
        if let Some(t) = ray_sphere(ray, center, radius) {
            if best.map_or(true, |(_, t_best)| t < t_best) {
                best = Some((i, t));
            }
        }
    }
    best.map(|(i, _)| i)
}

/// Distance along the ray to the first sphere intersection, if any.
fn ray_sphere(ray: &Ray3d, center: Vec3, radius: f32) -> Option<f32> {
    let oc = ray.origin - center;
    let dir = *ray.direction;
    let b = oc.dot(dir);
    let c = oc.length_squared() - radius * radius;
    let disc = b * b - c;
    if disc < 0.0 {
        return None;
    }
    let t = -b - disc.sqrt();
    (t > 0.0).then_some(t)
}
