use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use crate::catalog::bodies::{BodyDescriptor, SUN_AGE, SUN_COMPOSITION};
use crate::configuration::config::ViewerConfig;
use crate::notification::completion::SettleNotifier;
use crate::simulation::kinematics;
use crate::simulation::scenario::SolarSystem;
use crate::simulation::states::{SPEED_MAX, SPEED_MIN, SPEED_STEP};
use crate::visualization::scene::to_render;

/// Catalog distances are display-scaled to "million km" in the panel only.
const DISPLAY_DISTANCE_SCALE: f64 = 15.0;

// Label anchor above the mesh, scene units
const PLANET_LABEL_LIFT: f32 = 1.0;
const SUN_LABEL_LIFT: f32 = 2.0;

pub fn draw_ui(
    mut contexts: EguiContexts,
    mut system: ResMut<SolarSystem>,
    notifier: Res<SettleNotifier>,
    config: Res<ViewerConfig>,
    cameras: Query<(&Camera, &GlobalTransform)>,
) {
    let ctx = contexts.ctx_mut();

    header(ctx, &config);
    controls_window(ctx, &mut system);
    instructions_window(ctx);
    detail_panel(ctx, &mut system);
    if system.controls.show_labels {
        body_labels(ctx, &system, &cameras);
    }
    if !notifier.has_fired() {
        loading_overlay(ctx);
    }
}

fn header(ctx: &mut egui::Context, config: &ViewerConfig) {
    egui::Area::new(egui::Id::new("header"))
        .fixed_pos(egui::pos2(20.0, 20.0))
        .show(ctx, |ui| {
            ui.heading(
                egui::RichText::new(&config.window.title)
                    .size(28.0)
                    .strong()
                    .color(egui::Color32::WHITE),
            );
            ui.label(
                egui::RichText::new("Click on planets and the sun to learn more • Use mouse to navigate")
                    .color(egui::Color32::from_white_alpha(200)),
            );
        });
}

fn controls_window(ctx: &mut egui::Context, system: &mut SolarSystem) {
    egui::Window::new("controls")
        .title_bar(false)
        .resizable(false)
        .anchor(egui::Align2::LEFT_BOTTOM, egui::vec2(20.0, -20.0))
        .show(ctx, |ui| {
            let controls = &mut system.controls;
            ui.checkbox(&mut controls.show_labels, "Show Labels");
            ui.label(format!(
                "Animation Speed: {:.1}x",
                controls.speed_multiplier
            ));
            ui.add(
                egui::Slider::new(&mut controls.speed_multiplier, SPEED_MIN..=SPEED_MAX)
                    .step_by(SPEED_STEP)
                    .show_value(false),
            );
        });
}

fn instructions_window(ctx: &mut egui::Context) {
    egui::Window::new("instructions")
        .title_bar(false)
        .resizable(false)
        .anchor(egui::Align2::RIGHT_BOTTOM, egui::vec2(-20.0, -20.0))
        .show(ctx, |ui| {
            ui.strong("Controls:");
            ui.label("• Left click + drag: Rotate view");
            ui.label("• Scroll: Zoom in/out");
            ui.label("• Arrow keys: Nudge view");
            ui.label("• Click planets/sun: View info");
        });
}

fn detail_panel(ctx: &mut egui::Context, system: &mut SolarSystem) {
    let desc = match system.selected() {
        Some(body) => body.descriptor,
        None => return,
    };
    let [r, g, b] = desc.color;
    let tint = egui::Color32::from_rgb(
        (r * 255.0) as u8,
        (g * 255.0) as u8,
        (b * 255.0) as u8,
    );

    egui::Window::new("detail")
        .title_bar(false)
        .resizable(false)
        .fixed_size(egui::vec2(300.0, 0.0))
        .anchor(egui::Align2::RIGHT_TOP, egui::vec2(-20.0, 20.0))
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading(egui::RichText::new(desc.name).color(tint).size(22.0));
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("×").clicked() {
                        system.selection.close();
                    }
                });
            });
            ui.label(desc.description);
            ui.add_space(8.0);
            ui.strong("Key Facts");
            for fact in desc.facts {
                ui.label(format!("• {fact}"));
            }
            ui.add_space(8.0);
            fact_grid(ui, desc);
        });
}

fn fact_grid(ui: &mut egui::Ui, desc: &BodyDescriptor) {
    if desc.is_sun() {
        egui::Grid::new("sun_facts").num_columns(2).show(ui, |ui| {
            ui.strong("Mass:");
            ui.label(desc.mass);
            ui.end_row();
            ui.strong("Surface Temperature:");
            ui.label(desc.temperature);
            ui.end_row();
            ui.strong("Composition:");
            ui.label(SUN_COMPOSITION);
            ui.end_row();
            ui.strong("Age:");
            ui.label(SUN_AGE);
            ui.end_row();
        });
        return;
    }

    egui::Grid::new("planet_facts").num_columns(2).show(ui, |ui| {
        ui.strong("Distance from Sun:");
        ui.label(format!(
            "{:.0} million km",
            desc.distance * DISPLAY_DISTANCE_SCALE
        ));
        ui.end_row();
        ui.strong("Orbital Period:");
        ui.label(format!("{} days", desc.orbital_period));
        ui.end_row();
        ui.strong("Rotation Period:");
        ui.label(format!("{} days", desc.rotation_period));
        ui.end_row();
        ui.strong("Moons:");
        ui.label(desc.moons.to_string());
        ui.end_row();
        ui.strong("Mass:");
        ui.label(desc.mass);
        ui.end_row();
        ui.strong("Temperature:");
        ui.label(desc.temperature);
        ui.end_row();
    });
}

/// Screen-space name labels, projected from each body's world position.
fn body_labels(
    ctx: &mut egui::Context,
    system: &SolarSystem,
    cameras: &Query<(&Camera, &GlobalTransform)>,
) {
    let Ok((camera, camera_transform)) = cameras.get_single() else {
        return;
    };
    let painter = ctx.layer_painter(egui::LayerId::background());

    for body in &system.bodies {
        let desc = body.descriptor;
        let lift = desc.radius as f32
            + if desc.is_sun() {
                SUN_LABEL_LIFT
            } else {
                PLANET_LABEL_LIFT
            };
        let world = to_render(kinematics::model_position(body)) + Vec3::Y * lift;
        let Some(screen) = camera.world_to_viewport(camera_transform, world) else {
            continue;
        };
        let size = if desc.is_sun() { 18.0 } else { 14.0 };
        painter.text(
            egui::pos2(screen.x, screen.y),
            egui::Align2::CENTER_CENTER,
            desc.name,
            egui::FontId::proportional(size),
            egui::Color32::WHITE,
        );
    }
}

fn loading_overlay(ctx: &mut egui::Context) {
    egui::Area::new(egui::Id::new("loading"))
        .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
        .show(ctx, |ui| {
            ui.label(
                egui::RichText::new("Loading Solar System...")
                    .size(20.0)
                    .color(egui::Color32::WHITE),
            );
        });
}
