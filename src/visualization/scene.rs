use bevy::math::primitives::Sphere;
use bevy::prelude::*;
use bevy::render::mesh::{Indices, PrimitiveTopology};
use bevy::render::render_asset::RenderAssetUsages;
use bevy_egui::EguiPlugin;
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::f32::consts::{FRAC_PI_3, TAU};

use crate::catalog::bodies::BodyDescriptor;
use crate::configuration::config::{StarfieldConfig, ViewerConfig};
use crate::notification::completion::{settle_notification, BlockCompletion, SettleNotifier};
use crate::simulation::kinematics;
use crate::simulation::scenario::SolarSystem;
use crate::simulation::states::NVec3;
use crate::visualization::camera::{orbit_camera, OrbitCamera};
use crate::visualization::picking::{pick_bodies, PointerState};
use crate::visualization::ui::draw_ui;

/// Component tagging each sphere with its body index into `SolarSystem::bodies`
#[derive(Component)]
pub struct BodyIndex(pub usize);

/// Decorative geometry that follows a body's position but not its spin
#[derive(Component)]
pub struct BodyAttachment(pub usize);

/// The translucent halo sphere around the sun
#[derive(Component)]
pub struct SunGlow;

// Orbit guide rings: thin translucent bands at each planet's distance
const ORBIT_GUIDE_HALF_WIDTH: f32 = 0.05;
const ORBIT_GUIDE_SEGMENTS: u32 = 64;

// Sun halo: slightly larger than the disc, pulsing a little ahead of it
const GLOW_RADIUS_FACTOR: f32 = 1.2;
const GLOW_SCALE_FACTOR: f32 = 1.1;
const GLOW_OPACITY: f32 = 0.1;

/// Build and run the viewer app.
pub fn run(config: ViewerConfig) {
    let system = SolarSystem::build((&config.controls).into());
    println!("run: starting viewer with {} bodies", system.bodies.len());

    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: config.window.title.clone(),
                resolution: (config.window.width, config.window.height).into(),
                ..default()
            }),
            ..default()
        }))
        .add_plugins(EguiPlugin)
        .insert_resource(ClearColor(Color::srgb(0.0, 0.0, 0.08)))
        .insert_resource(AmbientLight {
            color: Color::WHITE,
            brightness: 80.0,
        })
        .insert_resource(SettleNotifier::new(config.settle_delay))
        .insert_resource(PointerState::default())
        .insert_resource(system)
        .insert_resource(config)
        .add_event::<BlockCompletion>()
        .add_systems(Startup, setup_scene)
        .add_systems(
            Update,
            (
                (advance_kinematics, sync_transforms).chain(),
                orbit_camera,
                pick_bodies,
                draw_ui,
                settle_notification,
            ),
        )
        .run();
}

/// Model space is already in scene units; this is just the f64 -> f32 cast.
pub fn to_render(v: NVec3) -> Vec3 {
    Vec3::new(v.x as f32, v.y as f32, v.z as f32)
}

/// Startup system: camera, lights, starfield, and one entity group per body.
fn setup_scene(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    system: Res<SolarSystem>,
    config: Res<ViewerConfig>,
) {
    let eye = Vec3::from(config.camera.position);
    commands.spawn((
        Camera3dBundle {
            projection: PerspectiveProjection {
                fov: config.camera.fov_degrees.to_radians(),
                ..default()
            }
            .into(),
            transform: Transform::from_translation(eye).looking_at(Vec3::ZERO, Vec3::Y),
            ..default()
        },
        OrbitCamera::from_position(eye),
    ));

    // The sun is the light source; a soft directional fill keeps the dark
    // side of each planet readable.
    commands.spawn(PointLightBundle {
        point_light: PointLight {
            intensity: 2_000_000.0,
            range: 400.0,
            shadows_enabled: false,
            ..default()
        },
        transform: Transform::from_xyz(0.0, 0.0, 0.0),
        ..default()
    });
    commands.spawn(DirectionalLightBundle {
        directional_light: DirectionalLight {
            illuminance: 2_000.0,
            ..default()
        },
        transform: Transform::from_xyz(10.0, 10.0, 5.0).looking_at(Vec3::ZERO, Vec3::Y),
        ..default()
    });

    spawn_starfield(&mut commands, &mut meshes, &mut materials, &config.stars);

    for (i, body) in system.bodies.iter().enumerate() {
        let desc = body.descriptor;
        let [r, g, b] = desc.color;
        let color = Color::srgb(r, g, b);
        let position = to_render(kinematics::model_position(body));

        if desc.is_sun() {
            commands.spawn((
                PbrBundle {
                    mesh: meshes.add(
                        Sphere::new(desc.radius as f32 * GLOW_RADIUS_FACTOR)
                            .mesh()
                            .uv(32, 18),
                    ),
                    material: materials.add(StandardMaterial {
                        base_color: Color::srgba(1.0, 0.647, 0.0, GLOW_OPACITY),
                        alpha_mode: AlphaMode::Blend,
                        unlit: true,
                        ..default()
                    }),
                    ..default()
                },
                SunGlow,
            ));
            commands.spawn((
                PbrBundle {
                    mesh: meshes.add(Sphere::new(desc.radius as f32).mesh().uv(32, 18)),
                    material: materials.add(StandardMaterial {
                        base_color: color,
                        unlit: true,
                        ..default()
                    }),
                    ..default()
                },
                BodyIndex(i),
            ));
            continue;
        }

        // Orbit guide at the planet's distance
        let d = desc.distance as f32;
        commands.spawn(PbrBundle {
            mesh: meshes.add(ring_mesh(
                d - ORBIT_GUIDE_HALF_WIDTH,
                d + ORBIT_GUIDE_HALF_WIDTH,
                ORBIT_GUIDE_SEGMENTS,
            )),
            material: materials.add(translucent_ring(Color::srgba(0.2, 0.2, 0.2, 0.3))),
            ..default()
        });

        commands.spawn((
            PbrBundle {
                mesh: meshes.add(Sphere::new(desc.radius as f32).mesh().uv(32, 18)),
                material: materials.add(StandardMaterial {
                    base_color: color,
                    perceptual_roughness: 1.0,
                    ..default()
                }),
                transform: Transform::from_translation(position),
                ..default()
            },
            BodyIndex(i),
        ));

        spawn_ring_decorations(&mut commands, &mut meshes, &mut materials, i, desc);
    }
}

/// Static ring geometry for the two ringed planets. Rings follow the
/// planet's position (via `BodyAttachment`) but never its spin.
fn spawn_ring_decorations(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    index: usize,
    desc: &BodyDescriptor,
) {
    let r = desc.radius as f32;
    match desc.name {
        "Saturn" => {
            // Two concentric bands, the inner one denser
            for (inner, outer, opacity) in [(1.2, 2.0, 0.6), (2.1, 2.4, 0.4)] {
                commands.spawn((
                    PbrBundle {
                        mesh: meshes.add(ring_mesh(r * inner, r * outer, 32)),
                        material: materials
                            .add(translucent_ring(Color::srgba(0.831, 0.686, 0.216, opacity))),
                        ..default()
                    },
                    BodyAttachment(index),
                ));
            }
        }
        "Uranus" => {
            // Single faint band, tilted out of the orbital plane
            commands.spawn((
                PbrBundle {
                    mesh: meshes.add(ring_mesh(r * 1.5, r * 1.8, 32)),
                    material: materials
                        .add(translucent_ring(Color::srgba(0.31, 0.816, 0.906, 0.3))),
                    transform: Transform::from_rotation(Quat::from_rotation_z(FRAC_PI_3)),
                    ..default()
                },
                BodyAttachment(index),
            ));
        }
        _ => {}
    }
}

fn translucent_ring(color: Color) -> StandardMaterial {
    StandardMaterial {
        base_color: color,
        alpha_mode: AlphaMode::Blend,
        unlit: true,
        double_sided: true,
        cull_mode: None,
        ..default()
    }
}

/// Flat annulus in the XZ plane, centered on the origin.
fn ring_mesh(inner_radius: f32, outer_radius: f32, segments: u32) -> Mesh {
    let mut positions: Vec<[f32; 3]> = Vec::new();
    let mut normals: Vec<[f32; 3]> = Vec::new();
    let mut uvs: Vec<[f32; 2]> = Vec::new();
    let mut indices: Vec<u32> = Vec::new();

    for i in 0..=segments {
        let theta = (i as f32 / segments as f32) * TAU;
        let (sin, cos) = theta.sin_cos();
        positions.push([cos * inner_radius, 0.0, sin * inner_radius]);
        positions.push([cos * outer_radius, 0.0, sin * outer_radius]);
        normals.push([0.0, 1.0, 0.0]);
        normals.push([0.0, 1.0, 0.0]);
        let u = i as f32 / segments as f32;
        uvs.push([u, 0.0]);
        uvs.push([u, 1.0]);
    }

    for i in 0..segments {
        let a = 2 * i;
        indices.extend_from_slice(&[a, a + 2, a + 1, a + 1, a + 2, a + 3]);
    }

    Mesh::new(PrimitiveTopology::TriangleList, RenderAssetUsages::default())
        .with_inserted_attribute(Mesh::ATTRIBUTE_POSITION, positions)
        .with_inserted_attribute(Mesh::ATTRIBUTE_NORMAL, normals)
        .with_inserted_attribute(Mesh::ATTRIBUTE_UV_0, uvs)
        .with_inserted_indices(Indices::U32(indices))
}

/// Scatter small unlit spheres in a spherical shell around the scene.
/// Seeded, so the same configuration always produces the same sky.
fn spawn_starfield(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    cfg: &StarfieldConfig,
) {
    let mut rng = StdRng::seed_from_u64(cfg.seed);
    let star_mesh = meshes.add(Sphere::new(0.35).mesh().uv(6, 4));

    // A few brightness tiers, shared across all stars
    let shades: Vec<Handle<StandardMaterial>> = [0.55, 0.7, 0.85, 1.0]
        .iter()
        .map(|v| {
            materials.add(StandardMaterial {
                base_color: Color::srgb(*v, *v, *v),
                unlit: true,
                ..default()
            })
        })
        .collect();

    for _ in 0..cfg.count {
        // Uniform direction on the unit sphere, uniform radius in the shell
        let z: f32 = rng.gen_range(-1.0..1.0);
        let phi: f32 = rng.gen_range(0.0..TAU);
        let radius: f32 = rng.gen_range(cfg.inner_radius..cfg.outer_radius);
        let flat = (1.0 - z * z).sqrt();
        let dir = Vec3::new(flat * phi.cos(), z, flat * phi.sin());

        commands.spawn(PbrBundle {
            mesh: star_mesh.clone(),
            material: shades[rng.gen_range(0..shades.len())].clone(),
            transform: Transform::from_translation(dir * radius),
            ..default()
        });
    }
}

/// Per-frame kinematics pass: advance every body's clock.
fn advance_kinematics(time: Res<Time>, mut system: ResMut<SolarSystem>) {
    kinematics::advance_all(&mut system, time.delta_seconds() as f64);
}

/// Mirror model state into entity transforms. Runs after the kinematics
/// pass, so every body is already advanced for the frame being presented.
fn sync_transforms(
    system: Res<SolarSystem>,
    mut bodies: Query<(&BodyIndex, &mut Transform), (Without<BodyAttachment>, Without<SunGlow>)>,
    mut attachments: Query<
        (&BodyAttachment, &mut Transform),
        (Without<BodyIndex>, Without<SunGlow>),
    >,
    mut glow: Query<&mut Transform, (With<SunGlow>, Without<BodyIndex>, Without<BodyAttachment>)>,
) {
    for (BodyIndex(i), mut transform) in &mut bodies {
        if let Some(body) = system.bodies.get(*i) {
            transform.translation = to_render(kinematics::model_position(body));
            transform.rotation = Quat::from_rotation_y(kinematics::rotation_angle(body) as f32);
            if body.descriptor.is_sun() {
                transform.scale = Vec3::splat(kinematics::pulse_scale(body) as f32);
            }
        }
    }

    for (BodyAttachment(i), mut transform) in &mut attachments {
        if let Some(body) = system.bodies.get(*i) {
            transform.translation = to_render(kinematics::model_position(body));
        }
    }

    let glow_scale = kinematics::pulse_scale(system.sun()) as f32 * GLOW_SCALE_FACTOR;
    for mut transform in &mut glow {
        transform.scale = Vec3::splat(glow_scale);
    }
}
