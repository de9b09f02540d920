use solvis::catalog::bodies::{BodyClass, PLANETS, SUN};
use solvis::configuration::config::ViewerConfig;
use solvis::notification::completion::{CompletionPayload, SettleNotifier};
use solvis::simulation::kinematics;
use solvis::simulation::selection::Selection;
use solvis::simulation::scenario::SolarSystem;
use solvis::simulation::states::{BodyState, Controls, ORBIT_ANGLE_SCALE};

use std::time::Duration;

/// Build a default system (sun at index 0, planets in catalog order)
fn test_system() -> SolarSystem {
    SolarSystem::build(Controls::default())
}

/// Build a system with a fixed speed multiplier
fn system_at_speed(speed: f64) -> SolarSystem {
    SolarSystem::build(Controls {
        show_labels: true,
        speed_multiplier: speed,
    })
}

/// Index of a planet by name, panicking if absent
fn planet_index(system: &SolarSystem, name: &str) -> usize {
    system
        .bodies
        .iter()
        .position(|b| b.descriptor.name == name)
        .expect("planet in catalog")
}

// ==================================================================================
// Catalog tests
// ==================================================================================

#[test]
fn catalog_has_one_sun_and_eight_planets() {
    let system = test_system();

    let suns = system
        .bodies
        .iter()
        .filter(|b| b.descriptor.class == BodyClass::Sun)
        .count();
    let planets = system
        .bodies
        .iter()
        .filter(|b| b.descriptor.class == BodyClass::Planet)
        .count();

    assert_eq!(suns, 1, "Expected exactly one sun");
    assert_eq!(planets, 8, "Expected eight planets");
    assert!(system.sun().descriptor.is_sun(), "Index 0 must be the sun");
}

#[test]
fn catalog_planets_have_positive_geometry_and_timing() {
    for p in PLANETS.iter() {
        assert!(p.distance > 0.0, "{} has no orbital distance", p.name);
        assert!(p.orbital_period > 0.0, "{} has no orbital period", p.name);
        assert!(p.rotation_period > 0.0, "{} has no rotation period", p.name);
        assert!(p.radius > 0.0, "{} has no radius", p.name);
        assert!(!p.facts.is_empty(), "{} has no facts", p.name);
    }
    assert_eq!(SUN.distance, 0.0, "The sun does not orbit");
}

#[test]
fn catalog_names_are_unique() {
    let system = test_system();
    for (i, a) in system.bodies.iter().enumerate() {
        for b in system.bodies.iter().skip(i + 1) {
            assert_ne!(a.descriptor.name, b.descriptor.name);
        }
    }
}

// ==================================================================================
// Kinematics tests
// ==================================================================================

#[test]
fn accumulated_time_is_non_decreasing() {
    let mut system = test_system();

    let deltas = [0.016, 0.0, 0.033, 0.001, 0.0, 0.25];
    let mut previous: Vec<f64> = system
        .bodies
        .iter()
        .map(|b| b.kinematics.accumulated_time)
        .collect();

    for dt in deltas {
        kinematics::advance_all(&mut system, dt);
        for (body, prev) in system.bodies.iter().zip(previous.iter()) {
            assert!(
                body.kinematics.accumulated_time >= *prev,
                "{} clock went backwards",
                body.descriptor.name
            );
        }
        previous = system
            .bodies
            .iter()
            .map(|b| b.kinematics.accumulated_time)
            .collect();
    }
}

#[test]
fn zero_speed_freezes_every_body() {
    let mut system = system_at_speed(0.0);

    // Warm the clocks first so freezing is observable from a non-zero state
    system.controls.speed_multiplier = 1.0;
    kinematics::advance_all(&mut system, 0.5);
    system.controls.speed_multiplier = 0.0;

    let angles: Vec<(f64, f64)> = system
        .bodies
        .iter()
        .map(|b| (kinematics::orbital_angle(b), kinematics::rotation_angle(b)))
        .collect();

    for _ in 0..100 {
        kinematics::advance_all(&mut system, 0.016);
    }

    for (body, (orbital, rotation)) in system.bodies.iter().zip(angles.iter()) {
        assert_eq!(
            kinematics::orbital_angle(body),
            *orbital,
            "{} orbited at speed zero",
            body.descriptor.name
        );
        assert_eq!(
            kinematics::rotation_angle(body),
            *rotation,
            "{} rotated at speed zero",
            body.descriptor.name
        );
    }
}

#[test]
fn speed_change_never_jumps_angles() {
    let mut system = system_at_speed(1.0);
    let dt = 0.016;

    for _ in 0..60 {
        kinematics::advance_all(&mut system, dt);
    }

    let earth = planet_index(&system, "Earth");
    let before = kinematics::orbital_angle(&system.bodies[earth]);

    // Jump the slider to maximum: the angle must continue from where it
    // was, growing by one frame's worth, not rescale retroactively
    system.controls.speed_multiplier = 5.0;
    kinematics::advance_all(&mut system, dt);
    let after = kinematics::orbital_angle(&system.bodies[earth]);

    let desc = system.bodies[earth].descriptor;
    let expected_step = dt * 5.0 * 10.0 / desc.orbital_period * ORBIT_ANGLE_SCALE;

    assert!(after > before, "Angle must keep growing");
    assert!(
        (after - before - expected_step).abs() < 1e-12,
        "Angle stepped by {} instead of {}",
        after - before,
        expected_step
    );
}

#[test]
fn planet_and_sun_use_their_own_time_gains() {
    let mut system = system_at_speed(1.0);
    kinematics::advance_all(&mut system, 1.0);

    // One second at speed 1: the sun accumulates 1, planets accumulate 10
    assert_eq!(system.sun().kinematics.accumulated_time, 1.0);
    for body in system.bodies.iter().skip(1) {
        assert_eq!(
            body.kinematics.accumulated_time, 10.0,
            "{} missed the planet gain",
            body.descriptor.name
        );
    }
}

#[test]
fn orbital_angle_scale_constant() {
    // At accumulated = period / 5, (t / period) * 5 = 1 exactly
    let mut body = BodyState::at_rest(&PLANETS[2]); // Earth
    body.kinematics.accumulated_time = body.descriptor.orbital_period / 5.0;

    assert!(
        (kinematics::orbital_angle(&body) - 1.0).abs() < 1e-12,
        "Orbital scale constant is off: {}",
        kinematics::orbital_angle(&body)
    );
}

#[test]
fn sun_spin_and_pulse_formulas() {
    let mut sun = BodyState::at_rest(&SUN);
    sun.kinematics.accumulated_time = 3.0;

    assert_eq!(kinematics::rotation_angle(&sun), 1.5); // t * 0.5
    let expected_pulse = 1.0 + 0.05 * (3.0f64 * 2.0).sin();
    assert!((kinematics::pulse_scale(&sun) - expected_pulse).abs() < 1e-12);
    assert_eq!(kinematics::orbital_angle(&sun), 0.0, "The sun must not orbit");
}

#[test]
fn planet_position_stays_on_its_orbit_circle() {
    let mut system = system_at_speed(1.3);

    for _ in 0..50 {
        kinematics::advance_all(&mut system, 0.02);
    }

    for body in system.bodies.iter().skip(1) {
        let pos = kinematics::model_position(body);
        let d = body.descriptor.distance;
        assert!(
            (pos.norm() - d).abs() < 1e-9,
            "{} drifted off its orbit: |pos| = {}, d = {}",
            body.descriptor.name,
            pos.norm(),
            d
        );
        assert_eq!(pos.y, 0.0, "Orbits are planar");

        let theta = kinematics::orbital_angle(body);
        assert!(
            (pos.x - d * theta.cos()).abs() < 1e-9,
            "{} is off-angle",
            body.descriptor.name
        );
    }
}

// ==================================================================================
// Selection tests
// ==================================================================================

#[test]
fn clicking_a_planet_clears_the_sun_and_vice_versa() {
    let mut system = test_system();
    let earth = planet_index(&system, "Earth");

    system.click(0); // sun
    assert_eq!(system.selection, Selection::Sun);

    system.click(earth);
    assert_eq!(system.selection, Selection::Planet(earth));

    system.click(0);
    assert_eq!(
        system.selection,
        Selection::Sun,
        "Sun selection must replace the planet"
    );
}

#[test]
fn close_reaches_idle_from_every_state() {
    let mut system = test_system();
    let mars = planet_index(&system, "Mars");

    system.selection.close();
    assert!(system.selection.is_idle(), "close from Idle stays Idle");

    system.click(mars);
    system.selection.close();
    assert!(system.selection.is_idle(), "close from planet");

    system.click(0);
    system.selection.close();
    assert!(system.selection.is_idle(), "close from sun");
}

#[test]
fn earth_then_sun_then_close_shows_nothing() {
    let mut system = test_system();
    let earth = planet_index(&system, "Earth");

    system.click(earth);
    system.click(0);
    system.selection.close();

    assert_eq!(system.selection, Selection::Idle);
    assert!(
        system.selected().is_none(),
        "The detail panel must render nothing when idle"
    );
}

#[test]
fn selected_returns_the_clicked_body() {
    let mut system = test_system();
    let jupiter = planet_index(&system, "Jupiter");

    system.click(jupiter);
    assert_eq!(system.selected().unwrap().descriptor.name, "Jupiter");

    system.click(0);
    assert_eq!(system.selected().unwrap().descriptor.name, "Sun");
}

// ==================================================================================
// Notification tests
// ==================================================================================

#[test]
fn completion_payload_matches_the_host_schema() {
    let payload = serde_json::to_value(CompletionPayload::loaded()).unwrap();
    let expected = serde_json::json!({
        "type": "BLOCK_COMPLETION",
        "blockId": "solar-system-3d",
        "completed": true,
        "data": { "interactionType": "loaded" }
    });
    assert_eq!(payload, expected);
}

#[test]
fn settle_notifier_fires_exactly_once_and_never_early() {
    let mut notifier = SettleNotifier::new(1.0);

    assert!(!notifier.tick(Duration::from_millis(400)), "Too early");
    assert!(!notifier.tick(Duration::from_millis(400)), "Still early");
    assert!(!notifier.has_fired());

    assert!(
        notifier.tick(Duration::from_millis(400)),
        "Must fire once the delay elapses"
    );
    assert!(notifier.has_fired());

    for _ in 0..10 {
        assert!(
            !notifier.tick(Duration::from_secs(5)),
            "Must never fire twice"
        );
    }
}

#[test]
fn disarmed_notifier_stays_silent() {
    let mut notifier = SettleNotifier::new(0.5);
    notifier.disarm();

    assert!(!notifier.tick(Duration::from_secs(10)));
    assert!(notifier.has_fired(), "Disarm spends the one shot");
}

// ==================================================================================
// Configuration tests
// ==================================================================================

#[test]
fn viewer_config_defaults_fill_missing_fields() {
    let config: ViewerConfig = serde_yaml::from_str("window:\n  title: Orrery\n").unwrap();

    assert_eq!(config.window.title, "Orrery");
    assert_eq!(config.window.width, 1280.0);
    assert_eq!(config.settle_delay, 1.0);
    assert!(config.controls.show_labels);
    assert_eq!(config.controls.speed_multiplier, 1.0);
}

#[test]
fn viewer_config_full_file_parses() {
    let yaml = r#"
window:
  title: "Demo"
  width: 800.0
  height: 600.0
camera:
  position: [0.0, 10.0, 40.0]
  fov_degrees: 45.0
stars:
  count: 100
  inner_radius: 50.0
  outer_radius: 90.0
  seed: 7
settle_delay: 2.5
controls:
  show_labels: false
  speed_multiplier: 0.5
"#;
    let config: ViewerConfig = serde_yaml::from_str(yaml).unwrap();

    assert_eq!(config.camera.position, [0.0, 10.0, 40.0]);
    assert_eq!(config.stars.seed, 7);
    assert_eq!(config.settle_delay, 2.5);
    assert!(!config.controls.show_labels);
}
