//! Per-frame kinematics update and derived quantities.
//!
//! The update is a pure accumulate-and-derive pass, driven once per rendered
//! frame with a measured delta time:
//! - accumulated time grows by `dt * speed * gain`, where the gain constant
//!   depends on the body class (sun vs planet)
//! - orbital and rotation angles are derived from accumulated time and the
//!   body's periods; they are never stored, so they can never drift
//!
//! Periods are statically positive by catalog construction, so there are no
//! runtime error paths here.

use crate::catalog::bodies::BodyClass;
use crate::simulation::scenario::SolarSystem;
use crate::simulation::states::{
    BodyState, NVec3, ORBIT_ANGLE_SCALE, PLANET_TIME_GAIN, ROTATION_ANGLE_SCALE,
    SUN_PULSE_AMPLITUDE, SUN_PULSE_FREQUENCY, SUN_SPIN_RATE, SUN_TIME_GAIN,
};

/// Advance one body's clock by a frame delta at the given speed multiplier.
///
/// `dt` is wall-clock seconds since the last frame (non-negative); `speed`
/// is the slider value. With `speed == 0` the clock freezes and every
/// derived angle holds still.
pub fn advance_body(body: &mut BodyState, dt: f64, speed: f64) {
    let gain = match body.descriptor.class {
        BodyClass::Sun => SUN_TIME_GAIN,
        BodyClass::Planet => PLANET_TIME_GAIN,
    };
    body.kinematics.accumulated_time += dt * speed * gain;
}

/// Advance every body in the system by one frame.
pub fn advance_all(system: &mut SolarSystem, dt: f64) {
    let speed = system.controls.speed_multiplier;
    for body in system.bodies.iter_mut() {
        advance_body(body, dt, speed);
    }
}

/// Revolution angle of the body's orbit frame around the center, radians.
/// The sun does not orbit; its frame angle is always zero.
pub fn orbital_angle(body: &BodyState) -> f64 {
    match body.descriptor.class {
        BodyClass::Sun => 0.0,
        BodyClass::Planet => {
            (body.kinematics.accumulated_time / body.descriptor.orbital_period) * ORBIT_ANGLE_SCALE
        }
    }
}

/// Self-rotation angle of the body mesh, radians.
/// Planets divide by their rotation period; the sun spins at a flat rate.
pub fn rotation_angle(body: &BodyState) -> f64 {
    match body.descriptor.class {
        BodyClass::Sun => body.kinematics.accumulated_time * SUN_SPIN_RATE,
        BodyClass::Planet => {
            (body.kinematics.accumulated_time / body.descriptor.rotation_period)
                * ROTATION_ANGLE_SCALE
        }
    }
}

/// Uniform scale factor for the sun's pulsing glow. Planets do not pulse.
pub fn pulse_scale(body: &BodyState) -> f64 {
    match body.descriptor.class {
        BodyClass::Sun => {
            1.0 + SUN_PULSE_AMPLITUDE
                * (body.kinematics.accumulated_time * SUN_PULSE_FREQUENCY).sin()
        }
        BodyClass::Planet => 1.0,
    }
}

/// Model-space position of the body.
///
/// Equivalent to a parent frame rotated by the orbital angle about +Y with
/// the body offset along +X by its orbital distance. The sun sits at the
/// origin.
pub fn model_position(body: &BodyState) -> NVec3 {
    let d = body.descriptor.distance;
    if d == 0.0 {
        return NVec3::zeros();
    }
    let theta = orbital_angle(body);
    NVec3::new(d * theta.cos(), 0.0, -d * theta.sin())
}
