//! Core state types for the solar-system model.
//!
//! Defines the per-body mutable state and the user-facing controls:
//! - `KinematicState` holds one body's accumulated animation time
//! - `BodyState` pairs a catalog descriptor with its kinematic state
//! - `Controls` holds the two user-adjustable settings
//!
//! Angle derivation and the per-frame update live in `kinematics`.

use nalgebra::Vector3;

use crate::catalog::bodies::BodyDescriptor;

pub type NVec3 = Vector3<f64>;

// Animation tuning constants, kept as the product ships them. The sun and
// planet classes intentionally use different time gains, and the angle
// scales are independent per axis of motion.
pub const SUN_TIME_GAIN: f64 = 1.0; // sun: accumulated += dt * speed * 1
pub const PLANET_TIME_GAIN: f64 = 10.0; // planets: accumulated += dt * speed * 10
pub const ORBIT_ANGLE_SCALE: f64 = 5.0; // orbital angle = t/period * 5
pub const ROTATION_ANGLE_SCALE: f64 = 50.0; // rotation angle = t/period * 50
pub const SUN_SPIN_RATE: f64 = 0.5; // sun rotation = t * 0.5, no period
pub const SUN_PULSE_AMPLITUDE: f64 = 0.05; // pulse = 1 + 0.05 * sin(t * 2)
pub const SUN_PULSE_FREQUENCY: f64 = 2.0;

// Speed slider range, enforced by the control itself.
pub const SPEED_MIN: f64 = 0.0;
pub const SPEED_MAX: f64 = 5.0;
pub const SPEED_STEP: f64 = 0.1;

/// Per-body animation clock.
///
/// `accumulated_time` only ever grows, by `dt * speed * gain` each frame.
/// It is never reset or rescaled when the speed control moves, so derived
/// angles change rate without jumping.
#[derive(Debug, Clone, Default)]
pub struct KinematicState {
    pub accumulated_time: f64,
}

/// A catalog descriptor plus its live kinematic state.
#[derive(Debug, Clone)]
pub struct BodyState {
    pub descriptor: &'static BodyDescriptor,
    pub kinematics: KinematicState,
}

impl BodyState {
    pub fn at_rest(descriptor: &'static BodyDescriptor) -> Self {
        Self {
            descriptor,
            kinematics: KinematicState::default(),
        }
    }
}

/// The two user-adjustable settings surfaced by the control panel.
#[derive(Debug, Clone)]
pub struct Controls {
    pub show_labels: bool,     // one global toggle, not per-body
    pub speed_multiplier: f64, // in [SPEED_MIN, SPEED_MAX]
}

impl Default for Controls {
    fn default() -> Self {
        Self {
            show_labels: true,
            speed_multiplier: 1.0,
        }
    }
}
