//! Viewer settings, loadable from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of the
//! viewer's presentation settings. Every field has a default, so a partial
//! file (or no file at all) is fine. The celestial catalog is compiled in
//! and is deliberately NOT part of this file.
//!
//! # YAML format
//! A full settings file matching these types:
//!
//! ```yaml
//! window:
//!   title: "3D Solar System"
//!   width: 1280.0
//!   height: 800.0
//!
//! camera:
//!   position: [0.0, 30.0, 80.0]   # initial eye position, looking at origin
//!   fov_degrees: 50.0
//!
//! stars:
//!   count: 1500                   # background starfield size
//!   inner_radius: 150.0           # spherical shell the stars occupy
//!   outer_radius: 300.0
//!   seed: 42                      # same seed, same sky
//!
//! settle_delay: 1.0               # seconds before the loaded signal fires
//!
//! controls:
//!   show_labels: true
//!   speed_multiplier: 1.0
//! ```

use bevy::prelude::Resource;
use serde::Deserialize;

use crate::simulation::states::Controls;

#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: f32,
    pub height: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "3D Solar System".to_string(),
            width: 1280.0,
            height: 800.0,
        }
    }
}

#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct CameraConfig {
    pub position: [f32; 3], // initial eye position, looking at the origin
    pub fov_degrees: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            position: [0.0, 30.0, 80.0],
            fov_degrees: 50.0,
        }
    }
}

#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct StarfieldConfig {
    pub count: usize,
    pub inner_radius: f32,
    pub outer_radius: f32,
    pub seed: u64, // same seed, same sky
}

impl Default for StarfieldConfig {
    fn default() -> Self {
        Self {
            count: 1500,
            inner_radius: 150.0,
            outer_radius: 300.0,
            seed: 42,
        }
    }
}

#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct ControlsConfig {
    pub show_labels: bool,
    pub speed_multiplier: f64,
}

impl Default for ControlsConfig {
    fn default() -> Self {
        let defaults = Controls::default();
        Self {
            show_labels: defaults.show_labels,
            speed_multiplier: defaults.speed_multiplier,
        }
    }
}

impl From<&ControlsConfig> for Controls {
    fn from(cfg: &ControlsConfig) -> Self {
        Self {
            show_labels: cfg.show_labels,
            speed_multiplier: cfg.speed_multiplier,
        }
    }
}

/// Top-level viewer configuration, also inserted as a Bevy resource so
/// systems can read presentation settings at startup.
#[derive(Deserialize, Debug, Clone, Resource)]
#[serde(default)]
pub struct ViewerConfig {
    pub window: WindowConfig,
    pub camera: CameraConfig,
    pub stars: StarfieldConfig,
    pub settle_delay: f64, // seconds before the loaded signal fires
    pub controls: ControlsConfig,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            window: WindowConfig::default(),
            camera: CameraConfig::default(),
            stars: StarfieldConfig::default(),
            settle_delay: 1.0,
            controls: ControlsConfig::default(),
        }
    }
}
