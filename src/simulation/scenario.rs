//! Build the fully-initialized runtime model.
//!
//! `SolarSystem` is the main runtime bundle: the body array assembled from
//! the compiled-in catalog (sun first, then the planets in catalog order,
//! every clock at zero), the user controls, and the current selection.
//!
//! In Bevy terms it is inserted as a `Resource` and then read or mutated by
//! the systems responsible for kinematics, picking, and the UI.

use bevy::prelude::Resource;

use crate::catalog::bodies::{BodyClass, PLANETS, SUN};
use crate::simulation::selection::Selection;
use crate::simulation::states::{BodyState, Controls};

#[derive(Resource)]
pub struct SolarSystem {
    pub bodies: Vec<BodyState>, // index 0 is the sun
    pub controls: Controls,
    pub selection: Selection,
}

impl SolarSystem {
    /// Assemble the body array from the catalog with all clocks at zero.
    pub fn build(controls: Controls) -> Self {
        let bodies = std::iter::once(&SUN)
            .chain(PLANETS.iter())
            .map(BodyState::at_rest)
            .collect();

        Self {
            bodies,
            controls,
            selection: Selection::default(),
        }
    }

    pub fn sun(&self) -> &BodyState {
        &self.bodies[0]
    }

    /// The body currently shown in the detail panel, if any.
    pub fn selected(&self) -> Option<&BodyState> {
        match self.selection {
            Selection::Idle => None,
            Selection::Sun => Some(self.sun()),
            Selection::Planet(i) => self.bodies.get(i),
        }
    }

    /// Route a click on body `index` to the selection machine.
    pub fn click(&mut self, index: usize) {
        match self.bodies[index].descriptor.class {
            BodyClass::Sun => self.selection.click_sun(),
            BodyClass::Planet => self.selection.click_planet(index),
        }
    }
}

impl Default for SolarSystem {
    fn default() -> Self {
        Self::build(Controls::default())
    }
}
