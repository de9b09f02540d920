//! Selection state for the detail panel.
//!
//! Tracks which single entity is currently shown: a planet, the sun, or
//! nothing. The machine is memoryless; every transition is valid from every
//! state, and selecting one entity always deselects the other kind.

/// What the detail panel is currently showing.
///
/// `Planet` carries an index into `SolarSystem::bodies` (always a planet
/// entry; the dispatch in `SolarSystem::click` guarantees it).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    Idle,
    Planet(usize),
    Sun,
}

impl Selection {
    /// Select a planet, clearing any sun selection.
    pub fn click_planet(&mut self, index: usize) {
        *self = Selection::Planet(index);
    }

    /// Select the sun, clearing any planet selection.
    pub fn click_sun(&mut self) {
        *self = Selection::Sun;
    }

    /// Dismiss the panel from any state.
    pub fn close(&mut self) {
        *self = Selection::Idle;
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, Selection::Idle)
    }
}
