//! Compiled-in celestial body catalog.
//!
//! One descriptor per body, fixed at build time:
//! - [`SUN`]     – the distinguished central body (no orbital parameters)
//! - [`PLANETS`] – the eight planets, ordered by orbital distance
//!
//! The catalog is the single source of truth for geometry, timing, and the
//! informational text shown in the detail panel. It is valid by
//! construction: every planet has strictly positive distance and periods.

/// Whether a body is the central sun or an orbiting planet.
///
/// The two classes use different time-gain constants and different angle
/// formulas, so the class tag travels with the descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyClass {
    Sun,
    Planet,
}

/// Immutable descriptor for a single celestial body.
#[derive(Debug, Clone, Copy)]
pub struct BodyDescriptor {
    pub name: &'static str,              // unique key
    pub class: BodyClass,                // sun or planet
    pub radius: f64,                     // scene units
    pub distance: f64,                   // orbital distance from center; 0 for the sun
    pub orbital_period: f64,             // days per revolution; 0 for the sun
    pub rotation_period: f64,            // days per self-rotation; 0 for the sun
    pub color: [f32; 3],                 // linear rgb
    pub texture: Option<&'static str>,   // reserved, no textures shipped
    pub description: &'static str,
    pub facts: &'static [&'static str],  // ordered
    pub moons: u32,
    pub mass: &'static str,
    pub temperature: &'static str,
}

impl BodyDescriptor {
    pub fn is_sun(&self) -> bool {
        self.class == BodyClass::Sun
    }
}

/// Extra sun-only panel fields. The sun has no moon/period rows; instead
/// the panel shows composition and age.
pub const SUN_COMPOSITION: &str = "73% Hydrogen, 25% Helium, 2% Other elements";
pub const SUN_AGE: &str = "~4.6 billion years";

pub static SUN: BodyDescriptor = BodyDescriptor {
    name: "Sun",
    class: BodyClass::Sun,
    radius: 3.0,
    distance: 0.0,
    orbital_period: 0.0,
    rotation_period: 0.0,
    color: [0.992, 0.722, 0.075],
    texture: None,
    description: "The star at the center of our solar system",
    facts: &[
        "Contains 99.86% of the system's mass",
        "Surface temperature: 5,778 K (5,505°C)",
        "Core temperature: 15 million°C",
        "Produces energy through nuclear fusion",
    ],
    moons: 0,
    mass: "1.989 × 10³⁰ kg",
    temperature: "5,505°C surface",
};

pub static PLANETS: [BodyDescriptor; 8] = [
    BodyDescriptor {
        name: "Mercury",
        class: BodyClass::Planet,
        radius: 0.4,
        distance: 4.0,
        orbital_period: 88.0,
        rotation_period: 59.0,
        color: [0.549, 0.471, 0.325],
        texture: None,
        description: "The smallest planet and closest to the Sun",
        facts: &[
            "No atmosphere",
            "Extreme temperature variations",
            "Heavily cratered surface",
            "No moons",
        ],
        moons: 0,
        mass: "3.3 × 10²³ kg",
        temperature: "-173°C to 427°C",
    },
    BodyDescriptor {
        name: "Venus",
        class: BodyClass::Planet,
        radius: 0.9,
        distance: 7.0,
        orbital_period: 225.0,
        rotation_period: 243.0,
        color: [1.0, 0.647, 0.0],
        texture: None,
        description: "The hottest planet with a thick toxic atmosphere",
        facts: &[
            "Rotates backwards",
            "Hottest planet in solar system",
            "Thick CO₂ atmosphere",
            "Surface pressure 90x Earth's",
        ],
        moons: 0,
        mass: "4.9 × 10²⁴ kg",
        temperature: "462°C average",
    },
    BodyDescriptor {
        name: "Earth",
        class: BodyClass::Planet,
        radius: 1.0,
        distance: 10.0,
        orbital_period: 365.0,
        rotation_period: 1.0,
        color: [0.42, 0.576, 0.839],
        texture: None,
        description: "Our home planet, the only known planet with life",
        facts: &[
            "71% of surface is water",
            "Only known planet with life",
            "Has one natural satellite",
            "Magnetic field protects from radiation",
        ],
        moons: 1,
        mass: "5.97 × 10²⁴ kg",
        temperature: "-89°C to 58°C",
    },
    BodyDescriptor {
        name: "Mars",
        class: BodyClass::Planet,
        radius: 0.5,
        distance: 15.0,
        orbital_period: 687.0,
        rotation_period: 1.03,
        color: [0.804, 0.361, 0.361],
        texture: None,
        description: "The Red Planet with polar ice caps and the largest volcano",
        facts: &[
            "Has water ice at poles",
            "Largest volcano in solar system (Olympus Mons)",
            "Day length similar to Earth",
            "Two small moons",
        ],
        moons: 2,
        mass: "6.4 × 10²³ kg",
        temperature: "-87°C to -5°C",
    },
    BodyDescriptor {
        name: "Jupiter",
        class: BodyClass::Planet,
        radius: 2.5,
        distance: 25.0,
        orbital_period: 4333.0,
        rotation_period: 0.4,
        color: [0.847, 0.792, 0.616],
        texture: None,
        description: "The largest planet, a gas giant with a Great Red Spot",
        facts: &[
            "Largest planet in solar system",
            "Great Red Spot is a giant storm",
            "Has over 80 moons",
            "Mainly hydrogen and helium",
        ],
        moons: 95,
        mass: "1.9 × 10²⁷ kg",
        temperature: "-108°C average",
    },
    BodyDescriptor {
        name: "Saturn",
        class: BodyClass::Planet,
        radius: 2.1,
        distance: 35.0,
        orbital_period: 10756.0,
        rotation_period: 0.45,
        color: [0.98, 0.835, 0.647],
        texture: None,
        description: "Famous for its spectacular ring system",
        facts: &[
            "Spectacular ring system",
            "Less dense than water",
            "Has over 80 moons",
            "Titan is larger than Mercury",
        ],
        moons: 146,
        mass: "5.7 × 10²⁶ kg",
        temperature: "-139°C average",
    },
    BodyDescriptor {
        name: "Uranus",
        class: BodyClass::Planet,
        radius: 1.8,
        distance: 50.0,
        orbital_period: 30687.0,
        rotation_period: 0.7,
        color: [0.31, 0.816, 0.906],
        texture: None,
        description: "An ice giant that rotates on its side",
        facts: &[
            "Rotates on its side",
            "Made of water, methane, and ammonia",
            "Has faint rings",
            "Coldest planetary atmosphere",
        ],
        moons: 27,
        mass: "8.7 × 10²⁵ kg",
        temperature: "-197°C average",
    },
    BodyDescriptor {
        name: "Neptune",
        class: BodyClass::Planet,
        radius: 1.7,
        distance: 65.0,
        orbital_period: 60190.0,
        rotation_period: 0.67,
        color: [0.255, 0.412, 0.882],
        texture: None,
        description: "The windiest planet with speeds up to 2,100 km/h",
        facts: &[
            "Windiest planet in solar system",
            "Deep blue color from methane",
            "Has 14 known moons",
            "Takes 165 years to orbit the Sun",
        ],
        moons: 14,
        mass: "1.0 × 10²⁶ kg",
        temperature: "-201°C average",
    },
];
