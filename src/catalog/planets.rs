use crate::constants::{DEFAULT_AIR_THICKNESS, DEFAULT_PLANET_GRAVITY};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Planet {
    pub name: &'static str,
    pub gravity: f64,            // m/s² at the surface
    pub air_thickness_atm: f64,  // atmospheric thickness relative to Earth
}

pub const PLANETS: [Planet; 8] = [
    Planet { name: "Mercury", gravity: 3.7, air_thickness_atm: 0.00000000003 },
    Planet { name: "Venus", gravity: 8.87, air_thickness_atm: 92.0 },
    Planet { name: "Earth", gravity: 9.8, air_thickness_atm: 1.0 },
    Planet { name: "Mars", gravity: 3.71, air_thickness_atm: 0.006 },
    Planet { name: "Jupiter", gravity: 24.79, air_thickness_atm: 0.1 },
    Planet { name: "Saturn", gravity: 10.44, air_thickness_atm: 0.0001 },
    Planet { name: "Uranus", gravity: 8.87, air_thickness_atm: 0.00001 },
    Planet { name: "Neptune", gravity: 11.15, air_thickness_atm: 0.00001 },
];

impl Planet {
    /// Case-sensitive catalog lookup. Any unknown name silently falls back to
    /// Earth defaults rather than signaling an error.
    pub fn find(name: &str) -> Planet {
        PLANETS
            .iter()
            .find(|planet| planet.name == name)
            .copied()
            .unwrap_or(Planet {
                name: "Earth",
                gravity: DEFAULT_PLANET_GRAVITY,
                air_thickness_atm: DEFAULT_AIR_THICKNESS,
            })
    }
}
