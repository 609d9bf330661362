use crate::constants::DEFAULT_ASPECT_RATIO;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aircraft {
    pub name: &'static str,
    pub wing_area: f64,        // m²
    pub drag_coefficient: f64,
    pub lift_coefficient: f64,
    pub mass_kg: f64,
    pub glide_ratio: f64,
    pub velocity: f64,         // m/s
    pub aspect_ratio: f64,     // wingspan² / wing area
}

// Aspect ratios are part of each preset record. The fighter and the light
// single-prop carry their own values; the airliners use the 8.0 default.
pub const AIRCRAFT_PRESETS: [Aircraft; 5] = [
    Aircraft {
        name: "Boeing 737",
        wing_area: 125.0,
        drag_coefficient: 0.027,
        lift_coefficient: 0.27,
        mass_kg: 79_000.0,
        glide_ratio: 17.0,
        velocity: 75.0,
        aspect_ratio: DEFAULT_ASPECT_RATIO,
    },
    Aircraft {
        name: "Boeing 747",
        wing_area: 541.0,
        drag_coefficient: 0.031,
        lift_coefficient: 0.25,
        mass_kg: 333_400.0,
        glide_ratio: 17.0,
        velocity: 85.0,
        aspect_ratio: DEFAULT_ASPECT_RATIO,
    },
    Aircraft {
        name: "Airbus A320",
        wing_area: 122.6,
        drag_coefficient: 0.030,
        lift_coefficient: 0.28,
        mass_kg: 73_500.0,
        glide_ratio: 17.0,
        velocity: 70.0,
        aspect_ratio: DEFAULT_ASPECT_RATIO,
    },
    Aircraft {
        name: "F-16 Falcon",
        wing_area: 27.87,
        drag_coefficient: 0.018,
        lift_coefficient: 0.50,
        mass_kg: 12_000.0,
        glide_ratio: 4.0,
        velocity: 150.0,
        aspect_ratio: 6.0,
    },
    Aircraft {
        name: "Cessna 172",
        wing_area: 16.2,
        drag_coefficient: 0.025,
        lift_coefficient: 1.2,
        mass_kg: 1_111.0,
        glide_ratio: 9.0,
        velocity: 33.0,
        aspect_ratio: 7.0,
    },
];

impl Aircraft {
    /// Manually entered aircraft. Always uses the default aspect ratio.
    pub fn custom(
        lift_coefficient: f64,
        wing_area: f64,
        drag_coefficient: f64,
        mass_kg: f64,
        glide_ratio: f64,
        velocity: f64,
    ) -> Self {
        Aircraft {
            name: "Custom",
            wing_area,
            drag_coefficient,
            lift_coefficient,
            mass_kg,
            glide_ratio,
            velocity,
            aspect_ratio: DEFAULT_ASPECT_RATIO,
        }
    }
}
