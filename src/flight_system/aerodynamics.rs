use std::f64::consts::PI;

use crate::catalog::aircraft::Aircraft;
use crate::catalog::planets::Planet;
use crate::constants::EARTH_GRAVITY;
use crate::flight_system::atmosphere::{air_density, air_factor};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FlightInputs {
    pub planet: Planet,
    pub aircraft: Aircraft,
    pub altitude_m: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FlightResults {
    pub air_density: f64,     // kg/m³
    pub lift: f64,            // N
    pub parasite_drag: f64,   // N
    pub induced_drag: f64,    // N
    pub total_drag: f64,      // N
    pub acceleration_g: f64,  // lift expressed in multiples of weight
    pub glide_distance: f64,  // m
    pub lift_insufficient: bool,
}

/// Glide-flight estimate for one planet/aircraft/altitude combination.
///
/// Pure and deterministic; never panics for finite numeric input. Degenerate
/// inputs (zero velocity, zero wing area, zero air density, zero lift) are not
/// guarded: the induced-drag and drag-factor divisions then produce NaN or
/// infinity, which propagate into the results unchanged.
pub fn compute(inputs: &FlightInputs) -> FlightResults {
    let planet = &inputs.planet;
    let craft = &inputs.aircraft;

    let air_factor = air_factor(planet.air_thickness_atm);
    let air_density = air_density(inputs.altitude_m, planet.air_thickness_atm);

    let weight_n = craft.mass_kg * planet.gravity;
    let dynamic_pressure = 0.5 * air_density * craft.velocity.powi(2);

    let lift = dynamic_pressure * craft.wing_area * craft.lift_coefficient;
    let parasite_drag = dynamic_pressure * craft.wing_area * craft.drag_coefficient;
    let induced_drag =
        lift.powi(2) / (PI * craft.aspect_ratio * dynamic_pressure * craft.wing_area);
    let total_drag = parasite_drag + induced_drag;

    let drag_factor = 1.0 / (1.0 + total_drag / lift);

    // Glide distance is normalized against Earth surface gravity regardless of
    // the selected planet, so ranges stay comparable across planets.
    let glide_distance = craft.glide_ratio
        * inputs.altitude_m
        * (EARTH_GRAVITY / planet.gravity)
        * air_factor
        * drag_factor;

    let acceleration_g = lift / weight_n;

    FlightResults {
        air_density,
        lift,
        parasite_drag,
        induced_drag,
        total_drag,
        acceleration_g,
        glide_distance,
        lift_insufficient: lift < weight_n,
    }
}
