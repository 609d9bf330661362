use std::io::{BufRead, Write};

use crate::catalog::aircraft::{Aircraft, AIRCRAFT_PRESETS};
use crate::catalog::planets::{Planet, PLANETS};
use crate::errors::ConsoleError;
use crate::flight_system::aerodynamics::{compute, FlightInputs, FlightResults};

// Initializers used when a custom-aircraft field cannot be parsed.
const CUSTOM_WING_AREA: f64 = 1.0;
const CUSTOM_DRAG_COEFFICIENT: f64 = 0.05;
const CUSTOM_LIFT_COEFFICIENT: f64 = 1.0;
const CUSTOM_MASS_KG: f64 = 1_000.0;
const CUSTOM_GLIDE_RATIO: f64 = 10.0;
const CUSTOM_VELOCITY: f64 = 50.0;

/// One sequential prompt/response session over any reader/writer pair.
/// The binary wires this to stdin/stdout; tests drive it with in-memory
/// buffers.
pub struct ConsoleSession<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> ConsoleSession<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        ConsoleSession { reader, writer }
    }

    pub fn run(&mut self) -> Result<(), ConsoleError> {
        let planet = self.prompt_planet()?;
        let altitude_m = self.prompt_value("Height (altitude in meters): ", 0.0)?;
        let aircraft = self.prompt_aircraft()?;

        let inputs = FlightInputs {
            planet,
            aircraft,
            altitude_m,
        };
        let results = compute(&inputs);

        self.render_results(&planet, &results)?;
        Ok(())
    }

    fn prompt_planet(&mut self) -> Result<Planet, ConsoleError> {
        write!(self.writer, "Planets: ")?;
        for planet in &PLANETS {
            write!(self.writer, "{} ", planet.name)?;
        }
        write!(self.writer, "\nSelect a planet: ")?;
        self.writer.flush()?;

        let name = self.read_token()?;
        Ok(Planet::find(&name))
    }

    fn prompt_aircraft(&mut self) -> Result<Aircraft, ConsoleError> {
        writeln!(self.writer, "Select aircraft preset or 0 for custom:")?;
        for (i, preset) in AIRCRAFT_PRESETS.iter().enumerate() {
            writeln!(self.writer, "{}: {}", i + 1, preset.name)?;
        }
        writeln!(self.writer, "0: Custom")?;
        self.writer.flush()?;

        let choice: usize = self.read_token()?.parse().unwrap_or(0);
        if choice >= 1 && choice <= AIRCRAFT_PRESETS.len() {
            let selected = AIRCRAFT_PRESETS[choice - 1];
            writeln!(self.writer, "Selected: {}", selected.name)?;
            Ok(selected)
        } else {
            let lift_coefficient =
                self.prompt_value("lift coefficient: ", CUSTOM_LIFT_COEFFICIENT)?;
            let wing_area =
                self.prompt_value("cross-sectional area (m^2): ", CUSTOM_WING_AREA)?;
            let drag_coefficient =
                self.prompt_value("drag coefficient: ", CUSTOM_DRAG_COEFFICIENT)?;
            let mass_kg = self.prompt_value("weight (kg): ", CUSTOM_MASS_KG)?;
            let glide_ratio = self.prompt_value("glide ratio: ", CUSTOM_GLIDE_RATIO)?;
            let velocity = self.prompt_value("velocity (m/s): ", CUSTOM_VELOCITY)?;

            Ok(Aircraft::custom(
                lift_coefficient,
                wing_area,
                drag_coefficient,
                mass_kg,
                glide_ratio,
                velocity,
            ))
        }
    }

    fn prompt_value(&mut self, prompt: &str, default: f64) -> Result<f64, ConsoleError> {
        write!(self.writer, "{}", prompt)?;
        self.writer.flush()?;
        Ok(self.read_token()?.parse().unwrap_or(default))
    }

    // Whitespace-delimited token, so one line can carry several answers.
    fn read_token(&mut self) -> Result<String, ConsoleError> {
        let mut token = String::new();
        loop {
            let available = self.reader.fill_buf()?;
            if available.is_empty() {
                if token.is_empty() {
                    return Err(ConsoleError::InputClosed);
                }
                return Ok(token);
            }
            let ch = available[0] as char;
            self.reader.consume(1);

            if ch.is_whitespace() {
                if !token.is_empty() {
                    return Ok(token);
                }
            } else {
                token.push(ch);
            }
        }
    }

    fn render_results(
        &mut self,
        planet: &Planet,
        results: &FlightResults,
    ) -> Result<(), ConsoleError> {
        writeln!(self.writer, "\n--- Results ---")?;
        writeln!(self.writer, "Air density: {} kg/m^3", results.air_density)?;
        writeln!(self.writer, "Lift: {} N", results.lift)?;
        writeln!(self.writer, "Parasite drag: {} N", results.parasite_drag)?;
        writeln!(self.writer, "Induced drag: {} N", results.induced_drag)?;
        writeln!(self.writer, "Total drag: {} N", results.total_drag)?;
        writeln!(self.writer, "Acceleration: {} g", results.acceleration_g)?;
        writeln!(
            self.writer,
            "Distance traveled: {} m",
            results.glide_distance
        )?;

        if results.lift_insufficient {
            writeln!(
                self.writer,
                "Warning: LIFT IS LESS THAN WEIGHT! Aircraft cannot maintain flight."
            )?;
        }

        writeln!(
            self.writer,
            "{}: Gravity = {} m/s^2, Air thickness = {} atm",
            planet.name, planet.gravity, planet.air_thickness_atm
        )?;
        self.writer.flush()?;
        Ok(())
    }
}
