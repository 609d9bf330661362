pub mod catalog;
pub mod console;
pub mod constants;
pub mod errors;
pub mod flight_system;

pub use constants::*;
pub use catalog::aircraft::{Aircraft, AIRCRAFT_PRESETS};
pub use catalog::planets::{Planet, PLANETS};
pub use errors::ConsoleError;

// Re-export commonly used items from flight_system
pub use flight_system::aerodynamics::{compute, FlightInputs, FlightResults};
pub use flight_system::atmosphere::{air_density, air_factor};

// Re-export the interactive shell
pub use console::ConsoleSession;
