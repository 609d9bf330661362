pub mod aircraft;
pub mod planets;
