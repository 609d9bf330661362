pub mod aerodynamics;
pub mod atmosphere;
