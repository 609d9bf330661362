// Physical Constants
pub const EARTH_GRAVITY: f64 = 9.8; // m/s², fixed normalization reference for glide distance

// Atmospheric Constants (ISA, simplified, Earth-calibrated)
pub const AIR_DENSITY_SEA_LEVEL: f64 = 1.225; // kg/m³
pub const TROPOPAUSE_ALTITUDE: f64 = 11_000.0; // m
pub const STRATOSPHERE_ALTITUDE: f64 = 20_000.0; // m
pub const TROPOSPHERE_DENSITY_LAPSE: f64 = 0.0000225577; // per meter
pub const TROPOSPHERE_DENSITY_EXPONENT: f64 = 4.2561;
pub const TROPOPAUSE_DENSITY: f64 = 0.36391; // kg/m³ at 11 km
pub const STRATOSPHERE_DENSITY: f64 = 0.08803; // kg/m³ at 20 km
pub const DENSITY_SCALE_HEIGHT: f64 = 6_341.62; // m, exponential decay above the tropopause

// Aerodynamic Constants
pub const DEFAULT_ASPECT_RATIO: f64 = 8.0;
pub const VACUUM_GLIDE_FACTOR: f64 = 2.0; // air-factor fallback for a planet with no atmosphere

// Planet fallback values (Earth)
pub const DEFAULT_PLANET_GRAVITY: f64 = 9.8; // m/s²
pub const DEFAULT_AIR_THICKNESS: f64 = 1.0; // atm
