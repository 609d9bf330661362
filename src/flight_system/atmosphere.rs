use crate::constants::{
    AIR_DENSITY_SEA_LEVEL, DENSITY_SCALE_HEIGHT, STRATOSPHERE_ALTITUDE, STRATOSPHERE_DENSITY,
    TROPOPAUSE_ALTITUDE, TROPOPAUSE_DENSITY, TROPOSPHERE_DENSITY_EXPONENT,
    TROPOSPHERE_DENSITY_LAPSE, VACUUM_GLIDE_FACTOR,
};

/// Air density at the given altitude, in kg/m³.
///
/// The base curve is the simplified Earth-calibrated ISA model in three bands;
/// the result is then scaled by the planet's relative atmospheric thickness.
/// This deliberately reuses the Earth profile for every planet rather than
/// modeling each atmosphere separately.
pub fn air_density(altitude_m: f64, air_thickness_atm: f64) -> f64 {
    let base = if altitude_m <= 0.0 {
        AIR_DENSITY_SEA_LEVEL
    } else if altitude_m < TROPOPAUSE_ALTITUDE {
        AIR_DENSITY_SEA_LEVEL
            * (1.0 - TROPOSPHERE_DENSITY_LAPSE * altitude_m).powf(TROPOSPHERE_DENSITY_EXPONENT)
    } else if altitude_m < STRATOSPHERE_ALTITUDE {
        TROPOPAUSE_DENSITY * ((TROPOPAUSE_ALTITUDE - altitude_m) / DENSITY_SCALE_HEIGHT).exp()
    } else {
        STRATOSPHERE_DENSITY * ((STRATOSPHERE_ALTITUDE - altitude_m) / DENSITY_SCALE_HEIGHT).exp()
    };

    base * air_thickness_atm
}

/// Glide-range multiplier for atmospheric thickness. Thin atmospheres extend
/// the glide (1/thickness); a planet with no atmosphere at all uses a fixed
/// fallback factor of 2.0.
pub fn air_factor(air_thickness_atm: f64) -> f64 {
    if air_thickness_atm > 0.0 {
        1.0 / air_thickness_atm
    } else {
        VACUUM_GLIDE_FACTOR
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_sea_level_density() {
        assert_abs_diff_eq!(air_density(0.0, 1.0), 1.225, epsilon = 1e-12);
        // Negative altitudes clamp to the sea-level reference
        assert_abs_diff_eq!(air_density(-500.0, 1.0), 1.225, epsilon = 1e-12);
    }

    #[test]
    fn test_sea_level_density_scales_with_thickness() {
        assert_abs_diff_eq!(air_density(0.0, 92.0), 1.225 * 92.0, epsilon = 1e-9);
        assert_abs_diff_eq!(air_density(0.0, 0.006), 1.225 * 0.006, epsilon = 1e-12);
        assert_abs_diff_eq!(air_density(0.0, 0.0), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_band_continuity_at_tropopause() {
        // The troposphere power-law and the tropopause exponential must agree
        // at the 11 km boundary within floating tolerance.
        let below = air_density(10_999.999, 1.0);
        let at_boundary = air_density(11_000.0, 1.0);
        assert_abs_diff_eq!(below, at_boundary, epsilon = 1e-3);
    }

    #[test]
    fn test_band_continuity_at_stratosphere_floor() {
        let below = air_density(19_999.999, 1.0);
        let at_boundary = air_density(20_000.0, 1.0);
        assert_abs_diff_eq!(below, at_boundary, epsilon = 1e-4);
    }

    #[test]
    fn test_density_non_increasing_within_each_band() {
        let bands = [
            (1.0, 10_999.0, 100.0),      // troposphere
            (11_000.0, 19_999.0, 100.0), // tropopause band
            (20_000.0, 80_000.0, 500.0), // upper band
        ];

        for (start, end, step) in bands {
            let mut altitude = start;
            let mut previous = air_density(altitude, 1.0);
            while altitude < end {
                altitude += step;
                let current = air_density(altitude, 1.0);
                assert!(
                    current <= previous,
                    "density increased from {} to {} between {} m and {} m",
                    previous,
                    current,
                    altitude - step,
                    altitude
                );
                previous = current;
            }
        }
    }

    #[test]
    fn test_tropopause_reference_density() {
        assert_abs_diff_eq!(air_density(11_000.0, 1.0), 0.36391, epsilon = 1e-9);
        assert_abs_diff_eq!(air_density(20_000.0, 1.0), 0.08803, epsilon = 1e-9);
    }

    #[test]
    fn test_air_factor() {
        assert_abs_diff_eq!(air_factor(1.0), 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(air_factor(0.0), 2.0, epsilon = 1e-12);
        assert_abs_diff_eq!(air_factor(0.006), 1.0 / 0.006, epsilon = 1e-9);
        assert_abs_diff_eq!(air_factor(92.0), 1.0 / 92.0, epsilon = 1e-12);
    }
}
