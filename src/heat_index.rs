//! Heat index (apparent temperature) calculation
//!
//! Implements the National Weather Service approximation: a simple linear
//! estimate, replaced by the Rothfusz regression once that estimate reaches
//! 80°F. Input and output are both in Celsius.

/// Linear estimate (in °F) at or above which the Rothfusz regression applies
const ROTHFUSZ_THRESHOLD_F: f64 = 80.0;

/// Compute the heat index for a temperature in °C and relative humidity in %.
///
/// The branch choice is made on the linear estimate, not on the regression
/// output. The low- and high-humidity Rothfusz adjustment terms are not
/// applied. Inputs are not range-checked; callers own validation.
#[must_use]
pub fn heat_index(temperature_c: f64, humidity_pct: f64) -> f64 {
    let t = celsius_to_fahrenheit(temperature_c);
    let rh = humidity_pct;

    let simple = 0.5 * (t + 61.0 + (t - 68.0) * 1.2 + rh * 0.094);

    let hi_f = if simple >= ROTHFUSZ_THRESHOLD_F {
        rothfusz(t, rh)
    } else {
        simple
    };

    fahrenheit_to_celsius(hi_f)
}

/// Rothfusz regression over temperature (°F) and relative humidity (%)
fn rothfusz(t: f64, rh: f64) -> f64 {
    -42.379 + 2.04901523 * t + 10.14333127 * rh - 0.22475541 * t * rh - 0.00683783 * t * t
        - 0.05481717 * rh * rh
        + 0.00122874 * t * t * rh
        + 0.00085282 * t * rh * rh
        - 0.00000199 * t * t * rh * rh
}

fn celsius_to_fahrenheit(c: f64) -> f64 {
    c * 9.0 / 5.0 + 32.0
}

fn fahrenheit_to_celsius(f: f64) -> f64 {
    (f - 32.0) * 5.0 / 9.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(25.0, 50.0, 24.861111111111111)] // linear branch
    #[case(20.0, 10.0, 18.316666666666666)] // linear branch
    #[case(32.0, 60.0, 37.07428412177793)]
    #[case(40.0, 70.0, 71.89120585555561)]
    #[case(30.0, 90.0, 40.71909144444433)]
    #[case(26.0, 85.0, 27.851016191555654)] // linear estimate 80.375°F, regression fires
    fn test_reference_values(#[case] temp: f64, #[case] humidity: f64, #[case] expected: f64) {
        let hi = heat_index(temp, humidity);
        assert!(
            (hi - expected).abs() < 1e-9,
            "heat_index({temp}, {humidity}) = {hi}, expected {expected}"
        );
    }

    #[test]
    fn test_hot_humid_amplifies() {
        assert!(heat_index(40.0, 70.0) > 40.0);
        assert!(heat_index(35.0, 85.0) > heat_index(35.0, 40.0));
    }

    #[test]
    fn test_mild_dry_reads_below_air_temperature() {
        assert!(heat_index(20.0, 10.0) < 20.0);
    }

    #[test]
    fn test_branch_threshold_uses_linear_estimate() {
        // 26.7°C / 40% gives a linear estimate of 79.646°F, just under the
        // threshold, so the result must come from the linear formula.
        let hi = heat_index(26.7, 40.0);
        let linear = 0.5 * (80.06 + 61.0 + (80.06 - 68.0) * 1.2 + 40.0 * 0.094);
        assert!((hi - (linear - 32.0) * 5.0 / 9.0).abs() < 1e-9);
    }
}
