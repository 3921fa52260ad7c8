//! Per-observation metrics derived from temperature and humidity.

use serde::Serialize;
use wxc_meteo::WeatherSeries;

/// Rothfusz regression, single branch, applied to the raw readings.
///
/// The coefficients are the Fahrenheit ones while the page feeds Celsius;
/// the output is kept exactly as that mix produces it.
///
/// Terms group as `c * t * t * rh` left to right; the browser page multiplies
/// in a different order, so the two agree only up to the last few bits.
pub fn heat_index_at(t: f64, rh: f64) -> f64 {
    -42.379 + 2.04901523 * t + 10.14333127 * rh
        - 0.22475541 * t * rh
        - 6.83783e-3 * t * t
        - 5.481717e-2 * rh * rh
        + 1.22874e-3 * t * t * rh
        + 8.5282e-4 * t * rh * rh
        - 1.99e-6 * t * t * rh * rh
}

/// Elementwise [`heat_index_at`] over paired readings.
pub fn heat_index(temperatures: &[f64], humidity: &[f64]) -> Vec<f64> {
    temperatures
        .iter()
        .zip(humidity)
        .map(|(&t, &rh)| heat_index_at(t, rh))
        .collect()
}

/// Arithmetic mean, `None` for no values.
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        None
    } else {
        Some(values.iter().sum::<f64>() / values.len() as f64)
    }
}

/// `|t - mean|` for every reading.
///
/// Charted as "temperature variance" but this is the absolute deviation
/// from the mean, not a variance.
pub fn temperature_variance(temperatures: &[f64]) -> Vec<f64> {
    let Some(mean) = mean(temperatures) else {
        return Vec::new();
    };
    temperatures.iter().map(|t| (t - mean).abs()).collect()
}

/// Metrics computed for one filtered series. Rebuilt on every filter, never cached.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct DerivedSeries {
    pub heat_index: Vec<f64>,
    pub temperature_variance: Vec<f64>,
}

impl DerivedSeries {
    pub fn from_series(series: &WeatherSeries) -> Self {
        Self {
            heat_index: heat_index(series.temperatures(), series.humidity()),
            temperature_variance: temperature_variance(series.temperatures()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    fn expected_heat_index(t: f64, rh: f64) -> f64 {
        -42.379 + 2.04901523 * t + 10.14333127 * rh - 0.22475541 * t * rh
            - 0.00683783 * t.powi(2)
            - 0.05481717 * rh.powi(2)
            + 0.00122874 * t.powi(2) * rh
            + 0.00085282 * t * rh.powi(2)
            - 0.00000199 * t.powi(2) * rh.powi(2)
    }

    #[test]
    fn test_heat_index_matches_polynomial() {
        let temperatures = [20.0, 22.0, 19.0, 31.5, -2.0];
        let humidity = [50.0, 55.0, 60.0, 90.0, 0.0];
        let result = heat_index(&temperatures, &humidity);
        assert_eq!(result.len(), temperatures.len());
        for ((t, rh), hi) in temperatures.iter().zip(&humidity).zip(&result) {
            assert!((hi - expected_heat_index(*t, *rh)).abs() < EPSILON);
        }
    }

    #[test]
    fn test_heat_index_known_values() {
        // Zero inputs leave only the intercept.
        assert!((heat_index_at(0.0, 0.0) + 42.379).abs() < EPSILON);
        // Fahrenheit-scale input reproduces the familiar NWS table value.
        assert!((heat_index_at(90.0, 50.0) - 94.596).abs() < 0.01);
        // Celsius input goes through the same coefficients unchanged.
        assert!((heat_index_at(20.0, 50.0) - 206.460).abs() < 0.01);
    }

    #[test]
    fn test_heat_index_empty() {
        assert!(heat_index(&[], &[]).is_empty());
    }

    #[test]
    fn test_temperature_variance_is_absolute_deviation() {
        let result = temperature_variance(&[20.0, 22.0, 19.0, 23.0]);
        // mean = 21
        assert_eq!(result, vec![1.0, 1.0, 2.0, 2.0]);
        assert!(result.iter().all(|d| *d >= 0.0));
    }

    #[test]
    fn test_temperature_variance_symmetric_input() {
        let temperatures = [15.0, 17.0, 19.0, 21.0, 23.0];
        let deviations = temperature_variance(&temperatures);
        let average = mean(&deviations).unwrap();
        // |−4| + |−2| + 0 + 2 + 4 over 5
        assert!((average - 2.4).abs() < EPSILON);
    }

    #[test]
    fn test_temperature_variance_constant_and_empty() {
        assert_eq!(temperature_variance(&[18.5; 4]), vec![0.0; 4]);
        assert!(temperature_variance(&[]).is_empty());
        assert_eq!(mean(&[]), None);
    }

    #[test]
    fn test_derived_series_lengths() {
        let series = WeatherSeries::new(
            vec!["2024-01-02".to_string(), "2024-01-03".to_string()],
            vec![22.0, 19.0],
            vec![55.0, 60.0],
        )
        .unwrap();
        let derived = DerivedSeries::from_series(&series);
        assert_eq!(derived.heat_index.len(), 2);
        assert_eq!(derived.temperature_variance, vec![1.5, 1.5]);
    }
}
