use super::forecast::WeatherCondition;
use serde::{Deserialize, Serialize};

/// Latest observed conditions at the active location
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentConditions {
    pub temp_c: f64,
    pub humidity_pct: f64,
    pub wind_speed_kmh: f64,
    pub rainfall_mm: f64, // last hour
    pub condition: WeatherCondition,
}

impl CurrentConditions {
    /// Heuristic soil moisture proxy from humidity and recent rainfall.
    /// Not a sensor reading; clamped to 100%.
    pub fn estimated_soil_moisture_pct(&self) -> u8 {
        (self.humidity_pct * 0.8 + self.rainfall_mm * 5.0).min(100.0).round() as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn conditions(humidity_pct: f64, rainfall_mm: f64) -> CurrentConditions {
        CurrentConditions {
            temp_c: 24.0,
            humidity_pct,
            wind_speed_kmh: 12.0,
            rainfall_mm,
            condition: WeatherCondition::Clouds,
        }
    }

    #[test]
    fn soil_moisture_from_humidity_alone() {
        assert_eq!(conditions(65.0, 0.0).estimated_soil_moisture_pct(), 52);
    }

    #[test]
    fn soil_moisture_adds_rainfall() {
        // 90 * 0.8 + 3 * 5 = 87
        assert_eq!(conditions(90.0, 3.0).estimated_soil_moisture_pct(), 87);
    }

    #[test]
    fn soil_moisture_clamped_at_100() {
        assert_eq!(conditions(95.0, 10.0).estimated_soil_moisture_pct(), 100);
        assert_eq!(conditions(100.0, 50.0).estimated_soil_moisture_pct(), 100);
    }

    #[test]
    fn soil_moisture_monotonic_in_inputs() {
        let base = conditions(60.0, 1.0).estimated_soil_moisture_pct();
        assert!(conditions(70.0, 1.0).estimated_soil_moisture_pct() >= base);
        assert!(conditions(60.0, 2.0).estimated_soil_moisture_pct() >= base);
    }
}
