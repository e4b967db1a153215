use super::{
    heat::HeatRule, irrigation::IrrigationRule, rain_warning::RainWarningRule,
    spray_window::SprayWindowRule, thunderstorm::ThunderstormRule, AdvisoryRule,
};
use crate::models::{Advisory, CurrentConditions, DailyOutlook};

/// Runs the advisory rules in a fixed order against one snapshot.
/// Rules are independent; zero or more may fire.
pub struct AdvisoryEngine {
    rules: Vec<Box<dyn AdvisoryRule>>,
}

impl AdvisoryEngine {
    pub fn new() -> Self {
        let rules: Vec<Box<dyn AdvisoryRule>> = vec![
            Box::new(IrrigationRule),
            Box::new(RainWarningRule),
            Box::new(SprayWindowRule),
            Box::new(ThunderstormRule),
            Box::new(HeatRule),
        ];

        Self { rules }
    }

    pub fn evaluate(&self, current: &CurrentConditions, outlook: &[DailyOutlook]) -> Vec<Advisory> {
        self.rules
            .iter()
            .filter_map(|rule| rule.evaluate(current, outlook))
            .collect()
    }

    pub fn list_rules(&self) -> Vec<(&'static str, &'static str)> {
        self.rules.iter().map(|r| (r.id(), r.name())).collect()
    }
}

impl Default for AdvisoryEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AdvisoryCategory, AdvisoryColor, WeatherCondition};
    use chrono::NaiveDate;

    fn current(humidity_pct: f64, rainfall_mm: f64, wind_speed_kmh: f64) -> CurrentConditions {
        CurrentConditions {
            temp_c: 24.0,
            humidity_pct,
            wind_speed_kmh,
            rainfall_mm,
            condition: WeatherCondition::Clouds,
        }
    }

    fn day(offset: u32, label: &str, mean_temp_c: f64, pop: f64, cond: WeatherCondition) -> DailyOutlook {
        DailyOutlook {
            date: NaiveDate::from_ymd_opt(2024, 7, 8 + offset).unwrap(), // Mon + offset
            label: label.to_string(),
            mean_temp_c,
            mean_humidity_pct: 65.0,
            max_precipitation_prob: pop,
            dominant_condition: cond,
        }
    }

    fn quiet_week() -> Vec<DailyOutlook> {
        vec![
            day(0, "Today", 24.0, 0.1, WeatherCondition::Clouds),
            day(1, "Tomorrow", 22.0, 0.2, WeatherCondition::Clouds),
            day(2, "Wed", 26.0, 0.05, WeatherCondition::Clear),
            day(3, "Thu", 25.0, 0.15, WeatherCondition::Clouds),
            day(4, "Fri", 23.0, 0.3, WeatherCondition::Rain),
        ]
    }

    #[test]
    fn moderate_moisture_fires_no_irrigation_advisory() {
        // humidity 65, rainfall 0 -> estimate 52, between the thresholds
        let advisories = AdvisoryEngine::new().evaluate(&current(65.0, 0.0, 20.0), &quiet_week());
        assert!(advisories
            .iter()
            .all(|a| a.category != AdvisoryCategory::Irrigation));
    }

    #[test]
    fn wet_conditions_fire_green_irrigation_advisory() {
        // humidity 90, rainfall 3 -> estimate 87
        let advisories = AdvisoryEngine::new().evaluate(&current(90.0, 3.0, 20.0), &quiet_week());
        let irrigation = advisories
            .iter()
            .find(|a| a.category == AdvisoryCategory::Irrigation)
            .expect("irrigation advisory");
        assert_eq!(irrigation.color, AdvisoryColor::Green);
        assert!(irrigation.message.contains("Skip irrigation"));
    }

    #[test]
    fn dry_conditions_fire_yellow_irrigation_advisory() {
        let advisories = AdvisoryEngine::new().evaluate(&current(40.0, 0.0, 20.0), &quiet_week());
        let irrigation = advisories
            .iter()
            .find(|a| a.category == AdvisoryCategory::Irrigation)
            .expect("irrigation advisory");
        assert_eq!(irrigation.color, AdvisoryColor::Yellow);
        assert!(irrigation.message.contains("Irrigate today"));
    }

    #[test]
    fn wet_tomorrow_fires_rain_warning_referencing_tomorrow() {
        let mut outlook = quiet_week();
        outlook[1].max_precipitation_prob = 0.8;

        let advisories = AdvisoryEngine::new().evaluate(&current(65.0, 0.0, 20.0), &outlook);
        let warning = advisories
            .iter()
            .find(|a| a.category == AdvisoryCategory::RainWarning)
            .expect("rain warning");
        assert_eq!(warning.color, AdvisoryColor::Orange);
        assert!(warning.message.contains("tomorrow"));
    }

    #[test]
    fn rain_warning_needs_more_than_seventy_percent() {
        let mut outlook = quiet_week();
        outlook[1].max_precipitation_prob = 0.70;
        let advisories = AdvisoryEngine::new().evaluate(&current(65.0, 0.0, 20.0), &outlook);
        assert!(advisories
            .iter()
            .all(|a| a.category != AdvisoryCategory::RainWarning));
    }

    #[test]
    fn calm_wind_and_midweek_entry_fire_spray_window() {
        let advisories = AdvisoryEngine::new().evaluate(&current(65.0, 0.0, 10.0), &quiet_week());
        let spray = advisories
            .iter()
            .find(|a| a.category == AdvisoryCategory::SprayWindow)
            .expect("spray window");
        assert_eq!(spray.color, AdvisoryColor::Blue);
        assert!(spray.message.contains("Wednesday"));
    }

    #[test]
    fn windy_conditions_suppress_spray_window() {
        let advisories = AdvisoryEngine::new().evaluate(&current(65.0, 0.0, 18.0), &quiet_week());
        assert!(advisories
            .iter()
            .all(|a| a.category != AdvisoryCategory::SprayWindow));
    }

    #[test]
    fn storm_day_fires_thunderstorm_alert_naming_the_day() {
        let mut outlook = quiet_week();
        outlook[4].dominant_condition = WeatherCondition::Thunderstorm;

        let advisories = AdvisoryEngine::new().evaluate(&current(65.0, 0.0, 20.0), &outlook);
        let alert = advisories
            .iter()
            .find(|a| a.category == AdvisoryCategory::ThunderstormAlert)
            .expect("thunderstorm alert");
        assert_eq!(alert.color, AdvisoryColor::Red);
        assert!(alert.message.contains("Friday"));
    }

    #[test]
    fn hot_day_fires_heat_alert() {
        let mut outlook = quiet_week();
        outlook[2].mean_temp_c = 31.5;

        let advisories = AdvisoryEngine::new().evaluate(&current(65.0, 0.0, 20.0), &outlook);
        let alert = advisories
            .iter()
            .find(|a| a.category == AdvisoryCategory::HeatAlert)
            .expect("heat alert");
        assert_eq!(alert.color, AdvisoryColor::Yellow);
        assert!(alert.message.contains("Wednesday"));
    }

    #[test]
    fn advisories_come_back_in_rule_order() {
        let mut outlook = quiet_week();
        outlook[1].max_precipitation_prob = 0.9;
        outlook[4].dominant_condition = WeatherCondition::Thunderstorm;
        outlook[4].mean_temp_c = 32.0;

        // dry + calm: every rule fires
        let advisories = AdvisoryEngine::new().evaluate(&current(40.0, 0.0, 5.0), &outlook);
        let categories: Vec<AdvisoryCategory> = advisories.iter().map(|a| a.category).collect();
        assert_eq!(
            categories,
            vec![
                AdvisoryCategory::Irrigation,
                AdvisoryCategory::RainWarning,
                AdvisoryCategory::SprayWindow,
                AdvisoryCategory::ThunderstormAlert,
                AdvisoryCategory::HeatAlert,
            ]
        );
    }

    #[test]
    fn evaluation_is_idempotent() {
        let engine = AdvisoryEngine::new();
        let outlook = quiet_week();
        let conditions = current(90.0, 3.0, 10.0);

        let first = engine.evaluate(&conditions, &outlook);
        let second = engine.evaluate(&conditions, &outlook);
        assert_eq!(first, second);
    }

    #[test]
    fn empty_outlook_only_considers_current_conditions() {
        let advisories = AdvisoryEngine::new().evaluate(&current(90.0, 3.0, 5.0), &[]);
        assert_eq!(advisories.len(), 1);
        assert_eq!(advisories[0].category, AdvisoryCategory::Irrigation);
    }
}
