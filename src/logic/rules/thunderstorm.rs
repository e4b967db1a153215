use super::AdvisoryRule;
use crate::models::{
    Advisory, AdvisoryCategory, AdvisoryColor, CurrentConditions, DailyOutlook, WeatherCondition,
};

/// Thunderstorm alert rule - storms dominate some forecast day
pub struct ThunderstormRule;

impl AdvisoryRule for ThunderstormRule {
    fn id(&self) -> &'static str {
        "thunderstorm_alert"
    }

    fn name(&self) -> &'static str {
        "Thunderstorm Alert"
    }

    fn evaluate(&self, _current: &CurrentConditions, outlook: &[DailyOutlook]) -> Option<Advisory> {
        let stormy = outlook
            .iter()
            .find(|d| d.dominant_condition == WeatherCondition::Thunderstorm)?;

        Some(Advisory::new(
            AdvisoryCategory::ThunderstormAlert,
            AdvisoryColor::Red,
            "Thunderstorm Warning",
            format!(
                "Thunderstorms expected {}. Secure loose equipment and stay out of open fields.",
                stormy.spoken_name()
            ),
        ))
    }
}
