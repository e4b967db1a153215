use super::AdvisoryRule;
use crate::models::{Advisory, AdvisoryCategory, AdvisoryColor, CurrentConditions, DailyOutlook};

const CALM_WIND_KMH: f64 = 15.0;

/// Spray window rule - mid-week window for pesticide application
///
/// Fires when the outlook carries a "Wed" entry and current wind is calm.
/// The match is on the outlook label, not the calendar, so a Wednesday
/// already labeled "Today" or "Tomorrow" does not qualify.
pub struct SprayWindowRule;

impl AdvisoryRule for SprayWindowRule {
    fn id(&self) -> &'static str {
        "spray_window"
    }

    fn name(&self) -> &'static str {
        "Spray Window"
    }

    fn evaluate(&self, current: &CurrentConditions, outlook: &[DailyOutlook]) -> Option<Advisory> {
        let midweek = outlook.iter().find(|d| d.label == "Wed")?;
        if current.wind_speed_kmh >= CALM_WIND_KMH {
            return None;
        }

        Some(Advisory::new(
            AdvisoryCategory::SprayWindow,
            AdvisoryColor::Blue,
            "Optimal Spraying",
            format!(
                "Low wind conditions on {}. Perfect for pesticide application.",
                midweek.spoken_name()
            ),
        ))
    }
}
