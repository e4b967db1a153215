use super::AdvisoryRule;
use crate::models::{Advisory, AdvisoryCategory, AdvisoryColor, CurrentConditions, DailyOutlook};

const HEAT_THRESHOLD_C: f64 = 30.0;

/// Heat alert rule - a forecast day averages above 30°C
pub struct HeatRule;

impl AdvisoryRule for HeatRule {
    fn id(&self) -> &'static str {
        "heat_alert"
    }

    fn name(&self) -> &'static str {
        "Heat Alert"
    }

    fn evaluate(&self, _current: &CurrentConditions, outlook: &[DailyOutlook]) -> Option<Advisory> {
        let hot = outlook.iter().find(|d| d.mean_temp_c > HEAT_THRESHOLD_C)?;

        Some(Advisory::new(
            AdvisoryCategory::HeatAlert,
            AdvisoryColor::Yellow,
            "Heat Advisory",
            format!(
                "Temperatures above {:.0}°C expected {}. Monitor livestock water supply and irrigate in the evening.",
                HEAT_THRESHOLD_C,
                hot.spoken_name()
            ),
        ))
    }
}
