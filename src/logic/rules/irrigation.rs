use super::AdvisoryRule;
use crate::models::{Advisory, AdvisoryCategory, AdvisoryColor, CurrentConditions, DailyOutlook};

/// Irrigation rule - driven by the estimated soil moisture proxy
///
/// Conditions:
/// - Moisture > 70%: adequate, skip irrigation (green)
/// - Moisture < 50%: low, irrigate today (yellow)
/// - In between: no advisory
pub struct IrrigationRule;

impl AdvisoryRule for IrrigationRule {
    fn id(&self) -> &'static str {
        "irrigation"
    }

    fn name(&self) -> &'static str {
        "Irrigation"
    }

    fn evaluate(&self, current: &CurrentConditions, _outlook: &[DailyOutlook]) -> Option<Advisory> {
        let moisture = current.estimated_soil_moisture_pct();

        if moisture > 70 {
            Some(Advisory::new(
                AdvisoryCategory::Irrigation,
                AdvisoryColor::Green,
                "Irrigation Alert",
                format!(
                    "Soil moisture is adequate ({}%). Skip irrigation for now to save water.",
                    moisture
                ),
            ))
        } else if moisture < 50 {
            Some(Advisory::new(
                AdvisoryCategory::Irrigation,
                AdvisoryColor::Yellow,
                "Irrigation Alert",
                format!(
                    "Soil moisture is low ({}%). Irrigate today to prevent crop stress.",
                    moisture
                ),
            ))
        } else {
            None
        }
    }
}
