use super::AdvisoryRule;
use crate::models::{Advisory, AdvisoryCategory, AdvisoryColor, CurrentConditions, DailyOutlook};

const HEAVY_RAIN_PROB: f64 = 0.70;

/// Rain warning rule - heavy rain likely tomorrow
///
/// Fires when tomorrow's max precipitation probability exceeds 70%.
pub struct RainWarningRule;

impl AdvisoryRule for RainWarningRule {
    fn id(&self) -> &'static str {
        "rain_warning"
    }

    fn name(&self) -> &'static str {
        "Rain Warning"
    }

    fn evaluate(&self, _current: &CurrentConditions, outlook: &[DailyOutlook]) -> Option<Advisory> {
        let tomorrow = outlook.get(1)?;
        if tomorrow.max_precipitation_prob <= HEAVY_RAIN_PROB {
            return None;
        }

        Some(Advisory::new(
            AdvisoryCategory::RainWarning,
            AdvisoryColor::Orange,
            "Rain Expected",
            format!(
                "Heavy rain expected {} ({:.0}% chance). Consider harvesting ready crops early.",
                tomorrow.spoken_name(),
                tomorrow.max_precipitation_prob * 100.0
            ),
        ))
    }
}
