use crate::error::{MazaoError, Result};
use crate::models::{DailyOutlook, ForecastSample, WeatherCondition};
use chrono::{FixedOffset, NaiveDate};
use std::collections::HashMap;

pub const MAX_OUTLOOK_DAYS: usize = 7;

/// Reduce 3-hour forecast samples into one outlook per local calendar day.
///
/// Samples are grouped by the calendar date at the location's UTC offset,
/// reduced per group, emitted in ascending date order and capped at
/// [`MAX_OUTLOOK_DAYS`]. The first two entries are labeled "Today" and
/// "Tomorrow"; the rest carry their weekday abbreviation.
pub fn daily_outlook(
    samples: &[ForecastSample],
    utc_offset: FixedOffset,
) -> Result<Vec<DailyOutlook>> {
    if samples.is_empty() {
        return Err(MazaoError::EmptyForecast);
    }

    // Group by local date
    let mut by_date: HashMap<NaiveDate, Vec<&ForecastSample>> = HashMap::new();
    for sample in samples {
        let date = sample.timestamp.with_timezone(&utc_offset).date_naive();
        by_date.entry(date).or_default().push(sample);
    }

    let mut days: Vec<DailyOutlook> = by_date
        .into_iter()
        .map(|(date, group)| reduce_day(date, &group))
        .collect();

    days.sort_by_key(|d| d.date);
    days.truncate(MAX_OUTLOOK_DAYS);

    for (i, day) in days.iter_mut().enumerate() {
        day.label = match i {
            0 => "Today".to_string(),
            1 => "Tomorrow".to_string(),
            _ => day.date.format("%a").to_string(),
        };
    }

    Ok(days)
}

fn reduce_day(date: NaiveDate, group: &[&ForecastSample]) -> DailyOutlook {
    let n = group.len().max(1) as f64;

    let mean_temp_c = group.iter().map(|s| s.temp_c).sum::<f64>() / n;
    let mean_humidity_pct = group.iter().map(|s| s.humidity_pct).sum::<f64>() / n;

    let max_precipitation_prob = group
        .iter()
        .map(|s| s.precipitation_prob)
        .fold(0.0_f64, f64::max);

    // Majority condition; ties go to the later-seen condition
    let mut counts: HashMap<WeatherCondition, (usize, usize)> = HashMap::new();
    for (idx, sample) in group.iter().enumerate() {
        let entry = counts.entry(sample.condition).or_insert((0, 0));
        entry.0 += 1;
        entry.1 = idx;
    }
    let dominant_condition = counts
        .into_iter()
        .max_by_key(|(_, (count, last_idx))| (*count, *last_idx))
        .map(|(condition, _)| condition)
        .unwrap_or_default();

    DailyOutlook {
        date,
        label: String::new(), // assigned after sorting
        mean_temp_c,
        mean_humidity_pct,
        max_precipitation_prob,
        dominant_condition,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Utc};

    fn utc() -> FixedOffset {
        FixedOffset::east_opt(0).unwrap()
    }

    fn sample(
        y: i32,
        m: u32,
        d: u32,
        hour: u32,
        temp_c: f64,
        humidity_pct: f64,
        precipitation_prob: f64,
        condition: WeatherCondition,
    ) -> ForecastSample {
        let timestamp: DateTime<Utc> = NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(hour, 0, 0)
            .unwrap()
            .and_utc();
        ForecastSample {
            timestamp,
            temp_c,
            humidity_pct,
            precipitation_prob,
            condition,
        }
    }

    #[test]
    fn groups_by_date_in_ascending_order_with_labels() {
        // 2024-07-08 is a Monday; deliberately unordered input
        let samples = vec![
            sample(2024, 7, 10, 9, 26.0, 58.0, 0.05, WeatherCondition::Clear),
            sample(2024, 7, 8, 6, 24.0, 65.0, 0.1, WeatherCondition::Clouds),
            sample(2024, 7, 9, 12, 22.0, 72.0, 0.8, WeatherCondition::Rain),
            sample(2024, 7, 8, 18, 20.0, 70.0, 0.2, WeatherCondition::Clouds),
        ];

        let days = daily_outlook(&samples, utc()).unwrap();
        assert_eq!(days.len(), 3);
        assert_eq!(days[0].label, "Today");
        assert_eq!(days[1].label, "Tomorrow");
        assert_eq!(days[2].label, "Wed");
        assert!(days[0].date < days[1].date && days[1].date < days[2].date);
    }

    #[test]
    fn reduces_means_and_max_probability() {
        let samples = vec![
            sample(2024, 7, 8, 6, 20.0, 60.0, 0.2, WeatherCondition::Clear),
            sample(2024, 7, 8, 12, 22.0, 70.0, 0.8, WeatherCondition::Clear),
            sample(2024, 7, 8, 18, 24.0, 80.0, 0.5, WeatherCondition::Clear),
        ];

        let days = daily_outlook(&samples, utc()).unwrap();
        assert_eq!(days.len(), 1);
        assert!((days[0].mean_temp_c - 22.0).abs() < 1e-9);
        assert!((days[0].mean_humidity_pct - 70.0).abs() < 1e-9);
        assert!((days[0].max_precipitation_prob - 0.8).abs() < 1e-9);
    }

    #[test]
    fn means_are_order_independent() {
        let mut samples = vec![
            sample(2024, 7, 8, 6, 18.0, 55.0, 0.1, WeatherCondition::Clear),
            sample(2024, 7, 8, 12, 25.0, 62.0, 0.4, WeatherCondition::Clouds),
            sample(2024, 7, 8, 18, 21.0, 75.0, 0.3, WeatherCondition::Clouds),
        ];
        let forward = daily_outlook(&samples, utc()).unwrap();
        samples.reverse();
        let backward = daily_outlook(&samples, utc()).unwrap();

        assert_eq!(forward[0].mean_temp_c, backward[0].mean_temp_c);
        assert_eq!(forward[0].mean_humidity_pct, backward[0].mean_humidity_pct);
        assert_eq!(
            forward[0].max_precipitation_prob,
            backward[0].max_precipitation_prob
        );
    }

    #[test]
    fn dominant_condition_is_majority() {
        let samples = vec![
            sample(2024, 7, 8, 6, 20.0, 60.0, 0.6, WeatherCondition::Rain),
            sample(2024, 7, 8, 12, 22.0, 65.0, 0.7, WeatherCondition::Rain),
            sample(2024, 7, 8, 18, 24.0, 55.0, 0.1, WeatherCondition::Clear),
        ];
        let days = daily_outlook(&samples, utc()).unwrap();
        assert_eq!(days[0].dominant_condition, WeatherCondition::Rain);
    }

    #[test]
    fn dominant_condition_tie_goes_to_later_sample() {
        let samples = vec![
            sample(2024, 7, 8, 6, 20.0, 60.0, 0.1, WeatherCondition::Clear),
            sample(2024, 7, 8, 12, 22.0, 65.0, 0.6, WeatherCondition::Rain),
        ];
        let days = daily_outlook(&samples, utc()).unwrap();
        assert_eq!(days[0].dominant_condition, WeatherCondition::Rain);
    }

    #[test]
    fn truncates_to_seven_days() {
        let samples: Vec<ForecastSample> = (1..=9)
            .map(|d| sample(2024, 7, d, 12, 22.0, 60.0, 0.1, WeatherCondition::Clear))
            .collect();
        let days = daily_outlook(&samples, utc()).unwrap();
        assert_eq!(days.len(), MAX_OUTLOOK_DAYS);
        assert_eq!(days[0].date, NaiveDate::from_ymd_opt(2024, 7, 1).unwrap());
        assert_eq!(days[6].date, NaiveDate::from_ymd_opt(2024, 7, 7).unwrap());
    }

    #[test]
    fn empty_input_is_a_typed_failure() {
        let err = daily_outlook(&[], utc()).unwrap_err();
        assert!(matches!(err, MazaoError::EmptyForecast));
    }

    #[test]
    fn grouping_respects_utc_offset() {
        // 23:00 UTC lands on the next local day at UTC+3
        let samples = vec![sample(2024, 7, 8, 23, 22.0, 60.0, 0.1, WeatherCondition::Clear)];
        let days = daily_outlook(&samples, FixedOffset::east_opt(3 * 3600).unwrap()).unwrap();
        assert_eq!(days[0].date, NaiveDate::from_ymd_opt(2024, 7, 9).unwrap());
    }
}
