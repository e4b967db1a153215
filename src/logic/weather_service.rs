use crate::config::{Config, FALLBACK_LATITUDE, FALLBACK_LONGITUDE, FALLBACK_PLACE};
use crate::datasources::OpenWeatherMapClient;
use crate::error::Result;
use crate::logic::aggregate;
use crate::models::{CurrentConditions, DailyOutlook};
use chrono::{DateTime, Utc};

/// Everything one refresh produces: where the data is for, the
/// current-conditions reading and the aggregated daily outlook.
#[derive(Debug, Clone)]
pub struct WeatherSnapshot {
    pub fetched_at: DateTime<Utc>,
    pub place: String,
    pub latitude: f64,
    pub longitude: f64,
    pub used_fallback: bool,
    pub current: CurrentConditions,
    pub outlook: Vec<DailyOutlook>,
}

pub struct WeatherService {
    client: OpenWeatherMapClient,
    config: Config,
}

impl WeatherService {
    pub fn new(config: Config) -> Self {
        let client = OpenWeatherMapClient::new(config.openweathermap.clone());
        Self { client, config }
    }

    /// Fetch a complete weather snapshot for the active location.
    ///
    /// The default location is used at most once per refresh: either because
    /// no coordinates are configured, or because the fetch sequence failed at
    /// the configured ones. A failure at the fallback itself propagates to
    /// the caller as a status-line error.
    pub async fn refresh(&self) -> Result<WeatherSnapshot> {
        match self.config.location.coordinates() {
            Some((latitude, longitude)) => {
                match self.fetch_at(latitude, longitude, false).await {
                    Ok(snapshot) => Ok(snapshot),
                    Err(e) => {
                        tracing::warn!("Weather fetch failed at configured location: {}", e);
                        self.fetch_at(FALLBACK_LATITUDE, FALLBACK_LONGITUDE, true)
                            .await
                    }
                }
            }
            None => {
                tracing::info!("No farm location configured - using {}", FALLBACK_PLACE);
                self.fetch_at(FALLBACK_LATITUDE, FALLBACK_LONGITUDE, true)
                    .await
            }
        }
    }

    async fn fetch_at(
        &self,
        latitude: f64,
        longitude: f64,
        used_fallback: bool,
    ) -> Result<WeatherSnapshot> {
        // Three sequential provider calls; the first failure aborts the pass
        let place = self.client.reverse_geocode(latitude, longitude).await?;
        let current = self.client.fetch_current(latitude, longitude).await?;
        let forecast = self.client.fetch_forecast(latitude, longitude).await?;

        let outlook = aggregate::daily_outlook(&forecast.samples, forecast.utc_offset)?;

        tracing::debug!("Weather snapshot updated for {}", place);

        Ok(WeatherSnapshot {
            fetched_at: Utc::now(),
            place,
            latitude,
            longitude,
            used_fallback,
            current,
            outlook,
        })
    }

    /// Probe the provider at the active coordinates
    pub async fn check_connection(&self) -> Result<bool> {
        let (latitude, longitude) = self
            .config
            .location
            .coordinates()
            .unwrap_or((FALLBACK_LATITUDE, FALLBACK_LONGITUDE));
        self.client.test_connection(latitude, longitude).await
    }
}
