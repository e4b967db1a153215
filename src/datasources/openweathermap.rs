use crate::config::OpenWeatherMapConfig;
use crate::error::{MazaoError, Result};
use crate::models::{CurrentConditions, ForecastSample, WeatherCondition};
use chrono::{DateTime, FixedOffset, Offset, Utc};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::Duration;

const API_BASE_URL: &str = "https://api.openweathermap.org/data/2.5";
const GEO_BASE_URL: &str = "https://api.openweathermap.org/geo/1.0";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);
const MPS_TO_KMH: f64 = 3.6;

pub struct OpenWeatherMapClient {
    client: reqwest::Client,
    config: OpenWeatherMapConfig,
}

// OpenWeatherMap API response structures
#[derive(Debug, Deserialize)]
struct OwmPlace {
    name: String,
    country: String,
}

#[derive(Debug, Deserialize)]
struct OwmCurrentResponse {
    main: OwmMain,
    wind: OwmWind,
    #[serde(default)]
    rain: Option<OwmRain>,
    weather: Vec<OwmWeather>,
}

#[derive(Debug, Deserialize)]
struct OwmMain {
    temp: f64,
    humidity: f64,
}

#[derive(Debug, Deserialize)]
struct OwmWind {
    speed: f64, // m/s with units=metric
}

#[derive(Debug, Deserialize)]
struct OwmRain {
    #[serde(rename = "1h", default)]
    one_hour: f64,
}

#[derive(Debug, Deserialize)]
struct OwmWeather {
    id: u32,
}

#[derive(Debug, Deserialize)]
struct OwmForecastResponse {
    list: Vec<OwmForecastItem>,
    city: OwmCity,
}

#[derive(Debug, Deserialize)]
struct OwmForecastItem {
    dt: i64,
    main: OwmMain,
    #[serde(default)]
    pop: f64, // probability of precipitation
    weather: Vec<OwmWeather>,
}

#[derive(Debug, Deserialize)]
struct OwmCity {
    #[serde(default)]
    timezone: i32, // UTC offset in seconds
}

/// Forecast samples plus the location's UTC offset, as reported by the API
pub struct ForecastPayload {
    pub samples: Vec<ForecastSample>,
    pub utc_offset: FixedOffset,
}

impl OpenWeatherMapClient {
    pub fn new(config: OpenWeatherMapConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    /// Name the place behind a coordinate, e.g. "Bungoma, KE"
    pub async fn reverse_geocode(&self, latitude: f64, longitude: f64) -> Result<String> {
        let url = format!(
            "{}/reverse?lat={}&lon={}&limit=1&appid={}",
            GEO_BASE_URL, latitude, longitude, self.config.api_key
        );

        let places: Vec<OwmPlace> = self.get_json(&url).await?;
        places
            .first()
            .map(|p| format!("{}, {}", p.name, p.country))
            .ok_or_else(|| {
                MazaoError::DataSourceUnavailable("reverse geocoding returned no match".into())
            })
    }

    /// Fetch the current-conditions reading for a coordinate
    pub async fn fetch_current(&self, latitude: f64, longitude: f64) -> Result<CurrentConditions> {
        let url = format!(
            "{}/weather?lat={}&lon={}&appid={}&units=metric",
            API_BASE_URL, latitude, longitude, self.config.api_key
        );

        let response: OwmCurrentResponse = self.get_json(&url).await?;
        Ok(convert_current(response))
    }

    /// Fetch the 5-day/3-hour forecast for a coordinate
    pub async fn fetch_forecast(&self, latitude: f64, longitude: f64) -> Result<ForecastPayload> {
        let url = format!(
            "{}/forecast?lat={}&lon={}&appid={}&units=metric",
            API_BASE_URL, latitude, longitude, self.config.api_key
        );

        let response: OwmForecastResponse = self.get_json(&url).await?;

        let samples: Vec<ForecastSample> = response.list.iter().map(convert_forecast_item).collect();
        let utc_offset =
            FixedOffset::east_opt(response.city.timezone).unwrap_or_else(|| Utc.fix());

        Ok(ForecastPayload {
            samples,
            utc_offset,
        })
    }

    /// Test connection to the OpenWeatherMap API
    pub async fn test_connection(&self, latitude: f64, longitude: f64) -> Result<bool> {
        let url = format!(
            "{}/weather?lat={}&lon={}&appid={}&units=metric",
            API_BASE_URL, latitude, longitude, self.config.api_key
        );

        let response = self
            .client
            .get(&url)
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await
            .map_err(|e| MazaoError::DataSourceUnavailable(format!("OpenWeatherMap: {}", e)))?;

        Ok(response.status().is_success())
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let response = self
            .client
            .get(url)
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await
            .map_err(|e| MazaoError::DataSourceUnavailable(format!("OpenWeatherMap: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(MazaoError::DataSourceUnavailable(format!(
                "OpenWeatherMap returned {}: {}",
                status, body
            )));
        }

        response.json().await.map_err(|e| {
            MazaoError::DataSourceUnavailable(format!(
                "Failed to parse OpenWeatherMap response: {}",
                e
            ))
        })
    }
}

fn convert_current(response: OwmCurrentResponse) -> CurrentConditions {
    let condition = response
        .weather
        .first()
        .map(|w| WeatherCondition::from_owm_id(w.id))
        .unwrap_or_default();

    CurrentConditions {
        temp_c: response.main.temp,
        humidity_pct: response.main.humidity,
        wind_speed_kmh: response.wind.speed * MPS_TO_KMH,
        rainfall_mm: response.rain.map(|r| r.one_hour).unwrap_or(0.0),
        condition,
    }
}

fn convert_forecast_item(item: &OwmForecastItem) -> ForecastSample {
    let timestamp = DateTime::from_timestamp(item.dt, 0).unwrap_or_else(Utc::now);

    let condition = item
        .weather
        .first()
        .map(|w| WeatherCondition::from_owm_id(w.id))
        .unwrap_or_default();

    ForecastSample {
        timestamp,
        temp_c: item.main.temp,
        humidity_pct: item.main.humidity,
        precipitation_prob: item.pop,
        condition,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_current_weather_response() {
        let raw = r#"{
            "main": {"temp": 24.3, "humidity": 65},
            "wind": {"speed": 3.5},
            "rain": {"1h": 2.3},
            "weather": [{"id": 802, "main": "Clouds", "description": "scattered clouds"}]
        }"#;
        let response: OwmCurrentResponse = serde_json::from_str(raw).unwrap();
        let current = convert_current(response);

        assert!((current.temp_c - 24.3).abs() < 1e-9);
        assert!((current.humidity_pct - 65.0).abs() < 1e-9);
        assert!((current.wind_speed_kmh - 12.6).abs() < 1e-9);
        assert!((current.rainfall_mm - 2.3).abs() < 1e-9);
        assert_eq!(current.condition, WeatherCondition::Clouds);
    }

    #[test]
    fn missing_rain_block_means_no_rainfall() {
        let raw = r#"{
            "main": {"temp": 30.0, "humidity": 40},
            "wind": {"speed": 1.0},
            "weather": [{"id": 800}]
        }"#;
        let response: OwmCurrentResponse = serde_json::from_str(raw).unwrap();
        let current = convert_current(response);

        assert_eq!(current.rainfall_mm, 0.0);
        assert_eq!(current.condition, WeatherCondition::Clear);
    }

    #[test]
    fn converts_forecast_response() {
        let raw = r#"{
            "list": [
                {"dt": 1720422000, "main": {"temp": 22.0, "humidity": 70}, "pop": 0.35,
                 "weather": [{"id": 500}]},
                {"dt": 1720432800, "main": {"temp": 25.5, "humidity": 60},
                 "weather": [{"id": 800}]}
            ],
            "city": {"timezone": 10800}
        }"#;
        let response: OwmForecastResponse = serde_json::from_str(raw).unwrap();
        let offset = FixedOffset::east_opt(response.city.timezone).unwrap();
        let samples: Vec<ForecastSample> = response.list.iter().map(convert_forecast_item).collect();

        assert_eq!(offset.local_minus_utc(), 3 * 3600);
        assert_eq!(samples.len(), 2);
        assert_eq!(samples[0].timestamp.timestamp(), 1720422000);
        assert!((samples[0].precipitation_prob - 0.35).abs() < 1e-9);
        assert_eq!(samples[0].condition, WeatherCondition::Rain);
        // pop missing on the second item defaults to zero
        assert_eq!(samples[1].precipitation_prob, 0.0);
        assert_eq!(samples[1].condition, WeatherCondition::Clear);
    }

    #[test]
    fn client_creation() {
        let client = OpenWeatherMapClient::new(OpenWeatherMapConfig {
            api_key: "test_key".to_string(),
        });
        assert_eq!(client.config.api_key, "test_key");
    }
}
