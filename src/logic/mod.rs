pub mod aggregate;
pub mod rules;
pub mod weather_service;

pub use rules::AdvisoryEngine;
pub use weather_service::{WeatherService, WeatherSnapshot};
