pub mod gauge;

pub use gauge::{humidity_gauge, moisture_gauge, temperature_gauge, wind_gauge};
