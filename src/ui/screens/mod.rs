pub mod advisories;
pub mod dashboard;
pub mod forecast;

pub use advisories::AdvisoriesScreen;
pub use dashboard::DashboardScreen;
pub use forecast::ForecastScreen;
