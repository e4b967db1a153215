use crate::logic::{AdvisoryEngine, WeatherSnapshot};
use crate::models::Advisory;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Dashboard,
    Forecast,
    Advisories,
}

impl Screen {
    pub fn from_key(c: char) -> Option<Self> {
        match c {
            '1' => Some(Screen::Dashboard),
            '2' => Some(Screen::Forecast),
            '3' => Some(Screen::Advisories),
            _ => None,
        }
    }
}

pub struct AdvisoriesState {
    pub selected_index: usize,
}

impl AdvisoriesState {
    pub fn new() -> Self {
        Self { selected_index: 0 }
    }

    pub fn next(&mut self, max: usize) {
        if max > 0 && self.selected_index < max - 1 {
            self.selected_index += 1;
        }
    }

    pub fn prev(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }
}

pub struct App {
    pub screen: Screen,
    pub should_quit: bool,

    // Data
    pub snapshot: Option<WeatherSnapshot>,
    pub advisories: Vec<Advisory>,

    // Screen states
    pub advisories_state: AdvisoriesState,

    // Services
    pub engine: AdvisoryEngine,

    // UI state
    pub status_message: Option<String>,
    pub refreshing: bool,
    pub needs_refresh: bool,
}

impl App {
    pub fn new() -> Self {
        Self {
            screen: Screen::Dashboard,
            should_quit: false,
            snapshot: None,
            advisories: Vec::new(),
            advisories_state: AdvisoriesState::new(),
            engine: AdvisoryEngine::new(),
            status_message: None,
            refreshing: false,
            needs_refresh: false,
        }
    }

    pub fn switch_screen(&mut self, screen: Screen) {
        self.screen = screen;
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn set_status(&mut self, message: &str) {
        self.status_message = Some(message.to_string());
    }

    pub fn request_refresh(&mut self) {
        self.needs_refresh = true;
        self.set_status("Refreshing weather...");
    }

    pub fn update_weather(&mut self, snapshot: WeatherSnapshot) {
        self.advisories = self
            .engine
            .evaluate(&snapshot.current, &snapshot.outlook);

        if snapshot.used_fallback {
            self.set_status(&format!(
                "Showing default location ({}) - set your farm coordinates in config",
                snapshot.place
            ));
        }

        self.snapshot = Some(snapshot);

        if self.advisories_state.selected_index >= self.advisories.len() {
            self.advisories_state.selected_index = 0;
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CurrentConditions, WeatherCondition};
    use chrono::Utc;

    fn snapshot(used_fallback: bool) -> WeatherSnapshot {
        WeatherSnapshot {
            fetched_at: Utc::now(),
            place: "Bungoma, KE".to_string(),
            latitude: 0.5635,
            longitude: 34.5606,
            used_fallback,
            current: CurrentConditions {
                temp_c: 24.0,
                humidity_pct: 90.0,
                wind_speed_kmh: 12.0,
                rainfall_mm: 3.0,
                condition: WeatherCondition::Clouds,
            },
            outlook: Vec::new(),
        }
    }

    #[test]
    fn fallback_snapshot_sets_a_notice_and_still_evaluates() {
        let mut app = App::new();
        app.update_weather(snapshot(true));

        let status = app.status_message.as_deref().unwrap_or_default();
        assert!(status.contains("default location"));
        // advisories still derive from the fallback data (wet soil -> green)
        assert!(!app.advisories.is_empty());
    }

    #[test]
    fn configured_snapshot_leaves_status_untouched() {
        let mut app = App::new();
        app.update_weather(snapshot(false));
        assert!(app.status_message.is_none());
    }
}
