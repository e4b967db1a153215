use crate::logic::WeatherSnapshot;
use crate::models::Advisory;
use crate::ui::components::{humidity_gauge, moisture_gauge, temperature_gauge, wind_gauge};
use crate::ui::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

pub struct DashboardScreen<'a> {
    pub snapshot: Option<&'a WeatherSnapshot>,
    pub advisories: &'a [Advisory],
    pub status: Option<&'a str>,
}

impl<'a> DashboardScreen<'a> {
    pub fn new(snapshot: Option<&'a WeatherSnapshot>, advisories: &'a [Advisory]) -> Self {
        Self {
            snapshot,
            advisories,
            status: None,
        }
    }

    pub fn with_status(mut self, status: Option<&'a str>) -> Self {
        self.status = status;
        self
    }
}

impl Widget for DashboardScreen<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Title
                Constraint::Length(1), // Location
                Constraint::Length(5), // Current conditions gauges
                Constraint::Min(6),    // Advisories
                Constraint::Length(1), // Status
                Constraint::Length(1), // Nav
            ])
            .split(area);

        // Title
        let updated = self
            .snapshot
            .map(|s| s.fetched_at.format("%Y-%m-%d %H:%M UTC").to_string())
            .unwrap_or_else(|| "Never".to_string());
        let title = Line::from(vec![
            Span::styled("Mazao Weather", Theme::title()),
            Span::styled(" - Last updated: ", Theme::dim()),
            Span::styled(updated, Theme::normal()),
        ]);
        Paragraph::new(title).render(chunks[0], buf);

        // Location
        let location = match self.snapshot {
            Some(s) => {
                let mut spans = vec![
                    Span::styled("📍 ", Theme::dim()),
                    Span::styled(s.place.clone(), Theme::highlight()),
                    Span::styled(
                        format!("  ({:.4}, {:.4})", s.latitude, s.longitude),
                        Theme::dim(),
                    ),
                ];
                if s.used_fallback {
                    spans.push(Span::styled("  [default location]", Theme::warning()));
                }
                Line::from(spans)
            }
            None => Line::from(Span::styled("No weather data yet", Theme::dim())),
        };
        Paragraph::new(location).render(chunks[1], buf);

        // Gauges
        self.render_gauges(chunks[2], buf);

        // Advisories
        self.render_advisories(chunks[3], buf);

        // Status
        if let Some(status) = self.status {
            Paragraph::new(Span::styled(status, Theme::warning())).render(chunks[4], buf);
        }

        // Navigation
        let nav = Line::from(vec![
            Span::styled("[r]", Theme::nav_key()),
            Span::styled("Refresh ", Theme::nav_label()),
            Span::styled("[1-3]", Theme::nav_key()),
            Span::styled("Screens ", Theme::nav_label()),
            Span::styled("[q]", Theme::nav_key()),
            Span::styled("Quit", Theme::nav_label()),
        ]);
        Paragraph::new(nav).render(chunks[5], buf);
    }
}

impl DashboardScreen<'_> {
    fn render_gauges(&self, area: Rect, buf: &mut Buffer) {
        let gauge_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(25),
                Constraint::Percentage(25),
                Constraint::Percentage(25),
                Constraint::Percentage(25),
            ])
            .split(area);

        let current = self.snapshot.map(|s| &s.current);

        temperature_gauge("Temperature", current.map(|c| c.temp_c)).render(gauge_chunks[0], buf);
        humidity_gauge("Humidity", current.map(|c| c.humidity_pct)).render(gauge_chunks[1], buf);
        wind_gauge("Wind", current.map(|c| c.wind_speed_kmh)).render(gauge_chunks[2], buf);
        moisture_gauge(
            "Soil Moisture (est)",
            current.map(|c| c.estimated_soil_moisture_pct() as f64),
        )
        .render(gauge_chunks[3], buf);
    }

    fn render_advisories(&self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title("Advisories")
            .borders(Borders::ALL)
            .border_style(Theme::border());

        let inner = block.inner(area);
        block.render(area, buf);

        if self.advisories.is_empty() {
            let text = if self.snapshot.is_some() {
                "No advisories for the current outlook"
            } else {
                "Waiting for weather data"
            };
            Paragraph::new(Span::styled(text, Theme::dim())).render(inner, buf);
            return;
        }

        let mut lines = Vec::new();
        for advisory in self.advisories {
            let color = advisory.color.color();
            lines.push(Line::from(vec![
                Span::styled(
                    format!("{} {}: ", advisory.color.symbol(), advisory.title),
                    Style::default().fg(color),
                ),
                Span::styled(advisory.message.clone(), Theme::normal()),
            ]));
        }

        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .render(inner, buf);
    }
}
