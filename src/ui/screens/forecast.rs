use crate::logic::WeatherSnapshot;
use crate::ui::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, Widget},
};

pub struct ForecastScreen<'a> {
    pub snapshot: Option<&'a WeatherSnapshot>,
}

impl<'a> ForecastScreen<'a> {
    pub fn new(snapshot: Option<&'a WeatherSnapshot>) -> Self {
        Self { snapshot }
    }
}

impl Widget for ForecastScreen<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Title
                Constraint::Min(9),    // Outlook table
                Constraint::Length(1), // Nav
            ])
            .split(area);

        let title = Line::from(vec![
            Span::styled("7-Day Forecast", Theme::title()),
            Span::styled(
                self.snapshot
                    .map(|s| format!(" - {}", s.place))
                    .unwrap_or_default(),
                Theme::dim(),
            ),
        ]);
        Paragraph::new(title).render(chunks[0], buf);

        self.render_outlook(chunks[1], buf);

        let nav = Line::from(vec![
            Span::styled("[r]", Theme::nav_key()),
            Span::styled("Refresh ", Theme::nav_label()),
            Span::styled("[1-3]", Theme::nav_key()),
            Span::styled("Screens ", Theme::nav_label()),
            Span::styled("[Esc]", Theme::nav_key()),
            Span::styled("Back", Theme::nav_label()),
        ]);
        Paragraph::new(nav).render(chunks[2], buf);
    }
}

impl ForecastScreen<'_> {
    fn render_outlook(&self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title("Daily Outlook")
            .borders(Borders::ALL)
            .border_style(Theme::border());

        let inner = block.inner(area);
        block.render(area, buf);

        let outlook = match self.snapshot {
            Some(s) if !s.outlook.is_empty() => &s.outlook,
            _ => {
                Paragraph::new(Span::styled("No forecast data available", Theme::dim()))
                    .render(inner, buf);
                return;
            }
        };

        let header = Row::new(vec![
            Cell::from("Day"),
            Cell::from("Conditions"),
            Cell::from("Temp"),
            Cell::from("Rain"),
            Cell::from("Humidity"),
        ])
        .style(Theme::header());

        let rows: Vec<Row> = outlook
            .iter()
            .map(|day| {
                let temp_color = Theme::temp_color(day.mean_temp_c);
                let rain_color = Theme::rain_color(day.max_precipitation_prob);
                let sky_style = if day.dominant_condition.has_precipitation() {
                    Style::default().fg(Theme::HIGHLIGHT)
                } else {
                    Theme::normal()
                };

                Row::new(vec![
                    Cell::from(day.label.clone()).style(Theme::header()),
                    Cell::from(format!(
                        "{} {}",
                        day.dominant_condition.symbol(),
                        day.dominant_condition.as_str()
                    ))
                    .style(sky_style),
                    Cell::from(format!("{:.0}°C", day.mean_temp_c))
                        .style(Style::default().fg(temp_color)),
                    Cell::from(format!("{:.0}%", day.max_precipitation_prob * 100.0))
                        .style(Style::default().fg(rain_color)),
                    Cell::from(format!("{:.0}%", day.mean_humidity_pct)),
                ])
            })
            .collect();

        let widths = [
            Constraint::Length(10),
            Constraint::Length(18),
            Constraint::Length(8),
            Constraint::Length(8),
            Constraint::Length(10),
        ];

        Table::new(rows, widths).header(header).render(inner, buf);
    }
}
