use crate::ui::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Bordered value readout with a horizontal fill bar underneath
pub struct GaugeWidget<'a> {
    title: &'a str,
    value: Option<f64>,
    unit: &'a str,
    scale_min: f64,
    scale_max: f64,
    bands: Vec<(f64, Color)>,
    precision: usize,
}

impl<'a> GaugeWidget<'a> {
    pub fn new(title: &'a str, value: Option<f64>, unit: &'a str) -> Self {
        Self {
            title,
            value,
            unit,
            scale_min: 0.0,
            scale_max: 100.0,
            bands: Vec::new(),
            precision: 0,
        }
    }

    pub fn scale(mut self, min: f64, max: f64) -> Self {
        self.scale_min = min;
        self.scale_max = max;
        self
    }

    /// Color bands as (lower bound, color), checked highest-first
    pub fn bands(mut self, bands: Vec<(f64, Color)>) -> Self {
        self.bands = bands;
        self
    }

    pub fn precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    fn band_color(&self, value: f64) -> Color {
        for (bound, color) in self.bands.iter().rev() {
            if value >= *bound {
                return *color;
            }
        }
        Theme::FG
    }
}

impl Widget for GaugeWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height < 3 || area.width < 10 {
            return;
        }

        let block = Block::default()
            .title(self.title)
            .borders(Borders::ALL)
            .border_style(Theme::border());

        let inner = block.inner(area);
        block.render(area, buf);

        let value = match self.value {
            Some(v) => v,
            None => {
                Paragraph::new(Line::from(Span::styled("N/A", Theme::dim()))).render(inner, buf);
                return;
            }
        };

        let color = self.band_color(value);
        let readout = format!("{:.prec$}{}", value, self.unit, prec = self.precision);
        Paragraph::new(Line::from(Span::styled(readout, Style::default().fg(color))))
            .render(inner, buf);

        if inner.height < 2 {
            return;
        }

        let span = self.scale_max - self.scale_min;
        let ratio = ((value - self.scale_min) / span).clamp(0.0, 1.0);
        let filled = (inner.width as f64 * ratio) as u16;
        let bar_y = inner.y + 1;

        for x in inner.x..inner.x + inner.width {
            let ch = if x < inner.x + filled { '█' } else { '░' };
            buf[(x, bar_y)].set_char(ch).set_fg(color);
        }
    }
}

pub fn temperature_gauge(title: &str, value: Option<f64>) -> GaugeWidget<'_> {
    GaugeWidget::new(title, value, "°C")
        .scale(-10.0, 45.0)
        .precision(1)
        .bands(vec![
            (-10.0, Theme::TEMP_COLD),
            (10.0, Theme::TEMP_COOL),
            (18.0, Theme::TEMP_WARM),
            (30.0, Theme::TEMP_HOT),
        ])
}

pub fn humidity_gauge(title: &str, value: Option<f64>) -> GaugeWidget<'_> {
    GaugeWidget::new(title, value, "%").bands(vec![
        (0.0, Theme::SUCCESS),
        (80.0, Theme::WARNING),
        (90.0, Theme::ERROR),
    ])
}

pub fn wind_gauge(title: &str, value: Option<f64>) -> GaugeWidget<'_> {
    GaugeWidget::new(title, value, " km/h")
        .scale(0.0, 60.0)
        .bands(vec![
            (0.0, Theme::SUCCESS),
            (15.0, Theme::WARNING),
            (30.0, Theme::ERROR),
        ])
}

pub fn moisture_gauge(title: &str, value: Option<f64>) -> GaugeWidget<'_> {
    GaugeWidget::new(title, value, "%").bands(vec![
        (0.0, Theme::MOISTURE_DRY),
        (50.0, Theme::MOISTURE_OK),
        (85.0, Theme::MOISTURE_WET),
    ])
}
