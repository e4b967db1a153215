use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AdvisoryCategory {
    Irrigation,
    RainWarning,
    SprayWindow,
    ThunderstormAlert,
    HeatAlert,
}

impl AdvisoryCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            AdvisoryCategory::Irrigation => "Irrigation",
            AdvisoryCategory::RainWarning => "Rain Warning",
            AdvisoryCategory::SprayWindow => "Spray Window",
            AdvisoryCategory::ThunderstormAlert => "Thunderstorm Alert",
            AdvisoryCategory::HeatAlert => "Heat Alert",
        }
    }
}

impl std::fmt::Display for AdvisoryCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Advisory card color, mirroring the severity palette of the web front-end
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AdvisoryColor {
    Green,
    Yellow,
    Orange,
    Blue,
    Red,
}

impl AdvisoryColor {
    pub fn as_str(&self) -> &'static str {
        match self {
            AdvisoryColor::Green => "Green",
            AdvisoryColor::Yellow => "Yellow",
            AdvisoryColor::Orange => "Orange",
            AdvisoryColor::Blue => "Blue",
            AdvisoryColor::Red => "Red",
        }
    }

    pub fn color(&self) -> ratatui::style::Color {
        use ratatui::style::Color;
        match self {
            AdvisoryColor::Green => Color::Green,
            AdvisoryColor::Yellow => Color::Yellow,
            AdvisoryColor::Orange => Color::LightRed,
            AdvisoryColor::Blue => Color::Blue,
            AdvisoryColor::Red => Color::Red,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            AdvisoryColor::Green => "✓",
            AdvisoryColor::Yellow => "→",
            AdvisoryColor::Orange => "⚠",
            AdvisoryColor::Blue => "ℹ",
            AdvisoryColor::Red => "!",
        }
    }
}

/// A derived recommendation or alert surfaced to the farmer.
/// Recomputed on every evaluation; never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Advisory {
    pub category: AdvisoryCategory,
    pub color: AdvisoryColor,
    pub title: String,
    pub message: String,
}

impl Advisory {
    pub fn new(
        category: AdvisoryCategory,
        color: AdvisoryColor,
        title: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            category,
            color,
            title: title.into(),
            message: message.into(),
        }
    }
}
