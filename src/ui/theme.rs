//! Theme configuration for the TUI.
//!
//! Supports light and dark themes with automatic terminal detection.

use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::block::BorderType;
use serde::Deserialize;

use crate::data::{Alert, RowClass, Tier};

/// Orange used for the mid tier (not in the basic 16-colour palette).
const ORANGE: Color = Color::Rgb(255, 165, 0);

/// Which theme to use, as chosen in settings or on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ThemeChoice {
    /// Pick light or dark from the terminal background.
    #[default]
    Auto,
    Dark,
    Light,
}

/// Color and style theme for the TUI.
///
/// Use [`Theme::auto_detect()`] for automatic theme selection based on
/// terminal background, or [`Theme::dark()`]/[`Theme::light()`] explicitly.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Accent color for highlights and active elements.
    pub highlight: Color,
    /// Color for borders and separators.
    pub border: Color,
    /// Style for header rows in tables.
    pub header: Style,
    /// Style for the selected history row.
    pub selected: Style,
    /// Mean color in the high tier.
    pub tier_high: Color,
    /// Mean color in the mid tier.
    pub tier_mid: Color,
    /// Mean color in the low tier.
    pub tier_low: Color,
    /// Row background for observations below the row threshold.
    pub row_below: Color,
    /// Row background for observations at or above the row threshold.
    pub row_above: Color,
    /// Color for the consecutive-low alert banner.
    pub warning: Color,
    /// Color for the single-low alert banner.
    pub info: Color,
    /// Color for inline input errors.
    pub error: Color,
    /// Trend line color.
    pub chart_line: Color,
    /// Mean reference line color.
    pub chart_mean: Color,
    /// Border style (rounded, plain, etc.).
    pub border_type: BorderType,
}

impl Theme {
    /// Create a dark theme suitable for dark terminal backgrounds.
    pub fn dark() -> Self {
        Self {
            highlight: Color::Cyan,
            border: Color::Gray,
            header: Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            selected: Style::default().add_modifier(Modifier::BOLD | Modifier::REVERSED),
            tier_high: Color::Green,
            tier_mid: ORANGE,
            tier_low: Color::Red,
            row_below: Color::Red,
            row_above: Color::LightGreen,
            warning: Color::Yellow,
            info: Color::LightBlue,
            error: Color::LightRed,
            chart_line: Color::Cyan,
            chart_mean: Color::Blue,
            border_type: BorderType::Rounded,
        }
    }

    /// Create a light theme suitable for light terminal backgrounds.
    pub fn light() -> Self {
        Self {
            highlight: Color::Blue,
            border: Color::DarkGray,
            header: Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
            selected: Style::default().add_modifier(Modifier::BOLD | Modifier::REVERSED),
            tier_high: Color::Green,
            tier_mid: ORANGE,
            tier_low: Color::Red,
            row_below: Color::Red,
            row_above: Color::LightGreen,
            warning: Color::Rgb(184, 134, 11),
            info: Color::Blue,
            error: Color::Red,
            chart_line: Color::Black,
            chart_mean: Color::Blue,
            border_type: BorderType::Rounded,
        }
    }

    /// Auto-detect based on terminal background
    pub fn auto_detect() -> Self {
        // Use terminal-light crate to detect background luminance
        match terminal_light::luma() {
            Ok(luma) if luma > 0.5 => Self::light(),
            _ => Self::dark(),
        }
    }

    /// Resolve a [`ThemeChoice`] into a theme.
    pub fn from_choice(choice: ThemeChoice) -> Self {
        match choice {
            ThemeChoice::Auto => Self::auto_detect(),
            ThemeChoice::Dark => Self::dark(),
            ThemeChoice::Light => Self::light(),
        }
    }

    /// Get style for the mean in a tier
    pub fn tier_style(&self, tier: Tier) -> Style {
        let color = match tier {
            Tier::High => self.tier_high,
            Tier::Mid => self.tier_mid,
            Tier::Low => self.tier_low,
        };
        Style::default().fg(color).add_modifier(Modifier::BOLD)
    }

    /// Get the tinted style for a history row
    pub fn row_style(&self, class: RowClass) -> Style {
        match class {
            RowClass::BelowThreshold => Style::default().bg(self.row_below).fg(Color::White),
            RowClass::AtOrAboveThreshold => Style::default().bg(self.row_above).fg(Color::Black),
        }
    }

    /// Get the banner style for an alert
    pub fn alert_style(&self, alert: &Alert) -> Style {
        match alert {
            Alert::ConsecutiveLow { .. } => {
                Style::default().fg(self.warning).add_modifier(Modifier::BOLD)
            }
            Alert::SingleLow { .. } => Style::default().fg(self.info),
        }
    }
}
