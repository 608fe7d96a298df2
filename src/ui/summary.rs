//! Summary panel rendering.
//!
//! Shows the current mean coloured by tier and the active alert, or a
//! placeholder while nothing has been recorded.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::App;
use crate::data::{format_mean, Stats};

/// Text shown instead of results while the log is empty.
pub const EMPTY_PLACEHOLDER: &str = "Enter at least one value to see results.";

/// Render the summary panel for a non-empty session.
pub fn render(frame: &mut Frame, app: &App, stats: &Stats, area: Rect) {
    let alert_line = match stats.alert {
        Some(ref alert) => Line::from(Span::styled(alert.message(), app.theme.alert_style(alert))),
        None => Line::from(Span::styled(
            "No alerts",
            Style::default().add_modifier(Modifier::DIM),
        )),
    };

    let lines = vec![
        Line::from(vec![
            Span::raw("Current mean: "),
            Span::styled(format_mean(stats.mean), app.theme.tier_style(stats.tier)),
            Span::styled(
                format!("  ({} tier, {} rounds)", stats.tier.label(), stats.count),
                Style::default().add_modifier(Modifier::DIM),
            ),
        ]),
        alert_line,
    ];

    let block = Block::default()
        .title(" Summary ")
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(Style::default().fg(app.theme.border));

    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center).block(block),
        area,
    );
}

/// Render the placeholder shown before the first value is recorded.
pub fn render_placeholder(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(Style::default().fg(app.theme.border));

    let paragraph = Paragraph::new(EMPTY_PLACEHOLDER)
        .alignment(Alignment::Center)
        .style(Style::default().fg(app.theme.info))
        .block(block);

    frame.render_widget(paragraph, area);
}
