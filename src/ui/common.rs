//! Common UI components shared across the screen.
//!
//! This module contains the header bar, status bar, and help overlay.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::app::App;
use crate::data::format_mean;

/// Render the header bar with the session overview.
///
/// Displays: title, number of rounds, current mean coloured by tier.
pub fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let mut spans = vec![
        Span::styled(" RISEWATCH ", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw("│ "),
        Span::styled(
            format!("{}", app.log.len()),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw(" rounds │ mean "),
    ];

    match app.stats() {
        Ok(stats) => spans.push(Span::styled(
            format_mean(stats.mean),
            app.theme.tier_style(stats.tier),
        )),
        Err(_) => spans.push(Span::styled("-", Style::default().add_modifier(Modifier::DIM))),
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Render the status bar at the bottom.
///
/// Shows a temporary status message if one is active, otherwise the
/// available controls.
pub fn render_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    if let Some(msg) = app.get_status_message() {
        let paragraph =
            Paragraph::new(format!(" {} ", msg)).style(Style::default().fg(app.theme.highlight));
        frame.render_widget(paragraph, area);
        return;
    }

    let status = format!(
        " Enter:add Ctrl+S:export to {} ↑↓:history F1:help Esc:quit",
        app.export_path.display()
    );
    let paragraph = Paragraph::new(status).style(Style::default().add_modifier(Modifier::DIM));

    frame.render_widget(paragraph, area);
}

/// Render the help overlay with usage notes and keyboard shortcuts.
///
/// Displayed as a centered modal on top of the main screen.
pub fn render_help(frame: &mut Frame, app: &App, area: Rect) {
    let bold = Style::default().add_modifier(Modifier::BOLD);
    let help_text = vec![
        Line::from(vec![Span::styled("How to use", app.theme.header)]),
        Line::from(""),
        Line::from("  Type how far the plane rose (e.g. 1.50, 2.30)"),
        Line::from("  and press Enter to record it. The mean, trend"),
        Line::from("  chart, alerts and history update right away."),
        Line::from("  Export the history as CSV to keep the data."),
        Line::from(""),
        Line::from(vec![Span::styled(" Input", bold)]),
        Line::from("  Enter       Add value"),
        Line::from("  Backspace   Delete character"),
        Line::from("  Ctrl+U      Clear input"),
        Line::from(""),
        Line::from(vec![Span::styled(" History", bold)]),
        Line::from("  ↑/↓         Move selection"),
        Line::from("  PgUp/PgDn   Jump 10 rows"),
        Line::from("  Home/End    Jump to first/last"),
        Line::from(""),
        Line::from(vec![Span::styled(" General", bold)]),
        Line::from("  Ctrl+S      Export to CSV"),
        Line::from("  Esc         Clear input / quit"),
        Line::from("  Ctrl+C      Quit"),
        Line::from(""),
        Line::from(vec![Span::styled(
            "Press any key to close",
            Style::default().add_modifier(Modifier::DIM),
        )]),
    ];

    let block = Block::default()
        .title(" Help ")
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(Style::default().fg(app.theme.highlight));

    let paragraph = Paragraph::new(help_text).block(block).wrap(Wrap { trim: false });

    // Center the help overlay - responsive to terminal size
    let help_width = 54u16.min(area.width.saturating_sub(4));
    let help_height = 26u16.min(area.height.saturating_sub(2));
    let x = area.x + (area.width.saturating_sub(help_width)) / 2;
    let y = area.y + (area.height.saturating_sub(help_height)) / 2;
    let help_area = Rect::new(x, y, help_width, help_height);

    // Clear the area behind the help
    frame.render_widget(Clear, help_area);
    frame.render_widget(paragraph, help_area);
}
