//! Input field rendering.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::App;

/// Render the value input box.
///
/// A rejected entry turns the border into the error colour and shows the
/// message along the bottom edge.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let border_style = if app.input_error.is_some() {
        Style::default().fg(app.theme.error)
    } else {
        Style::default().fg(app.theme.highlight)
    };

    let mut block = Block::default()
        .title(" Rise time (e.g. 1.50) ")
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(border_style);

    if let Some(ref err) = app.input_error {
        block = block.title_bottom(Line::from(Span::styled(
            format!(" {} ", err),
            Style::default().fg(app.theme.error).add_modifier(Modifier::BOLD),
        )));
    }

    let line = Line::from(vec![
        Span::styled("> ", Style::default().fg(app.theme.highlight)),
        Span::raw(app.input.as_str()),
    ]);
    frame.render_widget(Paragraph::new(line).block(block), area);

    // Place the cursor after the typed text, inside the border
    if !app.show_help && area.width > 4 && area.height > 2 {
        let typed = app.input.chars().count() as u16;
        let x = (area.x + 3 + typed).min(area.x + area.width - 2);
        frame.set_cursor_position((x, area.y + 1));
    }
}
